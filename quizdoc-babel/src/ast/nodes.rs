//! Core data structures for the structured document tree.
//!
//! Invariants:
//! - A `Document` contains only block-kind children.
//! - A `Paragraph` contains only inline-kind children.
//! - Atomic kinds (`InlineMath`, `BlockMath`, `Blank`) never carry children
//!   and are never merged with same-kind neighbors.

/// Represents the root of a question document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Block>,
}

/// A block-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Math(BlockMath),
}

/// A paragraph of inline content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub children: Vec<Inline>,
}

/// A display-style math expression. Atomic: edited as a single unit.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMath {
    pub latex: String,
}

/// An inline-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(TextRun),
    Math(InlineMath),
    /// A fill-in-the-blank placeholder. Carries no data; its identity is
    /// purely positional (depth-first traversal order).
    Blank,
}

/// A run of plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
}

/// An inline math expression. Atomic: not editable in place.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineMath {
    pub latex: String,
}

impl Document {
    pub fn new(children: Vec<Block>) -> Self {
        Document { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Count `Blank` nodes in depth-first, left-to-right order.
    ///
    /// Traversal order is what assigns blank ordinals everywhere else, so
    /// this must visit children exactly in document order.
    pub fn count_blanks(&self) -> usize {
        self.children
            .iter()
            .map(|block| match block {
                Block::Paragraph(para) => para
                    .children
                    .iter()
                    .filter(|inline| matches!(inline, Inline::Blank))
                    .count(),
                Block::Math(_) => 0,
            })
            .sum()
    }

    /// Extract the plain text of the document for previews and summaries.
    ///
    /// Math nodes contribute their LaTeX source, blanks contribute nothing,
    /// paragraphs are separated by a single newline.
    pub fn to_plain_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.children.len());
        for block in &self.children {
            match block {
                Block::Paragraph(para) => {
                    let mut line = String::new();
                    for inline in &para.children {
                        match inline {
                            Inline::Text(run) => line.push_str(&run.text),
                            Inline::Math(math) => line.push_str(&math.latex),
                            Inline::Blank => {}
                        }
                    }
                    lines.push(line);
                }
                Block::Math(math) => lines.push(math.latex.clone()),
            }
        }
        lines.join("\n")
    }
}

impl Paragraph {
    pub fn new(children: Vec<Inline>) -> Self {
        Paragraph { children }
    }
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        TextRun { text: text.into() }
    }
}

impl InlineMath {
    pub fn new(latex: impl Into<String>) -> Self {
        InlineMath { latex: latex.into() }
    }
}

impl BlockMath {
    pub fn new(latex: impl Into<String>) -> Self {
        BlockMath { latex: latex.into() }
    }
}

/// A list of nodes suitable for insertion at a cursor position.
///
/// Run conversion produces fragments, not documents: a single transcribed
/// paragraph yields inline nodes that splice into the paragraph under the
/// cursor, while multi-paragraph content yields whole blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Inline(Vec<Inline>),
    Blocks(Vec<Block>),
}

impl Fragment {
    pub fn is_empty(&self) -> bool {
        match self {
            Fragment::Inline(inlines) => inlines.is_empty(),
            Fragment::Blocks(blocks) => blocks.is_empty(),
        }
    }

    /// Promote the fragment to a list of blocks.
    ///
    /// Inline fragments are wrapped in a single paragraph. Used when a
    /// fragment becomes a standalone document rather than a cursor insertion.
    pub fn into_blocks(self) -> Vec<Block> {
        match self {
            Fragment::Inline(inlines) => {
                if inlines.is_empty() {
                    Vec::new()
                } else {
                    vec![Block::Paragraph(Paragraph::new(inlines))]
                }
            }
            Fragment::Blocks(blocks) => blocks,
        }
    }
}
