//! Edit transactions over the immutable document tree
//!
//! The tree is never mutated in place. A transaction is a value describing
//! one edit; applying it to the current tree yields a fresh tree, and the
//! editor host swaps the whole document. Failed applications leave the
//! current tree untouched.
//!
//! Positions are expressed as [`NodePath`]s — plain indices, never
//! references into a tree. Widget code holds paths, so replacing the tree
//! wholesale cannot leave anything dangling; a stale path at worst fails
//! its bounds check on the next transaction.

use crate::ast::{Block, Document, Fragment, Inline, Paragraph};
use std::fmt;

/// A positional address in the tree.
///
/// `block` indexes into the document's children; `inline`, when present,
/// indexes into that paragraph's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePath {
    pub block: usize,
    pub inline: Option<usize>,
}

impl NodePath {
    pub fn block(block: usize) -> Self {
        NodePath { block, inline: None }
    }

    pub fn inline(block: usize, inline: usize) -> Self {
        NodePath {
            block,
            inline: Some(inline),
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inline {
            Some(inline) => write!(f, "{}.{}", self.block, inline),
            None => write!(f, "{}", self.block),
        }
    }
}

/// Errors from applying a transaction
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// A path pointed outside the current tree
    PathOutOfBounds(NodePath),
    /// The node at the path is not the kind the transaction expects
    KindMismatch {
        at: NodePath,
        expected: &'static str,
    },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::PathOutOfBounds(path) => {
                write!(f, "Path {path} is outside the document")
            }
            EditError::KindMismatch { at, expected } => {
                write!(f, "Node at {at} is not {expected}")
            }
        }
    }
}

impl std::error::Error for EditError {}

/// A single committed edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    /// Replace the whole document
    Replace(Document),
    /// Splice a fragment in at a cursor position.
    ///
    /// Inline fragments need an inline cursor inside a paragraph. Block
    /// fragments insert at the block index when the cursor is a block
    /// position, or after the cursor's block when it is an inline position
    /// (the cursor paragraph is left intact rather than split).
    InsertFragment { at: NodePath, fragment: Fragment },
    /// Replace the LaTeX source of the math node at the path.
    ///
    /// This is the commit half of the math dialog: the widget opens with the
    /// node's current source and hands back the edited string.
    SetMathSource { at: NodePath, latex: String },
    /// Insert a blank placeholder at an inline cursor
    InsertBlank { at: NodePath },
    /// Remove the node at the path
    RemoveNode { at: NodePath },
}

impl Transaction {
    /// Apply the transaction to a tree, producing the next tree.
    pub fn apply(&self, doc: &Document) -> Result<Document, EditError> {
        match self {
            Transaction::Replace(next) => Ok(next.clone()),
            Transaction::InsertFragment { at, fragment } => {
                apply_insert_fragment(doc, *at, fragment)
            }
            Transaction::SetMathSource { at, latex } => apply_set_math(doc, *at, latex),
            Transaction::InsertBlank { at } => {
                apply_insert_inline(doc, *at, Inline::Blank)
            }
            Transaction::RemoveNode { at } => apply_remove(doc, *at),
        }
    }
}

fn apply_insert_fragment(
    doc: &Document,
    at: NodePath,
    fragment: &Fragment,
) -> Result<Document, EditError> {
    match fragment {
        Fragment::Inline(inlines) => {
            let inline_at = at.inline.ok_or(EditError::KindMismatch {
                at,
                expected: "an inline cursor",
            })?;
            let mut next = doc.clone();
            let paragraph = paragraph_mut(&mut next, at)?;
            if inline_at > paragraph.children.len() {
                return Err(EditError::PathOutOfBounds(at));
            }
            paragraph
                .children
                .splice(inline_at..inline_at, inlines.iter().cloned());
            Ok(next)
        }
        Fragment::Blocks(blocks) => {
            // An inline cursor drops the blocks after its paragraph.
            let block_at = match at.inline {
                Some(_) => at.block + 1,
                None => at.block,
            };
            if block_at > doc.children.len() {
                return Err(EditError::PathOutOfBounds(at));
            }
            let mut next = doc.clone();
            next.children
                .splice(block_at..block_at, blocks.iter().cloned());
            Ok(next)
        }
    }
}

fn apply_set_math(doc: &Document, at: NodePath, latex: &str) -> Result<Document, EditError> {
    let mut next = doc.clone();
    match at.inline {
        None => {
            let block = next
                .children
                .get_mut(at.block)
                .ok_or(EditError::PathOutOfBounds(at))?;
            match block {
                Block::Math(math) => {
                    math.latex = latex.to_string();
                    Ok(next)
                }
                _ => Err(EditError::KindMismatch {
                    at,
                    expected: "a block math node",
                }),
            }
        }
        Some(inline_at) => {
            let paragraph = paragraph_mut(&mut next, at)?;
            let inline = paragraph
                .children
                .get_mut(inline_at)
                .ok_or(EditError::PathOutOfBounds(at))?;
            match inline {
                Inline::Math(math) => {
                    math.latex = latex.to_string();
                    Ok(next)
                }
                _ => Err(EditError::KindMismatch {
                    at,
                    expected: "an inline math node",
                }),
            }
        }
    }
}

fn apply_insert_inline(
    doc: &Document,
    at: NodePath,
    inline: Inline,
) -> Result<Document, EditError> {
    let inline_at = at.inline.ok_or(EditError::KindMismatch {
        at,
        expected: "an inline cursor",
    })?;
    let mut next = doc.clone();
    let paragraph = paragraph_mut(&mut next, at)?;
    if inline_at > paragraph.children.len() {
        return Err(EditError::PathOutOfBounds(at));
    }
    paragraph.children.insert(inline_at, inline);
    Ok(next)
}

fn apply_remove(doc: &Document, at: NodePath) -> Result<Document, EditError> {
    let mut next = doc.clone();
    match at.inline {
        None => {
            if at.block >= next.children.len() {
                return Err(EditError::PathOutOfBounds(at));
            }
            next.children.remove(at.block);
            Ok(next)
        }
        Some(inline_at) => {
            let paragraph = paragraph_mut(&mut next, at)?;
            if inline_at >= paragraph.children.len() {
                return Err(EditError::PathOutOfBounds(at));
            }
            paragraph.children.remove(inline_at);
            Ok(next)
        }
    }
}

fn paragraph_mut(doc: &mut Document, at: NodePath) -> Result<&mut Paragraph, EditError> {
    let block = doc
        .children
        .get_mut(at.block)
        .ok_or(EditError::PathOutOfBounds(at))?;
    match block {
        Block::Paragraph(paragraph) => Ok(paragraph),
        _ => Err(EditError::KindMismatch {
            at,
            expected: "a paragraph",
        }),
    }
}
