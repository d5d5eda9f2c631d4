//! Conversion between flat run content and tree fragments
//!
//! The run-to-tree direction is the interesting one: transcribed content is
//! inserted at the editor cursor, so a single flat paragraph must yield
//! inline nodes (spliced into the paragraph under the cursor) while
//! multi-paragraph content yields whole blocks.

use crate::ast::{Block, Document, Fragment, Inline, InlineMath, Paragraph, TextRun};
use crate::error::FormatError;
use crate::formats::runs::{FlatContent, FlatParagraph, FlatRun, RunKind};

/// Convert flat run content into a fragment for cursor insertion.
///
/// - One source paragraph: a flat inline fragment, runs mapped 1:1 with a
///   single-space text run between consecutive runs (none trailing).
/// - More than one: one `Paragraph` block per flat paragraph, each built the
///   same way internally.
///
/// Pure function; the only failure is an unrecognized run kind, which aborts
/// the whole conversion rather than dropping content.
pub fn to_fragment(content: &FlatContent) -> Result<Fragment, FormatError> {
    if content.paragraphs.len() == 1 {
        return Ok(Fragment::Inline(paragraph_inlines(&content.paragraphs[0])?));
    }

    let mut blocks = Vec::with_capacity(content.paragraphs.len());
    for paragraph in &content.paragraphs {
        blocks.push(Block::Paragraph(Paragraph::new(paragraph_inlines(
            paragraph,
        )?)));
    }
    Ok(Fragment::Blocks(blocks))
}

/// Map one flat paragraph's runs to inline nodes, inserting the separator.
fn paragraph_inlines(paragraph: &FlatParagraph) -> Result<Vec<Inline>, FormatError> {
    let mut inlines = Vec::with_capacity(paragraph.runs.len() * 2);
    for run in &paragraph.runs {
        let kind = RunKind::from_tag(&run.kind)?;
        if !inlines.is_empty() {
            inlines.push(Inline::Text(TextRun::new(" ")));
        }
        match kind {
            RunKind::Text => inlines.push(Inline::Text(TextRun::new(run.content.clone()))),
            RunKind::Latex => inlines.push(Inline::Math(InlineMath::new(run.content.clone()))),
        }
    }
    Ok(inlines)
}

/// Flatten a document back to run content.
///
/// Lossy by design: blanks have no flat representation and are dropped, and
/// block math becomes a single-run paragraph. Used by the CLI pipeline for
/// inspection round trips, never by the editor.
pub fn document_to_runs(doc: &Document) -> FlatContent {
    let mut paragraphs = Vec::with_capacity(doc.children.len());
    for block in &doc.children {
        match block {
            Block::Paragraph(para) => {
                let mut runs = Vec::new();
                for inline in &para.children {
                    match inline {
                        Inline::Text(text) => runs.push(FlatRun::text(text.text.clone())),
                        Inline::Math(math) => runs.push(FlatRun::latex(math.latex.clone())),
                        Inline::Blank => {}
                    }
                }
                paragraphs.push(FlatParagraph { runs });
            }
            Block::Math(math) => paragraphs.push(FlatParagraph {
                runs: vec![FlatRun::latex(math.latex.clone())],
            }),
        }
    }
    FlatContent { paragraphs }
}
