//! Treeviz formatter for document trees
//!
//! A visual representation of the structured tree, for the CLI `inspect`
//! command and debugging sessions. Node structure is encoded as
//! indentation, two spaces per level of nesting:
//!
//! ```text
//! ⧉ document
//!   ¶ paragraph
//!     ◦ Let the value of
//!     √ a=2
//!     ▭ blank
//!   ∑ y = mx + b
//! ```
//!
//! Labels are truncated to 30 characters.

use crate::ast::{Block, Document, Inline};
use crate::error::FormatError;
use crate::format::Format;

const MAX_LABEL_LEN: usize = 30;

/// Get the Unicode icon for a given node type
///
/// Returns a single Unicode character that visually represents the node
/// type, for quick identification in tree dumps.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Paragraph" => "¶",
        "TextRun" => "◦",
        "InlineMath" => "√",
        "BlockMath" => "∑",
        "Blank" => "▭",
        _ => "○",
    }
}

/// Format implementation for tree visualization
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Tree visualization of the document structure"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(format_document(doc))
    }
}

/// Render a document as an indented tree.
pub fn format_document(doc: &Document) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, get_icon("Document"), "document");
    for block in &doc.children {
        match block {
            Block::Paragraph(para) => {
                push_line(&mut out, 1, get_icon("Paragraph"), "paragraph");
                for inline in &para.children {
                    match inline {
                        Inline::Text(run) => {
                            push_line(&mut out, 2, get_icon("TextRun"), &run.text)
                        }
                        Inline::Math(math) => {
                            push_line(&mut out, 2, get_icon("InlineMath"), &math.latex)
                        }
                        Inline::Blank => push_line(&mut out, 2, get_icon("Blank"), "blank"),
                    }
                }
            }
            Block::Math(math) => push_line(&mut out, 1, get_icon("BlockMath"), &math.latex),
        }
    }
    out
}

fn push_line(out: &mut String, depth: usize, icon: &str, label: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(icon);
    out.push(' ');
    out.push_str(&truncate_label(label));
    out.push('\n');
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_LEN {
        return label.to_string();
    }
    let truncated: String = label.chars().take(MAX_LABEL_LEN - 1).collect();
    format!("{truncated}…")
}
