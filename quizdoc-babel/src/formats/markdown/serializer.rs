//! Markdown serialization (tree → preview text)

use crate::ast::{Block, Document, Inline};
use crate::formats::markdown::MarkdownOptions;

/// Serialize a document to markdown preview text.
///
/// Paragraphs become prose blocks separated by blank lines; inline math uses
/// `$…$`, block math `$$…$$` on its own lines; blanks render as a fixed
/// underscore run.
pub fn serialize_to_markdown(doc: &Document, options: &MarkdownOptions) -> String {
    let mut parts = Vec::with_capacity(doc.children.len());
    for block in &doc.children {
        match block {
            Block::Paragraph(para) => {
                let mut line = String::new();
                for inline in &para.children {
                    match inline {
                        Inline::Text(run) => line.push_str(&run.text),
                        Inline::Math(math) => {
                            line.push('$');
                            line.push_str(&math.latex);
                            line.push('$');
                        }
                        Inline::Blank => {
                            for _ in 0..options.blank_glyph_len {
                                line.push('_');
                            }
                        }
                    }
                }
                parts.push(line);
            }
            Block::Math(math) => {
                parts.push(format!("$$\n{}\n$$", math.latex));
            }
        }
    }
    parts.join("\n\n").trim_end().to_string()
}
