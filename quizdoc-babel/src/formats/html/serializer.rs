//! HTML serialization (tree → storage markup)
//!
//! A direct writer over the document tree. The markup convention carries raw
//! LaTeX in `data-tag-*` attributes and raw run text in element bodies, with
//! no entity escaping — sanitization is the display layer's responsibility,
//! and escaping here would corrupt LaTeX sources on the way to the math
//! renderer.
//!
//! Output order exactly matches document order. No reordering, no
//! deduplication, no whitespace normalization, except a single trailing trim
//! of the whole result.

use crate::ast::{Block, Document, Fragment, Inline};

/// Serialize a document to the storage markup.
///
/// Blanks are emitted as empty marker spans (the storage form). Use
/// [`serialize_display`] for the read-only rendering with underscore glyphs.
pub fn serialize_document(doc: &Document) -> String {
    serialize_blocks(&doc.children, None)
}

/// Serialize a document for read-only display.
///
/// Identical to [`serialize_document`] except each blank span contains a
/// fixed run of `blank_glyph_len` underscores.
pub fn serialize_display(doc: &Document, blank_glyph_len: usize) -> String {
    serialize_blocks(&doc.children, Some(blank_glyph_len))
}

/// Serialize a fragment (no paragraph wrapper around inline fragments).
pub fn serialize_fragment(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Inline(inlines) => serialize_inlines(inlines),
        Fragment::Blocks(blocks) => serialize_blocks(blocks, None),
    }
}

/// Serialize a list of inline nodes with no enclosing tag.
pub fn serialize_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        write_inline(&mut out, inline, None);
    }
    out.trim_end().to_string()
}

fn serialize_blocks(blocks: &[Block], blank_glyph_len: Option<usize>) -> String {
    let mut parts = Vec::with_capacity(blocks.len());
    for block in blocks {
        parts.push(write_block(block, blank_glyph_len));
    }
    parts.join("\n").trim_end().to_string()
}

fn write_block(block: &Block, blank_glyph_len: Option<usize>) -> String {
    match block {
        Block::Paragraph(para) => {
            let mut out = String::from("<p>");
            for inline in &para.children {
                write_inline(&mut out, inline, blank_glyph_len);
            }
            out.push_str("</p>");
            out
        }
        Block::Math(math) => {
            format!(
                "<div data-tag-blatex=\"{latex}\">{latex}</div>",
                latex = math.latex
            )
        }
    }
}

fn write_inline(out: &mut String, inline: &Inline, blank_glyph_len: Option<usize>) {
    match inline {
        Inline::Text(run) => out.push_str(&run.text),
        Inline::Math(math) => {
            out.push_str("<span data-tag-ilatex=\"");
            out.push_str(&math.latex);
            out.push_str("\">");
            out.push_str(&math.latex);
            out.push_str("</span>");
        }
        Inline::Blank => {
            out.push_str("<span data-tag-fill-blank>");
            if let Some(len) = blank_glyph_len {
                for _ in 0..len {
                    out.push('_');
                }
            }
            out.push_str("</span>");
        }
    }
}
