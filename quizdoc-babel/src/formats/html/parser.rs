//! HTML parsing (storage markup → tree)
//!
//! Best-effort import: the source markup is either self-produced (and
//! round-trips exactly) or externally supplied free text, so the parser
//! never fails on unrecognized structure — it maps what it can and drops
//! the rest.
//!
//! Pipeline: markup string → html5ever RcDom → walk body children → tree

use crate::ast::{Block, BlockMath, Document, Inline, InlineMath, Paragraph, TextRun};
use crate::error::FormatError;
use crate::formats::html::HtmlOptions;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::cell::RefCell;

/// Parse storage markup into a document tree.
pub fn parse_to_document(source: &str, options: &HtmlOptions) -> Result<Document, FormatError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut source.as_bytes())
        .map_err(|e| FormatError::ParseError(format!("HTML parsing error: {e}")))?;

    // html5ever always synthesizes html/body around the content, even for
    // bare text or tag soup.
    let body = find_element(&dom.document, "body").ok_or_else(|| {
        FormatError::ParseError("Parsed DOM has no body element".to_string())
    })?;

    let mut children = Vec::new();
    for child in body.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                // Externally supplied free text lands directly under body.
                let text = contents.borrow().to_string();
                if !text.trim().is_empty() {
                    children.push(Block::Paragraph(Paragraph::new(vec![Inline::Text(
                        TextRun::new(text),
                    )])));
                }
            }
            NodeData::Element { name, attrs, .. } => match name.local.as_ref() {
                "p" => {
                    children.push(Block::Paragraph(Paragraph::new(parse_inlines(
                        child, options,
                    ))));
                }
                "div" => {
                    if let Some(latex) = attr_value(attrs, "data-tag-blatex") {
                        children.push(Block::Math(BlockMath::new(latex)));
                    } else {
                        // Unmarked divs are paragraph-like in practice.
                        children.push(Block::Paragraph(Paragraph::new(parse_inlines(
                            child, options,
                        ))));
                    }
                }
                // Everything else is dropped: best-effort parse.
                _ => {}
            },
            _ => {}
        }
    }

    Ok(Document::new(children))
}

/// Walk a paragraph-like element's children into inline nodes.
fn parse_inlines(handle: &Handle, options: &HtmlOptions) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if !text.trim().is_empty() {
                    inlines.push(Inline::Text(TextRun::new(text)));
                }
            }
            NodeData::Element { name, attrs, .. } => {
                if name.local.as_ref() == "span" {
                    if let Some(latex) = attr_value(attrs, "data-tag-ilatex") {
                        inlines.push(Inline::Math(InlineMath::new(latex)));
                    } else if options.parse_blanks && has_attr(attrs, "data-tag-fill-blank") {
                        inlines.push(Inline::Blank);
                    }
                    // Unmarked spans are dropped like any other unknown element.
                }
            }
            _ => {}
        }
    }
    inlines
}

fn attr_value(attrs: &RefCell<Vec<Attribute>>, name: &str) -> Option<String> {
    attrs
        .borrow()
        .iter()
        .find(|attr| attr.name.local.as_ref() == name)
        .map(|attr| attr.value.to_string())
}

fn has_attr(attrs: &RefCell<Vec<Attribute>>, name: &str) -> bool {
    attrs
        .borrow()
        .iter()
        .any(|attr| attr.name.local.as_ref() == name)
}

/// Depth-first search for the first element with the given local name.
fn find_element(handle: &Handle, local_name: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref() == local_name {
            return Some(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_element(child, local_name) {
            return Some(found);
        }
    }
    None
}
