//! Functional conversion helpers
//!
//! Thin wrappers over the format implementations for callers that want a
//! plain function instead of going through the registry — the answer
//! capture path in particular serializes one document at submission time
//! and has no use for format discovery.

use crate::ast::{Document, Fragment};
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::{serializer, HtmlFormat, HtmlOptions};
use crate::formats::runs::{self, FlatContent};

/// Serialize a document to the storage markup.
pub fn serialize_to_html(doc: &Document) -> String {
    serializer::serialize_document(doc)
}

/// Serialize a fragment to markup (no paragraph wrapper around inlines).
pub fn serialize_fragment_to_html(fragment: &Fragment) -> String {
    serializer::serialize_fragment(fragment)
}

/// Parse storage markup into a document tree with default options.
pub fn parse_from_html(source: &str) -> Result<Document, FormatError> {
    HtmlFormat::default().parse(source)
}

/// Parse storage markup, recognizing blank placeholder spans.
pub fn parse_from_html_with_blanks(source: &str) -> Result<Document, FormatError> {
    HtmlFormat::with_parse_blanks().parse(source)
}

/// Convert transcribed flat content into a fragment for cursor insertion.
pub fn transcript_to_fragment(content: &FlatContent) -> Result<Fragment, FormatError> {
    runs::to_fragment(content)
}

/// Normalization round trip: parse markup and re-serialize it.
///
/// Useful for cleaning externally supplied markup down to the storage
/// subset before saving.
pub fn normalize_html(source: &str) -> Result<String, FormatError> {
    let options = HtmlOptions {
        parse_blanks: true,
        ..HtmlOptions::default()
    };
    let doc = HtmlFormat::new(options).parse(source)?;
    Ok(serializer::serialize_document(&doc))
}
