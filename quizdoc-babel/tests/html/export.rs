//! Export tests for the HTML format (tree → storage markup)
//!
//! These verify the exact markup convention the rest of the system
//! consumes: tagged math spans, blank marker spans, raw text.

use crate::common::sample_question;
use insta::assert_snapshot;
use once_cell::sync::Lazy;
use quizdoc_babel::ast::{Block, Document, Inline, Paragraph, TextRun};
use quizdoc_babel::format::Format;
use quizdoc_babel::formats::html::HtmlFormat;
use regex::Regex;
use std::collections::HashMap;

static ILATEX_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span data-tag-ilatex="([^"]*)">([^<]*)</span>"#).unwrap()
});

#[test]
fn test_question_storage_markup() {
    let html = HtmlFormat::default().serialize(&sample_question()).unwrap();

    assert_snapshot!(html, @r#"<p>Given <span data-tag-ilatex="a=2">a=2</span> and <span data-tag-ilatex="b=3">b=3</span>, the sum is <span data-tag-fill-blank></span></p>
<div data-tag-blatex="a + b = ?">a + b = ?</div>"#);
}

#[test]
fn test_inline_math_carries_latex_twice() {
    // The LaTeX rides in the attribute (for the math renderer) and as
    // fallback text content (for plain display).
    let html = HtmlFormat::default().serialize(&sample_question()).unwrap();
    assert!(html.contains("<span data-tag-ilatex=\"a=2\">a=2</span>"));
}

#[test]
fn test_every_math_span_agrees_with_its_attribute() {
    let html = HtmlFormat::default().serialize(&sample_question()).unwrap();

    let mut spans = 0;
    for capture in ILATEX_SPAN.captures_iter(&html) {
        assert_eq!(&capture[1], &capture[2]);
        spans += 1;
    }
    assert_eq!(spans, 2);
}

#[test]
fn test_display_rendering_fills_blank_glyphs() {
    let mut options = HashMap::new();
    options.insert("blank-width".to_string(), "8".to_string());

    let html = HtmlFormat::default()
        .serialize_with_options(&sample_question(), &options)
        .unwrap();
    assert!(html.contains("<span data-tag-fill-blank>________</span>"));
}

#[test]
fn test_invalid_blank_width_is_an_error() {
    let mut options = HashMap::new();
    options.insert("blank-width".to_string(), "wide".to_string());

    let result = HtmlFormat::default().serialize_with_options(&sample_question(), &options);
    assert!(result.is_err());
}

#[test]
fn test_empty_document_serializes_to_empty_string() {
    let html = HtmlFormat::default().serialize(&Document::default()).unwrap();
    assert_eq!(html, "");
}

#[test]
fn test_no_trailing_whitespace() {
    let doc = Document::new(vec![Block::Paragraph(Paragraph::new(vec![Inline::Text(
        TextRun::new("ends here"),
    )]))]);
    let html = HtmlFormat::default().serialize(&doc).unwrap();
    assert_eq!(html, html.trim_end());
}
