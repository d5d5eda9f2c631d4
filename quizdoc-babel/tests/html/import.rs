//! Import tests for the HTML format (storage markup → tree)
//!
//! The parser is the forgiving half of the pipeline: it maps what it
//! recognizes and silently drops the rest, because incoming markup may be
//! externally supplied free text rather than self-produced storage markup.

use quizdoc_babel::ast::{Block, Inline};
use quizdoc_babel::format::Format;
use quizdoc_babel::formats::html::HtmlFormat;

#[test]
fn test_paragraph_with_inline_math() {
    let doc = HtmlFormat::default()
        .parse("<p>Let <span data-tag-ilatex=\"a=2\">a=2</span> hold.</p>")
        .unwrap();

    assert_eq!(doc.children.len(), 1);
    let Block::Paragraph(para) = &doc.children[0] else {
        panic!("expected a paragraph");
    };
    assert_eq!(para.children.len(), 3);
    assert!(matches!(&para.children[0], Inline::Text(t) if t.text == "Let "));
    assert!(matches!(&para.children[1], Inline::Math(m) if m.latex == "a=2"));
    assert!(matches!(&para.children[2], Inline::Text(t) if t.text == " hold."));
}

#[test]
fn test_block_math_div() {
    let doc = HtmlFormat::default()
        .parse("<div data-tag-blatex=\"E=mc^2\">E=mc^2</div>")
        .unwrap();
    assert_eq!(doc.children.len(), 1);
    assert!(matches!(&doc.children[0], Block::Math(m) if m.latex == "E=mc^2"));
}

#[test]
fn test_latex_is_read_from_the_attribute_not_the_body() {
    // Attribute and body can disagree (hand-edited markup); the attribute
    // is authoritative.
    let doc = HtmlFormat::default()
        .parse("<p><span data-tag-ilatex=\"x+1\">stale text</span></p>")
        .unwrap();
    let Block::Paragraph(para) = &doc.children[0] else {
        panic!("expected a paragraph");
    };
    assert!(matches!(&para.children[0], Inline::Math(m) if m.latex == "x+1"));
}

#[test]
fn test_unrecognized_elements_are_dropped_not_errors() {
    let doc = HtmlFormat::default()
        .parse("<p>kept</p><table><tr><td>dropped</td></tr></table><ul><li>gone</li></ul>")
        .unwrap();
    assert_eq!(doc.children.len(), 1);
}

#[test]
fn test_whitespace_only_text_nodes_are_skipped() {
    let doc = HtmlFormat::default()
        .parse("<p>   </p>\n\n<p>real</p>")
        .unwrap();
    assert_eq!(doc.children.len(), 2);
    let Block::Paragraph(empty) = &doc.children[0] else {
        panic!("expected a paragraph");
    };
    assert!(empty.children.is_empty());
}

#[test]
fn test_bare_free_text_becomes_a_paragraph() {
    // Externally supplied answers are often plain text with no tags at all.
    let doc = HtmlFormat::default().parse("just some words").unwrap();
    assert_eq!(doc.children.len(), 1);
    let Block::Paragraph(para) = &doc.children[0] else {
        panic!("expected a paragraph");
    };
    assert!(matches!(&para.children[0], Inline::Text(t) if t.text == "just some words"));
}

#[test]
fn test_tag_soup_does_not_fail() {
    let doc = HtmlFormat::default()
        .parse("<p>unclosed <span data-tag-ilatex=\"x\">x</p><div>next")
        .unwrap();
    assert!(!doc.children.is_empty());
}

#[test]
fn test_blank_spans_are_dropped_by_default() {
    let markup = "<p>fill <span data-tag-fill-blank></span> in</p>";
    let doc = HtmlFormat::default().parse(markup).unwrap();
    assert_eq!(doc.count_blanks(), 0);
}

#[test]
fn test_blank_spans_parse_when_opted_in() {
    let markup = "<p>fill <span data-tag-fill-blank></span> in</p>";
    let doc = HtmlFormat::with_parse_blanks().parse(markup).unwrap();
    assert_eq!(doc.count_blanks(), 1);

    let Block::Paragraph(para) = &doc.children[0] else {
        panic!("expected a paragraph");
    };
    assert_eq!(para.children.len(), 3);
    assert!(matches!(&para.children[1], Inline::Blank));
}

#[test]
fn test_unmarked_div_is_paragraph_like() {
    let doc = HtmlFormat::default().parse("<div>plain block</div>").unwrap();
    assert_eq!(doc.children.len(), 1);
    assert!(matches!(&doc.children[0], Block::Paragraph(_)));
}
