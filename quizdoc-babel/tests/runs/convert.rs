//! End-to-end tests for transcription content entering the editor pipeline:
//! flat runs → fragment → storage markup.

use quizdoc_babel::ast::{Fragment, Inline, InlineMath, TextRun};
use quizdoc_babel::error::FormatError;
use quizdoc_babel::formats::runs::{to_fragment, FlatContent, FlatParagraph, FlatRun};
use quizdoc_babel::transforms::serialize_fragment_to_html;

#[test]
fn test_transcribed_sentence_with_math() {
    // "Let a equals two and b equals three", as the transcription service
    // returns it after math extraction.
    let content = FlatContent {
        paragraphs: vec![FlatParagraph {
            runs: vec![
                FlatRun::text("Let "),
                FlatRun::latex("a=2"),
                FlatRun::text(" and "),
                FlatRun::latex("b=3"),
            ],
        }],
    };

    let fragment = to_fragment(&content).unwrap();

    // One space-run between each pair of adjacent runs, none trailing.
    assert_eq!(
        fragment,
        Fragment::Inline(vec![
            Inline::Text(TextRun::new("Let ")),
            Inline::Text(TextRun::new(" ")),
            Inline::Math(InlineMath::new("a=2")),
            Inline::Text(TextRun::new(" ")),
            Inline::Text(TextRun::new(" and ")),
            Inline::Text(TextRun::new(" ")),
            Inline::Math(InlineMath::new("b=3")),
        ])
    );

    assert_eq!(
        serialize_fragment_to_html(&fragment),
        "Let  <span data-tag-ilatex=\"a=2\">a=2</span>  and  <span data-tag-ilatex=\"b=3\">b=3</span>"
    );
}

#[test]
fn test_paragraph_count_and_order_are_preserved() {
    let content = FlatContent {
        paragraphs: (0..4)
            .map(|i| FlatParagraph {
                runs: vec![FlatRun::text(format!("para {i}"))],
            })
            .collect(),
    };

    let Fragment::Blocks(blocks) = to_fragment(&content).unwrap() else {
        panic!("expected a block fragment");
    };
    assert_eq!(blocks.len(), 4);

    let html = serialize_fragment_to_html(&to_fragment(&content).unwrap());
    assert_eq!(
        html,
        "<p>para 0</p>\n<p>para 1</p>\n<p>para 2</p>\n<p>para 3</p>"
    );
}

#[test]
fn test_unsupported_kind_fails_loudly() {
    let content = FlatContent {
        paragraphs: vec![FlatParagraph {
            runs: vec![FlatRun {
                kind: "audio".to_string(),
                content: "x".to_string(),
            }],
        }],
    };

    assert_eq!(
        to_fragment(&content),
        Err(FormatError::UnsupportedRunKind("audio".to_string()))
    );
}

#[test]
fn test_no_paragraphs_yields_empty_block_fragment() {
    let content = FlatContent { paragraphs: vec![] };
    let fragment = to_fragment(&content).unwrap();
    assert_eq!(fragment, Fragment::Blocks(vec![]));
    assert!(fragment.is_empty());
}
