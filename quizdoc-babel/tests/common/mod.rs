//! Shared document builders for the format tests.

use quizdoc_babel::ast::{
    Block, BlockMath, Document, Inline, InlineMath, Paragraph, TextRun,
};

/// A representative question: prose, inline math, a blank, display math.
pub fn sample_question() -> Document {
    Document::new(vec![
        Block::Paragraph(Paragraph::new(vec![
            Inline::Text(TextRun::new("Given ")),
            Inline::Math(InlineMath::new("a=2")),
            Inline::Text(TextRun::new(" and ")),
            Inline::Math(InlineMath::new("b=3")),
            Inline::Text(TextRun::new(", the sum is ")),
            Inline::Blank,
        ])),
        Block::Math(BlockMath::new("a + b = ?")),
    ])
}

/// The same question without the blank, for round trips under default
/// parser options.
pub fn sample_question_without_blank() -> Document {
    Document::new(vec![
        Block::Paragraph(Paragraph::new(vec![
            Inline::Text(TextRun::new("Given ")),
            Inline::Math(InlineMath::new("a=2")),
            Inline::Text(TextRun::new(" and ")),
            Inline::Math(InlineMath::new("b=3")),
        ])),
        Block::Math(BlockMath::new("a + b = ?")),
    ])
}
