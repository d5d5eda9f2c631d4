//! Flat run content — the transcription interchange format
//!
//! Speech-to-text and AI reformatting services hand content back as a list
//! of paragraphs, each a list of typed runs (`text` | `latex`), serialized
//! as JSON. This module owns the wire types and their conversion into tree
//! fragments (see `convert`).
//!
//! # Strictness
//!
//! Import is the one place this library is strict about unknown input: a run
//! kind the converter does not recognize aborts the whole conversion with
//! [`FormatError::UnsupportedRunKind`]. The flat content is the user's
//! spoken answer; dropping a run silently would corrupt it.

pub mod convert;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;
use serde::{Deserialize, Serialize};

pub use convert::{document_to_runs, to_fragment};

/// A single typed run of transcribed content.
///
/// `kind` is an open string on the wire (the transcription service may grow
/// new kinds before this library learns about them); the converter resolves
/// it through the closed [`RunKind`] enum and rejects anything unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRun {
    pub kind: String,
    pub content: String,
}

impl FlatRun {
    pub fn text(content: impl Into<String>) -> Self {
        FlatRun {
            kind: "text".to_string(),
            content: content.into(),
        }
    }

    pub fn latex(content: impl Into<String>) -> Self {
        FlatRun {
            kind: "latex".to_string(),
            content: content.into(),
        }
    }
}

/// One transcribed paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatParagraph {
    pub runs: Vec<FlatRun>,
}

/// A complete transcription payload. Has no concept of blanks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatContent {
    pub paragraphs: Vec<FlatParagraph>,
}

/// The closed set of run kinds the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Text,
    Latex,
}

impl RunKind {
    /// Resolve a wire tag. The default branch is the strict one: anything
    /// not listed here aborts the conversion.
    pub fn from_tag(tag: &str) -> Result<Self, FormatError> {
        match tag {
            "text" => Ok(RunKind::Text),
            "latex" => Ok(RunKind::Latex),
            other => Err(FormatError::UnsupportedRunKind(other.to_string())),
        }
    }
}

/// Format implementation for flat run content (JSON on the wire)
pub struct RunsFormat;

impl Format for RunsFormat {
    fn name(&self) -> &str {
        "runs"
    }

    fn description(&self) -> &str {
        "Flat paragraph/run interchange produced by transcription services"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let content: FlatContent = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("Invalid runs JSON: {e}")))?;
        let fragment = to_fragment(&content)?;
        Ok(Document::new(fragment.into_blocks()))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let content = document_to_runs(doc);
        serde_json::to_string_pretty(&content)
            .map_err(|e| FormatError::SerializationError(format!("Runs JSON encoding: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Inline};

    #[test]
    fn parse_accepts_transcription_json() {
        let source = r#"{
            "paragraphs": [
                { "runs": [ {"kind": "text", "content": "Let "},
                            {"kind": "latex", "content": "a=2"} ] }
            ]
        }"#;
        let doc = RunsFormat.parse(source).unwrap();
        assert_eq!(doc.children.len(), 1);
        let Block::Paragraph(para) = &doc.children[0] else {
            panic!("expected a paragraph");
        };
        // Two runs plus the separator between them.
        assert_eq!(para.children.len(), 3);
        assert!(matches!(&para.children[2], Inline::Math(m) if m.latex == "a=2"));
    }

    #[test]
    fn parse_rejects_unknown_run_kind() {
        let source = r#"{"paragraphs": [{"runs": [{"kind": "audio", "content": "x"}]}]}"#;
        let err = RunsFormat.parse(source).unwrap_err();
        assert_eq!(err, FormatError::UnsupportedRunKind("audio".to_string()));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = RunsFormat.parse("not json").unwrap_err();
        assert!(matches!(err, FormatError::ParseError(_)));
    }

    #[test]
    fn run_kind_resolution_is_closed() {
        assert_eq!(RunKind::from_tag("text").unwrap(), RunKind::Text);
        assert_eq!(RunKind::from_tag("latex").unwrap(), RunKind::Latex);
        assert!(RunKind::from_tag("image").is_err());
        assert!(RunKind::from_tag("TEXT").is_err());
    }
}
