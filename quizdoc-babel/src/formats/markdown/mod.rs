//! Markdown format implementation (export only)
//!
//! Question content is previewed in a few plain-text surfaces (change
//! emails, revision diffs) that render markdown. The subset needed is
//! small — prose paragraphs, `$…$` / `$$…$$` math delimiters, underscore
//! blanks — so this is a direct writer.
//!
//! Parsing is deliberately unsupported: the backend never supplies
//! markdown, so there is no inbound path to adapt.

pub mod serializer;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::DEFAULT_BLANK_GLYPH_LEN;

/// Options for markdown export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Length of the underscore run a blank renders as
    pub blank_glyph_len: usize,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            blank_glyph_len: DEFAULT_BLANK_GLYPH_LEN,
        }
    }
}

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown preview export with TeX math delimiters"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &std::collections::HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut resolved = self.options;
        if let Some(value) = options.get("blank-width") {
            resolved.blank_glyph_len = value.parse().map_err(|_| {
                FormatError::SerializationError(format!(
                    "Invalid blank-width '{value}': expected a number"
                ))
            })?;
        }
        Ok(serializer::serialize_to_markdown(doc, &resolved))
    }
}
