//! HTML format implementation
//!
//! This module implements the serialized-markup convention used to store and
//! display question content: an HTML subset where math and blank placeholders
//! travel as tagged spans.
//!
//! # Library Choice
//!
//! Parsing uses the `html5ever` + `markup5ever_rcdom` ecosystem:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Incoming markup is either self-produced (round-trip safe) or externally
//! supplied free text, so the parser must tolerate tag soup; html5ever
//! handles malformed HTML the same way a browser would. Serialization is a
//! direct writer (see `serializer`): the convention requires raw LaTeX in
//! attributes and raw run text in element bodies, which an escaping
//! serializer would mangle.
//!
//! # Element Mapping Table
//!
//! | Tree node    | Markup                                           | Import Notes                           |
//! |--------------|--------------------------------------------------|----------------------------------------|
//! | Document     | (no wrapper; blocks joined by newline)           | Parse body children                    |
//! | Paragraph    | `<p>…</p>`                                       | `<p>` and unmarked `<div>` both map    |
//! | TextRun      | Raw text, no escaping                            | Non-whitespace text nodes only         |
//! | InlineMath   | `<span data-tag-ilatex="L">L</span>`             | LaTeX read from the attribute          |
//! | BlockMath    | `<div data-tag-blatex="L">L</div>`               | LaTeX read from the attribute          |
//! | Blank        | `<span data-tag-fill-blank></span>`              | Parsed only with `parse_blanks` on     |
//!
//! Anything else is dropped on import; production is strict, consumption is
//! forgiving.
//!
//! # Blank round trip
//!
//! The storage convention emits blank spans but the consuming system never
//! parses them back: blanks exist transiently during authoring. The default
//! parser therefore drops them. Deployments that want blanks to survive a
//! save/reload cycle opt in via [`HtmlOptions::parse_blanks`].

pub mod parser;
pub mod serializer;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;

/// Width of the underscore run a blank renders as, unless configured.
pub const DEFAULT_BLANK_GLYPH_LEN: usize = 6;

/// Options for HTML parsing and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Length of the underscore run used when rendering blanks for display
    pub blank_glyph_len: usize,
    /// Recognize `data-tag-fill-blank` spans on import
    pub parse_blanks: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            blank_glyph_len: DEFAULT_BLANK_GLYPH_LEN,
            parse_blanks: false,
        }
    }
}

/// Format implementation for the HTML storage markup
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    /// Create a new HTML format with the given options
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Create an HTML format that recognizes blank spans on import
    pub fn with_parse_blanks() -> Self {
        Self::new(HtmlOptions {
            parse_blanks: true,
            ..HtmlOptions::default()
        })
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML storage markup with tagged math and blank spans"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_to_document(source, &self.options)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_document(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &std::collections::HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut display = false;
        let mut blank_width = self.options.blank_glyph_len;

        if let Some(value) = options.get("display") {
            display = value == "true";
        }
        if let Some(value) = options.get("blank-width") {
            blank_width = value.parse().map_err(|_| {
                FormatError::SerializationError(format!(
                    "Invalid blank-width '{value}': expected a number"
                ))
            })?;
            display = true;
        }
        // Unrecognized keys are ignored: option maps are shared across
        // formats and may carry parameters meant for another target.

        if display {
            Ok(serializer::serialize_display(doc, blank_width))
        } else {
            Ok(serializer::serialize_document(doc))
        }
    }
}
