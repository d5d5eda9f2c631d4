//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the structured document tree and various text representations.

pub mod html;
pub mod markdown;
pub mod runs;
pub mod treeviz;

pub use html::{HtmlFormat, HtmlOptions};
pub use markdown::{MarkdownFormat, MarkdownOptions};
pub use runs::{FlatContent, FlatParagraph, FlatRun, RunsFormat};
pub use treeviz::TreevizFormat;
