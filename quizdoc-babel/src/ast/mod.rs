//! The structured document tree for question content.
//!
//! This is the canonical in-memory representation that every format converts
//! to or from. Trees are immutable values: converters only read them or build
//! fresh ones, and the editor replaces the whole tree when a transaction is
//! applied.

pub mod nodes;

pub use nodes::{Block, BlockMath, Document, Fragment, Inline, InlineMath, Paragraph, TextRun};
