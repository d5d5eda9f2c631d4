//! Multi-format conversion for assessment question content
//!
//!     This crate provides a uniform interface for converting question content between the
//!     structured document tree and the representations the surrounding system speaks: the
//!     HTML-subset storage markup, the flat paragraph/run interchange produced by
//!     speech-to-text transcription, and preview/inspection formats.
//!
//!     It also hosts the two pieces of the editing pipeline that are pure data work: the
//!     editor host (the single writer over a live document, driven by transactions) and the
//!     fill-blank synchronizer (answer slots kept in sync with the document's blank count).
//!
//! Architecture
//!
//!     The structured tree (./ast/) is the canonical representation; every format converts
//!     to or from it, and nothing else is shared between formats. Converters never mutate a
//!     tree: they read one or build a fresh one. The only mutable state in the crate is the
//!     editor host's current document, which it replaces wholesale per transaction.
//!
//!     This is a pure lib, that is, it powers the quizdoc CLI but is shell agnostic: no code
//!     here supposes a shell environment, be it std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser implementation (when supported)
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     ├── ast                     # The structured document tree
//!     ├── blanks.rs               # Fill-blank answer slot synchronization
//!     ├── editor                  # Editor host, transactions, view descriptors
//!     ├── transforms.rs           # Functional one-shot conversion helpers
//!     └── lib.rs
//!
//! Strictness
//!
//!     Content production is strict and content consumption is forgiving. The one inbound
//!     path that is strict is run conversion: a flat run with an unknown kind aborts the
//!     conversion, because silently dropping transcribed content would corrupt the user's
//!     answer. The HTML parser, by contrast, never fails on unrecognized markup — what it
//!     cannot map, it drops — since incoming markup may be externally supplied free text.
//!
//! Library Choices
//!
//!     As much as possible the heavy lifting is offloaded to specialized crates: html5ever
//!     and markup5ever_rcdom give browser-grade tag-soup parsing for the inbound markup
//!     path, and serde/serde_json carry the transcription interchange and the answer
//!     payload. Serialization to the storage markup is the one hand-written piece, because
//!     the convention requires raw LaTeX and raw run text where a general HTML serializer
//!     would escape.

pub mod ast;
pub mod blanks;
pub mod editor;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub use ast::{Block, BlockMath, Document, Fragment, Inline, InlineMath, Paragraph, TextRun};
pub use blanks::{AnswerSlots, BlankAnswer, BlankSlot};
pub use editor::{EditError, Editor, ListenerId, NodePath, Transaction};
pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
