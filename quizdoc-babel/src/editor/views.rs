//! View descriptors for the widget layer
//!
//! The host never hands out references into the live tree. Instead it
//! produces a flat list of [`NodeView`]s — value snapshots carrying a
//! [`NodePath`] — and the environment-specific widget layer renders those.
//! A math widget keeps only its path; when its dialog closes it submits a
//! `SetMathSource` transaction for that path. If the tree changed underneath
//! it, the path fails its bounds or kind check instead of dangling.

use crate::ast::{Block, Document, Inline};
use crate::editor::transaction::NodePath;
use crate::formats::html::DEFAULT_BLANK_GLYPH_LEN;

/// Options for view building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Length of the underscore run a blank widget displays
    pub blank_glyph_len: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            blank_glyph_len: DEFAULT_BLANK_GLYPH_LEN,
        }
    }
}

/// What one node renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeViewKind {
    /// Plain text, rendered as-is by the editing surface
    Text { text: String },
    /// Rendered-equation widget; click opens the math dialog with `latex`
    InlineMath { latex: String },
    /// Rendered-equation widget on its own line
    BlockMath { latex: String },
    /// Fixed-width placeholder glyph
    Blank { glyph: String },
}

/// One renderable node with its positional address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub path: NodePath,
    pub kind: NodeViewKind,
}

/// Build view descriptors for every renderable node, in document order.
pub fn node_views(doc: &Document, options: &ViewOptions) -> Vec<NodeView> {
    let glyph: String = "_".repeat(options.blank_glyph_len);
    let mut views = Vec::new();

    for (block_index, block) in doc.children.iter().enumerate() {
        match block {
            Block::Paragraph(para) => {
                for (inline_index, inline) in para.children.iter().enumerate() {
                    let path = NodePath::inline(block_index, inline_index);
                    let kind = match inline {
                        Inline::Text(run) => NodeViewKind::Text {
                            text: run.text.clone(),
                        },
                        Inline::Math(math) => NodeViewKind::InlineMath {
                            latex: math.latex.clone(),
                        },
                        Inline::Blank => NodeViewKind::Blank {
                            glyph: glyph.clone(),
                        },
                    };
                    views.push(NodeView { path, kind });
                }
            }
            Block::Math(math) => views.push(NodeView {
                path: NodePath::block(block_index),
                kind: NodeViewKind::BlockMath {
                    latex: math.latex.clone(),
                },
            }),
        }
    }

    views
}
