//! # wikitree
//!
//! Normalizes the generic parse tree of a wiki-markup parser into a semantic
//! document tree that renderers (HTML, PDF, ...) can walk directly.
//!
//! ## Features
//!
//! - Arena-backed [`Tree`] with parent links and identity-preserving moves
//! - Reclassification of generic tag and style nodes into specific kinds
//! - Structural repairs: grouping nodes, whitespace, definition lists,
//!   lists wrapped in paragraphs, redundant line breaks
//! - Inline/block layout per node, including content-dependent kinds
//!
//! ## Quick Start
//!
//! ```
//! use wikitree::{Kind, RawNode, Tree, normalize};
//!
//! // What a parser hands over for `'''bold'''<br/>`
//! let raw = RawNode::new(Kind::Article).child(
//!     RawNode::new(Kind::Paragraph)
//!         .child(RawNode::with_caption(Kind::Style, "'''").child(RawNode::text("bold")))
//!         .child(RawNode::with_caption(Kind::Tag, "br")),
//! );
//!
//! let mut tree = Tree::from_raw(raw);
//! let diagnostics = normalize(&mut tree).unwrap();
//! assert!(diagnostics.is_empty());
//!
//! let para = tree.children(tree.root())[0];
//! assert_eq!(tree.kind(tree.children(para)[0]), Some(Kind::Strong));
//! // The trailing break sits at the end of the paragraph and is dropped.
//! assert_eq!(tree.children(para).len(), 1);
//! ```
//!
//! Unknown tags and style tokens do not fail normalization; they are
//! returned as [`Warning`]s and logged through the `log` crate.

pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod normalize;
pub mod options;

pub use classify::Layout;
pub use diagnostics::{Diagnostics, Warning};
pub use error::{Error, Result};
pub use model::{Kind, Node, NodeId, RawNode, Tree};
pub use normalize::{Normalizer, normalize};
pub use options::Options;
