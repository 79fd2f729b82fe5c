//! Core tree model.
//!
//! This module contains:
//! - Node identifiers and semantic kinds
//! - The arena-backed [`Tree`] with its mutation and navigation primitives
//! - [`RawNode`], the owned tree a parser hands over

mod node;
mod raw;
mod tree;

pub use node::{Kind, Node, NodeId};
pub use raw::RawNode;
pub use tree::{DfsIter, Tree};
