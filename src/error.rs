//! Error types for tree operations.

use thiserror::Error;

use crate::model::NodeId;

/// Errors raised by structural operations on a [`Tree`](crate::Tree).
///
/// Unknown tags and style tokens are not errors; they are reported as
/// [`Warning`](crate::Warning)s and the node keeps its generic kind.
#[derive(Error, Debug)]
pub enum Error {
    #[error("node {0:?} does not exist in this tree")]
    UnknownNode(NodeId),

    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("node {0:?} has no parent to position relative to")]
    Detached(NodeId),

    #[error("moving {node:?} under {target:?} would make it its own ancestor")]
    Cycle { node: NodeId, target: NodeId },

    #[error("the root node cannot be given a parent")]
    RootMove,

    #[error("tree integrity violated: {0}")]
    Integrity(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
