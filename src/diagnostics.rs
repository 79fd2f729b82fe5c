//! Warnings collected while normalizing a tree.
//!
//! Unknown literals never abort normalization. Each one is recorded here and
//! also sent to the `log` facade, so a host can either inspect the returned
//! [`Diagnostics`] or just install a logger.

use std::fmt;

use crate::model::NodeId;

/// A non-fatal problem found during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A tag node whose name is not in the tag table. It stays a `Tag`.
    UnknownTag { node: NodeId, name: String },
    /// A style node whose token is not recognized. It stays a `Style`.
    UnknownStyle { node: NodeId, token: String },
}

impl Warning {
    /// The node the warning is about.
    pub fn node(&self) -> NodeId {
        match self {
            Warning::UnknownTag { node, .. } | Warning::UnknownStyle { node, .. } => *node,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownTag { node, name } => {
                write!(f, "unknown tag {name:?} at node {}", node.0)
            }
            Warning::UnknownStyle { node, token } => {
                write!(f, "unknown style {token:?} at node {}", node.0)
            }
        }
    }
}

/// Sink for warnings from one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and forward it to the logger.
    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
