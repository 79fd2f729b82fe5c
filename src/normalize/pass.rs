//! Tree traversal utilities for normalization passes.

use crate::error::Result;
use crate::model::{NodeId, Tree};

/// Walk the tree top-down and call the visitor at every node.
///
/// A node is visited before its children. The children list is copied
/// after the visit, so the visitor may restructure the node (wrap its
/// children, move it elsewhere, remove it) and the walk still reaches the
/// node's current children exactly once.
pub fn walk_pre_order<F>(tree: &mut Tree, mut visitor: F) -> Result<()>
where
    F: FnMut(&mut Tree, NodeId) -> Result<()>,
{
    walk(tree, NodeId::ROOT, &mut visitor)
}

fn walk<F>(tree: &mut Tree, id: NodeId, visitor: &mut F) -> Result<()>
where
    F: FnMut(&mut Tree, NodeId) -> Result<()>,
{
    visitor(tree, id)?;
    let children = tree.children(id).to_vec();
    for child in children {
        walk(tree, child, visitor)?;
    }
    Ok(())
}
