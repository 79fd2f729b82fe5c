//! Pass 3: Grouping-node removal.

use crate::error::Result;
use crate::model::{Kind, NodeId, Tree};

/// Splice every `Group` node out of the tree, promoting its children.
///
/// The parser emits `Group` nodes that only bundle output together:
///
/// ```text
/// Paragraph > [Text "a", Group > [Text "b", Group > [Text "c"]]]
/// ```
///
/// becomes `Paragraph > [Text "a", Text "b", Text "c"]`. Nested groups are
/// resolved because the promoted children are walked afterwards. A group at
/// the root has nowhere to splice into and is kept.
pub fn remove_groups(tree: &mut Tree) -> Result<()> {
    remove_groups_at(tree, NodeId::ROOT)
}

fn remove_groups_at(tree: &mut Tree, id: NodeId) -> Result<()> {
    // Snapshot first: splicing empties the group's own children list.
    let children = tree.children(id).to_vec();
    if tree.kind(id) == Some(Kind::Group)
        && let Some(parent) = tree.parent(id)
    {
        tree.replace_child(parent, id, &children)?;
    }
    for child in children {
        remove_groups_at(tree, child)?;
    }
    Ok(())
}
