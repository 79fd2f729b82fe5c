//! Passes 1-2: parent linking and tag reclassification.

use crate::classify::{heading_level, tag_kind};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::model::{Kind, NodeId, Tree};

use super::pass::walk_pre_order;

/// Point every reachable child at the node whose children list holds it.
///
/// Parser output only records the downward edges; this pass derives the
/// back-references every later pass navigates with. Running it on a linked
/// tree changes nothing.
pub fn link_parents(tree: &mut Tree) -> Result<()> {
    if let Some(root) = tree.node_mut(NodeId::ROOT) {
        root.parent = None;
    }
    link_children(tree, NodeId::ROOT)
}

fn link_children(tree: &mut Tree, id: NodeId) -> Result<()> {
    let children = tree.children(id).to_vec();
    for child in children {
        tree.node_mut(child).ok_or(Error::UnknownNode(child))?.parent = Some(id);
        link_children(tree, child)?;
    }
    Ok(())
}

/// Upgrade generic `Tag` nodes to their specific kinds.
///
/// `h1`..`h6` become sections carrying the heading level. Other names go
/// through the tag table; unknown names are reported and left as `Tag`.
pub fn fix_tags(tree: &mut Tree, diagnostics: &mut Diagnostics) -> Result<()> {
    walk_pre_order(tree, |tree, id| {
        if tree.kind(id) == Some(Kind::Tag) {
            fix_tag(tree, id, diagnostics);
        }
        Ok(())
    })
}

fn fix_tag(tree: &mut Tree, id: NodeId, diagnostics: &mut Diagnostics) {
    let Some(node) = tree.node_mut(id) else {
        return;
    };

    if let Some(level) = heading_level(&node.caption) {
        node.kind = Kind::Section;
        node.heading_level = Some(level);
        node.caption.clear();
    } else if let Some(kind) = tag_kind(&node.caption) {
        node.kind = kind;
    } else {
        diagnostics.warn(Warning::UnknownTag {
            node: id,
            name: node.caption.clone(),
        });
    }
}
