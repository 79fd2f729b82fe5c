//! Pass 6: List unwrapping.

use crate::error::Result;
use crate::model::{Kind, NodeId, Tree};

use super::pass::walk_pre_order;

/// Lift item lists out of paragraphs that contain nothing else.
///
/// ```text
/// Section > Paragraph > ItemList   =>   Section > ItemList
/// ```
///
/// The emptied paragraph is dropped. Runs after style fixup, which can
/// leave new paragraph/list nestings behind.
pub fn unwrap_lists(tree: &mut Tree) -> Result<()> {
    walk_pre_order(tree, unwrap_list)
}

fn unwrap_list(tree: &mut Tree, id: NodeId) -> Result<()> {
    if tree.kind(id) != Some(Kind::ItemList) {
        return Ok(());
    }
    let Some(paragraph) = tree.parent(id) else {
        return Ok(());
    };
    if tree.kind(paragraph) != Some(Kind::Paragraph) || !tree.siblings(id).is_empty() {
        return Ok(());
    }
    let Some(grandparent) = tree.parent(paragraph) else {
        return Ok(());
    };
    tree.replace_child(grandparent, paragraph, &[id])
}
