//! Shared predicates for normalization passes.

use crate::classify::Layout;
use crate::model::{NodeId, Tree};
use crate::options::Options;

/// Check if a node sits at a block boundary.
///
/// The neighbors are looked up asymmetrically:
/// - before: the previous sibling, or the parent itself for a first child
/// - after: the next sibling, or the parent's next sibling for a last child
///
/// The node is at a boundary when either neighbor is missing or is a block.
pub fn at_block_boundary(tree: &Tree, id: NodeId, options: &Options) -> bool {
    let parent = tree.parent(id);
    let before = tree.previous(id).or(parent);
    let after = tree.next(id).or_else(|| parent.and_then(|p| tree.next(p)));

    let is_boundary = |neighbor: Option<NodeId>| {
        neighbor.is_none_or(|n| tree.layout_with(n, options) != Some(Layout::Inline))
    };
    is_boundary(after) || is_boundary(before)
}

/// Check if text is empty or whitespace-only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
