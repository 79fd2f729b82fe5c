//! Pass 7: Forced-break removal.

use crate::error::Result;
use crate::model::{Kind, NodeId, Tree};
use crate::options::Options;

use super::pass::walk_pre_order;
use super::predicates::at_block_boundary;

/// Remove `<br>` breaks that sit next to a block.
///
/// A forced line break directly before or after a block (or at the edge of
/// one) only adds an empty line; the block already breaks the flow.
pub fn remove_breaks(tree: &mut Tree, options: &Options) -> Result<()> {
    walk_pre_order(tree, |tree, id| remove_break(tree, id, options))
}

fn remove_break(tree: &mut Tree, id: NodeId, options: &Options) -> Result<()> {
    if tree.kind(id) != Some(Kind::BreakingReturn) {
        return Ok(());
    }
    match tree.parent(id) {
        Some(parent) if at_block_boundary(tree, id, options) => tree.remove_child(parent, id),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    #[test]
    fn test_removes_break_at_paragraph_end() {
        let mut tree = Tree::new(Kind::Article);
        let p = tree.push(NodeId::ROOT, Node::new(Kind::Paragraph)).unwrap();
        let text = tree.push(p, Node::text("line")).unwrap();
        tree.push(p, Node::new(Kind::BreakingReturn)).unwrap();
        tree.push(NodeId::ROOT, Node::new(Kind::Table)).unwrap();

        remove_breaks(&mut tree, &Options::default()).unwrap();

        assert_eq!(tree.children(p), &[text]);
        tree.check_integrity().unwrap();
    }

    #[test]
    fn test_keeps_break_between_text() {
        let mut tree = Tree::new(Kind::Article);
        let p = tree.push(NodeId::ROOT, Node::new(Kind::Paragraph)).unwrap();
        tree.push(p, Node::text("one")).unwrap();
        let br = tree.push(p, Node::new(Kind::BreakingReturn)).unwrap();
        tree.push(p, Node::text("two")).unwrap();

        remove_breaks(&mut tree, &Options::default()).unwrap();

        assert_eq!(tree.children(p).len(), 3);
        assert_eq!(tree.parent(br), Some(p));
    }

    #[test]
    fn test_removes_break_before_display_math() {
        let mut tree = Tree::new(Kind::Article);
        let p = tree.push(NodeId::ROOT, Node::new(Kind::Paragraph)).unwrap();
        tree.push(p, Node::text("see")).unwrap();
        let br = tree.push(p, Node::new(Kind::BreakingReturn)).unwrap();
        tree.push(
            p,
            Node::with_caption(Kind::Math, "\\begin{align} x \\end{align}"),
        )
        .unwrap();

        remove_breaks(&mut tree, &Options::default()).unwrap();

        assert_eq!(tree.parent(br), None);
        assert_eq!(tree.children(p).len(), 2);
    }
}
