//! Owned parser output and its import into the arena.

use super::node::{Kind, Node, NodeId};
use super::tree::Tree;

/// A node as handed over by the markup parser.
///
/// The parser builds an ordinary owned tree; [`Tree::from_raw`] moves it into
/// the arena. With the `serde` feature this is also the JSON exchange format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawNode {
    pub kind: Kind,
    pub caption: String,
    pub children: Vec<RawNode>,
    pub heading_level: Option<u8>,
    pub inline_hint: Option<bool>,
}

impl RawNode {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_caption(kind: Kind, caption: impl Into<String>) -> Self {
        Self {
            kind,
            caption: caption.into(),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::with_caption(Kind::Text, content)
    }

    /// Builder-style child append.
    pub fn child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }
}

impl Tree {
    /// Import a parser tree into a fresh arena.
    ///
    /// Children lists are filled in pre-order; parent links are left empty,
    /// exactly as a parser hands them over. The first normalization pass
    /// ([`link_parents`](crate::normalize::link_parents)) derives them.
    pub fn from_raw(root: RawNode) -> Tree {
        let mut nodes = Vec::new();
        import(root, &mut nodes);
        Tree::from_nodes(nodes)
    }

    /// Parse a JSON-encoded [`RawNode`] and import it.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Tree> {
        let raw: RawNode = serde_json::from_str(json)?;
        Ok(Tree::from_raw(raw))
    }
}

fn import(raw: RawNode, nodes: &mut Vec<Node>) -> NodeId {
    let id = NodeId(nodes.len() as u32);
    nodes.push(Node {
        kind: raw.kind,
        caption: raw.caption,
        children: Vec::with_capacity(raw.children.len()),
        parent: None,
        heading_level: raw.heading_level,
        inline_hint: raw.inline_hint,
    });
    for child in raw.children {
        let child_id = import(child, nodes);
        nodes[id.0 as usize].children.push(child_id);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_preserves_order_without_parents() {
        let raw = RawNode::new(Kind::Article)
            .child(RawNode::new(Kind::Paragraph).child(RawNode::text("one")))
            .child(RawNode::text("two"));

        let tree = Tree::from_raw(raw);
        assert_eq!(tree.node_count(), 4);

        let top = tree.children(NodeId::ROOT).to_vec();
        assert_eq!(top.len(), 2);
        assert_eq!(tree.kind(top[0]), Some(Kind::Paragraph));
        assert_eq!(tree.caption(top[1]), "two");
        assert_eq!(tree.caption(tree.children(top[0])[0]), "one");
        assert_eq!(tree.parent(top[0]), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = r#"{
            "kind": "Article",
            "children": [
                {"kind": "Tag", "caption": "br"},
                {"kind": "ImageLink", "inline_hint": true}
            ]
        }"#;
        let tree = Tree::from_json(json).unwrap();
        let top = tree.children(NodeId::ROOT).to_vec();
        assert_eq!(tree.kind(top[0]), Some(Kind::Tag));
        assert_eq!(tree.caption(top[0]), "br");
        assert_eq!(tree.node(top[1]).unwrap().inline_hint, Some(true));
    }
}
