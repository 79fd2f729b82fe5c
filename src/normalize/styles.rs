//! Pass 5: Style-token reclassification.

use crate::classify::style_kind;
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::model::{Kind, Node, NodeId, Tree};

use super::pass::walk_pre_order;
use super::predicates::is_blank;

/// Map generic `Style` nodes to logical markup.
///
/// Quote markers become emphasis:
/// - `''` becomes `Emphasized`
/// - `'''` becomes `Strong`
/// - `'''''` becomes `Strong > Emphasized`
///
/// Definition markers are regrouped across siblings. The parser emits
/// `; term`, `: desc`, `: desc` as three sibling style nodes; this pass
/// turns them into one `DefinitionList > [DefinitionTerm, DefinitionDescription,
/// DefinitionDescription]`. Blank text between the markers (the newlines
/// of the source) does not break the list. A `:` with no list before it is
/// an `Indented` block and keeps its token, whose length gives the
/// indentation depth.
///
/// Other tokens go through the style table; unknown ones are reported and
/// the node stays `Style`.
pub fn fix_styles(tree: &mut Tree, diagnostics: &mut Diagnostics) -> Result<()> {
    walk_pre_order(tree, |tree, id| {
        if tree.kind(id) == Some(Kind::Style) {
            fix_style(tree, id, diagnostics)?;
        }
        Ok(())
    })
}

fn fix_style(tree: &mut Tree, id: NodeId, diagnostics: &mut Diagnostics) -> Result<()> {
    let token = tree.caption(id).to_string();
    match token.as_str() {
        "''" => retag(tree, id, Kind::Emphasized),
        "'''" => retag(tree, id, Kind::Strong),
        "'''''" => {
            retag(tree, id, Kind::Strong);
            let em = tree.alloc_node(Node::new(Kind::Emphasized));
            adopt_children(tree, em, id)?;
            tree.append_child(id, em)?;
        }
        ";" => match preceding_definition_list(tree, id) {
            Some(list) => {
                retag(tree, id, Kind::DefinitionTerm);
                append_to_list(tree, list, id)?;
            }
            None => {
                retag(tree, id, Kind::DefinitionList);
                let term = tree.alloc_node(Node::new(Kind::DefinitionTerm));
                adopt_children(tree, term, id)?;
                tree.append_child(id, term)?;
            }
        },
        t if t.starts_with(':') => match preceding_definition_list(tree, id) {
            Some(list) => {
                retag(tree, id, Kind::DefinitionDescription);
                append_to_list(tree, list, id)?;
            }
            None => {
                if let Some(node) = tree.node_mut(id) {
                    node.kind = Kind::Indented;
                }
            }
        },
        t => match style_kind(t) {
            Some(kind) => retag(tree, id, kind),
            None => diagnostics.warn(Warning::UnknownStyle {
                node: id,
                token: t.to_string(),
            }),
        },
    }
    Ok(())
}

/// Change a node's kind in place and clear its literal token.
fn retag(tree: &mut Tree, id: NodeId, kind: Kind) {
    if let Some(node) = tree.node_mut(id) {
        node.kind = kind;
        node.caption.clear();
    }
}

/// Move all children of `from` under `to`, keeping their order.
fn adopt_children(tree: &mut Tree, to: NodeId, from: NodeId) -> Result<()> {
    let children = tree.children(from).to_vec();
    for child in children {
        tree.append_child(to, child)?;
    }
    Ok(())
}

/// The definition list a `;`/`:` marker continues, looking past blank text.
fn preceding_definition_list(tree: &Tree, id: NodeId) -> Option<NodeId> {
    let mut prev = tree.previous(id);
    while let Some(p) = prev {
        let node = tree.node(p)?;
        match node.kind {
            Kind::DefinitionList => return Some(p),
            Kind::Text if is_blank(&node.caption) => prev = tree.previous(p),
            _ => return None,
        }
    }
    None
}

/// Relocate `item` to the end of `list`.
fn append_to_list(tree: &mut Tree, list: NodeId, item: NodeId) -> Result<()> {
    match tree.last_child(list) {
        Some(last) => tree.move_to(item, last, false),
        None => tree.append_child(list, item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(tree: &mut Tree, parent: NodeId, token: &str, text: &str) -> NodeId {
        let id = tree
            .push(parent, Node::with_caption(Kind::Style, token))
            .unwrap();
        tree.push(id, Node::text(text)).unwrap();
        id
    }

    fn run(tree: &mut Tree) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        fix_styles(tree, &mut diagnostics).unwrap();
        tree.check_integrity().unwrap();
        diagnostics
    }

    #[test]
    fn test_quote_markers() {
        let mut tree = Tree::new(Kind::Paragraph);
        let em = style(&mut tree, NodeId::ROOT, "''", "a");
        let strong = style(&mut tree, NodeId::ROOT, "'''", "b");

        run(&mut tree);

        assert_eq!(tree.kind(em), Some(Kind::Emphasized));
        assert_eq!(tree.caption(em), "");
        assert_eq!(tree.kind(strong), Some(Kind::Strong));
        assert_eq!(tree.caption(strong), "");
    }

    #[test]
    fn test_strong_emphasis_split() {
        let mut tree = Tree::new(Kind::Paragraph);
        let node = tree
            .push(NodeId::ROOT, Node::with_caption(Kind::Style, "'''''"))
            .unwrap();
        let x = tree.push(node, Node::text("x")).unwrap();
        let y = tree.push(node, Node::text("y")).unwrap();

        run(&mut tree);

        assert_eq!(tree.kind(node), Some(Kind::Strong));
        let inner = tree.children(node).to_vec();
        assert_eq!(inner.len(), 1);
        assert_eq!(tree.kind(inner[0]), Some(Kind::Emphasized));
        assert_eq!(tree.children(inner[0]), &[x, y]);
    }

    #[test]
    fn test_definition_list_grouping() {
        let mut tree = Tree::new(Kind::Article);
        let dl = style(&mut tree, NodeId::ROOT, ";", "term");
        let d1 = style(&mut tree, NodeId::ROOT, ":", "first");
        let d2 = style(&mut tree, NodeId::ROOT, ":", "second");

        run(&mut tree);

        assert_eq!(tree.children(NodeId::ROOT), &[dl]);
        assert_eq!(tree.kind(dl), Some(Kind::DefinitionList));

        let items = tree.children(dl).to_vec();
        assert_eq!(items.len(), 3);
        assert_eq!(tree.kind(items[0]), Some(Kind::DefinitionTerm));
        assert_eq!(tree.caption(tree.children(items[0])[0]), "term");
        // The `;` token is dropped once the kinds say what the nodes are
        assert_eq!(tree.caption(dl), "");
        assert_eq!(tree.caption(items[0]), "");
        assert_eq!(&items[1..], &[d1, d2]);
        assert_eq!(tree.kind(d1), Some(Kind::DefinitionDescription));
        assert_eq!(tree.caption(d1), "");
        assert_eq!(tree.caption(tree.children(d2)[0]), "second");
    }

    #[test]
    fn test_second_term_joins_list() {
        let mut tree = Tree::new(Kind::Article);
        let dl = style(&mut tree, NodeId::ROOT, ";", "a");
        let d1 = style(&mut tree, NodeId::ROOT, ":", "b");
        let t2 = style(&mut tree, NodeId::ROOT, ";", "c");

        run(&mut tree);

        assert_eq!(tree.children(NodeId::ROOT), &[dl]);
        let items = tree.children(dl).to_vec();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], d1);
        assert_eq!(items[2], t2);
        assert_eq!(tree.kind(t2), Some(Kind::DefinitionTerm));
    }

    #[test]
    fn test_blank_text_between_markers_keeps_list() {
        let mut tree = Tree::new(Kind::Article);
        let dl = style(&mut tree, NodeId::ROOT, ";", "term");
        let ws = tree.push(NodeId::ROOT, Node::text(" ")).unwrap();
        let desc = style(&mut tree, NodeId::ROOT, ":", "desc");

        run(&mut tree);

        // The blank text stays behind for whitespace cleanup.
        assert_eq!(tree.children(NodeId::ROOT), &[dl, ws]);
        assert_eq!(tree.kind(desc), Some(Kind::DefinitionDescription));
        assert_eq!(tree.parent(desc), Some(dl));
        assert_eq!(tree.children(dl).len(), 2);
    }

    #[test]
    fn test_text_between_markers_ends_list() {
        let mut tree = Tree::new(Kind::Article);
        style(&mut tree, NodeId::ROOT, ";", "term");
        tree.push(NodeId::ROOT, Node::text("words")).unwrap();
        let ind = style(&mut tree, NodeId::ROOT, ":", "desc");

        run(&mut tree);

        assert_eq!(tree.kind(ind), Some(Kind::Indented));
        assert_eq!(tree.parent(ind), Some(NodeId::ROOT));
    }

    #[test]
    fn test_colon_without_list_is_indented() {
        let mut tree = Tree::new(Kind::Article);
        let p = tree.push(NodeId::ROOT, Node::new(Kind::Paragraph)).unwrap();
        let ind = style(&mut tree, NodeId::ROOT, "::", "deep");

        run(&mut tree);

        assert_eq!(tree.children(NodeId::ROOT), &[p, ind]);
        assert_eq!(tree.kind(ind), Some(Kind::Indented));
        assert_eq!(tree.caption(ind), "::");
    }

    #[test]
    fn test_table_styles() {
        let mut tree = Tree::new(Kind::Paragraph);
        let sup = style(&mut tree, NodeId::ROOT, "sup", "2");
        let s = style(&mut tree, NodeId::ROOT, "s", "gone");

        run(&mut tree);

        assert_eq!(tree.kind(sup), Some(Kind::Sup));
        assert_eq!(tree.kind(s), Some(Kind::Strike));
        assert_eq!(tree.caption(s), "");
    }

    #[test]
    fn test_nested_styles_are_reached() {
        let mut tree = Tree::new(Kind::Paragraph);
        let outer = style(&mut tree, NodeId::ROOT, "'''''", "x");
        let inner = style(&mut tree, outer, "sub", "y");

        run(&mut tree);

        assert_eq!(tree.kind(inner), Some(Kind::Sub));
        // inner moved under the new Emphasized child
        let em = tree.children(outer)[0];
        assert_eq!(tree.parent(inner), Some(em));
    }

    #[test]
    fn test_unknown_style_is_reported() {
        let mut tree = Tree::new(Kind::Paragraph);
        let node = style(&mut tree, NodeId::ROOT, "blink", "x");

        let diagnostics = run(&mut tree);

        assert_eq!(tree.kind(node), Some(Kind::Style));
        assert_eq!(tree.caption(node), "blink");
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::UnknownStyle {
                node,
                token: "blink".into()
            }]
        );
    }
}
