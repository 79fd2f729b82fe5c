//! Inline/block layout category.

use crate::model::{Kind, NodeId, Tree};
use crate::options::Options;

/// Whether a node participates in paragraph flow or breaks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Inline,
    Block,
}

impl Kind {
    /// Layout category from the kind alone.
    ///
    /// `ImageLink` and `Math` report their typical category here; the
    /// per-node answer comes from [`Tree::layout_with`].
    pub fn static_layout(self) -> Layout {
        match self {
            Kind::Url
            | Kind::NamedUrl
            | Kind::Link
            | Kind::CategoryLink
            | Kind::SpecialLink
            | Kind::Style
            | Kind::Text
            | Kind::Index
            | Kind::Teletyped
            | Kind::BreakingReturn
            | Kind::Reference
            | Kind::Strong
            | Kind::Emphasized
            | Kind::Sub
            | Kind::Sup
            | Kind::Small
            | Kind::Underline
            | Kind::Overline
            | Kind::Strike
            | Kind::Span
            | Kind::Big
            | Kind::ImageLink
            | Kind::Math => Layout::Inline,

            Kind::Book
            | Kind::Chapter
            | Kind::Article
            | Kind::Section
            | Kind::Paragraph
            | Kind::PreFormatted
            | Kind::Cell
            | Kind::Row
            | Kind::Table
            | Kind::Item
            | Kind::ItemList
            | Kind::Timeline
            | Kind::Cite
            | Kind::HorizontalRule
            | Kind::Gallery
            | Kind::Indented
            | Kind::DefinitionList
            | Kind::DefinitionTerm
            | Kind::DefinitionDescription
            | Kind::ReferenceList => Layout::Block,

            // No fixed category; treated as block.
            Kind::Magic
            | Kind::Tag
            | Kind::Group
            | Kind::Code
            | Kind::Center
            | Kind::Div
            | Kind::ImageMap => Layout::Block,
        }
    }
}

impl Tree {
    /// Layout category of a node, resolving per-instance kinds.
    ///
    /// - `ImageLink` is inline only when the parser marked it as an inline
    ///   embed; otherwise it renders as a standalone figure.
    /// - `Math` is block when its source opens a display environment.
    pub fn layout_with(&self, id: NodeId, options: &Options) -> Option<Layout> {
        let node = self.node(id)?;
        let layout = match node.kind {
            Kind::ImageLink => {
                if node.inline_hint == Some(true) {
                    Layout::Inline
                } else {
                    Layout::Block
                }
            }
            Kind::Math => {
                if options.is_display_math(&node.caption) {
                    Layout::Block
                } else {
                    Layout::Inline
                }
            }
            kind => kind.static_layout(),
        };
        Some(layout)
    }

    /// Layout category with default options.
    pub fn layout(&self, id: NodeId) -> Option<Layout> {
        self.layout_with(id, &Options::default())
    }

    pub fn is_inline(&self, id: NodeId) -> bool {
        self.layout(id) == Some(Layout::Inline)
    }

    pub fn is_block(&self, id: NodeId) -> bool {
        self.layout(id) == Some(Layout::Block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    #[test]
    fn test_static_categories() {
        assert_eq!(Kind::Text.static_layout(), Layout::Inline);
        assert_eq!(Kind::Strong.static_layout(), Layout::Inline);
        assert_eq!(Kind::BreakingReturn.static_layout(), Layout::Inline);
        assert_eq!(Kind::Paragraph.static_layout(), Layout::Block);
        assert_eq!(Kind::DefinitionList.static_layout(), Layout::Block);
        assert_eq!(Kind::Cite.static_layout(), Layout::Block);
        assert_eq!(Kind::Tag.static_layout(), Layout::Block);
    }

    #[test]
    fn test_image_layout_follows_hint() {
        let mut tree = Tree::new(Kind::Article);
        let mut inline = Node::new(Kind::ImageLink);
        inline.inline_hint = Some(true);
        let inline = tree.push(NodeId::ROOT, inline).unwrap();
        let figure = tree.push(NodeId::ROOT, Node::new(Kind::ImageLink)).unwrap();

        assert!(tree.is_inline(inline));
        assert!(tree.is_block(figure));
    }

    #[test]
    fn test_math_layout_follows_source() {
        let mut tree = Tree::new(Kind::Article);
        let inline = tree
            .push(NodeId::ROOT, Node::with_caption(Kind::Math, "a^2+b^2"))
            .unwrap();
        let display = tree
            .push(
                NodeId::ROOT,
                Node::with_caption(Kind::Math, "\n\\begin{align} a &= b \\end{align}"),
            )
            .unwrap();

        assert!(tree.is_inline(inline));
        assert!(tree.is_block(display));

        let options = Options {
            display_math: vec!["\\begin{matrix}".into()],
            ..Options::default()
        };
        assert_eq!(tree.layout_with(display, &options), Some(Layout::Inline));
    }

    #[test]
    fn test_unknown_node_has_no_layout() {
        let tree = Tree::new(Kind::Article);
        assert_eq!(tree.layout(NodeId(9)), None);
        assert!(!tree.is_block(NodeId(9)));
    }
}
