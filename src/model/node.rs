//! Node types and kinds.

/// Unique identifier for a node within a [`Tree`](super::Tree).
///
/// Identifiers are indices into the tree's arena. They never own the node
/// they point to; a parent link is just a `NodeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);
}

/// Semantic kind of a node.
///
/// The parser emits document-structure kinds, leaf kinds it already
/// distinguishes (links, text, math), and three generic kinds:
/// - `Style` carries the literal markup token in its caption (`''`, `;`, `sup`)
/// - `Tag` carries the literal tag name in its caption (`ref`, `br`, `h2`)
/// - `Group` only groups parser output and has no meaning of its own
///
/// Normalization upgrades generic nodes to the specific kinds below.
/// A node is never downgraded back to a generic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    // Document structure
    Book,
    Chapter,
    #[default]
    Article,
    /// Section; `Node::heading_level` is set when it came from an `<hN>` tag.
    Section,
    Paragraph,
    /// Preformatted block. Text below it is kept byte-exact.
    PreFormatted,
    Table,
    Row,
    Cell,
    ItemList,
    Item,
    Timeline,

    // Leaves the parser already distinguishes
    /// Leaf text; the caption is the text content.
    Text,
    Url,
    NamedUrl,
    Link,
    CategoryLink,
    SpecialLink,
    /// Embedded image. Layout depends on `Node::inline_hint`.
    ImageLink,
    /// Math block. Layout depends on the caption.
    Math,
    Magic,

    // Generic
    /// Style node carrying the literal opening token.
    Style,
    /// Tag node carrying the literal tag name.
    Tag,
    /// Grouping node with no semantics.
    Group,

    // Derived from Style
    Emphasized,
    Strong,
    DefinitionList,
    DefinitionTerm,
    DefinitionDescription,
    /// Left-indented block (`:` outside a definition list).
    Indented,
    Overline,
    Underline,
    Sub,
    Sup,
    Small,
    Big,
    Cite,
    Strike,

    // Derived from Tag
    Code,
    /// Forced line break (`<br>`).
    BreakingReturn,
    HorizontalRule,
    Index,
    Teletyped,
    Reference,
    ReferenceList,
    Gallery,
    Center,
    Div,
    Span,
    ImageMap,
}

impl Kind {
    /// Check if this kind has not been narrowed to a specific semantic type.
    pub fn is_generic(self) -> bool {
        matches!(self, Kind::Style | Kind::Tag | Kind::Group)
    }
}

/// A node in the tree.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Semantic kind. Mutable during reclassification.
    pub kind: Kind,
    /// Literal token for generic nodes, text content for `Text`.
    pub caption: String,
    /// Children in reading order.
    pub children: Vec<NodeId>,
    /// Parent node (None for the root and for detached nodes).
    pub parent: Option<NodeId>,
    /// Heading level 1-6 for sections created from `<h1>`..`<h6>`.
    pub heading_level: Option<u8>,
    /// Parser-supplied layout hint for image embeds.
    pub inline_hint: Option<bool>,
}

impl Node {
    /// Create a new node with an empty caption.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Create a node carrying a caption (literal token or text).
    pub fn with_caption(kind: Kind, caption: impl Into<String>) -> Self {
        Self {
            kind,
            caption: caption.into(),
            ..Default::default()
        }
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_caption(Kind::Text, content)
    }
}
