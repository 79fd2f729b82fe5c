//! Maps literal parser tokens to semantic kinds.
//!
//! The parser keeps the literal markup that opened a generic node in its
//! caption. These tables define which literals have a specific meaning.

mod layout;

pub use layout::Layout;

use crate::model::Kind;

/// Map a character-style token to its kind.
///
/// Quote markers (`''`, `'''`) and the definition-list markers (`;`, `:`)
/// are structural and handled by the style pass, not by this table.
pub fn style_kind(token: &str) -> Option<Kind> {
    let kind = match token {
        "u" => Kind::Underline,
        // `s` is the deprecated spelling of strike
        "s" | "strike" => Kind::Strike,
        "small" => Kind::Small,
        "big" => Kind::Big,
        "sup" => Kind::Sup,
        "sub" => Kind::Sub,
        "cite" => Kind::Cite,
        "overline" => Kind::Overline,
        _ => return None,
    };
    Some(kind)
}

/// Map a tag name to its kind.
pub fn tag_kind(name: &str) -> Option<Kind> {
    let kind = match name {
        "code" => Kind::Code,
        "br" => Kind::BreakingReturn,
        "hr" => Kind::HorizontalRule,
        "index" => Kind::Index,
        "tt" => Kind::Teletyped,
        "ref" => Kind::Reference,
        "references" => Kind::ReferenceList,
        "gallery" => Kind::Gallery,
        "center" => Kind::Center,
        "div" => Kind::Div,
        "span" => Kind::Span,
        "strike" => Kind::Strike,
        "imagemap" => Kind::ImageMap,
        _ => return None,
    };
    Some(kind)
}

/// Heading level for `h1`..`h6` tag names.
pub fn heading_level(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Every literal in the style table, for exhaustive checks.
pub const STYLE_TOKENS: &[&str] = &[
    "u", "s", "strike", "small", "big", "sup", "sub", "cite", "overline",
];

/// Every literal in the tag table, for exhaustive checks.
pub const TAG_NAMES: &[&str] = &[
    "code",
    "br",
    "hr",
    "index",
    "tt",
    "ref",
    "references",
    "gallery",
    "center",
    "div",
    "span",
    "strike",
    "imagemap",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_literal_maps() {
        for token in STYLE_TOKENS {
            assert!(style_kind(token).is_some(), "style {token}");
        }
        for name in TAG_NAMES {
            assert!(tag_kind(name).is_some(), "tag {name}");
        }
    }

    #[test]
    fn test_strike_spellings() {
        assert_eq!(style_kind("s"), Some(Kind::Strike));
        assert_eq!(style_kind("strike"), Some(Kind::Strike));
        assert_eq!(tag_kind("strike"), Some(Kind::Strike));
    }

    #[test]
    fn test_unknown_literals() {
        assert_eq!(style_kind("blink"), None);
        assert_eq!(style_kind("''"), None);
        assert_eq!(tag_kind("marquee"), None);
        assert_eq!(tag_kind("h1"), None);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("h"), None);
    }
}
