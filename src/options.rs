//! Normalization options.

/// Math environments that render as display (block) equations by default.
pub const DEFAULT_DISPLAY_MATH: &[&str] = &["\\begin{align}", "\\begin{alignat}"];

/// Tunables for the normalization pipeline.
///
/// The defaults reproduce the standard behavior; hosts loading options from
/// a file only need to list the fields they change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Caption prefixes that make a `Math` node a block equation.
    pub display_math: Vec<String>,
    /// Collapse newline/tab runs in text to a single space.
    pub collapse_whitespace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            display_math: DEFAULT_DISPLAY_MATH.iter().map(|s| s.to_string()).collect(),
            collapse_whitespace: true,
        }
    }
}

impl Options {
    /// Check if math source starts a display environment.
    pub fn is_display_math(&self, source: &str) -> bool {
        let source = source.trim();
        self.display_math
            .iter()
            .any(|prefix| source.starts_with(prefix.as_str()))
    }
}
