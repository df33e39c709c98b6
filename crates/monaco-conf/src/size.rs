//! Integer-or-string size values for editor dimensions

use serde::{Deserialize, Serialize};
use std::fmt;

/// An editor dimension: a bare pixel count or a CSS length string.
///
/// Settings and declarations may write `height = 400` or `height = "60vh"`;
/// both forms deserialize here through the untagged representation. Bare
/// integers gain a `px` suffix when rendered, strings pass through verbatim.
///
/// # Example
///
/// ```
/// use monaco_conf::Dimension;
///
/// assert_eq!(Dimension::Pixels(400).to_css(), "400px");
/// assert_eq!(Dimension::Css("100%".to_string()).to_css(), "100%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Bare integer, rendered with a `px` suffix
    Pixels(i64),
    /// Any CSS length ("100%", "60vh", "40em"), passed through unchanged
    Css(String),
}

impl Dimension {
    /// Format as a CSS-compatible string.
    pub fn to_css(&self) -> String {
        match self {
            Self::Pixels(pixels) => format!("{pixels}px"),
            Self::Css(css) => css.clone(),
        }
    }
}

impl From<i64> for Dimension {
    fn from(pixels: i64) -> Self {
        Self::Pixels(pixels)
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Self::Css(css.to_string())
    }
}

impl From<String> for Dimension {
    fn from(css: String) -> Self {
        Self::Css(css)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
