//! Marker fill color extraction from SVG inline styles.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a `fill:#RRGGBB` declaration inside an inline CSS style string.
static FILL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|;)\s*fill\s*:\s*#([0-9A-Fa-f]{6})\s*(?:;|$)").expect("fill regex is valid")
});

/// Six hex digits of a marker's fill, exactly as written in the style.
///
/// Digits keep their case: the palette is lowercase, and `#FF0000` is a
/// valid fill that simply belongs to no component kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FillColor(String);

impl FillColor {
    /// Extracts the fill color from an SVG inline style such as
    /// `"fill:#ff0000;fill-opacity:1;stroke:none"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the style has no `fill:#RRGGBB` declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgen::models::FillColor;
    ///
    /// let fill = FillColor::from_style("fill:#00ff00;stroke:none").unwrap();
    /// assert_eq!(fill.as_str(), "00ff00");
    /// ```
    pub fn from_style(style: &str) -> Result<Self> {
        let captures = FILL_REGEX
            .captures(style)
            .context(format!("no fill:#RRGGBB declaration in style \"{style}\""))?;
        Ok(Self(captures[1].to_string()))
    }

    /// The hex digits without `#`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
