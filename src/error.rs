//! Error types raised by the panel engine.
//!
//! Every failure is fatal to a run. The variants separate problems with the
//! user's input (slug, missing layer) from malformed panel documents so the
//! calling layer can pick a presentation and exit code.

use thiserror::Error;

/// Errors produced while parsing, extracting, or generating a panel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// Slug contains characters outside `[A-Za-z0-9_-]` or is empty.
    #[error("Slug must only contain ASCII letters, numbers, '-', and '_' (got {slug:?})")]
    InvalidSlug {
        /// The rejected slug
        slug: String,
    },

    /// No layer group carries the expected label.
    #[error("Could not find \"{label}\" layer on panel")]
    LayerNotFound {
        /// Layer label that was searched for
        label: String,
    },

    /// More than one layer group carries the expected label (strict mode only).
    #[error("Found {count} \"{label}\" layers on panel, expected exactly one")]
    AmbiguousLayer {
        /// Layer label that was searched for
        label: String,
        /// Number of matching groups
        count: usize,
    },

    /// Shape has neither a label nor an id.
    #[error("<{tag}> in components layer has no inkscape:label or id")]
    UnnamedShape {
        /// Local tag name of the shape
        tag: String,
    },

    /// Shape style carries no `fill:#RRGGBB` color.
    #[error("Could not parse fill color of '{element}': {reason}")]
    StyleParse {
        /// Display name of the shape
        element: String,
        /// What was wrong with the style
        reason: String,
    },

    /// Geometry attribute is missing or not a number.
    #[error("Invalid geometry on '{element}': attribute '{attribute}' {reason}")]
    InvalidGeometry {
        /// Display name of the shape
        element: String,
        /// Offending attribute name
        attribute: String,
        /// What was wrong with the value
        reason: String,
    },

    /// Panel source is not well-formed XML.
    #[error("Failed to parse panel document: {0}")]
    Document(String),
}

impl PanelError {
    /// Returns true for problems with the user's input rather than the document.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSlug { .. } | Self::LayerNotFound { .. } | Self::AmbiguousLayer { .. }
        )
    }
}

/// Result type for panel engine operations.
pub type Result<T> = std::result::Result<T, PanelError>;
