//! Panel document parsing and component extraction.
//!
//! This module reads SVG panel files into a namespace-aware element tree and
//! pulls the component markers out of the `components` layer.

pub mod panel;
pub mod svg;

// Re-export commonly used types and functions
pub use panel::{panel_to_components, PanelExtractor};
pub use svg::{Document, Element};
