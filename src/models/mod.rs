//! Data models for extracted panel components and module identifiers.
//!
//! Models are plain data, independent of the SVG format and of the
//! generated statement syntax.

pub mod component;
pub mod fill;
pub mod identifier;

// Re-export all model types
pub use component::{
    round_coord, Component, ComponentKind, ComponentName, PanelComponents, ParamDirective,
    Placement,
};
pub use identifier::{is_valid_slug, slug_to_identifier, ModuleIdentifier};
pub use fill::FillColor;
