//! Widget source generation.
//!
//! This module renders extracted panel components into VCV Rack
//! `ModuleWidget` construction statements.

pub mod source;

// Re-export generator types
pub use source::{components_to_source, format_coord, SourceGenerator};
