//! Service layer for business logic.
//!
//! This module composes the parser, extractor, and generator into the
//! operations the command line exposes.

pub mod module_source;

// Re-export commonly used types and functions
pub use module_source::{extract_panel, generate_module_source, ModuleSource};
