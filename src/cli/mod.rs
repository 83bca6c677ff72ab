//! CLI command handlers for Panelgen.
//!
//! Commands do the file I/O and reporting around the panel engine and map
//! its errors to exit codes.

pub mod common;
pub mod createmodule;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use createmodule::CreateModuleArgs;
pub use inspect::InspectArgs;
