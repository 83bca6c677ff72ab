//! Shared CLI error handling and output helpers.

use crate::error::PanelError;
use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad user input: slug, missing layer, refused overwrite
    ValidationError = 1,
    /// File could not be read or written
    IoError = 2,
    /// Panel document is malformed
    DocumentError = 3,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// User input error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Malformed panel document.
    pub fn document(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::DocumentError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<PanelError> for CliError {
    fn from(error: PanelError) -> Self {
        if error.is_user_error() {
            Self::validation(error.to_string())
        } else {
            Self::document(error.to_string())
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = std::result::Result<T, CliError>;

/// Writes `content` to `path` through a temporary sibling file that is
/// persisted over the destination, so a failed write never leaves a
/// truncated file behind. The temporary file is removed on every error path.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temporary file for: {}", path.display()))?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace: {}", path.display()))?;

    Ok(())
}
