//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a server log
///
/// Unrecognized lines are never errors; only the input itself can fail.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Log file not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read log")]
    Unexpected(#[from] std::io::Error),
}

impl ParseError {
    /// True when the input could not be located or opened
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParseError::NotFound { .. })
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
