//! JSON match log output writer.
//!
//! Writes MatchLog values to strings or files, pretty or compact.

use crate::parser::schema::MatchLog;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a match log to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `log` - Match statistics to write
/// * `output_path` - Path to output JSON file
/// * `compact` - Skip pretty printing
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_match_log(
    log: &MatchLog,
    output_path: impl AsRef<Path>,
    compact: bool,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing match statistics to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    if compact {
        serde_json::to_writer(&mut writer, log)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, log)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(
        "Match statistics written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Render a match log as a JSON string
///
/// **Public** - used for stdout output and tests
pub fn match_log_to_string(log: &MatchLog, compact: bool) -> Result<String, OutputError> {
    let json = if compact {
        serde_json::to_string(log)?
    } else {
        serde_json::to_string_pretty(log)?
    };
    Ok(json)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
