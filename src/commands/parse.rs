//! Parse command implementation.
//!
//! The parse command:
//! 1. Reads and classifies the server log
//! 2. Aggregates per-match statistics
//! 3. Calculates cross-match totals
//! 4. Prints JSON and a text summary, optionally writing JSON to disk

use crate::aggregator::calculate_summary;
use crate::output::{generate_text_summary, match_log_to_string, write_match_log};
use crate::parser::{parse_log_file, MatchLog};
use crate::utils::config::{DEFAULT_LOG_PATH, DEFAULT_TOP_PLAYERS, MAX_TOP_PLAYERS};
use crate::utils::error::ParseError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the parse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ParseArgs {
    /// Server log to read
    pub log_path: PathBuf,

    /// Optional path for a JSON copy of the result
    pub output_json: Option<PathBuf>,

    /// Number of players listed in the ranking
    pub top_players: usize,

    /// Print the JSON result to stdout
    pub print_json: bool,

    /// Emit compact instead of pretty JSON
    pub compact: bool,
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            output_json: None,
            top_players: DEFAULT_TOP_PLAYERS,
            print_json: true,
            compact: false,
        }
    }
}

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The parsed match log, after everything has been printed and written
///
/// # Errors
/// * Missing or unreadable log file (`ParseError` in the error chain)
/// * File write errors
pub fn execute_parse(args: &ParseArgs) -> Result<MatchLog> {
    let start_time = Instant::now();

    info!("Step 1/3: Parsing log file...");
    let log = parse_log_file(&args.log_path)
        .with_context(|| format!("Failed to parse {}", args.log_path.display()))?;

    info!("Step 2/3: Calculating summary...");
    let summary = calculate_summary(&log);
    debug!("Ranking top {} of {} players", args.top_players, summary.player_totals.len());

    info!("Step 3/3: Writing results...");
    if args.print_json {
        let json = match_log_to_string(&log, args.compact)
            .context("Failed to render match statistics")?;
        println!("{}", json);
    }

    if let Some(path) = &args.output_json {
        write_match_log(&log, path, args.compact)
            .context("Failed to write match statistics JSON")?;
        info!("✓ Match statistics written to: {}", path.display());
    }

    println!("\n{}", "=".repeat(50));
    println!("SUMMARY STATISTICS");
    println!("{}", "=".repeat(50));
    println!("{}", generate_text_summary(&summary, args.top_players));

    let elapsed = start_time.elapsed();
    info!("Parse completed in {:.2}s", elapsed.as_secs_f64());

    Ok(log)
}

/// Validate parse arguments
///
/// **Public** - can be called before execute_parse for early validation
pub fn validate_args(args: &ParseArgs) -> Result<()> {
    if args.log_path.as_os_str().is_empty() {
        anyhow::bail!("Log path cannot be empty");
    }

    if args.top_players == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_players > MAX_TOP_PLAYERS {
        anyhow::bail!("top is too large (max {})", MAX_TOP_PLAYERS);
    }

    if let Some(output) = &args.output_json {
        if output == &args.log_path {
            anyhow::bail!("Output path must differ from the log path");
        }
    }

    Ok(())
}

/// Build the message shown to the user for a failed run
///
/// **Public** - a missing log gets its own message and a hint,
/// everything else is reported as unexpected with its full cause chain
pub fn failure_message(err: &anyhow::Error) -> String {
    let not_found = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<ParseError>())
        .find(|parse_err| parse_err.is_not_found());

    match not_found {
        Some(parse_err) => format!(
            "Error: {}\nMake sure the log file exists or pass --log <PATH>.",
            parse_err
        ),
        None => format!("Unexpected error: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&ParseArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_log_path() {
        let args = ParseArgs {
            log_path: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_zero() {
        let args = ParseArgs {
            top_players: 0,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_too_large() {
        let args = ParseArgs {
            top_players: MAX_TOP_PLAYERS + 1,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_overwrites_log() {
        let args = ParseArgs {
            output_json: Some(PathBuf::from(DEFAULT_LOG_PATH)),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_parse_writes_output() {
        let mut log_file = NamedTempFile::new().unwrap();
        writeln!(log_file, "0:00 InitGame: ").unwrap();
        writeln!(log_file, "0:05 Kill: 1 2 3: Alice killed Bob by MOD_ROCKET").unwrap();

        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("matches.json");

        let args = ParseArgs {
            log_path: log_file.path().to_path_buf(),
            output_json: Some(output.clone()),
            print_json: false,
            ..Default::default()
        };

        let log = execute_parse(&args).unwrap();
        assert_eq!(log.len(), 1);
        assert!(output.exists());
    }

    #[test]
    fn test_execute_parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ParseArgs {
            log_path: dir.path().join("missing.log"),
            ..Default::default()
        };

        let err = execute_parse(&args).unwrap_err();
        let parse_err = err.downcast_ref::<ParseError>().unwrap();
        assert!(parse_err.is_not_found());
    }
}
