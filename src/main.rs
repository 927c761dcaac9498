//! Quake Log Stats CLI
//!
//! Parses a Quake 3 Arena server log and prints per-match kill statistics
//! followed by a summary of the whole log.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use quake_log_stats::commands::{execute_parse, failure_message, validate_args, ParseArgs};
use quake_log_stats::utils::config::{DEFAULT_LOG_PATH, DEFAULT_TOP_PLAYERS, LOG_PATH_ENV};
use std::path::PathBuf;
use std::process::ExitCode;

/// Quake Log Stats - per-match kill statistics from server logs
#[derive(Parser, Debug)]
#[command(name = "quake-log")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Server log to parse
    #[arg(short, long, env = LOG_PATH_ENV, default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,

    /// Also write the JSON result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of players in the ranking
    #[arg(short, long, default_value_t = DEFAULT_TOP_PLAYERS)]
    top: usize,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,

    /// Only print the text summary
    #[arg(long)]
    no_json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Build command arguments and run the parse
///
/// **Private** - internal command dispatch
fn run(cli: Cli) -> Result<()> {
    let args = ParseArgs {
        log_path: cli.log,
        output_json: cli.output,
        top_players: cli.top,
        print_json: !cli.no_json,
        compact: cli.compact,
    };

    validate_args(&args)?;

    let log = execute_parse(&args)?;
    debug!("Finished with {} matches", log.len());

    Ok(())
}
