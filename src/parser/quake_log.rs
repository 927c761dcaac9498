//! Main entry points for parsing a server log.
//!
//! Reads lines in file order, classifies each one and feeds it to a
//! fresh [`Aggregator`]. A parse either returns the complete match log
//! or an error, never a partial result.

use super::line::classify_line;
use super::schema::MatchLog;
use crate::aggregator::Aggregator;
use crate::utils::error::ParseError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a log file from disk
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `path` - Path to the server log
///
/// # Returns
/// Every match in the log, in order of appearance
///
/// # Errors
/// * `ParseError::NotFound` - The file does not exist or cannot be opened
/// * `ParseError::Unexpected` - Reading failed part way through
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<MatchLog, ParseError> {
    let path = path.as_ref();

    info!("Reading log file: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let log = parse_reader(BufReader::new(file))?;

    info!("Parsed {} matches from {}", log.len(), path.display());

    Ok(log)
}

/// Parse a log from any buffered reader
///
/// **Public** - useful for stdin, in-memory buffers and tests
///
/// # Errors
/// * `ParseError::Unexpected` - I/O failure or invalid UTF-8
pub fn parse_reader<R: BufRead>(reader: R) -> Result<MatchLog, ParseError> {
    let mut aggregator = Aggregator::new();
    let mut line_count = 0usize;

    for line in reader.lines() {
        let line = line?;
        line_count += 1;
        aggregator.apply(classify_line(&line));
    }

    debug!("Processed {} lines", line_count);

    Ok(aggregator.finish())
}

/// Parse lines that are already in memory
///
/// **Public** - infallible variant of parse_reader
pub fn parse_lines<'a, I>(lines: I) -> MatchLog
where
    I: IntoIterator<Item = &'a str>,
{
    let mut aggregator = Aggregator::new();
    for line in lines {
        aggregator.apply(classify_line(line));
    }
    aggregator.finish()
}
