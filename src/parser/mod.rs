//! Log parsing and schema definitions.
//!
//! This module handles:
//! - Classifying raw server log lines
//! - Reading log files line by line
//! - Defining the output schema

pub mod line;
pub mod quake_log;
pub mod schema;

// Re-export main types
pub use line::{classify_line, parse_kill_event, KillEvent, LineEvent};
pub use quake_log::{parse_lines, parse_log_file, parse_reader};
pub use schema::{MatchLog, MatchStats};
