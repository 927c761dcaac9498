//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod parse;

// Re-export main command functions
pub use parse::{execute_parse, failure_message, validate_args, ParseArgs};
