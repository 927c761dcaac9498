//! Output writers for match statistics.
//!
//! This module handles rendering results in various formats:
//! - JSON (pretty and compact, to string or file)
//! - Text summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{match_log_to_string, write_match_log};
pub use text::generate_text_summary;
