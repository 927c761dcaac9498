//! Aggregation of classified log lines into match statistics.
//!
//! This module transforms the line stream into:
//! - Per-match kill counts, players and scores
//! - Cross-match totals and player rankings

pub mod match_builder;
pub mod metrics;

// Re-export main types and functions
pub use match_builder::{aggregate, Aggregator};
pub use metrics::{calculate_summary, LogSummary, RankedPlayer};
