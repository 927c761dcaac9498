//! Quake Log Stats
//!
//! Per-match kill statistics from Quake 3 Arena server logs.
//!
//! This crate provides the core implementation for the
//! `quake-log` CLI tool: line classification, match aggregation,
//! cross-match summaries and output writers.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install quake-log-stats
//! quake-log --log games.log
//! ```
//!
//! As a library:
//!
//! ```
//! use quake_log_stats::parser::parse_lines;
//!
//! let log = parse_lines([
//!     "0:00 InitGame: ",
//!     "0:05 Kill: 1 2 3: Alice killed Bob by MOD_ROCKET",
//! ]);
//! assert_eq!(log.get("match_1").unwrap().score("Alice"), Some(1));
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
