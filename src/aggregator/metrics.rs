//! Cross-match summary statistics.
//!
//! Everything here is derived from a finished [`MatchLog`] alone; the
//! aggregator's internals are never consulted.

use crate::parser::schema::MatchLog;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Totals across every match of a log
///
/// **Public** - returned from calculate_summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSummary {
    /// Number of matches
    pub total_matches: usize,

    /// Kill events across all matches, world kills included
    pub total_kills: u64,

    /// Every player seen in any match
    pub players: BTreeSet<String>,

    /// Sum of each player's per-match scores
    pub player_totals: BTreeMap<String, i64>,
}

/// A player's position in the overall ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    pub name: String,
    pub score: i64,
}

/// Calculate summary statistics for a match log
///
/// **Public** - main entry point for metrics calculation
pub fn calculate_summary(log: &MatchLog) -> LogSummary {
    let mut summary = LogSummary {
        total_matches: log.len(),
        ..Default::default()
    };

    for stats in log {
        summary.total_kills += stats.total_kills();
        summary
            .players
            .extend(stats.players().into_iter().map(str::to_string));

        for (player, score) in stats.kills() {
            *summary.player_totals.entry(player.clone()).or_insert(0) += score;
        }
    }

    debug!(
        "Summary: {} matches, {} kills, {} players",
        summary.total_matches,
        summary.total_kills,
        summary.players.len()
    );

    summary
}

impl LogSummary {
    /// Number of distinct players across all matches
    pub fn unique_players(&self) -> usize {
        self.players.len()
    }

    /// Top `n` players by total score
    ///
    /// Sorted by score descending; equal scores are ordered by name.
    pub fn top_players(&self, n: usize) -> Vec<RankedPlayer> {
        let mut ranked: Vec<RankedPlayer> = self
            .player_totals
            .iter()
            .map(|(name, &score)| RankedPlayer {
                name: name.clone(),
                score,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        ranked.truncate(n);
        ranked
    }
}
