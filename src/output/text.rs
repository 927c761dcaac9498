//! Human-readable summary of a parsed log.

use crate::aggregator::LogSummary;

/// Generate the text summary printed after the JSON result
///
/// **Public** - used by the parse command
///
/// # Arguments
/// * `summary` - Cross-match totals
/// * `top_n` - How many players to list in the ranking
pub fn generate_text_summary(summary: &LogSummary, top_n: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Total Games: {}", summary.total_matches));
    lines.push(format!("Total Kills (all games): {}", summary.total_kills));
    lines.push(format!("Unique Players: {}", summary.unique_players()));

    let players: Vec<&str> = summary.players.iter().map(String::as_str).collect();
    lines.push(format!("Players: {}", players.join(", ")));

    let top = summary.top_players(top_n);
    if !top.is_empty() {
        lines.push(String::new());
        lines.push(format!("Top {} Players (by total kills):", top.len()));
        for (rank, player) in top.iter().enumerate() {
            lines.push(format!("  {}. {}: {} kills", rank + 1, player.name, player.score));
        }
    }

    lines.join("\n")
}
