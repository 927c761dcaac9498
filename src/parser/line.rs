//! Classification of raw server log lines.
//!
//! Every line is one of three things: a match boundary (`InitGame:`),
//! a kill record, or noise. Noise is skipped, never reported as an error.

use crate::utils::config::{INIT_GAME_MARKER, KILL_MARKER, WEAPON_PREFIX, WORLD_SENTINEL};
use regex::Regex;
use std::sync::LazyLock;

/// `mm:ss Kill: <killer_id> <victim_id> <weapon_id>: <killer> killed <victim> by MOD_*`
static KILL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^\s*\d+:\d+\s+{}\s+(?P<killer_id>\d+)\s+(?P<victim_id>\d+)\s+(?P<weapon_id>\d+):\s+(?P<killer>.+?)\s+killed\s+(?P<victim>.+?)\s+by\s+(?P<weapon>{}\w+)",
        regex::escape(KILL_MARKER),
        regex::escape(WEAPON_PREFIX),
    );
    Regex::new(&pattern).expect("Invalid regex pattern")
});

/// A single kill record extracted from the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillEvent {
    /// Numeric id of the killer, as written in the log (not used for scoring)
    pub killer_id: String,

    /// Numeric id of the victim, as written in the log (not used for scoring)
    pub victim_id: String,

    /// Numeric id of the means of death, as written in the log (not used for scoring)
    pub weapon_id: String,

    /// Killer name, `<world>` for environmental deaths
    pub killer: String,

    /// Victim name
    pub victim: String,

    /// Means of death token, e.g. `MOD_SHOTGUN`
    pub weapon: String,
}

impl KillEvent {
    /// True when the killer is the environment rather than a player
    pub fn is_world_kill(&self) -> bool {
        self.killer == WORLD_SENTINEL
    }
}

/// Result of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Nothing of interest on this line
    NoEvent,

    /// A new match begins
    MatchStart,

    /// A kill was recorded
    Kill(KillEvent),
}

/// Classify one raw log line
///
/// **Public** - main entry point for line classification
///
/// The match-start marker is checked first, so a line containing
/// `InitGame:` is never treated as a kill even if it also looks like one.
pub fn classify_line(line: &str) -> LineEvent {
    let line = line.trim();
    if line.is_empty() {
        return LineEvent::NoEvent;
    }

    if line.contains(INIT_GAME_MARKER) {
        return LineEvent::MatchStart;
    }

    parse_kill_event(line).map_or(LineEvent::NoEvent, LineEvent::Kill)
}

/// Extract a kill record from a line, if it has the kill shape
///
/// **Public** - useful on its own for tooling that only cares about kills
pub fn parse_kill_event(line: &str) -> Option<KillEvent> {
    let caps = KILL_PATTERN.captures(line)?;

    Some(KillEvent {
        killer_id: caps["killer_id"].to_string(),
        victim_id: caps["victim_id"].to_string(),
        weapon_id: caps["weapon_id"].to_string(),
        killer: caps["killer"].trim().to_string(),
        victim: caps["victim"].trim().to_string(),
        weapon: caps["weapon"].to_string(),
    })
}
