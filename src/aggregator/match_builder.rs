//! Fold classified log lines into per-match statistics.
//!
//! The aggregator is a two-state machine: either no match is open, or
//! exactly one match is current and receives every kill that follows.

use crate::parser::line::{KillEvent, LineEvent};
use crate::parser::schema::{MatchLog, MatchStats};
use crate::utils::config::{MATCH_ID_PREFIX, WORLD_SENTINEL};
use log::debug;

/// Aggregation state for a single parse
///
/// Built fresh for every parse and consumed by [`Aggregator::finish`],
/// so nothing carries over between runs.
#[derive(Debug, Default)]
pub struct Aggregator {
    log: MatchLog,
    current: Option<usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one classified line
    pub fn apply(&mut self, event: LineEvent) {
        match event {
            LineEvent::NoEvent => {}
            LineEvent::MatchStart => {
                self.start_match();
            }
            LineEvent::Kill(kill) => self.record_kill(&kill),
        }
    }

    /// Id of the match currently receiving kills
    pub fn current_match_id(&self) -> Option<&str> {
        self.current
            .and_then(|position| self.log.iter().nth(position))
            .map(MatchStats::id)
    }

    /// Number of matches opened so far
    pub fn match_count(&self) -> usize {
        self.log.len()
    }

    /// Hand the finished log to the caller
    pub fn finish(self) -> MatchLog {
        debug!(
            "Aggregated {} matches, {} kills",
            self.log.len(),
            self.log.total_kills()
        );
        self.log
    }

    /// Open a new match and make it current
    ///
    /// **Private** - always creates a fresh match, even if the current one is empty
    fn start_match(&mut self) -> usize {
        let id = format!("{}{}", MATCH_ID_PREFIX, self.log.len() + 1);
        debug!("Starting {}", id);

        let position = self.log.push(MatchStats::new(id));
        self.current = Some(position);
        position
    }

    /// Attribute a kill to the current match, opening one if needed
    ///
    /// **Private** - scoring rules live here
    fn record_kill(&mut self, kill: &KillEvent) {
        let position = match self.current {
            Some(position) => position,
            None => {
                debug!("Kill before any InitGame marker, opening a match implicitly");
                self.start_match()
            }
        };

        // Positions only ever come from `MatchLog::push`
        let stats = self.log.at_mut(position);

        stats.total_kills += 1;

        if kill.is_world_kill() {
            if kill.victim != WORLD_SENTINEL {
                *stats.kills.entry(kill.victim.clone()).or_insert(0) -= 1;
            }
        } else {
            // Self-kills land here too and still score for the killer
            *stats.kills.entry(kill.killer.clone()).or_insert(0) += 1;
        }

        for name in [&kill.killer, &kill.victim] {
            if name != WORLD_SENTINEL && !stats.players.contains(name) {
                stats.players.insert(name.clone());
            }
        }
    }
}

/// Fold a sequence of classified lines into a match log
///
/// **Public** - pure function from events to results
pub fn aggregate<I>(events: I) -> MatchLog
where
    I: IntoIterator<Item = LineEvent>,
{
    let mut aggregator = Aggregator::new();
    for event in events {
        aggregator.apply(event);
    }
    aggregator.finish()
}
