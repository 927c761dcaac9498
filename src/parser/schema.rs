//! Output schema for per-match statistics.
//!
//! This module defines the structure handed to callers and written as JSON.
//! Matches keep the order in which they appeared in the log.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Statistics for a single match
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchStats {
    /// Match id, serialized as the key of the enclosing map
    #[serde(skip)]
    pub(crate) id: String,

    /// Kill events seen while this match was current, world kills included
    pub(crate) total_kills: u64,

    /// Distinct non-world names seen as killer or victim
    pub(crate) players: BTreeSet<String>,

    /// Net score per player
    pub(crate) kills: BTreeMap<String, i64>,
}

impl MatchStats {
    pub(crate) fn new(id: String) -> Self {
        Self {
            id,
            total_kills: 0,
            players: BTreeSet::new(),
            kills: BTreeMap::new(),
        }
    }

    /// Match id (`match_1`, `match_2`, ...)
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn total_kills(&self) -> u64 {
        self.total_kills
    }

    /// Players in lexicographic order
    pub fn players(&self) -> Vec<&str> {
        self.players.iter().map(String::as_str).collect()
    }

    /// True if the name took part in this match
    pub fn has_player(&self, name: &str) -> bool {
        self.players.contains(name)
    }

    /// Net scores keyed by player name
    pub fn kills(&self) -> &BTreeMap<String, i64> {
        &self.kills
    }

    /// Score of one player, `None` if the player never scored or was never penalized
    pub fn score(&self, name: &str) -> Option<i64> {
        self.kills.get(name).copied()
    }
}

/// All matches of one log, in order of appearance
///
/// Backed by an append-only list plus an id lookup, so iteration order
/// never depends on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchLog {
    matches: Vec<MatchStats>,
    index: HashMap<String, usize>,
}

impl MatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh match and return its position
    pub(crate) fn push(&mut self, stats: MatchStats) -> usize {
        let position = self.matches.len();
        self.index.insert(stats.id.clone(), position);
        self.matches.push(stats);
        position
    }

    /// Match at a position previously returned by `push`
    pub(crate) fn at_mut(&mut self, position: usize) -> &mut MatchStats {
        &mut self.matches[position]
    }

    /// Look up a match by id
    pub fn get(&self, id: &str) -> Option<&MatchStats> {
        self.index.get(id).map(|&position| &self.matches[position])
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches in order of appearance
    pub fn iter(&self) -> std::slice::Iter<'_, MatchStats> {
        self.matches.iter()
    }

    /// Match ids in order of appearance
    pub fn ids(&self) -> Vec<&str> {
        self.matches.iter().map(MatchStats::id).collect()
    }

    /// Kill events across every match
    pub fn total_kills(&self) -> u64 {
        self.matches.iter().map(|m| m.total_kills).sum()
    }
}

impl<'a> IntoIterator for &'a MatchLog {
    type Item = &'a MatchStats;
    type IntoIter = std::slice::Iter<'a, MatchStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for MatchLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.matches.len()))?;
        for stats in &self.matches {
            map.serialize_entry(&stats.id, stats)?;
        }
        map.end()
    }
}
