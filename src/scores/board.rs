//! Scoreboard views over logged scores.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::log::ScoreEntry;
use crate::core::Difficulty;

/// Format seconds as `mm:ss`.
///
/// ```
/// use hanoi_engine::scores::format_time;
///
/// assert_eq!(format_time(0), "00:00");
/// assert_eq!(format_time(75), "01:15");
/// ```
#[must_use]
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// One display row of the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub player_name: String,
    pub difficulty: Difficulty,
    /// `mm:ss`, or `-` when no time was recorded.
    pub time: String,
    /// Move count, or `-` when none was recorded.
    pub moves: String,
}

/// Read-only view over a list of score entries.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    #[must_use]
    pub fn new(entries: Vec<ScoreEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display rows, most recent first.
    #[must_use]
    pub fn rows(&self) -> Vec<ScoreRow> {
        self.entries
            .iter()
            .rev()
            .map(|entry| ScoreRow {
                player_name: if entry.player_name.is_empty() {
                    "-".to_string()
                } else {
                    entry.player_name.clone()
                },
                difficulty: Difficulty::from_disk_count(entry.disk_count),
                time: if entry.time_seconds > 0 {
                    format_time(entry.time_seconds)
                } else {
                    "-".to_string()
                },
                moves: if entry.moves > 0 {
                    entry.moves.to_string()
                } else {
                    "-".to_string()
                },
            })
            .collect()
    }

    /// Best entry per disk count: fewest moves, then fastest time.
    ///
    /// Sorted by disk count. Ties keep the earliest entry.
    #[must_use]
    pub fn best_by_disk_count(&self) -> Vec<&ScoreEntry> {
        let mut best: FxHashMap<u32, &ScoreEntry> = FxHashMap::default();
        for entry in &self.entries {
            best.entry(entry.disk_count)
                .and_modify(|current| {
                    if (entry.moves, entry.time_seconds) < (current.moves, current.time_seconds) {
                        *current = entry;
                    }
                })
                .or_insert(entry);
        }

        let mut best: Vec<_> = best.into_values().collect();
        best.sort_by_key(|entry| entry.disk_count);
        best
    }
}
