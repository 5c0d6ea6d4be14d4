//! Append-only score log.
//!
//! The whole log is stored as one JSON array under a single key. Appending
//! reads the array, pushes the new entry and writes it back. Existing
//! elements are written back exactly as they were read, including ones this
//! crate cannot interpret, so an append never loses history. Field names are
//! camelCase so logs written by the browser frontend load unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::store::{KeyValueStore, StoreError};

/// Read a missing or `null` field as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One solved game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreEntry {
    /// Player name as entered, or the configured fallback.
    #[serde(deserialize_with = "null_as_default")]
    pub player_name: String,

    /// Puzzle size.
    #[serde(deserialize_with = "null_as_default")]
    pub disk_count: u32,

    /// Time to solve, in whole seconds (0 when unknown).
    #[serde(deserialize_with = "null_as_default")]
    pub time_seconds: u64,

    /// Moves used (0 when unknown).
    #[serde(deserialize_with = "null_as_default")]
    pub moves: u32,

    /// When the score was recorded, in Unix seconds.
    pub recorded_at: Option<u64>,

    /// Fields written by other frontends, e.g. the browser's `date`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScoreEntry {
    /// Create an entry without a timestamp.
    pub fn new(player_name: impl Into<String>, disk_count: u32, time_seconds: u64, moves: u32) -> Self {
        Self {
            player_name: player_name.into(),
            disk_count,
            time_seconds,
            moves,
            recorded_at: None,
            extra: Map::new(),
        }
    }

    /// Set the recording time (builder pattern).
    #[must_use]
    pub fn with_recorded_at(mut self, unix_seconds: u64) -> Self {
        self.recorded_at = Some(unix_seconds);
        self
    }
}

/// Score log over a key-value store.
#[derive(Clone, Debug)]
pub struct ScoreLog<K: KeyValueStore> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> ScoreLog<K> {
    /// Create a log stored under `key`.
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key of this log.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store.
    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Raw log elements, oldest first.
    ///
    /// Storage that is not a JSON array reads as empty; read failures are
    /// returned.
    fn read_raw(&self) -> Result<Vec<Value>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(elements) => Ok(elements),
            Err(err) => {
                warn!(key = %self.key, %err, "score log is not a JSON array");
                Ok(Vec::new())
            }
        }
    }

    /// All readable entries, oldest first.
    ///
    /// Elements that are not score entries are skipped. Unreadable storage
    /// yields an empty log.
    #[must_use]
    pub fn load(&self) -> Vec<ScoreEntry> {
        let elements = match self.read_raw() {
            Ok(elements) => elements,
            Err(err) => {
                warn!(key = %self.key, %err, "failed to read score log");
                return Vec::new();
            }
        };

        elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| match serde_json::from_value(element) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(key = %self.key, index, %err, "skipping unreadable score entry");
                    None
                }
            })
            .collect()
    }

    /// Append an entry and persist the log.
    ///
    /// Fails without writing if the existing log cannot be read.
    pub fn append(&mut self, entry: ScoreEntry) -> Result<(), StoreError> {
        let mut elements = self.read_raw()?;
        info!(
            player = %entry.player_name,
            disk_count = entry.disk_count,
            moves = entry.moves,
            time_seconds = entry.time_seconds,
            "saving score"
        );
        elements.push(serde_json::to_value(&entry)?);

        let encoded = serde_json::to_string(&elements)?;
        self.store.set(&self.key, &encoded)
    }
}
