//! Game configuration.
//!
//! Frontends configure a game by providing a `GameConfig`: the number of
//! disks, the fallback player name for the score log, and the storage key the
//! score log lives under. The config is validated before a session is built;
//! the engine itself never checks the disk count.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest playable puzzle.
pub const MIN_DISKS: u32 = 3;

/// Largest playable puzzle.
pub const MAX_DISKS: u32 = 10;

/// Disk count used when none is configured.
pub const DEFAULT_DISKS: u32 = 4;

/// Errors from validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("disk count {requested} is outside the playable range {min}..={max}")]
    DiskCountOutOfRange { requested: u32, min: u32, max: u32 },
    #[error("score storage key cannot be empty")]
    EmptyStorageKey,
    #[error("score storage key '{0}' must not contain path separators or '..'")]
    InvalidStorageKey(String),
}

/// Difficulty band derived from the disk count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Up to 4 disks.
    Easy,
    /// 5 or 6 disks.
    Intermediate,
    /// 7 disks or more.
    Hard,
}

impl Difficulty {
    /// Classify a puzzle by its disk count.
    ///
    /// ```
    /// use hanoi_engine::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_disk_count(4), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_disk_count(6), Difficulty::Intermediate);
    /// assert_eq!(Difficulty::from_disk_count(7), Difficulty::Hard);
    /// ```
    #[must_use]
    pub const fn from_disk_count(disk_count: u32) -> Self {
        match disk_count {
            0..=4 => Difficulty::Easy,
            5..=6 => Difficulty::Intermediate,
            _ => Difficulty::Hard,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of disks (3-10).
    pub disk_count: u32,

    /// Name recorded in the score log when the player leaves theirs blank.
    pub default_player_name: String,

    /// Key the score log is stored under.
    pub storage_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            disk_count: DEFAULT_DISKS,
            default_player_name: "Anonymous".to_string(),
            storage_key: "hanoi_scores".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for a puzzle of `disk_count` disks.
    #[must_use]
    pub fn new(disk_count: u32) -> Self {
        Self {
            disk_count,
            ..Self::default()
        }
    }

    /// Set the disk count.
    #[must_use]
    pub fn with_disk_count(mut self, disk_count: u32) -> Self {
        self.disk_count = disk_count;
        self
    }

    /// Set the fallback player name.
    #[must_use]
    pub fn with_default_player_name(mut self, name: impl Into<String>) -> Self {
        self.default_player_name = name.into();
        self
    }

    /// Set the score storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DISKS..=MAX_DISKS).contains(&self.disk_count) {
            return Err(ConfigError::DiskCountOutOfRange {
                requested: self.disk_count,
                min: MIN_DISKS,
                max: MAX_DISKS,
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.storage_key.contains(['/', '\\']) || self.storage_key.contains("..") {
            return Err(ConfigError::InvalidStorageKey(self.storage_key.clone()));
        }
        Ok(())
    }

    /// Difficulty band for the configured disk count.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_disk_count(self.disk_count)
    }
}
