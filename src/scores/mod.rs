//! Score persistence and scoreboard views.
//!
//! - [`KeyValueStore`]: get/set string storage (memory or files)
//! - [`ScoreLog`]: append-only list of solved games under one key
//! - [`Scoreboard`]: display rows and per-size bests

mod board;
mod log;
mod store;

pub use board::{format_time, ScoreRow, Scoreboard};
pub use log::{ScoreEntry, ScoreLog};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
