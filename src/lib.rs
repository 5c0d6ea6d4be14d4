//! # hanoi-engine
//!
//! Game-state engine for a single-player Tower of Hanoi puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `MoveEngine` does no I/O. It validates moves, keeps
//!    undo history and detects the win, and reports everything through
//!    return values.
//!
//! 2. **Caller-owned state**: there is no global game. Engines and
//!    controllers are ordinary values; build as many as you need.
//!
//! 3. **Rules are the only path**: the board ordering invariant holds because
//!    every mutation goes through a validated move or its exact inverse.
//!
//! ## Modules
//!
//! - `core`: pegs, disks, board, moves, session state, configuration
//! - `rules`: the move engine
//! - `events`: events and notices for the presentation layer
//! - `play`: game controller and stopwatch
//! - `scores`: score log storage and scoreboard views
//!
//! ## Example
//!
//! ```
//! use hanoi_engine::core::PegId;
//! use hanoi_engine::rules::MoveEngine;
//!
//! let mut engine = MoveEngine::new(3);
//! assert!(engine.apply_move(PegId::LEFT, PegId::RIGHT));
//! assert!(!engine.apply_move(PegId::LEFT, PegId::RIGHT)); // disk 2 onto disk 1
//! assert!(engine.undo_last());
//! assert_eq!(engine.session().move_count(), 0);
//! ```

pub mod core;
pub mod rules;
pub mod events;
pub mod play;
pub mod scores;

// Re-export commonly used types
pub use crate::core::{
    Board, Difficulty, Disk, GameConfig, GameSession, GameStatus, Move, MoveRecord, PegId,
    SessionSnapshot,
};

pub use crate::rules::{minimum_moves, IllegalMove, MoveEngine};

pub use crate::events::{GameEvent, Notice, Severity};

pub use crate::play::{Clock, GameController, ManualClock, Stopwatch, SystemClock};

pub use crate::scores::{FileStore, KeyValueStore, MemoryStore, ScoreEntry, ScoreLog, Scoreboard};
