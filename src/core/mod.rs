//! Core types: pegs, disks, board, moves, session state, configuration.
//!
//! This module holds plain data. All rule checks and state transitions live
//! in [`crate::rules`].

pub mod peg;
pub mod board;
pub mod action;
pub mod config;
pub mod state;

pub use peg::{Disk, PegId, PEG_COUNT};
pub use board::{Board, PegStack};
pub use action::{Move, MoveRecord};
pub use config::{ConfigError, Difficulty, GameConfig, DEFAULT_DISKS, MAX_DISKS, MIN_DISKS};
pub use state::{GameSession, GameStatus, SessionSnapshot};
