//! Puzzle rules.
//!
//! `MoveEngine` defines:
//! - Which moves are legal
//! - How moves and undos modify the session
//! - When the puzzle is solved
//!
//! Nothing outside this module mutates a `GameSession`.

pub mod engine;

pub use engine::{minimum_moves, IllegalMove, MoveEngine};
