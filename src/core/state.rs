//! Game session state and read-only snapshots.
//!
//! ## GameSession
//!
//! Everything the engine owns for one puzzle:
//! - Disk count and board
//! - Move counter and finished flag
//! - Move history for undo
//!
//! History uses an `im` persistent vector so handing a session clone to a
//! renderer or a test does not copy the whole history.
//!
//! ## SessionSnapshot
//!
//! Plain-data copy handed to collaborators after each mutation. Snapshots
//! never alias engine state.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::Board;
use super::peg::PEG_COUNT;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// The win was detected; only undo or a restart reopens play.
    Finished,
}

/// State of one puzzle, exclusively owned by the move engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    disk_count: u32,
    pub(crate) board: Board,
    pub(crate) move_count: u32,
    pub(crate) finished: bool,
    pub(crate) history: Vector<MoveRecord>,
}

impl GameSession {
    /// Fresh session: every disk on the left peg, no moves made.
    #[must_use]
    pub fn new(disk_count: u32) -> Self {
        Self {
            disk_count,
            board: Board::new(disk_count),
            move_count: 0,
            finished: false,
            history: Vector::new(),
        }
    }

    /// Number of disks in this puzzle.
    #[must_use]
    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves currently on the board (undos subtract).
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether the win has been detected.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.finished {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// Move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }

    /// Owned read-only copy for collaborators.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            disk_count: self.disk_count,
            pegs: self.board.to_sizes(),
            move_count: self.move_count,
            finished: self.finished,
        }
    }
}

/// What a renderer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Number of disks in the puzzle.
    pub disk_count: u32,

    /// Disk sizes per peg, bottom to top.
    pub pegs: [Vec<u32>; PEG_COUNT],

    /// Move counter.
    pub move_count: u32,

    /// Whether the puzzle is solved.
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::peg::PegId;

    #[test]
    fn test_new_session() {
        let session = GameSession::new(3);

        assert_eq!(session.disk_count(), 3);
        assert_eq!(session.move_count(), 0);
        assert!(!session.is_finished());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.history().is_empty());
        assert!(session.last_move().is_none());
        assert_eq!(session.board().height(PegId::LEFT), 3);
    }

    #[test]
    fn test_snapshot() {
        let session = GameSession::new(4);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.disk_count, 4);
        assert_eq!(snapshot.pegs, [vec![4, 3, 2, 1], vec![], vec![]]);
        assert_eq!(snapshot.move_count, 0);
        assert!(!snapshot.finished);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = GameSession::new(3).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: SessionSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
    }
}
