//! The move engine: legality, move/undo, and win detection.
//!
//! `MoveEngine` owns exactly one [`GameSession`] and is the only code that
//! mutates it. There is no global instance; callers construct engines
//! explicitly and may hold as many independent ones as they like.
//!
//! ## Operations
//!
//! - `initialize`: replace the session with a fresh puzzle
//! - `is_legal_move` / `check_move`: pure legality predicate
//! - `apply_move`: validate then move, recording history
//! - `check_win`: detect the solved state and mark the session finished
//! - `undo_last`: reverse the latest move, reopening a finished game
//!
//! Rule violations are ordinary input, so the mutating operations report them
//! as `false` rather than errors. `check_move` names the violated rule for
//! callers that want to explain it.

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::core::{
    ConfigError, Disk, GameConfig, GameSession, GameStatus, Move, MoveRecord, PegId,
    SessionSnapshot,
};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the game is already finished")]
    GameFinished,
    #[error("{0} does not exist")]
    PegOutOfRange(PegId),
    #[error("{0} is empty")]
    EmptySource(PegId),
    #[error("disk {} cannot be placed on disk {}", .disk.size(), .onto.size())]
    NotSmaller { disk: Disk, onto: Disk },
}

/// Length of the optimal solution for `disk_count` disks (2^n - 1).
///
/// ```
/// use hanoi_engine::rules::minimum_moves;
///
/// assert_eq!(minimum_moves(3), 7);
/// assert_eq!(minimum_moves(10), 1023);
/// ```
#[must_use]
pub const fn minimum_moves(disk_count: u32) -> u64 {
    if disk_count >= 64 {
        u64::MAX
    } else {
        (1u64 << disk_count) - 1
    }
}

/// Tower of Hanoi rules over a single owned session.
#[derive(Clone, Debug)]
pub struct MoveEngine {
    session: GameSession,
}

impl MoveEngine {
    /// Create an engine with a fresh puzzle of `disk_count` disks.
    ///
    /// The disk count is not validated here; see [`MoveEngine::from_config`].
    #[must_use]
    pub fn new(disk_count: u32) -> Self {
        Self {
            session: GameSession::new(disk_count),
        }
    }

    /// Create an engine from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.disk_count))
    }

    /// Replace the session with a fresh puzzle of `disk_count` disks.
    pub fn initialize(&mut self, disk_count: u32) -> &GameSession {
        debug!(disk_count, "initializing session");
        self.session = GameSession::new(disk_count);
        &self.session
    }

    /// Read-only view of the current session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Owned copy of the state a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// Check a move against the rules, naming the first rule it breaks.
    ///
    /// A self-move on a non-empty peg fails with `NotSmaller`: the top disk is
    /// never strictly smaller than itself.
    pub fn check_move(&self, source: PegId, dest: PegId) -> Result<(), IllegalMove> {
        if self.session.finished {
            return Err(IllegalMove::GameFinished);
        }
        if !source.is_valid() {
            return Err(IllegalMove::PegOutOfRange(source));
        }
        if !dest.is_valid() {
            return Err(IllegalMove::PegOutOfRange(dest));
        }

        let board = &self.session.board;
        let disk = board.top(source).ok_or(IllegalMove::EmptySource(source))?;
        match board.top(dest) {
            None => Ok(()),
            Some(onto) if disk < onto => Ok(()),
            Some(onto) => Err(IllegalMove::NotSmaller { disk, onto }),
        }
    }

    /// Whether moving the top disk of `source` onto `dest` is legal.
    #[must_use]
    pub fn is_legal_move(&self, source: PegId, dest: PegId) -> bool {
        self.check_move(source, dest).is_ok()
    }

    /// Move the top disk of `source` onto `dest`.
    ///
    /// Returns `false` and leaves the session untouched if the move is
    /// illegal.
    pub fn apply_move(&mut self, source: PegId, dest: PegId) -> bool {
        if let Err(reason) = self.check_move(source, dest) {
            trace!(%source, %dest, %reason, "move rejected");
            return false;
        }

        let Some(disk) = self.session.board.pop(source) else {
            return false;
        };
        self.session.board.push(dest, disk);
        self.session.history.push_back(MoveRecord::new(source, dest, disk));
        self.session.move_count += 1;

        debug!(
            %source,
            %dest,
            disk = disk.size(),
            move_count = self.session.move_count,
            "move applied"
        );
        true
    }

    /// Apply a [`Move`] value.
    pub fn apply(&mut self, mv: Move) -> bool {
        self.apply_move(mv.source, mv.dest)
    }

    /// Detect the solved state: every disk on the right peg.
    ///
    /// Marks the session finished when solved. Only the disk count on the
    /// right peg is inspected; move validation already guarantees its order.
    pub fn check_win(&mut self) -> bool {
        let solved = self.session.board.height(PegId::RIGHT) == self.session.disk_count() as usize;
        if solved {
            if !self.session.finished {
                info!(
                    disk_count = self.session.disk_count(),
                    move_count = self.session.move_count,
                    "puzzle solved"
                );
            }
            self.session.finished = true;
        }
        solved
    }

    /// Reverse the most recent move.
    ///
    /// Returns `false` if there is nothing to undo. Undoing always clears the
    /// finished flag, so a solved game can be reopened.
    pub fn undo_last(&mut self) -> bool {
        let Some(record) = self.session.history.pop_back() else {
            trace!("undo with empty history");
            return false;
        };

        let popped = self.session.board.pop(record.dest);
        debug_assert_eq!(popped, Some(record.disk), "history out of sync with board");
        self.session.board.push(record.source, record.disk);
        self.session.move_count -= 1;
        self.session.finished = false;

        debug!(
            source = %record.source,
            dest = %record.dest,
            disk = record.disk.size(),
            move_count = self.session.move_count,
            "move undone"
        );
        true
    }

    /// Every legal move from the current state, source-major.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        PegId::all()
            .flat_map(|source| PegId::all().map(move |dest| Move::new(source, dest)))
            .filter(|mv| self.is_legal_move(mv.source, mv.dest))
            .collect()
    }
}
