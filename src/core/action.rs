//! Move representation and move history records.
//!
//! A `Move` is a request: take the top disk of `source` and place it on
//! `dest`. A `MoveRecord` is what the engine keeps after a move succeeds, with
//! the disk that actually moved, so the move can be reversed exactly.

use serde::{Deserialize, Serialize};

use super::peg::{Disk, PegId};

/// A requested move between two pegs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Peg the top disk is taken from.
    pub source: PegId,

    /// Peg the disk is placed on.
    pub dest: PegId,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(source: PegId, dest: PegId) -> Self {
        Self { source, dest }
    }

    /// The move that reverses this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            source: self.dest,
            dest: self.source,
        }
    }
}

impl From<(u8, u8)> for Move {
    fn from((source, dest): (u8, u8)) -> Self {
        Self::new(PegId(source), PegId(dest))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source.0, self.dest.0)
    }
}

/// A recorded move, appended to history on every successful move.
///
/// Undo pops the latest record and moves `disk` from `dest` back to
/// `source`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Peg the disk was taken from.
    pub source: PegId,

    /// Peg the disk was placed on.
    pub dest: PegId,

    /// The disk that moved.
    pub disk: Disk,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(source: PegId, dest: PegId, disk: Disk) -> Self {
        Self { source, dest, disk }
    }

    /// The move this record captured.
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.source, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_from_tuple() {
        let mv = Move::from((0, 2));

        assert_eq!(mv.source, PegId::LEFT);
        assert_eq!(mv.dest, PegId::RIGHT);
        assert_eq!(format!("{}", mv), "0 -> 2");
    }

    #[test]
    fn test_move_reversed() {
        let mv = Move::new(PegId::LEFT, PegId::MIDDLE);
        let back = mv.reversed();

        assert_eq!(back, Move::new(PegId::MIDDLE, PegId::LEFT));
        assert_eq!(back.reversed(), mv);
    }

    #[test]
    fn test_move_record() {
        let record = MoveRecord::new(PegId::LEFT, PegId::RIGHT, Disk::new(1));

        assert_eq!(record.disk, Disk::new(1));
        assert_eq!(record.as_move(), Move::from((0, 2)));
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(PegId::MIDDLE, PegId::LEFT, Disk::new(3));
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
