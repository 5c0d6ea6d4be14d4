//! Peg and disk identification.
//!
//! ## PegId
//!
//! Index of one of the three pegs. `PegId` does not validate its raw value:
//! callers may hand the engine any index, and out-of-range pegs are rejected
//! by move validation like any other illegal move.
//!
//! ## Disk
//!
//! A disk is identified by its size. Larger sizes are physically larger disks.

use serde::{Deserialize, Serialize};

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;

/// Peg identifier.
///
/// Peg indices are 0-based. The puzzle starts with every disk on
/// [`PegId::LEFT`] and is won when every disk sits on [`PegId::RIGHT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PegId(pub u8);

impl PegId {
    /// Starting peg.
    pub const LEFT: PegId = PegId(0);
    /// Spare peg.
    pub const MIDDLE: PegId = PegId(1);
    /// Target peg.
    pub const RIGHT: PegId = PegId(2);

    /// Create a new peg ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw peg index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this peg exists on the board.
    ///
    /// ```
    /// use hanoi_engine::core::PegId;
    ///
    /// assert!(PegId::RIGHT.is_valid());
    /// assert!(!PegId::new(3).is_valid());
    /// ```
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < PEG_COUNT
    }

    /// Iterate over all pegs, left to right.
    pub fn all() -> impl Iterator<Item = PegId> {
        (0..PEG_COUNT as u8).map(PegId)
    }
}

impl From<u8> for PegId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Peg({})", self.0)
    }
}

/// A disk, identified by its size (1 = smallest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Disk(pub u32);

impl Disk {
    /// Create a disk of the given size.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self(size)
    }

    /// Get the disk size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.0)
    }
}
