//! Board: three ordered pegs of disks.
//!
//! Each peg is a stack stored bottom to top: the last element is the top
//! disk. The board itself does not enforce the size ordering; every mutation
//! goes through the move engine, which only pushes a disk onto an empty peg
//! or onto a larger disk.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::peg::{Disk, PegId, PEG_COUNT};

/// Disks on a single peg, bottom to top.
///
/// Inline capacity covers the largest configurable puzzle without heap
/// allocation.
pub type PegStack = SmallVec<[Disk; 10]>;

/// The three pegs of the puzzle.
///
/// ## Usage
///
/// ```
/// use hanoi_engine::core::{Board, Disk, PegId};
///
/// let board = Board::new(3);
/// assert_eq!(board.top(PegId::LEFT), Some(Disk::new(1)));
/// assert_eq!(board.height(PegId::LEFT), 3);
/// assert!(board.peg(PegId::RIGHT).is_some_and(|p| p.is_empty()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pegs: [PegStack; PEG_COUNT],
}

impl Board {
    /// Create a board with `disk_count` disks stacked on the left peg,
    /// largest at the bottom.
    #[must_use]
    pub fn new(disk_count: u32) -> Self {
        let mut board = Self::default();
        board.pegs[PegId::LEFT.index()] = (1..=disk_count).rev().map(Disk::new).collect();
        board
    }

    /// Create a board from explicit peg contents (bottom to top).
    ///
    /// No ordering checks are made; use [`Board::is_well_formed`] to verify.
    #[must_use]
    pub fn from_pegs(pegs: [Vec<u32>; PEG_COUNT]) -> Self {
        let pegs = pegs.map(|p| p.into_iter().map(Disk::new).collect());
        Self { pegs }
    }

    /// Get the disks on a peg, bottom to top.
    ///
    /// Returns `None` for a peg outside the board.
    #[must_use]
    pub fn peg(&self, peg: PegId) -> Option<&[Disk]> {
        self.pegs.get(peg.index()).map(|p| p.as_slice())
    }

    /// Get the top disk of a peg.
    #[must_use]
    pub fn top(&self, peg: PegId) -> Option<Disk> {
        self.pegs.get(peg.index()).and_then(|p| p.last().copied())
    }

    /// Number of disks on a peg (0 for a peg outside the board).
    #[must_use]
    pub fn height(&self, peg: PegId) -> usize {
        self.pegs.get(peg.index()).map_or(0, |p| p.len())
    }

    /// Total number of disks on the board.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(|p| p.len()).sum()
    }

    /// Peg contents as plain sizes, for renderers and snapshots.
    #[must_use]
    pub fn to_sizes(&self) -> [Vec<u32>; PEG_COUNT] {
        std::array::from_fn(|i| self.pegs[i].iter().map(|d| d.size()).collect())
    }

    /// Check the board invariants for a puzzle of `disk_count` disks:
    /// every size in `1..=disk_count` appears exactly once, and sizes
    /// strictly decrease from bottom to top on every peg.
    #[must_use]
    pub fn is_well_formed(&self, disk_count: u32) -> bool {
        let mut seen = vec![false; disk_count as usize];
        for peg in &self.pegs {
            if !peg.windows(2).all(|w| w[0] > w[1]) {
                return false;
            }
            for disk in peg {
                let size = disk.size() as usize;
                if size == 0 || size > seen.len() || seen[size - 1] {
                    return false;
                }
                seen[size - 1] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }

    // === Engine-only mutation ===

    pub(crate) fn pop(&mut self, peg: PegId) -> Option<Disk> {
        self.pegs.get_mut(peg.index()).and_then(|p| p.pop())
    }

    pub(crate) fn push(&mut self, peg: PegId, disk: Disk) {
        if let Some(stack) = self.pegs.get_mut(peg.index()) {
            stack.push(disk);
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, peg) in self.pegs.iter().enumerate() {
            write!(f, "{} |", i)?;
            for disk in peg {
                write!(f, " {}", disk.size())?;
            }
            if i + 1 < PEG_COUNT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
