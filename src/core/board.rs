//! Board sides and the two-side board.
//!
//! ## BoardSide
//!
//! One player's half of the board: an ordered row of pits plus the scoring
//! house. Pits and houses are plain stone counts; sowing is arithmetic on
//! them, not transfer of stone objects.
//!
//! ## Board
//!
//! The pair of sides, indexable by [`SideId`]. All stone movement goes
//! through the crate-internal mutators; outside the move engine the board
//! is read-only.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::mode::Mode;
use super::side::SideId;

/// Pits per side in the standard game.
pub const PITS_PER_SIDE: usize = 6;

/// One side of the board: a named row of pits and a house.
///
/// Pit order is seating order and defines the sowing direction. The house
/// count never decreases during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSide {
    name: String,
    /// Stone count per pit, in sowing order.
    /// SmallVec keeps the standard six-pit row inline without a heap allocation.
    pits: SmallVec<[u32; PITS_PER_SIDE]>,
    house: u32,
}

impl BoardSide {
    /// Create a side with `pit_count` pits, each holding `mode.stones()`.
    pub(crate) fn new(name: impl Into<String>, mode: Mode, pit_count: usize) -> Self {
        assert!(pit_count > 0, "Must have at least 1 pit per side");

        Self {
            name: name.into(),
            pits: smallvec::smallvec![mode.stones(); pit_count],
            house: 0,
        }
    }

    /// The side's display name. Attribution only; rule logic never reads it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stone count of the pit at `index`, or `None` if out of range.
    ///
    /// Out-of-range lookups are an expected part of the sowing walk's
    /// boundary math, so this never panics.
    #[must_use]
    pub fn pit(&self, index: usize) -> Option<u32> {
        self.pits.get(index).copied()
    }

    /// The pit row in sowing order.
    #[must_use]
    pub fn pits(&self) -> &[u32] {
        &self.pits
    }

    /// Number of pits on this side.
    #[must_use]
    pub fn pit_count(&self) -> usize {
        self.pits.len()
    }

    /// Stone count of the house.
    #[must_use]
    pub fn house(&self) -> u32 {
        self.house
    }

    /// True iff any pit still holds a stone. Drives the end-of-game check.
    #[must_use]
    pub fn has_remaining_stones(&self) -> bool {
        self.pits.iter().any(|&count| count > 0)
    }

    /// Empty the pit at `index` and return how many stones it held.
    pub(crate) fn take_pit(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.pits[index])
    }

    /// Drop a single stone into the pit at `index`.
    pub(crate) fn drop_stone(&mut self, index: usize) {
        self.pits[index] += 1;
    }

    /// Add `count` stones to the house.
    pub(crate) fn bank(&mut self, count: u32) {
        self.house += count;
    }
}

/// The full board: both sides, fixed geometry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    sides: [BoardSide; 2],
}

impl Board {
    /// Create a board with the standard side names and `pit_count` pits per side.
    pub(crate) fn new(mode: Mode, pit_count: usize) -> Self {
        Self {
            sides: [
                BoardSide::new("Player A", mode, pit_count),
                BoardSide::new("Player B", mode, pit_count),
            ],
        }
    }

    /// The side owned by `id`.
    #[must_use]
    pub fn side(&self, id: SideId) -> &BoardSide {
        &self.sides[id.index()]
    }

    /// Mutable access for the move engine.
    pub(crate) fn side_mut(&mut self, id: SideId) -> &mut BoardSide {
        &mut self.sides[id.index()]
    }

    /// Pits per side. Both sides always agree.
    #[must_use]
    pub fn pit_count(&self) -> usize {
        self.sides[0].pit_count()
    }

    /// Every stone on the board: both pit rows and both houses.
    ///
    /// Constant for the whole game — stones are only ever moved.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.sides
            .iter()
            .map(|side| side.pits().iter().sum::<u32>() + side.house())
            .sum()
    }
}

impl Index<SideId> for Board {
    type Output = BoardSide;

    fn index(&self, id: SideId) -> &Self::Output {
        self.side(id)
    }
}
