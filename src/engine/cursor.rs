//! The sowing-order walk.
//!
//! Sowing visits slots in a fixed circuit from the mover's point of view:
//! the mover's pits in increasing index order, then the mover's house, then
//! the opponent's pits in increasing index order, then back to the mover's
//! first pit. The opponent's house is not a slot — it is skipped on every
//! lap, which is the defining asymmetry of Kalah among mancala variants.
//!
//! [`next_slot`] is a pure function so the circuit can be tested without
//! touching capture or turn logic.

use crate::core::SideId;

/// A position the sowing cursor can occupy.
///
/// `House` only ever names the mover's own house; the opponent's house is
/// unreachable by construction of [`next_slot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A pit: owning side and 0-based index within that side.
    Pit(SideId, usize),
    /// A side's house.
    House(SideId),
}

/// The slot after `slot` in sowing order, for a move by `mover` on a board
/// with `pit_count` pits per side.
#[must_use]
pub fn next_slot(mover: SideId, slot: Slot, pit_count: usize) -> Slot {
    match slot {
        Slot::Pit(side, index) if index + 1 < pit_count => Slot::Pit(side, index + 1),
        // Last pit of the mover's own row feeds the mover's house.
        Slot::Pit(side, _) if side == mover => Slot::House(mover),
        // Last pit of the opponent's row skips their house entirely.
        Slot::Pit(_, _) => Slot::Pit(mover, 0),
        Slot::House(_) => Slot::Pit(mover.opponent(), 0),
    }
}
