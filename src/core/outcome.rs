//! Move classification.
//!
//! Every processed move resolves to exactly one [`MoveOutcome`]. The state
//! machine matches exhaustively on it, so adding a variant for a future
//! rule set is a compile-visible change at every transition site.

use serde::{Deserialize, Serialize};

/// Classification of a single move.
///
/// Only the final stone of a sowing pass determines the classification;
/// intermediate placements never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The requested move violated the rules; nothing was sown.
    Illegal,
    /// An ordinary move; the turn passes to the opponent.
    Continue,
    /// The final stone landed in an empty pit on the mover's own side,
    /// capturing it together with the opposite pit. The turn passes.
    Steal,
    /// The final stone landed in the mover's house; the mover goes again.
    PlayAgain,
}

impl MoveOutcome {
    /// Whether the turn stays with the mover.
    #[must_use]
    pub const fn grants_extra_turn(self) -> bool {
        matches!(self, MoveOutcome::PlayAgain)
    }
}
