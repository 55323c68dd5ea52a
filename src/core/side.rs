//! Side identity: the two fixed seats at the board.
//!
//! Rule logic resolves "the opponent of X" structurally through [`SideId`],
//! never by comparing player names — names are display attribution only.

use serde::{Deserialize, Serialize};

/// Identifies one of the two sides of the board.
///
/// Side `A` always moves first. The identifiers are fixed for the lifetime
/// of a game; there is no seat swapping.
///
/// ## Example
///
/// ```
/// use kalah::SideId;
///
/// assert_eq!(SideId::A.opponent(), SideId::B);
/// assert_eq!(SideId::B.opponent(), SideId::A);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideId {
    /// The first side; moves first.
    A,
    /// The second side.
    B,
}

impl SideId {
    /// The side facing this one.
    #[must_use]
    pub const fn opponent(self) -> SideId {
        match self {
            SideId::A => SideId::B,
            SideId::B => SideId::A,
        }
    }

    /// Both sides, in seating order.
    #[must_use]
    pub const fn both() -> [SideId; 2] {
        [SideId::A, SideId::B]
    }

    /// Storage index for side-keyed pairs.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SideId::A => 0,
            SideId::B => 1,
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SideId::A => write!(f, "Side A"),
            SideId::B => write!(f, "Side B"),
        }
    }
}
