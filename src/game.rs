//! The game state machine.
//!
//! [`Game`] owns both board sides and the turn status. It validates every
//! request, hands legal moves to the engine, applies the turn transition
//! the outcome demands, and runs the end-of-game check after every
//! completed move.
//!
//! ## Concurrency
//!
//! All operations are synchronous and run to completion; there is no
//! background activity. A `Game` is not internally synchronized — callers
//! that share one across threads must serialize access themselves (one lock
//! or one single-threaded actor per game).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Board, BoardSide, Mode, MoveOutcome, SideId, PITS_PER_SIDE};
use crate::engine;
use crate::error::GameError;

/// The turn state machine's state.
///
/// `Init` is initial and `Finished` is terminal; the two turn states
/// alternate except when an extra turn is granted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Created but not started.
    Init,
    /// Side A to move.
    TurnA,
    /// Side B to move.
    TurnB,
    /// Over; no further moves are accepted.
    Finished,
}

impl Status {
    /// The side whose turn it is, if the game is in a playable state.
    #[must_use]
    pub const fn side_to_move(self) -> Option<SideId> {
        match self {
            Status::TurnA => Some(SideId::A),
            Status::TurnB => Some(SideId::B),
            Status::Init | Status::Finished => None,
        }
    }

    /// The turn state in which `side` is to move.
    #[must_use]
    pub const fn turn_of(side: SideId) -> Status {
        match side {
            SideId::A => Status::TurnA,
            SideId::B => Status::TurnB,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Init => write!(f, "awaiting start"),
            Status::TurnA => write!(f, "Side A's turn"),
            Status::TurnB => write!(f, "Side B's turn"),
            Status::Finished => write!(f, "finished"),
        }
    }
}

/// A single Kalah match: two board sides, a mode, and the turn status.
///
/// Board geometry is fixed at construction. Create one per match:
///
/// ```
/// use kalah::{Game, Mode, Status};
///
/// let mut game = Game::new(Mode::ThreeStones);
/// game.start()?;
/// game.play(2)?;
/// assert_eq!(game.status(), Status::TurnB);
/// # Ok::<(), kalah::GameError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    mode: Mode,
    board: Board,
    status: Status,
}

impl Game {
    /// Create a game in the given mode: six pits per side, each starting
    /// with `mode.stones()` stones, status [`Status::Init`].
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            board: Board::new(mode, PITS_PER_SIDE),
            status: Status::Init,
        }
    }

    /// The mode the game was created with.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The current turn status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The board side owned by `id`.
    #[must_use]
    pub fn side(&self, id: SideId) -> &BoardSide {
        self.board.side(id)
    }

    /// The full board, for display.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Start the game: side A moves first.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidState`] if the game was already started.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.status != Status::Init {
            return Err(GameError::InvalidState {
                status: self.status,
            });
        }
        self.status = Status::TurnA;
        debug!(mode = %self.mode, "game started");
        Ok(())
    }

    /// Whether the side to move may sow from `pit_index`: the index is in
    /// range and the pit is non-empty. Always false outside a turn state.
    #[must_use]
    pub fn is_legal_move(&self, pit_index: usize) -> bool {
        match self.status.side_to_move() {
            Some(mover) => matches!(self.board.side(mover).pit(pit_index), Some(count) if count > 0),
            None => false,
        }
    }

    /// Sow from `pit_index` for the side to move.
    ///
    /// On success the turn transition and end-of-game check have been
    /// applied; query [`Self::status`] and the sides for the result.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidState`] if the game is not in a turn state.
    /// - [`GameError::IllegalMove`] if the index is out of range or the pit
    ///   is empty. The game state is unchanged — no partial sowing is ever
    ///   visible.
    #[instrument(skip(self))]
    pub fn play(&mut self, pit_index: usize) -> Result<(), GameError> {
        let Some(mover) = self.status.side_to_move() else {
            return Err(GameError::InvalidState {
                status: self.status,
            });
        };

        let outcome = self.process_move(mover, pit_index);
        match outcome {
            MoveOutcome::Illegal => {
                return Err(GameError::IllegalMove { pit: pit_index });
            }
            MoveOutcome::Continue | MoveOutcome::Steal => {
                self.status = Status::turn_of(mover.opponent());
            }
            MoveOutcome::PlayAgain => {}
        }
        debug!(%mover, pit_index, ?outcome, "move applied");

        if self.all_stones_sown() {
            self.status = Status::Finished;
            info!(
                house_a = self.board.side(SideId::A).house(),
                house_b = self.board.side(SideId::B).house(),
                "game finished"
            );
        }
        Ok(())
    }

    /// The winner, or `None` for a tie.
    ///
    /// Compares house counts only: stones still sitting in the non-empty
    /// side's pits at the end of the game are not credited to that side's
    /// house. This matches the observed rule set, not the traditional
    /// sweep-at-end variant.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidState`] unless the game is finished.
    pub fn winner(&self) -> Result<Option<SideId>, GameError> {
        if self.status != Status::Finished {
            return Err(GameError::InvalidState {
                status: self.status,
            });
        }
        let house_a = self.board.side(SideId::A).house();
        let house_b = self.board.side(SideId::B).house();
        Ok(match house_a.cmp(&house_b) {
            std::cmp::Ordering::Greater => Some(SideId::A),
            std::cmp::Ordering::Less => Some(SideId::B),
            std::cmp::Ordering::Equal => None,
        })
    }

    /// Validate and execute one move for `mover`.
    fn process_move(&mut self, mover: SideId, pit_index: usize) -> MoveOutcome {
        if !self.is_legal_move(pit_index) {
            return MoveOutcome::Illegal;
        }
        engine::sow(&mut self.board, mover, pit_index)
    }

    /// End condition: at least one side has no stones left in its pits.
    fn all_stones_sown(&self) -> bool {
        !(self.board.side(SideId::A).has_remaining_stones()
            && self.board.side(SideId::B).has_remaining_stones())
    }
}
