//! Error types for the game API.
//!
//! There are exactly two failure kinds. `InvalidState` is a caller-logic
//! defect and is never worth retrying; `IllegalMove` is recoverable — the
//! game state is guaranteed unchanged and the caller re-prompts.

use thiserror::Error;

use crate::game::Status;

/// Errors returned by [`crate::Game`] operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The operation is not permitted while the game is in `status`:
    /// starting an already-started game, moving before start or after
    /// finish, or asking for a winner before the game is over.
    #[error("operation not permitted while the game is {status}")]
    InvalidState {
        /// The status the game was in when the operation was requested.
        status: Status,
    },

    /// A structurally valid but rule-invalid move: the pit index is out of
    /// range or the chosen pit is empty. No sowing took place.
    #[error("illegal move from pit {pit}")]
    IllegalMove {
        /// The offending pit index.
        pit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidState {
            status: Status::Init,
        };
        assert_eq!(
            err.to_string(),
            "operation not permitted while the game is awaiting start"
        );

        let err = GameError::IllegalMove { pit: 9 };
        assert_eq!(err.to_string(), "illegal move from pit 9");
    }
}
