//! Error types for the game core.

use thiserror::Error;

/// Reasons a list of move names cannot form a game
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least 3 moves are required, got {count}")]
    TooFewMoves { count: usize },

    #[error("an odd number of moves is required, got {count}")]
    EvenMoveCount { count: usize },

    #[error("move {0:?} appears more than once")]
    DuplicateMove(String),

    #[error("move #{position} is empty")]
    EmptyMoveName { position: usize },
}

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid move set: {0}")]
    Validation(#[from] ValidationError),

    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("unknown move: {0:?}")]
    UnknownMove(String),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl From<rand::Error> for GameError {
    fn from(err: rand::Error) -> Self {
        GameError::EntropyUnavailable(err.to_string())
    }
}
