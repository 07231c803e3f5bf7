//! Error types for invalid caller input.
//!
//! The search itself never fails: a run that cools down without finding a
//! zero-cost board is a normal outcome reported through the board's cost.
//! These errors only cover layouts and parameters supplied from outside.

use thiserror::Error;

/// Rejected queen layout passed to [`BoardState::from_queens`](crate::board::BoardState::from_queens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square ({row}, {col}) is outside the {n}x{n} board", n = crate::board::N)]
    OutOfBounds { row: usize, col: usize },

    #[error("square ({row}, {col}) holds more than one queen")]
    DuplicateSquare { row: usize, col: usize },
}

/// Rejected annealing or sweep parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("floor temperature must be positive and finite, got {0}")]
    InvalidFloor(f64),

    #[error("decay must be in (0, 1), got {0}")]
    InvalidDecay(f64),

    #[error("sweep needs at least one {0}")]
    EmptyGrid(&'static str),

    #[error("sweep needs at least one trial per cell")]
    NoTrials,
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
