//! Errors used throughout the rules engine.
//!
//! `ChessError` covers the recoverable, input-shaped failures: coordinates
//! off the board and text that does not name a square or a legal move.
//! Misuse of `apply_move` (a move that did not come from the latest
//! `legal_moves()`) is a caller bug and is caught by debug assertions
//! instead of surfacing here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Row or column outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    SquareOutOfBounds { row: u8, col: u8 },

    /// Text that is not a file letter `a`..`h` followed by a rank digit `1`..`8`.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicSquare(String),

    /// Move text that is not two squares with an optional promotion suffix.
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    /// Well-formed move text that matches none of the current legal moves.
    #[error("move {0} is not legal in this position")]
    MoveNotLegal(String),
}
