//! Error types for the rules engine.

use super::position::Position;

/// Errors returned by board construction, parsing and move submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The destination is not among the legal destinations of the origin.
    /// Covers an empty origin, the wrong side's piece, a move that would
    /// leave the mover's king attacked and a bad promotion piece.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// Coordinates outside the 8x8 board.
    #[error("square ({row}, {col}) is off the board")]
    InvalidSquare { row: usize, col: usize },

    /// Text that is not a square name or a move in coordinate notation.
    #[error("invalid notation `{0}`")]
    InvalidNotation(String),

    /// Malformed FEN piece placement.
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),
}

/// Result type alias for engine operations
pub type ChessResult<T> = Result<T, ChessError>;
