//! Errors reported when a move is rejected.

use crate::Position;

/// Error that can occur when applying a move.
///
/// Every variant is recoverable: the engine state is left exactly as it
/// was before the rejected call, so the caller can simply ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position already holds a mark.
    #[display("Square {} is already taken", _0)]
    SquareOccupied(Position),

    /// The coordinates fall outside the 3x3 board.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has been won or tied; call reset first.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
