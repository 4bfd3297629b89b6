//! Error types for board operations.

use std::fmt;

use super::{Color, Grid, PieceId, Square};

/// Reason a move attempt was rejected.
///
/// Every rejection happens before the board is touched, so the position is
/// unchanged and the attempt can simply be retried with another move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The identifier does not name a live piece
    UnknownPiece { id: PieceId },
    /// Destination is off the board or occupied on both grids
    InvalidDestination { square: Square },
    /// Destination is not reachable in the current check state
    IllegalMove { id: PieceId, square: Square },
    /// The mover's side has no king on either grid
    NoKingPresent { color: Color },
    /// A friendly piece holds the destination on the grid being entered
    TransferBlocked { square: Square, grid: Grid },
    /// The piece does not belong to the side whose turn it is
    NotYourTurn { color: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownPiece { id } => {
                write!(f, "No live piece with id {id}")
            }
            MoveError::InvalidDestination { square } => {
                write!(f, "Invalid destination {square}")
            }
            MoveError::IllegalMove { id, square } => {
                write!(f, "Piece {id} cannot move to {square}")
            }
            MoveError::NoKingPresent { color } => {
                write!(f, "{color} has no king in play")
            }
            MoveError::TransferBlocked { square, grid } => {
                write!(f, "Friendly piece blocks {square} on {grid}")
            }
            MoveError::NotYourTurn { color } => {
                write!(f, "It is not {color}'s turn")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}
