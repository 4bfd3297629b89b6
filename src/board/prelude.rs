//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use twin_chess::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, Color, Grid, MoveError, MoveIntent, MoveOutcome, Piece,
    PieceId, SearchParams, SearchState, Square,
};
