//! Two-grid board representation and game rules.
//!
//! Pieces live in an arena and the two 8×8 grids hold identifiers into it.
//! Every accepted move carries the moving piece onto the other grid.
//!
//! # Example
//! ```
//! use twin_chess::board::{Board, Color, Grid, Square};
//!
//! let mut board = Board::new();
//! let pawn = board.id_at(Grid::One, Square(1, 4)).unwrap();
//! assert_eq!(board.legal_moves(pawn), vec![Square(2, 4), Square(3, 4)]);
//!
//! board.attempt_move(pawn, Square(3, 4)).unwrap();
//! assert!(board.piece_at(Grid::Two, Square(3, 4)).is_some());
//! assert_eq!(board.side_to_move(), Color::Black);
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod eval;
mod movegen;
pub mod prelude;
mod rules;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError};
pub use eval::{positional_weight, POSITIONAL_WEIGHT};
pub use movegen::Castle;
pub use rules::MoveOutcome;
pub use state::Board;
pub use types::{Color, Grid, GridView, LivePiece, MoveIntent, Piece, PieceId, Square};

pub use search::{
    candidate_moves, find_best_move, minimax, random_move, SearchParams, SearchResult,
    SearchState, SearchStats,
};
