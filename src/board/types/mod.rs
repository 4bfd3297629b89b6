//! Core types.
//!
//! - `Piece`, `Color` and `Grid` - piece kinds, owners and the two grids
//! - `Square` - (row, col) coordinate shared by both grids
//! - `PieceId` and `LivePiece` - arena identifiers and the pieces they name
//! - `MoveIntent` - a piece and its requested destination

mod moves;
mod piece;
mod square;

pub use moves::MoveIntent;
pub use piece::{Color, Grid, LivePiece, Piece, PieceId};
pub use square::Square;

/// Read-only picture of one grid for renderers.
pub type GridView = [[Option<(Color, Piece)>; 8]; 8];
