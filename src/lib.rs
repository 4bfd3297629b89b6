//! Rules engine and machine opponent for two-board chess.
//!
//! Two mirrored 8×8 grids share one set of pieces. Each piece stands on
//! exactly one grid, and every accepted move lands it on the other grid at
//! the destination square. See [`board`] for the rules and search and
//! [`engine`] for turn sequencing.

pub mod board;
pub mod engine;

pub use board::{Board, Color, Grid, MoveError, MoveIntent, Piece, PieceId, Square};
pub use engine::{GameController, SharedGame};
