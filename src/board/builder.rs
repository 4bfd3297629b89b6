//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece, on either grid.
//!
//! # Example
//! ```
//! use twin_chess::board::{BoardBuilder, Color, Grid, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Grid::One, Square(0, 4), Color::White, Piece::King)
//!     .piece(Grid::Two, Square(7, 4), Color::Black, Piece::King)
//!     .piece(Grid::One, Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.live_count(), 3);
//! ```

use super::{Board, Color, Grid, LivePiece, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<LivePiece>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position, every
    /// piece on grid one.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let back_row = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let rows = [
            (Color::White, 0, back_row),
            (Color::White, 1, [Piece::Pawn; 8]),
            (Color::Black, 6, [Piece::Pawn; 8]),
            (Color::Black, 7, back_row),
        ];
        for (color, row, pieces) in rows {
            for (col, piece) in pieces.into_iter().enumerate() {
                builder
                    .pieces
                    .push(LivePiece::new(piece, color, Grid::One, Square(row, col)));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever stood on that grid square.
    #[must_use]
    pub fn piece(self, grid: Grid, square: Square, color: Color, piece: Piece) -> Self {
        self.with(LivePiece::new(piece, color, grid, square))
    }

    /// Place a piece that counts as having moved already (no castling).
    #[must_use]
    pub fn moved_piece(self, grid: Grid, square: Square, color: Color, piece: Piece) -> Self {
        self.with(LivePiece {
            moved: true,
            ..LivePiece::new(piece, color, grid, square)
        })
    }

    fn with(mut self, piece: LivePiece) -> Self {
        self.pieces
            .retain(|p| !(p.grid == piece.grid && p.square == piece.square));
        self.pieces.push(piece);
        self
    }

    /// Remove a piece from a grid square.
    #[must_use]
    pub fn clear(mut self, grid: Grid, square: Square) -> Self {
        self.pieces
            .retain(|p| !(p.grid == grid && p.square == square));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board. Pieces enter the arena in the order they were added.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for piece in self.pieces {
            board.place(piece);
        }
        board.side_to_move = self.side_to_move;
        board
    }
}
