//! Pseudo-legal move generation.
//!
//! Every generator reads both grids but decides blocking and capture on the
//! grid the moving piece currently stands on; only pawn pushes look at the
//! mirrored grid as well.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use kings::Castle;

use super::attack_tables::{DIAGONAL, ORTHOGONAL};
use super::{Board, Color, Grid, LivePiece, Piece, PieceId, Square};

/// What a piece finds on a square of its own grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Occupant {
    Empty,
    Friendly,
    Opposing,
}

impl Board {
    pub(crate) fn occupant(&self, grid: Grid, square: Square, color: Color) -> Occupant {
        match self.piece_at(grid, square) {
            None => Occupant::Empty,
            Some(p) if p.color == color => Occupant::Friendly,
            Some(_) => Occupant::Opposing,
        }
    }

    /// Destinations matching the piece's movement pattern, ignoring king
    /// safety. Unknown ids yield no moves.
    pub fn pseudo_legal_moves(&self, id: PieceId) -> Vec<Square> {
        match self.piece(id) {
            Some(p) => self.moves_for(&p),
            None => Vec::new(),
        }
    }

    pub(crate) fn moves_for(&self, p: &LivePiece) -> Vec<Square> {
        match p.piece {
            Piece::Pawn => self.pawn_moves(p),
            Piece::Knight => self.knight_moves(p),
            Piece::Bishop => self.slider_moves(p, &DIAGONAL),
            Piece::Rook => self.slider_moves(p, &ORTHOGONAL),
            Piece::Queen => {
                let mut moves = self.slider_moves(p, &ORTHOGONAL);
                moves.extend(self.slider_moves(p, &DIAGONAL));
                moves
            }
            Piece::King => self.king_moves(p),
        }
    }

    /// Moves offered to a player: the pseudo-legal set, plus castling
    /// destinations for a king.
    ///
    /// While the mover's king is in check this may offer moves that
    /// `attempt_move` rejects.
    pub fn legal_moves(&self, id: PieceId) -> Vec<Square> {
        let Some(p) = self.piece(id) else {
            return Vec::new();
        };
        let mut moves = self.moves_for(&p);
        if p.piece == Piece::King {
            for castle in self.castling_moves(&p) {
                if !moves.contains(&castle.king_to) {
                    moves.push(castle.king_to);
                }
            }
        }
        moves
    }

    /// Number of pseudo-legal destinations of a piece.
    pub fn mobility(&self, id: PieceId) -> usize {
        self.pseudo_legal_moves(id).len()
    }

    /// Union of every pseudo-legal destination of `by`'s live pieces.
    pub(crate) fn attacked_squares(&self, by: Color) -> [[bool; 8]; 8] {
        let mut attacked = [[false; 8]; 8];
        for (_, p) in self.pieces_of(by) {
            for sq in self.moves_for(&p) {
                attacked[sq.row()][sq.col()] = true;
            }
        }
        attacked
    }
}
