use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, LivePiece, Piece, PieceId, Square};
use super::Occupant;

/// A castling option: where the king lands and how its rook follows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Castle {
    pub king_to: Square,
    pub rook: PieceId,
    pub rook_to: Square,
}

impl Board {
    pub(crate) fn king_moves(&self, p: &LivePiece) -> Vec<Square> {
        KING_TARGETS[p.square.as_index()]
            .iter()
            .copied()
            .filter(|&to| self.occupant(p.grid, to, p.color) != Occupant::Friendly)
            .collect()
    }

    /// Castling destinations available to an unmoved king on its home
    /// square. Squares the king passes are not checked for attacks.
    pub(crate) fn castling_moves(&self, king: &LivePiece) -> Vec<Castle> {
        let mut castles = Vec::new();
        let row = king.color.back_row();
        if king.piece != Piece::King || king.moved || king.square != Square(row, 4) {
            return castles;
        }

        // (rook col, squares that must be empty, king lands, rook lands)
        let sides: [(usize, &[usize], usize, usize); 2] =
            [(7, &[5, 6], 6, 5), (0, &[1, 2, 3], 2, 3)];

        for (rook_col, between, king_col, rook_col_to) in sides {
            let Some(rook) = self.id_at(king.grid, Square(row, rook_col)) else {
                continue;
            };
            let is_own_rook = self
                .piece(rook)
                .is_some_and(|r| r.piece == Piece::Rook && r.color == king.color);
            let clear = between
                .iter()
                .all(|&col| self.id_at(king.grid, Square(row, col)).is_none());
            if is_own_rook && clear {
                castles.push(Castle {
                    king_to: Square(row, king_col),
                    rook,
                    rook_to: Square(row, rook_col_to),
                });
            }
        }
        castles
    }
}
