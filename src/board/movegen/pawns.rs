use super::super::{Board, LivePiece, Square};
use super::Occupant;

impl Board {
    /// Pushes need the target empty on both grids; captures look only at the
    /// pawn's own grid.
    pub(crate) fn pawn_moves(&self, p: &LivePiece) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = p.color.pawn_direction();

        if let Some(forward) = p.square.offset(dir, 0) {
            if self.is_vacant(forward) {
                moves.push(forward);
                if p.square.row() == p.color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_vacant(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = p.square.offset(dir, dc) {
                if self.occupant(p.grid, target, p.color) == Occupant::Opposing {
                    moves.push(target);
                }
            }
        }

        moves
    }
}
