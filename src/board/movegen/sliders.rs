use super::super::{Board, LivePiece, Square};
use super::Occupant;

impl Board {
    /// Rays on the piece's own grid: a ray ends on the first opposing piece
    /// (inclusive) or just before the first friendly one.
    pub(crate) fn slider_moves(&self, p: &LivePiece, directions: &[(isize, isize)]) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, dc) in directions {
            let mut current = p.square;
            while let Some(next) = current.offset(dr, dc) {
                match self.occupant(p.grid, next, p.color) {
                    Occupant::Empty => moves.push(next),
                    Occupant::Opposing => {
                        moves.push(next);
                        break;
                    }
                    Occupant::Friendly => break,
                }
                current = next;
            }
        }
        moves
    }
}
