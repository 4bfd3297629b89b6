use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, LivePiece, Square};
use super::Occupant;

impl Board {
    pub(crate) fn knight_moves(&self, p: &LivePiece) -> Vec<Square> {
        KNIGHT_TARGETS[p.square.as_index()]
            .iter()
            .copied()
            .filter(|&to| self.occupant(p.grid, to, p.color) != Occupant::Friendly)
            .collect()
    }
}
