//! Static evaluation.
//!
//! Each live piece contributes its material value, the positional weight of
//! its square and its mobility. White's contributions are subtracted and
//! Black's added, so Black is the maximizing side.

use super::{Board, Square};

/// Positional weight per square, highest in the centre.
pub const POSITIONAL_WEIGHT: [[i32; 8]; 8] = [
    [0, 10, 10, 10, 10, 10, 10, 0],
    [10, 20, 20, 20, 20, 20, 20, 10],
    [10, 20, 30, 30, 30, 30, 20, 10],
    [10, 20, 30, 50, 50, 30, 20, 10],
    [10, 20, 30, 50, 50, 30, 20, 10],
    [10, 20, 30, 30, 30, 30, 20, 10],
    [10, 20, 20, 20, 20, 20, 20, 10],
    [0, 10, 10, 10, 10, 10, 10, 0],
];

#[inline]
#[must_use]
pub fn positional_weight(square: Square) -> i32 {
    POSITIONAL_WEIGHT[square.row()][square.col()]
}

impl Board {
    /// Deterministic score of the position from Black's point of view.
    pub fn evaluate(&self) -> i32 {
        self.live_ids()
            .filter_map(|id| self.piece(id))
            .map(|p| {
                let mobility = self.moves_for(&p).len() as i32;
                p.color.sign() * (p.value() + positional_weight(p.square) + mobility)
            })
            .sum()
    }
}
