//! Move representation.

use std::fmt;

use super::{PieceId, Square};

/// A piece paired with the square it should move to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MoveIntent {
    pub piece: PieceId,
    pub to: Square,
}

impl MoveIntent {
    #[must_use]
    pub const fn new(piece: PieceId, to: Square) -> Self {
        MoveIntent { piece, to }
    }
}

impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.piece, self.to)
    }
}
