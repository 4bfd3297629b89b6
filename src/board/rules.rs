//! Move legality and atomic commit.
//!
//! A move is validated completely against the current position before
//! anything is touched; only then are the capture, the relocation onto the
//! other grid and (for castling) the rook's relocation applied.

use log::debug;

use super::error::MoveError;
use super::{Board, Castle, Color, Grid, LivePiece, PieceId, Square};

/// A fully validated move, ready to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PlannedMove {
    id: PieceId,
    to: Square,
    capture: Option<PieceId>,
    castle: Option<Castle>,
}

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece taken out of play, if any
    pub captured: Option<LivePiece>,
    /// The grid the mover now stands on
    pub landed_on: Grid,
    pub castled: bool,
}

impl Board {
    /// True when some opposing piece has the king's square among its
    /// pseudo-legal destinations. A side without a king is not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color).and_then(|id| self.piece(id)) else {
            return false;
        };
        self.pieces_of(color.opponent())
            .any(|(_, p)| self.moves_for(&p).contains(&king.square))
    }

    /// Destinations of `id` that no opposing piece can reach.
    ///
    /// These are the only moves accepted while the mover's king is in check.
    pub fn resolving_moves(&self, id: PieceId) -> Vec<Square> {
        let Some(p) = self.piece(id) else {
            return Vec::new();
        };
        let attacked = self.attacked_squares(p.color.opponent());
        self.moves_for(&p)
            .into_iter()
            .filter(|sq| !attacked[sq.row()][sq.col()])
            .collect()
    }

    /// Whether any piece of `color` has a resolving destination.
    ///
    /// In check with no resolving move is the position the engine does not
    /// name as checkmate; callers use this to notice it.
    pub fn has_resolving_move(&self, color: Color) -> bool {
        let attacked = self.attacked_squares(color.opponent());
        self.pieces_of(color).any(|(_, p)| {
            self.moves_for(&p)
                .iter()
                .any(|sq| !attacked[sq.row()][sq.col()])
        })
    }

    pub(crate) fn plan_move(&self, id: PieceId, to: Square) -> Result<PlannedMove, MoveError> {
        let mover = self.piece(id).ok_or(MoveError::UnknownPiece { id })?;
        if !to.is_valid() || Grid::BOTH.iter().all(|&g| self.id_at(g, to).is_some()) {
            return Err(MoveError::InvalidDestination { square: to });
        }
        let king = self
            .find_king(mover.color)
            .ok_or(MoveError::NoKingPresent { color: mover.color })?;

        let castle = if self.is_in_check(mover.color) {
            if !self.resolving_moves(id).contains(&to) {
                return Err(MoveError::IllegalMove { id, square: to });
            }
            None
        } else {
            let castle = if id == king {
                self.castling_moves(&mover)
                    .into_iter()
                    .find(|c| c.king_to == to)
            } else {
                None
            };
            if castle.is_none() && !self.moves_for(&mover).contains(&to) {
                return Err(MoveError::IllegalMove { id, square: to });
            }
            castle
        };

        let entered = mover.grid.other();
        if self
            .piece_at(entered, to)
            .is_some_and(|p| p.color == mover.color)
        {
            return Err(MoveError::TransferBlocked {
                square: to,
                grid: entered,
            });
        }

        if let Some(c) = castle {
            let rook_grid = self
                .piece(c.rook)
                .map_or(entered, |rook| rook.grid.other());
            if self.id_at(rook_grid, c.rook_to).is_some() {
                return Err(MoveError::TransferBlocked {
                    square: c.rook_to,
                    grid: rook_grid,
                });
            }
        }

        // The guard above leaves at most one occupant on `to`, on either grid.
        let capture = [entered, mover.grid].iter().find_map(|&grid| {
            self.opponent_pieces(mover.color, grid)
                .into_iter()
                .find(|&other| self.piece(other).is_some_and(|p| p.square == to))
        });

        Ok(PlannedMove {
            id,
            to,
            capture,
            castle,
        })
    }

    /// Speculative check: would `attempt_move` accept this move?
    pub fn is_move_accepted(&self, id: PieceId, to: Square) -> bool {
        self.plan_move(id, to).is_ok()
    }

    /// Validate and, if accepted, play the move: capture, hop to the other
    /// grid, bring the rook along when castling, pass the turn.
    ///
    /// A rejected move leaves the board exactly as it was.
    pub fn attempt_move(&mut self, id: PieceId, to: Square) -> Result<MoveOutcome, MoveError> {
        let plan = self.plan_move(id, to)?;
        self.commit(plan)
    }

    fn commit(&mut self, plan: PlannedMove) -> Result<MoveOutcome, MoveError> {
        let mover = self
            .piece(plan.id)
            .ok_or(MoveError::UnknownPiece { id: plan.id })?;

        let captured = match plan.capture {
            Some(_) => self.remove_at(plan.to),
            None => None,
        };
        self.relocate(plan.id, plan.to)?;
        if let Some(castle) = plan.castle {
            self.relocate(castle.rook, castle.rook_to)?;
        }
        self.side_to_move = mover.color.opponent();

        debug!(
            "{} {} {} -> {} on {}{}",
            mover.color,
            mover.piece,
            mover.square,
            plan.to,
            mover.grid.other(),
            captured.map_or(String::new(), |c| format!(", captures {} {}", c.color, c.piece)),
        );

        Ok(MoveOutcome {
            captured,
            landed_on: mover.grid.other(),
            castled: plan.castle.is_some(),
        })
    }
}
