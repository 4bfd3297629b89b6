//! Two-grid board state: piece arena, placement and relocation.

use super::error::MoveError;
use super::{BoardBuilder, Color, Grid, GridView, LivePiece, Piece, PieceId, Square};

type Cells = [[Option<PieceId>; 8]; 8];

/// Both grids plus the arena of pieces they refer to.
///
/// Grid cells hold `PieceId`s into `pieces`; a captured piece leaves a `None`
/// slot behind so identifiers stay stable for the whole game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: Vec<Option<LivePiece>>,
    pub(crate) grids: [Cells; 2],
    pub(crate) side_to_move: Color,
}

impl Board {
    /// Standard starting placement, every piece on grid one, White to move.
    pub fn new() -> Self {
        BoardBuilder::starting_position().build()
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: Vec::with_capacity(32),
            grids: [[[None; 8]; 8]; 2],
            side_to_move: Color::White,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Put a new piece on the grid and square it names.
    ///
    /// The square must be empty on that grid.
    pub fn place(&mut self, piece: LivePiece) -> PieceId {
        debug_assert!(piece.square.is_valid(), "square out of bounds");
        debug_assert!(
            self.id_at(piece.grid, piece.square).is_none(),
            "square already occupied"
        );
        debug_assert!(self.pieces.len() < u8::MAX as usize, "piece arena full");
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Some(piece));
        self.set_cell(piece.grid, piece.square, Some(id));
        id
    }

    /// Move a piece onto the other grid at `to`.
    ///
    /// An opposing piece on the entered cell is captured. A friendly piece
    /// there makes the move impossible and nothing changes. Returns the
    /// captured piece, if any.
    pub fn relocate(&mut self, id: PieceId, to: Square) -> Result<Option<LivePiece>, MoveError> {
        let mover = self.piece(id).ok_or(MoveError::UnknownPiece { id })?;
        if !to.is_valid() {
            return Err(MoveError::InvalidDestination { square: to });
        }
        let target_grid = mover.grid.other();
        let captured = match self.id_at(target_grid, to) {
            Some(other) => match self.piece(other) {
                Some(p) if p.color == mover.color => {
                    return Err(MoveError::TransferBlocked {
                        square: to,
                        grid: target_grid,
                    });
                }
                _ => self.retire(other),
            },
            None => None,
        };

        self.set_cell(mover.grid, mover.square, None);
        self.set_cell(target_grid, to, Some(id));
        if let Some(slot) = self.pieces[id.as_usize()].as_mut() {
            slot.grid = target_grid;
            slot.square = to;
            slot.moved = true;
        }
        Ok(captured)
    }

    /// Clear the square on whichever grid holds an occupant, grid one first,
    /// and take that piece out of play.
    pub fn remove_at(&mut self, square: Square) -> Option<LivePiece> {
        let id = Grid::BOTH
            .iter()
            .find_map(|&grid| self.id_at(grid, square))?;
        self.retire(id)
    }

    fn retire(&mut self, id: PieceId) -> Option<LivePiece> {
        let piece = self.pieces.get_mut(id.as_usize())?.take()?;
        self.set_cell(piece.grid, piece.square, None);
        Some(piece)
    }

    /// Live pieces of the other color standing on `grid`.
    pub fn opponent_pieces(&self, color: Color, grid: Grid) -> Vec<PieceId> {
        let mut found = Vec::new();
        for row in &self.grids[grid.index()] {
            for id in row.iter().flatten() {
                if self.piece(*id).is_some_and(|p| p.color != color) {
                    found.push(*id);
                }
            }
        }
        found
    }

    /// Independent copy for speculative play.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<LivePiece> {
        self.pieces.get(id.as_usize()).copied().flatten()
    }

    #[inline]
    pub fn id_at(&self, grid: Grid, square: Square) -> Option<PieceId> {
        if !square.is_valid() {
            return None;
        }
        self.grids[grid.index()][square.row()][square.col()]
    }

    #[inline]
    pub fn piece_at(&self, grid: Grid, square: Square) -> Option<LivePiece> {
        self.id_at(grid, square).and_then(|id| self.piece(id))
    }

    /// True when the square is empty on both grids.
    #[inline]
    pub fn is_vacant(&self, square: Square) -> bool {
        Grid::BOTH.iter().all(|&g| self.id_at(g, square).is_none())
    }

    #[inline]
    fn set_cell(&mut self, grid: Grid, square: Square, value: Option<PieceId>) {
        self.grids[grid.index()][square.row()][square.col()] = value;
    }

    /// Identifiers of every live piece, in arena order.
    pub fn live_ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(idx, _)| PieceId(idx as u8))
    }

    /// Live pieces of one color, in arena order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, LivePiece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(move |(idx, slot)| match slot {
                Some(p) if p.color == color => Some((PieceId(idx as u8), *p)),
                _ => None,
            })
    }

    pub fn live_count(&self) -> usize {
        self.pieces.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn find_king(&self, color: Color) -> Option<PieceId> {
        self.pieces_of(color)
            .find(|(_, p)| p.piece == Piece::King)
            .map(|(id, _)| id)
    }

    /// Kings still in play, of either color.
    pub fn live_kings(&self) -> usize {
        Color::BOTH
            .iter()
            .filter(|&&c| self.find_king(c).is_some())
            .count()
    }

    /// The game ends as soon as either king has been captured.
    pub fn is_game_over(&self) -> bool {
        self.live_kings() < 2
    }

    /// Renderer-facing copy of both grids.
    pub fn boards_view(&self) -> [GridView; 2] {
        let mut view: [GridView; 2] = [[[None; 8]; 8]; 2];
        for grid in Grid::BOTH {
            for row in 0..8 {
                for col in 0..8 {
                    view[grid.index()][row][col] = self
                        .piece_at(grid, Square(row, col))
                        .map(|p| (p.color, p.piece));
                }
            }
        }
        view
    }

    /// Checks that every live piece sits exactly where it says it does and
    /// that no cell points at a dead or mismatched piece.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![0usize; self.pieces.len()];
        for grid in Grid::BOTH {
            for row in 0..8 {
                for col in 0..8 {
                    let Some(id) = self.grids[grid.index()][row][col] else {
                        continue;
                    };
                    match self.piece(id) {
                        Some(p) if p.grid == grid && p.square == Square(row, col) => {
                            seen[id.as_usize()] += 1;
                        }
                        _ => return false,
                    }
                }
            }
        }
        self.pieces
            .iter()
            .zip(seen)
            .all(|(slot, count)| if slot.is_some() { count == 1 } else { count == 0 })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
