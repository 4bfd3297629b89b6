//! Game controller implementation.

use std::sync::Arc;

use log::{info, warn};
use parking_lot::Mutex;
use rand::seq::SliceRandom;

use crate::board::{
    find_best_move, random_move, Board, Color, Grid, GridView, MoveError, MoveIntent, MoveOutcome,
    PieceId, SearchParams, SearchState, SearchStats, Square,
};

/// Controller handle shared between a renderer and the game loop.
pub type SharedGame = Arc<Mutex<GameController>>;

/// Wrap a controller for sharing across threads.
#[must_use]
pub fn shared(controller: GameController) -> SharedGame {
    Arc::new(Mutex::new(controller))
}

/// Owns the live board and plays one side with the search engine.
pub struct GameController {
    board: Board,
    search_state: SearchState,
    machine: Color,
    /// Moves the machine has committed so far
    machine_turns: u32,
    plies: u32,
}

impl GameController {
    /// New game from the initial position, machine playing Black.
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        GameController::with_board(Board::new(), params)
    }

    #[must_use]
    pub fn with_board(board: Board, params: SearchParams) -> Self {
        GameController {
            board,
            search_state: SearchState::new(params),
            machine: Color::Black,
            machine_turns: 0,
            plies: 0,
        }
    }

    /// Get a reference to the current board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn machine_color(&self) -> Color {
        self.machine
    }

    pub fn set_machine_color(&mut self, color: Color) {
        self.machine = color;
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn plies_played(&self) -> u32 {
        self.plies
    }

    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        &self.search_state.stats
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.search_state.params
    }

    /// Destinations to offer for a piece (pseudo-legal; `play` is the final
    /// word while in check).
    #[must_use]
    pub fn legal_moves(&self, id: PieceId) -> Vec<Square> {
        self.board.legal_moves(id)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Whether `color` can still answer a check. In check without any
    /// resolving move is the position the rules leave unnamed.
    #[must_use]
    pub fn has_resolving_move(&self, color: Color) -> bool {
        self.board.has_resolving_move(color)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[must_use]
    pub fn boards_view(&self) -> [GridView; 2] {
        self.board.boards_view()
    }

    /// Play a move for the side to move.
    pub fn play(&mut self, id: PieceId, to: Square) -> Result<MoveOutcome, MoveError> {
        let mover = self.board.piece(id).ok_or(MoveError::UnknownPiece { id })?;
        if mover.color != self.board.side_to_move() {
            return Err(MoveError::NotYourTurn { color: mover.color });
        }
        let outcome = self.board.attempt_move(id, to)?;
        self.plies += 1;
        info!(
            "ply {}: {} {} to {} on {}",
            self.plies, mover.color, mover.piece, to, outcome.landed_on
        );
        Ok(outcome)
    }

    /// Pick the machine's next move without playing it.
    ///
    /// The first `opening_random_turns` machine moves are random: one random
    /// move is drawn per grid and one of those is kept. Afterwards the
    /// search decides.
    pub fn choose_machine_move(&mut self) -> Option<MoveIntent> {
        if self.board.is_game_over() {
            return None;
        }
        let side = self.machine;
        if self.machine_turns < self.search_state.params.opening_random_turns {
            let rng = self.search_state.rng_mut();
            let per_grid: Vec<MoveIntent> = Grid::BOTH
                .iter()
                .filter_map(|&grid| random_move(&self.board, side, Some(grid), &mut *rng))
                .collect();
            return per_grid.choose(rng).copied();
        }
        let depth = self.search_state.params.depth;
        find_best_move(&self.board, &mut self.search_state, side, depth).best_move
    }

    /// Select and commit the machine's move. `None` when the game is over,
    /// it is not the machine's turn, or no move could be played.
    pub fn machine_turn(&mut self) -> Option<(MoveIntent, MoveOutcome)> {
        if self.board.side_to_move() != self.machine {
            return None;
        }
        let mv = self.choose_machine_move()?;
        match self.play(mv.piece, mv.to) {
            Ok(outcome) => {
                self.machine_turns += 1;
                Some((mv, outcome))
            }
            Err(err) => {
                warn!("machine move {mv} rejected: {err}");
                None
            }
        }
    }
}
