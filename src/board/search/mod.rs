//! Machine opponent: minimax with alpha-beta pruning over cloned positions.
//!
//! Features:
//! - Fixed-depth minimax, Black maximizing and White minimizing
//! - Per-piece candidate cap ranked by positional weight
//! - Uniform leaf jitter and random tie-breaking at the root
//! - Random moves for the opening phase, optionally limited to one grid
//!
//! The live board is only ever read here; every explored move is played on
//! a snapshot.

mod minimax;
mod move_order;
mod params;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Board, Color, Grid, MoveIntent};
pub use minimax::minimax;
pub use move_order::candidate_moves;
pub use params::SearchParams;

/// Statistics tracked during search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    /// Candidate moves the rule engine turned down
    pub rejected: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        self.nodes = 0;
        self.rejected = 0;
    }
}

/// Parameters, RNG and counters carried across searches.
pub struct SearchState {
    pub params: SearchParams,
    pub stats: SearchStats,
    pub(crate) rng: StdRng,
}

impl SearchState {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SearchState {
            params,
            stats: SearchStats::default(),
            rng,
        }
    }

    /// Deterministic state for tests and reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        SearchState::new(SearchParams {
            seed: Some(seed),
            ..SearchParams::default()
        })
    }

    pub(crate) fn jitter(&mut self) -> f64 {
        let amplitude = self.params.jitter;
        if amplitude > 0.0 {
            self.rng.gen_range(-amplitude..=amplitude)
        } else {
            0.0
        }
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(SearchParams::default())
    }
}

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<MoveIntent>,
    /// Score shared by every move that tied for best
    pub score: Option<f64>,
    /// How many root moves reached that score
    pub ties: usize,
}

/// Candidate moves for every piece of `side`, in arena order.
pub(crate) fn side_candidates(board: &Board, side: Color, limit: usize) -> Vec<MoveIntent> {
    board
        .pieces_of(side)
        .flat_map(|(id, _)| {
            candidate_moves(&board.legal_moves(id), limit)
                .into_iter()
                .map(move |to| MoveIntent::new(id, to))
        })
        .collect()
}

/// Pick a move for `side`, looking `depth` replies past the root move.
///
/// Every root candidate is scored with a full-window `minimax` call of
/// `depth` on the resulting position; the winner is drawn uniformly from all
/// moves sharing the best score for `side` (highest for Black, lowest for
/// White). `board` is not modified.
pub fn find_best_move(
    board: &Board,
    state: &mut SearchState,
    side: Color,
    depth: u32,
) -> SearchResult {
    state.stats.reset();
    let maximizing = side == Color::Black;
    let mut best_score: Option<f64> = None;
    let mut best_moves: Vec<MoveIntent> = Vec::new();

    for mv in side_candidates(board, side, state.params.candidate_limit) {
        let mut child = board.snapshot();
        if child.attempt_move(mv.piece, mv.to).is_err() {
            state.stats.rejected += 1;
            continue;
        }
        let score = minimax(
            &child,
            state,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            !maximizing,
        );
        let improves = match best_score {
            None => true,
            Some(best) if maximizing => score > best,
            Some(best) => score < best,
        };
        if improves {
            best_score = Some(score);
            best_moves.clear();
            best_moves.push(mv);
        } else if best_score == Some(score) {
            best_moves.push(mv);
        }
    }

    let best_move = best_moves.choose(&mut state.rng).copied();
    debug!(
        "search {side} depth {depth}: {} nodes, {} rejected, score {:?}, {} tied",
        state.stats.nodes,
        state.stats.rejected,
        best_score,
        best_moves.len()
    );
    SearchResult {
        best_move,
        score: best_score,
        ties: best_moves.len(),
    }
}

/// A uniformly random accepted move for `side`, optionally only among the
/// pieces standing on `grid`.
pub fn random_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    grid: Option<Grid>,
    rng: &mut R,
) -> Option<MoveIntent> {
    let moves: Vec<MoveIntent> = board
        .pieces_of(side)
        .filter(|(_, p)| grid.map_or(true, |g| p.grid == g))
        .flat_map(|(id, _)| {
            board
                .legal_moves(id)
                .into_iter()
                .map(move |to| MoveIntent::new(id, to))
        })
        .filter(|mv| board.is_move_accepted(mv.piece, mv.to))
        .collect();
    moves.choose(rng).copied()
}
