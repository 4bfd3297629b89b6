use log::trace;

use super::{side_candidates, SearchState};
use crate::board::{Board, Color};

fn leaf_score(board: &Board, state: &mut SearchState) -> f64 {
    f64::from(board.evaluate()) + state.jitter()
}

/// Minimax with alpha-beta pruning. Black maximizes, White minimizes.
///
/// Leaves are depth 0, a finished game, or a side with no accepted
/// candidate; all are scored statically plus jitter.
pub fn minimax(
    board: &Board,
    state: &mut SearchState,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
) -> f64 {
    state.stats.nodes += 1;
    if depth == 0 || board.is_game_over() {
        return leaf_score(board, state);
    }

    let side = if maximizing { Color::Black } else { Color::White };
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut expanded = false;

    for mv in side_candidates(board, side, state.params.candidate_limit) {
        let mut child = board.snapshot();
        if child.attempt_move(mv.piece, mv.to).is_err() {
            state.stats.rejected += 1;
            continue;
        }
        expanded = true;
        let score = minimax(&child, state, depth - 1, alpha, beta, !maximizing);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            trace!("cutoff at depth {depth} after {mv}");
            break;
        }
    }

    if expanded {
        best
    } else {
        leaf_score(board, state)
    }
}
