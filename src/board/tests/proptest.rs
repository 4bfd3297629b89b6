//! Property-based tests using proptest.

use crate::board::{random_move, Board, Grid, Square};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random accepted moves for the side to move.
fn playout(seed: u64, num_moves: usize) -> Board {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        if board.is_game_over() {
            break;
        }
        let side = board.side_to_move();
        let Some(mv) = random_move(&board, side, None, &mut rng) else {
            break;
        };
        board
            .attempt_move(mv.piece, mv.to)
            .expect("random_move only yields accepted moves");
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every live piece sits on exactly one cell of its own grid
    #[test]
    fn prop_board_stays_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = playout(seed, num_moves);
        prop_assert!(board.is_consistent());
        prop_assert!(board.live_kings() <= 2);
        prop_assert!(board.live_count() <= 32);
    }

    /// Property: generated destinations are on the board and repeatable
    #[test]
    fn prop_moves_in_bounds_and_deterministic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = playout(seed, num_moves);
        for id in board.live_ids() {
            let moves = board.legal_moves(id);
            for sq in &moves {
                prop_assert!(sq.is_valid());
            }
            prop_assert_eq!(moves, board.legal_moves(id));
        }
    }

    /// Property: destinations occupied on both grids are always refused
    #[test]
    fn prop_accepted_move_never_lands_on_double_occupancy(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = playout(seed, num_moves);
        for id in board.live_ids() {
            for to in board.legal_moves(id) {
                let both = board.id_at(Grid::One, to).is_some()
                    && board.id_at(Grid::Two, to).is_some();
                if both {
                    prop_assert!(!board.is_move_accepted(id, to));
                }
            }
        }
    }

    /// Property: playing on a snapshot never touches the original
    #[test]
    fn prop_snapshot_isolation(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let board = playout(seed, num_moves);
        let before = board.clone();
        let mut snap = board.snapshot();
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
        if let Some(mv) = random_move(&snap, snap.side_to_move(), None, &mut rng) {
            prop_assert!(snap.attempt_move(mv.piece, mv.to).is_ok());
        }
        prop_assert_eq!(board, before);
    }

    /// Property: rejected moves leave the board exactly as it was
    #[test]
    fn prop_rejection_is_atomic(seed in seed_strategy(), row in 0usize..8, col in 0usize..8) {
        let mut board = playout(seed, 10);
        let before = board.clone();
        let to = Square(row, col);
        let ids: Vec<_> = board.live_ids().collect();
        for id in ids {
            if board.attempt_move(id, to).is_ok() {
                break;
            }
            prop_assert_eq!(&board, &before);
        }
    }
}
