//! Benchmarks for rules and search performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use twin_chess::board::{find_best_move, random_move, Board, SearchState};

/// A position a few random plies into the game, pieces spread over both grids.
fn scattered(seed: u64, plies: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let side = board.side_to_move();
        let Some(mv) = random_move(&board, side, None, &mut rng) else {
            break;
        };
        if board.attempt_move(mv.piece, mv.to).is_err() || board.is_game_over() {
            break;
        }
    }
    board
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [("startpos", Board::new()), ("scattered", scattered(7, 12))];
    for (name, board) in positions {
        group.bench_with_input(BenchmarkId::new("legal_moves", name), &board, |b, board| {
            b.iter(|| {
                board
                    .live_ids()
                    .map(|id| black_box(board.legal_moves(id)).len())
                    .sum::<usize>()
            })
        });
    }

    let board = scattered(7, 12);
    group.bench_function("is_in_check", |b| {
        b.iter(|| black_box(board.is_in_check(board.side_to_move())))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [0, 1, 2] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            let board = Board::new();
            b.iter(|| {
                let mut state = SearchState::seeded(1);
                find_best_move(&board, &mut state, board.side_to_move(), depth)
            })
        });
    }

    let board = scattered(11, 10);
    group.bench_function("scattered/1", |b| {
        b.iter(|| {
            let mut state = SearchState::seeded(1);
            find_best_move(&board, &mut state, board.side_to_move(), 1)
        })
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [("startpos", Board::new()), ("scattered", scattered(3, 16))];
    for (name, board) in positions {
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);
