//! Placement, relocation and snapshot tests.

use crate::board::{Board, BoardBuilder, Color, Grid, MoveError, Piece, Square};

#[test]
fn test_relocate_switches_grid() {
    let mut board = BoardBuilder::new()
        .piece(Grid::One, Square(0, 0), Color::White, Piece::Rook)
        .build();
    let rook = board.id_at(Grid::One, Square(0, 0)).unwrap();

    let captured = board.relocate(rook, Square(0, 5)).unwrap();
    assert!(captured.is_none());

    let moved = board.piece(rook).unwrap();
    assert_eq!(moved.grid, Grid::Two);
    assert_eq!(moved.square, Square(0, 5));
    assert!(moved.moved);
    assert!(board.id_at(Grid::One, Square(0, 0)).is_none());
    assert_eq!(board.id_at(Grid::Two, Square(0, 5)), Some(rook));
    assert!(board.is_consistent());
}

#[test]
fn test_relocate_captures_opposing_occupant() {
    let mut board = BoardBuilder::new()
        .piece(Grid::One, Square(0, 0), Color::White, Piece::Rook)
        .piece(Grid::Two, Square(0, 5), Color::Black, Piece::Bishop)
        .build();
    let rook = board.id_at(Grid::One, Square(0, 0)).unwrap();

    let captured = board.relocate(rook, Square(0, 5)).unwrap();
    assert_eq!(captured.map(|p| p.piece), Some(Piece::Bishop));
    assert_eq!(board.live_count(), 1);
    assert!(board.is_consistent());
}

#[test]
fn test_relocate_onto_friendly_is_refused() {
    let mut board = BoardBuilder::new()
        .piece(Grid::One, Square(0, 0), Color::White, Piece::Rook)
        .piece(Grid::Two, Square(0, 5), Color::White, Piece::Bishop)
        .build();
    let before = board.clone();
    let rook = board.id_at(Grid::One, Square(0, 0)).unwrap();

    let err = board.relocate(rook, Square(0, 5)).unwrap_err();
    assert_eq!(
        err,
        MoveError::TransferBlocked {
            square: Square(0, 5),
            grid: Grid::Two
        }
    );
    assert_eq!(board, before);
}

#[test]
fn test_remove_at_prefers_grid_one() {
    let mut board = BoardBuilder::new()
        .piece(Grid::One, Square(3, 3), Color::White, Piece::Knight)
        .piece(Grid::Two, Square(3, 3), Color::Black, Piece::Knight)
        .build();

    let removed = board.remove_at(Square(3, 3)).unwrap();
    assert_eq!(removed.color, Color::White);
    assert!(board.piece_at(Grid::Two, Square(3, 3)).is_some());

    let removed = board.remove_at(Square(3, 3)).unwrap();
    assert_eq!(removed.color, Color::Black);
    assert!(board.remove_at(Square(3, 3)).is_none());
    assert_eq!(board.live_count(), 0);
}

#[test]
fn test_ids_stay_stable_after_removal() {
    let mut board = Board::new();
    let queen = board.id_at(Grid::One, Square(0, 3)).unwrap();
    board.remove_at(Square(0, 0));
    assert_eq!(board.id_at(Grid::One, Square(0, 3)), Some(queen));
    assert_eq!(board.piece(queen).map(|p| p.piece), Some(Piece::Queen));
}

#[test]
fn test_opponent_pieces_per_grid() {
    let board = Board::new();
    let black_on_one = board.opponent_pieces(Color::White, Grid::One);
    assert_eq!(black_on_one.len(), 16);
    assert!(black_on_one
        .iter()
        .all(|&id| board.piece(id).is_some_and(|p| p.color == Color::Black)));
    assert!(board.opponent_pieces(Color::White, Grid::Two).is_empty());
}

#[test]
fn test_snapshot_is_independent() {
    let board = Board::new();
    let original = board.clone();
    let mut snap = board.snapshot();
    let pawn = snap.id_at(Grid::One, Square(1, 4)).unwrap();
    snap.attempt_move(pawn, Square(3, 4)).unwrap();

    assert_ne!(snap, board);
    assert_eq!(board, original);
}

#[test]
fn test_boards_view_of_initial_position() {
    let view = Board::new().boards_view();
    assert_eq!(view[0][0][4], Some((Color::White, Piece::King)));
    assert_eq!(view[0][7][3], Some((Color::Black, Piece::Queen)));
    assert_eq!(view[0][4][4], None);
    assert!(view[1].iter().flatten().all(Option::is_none));
}

#[test]
fn test_game_over_when_king_gone() {
    let mut board = Board::new();
    assert!(!board.is_game_over());
    assert_eq!(board.live_kings(), 2);

    board.remove_at(Square(7, 4));
    assert!(board.is_game_over());
    assert!(board.find_king(Color::Black).is_none());
}

#[test]
fn test_unknown_piece() {
    let mut board = BoardBuilder::new()
        .piece(Grid::One, Square(0, 0), Color::White, Piece::Rook)
        .build();
    let rook = board.id_at(Grid::One, Square(0, 0)).unwrap();
    board.remove_at(Square(0, 0));
    assert_eq!(
        board.relocate(rook, Square(1, 0)),
        Err(MoveError::UnknownPiece { id: rook })
    );
}

#[test]
fn test_both_grids_full_keeps_ids_distinct() {
    let mut builder = BoardBuilder::new();
    for grid in Grid::BOTH {
        for idx in 0..64 {
            builder = builder.piece(grid, Square::from_index(idx), Color::White, Piece::Pawn);
        }
    }
    let board = builder.build();
    assert_eq!(board.live_count(), 128);
    assert!(board.is_consistent());
    let ids: std::collections::HashSet<_> = board.live_ids().collect();
    assert_eq!(ids.len(), 128);
}
