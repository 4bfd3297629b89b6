//! Evaluation tests.

use crate::board::{positional_weight, Board, BoardBuilder, Color, Grid, Piece, Square};

#[test]
fn test_initial_position_is_balanced() {
    assert_eq!(Board::new().evaluate(), 0);
}

#[test]
fn test_missing_white_pawn_favours_black() {
    let mut board = Board::new();
    board.remove_at(Square(1, 0));
    assert!(board.evaluate() > 0);
}

#[test]
fn test_missing_black_queen_favours_white() {
    let mut board = Board::new();
    board.remove_at(Square(7, 3));
    assert!(board.evaluate() < -800);
}

#[test]
fn test_lone_piece_score() {
    let board = BoardBuilder::new()
        .piece(Grid::Two, Square(0, 0), Color::Black, Piece::Knight)
        .build();
    // corner weight is zero, two knight moves
    assert_eq!(board.evaluate(), 320 + 2);

    let board = BoardBuilder::new()
        .piece(Grid::One, Square(3, 3), Color::White, Piece::Knight)
        .build();
    assert_eq!(board.evaluate(), -(320 + 50 + 8));
}

#[test]
fn test_both_grids_count() {
    let one = BoardBuilder::new()
        .piece(Grid::One, Square(3, 3), Color::Black, Piece::Rook)
        .build();
    let two = BoardBuilder::new()
        .piece(Grid::Two, Square(3, 3), Color::Black, Piece::Rook)
        .build();
    assert_eq!(one.evaluate(), two.evaluate());
}

#[test]
fn test_centre_outweighs_corner() {
    assert!(positional_weight(Square(3, 3)) > positional_weight(Square(0, 0)));
    assert!(positional_weight(Square(4, 4)) > positional_weight(Square(2, 2)));
    assert_eq!(positional_weight(Square(7, 7)), 0);
}

#[test]
fn test_evaluate_is_deterministic() {
    let board = Board::new();
    assert_eq!(board.evaluate(), board.evaluate());
}
