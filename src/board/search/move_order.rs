//! Candidate filtering for search.

use super::super::eval::positional_weight;
use super::super::Square;

/// Keep the `limit` destinations with the highest positional weight.
///
/// Equal weights keep their generation order.
pub fn candidate_moves(moves: &[Square], limit: usize) -> Vec<Square> {
    let mut ranked = moves.to_vec();
    ranked.sort_by_key(|&sq| std::cmp::Reverse(positional_weight(sq)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_heaviest_squares_first() {
        let moves = [Square(0, 0), Square(3, 3), Square(2, 2), Square(1, 1)];
        assert_eq!(
            candidate_moves(&moves, 2),
            vec![Square(3, 3), Square(2, 2)]
        );
    }

    #[test]
    fn ties_keep_generation_order() {
        let moves = [Square(1, 1), Square(1, 2), Square(6, 6)];
        assert_eq!(candidate_moves(&moves, 5), moves.to_vec());
    }

    #[test]
    fn limit_zero_drops_everything() {
        assert!(candidate_moves(&[Square(4, 4)], 0).is_empty());
    }
}
