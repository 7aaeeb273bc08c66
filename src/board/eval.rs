//! Static evaluation: material plus piece-square bonuses.

use super::pst::square_value;
use super::types::{Color, Piece};
use super::Board;

impl Board {
    /// Total material value of `color`'s pieces.
    #[must_use]
    pub fn material_score(&self, color: Color) -> i32 {
        Piece::ALL
            .into_iter()
            .map(|piece| piece.value() * self.pieces(color, piece).popcount() as i32)
            .sum()
    }

    /// Sum of piece-square bonuses for `color`'s pieces, from `color`'s point of view.
    fn square_bonus(&self, color: Color, late_game: bool) -> i32 {
        let mut total = 0;
        for piece in Piece::ALL {
            for sq in self.pieces(color, piece).iter() {
                total += square_value(piece, color, sq, late_game);
            }
        }
        total
    }

    /// Piece-square balance for `color`: its own bonuses minus the opponent's.
    ///
    /// The result for White is always the negation of the result for Black.
    #[must_use]
    pub fn positional_score(&self, color: Color) -> i32 {
        let late_game = self.is_late_game();
        self.square_bonus(color, late_game) - self.square_bonus(color.opponent(), late_game)
    }

    /// Leaf heuristic used by search, from `color`'s point of view.
    #[must_use]
    pub fn evaluate(&self, color: Color) -> i32 {
        self.material_score(color) - self.material_score(color.opponent())
            + self.positional_score(color)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color};

    #[test]
    fn start_position_is_balanced() {
        let board = Board::new();
        assert_eq!(board.material_score(Color::White), 4000);
        assert_eq!(board.material_score(Color::Black), 4000);
        assert_eq!(board.positional_score(Color::White), 0);
        assert_eq!(board.evaluate(Color::White), 0);
        assert_eq!(board.evaluate(Color::Black), 0);
    }

    #[test]
    fn positional_score_is_antisymmetric() {
        let board =
            Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
        assert_eq!(
            board.positional_score(Color::White),
            -board.positional_score(Color::Black)
        );
    }
}
