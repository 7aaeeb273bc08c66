//! Attack and check detection.

use super::attack_tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use super::types::{Bitboard, Color, Piece, Square};
use super::Board;

/// Whether `square` is attacked by color `by`, whose pieces are `attackers`
/// (indexed by [`Piece::index`]), when the board's occupancy is `occupancy`.
#[must_use]
pub fn is_attacked(square: Square, by: Color, occupancy: Bitboard, attackers: &[Bitboard; 6]) -> bool {
    let get = |piece: Piece| attackers[piece.index()];
    let queens = get(Piece::Queen);

    !(rook_attacks(square, occupancy) & (get(Piece::Rook) | queens)).is_empty()
        || !(bishop_attacks(square, occupancy) & (get(Piece::Bishop) | queens)).is_empty()
        || !(knight_attacks(square) & get(Piece::Knight)).is_empty()
        // A pawn of `by` attacks `square` exactly when a defending pawn on `square` would attack it.
        || !(pawn_attacks(by.opponent(), square) & get(Piece::Pawn)).is_empty()
        || !(king_attacks(square) & get(Piece::King)).is_empty()
}

impl Board {
    /// Whether any piece of `by` attacks `square` in this position.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        is_attacked(square, by, self.all_occupancy(), &self.pieces[by.index()])
    }

    /// Whether any king of `color` is attacked by the other side.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let them = color.opponent();
        self.pieces(color, Piece::King)
            .iter()
            .any(|sq| self.is_square_attacked(sq, them))
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.in_check(self.side_to_move)
    }

    /// Whether the side that just moved left its own king attacked, i.e. the
    /// last move made was not legal.
    #[must_use]
    pub fn leaves_mover_in_check(&self) -> bool {
        self.in_check(self.side_to_move.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn pawn_attack_direction_depends_on_color() {
        let board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        assert!(board.is_square_attacked(sq("d5"), Color::White));
        assert!(board.is_square_attacked(sq("e4"), Color::Black));
        assert!(!board.is_square_attacked(sq("e3"), Color::Black));
        assert!(!board.is_square_attacked(sq("d3"), Color::White));
    }

    #[test]
    fn sliders_are_blocked() {
        let board = Board::from_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1");
        assert!(board.is_square_attacked(sq("d4"), Color::Black));
        assert!(!board.is_square_attacked(sq("e4"), Color::Black));
        assert!(!board.in_check(Color::White));
    }

    #[test]
    fn detects_each_attacker_kind() {
        let cases = [
            ("4k3/8/8/8/8/8/8/r3K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/2b5/4K3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/3b4/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/3n4/8/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1", false),
            ("4k3/8/8/8/7q/8/8/4K3 w - - 0 1", true),
        ];
        for (fen, expected) in cases {
            let board = Board::from_fen(fen);
            assert_eq!(board.is_in_check(), expected, "{fen}");
        }
    }

    #[test]
    fn free_function_takes_explicit_occupancy() {
        let board = Board::from_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1");
        let black = &board.pieces[Color::Black.index()];
        let without_blocker = board.all_occupancy() & !Bitboard::from_square(sq("d4"));
        assert!(!is_attacked(sq("h4"), Color::Black, board.all_occupancy(), black));
        assert!(is_attacked(sq("h4"), Color::Black, without_blocker, black));
    }

    #[test]
    fn in_check_examines_every_king() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/K3K2r w - - 0 1");
        assert!(board.in_check(Color::White));
    }
}
