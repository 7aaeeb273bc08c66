use super::super::types::{MoveList, Piece, Square};
use super::super::Board;
use super::{home_squares, Special};

impl Board {
    /// Queen-side then king-side castling for the side to move.
    ///
    /// Requires the right, king and rook on their home squares, empty squares
    /// between them, and no attacked square on the king's path, start and
    /// destination included.
    pub(super) fn castling_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let them = us.opponent();
        let (king_home, queen_rook, king_rook) = home_squares(us);

        if !self.pieces(us, Piece::King).contains(king_home)
            || self.is_square_attacked(king_home, them)
        {
            return;
        }

        let rank = us.back_rank();
        let on_rank = |file: usize| Square::from_index_unchecked(rank * 8 + file);

        for (kingside, rook_home) in [(false, queen_rook), (true, king_rook)] {
            if !self.castling.has(us, kingside) || !self.pieces(us, Piece::Rook).contains(rook_home)
            {
                continue;
            }
            let (between, path): (&[usize], [usize; 2]) = if kingside {
                (&[5, 6], [5, 6])
            } else {
                (&[1, 2, 3], [3, 2])
            };
            let clear = between.iter().all(|&file| self.is_empty(on_rank(file)));
            let safe = path
                .iter()
                .all(|&file| !self.is_square_attacked(on_rank(file), them));
            if clear && safe {
                moves.push(self.build_move(
                    king_home,
                    on_rank(path[1]),
                    Piece::King,
                    None,
                    None,
                    Special::Castle,
                ));
            }
        }
    }
}
