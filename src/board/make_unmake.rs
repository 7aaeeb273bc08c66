//! In-place move application and its exact inverse.

use super::types::{Color, Move, Piece, Square};
use super::Board;

/// Rook origin and destination for a castle landing the king on `king_to`.
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    let rank = king_to.rank() * 8;
    if king_to.file() == 6 {
        (Square::from_index_unchecked(rank + 7), Square::from_index_unchecked(rank + 5))
    } else {
        (Square::from_index_unchecked(rank), Square::from_index_unchecked(rank + 3))
    }
}

/// Square of the pawn removed by an en passant capture onto `target` by `mover`.
fn en_passant_victim(mover: Color, target: Square) -> Square {
    match mover {
        Color::White => Square::from_index_unchecked(target.index() - 8),
        Color::Black => Square::from_index_unchecked(target.index() + 8),
    }
}

impl Board {
    /// Apply `mv`, generated for this exact position, in place.
    pub fn make_move(&mut self, mv: &Move) {
        let us = self.side_to_move;
        let them = us.opponent();

        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.castling.remove_all(mv.lost_castling);

        self.remove_piece(mv.from, us, mv.piece);
        if let Some(captured) = mv.captured {
            let at = if mv.en_passant {
                en_passant_victim(us, mv.to)
            } else {
                mv.to
            };
            self.remove_piece(at, them, captured);
        }
        self.set_piece(mv.to, us, mv.promotion.unwrap_or(mv.piece));

        if mv.castle {
            let (rook_from, rook_to) = castle_rook_squares(mv.to);
            self.remove_piece(rook_from, us, Piece::Rook);
            self.set_piece(rook_to, us, Piece::Rook);
        }

        self.en_passant = mv.next_en_passant;
        self.halfmove_clock = mv.next_halfmove;
        self.side_to_move = them;
    }

    /// Undo `mv`, which must be the most recent move made on this board.
    pub fn unmake_move(&mut self, mv: &Move) {
        self.side_to_move = self.side_to_move.opponent();
        let us = self.side_to_move;
        let them = us.opponent();

        self.halfmove_clock = mv.prev_halfmove;
        self.en_passant = mv.prev_en_passant;
        if us == Color::Black {
            self.fullmove_number -= 1;
        }
        self.castling.insert_all(mv.lost_castling);

        if mv.castle {
            let (rook_from, rook_to) = castle_rook_squares(mv.to);
            self.remove_piece(rook_to, us, Piece::Rook);
            self.set_piece(rook_from, us, Piece::Rook);
        }

        self.remove_piece(mv.to, us, mv.promotion.unwrap_or(mv.piece));
        if let Some(captured) = mv.captured {
            let at = if mv.en_passant {
                en_passant_victim(us, mv.to)
            } else {
                mv.to
            };
            self.set_piece(at, them, captured);
        }
        self.set_piece(mv.from, us, mv.piece);
    }
}
