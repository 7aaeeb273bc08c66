use super::super::attack_tables::{king_attacks, knight_attacks};
use super::super::types::{Bitboard, MoveList, Piece, Square};
use super::super::Board;
use super::Special;

impl Board {
    pub(super) fn knight_moves(&self, moves: &mut MoveList) {
        self.leaper_moves(moves, Piece::Knight, knight_attacks);
    }

    /// Single-step king moves; castling is generated separately.
    pub(super) fn king_moves(&self, moves: &mut MoveList) {
        self.leaper_moves(moves, Piece::King, king_attacks);
    }

    fn leaper_moves(&self, moves: &mut MoveList, piece: Piece, attacks: fn(Square) -> Bitboard) {
        let us = self.side_to_move;
        let them = us.opponent();
        let own = self.occupancy(us);

        for from in self.pieces(us, piece).iter() {
            for to in (attacks(from) & !own).iter() {
                let captured = self.piece_of(them, to);
                moves.push(self.build_move(from, to, piece, captured, None, Special::None));
            }
        }
    }
}
