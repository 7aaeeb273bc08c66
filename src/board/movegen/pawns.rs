use super::super::attack_tables::pawn_attacks;
use super::super::types::{Bitboard, Color, MoveList, Piece, Square};
use super::super::Board;
use super::Special;

impl Board {
    /// One square toward the mover's last rank.
    fn pawn_advance(color: Color, sq: Square) -> Option<Square> {
        match color {
            Color::White => sq.north(),
            Color::Black => sq.south(),
        }
    }

    /// Diagonal captures, including en passant and capture-promotions.
    pub(super) fn pawn_captures(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let them = us.opponent();
        let ep = self.en_passant.map_or(Bitboard::EMPTY, Bitboard::from_square);
        let targets_mask = (self.occupancy(them) | ep) & !self.occupancy(us);

        for from in self.pieces(us, Piece::Pawn).iter() {
            for to in (pawn_attacks(us, from) & targets_mask).iter() {
                if Some(to) == self.en_passant {
                    // The captured pawn sits behind the target, on the mover's side.
                    let behind = Self::pawn_advance(them, to);
                    let victim = behind.and_then(|sq| self.piece_of(them, sq));
                    if victim == Some(Piece::Pawn) {
                        moves.push(self.build_move(
                            from,
                            to,
                            Piece::Pawn,
                            victim,
                            None,
                            Special::EnPassant,
                        ));
                    }
                } else {
                    let captured = self.piece_of(them, to);
                    self.push_pawn_move(moves, from, to, captured);
                }
            }
        }
    }

    /// Single and double pushes, including push-promotions.
    pub(super) fn pawn_pushes(&self, moves: &mut MoveList) {
        let us = self.side_to_move;

        for from in self.pieces(us, Piece::Pawn).iter() {
            let Some(one) = Self::pawn_advance(us, from) else {
                continue;
            };
            if !self.is_empty(one) {
                continue;
            }
            self.push_pawn_move(moves, from, one, None);

            if from.rank() == us.pawn_start_rank() {
                if let Some(two) = Self::pawn_advance(us, one) {
                    if self.is_empty(two) {
                        moves.push(self.build_move(
                            from,
                            two,
                            Piece::Pawn,
                            None,
                            None,
                            Special::DoublePush(one),
                        ));
                    }
                }
            }
        }
    }
}
