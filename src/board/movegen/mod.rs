//! Pseudo-legal move generation and the legality filter built on make/unmake.
//!
//! Moves come out grouped by mechanism, always in the same order: rook-line
//! queen and rook moves, diagonal queen and bishop moves, knights, kings, pawn
//! captures, pawn pushes, then castles. Within a group, source squares and
//! then target squares are visited from a1 upwards.

mod castling;
mod leapers;
mod pawns;
mod sliders;

use super::pst::square_value;
use super::types::{CastlingRights, Color, Move, MoveList, Piece, Square};
use super::Board;

/// Extra behaviour carried by a generated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Special {
    None,
    /// Double pawn push; the skipped square becomes the en passant target.
    DoublePush(Square),
    EnPassant,
    Castle,
}

/// Capture ordering score: most valuable victim first, least valuable aggressor
/// breaking ties. A king aggressor counts as worth more than a queen.
fn mvv_lva(aggressor: Piece, victim: Option<Piece>) -> i32 {
    match victim {
        None | Some(Piece::King) => 0,
        Some(victim) => {
            let aggressor_value = match aggressor {
                Piece::King => Piece::Queen.value() + 1,
                other => other.value(),
            };
            (victim.value() << 8) - aggressor_value
        }
    }
}

/// Home squares of `color`'s king, queen-side rook and king-side rook.
pub(super) fn home_squares(color: Color) -> (Square, Square, Square) {
    match color {
        Color::White => (Square::E1, Square::A1, Square::H1),
        Color::Black => (Square::E8, Square::A8, Square::H8),
    }
}

impl Board {
    /// Castling rights taken away, from either side, by moving `from` to `to`.
    fn castling_lost(&self, from: Square, to: Square) -> CastlingRights {
        let us = self.side_to_move;
        let them = us.opponent();
        let mut lost = CastlingRights::none();

        let (_, their_queen_rook, their_king_rook) = home_squares(them);
        if to == their_queen_rook && self.castling.has(them, false) {
            lost.set(them, false);
        } else if to == their_king_rook && self.castling.has(them, true) {
            lost.set(them, true);
        }

        let (our_king, our_queen_rook, our_king_rook) = home_squares(us);
        if (from == our_queen_rook || from == our_king) && self.castling.has(us, false) {
            lost.set(us, false);
        }
        if (from == our_king_rook || from == our_king) && self.castling.has(us, true) {
            lost.set(us, true);
        }
        lost
    }

    /// Assemble a move for the side to move, filling in its undo record and
    /// ordering scores.
    pub(super) fn build_move(
        &self,
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promotion: Option<Piece>,
        special: Special,
    ) -> Move {
        let us = self.side_to_move;
        let next_halfmove = if piece == Piece::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        let next_en_passant = match special {
            Special::DoublePush(skipped) => Some(skipped),
            _ => None,
        };
        let late_game = self.is_late_game();
        let square_gain =
            square_value(piece, us, to, late_game) - square_value(piece, us, from, late_game);
        let mvv_lva = mvv_lva(piece, captured);

        Move {
            from,
            to,
            piece,
            captured,
            promotion,
            castle: special == Special::Castle,
            en_passant: special == Special::EnPassant,
            prev_en_passant: self.en_passant,
            next_en_passant,
            prev_halfmove: self.halfmove_clock,
            next_halfmove,
            lost_castling: self.castling_lost(from, to),
            mvv_lva,
            order_score: mvv_lva + square_gain,
        }
    }

    /// Push `from -> to`, expanded into the four promotions when `to` is on the
    /// mover's last rank.
    pub(super) fn push_pawn_move(
        &self,
        moves: &mut MoveList,
        from: Square,
        to: Square,
        captured: Option<Piece>,
    ) {
        if to.rank() == self.side_to_move.pawn_promotion_rank() {
            for promotion in Piece::PROMOTIONS {
                moves.push(self.build_move(
                    from,
                    to,
                    Piece::Pawn,
                    captured,
                    Some(promotion),
                    Special::None,
                ));
            }
        } else {
            moves.push(self.build_move(from, to, Piece::Pawn, captured, None, Special::None));
        }
    }

    /// Every pseudo-legal move for the side to move.
    ///
    /// Moves may leave the mover's king in check; see [`Board::legal_moves`].
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.slider_moves(&mut moves);
        self.knight_moves(&mut moves);
        self.king_moves(&mut moves);
        self.pawn_captures(&mut moves);
        self.pawn_pushes(&mut moves);
        self.castling_moves(&mut moves);
        moves
    }

    /// Pseudo-legal moves that do not leave the mover in check, in generation order.
    pub fn legal_moves(&mut self) -> MoveList {
        let mut moves = self.pseudo_legal_moves();
        moves.retain(|mv| self.is_legal_after(mv));
        moves
    }

    /// Make `mv`, test the mover's king, unmake.
    fn is_legal_after(&mut self, mv: &Move) -> bool {
        self.make_move(mv);
        let legal = !self.leaves_mover_in_check();
        self.unmake_move(mv);
        legal
    }

    /// Early-exit check for at least one legal move.
    pub fn has_legal_moves(&mut self) -> bool {
        let moves = self.pseudo_legal_moves();
        moves.iter().any(|mv| self.is_legal_after(mv))
    }

    /// Every legal move paired with the position it leads to.
    ///
    /// Allocates a fresh board per move; search uses make/unmake instead.
    #[must_use]
    pub fn legal_successors(&self) -> Vec<(Move, Board)> {
        self.pseudo_legal_moves()
            .into_iter()
            .filter_map(|mv| {
                let mut next = self.clone();
                next.make_move(&mv);
                (!next.leaves_mover_in_check()).then_some((mv, next))
            })
            .collect()
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv);
        }
        nodes
    }
}
