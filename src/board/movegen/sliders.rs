use super::super::attack_tables::Slider;
use super::super::types::{MoveList, Piece};
use super::super::Board;
use super::Special;

impl Board {
    /// Queen and rook moves along ranks and files, then queen and bishop moves
    /// along diagonals.
    pub(super) fn slider_moves(&self, moves: &mut MoveList) {
        for (slider, pieces) in [
            (Slider::Rook, [Piece::Queen, Piece::Rook]),
            (Slider::Bishop, [Piece::Queen, Piece::Bishop]),
        ] {
            for piece in pieces {
                self.slider_family_moves(moves, slider, piece);
            }
        }
    }

    fn slider_family_moves(&self, moves: &mut MoveList, slider: Slider, piece: Piece) {
        let us = self.side_to_move;
        let them = us.opponent();
        let own = self.occupancy(us);
        let occupancy = self.all_occupancy();

        for from in self.pieces(us, piece).iter() {
            let targets = slider.attacks(occupancy, from) & !own;
            for to in targets.iter() {
                let captured = self.piece_of(them, to);
                moves.push(self.build_move(from, to, piece, captured, None, Special::None));
            }
        }
    }
}
