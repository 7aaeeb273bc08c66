//! Human-readable board dump for debugging.

use std::fmt;

use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let sq = super::Square::from_index_unchecked(rank * 8 + file);
                let ch = self
                    .piece_at(sq)
                    .map_or(' ', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        writeln!(
            f,
            "{} to move, castling {}, en passant {}",
            self.side_to_move,
            self.castling,
            self.en_passant.map_or_else(|| "-".to_string(), |sq| sq.to_string())
        )?;
        write!(
            f,
            "halfmove clock {}, fullmove {}",
            self.halfmove_clock, self.fullmove_number
        )
    }
}
