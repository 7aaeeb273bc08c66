use super::types::{Bitboard, CastlingRights, Color, Piece, Square};

/// A complete chess position.
///
/// Piece placement is six bitboards per color. Equality compares every field,
/// so a position restored by [`Board::unmake_move`] compares equal to the one
/// the move was made from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard initial position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            board.set_piece(Square::from_index_unchecked(file), Color::White, piece);
            board.set_piece(Square::from_index_unchecked(56 + file), Color::Black, piece);
            board.set_piece(Square::from_index_unchecked(8 + file), Color::White, Piece::Pawn);
            board.set_piece(Square::from_index_unchecked(48 + file), Color::Black, Piece::Pawn);
        }
        board.castling = CastlingRights::all();
        board
    }

    /// A board with no pieces, White to move, no rights, fullmove 1.
    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            side_to_move: Color::White,
            en_passant: None,
            castling: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// All squares occupied by `color`.
    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    #[must_use]
    pub fn all_occupancy(&self) -> Bitboard {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                if self.pieces(color, piece).contains(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Piece of `color` on `sq`, if any.
    #[must_use]
    pub(crate) fn piece_of(&self, color: Color, sq: Square) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces(color, piece).contains(sq))
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupancy().contains(sq)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()].set(sq);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()].clear(sq);
    }

    /// True once neither side has a queen; selects the late-game king table.
    #[must_use]
    pub fn is_late_game(&self) -> bool {
        (self.pieces(Color::White, Piece::Queen) | self.pieces(Color::Black, Piece::Queen))
            .is_empty()
    }

    /// No square holds more than one piece.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let bb = self.pieces(color, piece);
                if !(seen & bb).is_empty() {
                    return false;
                }
                seen |= bb;
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
