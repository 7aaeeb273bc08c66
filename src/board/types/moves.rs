//! Move record and move list.

use std::fmt;
use std::ops::Index;

use super::castling::CastlingRights;
use super::piece::Piece;
use super::square::Square;

/// A single ply, together with everything needed to undo it.
///
/// Moves are produced by the move generator for one specific position. Besides
/// source, target and the pieces involved, each move records the en passant
/// target and halfmove clock before and after it is played, plus the castling
/// rights it takes away from either side. [`Board::unmake_move`] restores the
/// position from these fields alone.
///
/// [`Board::unmake_move`]: crate::board::Board::unmake_move
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) piece: Piece,
    pub(crate) captured: Option<Piece>,
    pub(crate) promotion: Option<Piece>,
    pub(crate) castle: bool,
    pub(crate) en_passant: bool,
    pub(crate) prev_en_passant: Option<Square>,
    pub(crate) next_en_passant: Option<Square>,
    pub(crate) prev_halfmove: u32,
    pub(crate) next_halfmove: u32,
    pub(crate) lost_castling: CastlingRights,
    pub(crate) mvv_lva: i32,
    pub(crate) order_score: i32,
}

impl Move {
    /// Placeholder used to fill unused move list slots.
    pub(crate) const NULL: Move = Move {
        from: Square::A1,
        to: Square::A1,
        piece: Piece::Pawn,
        captured: None,
        promotion: None,
        castle: false,
        en_passant: false,
        prev_en_passant: None,
        next_en_passant: None,
        prev_halfmove: 0,
        next_halfmove: 0,
        lost_castling: CastlingRights::none(),
        mvv_lva: 0,
        order_score: 0,
    };

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The piece being moved (a pawn for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// The piece removed from the board, if any. For en passant this is the pawn
    /// behind the target square.
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.castle
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    /// En passant target in effect before this move
    #[inline]
    #[must_use]
    pub const fn prev_en_passant(&self) -> Option<Square> {
        self.prev_en_passant
    }

    /// En passant target created by this move (double pawn pushes only)
    #[inline]
    #[must_use]
    pub const fn next_en_passant(&self) -> Option<Square> {
        self.next_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn prev_halfmove(&self) -> u32 {
        self.prev_halfmove
    }

    #[inline]
    #[must_use]
    pub const fn next_halfmove(&self) -> u32 {
        self.next_halfmove
    }

    /// Castling rights, of either side, that this move removes
    #[inline]
    #[must_use]
    pub const fn lost_castling(&self) -> CastlingRights {
        self.lost_castling
    }

    /// Victim/aggressor capture score; zero for quiet moves
    #[inline]
    #[must_use]
    pub const fn mvv_lva(&self) -> i32 {
        self.mvv_lva
    }

    /// Capture score plus the mover's piece-square gain.
    ///
    /// The gain is `value(to) - value(from)` read from the mover's own side
    /// for both colors; White's delta is not negated.
    #[inline]
    #[must_use]
    pub const fn order_score(&self) -> i32 {
        self.order_score
    }

    /// Same source, target and promotion piece.
    #[inline]
    #[must_use]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {}{}", self.piece, self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{captured:?}")?;
        }
        if self.castle {
            write!(f, " castle")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [Move::NULL; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    /// Stable sort, highest ordering score first.
    pub fn sort_by_order_score(&mut self) {
        self.moves[..self.len].sort_by(|a, b| b.order_score.cmp(&a.order_score));
    }

    /// Keep only the moves matching `keep`, preserving order.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            if keep(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}
