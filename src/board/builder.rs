//! Fluent builder for constructing chess positions piece by piece.
//!
//! # Example
//! ```
//! use magic_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece(Square::A8, Color::Black, Piece::Rook)
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(board.to_fen(), "r3k3/8/8/8/8/8/8/4K3 b - - 0 1");
//! ```

use super::fen::MAX_FULLMOVE;
use super::types::{CastlingRights, Color, Piece, Square};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Start from an existing position.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        BoardBuilder { board }
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        let mut builder = self.clear(square);
        builder.board.set_piece(square, color, piece);
        builder
    }

    /// Remove any piece from `square`.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        if let Some((color, piece)) = self.board.piece_at(square) {
            self.board.remove_piece(square, color, piece);
        }
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.board.side_to_move = color;
        self
    }

    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.board.castling = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, kingside: bool) -> Self {
        self.board.castling.set(color, kingside);
        self
    }

    #[must_use]
    pub fn en_passant(mut self, target: Option<Square>) -> Self {
        self.board.en_passant = target;
        self
    }

    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.board.halfmove_clock = clock;
        self
    }

    /// Clamped to [`MAX_FULLMOVE`].
    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.board.fullmove_number = number.min(MAX_FULLMOVE);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
