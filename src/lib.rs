//! Bitboard chess engine: magic attack tables, make/unmake move generation,
//! piece-square evaluation and fixed-depth alpha-beta search.

pub mod board;
pub mod game;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{Game, GameError, Outcome};
