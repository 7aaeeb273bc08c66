//! Chess board representation and game logic.
//!
//! Uses bitboards and magic attack tables for move generation, records undo
//! data on every move for in-place make/unmake, and searches with fixed-depth
//! alpha-beta over a material plus piece-square evaluation.
//!
//! # Example
//! ```
//! use magic_chess::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod builder;
mod check;
mod display;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{init, Slider};
pub use builder::BoardBuilder;
pub use check::is_attacked;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::{MAX_FULLMOVE, START_FEN};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
};

pub use search::{search, SearchConfig, SearchResult, Searcher, DEFAULT_SEARCH_DEPTH};
