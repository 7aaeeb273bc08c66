//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use magic_chess::board::prelude::*;
//!
//! let mut board = Board::new();
//! let result = search(&mut board, 2);
//! assert!(result.best_move.is_some());
//! ```

pub use super::{
    search, Board, BoardBuilder, CastlingRights, Color, FenError, Move, MoveList, MoveParseError,
    Piece, SearchConfig, SearchResult, Searcher, Square, SquareError,
};
