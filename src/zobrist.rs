//! Zobrist hashing for chess positions.
//!
//! A position's hash is the XOR of one key per occupied (color, piece, square),
//! one per held castling right, one for the en passant file when a target is
//! set, and one when Black is to move. Hashes identify positions for
//! repetition checks; nothing here indexes a table.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece][square]
    pub(crate) piece_keys: [[[u64; 64]; 6]; 2],
    pub(crate) black_to_move_key: u64,
    // castling_keys[i] pairs with CastlingRights::EACH[i]
    pub(crate) castling_keys: [u64; 4],
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x6d61_6769_635f_6368);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        let mut castling_keys = [0; 4];
        for key in &mut castling_keys {
            *key = rng.gen();
        }

        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.index()]
    }

    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        CastlingRights::EACH
            .iter()
            .zip(self.castling_keys)
            .filter(|((color, kingside), _)| rights.has(*color, *kingside))
            .fold(0, |acc, (_, key)| acc ^ key)
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

impl Board {
    /// Position fingerprint; equal positions hash equal regardless of move history.
    ///
    /// Clocks do not contribute.
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = 0;

        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece).iter() {
                    hash ^= keys.piece(color, piece, sq);
                }
            }
        }

        hash ^= keys.castling(self.castling);

        if let Some(ep) = self.en_passant {
            hash ^= keys.en_passant_keys[ep.file()];
        }

        if self.side_to_move == Color::Black {
            hash ^= keys.black_to_move_key;
        }

        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_reproducible_and_distinct() {
        let a = ZobristKeys::new();
        let b = ZobristKeys::new();
        assert_eq!(a.piece_keys, b.piece_keys);
        assert_eq!(a.black_to_move_key, b.black_to_move_key);
        assert_ne!(a.piece_keys[0][0][8], a.piece_keys[1][0][8]);
        assert_ne!(a.castling_keys[0], a.castling_keys[1]);
    }

    #[test]
    fn side_to_move_changes_hash() {
        let white = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let black = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(
            white.zobrist_hash() ^ black.zobrist_hash(),
            ZOBRIST.black_to_move_key
        );
    }

    #[test]
    fn clocks_do_not_contribute() {
        let a = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let b = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 17 40");
        assert_eq!(a.zobrist_hash(), b.zobrist_hash());
    }

    #[test]
    fn castling_and_en_passant_contribute() {
        let base = Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w - - 0 1");
        let rights = Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w K - 0 1");
        let ep = Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w - d6 0 1");
        assert_ne!(base.zobrist_hash(), rights.zobrist_hash());
        assert_ne!(base.zobrist_hash(), ep.zobrist_hash());
        assert_eq!(
            base.zobrist_hash() ^ ep.zobrist_hash(),
            ZOBRIST.en_passant_keys[3]
        );
    }

    #[test]
    fn make_unmake_restores_hash() {
        let mut board = Board::new();
        let before = board.zobrist_hash();
        let mv = board.parse_move("e2e4").unwrap();
        board.make_move(&mv);
        assert_ne!(board.zobrist_hash(), before);
        board.unmake_move(&mv);
        assert_eq!(board.zobrist_hash(), before);
    }
}
