//! Make/unmake move tests.

use crate::board::{Board, CastlingRights, Color, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Play `notation` on a copy of `fen`, check the resulting FEN, then check
/// that unmaking restores the starting position exactly.
fn assert_round_trip(fen: &str, notation: &str, expected: &str) {
    let mut board = Board::from_fen(fen);
    let original = board.clone();
    let mv = board.parse_move(notation).unwrap();
    board.make_move(&mv);
    assert_eq!(board.to_fen(), expected, "after {notation}");
    assert!(board.is_consistent());
    board.unmake_move(&mv);
    assert_eq!(board, original, "unmaking {notation}");
}

#[test]
fn test_double_push_sets_en_passant_target() {
    assert_round_trip(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "e2e4",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    );
}

#[test]
fn test_en_passant_make_unmake() {
    let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
    let mut board = Board::from_fen(fen);
    let mv = board.parse_move("e5f6").unwrap();
    assert!(mv.is_en_passant());
    assert_eq!(mv.captured(), Some(Piece::Pawn));

    assert_round_trip(
        fen,
        "e5f6",
        "rnbqkbnr/ppp1p1pp/5P2/3p4/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3",
    );
}

#[test]
fn test_promotion_make_unmake() {
    assert_round_trip(
        "8/P7/8/8/8/8/8/K1k5 w - - 0 1",
        "a7a8q",
        "Q7/8/8/8/8/8/8/K1k5 b - - 0 1",
    );
    assert_round_trip(
        "1n6/P7/8/8/8/8/8/K1k5 w - - 5 1",
        "a7b8n",
        "1N6/8/8/8/8/8/8/K1k5 b - - 0 1",
    );
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    assert_round_trip(fen, "e1g1", "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
    assert_round_trip(fen, "e1c1", "r3k2r/8/8/8/8/8/8/2KR3R b kq - 1 1");

    let fen = "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 9";
    assert_round_trip(fen, "e8c8", "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 4 10");
    assert_round_trip(fen, "e8g8", "r4rk1/8/8/8/8/8/8/R3K2R w KQ - 4 10");
}

#[test]
fn test_rook_moves_and_captures_remove_rights() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    assert_round_trip(fen, "h1h2", "r3k2r/8/8/8/8/8/7R/R3K3 b Qkq - 1 1");
    assert_round_trip(fen, "a1a8", "R3k2r/8/8/8/8/8/8/4K2R b Kk - 0 1");

    let mut board = Board::from_fen(fen);
    let mv = board.parse_move("a1a8").unwrap();
    let mut lost = CastlingRights::none();
    lost.set(Color::White, false);
    lost.set(Color::Black, false);
    assert_eq!(mv.lost_castling(), lost);
}

#[test]
fn test_king_move_removes_both_rights() {
    assert_round_trip(
        "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        "e1f1",
        "r3k2r/8/8/8/8/8/8/R4K1R b kq - 1 1",
    );
}

#[test]
fn test_clocks_advance() {
    let mut board = Board::new();
    board.make_move_str("g1f3").unwrap();
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 1);
    board.make_move_str("g8f6").unwrap();
    assert_eq!(board.halfmove_clock(), 2);
    assert_eq!(board.fullmove_number(), 2);
    board.make_move_str("e2e4").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_move_records_undo_data() {
    let mut board = Board::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 7 20");
    let mv = board.parse_move("d4e3").unwrap();
    assert_eq!(mv.prev_en_passant(), Some(sq("e3")));
    assert_eq!(mv.next_en_passant(), None);
    assert_eq!(mv.prev_halfmove(), 7);
    assert_eq!(mv.next_halfmove(), 0);
    assert!(mv.lost_castling().is_empty());
}

#[test]
fn test_unmake_sequence_restores_start() {
    let mut board = Board::new();
    let original = board.clone();
    let mut played = Vec::new();
    for notation in [
        "e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a5", "g1f3", "g8f6", "f1c4", "c7c6", "e1g1",
    ] {
        played.push(board.make_move_str(notation).unwrap());
    }
    assert_eq!(
        board.to_fen(),
        "rnb1kb1r/pp2pppp/2p2n2/q7/2B5/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 1 6"
    );
    while let Some(mv) = played.pop() {
        board.unmake_move(&mv);
    }
    assert_eq!(board, original);
}
