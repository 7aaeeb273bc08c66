//! Move generation edge cases.

use crate::board::{Board, Color, Move, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn notations(moves: impl IntoIterator<Item = Move>) -> Vec<String> {
    moves.into_iter().map(|mv| mv.to_string()).collect()
}

fn has_move(board: &mut Board, notation: &str) -> bool {
    notations(board.legal_moves()).iter().any(|m| m == notation)
}

#[test]
fn test_initial_position_move_order() {
    let mut board = Board::new();
    let moves = notations(board.legal_moves());
    assert_eq!(moves.len(), 20);
    assert_eq!(&moves[..6], ["b1a3", "b1c3", "g1f3", "g1h3", "a2a3", "a2a4"]);
    assert_eq!(moves.last().map(String::as_str), Some("h2h4"));
}

#[test]
fn test_sliders_come_rook_lines_first() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
    let moves = board.legal_moves();
    let first_diagonal = moves.iter().position(|mv| mv.to() == sq("b2")).unwrap();
    assert!(moves
        .iter()
        .take(first_diagonal)
        .all(|mv| mv.piece() == Piece::Queen && (mv.to().rank() == 0 || mv.to().file() == 0)));
}

#[test]
fn test_promotion_generates_four_moves_for_push_and_capture() {
    let mut board = Board::from_fen("1n6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let pawn_moves: Vec<Move> = board
        .legal_moves()
        .into_iter()
        .filter(|mv| mv.piece() == Piece::Pawn)
        .collect();
    assert_eq!(pawn_moves.len(), 8);
    assert!(pawn_moves.iter().all(|mv| mv.promotion().is_some()));

    let captures: Vec<Piece> = pawn_moves
        .iter()
        .filter(|mv| mv.to() == sq("b8"))
        .filter_map(|mv| mv.promotion())
        .collect();
    assert_eq!(captures, Piece::PROMOTIONS);
    let pushes = pawn_moves.iter().filter(|mv| mv.to() == sq("a8")).count();
    assert_eq!(pushes, 4);
}

#[test]
fn test_castling_refused_through_attacked_square() {
    let mut board = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(board.is_square_attacked(sq("f1"), Color::Black));
    assert!(!has_move(&mut board, "e1g1"));
    assert!(has_move(&mut board, "e1c1"));
}

#[test]
fn test_queenside_castling_ignores_attack_on_b_file() {
    let mut board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(has_move(&mut board, "e1c1"));
    let mut blocked = Board::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
    assert!(!has_move(&mut blocked, "e1c1"));
}

#[test]
fn test_no_castling_out_of_check_or_without_rook() {
    let mut in_check = Board::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!has_move(&mut in_check, "e1g1"));
    assert!(!has_move(&mut in_check, "e1c1"));

    let mut no_rook = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1");
    assert!(has_move(&mut no_rook, "e1g1"));
    assert!(!has_move(&mut no_rook, "e1c1"));
}

#[test]
fn test_en_passant_needs_enemy_pawn_behind_target() {
    let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let mv = board.parse_move("e5d6").unwrap();
    assert!(mv.is_en_passant());

    let mut empty_behind = Board::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1");
    assert!(!has_move(&mut empty_behind, "e5d6"));
}

#[test]
fn test_pinned_piece_only_moves_along_pin() {
    let mut board = Board::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    let pseudo = board.pseudo_legal_moves();
    assert!(pseudo.iter().any(|mv| mv.piece() == Piece::Bishop));
    let legal = board.legal_moves();
    assert!(legal.iter().all(|mv| mv.piece() == Piece::King));

    let mut rook_pin = Board::from_fen("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1");
    let rook_moves: Vec<String> = notations(
        rook_pin
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.piece() == Piece::Rook),
    );
    assert_eq!(rook_moves, ["e2e3", "e2e4", "e2e5", "e2e6", "e2e7"]);
}

#[test]
fn test_back_rank_mate_has_no_legal_moves() {
    let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(board.is_in_check());
    assert!(board.legal_moves().is_empty());
    assert!(!board.has_legal_moves());
    assert!(board.legal_successors().is_empty());
}

#[test]
fn test_stalemate_is_not_check() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_in_check());
    assert!(!board.has_legal_moves());
}

#[test]
fn test_legal_successors_match_make_move() {
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let legal = board.legal_moves();
    let successors = board.legal_successors();
    assert_eq!(successors.len(), legal.len());
    for ((mv, next), expected) in successors.iter().zip(legal.iter()) {
        assert_eq!(mv, expected);
        let mut made = board.clone();
        made.make_move(mv);
        assert_eq!(&made, next);
    }
}

#[test]
fn test_order_scores_favor_valuable_captures() {
    let mut board = Board::from_fen("4k3/8/8/3q4/4P3/8/8/3RK3 w - - 0 1");
    let mut moves = board.legal_moves();
    moves.sort_by_order_score();
    let best = moves.get(0).unwrap();
    assert_eq!(best.to_string(), "e4d5");
    assert_eq!(best.mvv_lva(), (900 << 8) - 100);
}

#[test]
fn test_order_score_is_own_perspective_for_both_colors() {
    let mut white = Board::new();
    let mut black =
        Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");

    let developing = white.parse_move("g1f3").unwrap();
    let mirrored = black.parse_move("g8f6").unwrap();
    assert!(developing.order_score() > 0);
    assert_eq!(developing.order_score(), mirrored.order_score());

    let retreat = Board::from_fen("4k3/8/8/8/8/5N2/8/4K3 w - - 0 1")
        .parse_move("f3g1")
        .unwrap();
    assert_eq!(retreat.order_score(), -developing.order_score());
}
