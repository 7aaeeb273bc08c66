//! Property-based tests using proptest.

use crate::board::{Board, Move, START_FEN};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Starting points with castling rights, en passant and promotions in reach.
fn start_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        START_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ])
}

/// Play up to `num_moves` random legal moves, returning them in order.
fn random_walk(board: &mut Board, seed: u64, num_moves: usize) -> Vec<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        board.make_move(&mv);
        played.push(mv);
    }
    played
}

proptest! {
    /// Property: unmaking every move in reverse order restores the board exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let initial = board.clone();
        let initial_hash = board.zobrist_hash();

        let mut played = random_walk(&mut board, seed, num_moves);
        while let Some(mv) = played.pop() {
            board.unmake_move(&mv);
        }

        prop_assert_eq!(board.zobrist_hash(), initial_hash);
        prop_assert_eq!(board, initial);
    }

    /// Property: FEN output parses back to the same position
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        let fen = board.to_fen();
        let parsed = Board::try_from_fen(&fen).unwrap();
        prop_assert_eq!(parsed.to_fen(), fen);
        prop_assert_eq!(parsed.zobrist_hash(), board.zobrist_hash());
    }

    /// Property: legal moves never leave the mover in check, and every
    /// position reached keeps pieces on distinct squares
    #[test]
    fn prop_legal_moves_are_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);
        prop_assert!(board.is_consistent());

        for mv in &board.legal_moves() {
            board.make_move(mv);
            prop_assert!(!board.leaves_mover_in_check());
            board.unmake_move(mv);
        }
    }

    /// Property: make/unmake on one board agrees with the copying successor list
    #[test]
    fn prop_successors_agree_with_make(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_walk(&mut board, seed, num_moves);

        for (mv, next) in board.legal_successors() {
            let mut made = board.clone();
            made.make_move(&mv);
            prop_assert_eq!(made.zobrist_hash(), next.zobrist_hash());
            prop_assert_eq!(made, next);
        }
    }

    /// Property: every pseudo-legal move, including ones that leave the king
    /// attacked, unmakes back to the exact position it was made from
    #[test]
    fn prop_pseudo_legal_make_unmake_restores_state(
        start in start_strategy(),
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        let mut board = Board::from_fen(start);
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let snapshot = board.clone();
            let snapshot_hash = board.zobrist_hash();
            for mv in &board.pseudo_legal_moves() {
                board.make_move(mv);
                prop_assert!(board.is_consistent());
                board.unmake_move(mv);
                prop_assert_eq!(board.zobrist_hash(), snapshot_hash);
                prop_assert_eq!(&board, &snapshot);
            }

            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            board.make_move(&mv);
        }
    }
}
