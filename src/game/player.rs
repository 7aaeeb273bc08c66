//! Move-choosing strategies.

use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Color, Move, SearchConfig, Searcher};

/// Something that picks a move for one side.
pub trait Player {
    /// The side this player moves for.
    fn color(&self) -> Color;

    /// Choose a move in `board`, where it is this player's turn. `None` means
    /// the player has nothing to offer.
    fn play(&mut self, board: &Board) -> Option<Move>;
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    color: Color,
    rng: StdRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(color: Color) -> Self {
        RandomPlayer {
            color,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible choices from a fixed seed.
    #[must_use]
    pub fn with_seed(color: Color, seed: u64) -> Self {
        RandomPlayer {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn play(&mut self, board: &Board) -> Option<Move> {
        let successors = board.legal_successors();
        if successors.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..successors.len());
        Some(successors[index].0)
    }
}

/// Plays the best move found by a fixed-depth alpha-beta search.
#[derive(Clone, Debug)]
pub struct AlphaBetaPlayer {
    color: Color,
    searcher: Searcher,
}

impl AlphaBetaPlayer {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self::with_config(color, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(color: Color, config: SearchConfig) -> Self {
        AlphaBetaPlayer {
            color,
            searcher: Searcher::new(config),
        }
    }
}

impl Player for AlphaBetaPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn play(&mut self, board: &Board) -> Option<Move> {
        let start = Instant::now();
        let mut board = board.clone();
        let result = self.searcher.search(&mut board);
        info!(
            "{} calculated move in {:?} ({} nodes)",
            self.color,
            start.elapsed(),
            result.nodes
        );
        result.best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_player_picks_legal_moves() {
        let mut board = Board::new();
        let legal = board.legal_moves();
        let mut player = RandomPlayer::with_seed(Color::White, 7);
        for _ in 0..20 {
            let mv = player.play(&board).unwrap();
            assert!(legal.iter().any(|m| m.same_squares(&mv)));
        }
    }

    #[test]
    fn seeded_random_players_agree() {
        let board = Board::new();
        let mut a = RandomPlayer::with_seed(Color::White, 42);
        let mut b = RandomPlayer::with_seed(Color::White, 42);
        for _ in 0..5 {
            assert_eq!(a.play(&board), b.play(&board));
        }
    }

    #[test]
    fn players_pass_when_no_moves() {
        let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(RandomPlayer::new(Color::Black).play(&mated), None);
        let config = SearchConfig::default().with_depth(2);
        assert_eq!(
            AlphaBetaPlayer::with_config(Color::Black, config).play(&mated),
            None
        );
    }

    #[test]
    fn alpha_beta_player_takes_hanging_queen() {
        let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let config = SearchConfig::default().with_depth(2);
        let mut player = AlphaBetaPlayer::with_config(Color::White, config);
        assert_eq!(player.play(&board).unwrap().to_string(), "d1d5");
        assert_eq!(player.color(), Color::White);
    }
}
