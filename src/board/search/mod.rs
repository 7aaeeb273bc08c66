//! Fixed-depth alpha-beta minimax.
//!
//! The side to move at the root maximises and its opponent minimises. Every
//! leaf, and every node without legal moves, is scored with the static
//! evaluation from the root side's point of view. There is no mate score,
//! quiescence or iterative deepening; the tree is always walked to exactly the
//! configured depth.

mod params;

pub use params::{SearchConfig, DEFAULT_SEARCH_DEPTH};

use std::time::Instant;

use log::{debug, trace};

use super::types::{Color, Move, MoveList};
use super::Board;

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, `None` when the root has no legal moves or depth is 0.
    pub best_move: Option<Move>,
    /// Minimax value from the root mover's point of view.
    pub score: i32,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Runs searches with a fixed [`SearchConfig`].
#[derive(Clone, Debug)]
pub struct Searcher {
    config: SearchConfig,
    root_color: Color,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher::new(SearchConfig::default())
    }
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Searcher {
            config,
            root_color: Color::White,
            nodes: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Search `board` for its side to move. The board is restored before returning.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        let start = Instant::now();
        self.root_color = board.side_to_move();
        self.nodes = 0;

        let (best_move, score) =
            self.alpha_beta(board, self.config.depth, i32::MIN, i32::MAX, true);

        debug!(
            "depth {} search for {}: score {} in {} nodes, {:?}",
            self.config.depth,
            self.root_color,
            score,
            self.nodes,
            start.elapsed()
        );

        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn candidates(&self, board: &mut Board) -> MoveList {
        let mut moves = board.legal_moves();
        if self.config.order_moves {
            moves.sort_by_order_score();
        }
        moves
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        root: bool,
    ) -> (Option<Move>, i32) {
        self.nodes += 1;

        if depth == 0 {
            return (None, board.evaluate(self.root_color));
        }

        let moves = self.candidates(board);
        if moves.is_empty() {
            return (None, board.evaluate(self.root_color));
        }

        let maximise = board.side_to_move() == self.root_color;
        let mut value = if maximise { i32::MIN } else { i32::MAX };
        let mut best = None;

        for mv in &moves {
            board.make_move(mv);
            let (_, score) = self.alpha_beta(board, depth - 1, alpha, beta, false);
            board.unmake_move(mv);

            if root {
                trace!("root move {mv}: {score}");
            }

            if maximise {
                if score > value {
                    value = score;
                    best = Some(*mv);
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best = Some(*mv);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                break;
            }
        }

        (best, value)
    }
}

/// Search `board` to `depth` plies in generation order.
pub fn search(board: &mut Board, depth: u32) -> SearchResult {
    Searcher::new(SearchConfig::default().with_depth(depth)).search(board)
}
