#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plies searched when no depth is given.
pub const DEFAULT_SEARCH_DEPTH: u32 = 5;

/// Tunables for [`Searcher`](super::Searcher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies to search below the root.
    pub depth: u32,
    /// Visit candidates by descending [`Move::order_score`](crate::board::Move::order_score)
    /// instead of generation order.
    pub order_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_SEARCH_DEPTH,
            order_moves: false,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_move_ordering(mut self, order_moves: bool) -> Self {
        self.order_moves = order_moves;
        self
    }
}
