//! Turn-based game between two players.
//!
//! A [`Game`] owns the current position and move history behind a
//! `parking_lot::Mutex`, so moves can be driven from one thread while others
//! inspect the board. The state lock is only held to snapshot or commit; a
//! separate turn lock keeps concurrent [`Game::next_move`] calls in order.

mod player;

pub use player::{AlphaBetaPlayer, Player, RandomPlayer};

use std::fmt;

use log::info;
use parking_lot::Mutex;

use crate::board::{Board, Color, Move};

/// Errors from driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game has ended; no more moves can be played.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "game is over, no more moves"),
        }
    }
}

impl std::error::Error for GameError {}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
        }
    }
}

struct GameState {
    board: Board,
    history: Vec<Move>,
    // Hash of every position reached, the initial one first.
    hashes: Vec<u64>,
    legal: Vec<(Move, Board)>,
    over: bool,
}

impl GameState {
    fn new(board: Board) -> Self {
        let legal = board.legal_successors();
        GameState {
            hashes: vec![board.zobrist_hash()],
            over: legal.is_empty(),
            board,
            history: Vec::new(),
            legal,
        }
    }
}

type BoxedPlayer = Box<dyn Player + Send>;

/// A game between a White and a Black [`Player`].
pub struct Game {
    white: Mutex<BoxedPlayer>,
    black: Mutex<BoxedPlayer>,
    // Held for a whole `next_move`; only its holder writes `state`.
    turn_lock: Mutex<()>,
    state: Mutex<GameState>,
}

impl Game {
    /// A game from the standard initial position.
    pub fn new<W, B>(white: W, black: B) -> Self
    where
        W: Player + Send + 'static,
        B: Player + Send + 'static,
    {
        Self::from_board(Board::new(), white, black)
    }

    /// A game starting from `board`.
    pub fn from_board<W, B>(board: Board, white: W, black: B) -> Self
    where
        W: Player + Send + 'static,
        B: Player + Send + 'static,
    {
        debug_assert_eq!(white.color(), Color::White);
        debug_assert_eq!(black.color(), Color::Black);
        Game {
            white: Mutex::new(Box::new(white)),
            black: Mutex::new(Box::new(black)),
            turn_lock: Mutex::new(()),
            state: Mutex::new(GameState::new(board)),
        }
    }

    /// Ask the player to move and play its move if it is legal.
    ///
    /// Returns `Ok(None)`, leaving the game unchanged, when the player passes
    /// or proposes a move that is not legal here.
    pub fn next_move(&self) -> Result<Option<Move>, GameError> {
        let _turn = self.turn_lock.lock();

        let board = {
            let state = self.state.lock();
            if state.over {
                return Err(GameError::GameOver);
            }
            state.board.clone()
        };

        // The player thinks without the state lock so readers are not blocked.
        let turn = board.side_to_move();
        let proposal = match turn {
            Color::White => self.white.lock().play(&board),
            Color::Black => self.black.lock().play(&board),
        };

        let Some(proposal) = proposal else {
            info!("{turn} offered no move");
            return Ok(None);
        };

        let mut state = self.state.lock();
        let Some(index) = state
            .legal
            .iter()
            .position(|(mv, _)| mv.same_squares(&proposal))
        else {
            info!("{turn} tried to play invalid move {proposal}");
            return Ok(None);
        };

        let (played, next) = state.legal.swap_remove(index);
        info!("{turn} played {played}");

        state.hashes.push(next.zobrist_hash());
        state.history.push(played);
        state.legal = next.legal_successors();
        state.board = next;

        if state.legal.is_empty() {
            state.over = true;
            if let Some(outcome) = outcome_of(&state) {
                info!("game over, {outcome}");
            }
        }

        Ok(Some(played))
    }

    /// Snapshot of the current position.
    pub fn board(&self) -> Board {
        self.state.lock().board.clone()
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> Vec<Move> {
        self.state.lock().history.clone()
    }

    pub fn is_over(&self) -> bool {
        self.state.lock().over
    }

    pub fn turn(&self) -> Color {
        self.state.lock().board.side_to_move()
    }

    /// `None` while the game is running.
    pub fn outcome(&self) -> Option<Outcome> {
        outcome_of(&self.state.lock())
    }

    /// How many earlier positions in this game equal the current one.
    pub fn repetition_count(&self) -> usize {
        let state = self.state.lock();
        match state.hashes.split_last() {
            Some((current, earlier)) => earlier.iter().filter(|&h| h == current).count(),
            None => 0,
        }
    }
}

fn outcome_of(state: &GameState) -> Option<Outcome> {
    if !state.over {
        return None;
    }
    let loser = state.board.side_to_move();
    Some(if state.board.in_check(loser) {
        Outcome::Checkmate {
            winner: loser.opponent(),
        }
    } else {
        Outcome::Stalemate
    })
}
