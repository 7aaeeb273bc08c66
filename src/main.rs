use std::process;

use magic_chess::board::{self, Board, Color, SearchConfig, DEFAULT_SEARCH_DEPTH};
use magic_chess::game::{AlphaBetaPlayer, Game, RandomPlayer};

const MAX_PLIES: usize = 200;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let depth = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("invalid depth: {arg}");
            process::exit(2);
        }),
        None => DEFAULT_SEARCH_DEPTH,
    };

    let position = args.collect::<Vec<_>>().join(" ");
    let start = if position.is_empty() {
        Board::new()
    } else {
        Board::try_from_fen(&position).unwrap_or_else(|err| {
            eprintln!("invalid FEN: {err}");
            process::exit(2);
        })
    };

    board::init();

    let game = Game::from_board(
        start,
        AlphaBetaPlayer::with_config(Color::White, SearchConfig::default().with_depth(depth)),
        RandomPlayer::new(Color::Black),
    );

    for ply in 0..MAX_PLIES {
        if game.is_over() {
            break;
        }
        let turn = game.turn();
        match game.next_move() {
            Ok(Some(mv)) => println!("{:>3}. {turn}: {mv}", ply + 1),
            Ok(None) => {
                eprintln!("{turn} did not produce a legal move");
                break;
            }
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }

    println!("{}", game.board());
    println!("{}", game.board().to_fen());
    match game.outcome() {
        Some(outcome) => println!("{outcome}"),
        None => println!("unfinished after {} plies", game.history().len()),
    }
}
