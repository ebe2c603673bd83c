//! Seeded random-vs-random demo game.
//!
//! Run with:
//! `cargo run --release -- [seed] [max_plies] [standard|elemental]`
//! Set `RUST_LOG=debug` to see every committed move.

use std::error::Error;

use elemental_chess::engines::engine_random::RandomEngine;
use elemental_chess::engines::engine_trait::Engine;
use elemental_chess::errors::ChessErrors;
use elemental_chess::game_state::chess_types::Color;
use elemental_chess::game_state::game_config::{GameConfig, PieceSet};
use elemental_chess::game_state::game_state::{Game, GameStatus};
use elemental_chess::utils::fen_generator::to_position_string;
use elemental_chess::utils::render_game_state::render_board;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw.parse::<u64>()?,
        None => 1234,
    };
    let max_plies = match args.next() {
        Some(raw) => raw.parse::<usize>()?,
        None => 200,
    };
    let piece_set = match args.next().as_deref() {
        None | Some("standard") => PieceSet::Standard,
        Some("elemental") => PieceSet::Elemental,
        Some(other) => {
            return Err(ChessErrors::InvalidOption(format!("unknown piece set '{other}'")).into());
        }
    };

    let mut game = Game::new_game(GameConfig::default().with_piece_set(piece_set))?;
    let mut white = RandomEngine::with_seed(seed);
    let mut black = RandomEngine::with_seed(seed.wrapping_add(1));

    info!(white = white.name(), black = black.name(), seed, max_plies, "demo game");

    for _ in 0..max_plies {
        if game.is_game_over() {
            break;
        }
        let engine: &mut dyn Engine = match game.side_to_move() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let mv = engine.require_move(&game)?;
        game.execute_move_with_promotion(mv.from, mv.to, mv.promotion)?;
    }

    println!("{}", render_board(game.board()));
    println!("{}", to_position_string(game.board()));
    println!();
    println!("{}", game.transcript());
    match game.status() {
        GameStatus::GameOver { outcome } => println!("result: {outcome:?}"),
        _ => println!("result: unfinished after {} plies", game.move_history().len()),
    }
    Ok(())
}
