//! Crate root module declarations for the elemental chess rules engine.
//!
//! Exposes the board model, movement tables, move generation and legality,
//! the game state machine, automated opponents and text utilities so the
//! demo binary, benches and embedding callers share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod castling;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
    pub mod square;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
    pub mod piece_catalog;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
