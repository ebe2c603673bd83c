//! Engine abstraction for automated opponents.
//!
//! An engine reads a `Game` and proposes a move; the caller commits it
//! with `Game::execute_move_with_promotion`. Engines never mutate the game,
//! so the caller keeps single-writer control.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::Game;
use crate::game_state::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), ChessErrors> {
        Err(ChessErrors::InvalidOption(format!("unknown option '{name}'")))
    }

    /// A move for the side to move, or `None` when it has no legal move
    /// or the game is not in progress.
    fn choose_move(&mut self, game: &Game) -> Result<Option<EngineMove>, ChessErrors>;

    /// Like `choose_move`, but a missing move is `NoLegalMoves`.
    fn require_move(&mut self, game: &Game) -> Result<EngineMove, ChessErrors> {
        self.choose_move(game)?.ok_or(ChessErrors::NoLegalMoves)
    }
}
