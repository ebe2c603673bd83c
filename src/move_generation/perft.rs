//! Perft node counting over execute/undo.
//!
//! Walks the legal move tree of a live `Game`, expanding every promotion
//! choice the piece set allows, and tallies leaf statistics. The single
//! threaded walk mutates one game in place; the multi-threaded variant
//! gives each root move its own clone.

use std::thread;

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{MoveType, PieceKind};
use crate::game_state::game_state::{Game, GameStatus, MoveResult, Outcome};
use crate::game_state::square::Square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, result: &MoveResult) {
        self.nodes += 1;
        if result.record.is_capture() {
            self.captures += 1;
        }
        match result.record.move_type {
            MoveType::EnPassant => self.en_passant += 1,
            MoveType::Castle => self.castles += 1,
            MoveType::Promotion => self.promotions += 1,
            MoveType::Normal => {}
        }
        if result.gives_check {
            self.checks += 1;
        }
        if matches!(
            result.status,
            GameStatus::GameOver {
                outcome: Outcome::Checkmate { .. }
            }
        ) {
            self.checkmates += 1;
        }
    }
}

/// Counts leaf nodes `depth` plies below the current position. The game
/// is returned to its starting state.
pub fn perft(game: &mut Game, depth: u8) -> Result<PerftCounts, ChessErrors> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(game, depth, &mut counts)?;
    Ok(counts)
}

/// Same counts as [`perft`], one worker thread per root move.
pub fn perft_multi_threaded(game: &Game, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth <= 1 {
        return perft(&mut game.clone(), depth);
    }

    let root_moves = expand_moves(game)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for (from, to, promotion) in root_moves {
        let mut local_game = game.clone();
        handles.push(thread::spawn(move || -> Result<PerftCounts, ChessErrors> {
            local_game.execute_move_with_promotion(from, to, promotion)?;
            perft(&mut local_game, depth - 1)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessErrors::InvalidPosition("perft worker thread panicked".to_owned()))??;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse(game: &mut Game, depth: u8, counts: &mut PerftCounts) -> Result<(), ChessErrors> {
    if game.is_game_over() {
        return Ok(());
    }

    for (from, to, promotion) in expand_moves(game)? {
        let result = game.execute_move_with_promotion(from, to, promotion)?;
        if depth == 1 {
            counts.record_leaf(&result);
        } else {
            perft_recurse(game, depth - 1, counts)?;
        }
        game.try_undo_move()?;
    }
    Ok(())
}

/// Legal moves of the side to move, one entry per promotion choice.
fn expand_moves(game: &Game) -> Result<Vec<(Square, Square, Option<PieceKind>)>, ChessErrors> {
    let choices = game.promotion_choices();
    let mut out = Vec::new();

    for (from, to) in game.all_legal_moves(game.side_to_move())? {
        let promotes = game.board().piece_at(from).is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && to.rank() == Some(piece.color.promotion_rank())
        });
        if promotes {
            out.extend(choices.iter().map(|&kind| (from, to, Some(kind))));
        } else {
            out.push((from, to, None));
        }
    }
    Ok(out)
}
