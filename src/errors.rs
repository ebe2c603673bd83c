//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board primitives,
//! position parsing, move generation and the game state machine. Variants
//! carry the offending input where that helps a caller re-prompt or log a
//! precise diagnostic.
//!
//! Usage guidelines:
//! - Input and rule violations (`InvalidCoordinate`, `InvalidPosition`,
//!   `NoPieceAtSquare`, `NotSideToMove`, `IllegalDestination`, ...) are
//!   recoverable. They are always raised before any board mutation.
//! - `NoMovesToUndo` / `NoMovesToRedo` are benign; the plain `undo_move` /
//!   `redo_move` entry points swallow them and return `None`.
//! - `KingNotFound` means the position lost a king (for example an edited
//!   board). Check detection is meaningless without it, so the requested
//!   operation is aborted.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::square::Square;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate string was malformed, or a square index does not map
    /// to one of the 64 playable cells.
    ///
    /// Payload: the offending input rendered as text.
    InvalidCoordinate(String),

    /// A position string broke the placement-field rules.
    ///
    /// Payload: a human-readable reason.
    InvalidPosition(String),

    /// Tried to move from an empty square.
    NoPieceAtSquare(Square),

    /// Tried to move a piece that belongs to the side not on move.
    NotSideToMove(Square),

    /// The destination is not in the currently computed legal-move set.
    IllegalDestination { from: Square, to: Square },

    /// The requested promotion piece cannot be promoted to.
    InvalidPromotionPiece(PieceKind),

    /// The game has not been started or is already over.
    GameNotInProgress,

    /// The done-move stack is empty.
    NoMovesToUndo,

    /// The undone-move stack is empty.
    NoMovesToRedo,

    /// The board holds no king of the given colour.
    KingNotFound(Color),

    /// An engine was asked for a move where none exists.
    NoLegalMoves,

    /// An engine or configuration option name/value was not understood.
    InvalidOption(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidCoordinate(input) => write!(f, "invalid coordinate: {input}"),
            ChessErrors::InvalidPosition(reason) => write!(f, "invalid position: {reason}"),
            ChessErrors::NoPieceAtSquare(square) => write!(f, "no piece on {square}"),
            ChessErrors::NotSideToMove(square) => {
                write!(f, "piece on {square} does not belong to the side to move")
            }
            ChessErrors::IllegalDestination { from, to } => {
                write!(f, "{to} is not a legal destination for the piece on {from}")
            }
            ChessErrors::InvalidPromotionPiece(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            ChessErrors::GameNotInProgress => write!(f, "game is not in progress"),
            ChessErrors::NoMovesToUndo => write!(f, "no moves to undo"),
            ChessErrors::NoMovesToRedo => write!(f, "no moves to redo"),
            ChessErrors::KingNotFound(color) => write!(f, "{color} king not found on the board"),
            ChessErrors::NoLegalMoves => write!(f, "no legal moves for the side to move"),
            ChessErrors::InvalidOption(detail) => write!(f, "invalid option: {detail}"),
        }
    }
}

impl Error for ChessErrors {}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::Color;

    #[test]
    fn display_includes_payload() {
        assert_eq!(
            ChessErrors::InvalidCoordinate("z9".to_owned()).to_string(),
            "invalid coordinate: z9"
        );
        assert_eq!(
            ChessErrors::KingNotFound(Color::Black).to_string(),
            "black king not found on the board"
        );
    }
}
