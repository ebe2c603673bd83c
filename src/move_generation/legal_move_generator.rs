//! Full legal move generation pipeline.
//!
//! Pseudo-legal destinations are filtered through the king-safety probe.
//! Castling destinations arrive already vetted for rights, emptiness and
//! attacked path squares, and still pass the same probe.

use tracing::trace;

use crate::errors::ChessErrors;
use crate::game_state::chess_types::Color;
use crate::game_state::square::Square;
use crate::move_generation::legal_move_checks::{is_in_check, move_leaves_king_safe};
use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenContext};

/// Legal destinations for whatever stands on `from`, in generation order.
/// An empty square has no moves.
pub fn legal_moves(ctx: &MoveGenContext<'_>, from: Square) -> Result<Vec<Square>, ChessErrors> {
    let Some(piece) = ctx.board.piece_at(from) else {
        return Ok(Vec::new());
    };

    let mut legal = Vec::new();
    for to in pseudo_legal_moves(ctx, piece, from) {
        if move_leaves_king_safe(ctx.board, from, to, ctx.catalog)? {
            legal.push(to);
        } else {
            trace!(%piece, %from, %to, "candidate leaves king attacked");
        }
    }
    Ok(legal)
}

/// Every legal `(from, to)` pair for `color`, scanning the board a8..h1.
pub fn all_legal_moves(
    ctx: &MoveGenContext<'_>,
    color: Color,
) -> Result<Vec<(Square, Square)>, ChessErrors> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in ctx.board.squares_of(color) {
        for to in legal_moves(ctx, from)? {
            moves.push((from, to));
        }
    }
    Ok(moves)
}

/// Short-circuits on the first legal move found.
pub fn has_any_legal_move(ctx: &MoveGenContext<'_>, color: Color) -> Result<bool, ChessErrors> {
    for (from, piece) in ctx.board.squares_of(color) {
        for to in pseudo_legal_moves(ctx, piece, from) {
            if move_leaves_king_safe(ctx.board, from, to, ctx.catalog)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// In check with no legal move.
pub fn is_checkmate(ctx: &MoveGenContext<'_>, color: Color) -> Result<bool, ChessErrors> {
    Ok(is_in_check(ctx.board, color, ctx.catalog)? && !has_any_legal_move(ctx, color)?)
}

/// Not in check with no legal move.
pub fn is_stalemate(ctx: &MoveGenContext<'_>, color: Color) -> Result<bool, ChessErrors> {
    Ok(!is_in_check(ctx.board, color, ctx.catalog)? && !has_any_legal_move(ctx, color)?)
}
