//! Pseudo-legal move generation.
//!
//! Dispatches on the piece kind: table-driven rays for everything the
//! catalog describes, with pawns and king castling layered on top. The
//! result ignores whether the mover's own king is left attacked; see
//! `legal_move_generator` for the filtered set.

use crate::game_state::board::Board;
use crate::game_state::castling::CastlingRights;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::moves::piece_catalog::{MoveComponent, PieceCatalog};

/// Everything move generation reads: the board (with its en-passant
/// target), the castling rights and the movement tables.
#[derive(Debug, Clone, Copy)]
pub struct MoveGenContext<'a> {
    pub board: &'a Board,
    pub castling_rights: CastlingRights,
    pub catalog: &'a PieceCatalog,
}

impl<'a> MoveGenContext<'a> {
    pub fn new(
        board: &'a Board,
        castling_rights: CastlingRights,
        catalog: &'a PieceCatalog,
    ) -> Self {
        Self {
            board,
            castling_rights,
            catalog,
        }
    }
}

/// Destinations for `piece` standing on `from`, in generation order.
pub fn pseudo_legal_moves(ctx: &MoveGenContext<'_>, piece: Piece, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(32);

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(ctx.board, piece.color, from, &mut out),
        PieceKind::King => {
            generate_table_moves(ctx, piece, from, &mut out);
            generate_castling_moves(ctx, piece.color, from, &mut out);
        }
        _ => generate_table_moves(ctx, piece, from, &mut out),
    }

    out
}

/// Ray-walks every component of the kind's movement profile.
pub fn generate_table_moves(
    ctx: &MoveGenContext<'_>,
    piece: Piece,
    from: Square,
    out: &mut Vec<Square>,
) {
    for component in &ctx.catalog.profile(piece.kind).components {
        walk_component(ctx.board, piece.color, from, component, out);
    }
}

/// For each offset: include empty squares, stop after an enemy-occupied
/// square (capture), stop before an ally, stop at the edge or when the
/// component's reach is spent.
pub fn walk_component(
    board: &Board,
    color: Color,
    from: Square,
    component: &MoveComponent,
    out: &mut Vec<Square>,
) {
    for &offset in &component.offsets {
        let mut current = from;
        let mut steps: u8 = 0;

        while component.reach.allows(steps) {
            let Some(next) = current.offset_on_board(offset) else {
                break;
            };
            if board.is_occupied_by_colour(next, color) {
                break;
            }

            out.push(next);
            if board.is_occupied_by_enemy(next, color) {
                break;
            }

            current = next;
            steps = steps.saturating_add(1);
        }
    }
}
