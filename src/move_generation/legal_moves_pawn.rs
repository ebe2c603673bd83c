use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::square::Square;

/// Single push, double push from the start rank, diagonal captures and
/// the en-passant capture onto the board's target square.
pub fn generate_pawn_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset_on_board(direction) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.rank() == Some(color.pawn_start_rank()) {
                if let Some(two_step) = one_step.offset_on_board(direction) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(target) = from.offset_on_board(direction + side) else {
            continue;
        };
        if board.is_occupied_by_enemy(target, color) || board.en_passant_target() == Some(target) {
            out.push(target);
        }
    }
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim_square(color: Color, to: Square) -> Option<Square> {
    to.offset_on_board(-color.pawn_direction())
}
