use crate::game_state::castling::{
    king_castle_target, king_home, king_path, rook_home, squares_between_king_and_rook, CastleSide,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::move_generator::MoveGenContext;

/// Appends the kingside then the queenside castling destination when
/// each is currently available to the `color` king on `from`.
pub fn generate_castling_moves(
    ctx: &MoveGenContext<'_>,
    color: Color,
    from: Square,
    out: &mut Vec<Square>,
) {
    if from != king_home(color) {
        return;
    }

    for side in CastleSide::ALL {
        if can_castle(ctx, color, side) {
            out.push(king_castle_target(color, side));
        }
    }
}

/// Right still held, own rook in the corner, nothing in between, and the
/// king neither starts on, crosses nor lands on an attacked square.
pub fn can_castle(ctx: &MoveGenContext<'_>, color: Color, side: CastleSide) -> bool {
    if !ctx.castling_rights.can_castle(color, side) {
        return false;
    }
    if ctx.board.piece_at(king_home(color)) != Some(Piece::new(PieceKind::King, color)) {
        return false;
    }
    if ctx.board.piece_at(rook_home(color, side)) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }
    if !ctx.board.are_empty(&squares_between_king_and_rook(color, side)) {
        return false;
    }

    // Cannot castle out of, through or into check.
    let enemy = color.opposite();
    king_path(color, side)
        .iter()
        .all(|&square| !is_square_attacked(ctx.board, square, enemy, ctx.catalog))
}

#[cfg(test)]
mod tests {
    use super::can_castle;
    use crate::game_state::board::Board;
    use crate::game_state::castling::{CastleSide, CastlingRights};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::square::Square;
    use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenContext};
    use crate::moves::piece_catalog::PieceCatalog;
    use crate::utils::algebraic::coordinate_to_square;

    fn sq(coordinate: &str) -> Square {
        coordinate_to_square(coordinate).expect("test coordinate should parse")
    }

    fn place(board: &mut Board, letter: char, coordinate: &str) {
        let piece = Piece::from_char(letter).expect("test letter should parse");
        board.place_piece(piece, sq(coordinate)).expect("place should succeed");
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        place(&mut board, 'K', "e1");
        place(&mut board, 'R', "a1");
        place(&mut board, 'R', "h1");
        place(&mut board, 'k', "e8");
        board
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        let board = castling_board();
        let catalog = PieceCatalog::default();
        let ctx = MoveGenContext::new(&board, CastlingRights::all(), &catalog);
        let king = Piece::new(PieceKind::King, Color::White);
        let moves = pseudo_legal_moves(&ctx, king, sq("e1"));
        assert!(moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn revoked_right_blocks_castling() {
        let board = castling_board();
        let catalog = PieceCatalog::default();
        let mut rights = CastlingRights::all();
        rights.revoke(Color::White, CastleSide::QueenSide);
        let ctx = MoveGenContext::new(&board, rights, &catalog);
        assert!(can_castle(&ctx, Color::White, CastleSide::KingSide));
        assert!(!can_castle(&ctx, Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn blocked_or_attacked_path_blocks_castling() {
        let mut board = castling_board();
        place(&mut board, 'N', "b1");
        place(&mut board, 'r', "f8");
        let catalog = PieceCatalog::default();
        let ctx = MoveGenContext::new(&board, CastlingRights::all(), &catalog);
        assert!(!can_castle(&ctx, Color::White, CastleSide::QueenSide));
        assert!(!can_castle(&ctx, Color::White, CastleSide::KingSide));
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let mut board = castling_board();
        place(&mut board, 'r', "e5");
        let catalog = PieceCatalog::default();
        let ctx = MoveGenContext::new(&board, CastlingRights::all(), &catalog);
        assert!(!can_castle(&ctx, Color::White, CastleSide::KingSide));
        assert!(!can_castle(&ctx, Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn attacked_b_file_square_does_not_block_queenside() {
        let mut board = castling_board();
        place(&mut board, 'r', "b8");
        let catalog = PieceCatalog::default();
        let ctx = MoveGenContext::new(&board, CastlingRights::all(), &catalog);
        assert!(can_castle(&ctx, Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn missing_rook_blocks_castling() {
        let mut board = castling_board();
        board.remove_piece(sq("h1")).expect("remove should succeed");
        let catalog = PieceCatalog::default();
        let ctx = MoveGenContext::new(&board, CastlingRights::all(), &catalog);
        assert!(!can_castle(&ctx, Color::White, CastleSide::KingSide));
    }
}
