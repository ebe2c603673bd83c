//! Attack detection and the king-safety probe.
//!
//! Attacks are found in reverse: from the target square, walk each
//! movement offset backwards within the same reach and look at the first
//! occupied square. All offset sets are symmetric and blocking is the same
//! in both directions, so this matches forward generation exactly.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_moves_pawn::en_passant_victim_square;
use crate::moves::piece_catalog::{MoveComponent, PieceCatalog};

/// True iff any piece of colour `by` attacks `square`.
pub fn is_square_attacked(
    board: &Board,
    square: Square,
    by: Color,
    catalog: &PieceCatalog,
) -> bool {
    let pawn = Piece::new(PieceKind::Pawn, by);
    for side in [-1, 1] {
        let origin = square.offset_on_board(-by.pawn_direction() + side);
        if origin.is_some_and(|origin| board.piece_at(origin) == Some(pawn)) {
            return true;
        }
    }

    PieceKind::ALL
        .iter()
        .filter(|&&kind| kind != PieceKind::Pawn)
        .any(|&kind| {
            let attacker = Piece::new(kind, by);
            catalog
                .profile(kind)
                .components
                .iter()
                .any(|component| component_hits(board, square, attacker, component))
        })
}

fn component_hits(
    board: &Board,
    square: Square,
    attacker: Piece,
    component: &MoveComponent,
) -> bool {
    for &offset in &component.offsets {
        let mut current = square;
        let mut steps: u8 = 0;

        while component.reach.allows(steps) {
            let Some(next) = current.offset_on_board(-offset) else {
                break;
            };
            if let Some(piece) = board.piece_at(next) {
                if piece == attacker {
                    return true;
                }
                break;
            }
            current = next;
            steps = steps.saturating_add(1);
        }
    }
    false
}

/// True iff the `color` king stands on an attacked square.
pub fn is_in_check(
    board: &Board,
    color: Color,
    catalog: &PieceCatalog,
) -> Result<bool, ChessErrors> {
    let king = board.king_square(color)?;
    Ok(is_square_attacked(board, king, color.opposite(), catalog))
}

/// Plays `from -> to` on a copy of the board (removing the en-passant
/// victim when a pawn lands on the target) and reports whether the
/// mover's king is then safe.
pub fn move_leaves_king_safe(
    board: &Board,
    from: Square,
    to: Square,
    catalog: &PieceCatalog,
) -> Result<bool, ChessErrors> {
    let mover = board.piece_at(from).ok_or(ChessErrors::NoPieceAtSquare(from))?;
    let mut probe = *board;

    if is_en_passant_capture(board, mover, from, to) {
        if let Some(victim) = en_passant_victim_square(mover.color, to) {
            probe.remove_piece(victim)?;
        }
    }
    probe.move_piece(from, to)?;

    is_in_check(&probe, mover.color, catalog).map(|in_check| !in_check)
}

/// A diagonal pawn step onto the empty en-passant target.
pub fn is_en_passant_capture(board: &Board, mover: Piece, from: Square, to: Square) -> bool {
    mover.kind == PieceKind::Pawn
        && board.en_passant_target() == Some(to)
        && board.is_empty(to)
        && from.delta_to(to) != mover.color.pawn_direction()
}

#[cfg(test)]
mod tests {
    use super::{is_in_check, is_square_attacked, move_leaves_king_safe};
    use crate::game_state::board::Board;
    use crate::game_state::castling::CastlingRights;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::square::Square;
    use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenContext};
    use crate::moves::piece_catalog::PieceCatalog;
    use crate::utils::algebraic::coordinate_to_square;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sq(coordinate: &str) -> Square {
        coordinate_to_square(coordinate).expect("test coordinate should parse")
    }

    fn place(board: &mut Board, letter: char, coordinate: &str) {
        let piece = Piece::from_char(letter).expect("test letter should parse");
        board.place_piece(piece, sq(coordinate)).expect("place should succeed");
    }

    #[test]
    fn pawn_attacks_are_diagonal_and_directional() {
        let mut board = Board::empty();
        place(&mut board, 'P', "e4");
        let catalog = PieceCatalog::default();
        assert!(is_square_attacked(&board, sq("d5"), Color::White, &catalog));
        assert!(is_square_attacked(&board, sq("f5"), Color::White, &catalog));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White, &catalog));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White, &catalog));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let mut board = Board::empty();
        place(&mut board, 'b', "a8");
        let catalog = PieceCatalog::default();
        assert!(is_square_attacked(&board, sq("h1"), Color::Black, &catalog));
        place(&mut board, 'P', "d5");
        assert!(!is_square_attacked(&board, sq("h1"), Color::Black, &catalog));
        assert!(is_square_attacked(&board, sq("d5"), Color::Black, &catalog));
    }

    #[test]
    fn earth_attacks_only_within_three_steps() {
        let mut board = Board::empty();
        place(&mut board, 'E', "a1");
        let catalog = PieceCatalog::default();
        assert!(is_square_attacked(&board, sq("a4"), Color::White, &catalog));
        assert!(!is_square_attacked(&board, sq("a5"), Color::White, &catalog));
        assert!(is_square_attacked(&board, sq("d4"), Color::White, &catalog));
    }

    #[test]
    fn leaping_pieces_attack_over_blockers() {
        let mut board = Board::empty();
        place(&mut board, 'w', "e4");
        place(&mut board, 'P', "e5");
        let catalog = PieceCatalog::default();
        assert!(is_square_attacked(&board, sq("e6"), Color::Black, &catalog));
        assert!(is_square_attacked(&board, sq("c2"), Color::Black, &catalog));
        assert!(!is_square_attacked(&board, sq("c3"), Color::Black, &catalog));
    }

    #[test]
    fn check_requires_a_king() {
        let board = Board::empty();
        let catalog = PieceCatalog::default();
        assert!(is_in_check(&board, Color::White, &catalog).is_err());
    }

    #[test]
    fn pinned_piece_may_not_leave_the_line() {
        let mut board = Board::empty();
        place(&mut board, 'K', "e1");
        place(&mut board, 'R', "e2");
        place(&mut board, 'r', "e8");
        let catalog = PieceCatalog::default();
        assert!(!move_leaves_king_safe(&board, sq("e2"), sq("d2"), &catalog).expect("probe"));
        assert!(move_leaves_king_safe(&board, sq("e2"), sq("e5"), &catalog).expect("probe"));
        assert!(move_leaves_king_safe(&board, sq("e2"), sq("e8"), &catalog).expect("probe"));
    }

    #[test]
    fn en_passant_probe_removes_the_captured_pawn() {
        // Capturing en passant would expose the king along the rank.
        let mut board = Board::empty();
        place(&mut board, 'K', "a5");
        place(&mut board, 'P', "e5");
        place(&mut board, 'p', "d5");
        place(&mut board, 'r', "h5");
        board.set_en_passant_target(Some(sq("d6")));
        let catalog = PieceCatalog::default();
        assert!(!move_leaves_king_safe(&board, sq("e5"), sq("d6"), &catalog).expect("probe"));
        assert!(move_leaves_king_safe(&board, sq("e5"), sq("e6"), &catalog).expect("probe"));
    }

    #[test]
    fn reverse_attack_detection_matches_forward_generation() {
        let letters = [
            'P', 'N', 'B', 'R', 'Q', 'K', 'F', 'W', 'E', 'A', 'p', 'n', 'b', 'r', 'q', 'k', 'f',
            'w', 'e', 'a',
        ];
        let catalog = PieceCatalog::default();
        let mut rng = StdRng::seed_from_u64(17);
        let squares: Vec<Square> = Square::all().collect();

        for _ in 0..40 {
            let mut board = Board::empty();
            for _ in 0..10 {
                let square = squares[rng.random_range(0..squares.len())];
                let letter = letters[rng.random_range(0..letters.len())];
                place(&mut board, letter, &square.to_string());
            }

            for by in Color::ALL {
                let ctx = MoveGenContext::new(&board, CastlingRights::none(), &catalog);
                let mut forward = [false; 120];
                for (from, piece) in board.squares_of(by) {
                    if piece.kind == PieceKind::Pawn {
                        // Pawns attack their diagonals whether or not anything stands there.
                        let ahead = by.pawn_direction();
                        for side in [-1, 1] {
                            if let Some(to) = from.offset_on_board(ahead + side) {
                                forward[to.index()] = true;
                            }
                        }
                        continue;
                    }
                    for to in pseudo_legal_moves(&ctx, piece, from) {
                        forward[to.index()] = true;
                    }
                }
                for target in Square::all() {
                    if board.is_occupied_by_colour(target, by) {
                        continue;
                    }
                    assert_eq!(
                        forward[target.index()],
                        is_square_attacked(&board, target, by, &catalog),
                        "{by} attack on {target}"
                    );
                }
            }
        }
    }
}
