use crate::game_state::board::Board;
use crate::game_state::square::Square;

/// Placement string for `board`, rank 8 first. Inverse of
/// [`parse_position`](crate::utils::fen_parser::parse_position).
pub fn to_position_string(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for rank in (1..=8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let piece =
                Square::from_file_rank(file, rank).and_then(|square| board.piece_at(square));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.to_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 1 {
            out.push('/');
        }
    }

    out
}
