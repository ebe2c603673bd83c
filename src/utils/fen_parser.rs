//! Placement-string parser.
//!
//! Accepts the piece-placement field of FEN only: eight `/`-separated
//! ranks from rank 8 down to rank 1, each a mix of piece letters and
//! empty-run digits `1`-`8` summing to exactly eight files. Elemental
//! letters are accepted only with [`PieceSet::Elemental`].

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::game_state::game_config::PieceSet;
use crate::game_state::square::Square;

pub fn parse_position(position: &str, piece_set: PieceSet) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = position.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidPosition(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();

    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row as u8;
        let mut file: u8 = 0;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(ChessErrors::InvalidPosition(format!(
                        "invalid empty-square count '{ch}' on rank {rank}"
                    )));
                }
                file += run as u8;
                if file > 8 {
                    return Err(rank_too_long(rank));
                }
                continue;
            }

            let piece = Piece::from_char(ch)
                .filter(|piece| piece_set.allows(piece.kind))
                .ok_or_else(|| {
                    ChessErrors::InvalidPosition(format!(
                        "invalid piece character '{ch}' on rank {rank}"
                    ))
                })?;

            let square = Square::from_file_rank(file, rank).ok_or_else(|| rank_too_long(rank))?;
            board.place_piece(piece, square)?;
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidPosition(format!(
                "rank {rank} covers {file} files instead of 8"
            )));
        }
    }

    Ok(board)
}

fn rank_too_long(rank: u8) -> ChessErrors {
    ChessErrors::InvalidPosition(format!("rank {rank} has more than 8 files"))
}
