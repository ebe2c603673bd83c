//! Terminal-oriented board renderer.
//!
//! Draws piece letters (uppercase = White) with file and rank labels,
//! from the side given by the board's orientation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Orientation;
use crate::game_state::square::Square;

/// Render the board as text, one line per rank.
pub fn render_board(board: &Board) -> String {
    let (ranks, files): (Vec<u8>, Vec<u8>) = match board.orientation() {
        Orientation::WhiteAtBottom => ((1..=8).rev().collect(), (0..8).collect()),
        Orientation::BlackAtBottom => ((1..=8).collect(), (0..8).rev().collect()),
    };

    let file_labels: String = files
        .iter()
        .map(|&file| char::from(b'a' + file).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str("  ");
    out.push_str(&file_labels);
    out.push('\n');

    for &rank in &ranks {
        let rank_label = char::from(b'0' + rank);
        out.push(rank_label);
        out.push(' ');

        for (i, &file) in files.iter().enumerate() {
            let piece =
                Square::from_file_rank(file, rank).and_then(|square| board.piece_at(square));
            out.push(piece.map_or('.', |piece| piece.to_char()));
            if i < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  ");
    out.push_str(&file_labels);

    out
}
