//! Human-readable renderings of committed moves.

use crate::game_state::undo_state::MoveRecord;

/// `"<piece> from <from> to <to>[, capturing <piece>]"`.
pub fn describe_move(record: &MoveRecord) -> String {
    let mut out = format!("{} from {} to {}", record.piece, record.from, record.to);
    if let Some(captured) = record.captured_piece {
        out.push_str(&format!(", capturing {captured}"));
    }
    out
}

/// Coordinate-suffix notation: `"<pieceLetter>[x]<to>"`, e.g. `Pxd5`.
pub fn move_notation(record: &MoveRecord) -> String {
    let capture = if record.is_capture() { "x" } else { "" };
    format!("{}{}{}", record.piece, capture, record.to)
}
