//! Conversions between algebraic coordinates (`e4`) and mailbox squares.

use crate::errors::ChessErrors;
use crate::game_state::square::Square;

/// Convert an algebraic coordinate (for example: "e4") to a mailbox square.
///
/// The file letter may be upper or lower case.
pub fn coordinate_to_square(coordinate: &str) -> Result<Square, ChessErrors> {
    let invalid = || ChessErrors::InvalidCoordinate(coordinate.to_owned());

    let bytes = coordinate.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Square::from_file_rank(file - b'a', rank - b'0').ok_or_else(invalid)
}

/// Convert a mailbox square to its algebraic coordinate.
///
/// Fails for sentinel cells.
pub fn square_to_coordinate(square: Square) -> Result<String, ChessErrors> {
    match (square.file(), square.rank()) {
        (Some(file), Some(rank)) => Ok(format!("{}{}", char::from(b'a' + file), rank)),
        _ => Err(ChessErrors::InvalidCoordinate(format!(
            "square index {} is off the board",
            square.index()
        ))),
    }
}

/// Convert a raw mailbox index to its algebraic coordinate.
pub fn index_to_coordinate(index: i16) -> Result<String, ChessErrors> {
    let square = Square::new(index).ok_or_else(|| {
        ChessErrors::InvalidCoordinate(format!("square index {index} is out of range"))
    })?;
    square_to_coordinate(square)
}
