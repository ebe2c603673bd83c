//! Castling rights and the fixed castling squares.

use crate::game_state::chess_types::Color;
use crate::game_state::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Mailbox direction the king travels.
    #[inline]
    pub const fn direction(self) -> i16 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// File (0..=7) of the rook's corner square.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }
}

/// Per-colour kingside/queenside permissions. Revoked by the first king
/// or corner-rook move; only undo brings a right back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    rights: [[bool; 2]; 2],
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            rights: [[true; 2]; 2],
        }
    }

    pub const fn none() -> Self {
        Self {
            rights: [[false; 2]; 2],
        }
    }

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.rights[color.index()][side_index(side)]
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide, allowed: bool) {
        self.rights[color.index()][side_index(side)] = allowed;
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.set(color, side, false);
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        for side in CastleSide::ALL {
            self.revoke(color, side);
        }
    }

    /// FEN-style summary (`KQkq`, `-` when empty).
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (color, side, letter) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.can_castle(color, side) {
                out.push(letter);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}

#[inline]
const fn side_index(side: CastleSide) -> usize {
    match side {
        CastleSide::KingSide => 0,
        CastleSide::QueenSide => 1,
    }
}

/// The king's home square (e1 / e8).
#[inline]
pub fn king_home(color: Color) -> Square {
    home_rank_square(color, 4)
}

/// The rook's corner square for `side`.
#[inline]
pub fn rook_home(color: Color, side: CastleSide) -> Square {
    home_rank_square(color, side.rook_file())
}

/// Where the king lands when castling (g-file / c-file).
#[inline]
pub fn king_castle_target(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::KingSide => home_rank_square(color, 6),
        CastleSide::QueenSide => home_rank_square(color, 2),
    }
}

/// Squares strictly between king and rook, all of which must be empty.
pub fn squares_between_king_and_rook(color: Color, side: CastleSide) -> Vec<Square> {
    let files: &[u8] = match side {
        CastleSide::KingSide => &[5, 6],
        CastleSide::QueenSide => &[3, 2, 1],
    };
    files.iter().map(|&file| home_rank_square(color, file)).collect()
}

/// Squares the king stands on or crosses: start, transit, destination.
/// None of them may be attacked.
pub fn king_path(color: Color, side: CastleSide) -> [Square; 3] {
    let start = king_home(color);
    let transit = home_rank_square(color, (4 + side.direction()) as u8);
    [start, transit, king_castle_target(color, side)]
}

/// Rook relocation for a castling king move `king_from -> king_to`.
///
/// The rook leaves the corner on the side the king moves toward and lands
/// on the square the king crossed last.
pub fn castle_rook_squares(king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    let direction = king_from.delta_to(king_to).signum();
    let rook_from = if direction > 0 {
        king_from.offset_on_board(3)?
    } else {
        king_from.offset_on_board(-4)?
    };
    let rook_to = king_to.offset_on_board(-direction)?;
    Some((rook_from, rook_to))
}

fn home_rank_square(color: Color, file: u8) -> Square {
    let row = 10 - color.home_rank();
    Square::from_index_unchecked(row * 10 + 1 + file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoking_is_per_side() {
        let mut rights = CastlingRights::all();
        rights.revoke(Color::White, CastleSide::KingSide);
        assert!(!rights.can_castle(Color::White, CastleSide::KingSide));
        assert!(rights.can_castle(Color::White, CastleSide::QueenSide));
        rights.revoke_all(Color::Black);
        assert_eq!(rights.summary(), "Q");
        assert_eq!(CastlingRights::none().summary(), "-");
    }

    #[test]
    fn castling_squares_are_standard() {
        assert_eq!(king_home(Color::White).to_string(), "e1");
        assert_eq!(rook_home(Color::Black, CastleSide::QueenSide).to_string(), "a8");
        assert_eq!(king_castle_target(Color::White, CastleSide::KingSide).to_string(), "g1");
        assert_eq!(king_castle_target(Color::Black, CastleSide::QueenSide).to_string(), "c8");
        let path: Vec<String> = king_path(Color::White, CastleSide::QueenSide)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(path, ["e1", "d1", "c1"]);
    }

    #[test]
    fn rook_follows_the_king() {
        let e1 = king_home(Color::White);
        let kingside = king_castle_target(Color::White, CastleSide::KingSide);
        let (from, to) = castle_rook_squares(e1, kingside).expect("kingside rook squares");
        assert_eq!((from.to_string(), to.to_string()), ("h1".to_owned(), "f1".to_owned()));
        let queenside = king_castle_target(Color::White, CastleSide::QueenSide);
        let (from, to) = castle_rook_squares(e1, queenside).expect("queenside rook squares");
        assert_eq!((from.to_string(), to.to_string()), ("a1".to_owned(), "d1".to_owned()));
    }
}
