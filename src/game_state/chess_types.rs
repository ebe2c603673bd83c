//! Core value types shared by the board, the move generator and the game.
//!
//! Pieces are plain `Copy` values (`kind` + `color`) so a whole board can be
//! copied as a flat array when probing candidate moves.

use std::fmt;

/// Piece colour and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Mailbox offset of a single pawn push. White moves toward rank 8,
    /// which sits at the low end of the 120-cell array.
    #[inline]
    pub const fn pawn_direction(self) -> i16 {
        match self {
            Color::White => -10,
            Color::Black => 10,
        }
    }

    /// Rank (1..=8) pawns of this colour start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank (1..=8) on which pawns of this colour promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// Rank (1..=8) holding this colour's king and rooks at the start.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind. The last four are the elemental variant pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Fire,
    Water,
    Earth,
    Air,
}

impl PieceKind {
    pub const COUNT: usize = 10;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Fire,
        PieceKind::Water,
        PieceKind::Earth,
        PieceKind::Air,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
            PieceKind::Fire => 6,
            PieceKind::Water => 7,
            PieceKind::Earth => 8,
            PieceKind::Air => 9,
        }
    }

    /// Lowercase letter code used in position strings and notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Fire => 'f',
            PieceKind::Water => 'w',
            PieceKind::Earth => 'e',
            PieceKind::Air => 'a',
        }
    }

    /// Inverse of [`PieceKind::letter`], case-insensitive.
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        let lower = letter.to_ascii_lowercase();
        PieceKind::ALL.into_iter().find(|kind| kind.letter() == lower)
    }

    /// Relative material value. Not used by legality.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight | PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 100_000,
            PieceKind::Fire => 600,
            PieceKind::Water => 800,
            PieceKind::Earth => 550,
            PieceKind::Air => 900,
        }
    }

    #[inline]
    pub const fn is_elemental(self) -> bool {
        matches!(
            self,
            PieceKind::Fire | PieceKind::Water | PieceKind::Earth | PieceKind::Air
        )
    }

    /// Pawns may not promote to a pawn or a king.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }
}

/// A piece on the board. The single-letter encoding (uppercase = White)
/// is both the storage and the notation representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn from_char(letter: char) -> Option<Piece> {
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else if letter.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_letter(letter).map(|kind| Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// How a committed move was applied, and therefore how to invert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    Normal,
    Castle,
    EnPassant,
    Promotion,
}

/// Display orientation. Never consulted by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    WhiteAtBottom,
    BlackAtBottom,
}

impl Orientation {
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::WhiteAtBottom => Orientation::BlackAtBottom,
            Orientation::BlackAtBottom => Orientation::WhiteAtBottom,
        }
    }

    /// Colour drawn at the bottom of the board.
    #[inline]
    pub const fn bottom(self) -> Color {
        match self {
            Orientation::WhiteAtBottom => Color::White,
            Orientation::BlackAtBottom => Color::Black,
        }
    }
}
