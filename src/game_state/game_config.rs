//! Per-game settings.

use crate::game_state::chess_rules::{ELEMENTAL_STARTING_POSITION, STARTING_POSITION};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::piece_catalog::PieceCatalog;

/// Which piece letters a position string may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceSet {
    #[default]
    Standard,
    Elemental,
}

impl PieceSet {
    #[inline]
    pub fn allows(self, kind: PieceKind) -> bool {
        match self {
            PieceSet::Standard => !kind.is_elemental(),
            PieceSet::Elemental => true,
        }
    }

    pub fn starting_position(self) -> &'static str {
        match self {
            PieceSet::Standard => STARTING_POSITION,
            PieceSet::Elemental => ELEMENTAL_STARTING_POSITION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub piece_set: PieceSet,
    /// Used when a promotion is requested without a piece.
    pub default_promotion: PieceKind,
    pub first_to_move: Color,
    pub catalog: PieceCatalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            piece_set: PieceSet::Standard,
            default_promotion: PieceKind::Queen,
            first_to_move: Color::White,
            catalog: PieceCatalog::default(),
        }
    }
}

impl GameConfig {
    pub fn elemental() -> Self {
        Self::default().with_piece_set(PieceSet::Elemental)
    }

    pub fn with_piece_set(mut self, piece_set: PieceSet) -> Self {
        self.piece_set = piece_set;
        self
    }

    pub fn with_default_promotion(mut self, kind: PieceKind) -> Self {
        self.default_promotion = kind;
        self
    }

    pub fn with_first_to_move(mut self, color: Color) -> Self {
        self.first_to_move = color;
        self
    }

    pub fn with_catalog(mut self, catalog: PieceCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}
