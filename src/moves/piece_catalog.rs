//! Table-driven movement profiles.
//!
//! Every non-pawn kind is described by one or more components: a set of
//! mailbox offsets plus how far a ray may run along each of them. The
//! standard six kinds are fixed. The elemental profiles are defaults that
//! a caller may replace through [`PieceCatalog::with_profile`].
//!
//! Pawns carry an empty profile; their colour-dependent pushes, captures
//! and en passant are generated separately.

use crate::game_state::chess_types::PieceKind;

pub const KNIGHT_OFFSETS: [i16; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];
pub const BISHOP_OFFSETS: [i16; 4] = [-11, -9, 9, 11];
pub const ROOK_OFFSETS: [i16; 4] = [-10, -1, 1, 10];
pub const QUEEN_OFFSETS: [i16; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];
/// Two-square jumps along ranks, files and diagonals.
pub const LEAP_TWO_OFFSETS: [i16; 8] = [-22, -20, -18, -2, 2, 18, 20, 22];

/// How far a ray runs along one offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// A single application of the offset.
    Step,
    /// Repeats until blocked or off the board.
    Slide,
    /// Repeats at most `n` times.
    Limited(u8),
}

impl Reach {
    /// Maximum ray length, `None` for unbounded.
    #[inline]
    pub fn limit(self) -> Option<u8> {
        match self {
            Reach::Step => Some(1),
            Reach::Slide => None,
            Reach::Limited(steps) => Some(steps),
        }
    }

    #[inline]
    pub fn allows(self, steps_taken: u8) -> bool {
        self.limit().map_or(true, |limit| steps_taken < limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveComponent {
    pub offsets: Vec<i16>,
    pub reach: Reach,
}

impl MoveComponent {
    pub fn new(offsets: &[i16], reach: Reach) -> Self {
        Self {
            offsets: offsets.to_vec(),
            reach,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovementProfile {
    pub components: Vec<MoveComponent>,
}

impl MovementProfile {
    pub fn new(components: Vec<MoveComponent>) -> Self {
        Self { components }
    }

    /// True if any component may run further than one step.
    pub fn is_sliding(&self) -> bool {
        self.components
            .iter()
            .any(|component| component.reach != Reach::Step)
    }
}

/// Registry of movement profiles indexed by [`PieceKind::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    profiles: Vec<MovementProfile>,
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self {
            profiles: PieceKind::ALL.iter().map(|&kind| default_profile(kind)).collect(),
        }
    }
}

impl PieceCatalog {
    #[inline]
    pub fn profile(&self, kind: PieceKind) -> &MovementProfile {
        &self.profiles[kind.index()]
    }

    /// Replaces an elemental profile. Standard kinds keep their fixed
    /// geometry and are returned unchanged.
    pub fn with_profile(mut self, kind: PieceKind, profile: MovementProfile) -> Self {
        if kind.is_elemental() {
            self.profiles[kind.index()] = profile;
        }
        self
    }
}

fn default_profile(kind: PieceKind) -> MovementProfile {
    let components = match kind {
        PieceKind::Pawn => Vec::new(),
        PieceKind::Knight => vec![MoveComponent::new(&KNIGHT_OFFSETS, Reach::Step)],
        PieceKind::Bishop => vec![MoveComponent::new(&BISHOP_OFFSETS, Reach::Slide)],
        PieceKind::Rook => vec![MoveComponent::new(&ROOK_OFFSETS, Reach::Slide)],
        PieceKind::Queen => vec![MoveComponent::new(&QUEEN_OFFSETS, Reach::Slide)],
        PieceKind::King => vec![MoveComponent::new(&QUEEN_OFFSETS, Reach::Step)],
        PieceKind::Fire => vec![
            MoveComponent::new(&KNIGHT_OFFSETS, Reach::Step),
            MoveComponent::new(&QUEEN_OFFSETS, Reach::Step),
        ],
        PieceKind::Water => vec![
            MoveComponent::new(&ROOK_OFFSETS, Reach::Slide),
            MoveComponent::new(&LEAP_TWO_OFFSETS, Reach::Step),
        ],
        PieceKind::Earth => vec![MoveComponent::new(&QUEEN_OFFSETS, Reach::Limited(3))],
        PieceKind::Air => vec![
            MoveComponent::new(&BISHOP_OFFSETS, Reach::Slide),
            MoveComponent::new(&LEAP_TWO_OFFSETS, Reach::Step),
        ],
    };
    MovementProfile::new(components)
}

#[cfg(test)]
mod tests {
    use super::{MoveComponent, MovementProfile, PieceCatalog, Reach, ROOK_OFFSETS};
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn sliding_classification() {
        let catalog = PieceCatalog::default();
        assert!(catalog.profile(PieceKind::Queen).is_sliding());
        assert!(catalog.profile(PieceKind::Earth).is_sliding());
        assert!(!catalog.profile(PieceKind::Knight).is_sliding());
        assert!(!catalog.profile(PieceKind::Fire).is_sliding());
        assert!(catalog.profile(PieceKind::Pawn).components.is_empty());
    }

    #[test]
    fn reach_limits() {
        assert!(Reach::Step.allows(0));
        assert!(!Reach::Step.allows(1));
        assert!(Reach::Limited(3).allows(2));
        assert!(!Reach::Limited(3).allows(3));
        assert!(Reach::Slide.allows(7));
    }

    #[test]
    fn only_elemental_profiles_are_replaceable() {
        let rook_steps = MovementProfile::new(vec![MoveComponent::new(&ROOK_OFFSETS, Reach::Step)]);
        let catalog = PieceCatalog::default()
            .with_profile(PieceKind::Water, rook_steps.clone())
            .with_profile(PieceKind::Rook, rook_steps.clone());
        assert_eq!(catalog.profile(PieceKind::Water), &rook_steps);
        assert!(catalog.profile(PieceKind::Rook).is_sliding());
    }
}
