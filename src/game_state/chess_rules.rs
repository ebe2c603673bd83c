//! Canonical rule constants.
//!
//! Placement strings used to start standard and elemental games.

/// Standard chess starting placement.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Elemental starting placement: Fire, Earth, Air and Water replace the
/// b-file knight, the queen, the f-file bishop and the h-file rook.
pub const ELEMENTAL_STARTING_POSITION: &str = "rfbekanw/pppppppp/8/8/8/8/PPPPPPPP/RFBEKANW";
