//! Padded 10x12 mailbox geometry.
//!
//! Squares index a 120-cell array: 8x8 playable cells surrounded by two
//! sentinel ranks above and below and one sentinel file on each side. Steps
//! of up to 21 cells from a playable square land inside the array; longer
//! leaps from the corner squares can leave it, which `offset_on_board`
//! reports as `None` together with sentinel hits.
//!
//! Index 21 is a8 and index 98 is h1.

use std::fmt;

/// Maps each 120-cell index to its 0..64 playable index, or -1 for sentinels.
#[rustfmt::skip]
pub const MAILBOX120: [i8; 120] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1,  0,  1,  2,  3,  4,  5,  6,  7, -1,
    -1,  8,  9, 10, 11, 12, 13, 14, 15, -1,
    -1, 16, 17, 18, 19, 20, 21, 22, 23, -1,
    -1, 24, 25, 26, 27, 28, 29, 30, 31, -1,
    -1, 32, 33, 34, 35, 36, 37, 38, 39, -1,
    -1, 40, 41, 42, 43, 44, 45, 46, 47, -1,
    -1, 48, 49, 50, 51, 52, 53, 54, 55, -1,
    -1, 56, 57, 58, 59, 60, 61, 62, 63, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

/// Maps each playable index (0 = a8 .. 63 = h1) to its 120-cell index.
#[rustfmt::skip]
pub const MAILBOX64: [u8; 64] = [
    21, 22, 23, 24, 25, 26, 27, 28,
    31, 32, 33, 34, 35, 36, 37, 38,
    41, 42, 43, 44, 45, 46, 47, 48,
    51, 52, 53, 54, 55, 56, 57, 58,
    61, 62, 63, 64, 65, 66, 67, 68,
    71, 72, 73, 74, 75, 76, 77, 78,
    81, 82, 83, 84, 85, 86, 87, 88,
    91, 92, 93, 94, 95, 96, 97, 98,
];

pub const BOARD_CELLS: usize = 120;

/// True iff `index` is one of the 64 playable cells. Sentinels and
/// indices outside the array are never on board.
#[inline]
pub fn is_on_board(index: i16) -> bool {
    usize::try_from(index)
        .ok()
        .and_then(|i| MAILBOX120.get(i))
        .is_some_and(|&playable| playable >= 0)
}

/// An index into the 120-cell mailbox. May name a sentinel cell; use
/// [`Square::is_on_board`] before treating it as playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Wraps a mailbox index. `None` outside `0..120`.
    #[inline]
    pub fn new(index: i16) -> Option<Square> {
        u8::try_from(index)
            .ok()
            .filter(|&i| usize::from(i) < BOARD_CELLS)
            .map(Square)
    }

    /// Wraps a mailbox index known to be below 120 (range checks skipped).
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        Square(index)
    }

    /// Square of the playable cell `file` (0 = a) and `rank` (1..=8).
    #[inline]
    pub fn from_file_rank(file: u8, rank: u8) -> Option<Square> {
        if file > 7 || !(1..=8).contains(&rank) {
            return None;
        }
        let playable = usize::from(8 - rank) * 8 + usize::from(file);
        Some(Square(MAILBOX64[playable]))
    }

    /// Square of the playable index `0..64` (0 = a8).
    #[inline]
    pub fn from_playable(index: usize) -> Option<Square> {
        MAILBOX64.get(index).map(|&i| Square(i))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        MAILBOX120[self.index()] >= 0
    }

    /// Playable index `0..64`, `None` for sentinels.
    #[inline]
    pub fn playable_index(self) -> Option<usize> {
        usize::try_from(MAILBOX120[self.index()]).ok()
    }

    /// File 0..=7 (a..h), `None` for sentinels.
    #[inline]
    pub fn file(self) -> Option<u8> {
        self.playable_index().map(|i| (i % 8) as u8)
    }

    /// Rank 1..=8, `None` for sentinels.
    #[inline]
    pub fn rank(self) -> Option<u8> {
        self.playable_index().map(|i| 8 - (i / 8) as u8)
    }

    /// Applies a mailbox offset. The result may be a sentinel; `None`
    /// only when it leaves the array.
    #[inline]
    pub fn offset(self, delta: i16) -> Option<Square> {
        Square::new(self.0 as i16 + delta)
    }

    /// Applies a mailbox offset and keeps the result only if playable.
    #[inline]
    pub fn offset_on_board(self, delta: i16) -> Option<Square> {
        self.offset(delta).filter(|s| s.is_on_board())
    }

    /// Signed mailbox distance `to - self`.
    #[inline]
    pub const fn delta_to(self, to: Square) -> i16 {
        to.0 as i16 - self.0 as i16
    }

    /// Iterates the 64 playable squares from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        MAILBOX64.iter().map(|&i| Square(i))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file(), self.rank()) {
            (Some(file), Some(rank)) => write!(f, "{}{}", char::from(b'a' + file), rank),
            _ => write!(f, "#{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_on_board, Square, MAILBOX120, MAILBOX64};

    #[test]
    fn mailbox_tables_are_inverse() {
        for (playable, &cell) in MAILBOX64.iter().enumerate() {
            assert_eq!(MAILBOX120[usize::from(cell)], playable as i8);
        }
        assert_eq!(MAILBOX120.iter().filter(|&&v| v >= 0).count(), 64);
    }

    #[test]
    fn sentinels_and_out_of_range_are_off_board() {
        assert!(!is_on_board(-1));
        assert!(!is_on_board(0));
        assert!(!is_on_board(20));
        assert!(!is_on_board(29));
        assert!(!is_on_board(99));
        assert!(!is_on_board(120));
        assert!(is_on_board(21));
        assert!(is_on_board(98));
    }

    #[test]
    fn file_and_rank_match_layout() {
        let a8 = Square::new(21).expect("index 21 exists");
        assert_eq!((a8.file(), a8.rank()), (Some(0), Some(8)));
        let h1 = Square::new(98).expect("index 98 exists");
        assert_eq!((h1.file(), h1.rank()), (Some(7), Some(1)));
        assert_eq!(Square::from_file_rank(4, 1), Square::new(95));
        assert_eq!(Square::from_file_rank(8, 1), None);
        assert_eq!(Square::from_playable(0), Some(a8));
        assert_eq!(Square::from_playable(64), None);
        assert_eq!(a8.to_string(), "a8");
        assert_eq!(Square::new(0).map(|s| s.to_string()), Some("#0".to_owned()));
    }

    #[test]
    fn offsets_from_edges_stay_inside_array() {
        let deltas = [
            -21_i16, -20, -19, -12, -11, -10, -9, -8, -2, -1, 1, 2, 8, 9, 10, 11, 12, 19, 20, 21,
        ];
        for square in Square::all() {
            for delta in deltas {
                assert!(square.offset(delta).is_some(), "{square} + {delta}");
            }
        }
    }

    #[test]
    fn long_leaps_from_corners_leave_the_board() {
        let a8 = Square::new(21).expect("index 21 exists");
        let h1 = Square::new(98).expect("index 98 exists");
        assert_eq!(a8.offset(-22), None);
        assert_eq!(a8.offset_on_board(-22), None);
        assert_eq!(h1.offset(22), None);
        assert_eq!(h1.offset_on_board(22), None);

        let d4 = Square::from_file_rank(3, 4).expect("d4 exists");
        assert_eq!(d4.offset_on_board(22).map(|s| s.to_string()), Some("f2".to_owned()));
        assert_eq!(d4.offset_on_board(-22).map(|s| s.to_string()), Some("b6".to_owned()));
    }
}
