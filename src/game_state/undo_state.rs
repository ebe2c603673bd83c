//! Reversible move records and the done/undone history stacks.

use crate::game_state::castling::CastlingRights;
use crate::game_state::chess_types::{MoveType, Piece};
use crate::game_state::square::Square;

/// Self-contained record of one committed move. Holds everything needed
/// to invert it exactly: the captured piece and where it stood, the
/// promotion piece, and the castling rights and en-passant target from
/// before the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured_piece: Option<Piece>,
    /// Differs from `to` only for en passant.
    pub captured_square: Option<Square>,
    pub move_type: MoveType,
    pub promotion: Option<Piece>,
    pub castling_rights_before: CastlingRights,
    pub en_passant_before: Option<Square>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

/// Editor-style history: pushing a new move discards the redo path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    done: Vec<MoveRecord>,
    undone: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly played move and clears the redo stack.
    pub fn push(&mut self, record: MoveRecord) {
        self.done.push(record);
        self.undone.clear();
    }

    /// Moves the latest done record onto the redo stack.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.done.pop()?;
        self.undone.push(record);
        Some(record)
    }

    /// Moves the latest undone record back onto the done stack.
    pub fn redo(&mut self) -> Option<MoveRecord> {
        let record = self.undone.pop()?;
        self.done.push(record);
        Some(record)
    }

    pub fn peek_undone(&self) -> Option<&MoveRecord> {
        self.undone.last()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.done.last()
    }

    pub fn done(&self) -> &[MoveRecord] {
        &self.done
    }

    pub fn undone(&self) -> &[MoveRecord] {
        &self.undone
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveHistory, MoveRecord};
    use crate::game_state::castling::CastlingRights;
    use crate::game_state::chess_types::{Color, MoveType, Piece, PieceKind};
    use crate::utils::algebraic::coordinate_to_square;

    fn record(from: &str, to: &str) -> MoveRecord {
        MoveRecord {
            piece: Piece::new(PieceKind::Pawn, Color::White),
            from: coordinate_to_square(from).expect("test coordinate"),
            to: coordinate_to_square(to).expect("test coordinate"),
            captured_piece: None,
            captured_square: None,
            move_type: MoveType::Normal,
            promotion: None,
            castling_rights_before: CastlingRights::all(),
            en_passant_before: None,
        }
    }

    #[test]
    fn push_after_undo_clears_redo() {
        let mut history = MoveHistory::new();
        history.push(record("e2", "e4"));
        history.push(record("d2", "d4"));
        assert_eq!(history.undo(), Some(record("d2", "d4")));
        assert_eq!(history.undone().len(), 1);

        history.push(record("c2", "c4"));
        assert!(history.undone().is_empty());
        assert_eq!(history.redo(), None);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn undo_then_redo_restores_order() {
        let mut history = MoveHistory::new();
        history.push(record("e2", "e4"));
        history.undo();
        assert!(history.is_empty());
        assert_eq!(history.peek_undone(), Some(&record("e2", "e4")));
        history.redo();
        assert_eq!(history.done(), [record("e2", "e4")]);
        assert_eq!(history.undo(), Some(record("e2", "e4")));
        assert_eq!(history.undo(), None);
    }
}
