//! Mailbox board model.
//!
//! `Board` owns the 120-cell array, the en-passant target and the display
//! orientation. It is `Copy`, so legality probes work on a value copy and
//! never alias the live board. All mutation goes through `move_piece`,
//! `place_piece`, `remove_piece` and `set_en_passant_target`.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Color, Orientation, Piece, PieceKind};
use crate::game_state::square::{Square, BOARD_CELLS};
use crate::utils::algebraic::coordinate_to_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; BOARD_CELLS],
    en_passant_target: Option<Square>,
    orientation: Orientation,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            en_passant_target: None,
            orientation: Orientation::WhiteAtBottom,
        }
    }

    /// Builds a board from 64 playable cells ordered a8..h1.
    pub fn from_playable(cells: &[Option<Piece>; 64]) -> Self {
        let mut board = Self::empty();
        for (square, piece) in Square::all().zip(cells.iter()) {
            board.cells[square.index()] = *piece;
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    /// True for an empty playable square. Sentinels are never empty.
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        square.is_on_board() && self.cells[square.index()].is_none()
    }

    /// True iff `square` holds a piece of `color` (an ally of `color`).
    #[inline]
    pub fn is_occupied_by_colour(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|piece| piece.color == color)
    }

    /// True iff `square` holds a piece of the colour opposing `color`.
    #[inline]
    pub fn is_occupied_by_enemy(&self, square: Square, color: Color) -> bool {
        self.is_occupied_by_colour(square, color.opposite())
    }

    /// True iff every listed square is empty.
    pub fn are_empty(&self, squares: &[Square]) -> bool {
        squares.iter().all(|&square| self.is_empty(square))
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn flip(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    pub fn orient(&mut self, bottom: Color) {
        if self.orientation.bottom() != bottom {
            self.flip();
        }
    }

    /// Relocates whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// No legality check. Sets the en-passant target to the skipped square
    /// when the moved piece is a pawn advancing two ranks, clears it
    /// otherwise.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), ChessErrors> {
        require_on_board(from)?;
        require_on_board(to)?;

        let moved = self.cells[from.index()].take();
        self.cells[to.index()] = moved;

        let double_push = moved.is_some_and(|piece| piece.kind == PieceKind::Pawn)
            && from.delta_to(to).abs() == 20;
        self.en_passant_target = if double_push {
            from.offset_on_board(from.delta_to(to) / 2)
        } else {
            None
        };

        Ok(())
    }

    pub fn place_piece(&mut self, piece: Piece, square: Square) -> Result<(), ChessErrors> {
        require_on_board(square)?;
        self.cells[square.index()] = Some(piece);
        Ok(())
    }

    /// Clears `square`, returning what stood there.
    pub fn remove_piece(&mut self, square: Square) -> Result<Option<Piece>, ChessErrors> {
        require_on_board(square)?;
        Ok(self.cells[square.index()].take())
    }

    /// Playable squares holding a piece of `color`, in a8..h1 order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    /// First square holding `piece`, in a8..h1 order.
    pub fn find(&self, piece: Piece) -> Option<Square> {
        Square::all().find(|&square| self.piece_at(square) == Some(piece))
    }

    /// Number of pieces equal to `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        Square::all()
            .filter(|&square| self.piece_at(square) == Some(piece))
            .count()
    }

    /// Square of the `color` king.
    pub fn king_square(&self, color: Color) -> Result<Square, ChessErrors> {
        self.find(Piece::new(PieceKind::King, color))
            .ok_or(ChessErrors::KingNotFound(color))
    }

    /// Piece on the square named by an algebraic coordinate.
    pub fn piece_at_coordinate(&self, coordinate: &str) -> Result<Option<Piece>, ChessErrors> {
        let square = coordinate_to_square(coordinate)?;
        Ok(self.piece_at(square))
    }
}

fn require_on_board(square: Square) -> Result<(), ChessErrors> {
    if square.is_on_board() {
        Ok(())
    } else {
        Err(ChessErrors::InvalidCoordinate(format!(
            "square index {} is off the board",
            square.index()
        )))
    }
}
