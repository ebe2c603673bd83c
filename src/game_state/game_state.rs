//! Game state machine.
//!
//! `Game` owns the board, castling rights, turn, status and move history.
//! Every transition (execute, undo, redo) is computed on value copies of
//! the board and rights and committed only after it has fully succeeded,
//! so a returned error never leaves the game partially mutated.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info};

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::castling::{
    castle_rook_squares, king_home, rook_home, CastleSide, CastlingRights,
};
use crate::game_state::chess_types::{Color, MoveType, Piece, PieceKind};
use crate::game_state::game_config::GameConfig;
use crate::game_state::square::Square;
use crate::game_state::undo_state::{MoveHistory, MoveRecord};
use crate::move_generation::legal_move_checks::{is_en_passant_capture, is_in_check};
use crate::move_generation::legal_move_generator::{
    all_legal_moves, has_any_legal_move, is_checkmate, is_stalemate, legal_moves,
};
use crate::move_generation::legal_moves_pawn::en_passant_victim_square;
use crate::move_generation::move_generator::MoveGenContext;
use crate::moves::move_descriptions::{describe_move, move_notation};
use crate::utils::algebraic::coordinate_to_square;
use crate::utils::fen_parser::parse_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    GameOver { outcome: Outcome },
}

/// What a committed move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub record: MoveRecord,
    /// The side now to move is in check.
    pub gives_check: bool,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    castling_rights: CastlingRights,
    side_to_move: Color,
    status: GameStatus,
    history: MoveHistory,
    config: GameConfig,
    started_at: Option<DateTime<Utc>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::empty(),
            castling_rights: CastlingRights::none(),
            side_to_move: config.first_to_move,
            status: GameStatus::NotStarted,
            history: MoveHistory::new(),
            config,
            started_at: None,
        }
    }

    /// A started game from `position`.
    pub fn from_position(config: GameConfig, position: &str) -> Result<Self, ChessErrors> {
        let mut game = Self::new(config);
        game.start(position)?;
        Ok(game)
    }

    /// A started game from the configured piece set's start position.
    pub fn new_game(config: GameConfig) -> Result<Self, ChessErrors> {
        let position = config.piece_set.starting_position();
        Self::from_position(config, position)
    }

    /// Resets everything and sets up `position`.
    ///
    /// Castling rights are granted where king and rook stand on their home
    /// squares. The position must hold exactly one king per colour.
    pub fn start(&mut self, position: &str) -> Result<(), ChessErrors> {
        let board = parse_position(position, self.config.piece_set)?;

        for color in Color::ALL {
            match board.count(Piece::new(PieceKind::King, color)) {
                0 => return Err(ChessErrors::KingNotFound(color)),
                1 => {}
                n => {
                    return Err(ChessErrors::InvalidPosition(format!(
                        "{color} has {n} kings"
                    )))
                }
            }
        }

        let castling_rights = initial_castling_rights(&board);
        let side_to_move = self.config.first_to_move;
        let (status, _) = evaluate_status(&board, castling_rights, side_to_move, &self.config)?;

        self.board = board;
        self.castling_rights = castling_rights;
        self.side_to_move = side_to_move;
        self.status = status;
        self.history.clear();
        self.started_at = Some(Utc::now());

        info!(
            position,
            castling = %castling_rights.summary(),
            to_move = %side_to_move,
            "game started"
        );
        if let GameStatus::GameOver { outcome } = status {
            info!(?outcome, "game over at start");
        }
        Ok(())
    }

    fn move_gen_context(&self) -> MoveGenContext<'_> {
        MoveGenContext::new(&self.board, self.castling_rights, &self.config.catalog)
    }

    /// Legal destinations for the piece on `square`, in generation order.
    pub fn legal_moves(&self, square: Square) -> Result<Vec<Square>, ChessErrors> {
        legal_moves(&self.move_gen_context(), square)
    }

    /// Every legal `(from, to)` pair for `color` in board scan order.
    pub fn all_legal_moves(&self, color: Color) -> Result<Vec<(Square, Square)>, ChessErrors> {
        all_legal_moves(&self.move_gen_context(), color)
    }

    /// Kinds a pawn may promote to under this game's piece set.
    pub fn promotion_choices(&self) -> Vec<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .filter(|&kind| kind.is_promotion_target() && self.config.piece_set.allows(kind))
            .collect()
    }

    pub fn execute_move(&mut self, from: Square, to: Square) -> Result<MoveResult, ChessErrors> {
        self.execute_move_with_promotion(from, to, None)
    }

    /// Parses both coordinates, then plays the move.
    pub fn execute_move_from_coordinates(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<MoveResult, ChessErrors> {
        let from = coordinate_to_square(from)?;
        let to = coordinate_to_square(to)?;
        self.execute_move(from, to)
    }

    /// Validates and commits `from -> to`. `promotion` is consulted only
    /// when a pawn reaches its last rank; `None` means the configured
    /// default (Queen).
    pub fn execute_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveResult, ChessErrors> {
        let result = self.try_execute(from, to, promotion);
        if let Err(err) = &result {
            debug!(%from, %to, %err, "move rejected");
        }
        result
    }

    fn try_execute(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveResult, ChessErrors> {
        if self.status != GameStatus::InProgress {
            return Err(ChessErrors::GameNotInProgress);
        }
        let piece = self.board.piece_at(from).ok_or(ChessErrors::NoPieceAtSquare(from))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::NotSideToMove(from));
        }
        if !self.legal_moves(from)?.contains(&to) {
            return Err(ChessErrors::IllegalDestination { from, to });
        }

        let record = self.build_record(piece, from, to, promotion)?;
        self.commit(record)
    }

    fn build_record(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, ChessErrors> {
        let move_type = classify_move(&self.board, piece, from, to);

        let (captured_piece, captured_square) = if move_type == MoveType::EnPassant {
            let victim = en_passant_victim_square(piece.color, to);
            (victim.and_then(|square| self.board.piece_at(square)), victim)
        } else {
            let captured = self.board.piece_at(to);
            (captured, captured.map(|_| to))
        };

        let promotion = if move_type == MoveType::Promotion {
            let kind = promotion.unwrap_or(self.config.default_promotion);
            if !kind.is_promotion_target() || !self.config.piece_set.allows(kind) {
                return Err(ChessErrors::InvalidPromotionPiece(kind));
            }
            Some(Piece::new(kind, piece.color))
        } else {
            None
        };

        Ok(MoveRecord {
            piece,
            from,
            to,
            captured_piece,
            captured_square,
            move_type,
            promotion,
            castling_rights_before: self.castling_rights,
            en_passant_before: self.board.en_passant_target(),
        })
    }

    /// Plays `record` on copies, evaluates the resulting status, then
    /// commits. Pushing clears the redo stack.
    fn commit(&mut self, record: MoveRecord) -> Result<MoveResult, ChessErrors> {
        let (board, rights, side, status, gives_check) = self.play_forward(&record)?;

        self.board = board;
        self.castling_rights = rights;
        self.side_to_move = side;
        self.status = status;
        self.history.push(record);

        debug!(
            notation = %move_notation(&record),
            description = %describe_move(&record),
            "move committed"
        );
        log_game_over(status);

        Ok(MoveResult {
            record,
            gives_check,
            status,
        })
    }

    fn play_forward(
        &self,
        record: &MoveRecord,
    ) -> Result<(Board, CastlingRights, Color, GameStatus, bool), ChessErrors> {
        let mut board = self.board;
        apply_record(&mut board, record)?;
        let rights = castling_rights_after(record);
        let side = record.piece.color.opposite();
        let (status, gives_check) = evaluate_status(&board, rights, side, &self.config)?;
        Ok((board, rights, side, status, gives_check))
    }

    /// Reverts the last move. `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        match self.try_undo_move() {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(%err, "undo ignored");
                None
            }
        }
    }

    pub fn try_undo_move(&mut self) -> Result<MoveRecord, ChessErrors> {
        let record = *self.history.last().ok_or(ChessErrors::NoMovesToUndo)?;

        let mut board = self.board;
        revert_record(&mut board, &record)?;

        self.board = board;
        self.castling_rights = record.castling_rights_before;
        self.side_to_move = record.piece.color;
        self.status = GameStatus::InProgress;
        self.history.undo();

        debug!(notation = %move_notation(&record), "move undone");
        Ok(record)
    }

    /// Re-applies the most recently undone move. `None` when the redo
    /// stack is empty.
    pub fn redo_move(&mut self) -> Option<MoveRecord> {
        match self.try_redo_move() {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(%err, "redo ignored");
                None
            }
        }
    }

    /// Replays the recorded move type and promotion piece as they were
    /// first committed.
    pub fn try_redo_move(&mut self) -> Result<MoveRecord, ChessErrors> {
        let record = *self.history.peek_undone().ok_or(ChessErrors::NoMovesToRedo)?;
        if self.status != GameStatus::InProgress {
            return Err(ChessErrors::GameNotInProgress);
        }

        let (board, rights, side, status, _) = self.play_forward(&record)?;

        self.board = board;
        self.castling_rights = rights;
        self.side_to_move = side;
        self.status = status;
        self.history.redo();

        debug!(notation = %move_notation(&record), "move redone");
        log_game_over(status);
        Ok(record)
    }

    pub fn is_in_check(&self, color: Color) -> Result<bool, ChessErrors> {
        is_in_check(&self.board, color, &self.config.catalog)
    }

    pub fn is_checkmate(&self, color: Color) -> Result<bool, ChessErrors> {
        is_checkmate(&self.move_gen_context(), color)
    }

    pub fn is_stalemate(&self, color: Color) -> Result<bool, ChessErrors> {
        is_stalemate(&self.move_gen_context(), color)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.board.en_passant_target()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        self.history.done()
    }

    pub fn undone_moves(&self) -> &[MoveRecord] {
        self.history.undone()
    }

    /// One numbered line per committed move: `"1. Pe4 (P from e2 to e4)"`.
    pub fn display_move_history(&self) -> String {
        if self.history.is_empty() {
            return "No moves have been made yet.".to_owned();
        }
        self.history
            .done()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                format!("{}. {} ({})", i + 1, move_notation(record), describe_move(record))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Move history preceded by a header naming the start time.
    pub fn transcript(&self) -> String {
        let header = match self.started_at {
            Some(started) => format!(
                "Game started {}",
                started.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            None => "Game not started".to_owned(),
        };
        format!("{header}\n{}", self.display_move_history())
    }

    /// Display orientation only; the rules never look at it.
    pub fn flip_board(&mut self) {
        self.board.flip();
    }

    pub fn orient_board(&mut self, bottom: Color) {
        self.board.orient(bottom);
    }
}

fn log_game_over(status: GameStatus) {
    if let GameStatus::GameOver { outcome } = status {
        info!(?outcome, "game over");
    }
}

/// En passant when a pawn lands diagonally on the empty target square;
/// castle when a king jumps two or three squares along its rank;
/// promotion when a pawn reaches its last rank.
pub fn classify_move(board: &Board, piece: Piece, from: Square, to: Square) -> MoveType {
    let delta = from.delta_to(to).abs();
    if is_en_passant_capture(board, piece, from, to) {
        MoveType::EnPassant
    } else if piece.kind == PieceKind::King
        && from.rank() == to.rank()
        && (delta == 2 || delta == 3)
    {
        MoveType::Castle
    } else if piece.kind == PieceKind::Pawn && to.rank() == Some(piece.color.promotion_rank()) {
        MoveType::Promotion
    } else {
        MoveType::Normal
    }
}

fn apply_record(board: &mut Board, record: &MoveRecord) -> Result<(), ChessErrors> {
    match record.move_type {
        MoveType::Normal => board.move_piece(record.from, record.to)?,
        MoveType::EnPassant => {
            if let Some(victim) = record.captured_square {
                board.remove_piece(victim)?;
            }
            board.move_piece(record.from, record.to)?;
        }
        MoveType::Castle => {
            board.move_piece(record.from, record.to)?;
            if let Some((rook_from, rook_to)) = castle_rook_squares(record.from, record.to) {
                board.move_piece(rook_from, rook_to)?;
            }
        }
        MoveType::Promotion => {
            board.move_piece(record.from, record.to)?;
            if let Some(promoted) = record.promotion {
                board.place_piece(promoted, record.to)?;
            }
        }
    }
    Ok(())
}

fn revert_record(board: &mut Board, record: &MoveRecord) -> Result<(), ChessErrors> {
    match record.move_type {
        MoveType::Normal | MoveType::EnPassant => {
            board.move_piece(record.to, record.from)?;
            restore_capture(board, record)?;
        }
        MoveType::Promotion => {
            board.remove_piece(record.to)?;
            board.place_piece(record.piece, record.from)?;
            restore_capture(board, record)?;
        }
        MoveType::Castle => {
            board.move_piece(record.to, record.from)?;
            if let Some((rook_from, rook_to)) = castle_rook_squares(record.from, record.to) {
                board.move_piece(rook_to, rook_from)?;
            }
        }
    }
    board.set_en_passant_target(record.en_passant_before);
    Ok(())
}

fn restore_capture(board: &mut Board, record: &MoveRecord) -> Result<(), ChessErrors> {
    if let (Some(piece), Some(square)) = (record.captured_piece, record.captured_square) {
        board.place_piece(piece, square)?;
    }
    Ok(())
}

/// A king move revokes both of its colour's rights. Any move from or onto
/// a rook's corner revokes that corner's right.
fn castling_rights_after(record: &MoveRecord) -> CastlingRights {
    let mut rights = record.castling_rights_before;
    if record.piece.kind == PieceKind::King {
        rights.revoke_all(record.piece.color);
    }
    for color in Color::ALL {
        for side in CastleSide::ALL {
            let corner = rook_home(color, side);
            if record.from == corner || record.to == corner {
                rights.revoke(color, side);
            }
        }
    }
    rights
}

fn initial_castling_rights(board: &Board) -> CastlingRights {
    let mut rights = CastlingRights::none();
    for color in Color::ALL {
        if board.piece_at(king_home(color)) != Some(Piece::new(PieceKind::King, color)) {
            continue;
        }
        for side in CastleSide::ALL {
            let rook = Some(Piece::new(PieceKind::Rook, color));
            rights.set(color, side, board.piece_at(rook_home(color, side)) == rook);
        }
    }
    rights
}

/// Status of the game with `side` to move, and whether `side` is in check.
fn evaluate_status(
    board: &Board,
    rights: CastlingRights,
    side: Color,
    config: &GameConfig,
) -> Result<(GameStatus, bool), ChessErrors> {
    let ctx = MoveGenContext::new(board, rights, &config.catalog);
    let in_check = is_in_check(board, side, &config.catalog)?;
    // Both kings must still be present.
    board.king_square(side.opposite())?;

    let status = if has_any_legal_move(&ctx, side)? {
        GameStatus::InProgress
    } else if in_check {
        GameStatus::GameOver {
            outcome: Outcome::Checkmate {
                winner: side.opposite(),
            },
        }
    } else {
        GameStatus::GameOver {
            outcome: Outcome::Stalemate,
        }
    };
    Ok((status, in_check))
}
