//! Game state: legality, turn order, castling bookkeeping and termination.
//!
//! A [`Game`] owns one [`Board`] plus the side to move, the four castling
//! flags, the last applied move (for en passant) and the `over` flag. It
//! changes only through [`Game::apply_move`] and [`Game::resign`]; every
//! other method is a side-effect-free query.

use crate::movegen::{is_square_attacked, raw_moves};
use crate::{Board, GameRecord};
use chess_core::{
    CastleSide, CastlingRights, Color, Fen, FenError, Move, NotationError, PieceType, Position,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Why [`Game::apply_move`] refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The game has already ended.
    GameOver,
    /// No piece stands on the start square.
    EmptySquare,
    /// The piece on the start square belongs to the side not on move.
    WrongTurn,
    /// The move is not among the legal moves of that piece.
    NotLegal,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::GameOver => write!(f, "the game is over"),
            IllegalMoveReason::EmptySquare => write!(f, "no piece on the start square"),
            IllegalMoveReason::WrongTurn => write!(f, "not that side's turn"),
            IllegalMoveReason::NotLegal => write!(f, "not a legal move"),
        }
    }
}

/// Error type for game operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move {mov}: {reason}")]
    IllegalMove {
        mov: Move,
        reason: IllegalMoveReason,
    },

    #[error("game is already over")]
    InvalidState,

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Fen(#[from] FenError),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Resigned,
}

/// What a legal move does besides relocating its own piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideEffect {
    None,
    /// Move the rook of the given side as well.
    Castle(Color, CastleSide),
    /// Remove the pawn standing on this square.
    EnPassant(Position),
}

/// A chess game between two players.
///
/// Serializes through [`GameRecord`]; deserializing rejects boards without
/// exactly one king per side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) last_move: Option<Move>,
    pub(crate) over: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game in the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            turn: Color::White,
            castling: CastlingRights::ALL,
            last_move: None,
            over: false,
        }
    }

    /// Assembles a game from its parts after checking that each side has
    /// exactly one king.
    pub fn from_parts(
        board: Board,
        turn: Color,
        castling: CastlingRights,
        last_move: Option<Move>,
        over: bool,
    ) -> Result<Self, GameError> {
        for color in Color::ALL {
            let kings = board.count(color, PieceType::King);
            if kings != 1 {
                return Err(GameError::InvalidPosition(format!(
                    "expected 1 {} king, found {}",
                    color, kings
                )));
            }
        }
        Ok(Game {
            board,
            turn,
            castling,
            last_move,
            over,
        })
    }

    /// Creates a game from a FEN string.
    ///
    /// An en passant target becomes the double pawn push that produced it.
    /// If the side to move has no legal move the game starts over.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let fen = Fen::parse(fen)?;
        let last_move = fen.en_passant.and_then(|target| {
            let pusher = fen.turn.opposite();
            let start = target.offset(-pusher.forward(), 0)?;
            let end = target.offset(pusher.forward(), 0)?;
            Some(Move::new(start, end))
        });

        let mut game = Self::from_parts(
            Board::from_placement(fen.placement),
            fen.turn,
            fen.castling,
            last_move,
            false,
        )?;
        game.over = !game.has_legal_move(game.turn);
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the castling flags.
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the most recently applied move.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns how the game ended, or `None` while it is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.over {
            return None;
        }
        Some(if self.is_in_checkmate(self.turn) {
            Outcome::Checkmate {
                winner: self.turn.opposite(),
            }
        } else if self.is_in_stalemate(self.turn) {
            Outcome::Stalemate
        } else {
            Outcome::Resigned
        })
    }

    /// Returns the legal moves of the piece on `from`, or `None` if the
    /// square is empty.
    ///
    /// Works for either color regardless of whose turn it is.
    pub fn legal_moves(&self, from: Position) -> Option<Vec<Move>> {
        let piece = self.board.get(from)?;

        let mut moves: Vec<Move> = raw_moves(&self.board, from)
            .into_iter()
            .filter(|&m| match self.side_effect(m) {
                SideEffect::Castle(color, side) => self.may_castle(color, side),
                _ => true,
            })
            .filter(|&m| !self.would_be_in_check(m))
            .collect();

        if piece.kind == PieceType::Pawn {
            if let Some(capture) = self.en_passant_capture(from) {
                if !self.would_be_in_check(capture) {
                    moves.push(capture);
                }
            }
        }

        Some(moves)
    }

    /// Returns the legal moves of every piece of `color`.
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .filter_map(|(pos, _)| self.legal_moves(pos))
            .flatten()
            .collect()
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(pos, _)| self.legal_moves(pos).is_some_and(|moves| !moves.is_empty()))
    }

    /// Returns true if the king of `color` is attacked on the current board.
    pub fn is_in_check(&self, color: Color) -> bool {
        Self::king_attacked(&self.board, color)
    }

    fn king_attacked(board: &Board, color: Color) -> bool {
        board
            .king_position(color)
            .is_some_and(|king| is_square_attacked(board, king, color.opposite()))
    }

    /// Returns true if playing `m` would leave the mover's king attacked.
    ///
    /// The move is played on a snapshot, including the rook of a castling
    /// move and the pawn removed by en passant; the live game is untouched.
    pub fn would_be_in_check(&self, m: Move) -> bool {
        let mover = self.board.get(m.start).map_or(self.turn, |p| p.color);
        let mut board = self.board.snapshot();
        Self::relocate(&mut board, m, self.side_effect(m));
        Self::king_attacked(&board, mover)
    }

    /// Returns true if `color` is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `color` is not in check but has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Validates and applies a move.
    ///
    /// Nothing is modified when the move is refused.
    pub fn apply_move(&mut self, m: Move) -> Result<(), GameError> {
        let illegal = |reason| GameError::IllegalMove { mov: m, reason };

        if self.over {
            return Err(illegal(IllegalMoveReason::GameOver));
        }
        let piece = self
            .board
            .get(m.start)
            .ok_or_else(|| illegal(IllegalMoveReason::EmptySquare))?;
        if piece.color != self.turn {
            return Err(illegal(IllegalMoveReason::WrongTurn));
        }
        let legal = self.legal_moves(m.start).unwrap_or_default();
        if !legal.contains(&m) {
            return Err(illegal(IllegalMoveReason::NotLegal));
        }

        self.play(m);
        Ok(())
    }

    /// Applies a move already known to be legal.
    pub(crate) fn play(&mut self, m: Move) {
        let Some(piece) = self.board.get(m.start) else {
            return;
        };
        match piece.kind {
            PieceType::King => self.castling.clear_color(piece.color),
            PieceType::Rook => self.castling.clear_rook_corner(m.start),
            _ => {}
        }
        // A rook captured on its corner can no longer castle either.
        self.castling.clear_rook_corner(m.end);

        let effect = self.side_effect(m);
        Self::relocate(&mut self.board, m, effect);

        self.last_move = Some(m);
        self.turn = self.turn.opposite();
        debug!(mov = %m, ?effect, "applied move");

        if !self.has_legal_move(self.turn) {
            self.over = true;
            debug!(outcome = ?self.outcome(), "game over");
        }
    }

    /// Decodes coordinate notation (e.g. `"e7e8q"`) and applies the move.
    pub fn apply_uci(&mut self, uci: &str) -> Result<Move, GameError> {
        let m = Move::from_uci(uci)?;
        self.apply_move(m)?;
        Ok(m)
    }

    /// Ends the game by resignation.
    ///
    /// Which participant resigned is tracked by the caller.
    pub fn resign(&mut self) -> Result<(), GameError> {
        if self.over {
            return Err(GameError::InvalidState);
        }
        self.over = true;
        debug!(turn = %self.turn, "game resigned");
        Ok(())
    }

    /// Returns the current position as a FEN string.
    ///
    /// The move counters are not tracked and are written as `0 1`.
    pub fn to_fen(&self) -> String {
        let en_passant = self.last_move.and_then(|last| {
            let pawn = self.board.get(last.end)?;
            if pawn.kind != PieceType::Pawn || last.row_distance() != 2 {
                return None;
            }
            last.start.offset(pawn.color.forward(), 0)
        });
        Fen {
            placement: *self.board.placement(),
            turn: self.turn,
            castling: self.castling,
            en_passant,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
        .to_string()
    }

    /// Returns the castle side if `m` is a king travelling two columns from
    /// its home square.
    fn castle_side(&self, m: Move) -> Option<(Color, CastleSide)> {
        let piece = self.board.get(m.start)?;
        if piece.kind != PieceType::King
            || m.start != CastleSide::king_home(piece.color)
            || m.row_distance() != 0
            || m.column_distance() != 2
        {
            return None;
        }
        CastleSide::from_king_destination(m.end.column()).map(|side| (piece.color, side))
    }

    /// Castling preconditions beyond geometry: the flag is still set, the
    /// king is not in check and does not cross an attacked square.
    fn may_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling.has(color, side)
            && !self.is_in_check(color)
            && !is_square_attacked(&self.board, side.pass_through(color), color.opposite())
    }

    /// Builds the en passant capture available to the pawn on `from`, if
    /// the last move was an adjacent enemy pawn's double push.
    fn en_passant_capture(&self, from: Position) -> Option<Move> {
        let pawn = self.board.get(from)?;
        if pawn.kind != PieceType::Pawn || from.row() != pawn.color.en_passant_rank() {
            return None;
        }

        let last = self.last_move?;
        let pushed = self.board.get(last.end)?;
        if !pushed.is(pawn.color.opposite(), PieceType::Pawn)
            || last.row_distance() != 2
            || last.column_distance() != 0
            || last.end.row() != from.row()
            || last.end.column().abs_diff(from.column()) != 1
        {
            return None;
        }

        let side = last.end.column() as i8 - from.column() as i8;
        let end = from.offset(pawn.color.forward(), side)?;
        Some(Move::new(from, end))
    }

    fn side_effect(&self, m: Move) -> SideEffect {
        if let Some((color, side)) = self.castle_side(m) {
            return SideEffect::Castle(color, side);
        }
        if self.en_passant_capture(m.start) == Some(m) {
            if let Some(last) = self.last_move {
                return SideEffect::EnPassant(last.end);
            }
        }
        SideEffect::None
    }

    fn relocate(board: &mut Board, m: Move, effect: SideEffect) {
        match effect {
            SideEffect::Castle(color, side) => {
                let rook = Move::new(side.rook_home(color), side.pass_through(color));
                board.apply_move(rook);
            }
            SideEffect::EnPassant(victim) => {
                board.take(victim);
            }
            SideEffect::None => {}
        }
        board.apply_move(m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn mv(uci: &str) -> Move {
        Move::from_uci(uci).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.castling(), CastlingRights::ALL);
        assert_eq!(game.last_move(), None);
        assert!(!game.is_over());
        assert!(!game.is_in_check(Color::White));
        assert_eq!(game.outcome(), None);
        assert_eq!(game.to_fen(), Fen::STARTPOS);
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let game = Game::new();
        assert_eq!(game.legal_moves_for(Color::White).len(), 20);
        assert_eq!(game.legal_moves_for(Color::Black).len(), 20);
    }

    #[test]
    fn legal_moves_of_empty_square() {
        assert_eq!(Game::new().legal_moves(pos("e4")), None);
        assert_eq!(Game::new().legal_moves(pos("e1")), Some(vec![]));
    }

    #[test]
    fn apply_move_flips_turn() {
        let mut game = Game::new();
        game.apply_move(mv("e2e4")).unwrap();
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.last_move(), Some(mv("e2e4")));
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn illegal_moves_leave_game_unchanged() {
        let mut game = Game::new();
        let before = game.clone();

        let err = game.apply_move(mv("e2e5")).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                mov: mv("e2e5"),
                reason: IllegalMoveReason::NotLegal
            }
        );

        let err = game.apply_move(mv("e4e5")).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove {
                reason: IllegalMoveReason::EmptySquare,
                ..
            }
        ));

        let err = game.apply_move(mv("e7e5")).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove {
                reason: IllegalMoveReason::WrongTurn,
                ..
            }
        ));

        assert_eq!(game, before);
    }

    #[test]
    fn pinned_piece_cannot_move() {
        // Knight on e2 is pinned by the rook on e8
        let game = Game::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert_eq!(game.legal_moves(pos("e2")), Some(vec![]));
    }

    #[test]
    fn must_answer_check() {
        let game = Game::from_fen("4k3/8/8/8/8/8/3PP3/r3K3 w - - 0 1").unwrap();
        assert!(game.is_in_check(Color::White));
        let moves = game.legal_moves_for(Color::White);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| !game.would_be_in_check(*m)));
        assert!(moves.iter().all(|m| m.start == pos("e1")));
    }

    #[test]
    fn would_be_in_check_does_not_mutate() {
        let game = Game::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let before = game.clone();
        assert!(game.would_be_in_check(mv("e2c3")));
        assert!(!game.would_be_in_check(mv("e1d1")));
        assert_eq!(game, before);
    }

    #[test]
    fn castling_kingside() {
        let mut game = Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let castle = mv("e1g1");
        assert!(game.legal_moves(pos("e1")).unwrap().contains(&castle));

        game.apply_move(castle).unwrap();
        assert_eq!(
            game.board().get(pos("g1")),
            Some(Piece::new(Color::White, PieceType::King))
        );
        assert_eq!(
            game.board().get(pos("f1")),
            Some(Piece::new(Color::White, PieceType::Rook))
        );
        assert!(game.board().is_empty(pos("h1")));
        assert!(game.board().is_empty(pos("e1")));
        assert!(!game.castling().has(Color::White, CastleSide::Kingside));
        assert!(!game.castling().has(Color::White, CastleSide::Queenside));
        assert!(game.castling().has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn castling_queenside_moves_rook_to_d_file() {
        let mut game = Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1").unwrap();
        game.apply_move(mv("e8c8")).unwrap();
        assert_eq!(
            game.board().get(pos("d8")),
            Some(Piece::new(Color::Black, PieceType::Rook))
        );
        assert!(game.board().is_empty(pos("a8")));
        assert_eq!(game.castling().to_fen(), "KQ");
    }

    #[test]
    fn no_castling_without_flag() {
        let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1").unwrap();
        let moves = game.legal_moves(pos("e1")).unwrap();
        assert!(!moves.contains(&mv("e1g1")));
        assert!(moves.contains(&mv("e1c1")));
    }

    #[test]
    fn no_castling_out_of_or_through_check() {
        // Rook on e5 gives check
        let game = Game::from_fen("r3k2r/pppp1ppp/8/4r3/8/8/PPPP1PPP/R3K2R w KQkq - 0 1").unwrap();
        let moves = game.legal_moves(pos("e1")).unwrap();
        assert!(!moves.contains(&mv("e1g1")));
        assert!(!moves.contains(&mv("e1c1")));

        // Rook on f8 covers f1 only
        let game = Game::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let moves = game.legal_moves(pos("e1")).unwrap();
        assert!(!moves.contains(&mv("e1g1")));
        assert!(moves.contains(&mv("e1c1")));

        // A pawn covering the crossed square also counts
        let game = Game::from_fen("4k3/8/8/8/8/8/4p3/R3K2R w KQ - 0 1").unwrap();
        let moves = game.legal_moves(pos("e1")).unwrap();
        assert!(!moves.contains(&mv("e1g1")));
        assert!(!moves.contains(&mv("e1c1")));
    }

    #[test]
    fn rook_move_clears_one_flag() {
        let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        game.apply_move(mv("h1h2")).unwrap();
        assert_eq!(game.castling().to_fen(), "Qkq");

        // Returning the rook does not restore the flag
        game.apply_move(mv("a8a7")).unwrap();
        game.apply_move(mv("h2h1")).unwrap();
        assert_eq!(game.castling().to_fen(), "Qk");
        assert!(!game.legal_moves(pos("e1")).unwrap().contains(&mv("e1g1")));
    }

    #[test]
    fn capturing_a_corner_rook_clears_its_flag() {
        let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        game.apply_move(mv("a1a8")).unwrap();
        assert_eq!(game.castling().to_fen(), "Kk");
    }

    #[test]
    fn en_passant_capture() {
        let mut game = Game::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
        game.apply_move(mv("d7d5")).unwrap();

        let capture = mv("e5d6");
        assert!(game.legal_moves(pos("e5")).unwrap().contains(&capture));
        game.apply_move(capture).unwrap();
        assert!(game.board().is_empty(pos("d5")));
        assert_eq!(
            game.board().get(pos("d6")),
            Some(Piece::new(Color::White, PieceType::Pawn))
        );
        assert_eq!(game.board().count(Color::Black, PieceType::Pawn), 0);
    }

    #[test]
    fn en_passant_expires_after_one_move() {
        let mut game = Game::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
        game.apply_move(mv("d7d5")).unwrap();
        game.apply_move(mv("e1e2")).unwrap();
        game.apply_move(mv("e8e7")).unwrap();
        assert!(!game.legal_moves(pos("e5")).unwrap().contains(&mv("e5d6")));
    }

    #[test]
    fn en_passant_not_after_single_steps() {
        let mut game = Game::from_fen("4k3/8/3p4/4P3/8/8/8/4K3 b - - 0 1").unwrap();
        game.apply_move(mv("d6d5")).unwrap();
        assert!(!game.legal_moves(pos("e5")).unwrap().contains(&mv("e5d6")));
    }

    #[test]
    fn en_passant_from_fen() {
        let game = Game::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        assert_eq!(game.last_move(), Some(mv("d7d5")));
        assert!(game.legal_moves(pos("e5")).unwrap().contains(&mv("e5d6")));
        assert_eq!(game.to_fen(), "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    }

    #[test]
    fn en_passant_exposing_king_is_illegal() {
        // Both pawns leave the fifth rank, opening the rook onto the king.
        let game = Game::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1").unwrap();
        assert!(!game.legal_moves(pos("e5")).unwrap().contains(&mv("e5d6")));
    }

    #[test]
    fn promotion_replaces_piece_type() {
        let mut game = Game::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let moves = game.legal_moves(pos("a7")).unwrap();
        assert_eq!(moves.len(), 4);
        assert!(!moves.contains(&mv("a7a8")));

        game.apply_move(mv("a7a8n")).unwrap();
        assert_eq!(
            game.board().get(pos("a8")),
            Some(Piece::new(Color::White, PieceType::Knight))
        );
    }

    #[test]
    fn checkmate_fools_mate() {
        let mut game = Game::new();
        for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.apply_uci(m).unwrap();
        }
        assert!(game.is_over());
        assert!(game.is_in_checkmate(Color::White));
        assert!(!game.is_in_stalemate(Color::White));
        assert_eq!(
            game.outcome(),
            Some(Outcome::Checkmate {
                winner: Color::Black
            })
        );

        let err = game.apply_uci("a2a3").unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove {
                reason: IllegalMoveReason::GameOver,
                ..
            }
        ));
    }

    #[test]
    fn stalemate() {
        let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(game.is_over());
        assert!(game.is_in_stalemate(Color::Black));
        assert!(!game.is_in_checkmate(Color::Black));
        assert_eq!(game.outcome(), Some(Outcome::Stalemate));
    }

    #[test]
    fn stalemate_by_move() {
        let mut game = Game::from_fen("7k/8/5Q2/6K1/8/8/8/8 w - - 0 1").unwrap();
        assert!(!game.is_over());
        game.apply_uci("f6f7").unwrap();
        assert!(game.is_over());
        assert_eq!(game.outcome(), Some(Outcome::Stalemate));
    }

    #[test]
    fn resign() {
        let mut game = Game::new();
        game.resign().unwrap();
        assert!(game.is_over());
        assert_eq!(game.outcome(), Some(Outcome::Resigned));
        assert_eq!(game.resign(), Err(GameError::InvalidState));
        assert!(game.apply_uci("e2e4").is_err());
    }

    #[test]
    fn from_fen_requires_both_kings() {
        assert!(matches!(
            Game::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(GameError::InvalidPosition(_))
        ));
        assert!(matches!(
            Game::from_fen("garbage"),
            Err(GameError::Fen(FenError::InvalidPartCount(1)))
        ));
    }

    #[test]
    fn apply_uci_rejects_bad_notation() {
        let mut game = Game::new();
        assert!(matches!(
            game.apply_uci("e2"),
            Err(GameError::Notation(NotationError::InvalidMove(_)))
        ));
    }

    #[test]
    fn outcome_serde() {
        let json = serde_json::to_string(&Outcome::Checkmate {
            winner: Color::White,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"checkmate","winner":"WHITE"}"#);
    }
}
