//! Serialized form of a [`Game`].
//!
//! ```json
//! {
//!   "board": [[{"color": "WHITE", "type": "ROOK"}, null, ...], ...],
//!   "turn": "WHITE",
//!   "castling": {"white_kingside": true, ...},
//!   "last_move": {"start": {"row": 2, "column": 5}, "end": {"row": 4, "column": 5}, "promotion": null},
//!   "over": false
//! }
//! ```

use crate::{Board, Game, GameError};
use chess_core::{CastlingRights, Color, Move};
use serde::{Deserialize, Serialize};

/// Everything needed to resume a game: board, side to move, castling
/// flags, last move and the `over` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board: Board,
    pub turn: Color,
    #[serde(default)]
    pub castling: CastlingRights,
    #[serde(default)]
    pub last_move: Option<Move>,
    #[serde(default)]
    pub over: bool,
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        GameRecord {
            board: game.board,
            turn: game.turn,
            castling: game.castling,
            last_move: game.last_move,
            over: game.over,
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        Game::from_parts(
            record.board,
            record.turn,
            record.castling,
            record.last_move,
            record.over,
        )
    }
}
