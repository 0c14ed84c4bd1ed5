use crate::store::GameId;
use chess_core::Color;
use chess_rules::GameError;
use thiserror::Error;

/// Errors raised by a [`GameStore`](crate::GameStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game {0} not found")]
    NotFound(GameId),

    #[error("failed to encode game record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors returned by [`Lobby`](crate::Lobby) operations.
#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("game {0} not found")]
    GameNotFound(GameId),

    #[error("{0} seat is already taken")]
    SeatTaken(Color),

    #[error("{0} is not playing in this game")]
    NotAParticipant(String),

    #[error("it is not {0}'s turn")]
    NotYourTurn(String),

    #[error(transparent)]
    Rules(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
