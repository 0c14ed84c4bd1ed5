//! The lobby: seats, observers and move handling on top of a [`GameStore`].

use crate::config::LobbyConfig;
use crate::error::LobbyError;
use crate::notification::{Notification, NotificationReceiver, NotificationSender};
use crate::store::{GameData, GameId, GameStore, GameSummary, MemoryGameStore};
use chess_core::{Color, Move};
use chess_rules::{GameError, IllegalMoveReason, Outcome};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::broadcast;
use tracing::{info, warn};

/// Per-game coordination state.
struct Room {
    /// Held across every load-validate-apply-save sequence.
    lock: tokio::sync::Mutex<()>,
    notifications: NotificationSender,
}

/// Hosts any number of independent games.
///
/// Mutations of one game are serialized by that game's lock; different
/// games never contend.
pub struct Lobby<S = MemoryGameStore> {
    store: S,
    config: LobbyConfig,
    rooms: Mutex<HashMap<GameId, Arc<Room>>>,
}

impl Lobby<MemoryGameStore> {
    /// Creates a lobby backed by an in-memory store with default settings.
    pub fn in_memory() -> Self {
        Self::new(MemoryGameStore::new(), LobbyConfig::default())
    }
}

impl<S: GameStore> Lobby<S> {
    pub fn new(store: S, config: LobbyConfig) -> Self {
        Self {
            store,
            config,
            rooms: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    /// Creates a game in the starting position with both seats open.
    pub async fn create_game(&self, name: &str) -> Result<GameId, LobbyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LobbyError::BadRequest("game name is blank".to_string()));
        }
        let id = self.store.create(name)?;
        info!(game_id = id, name, "game created");
        Ok(id)
    }

    pub async fn list_games(&self) -> Result<Vec<GameSummary>, LobbyError> {
        Ok(self.store.list()?)
    }

    /// Returns the current record of a game.
    pub async fn game(&self, id: GameId) -> Result<GameData, LobbyError> {
        self.load(id)
    }

    /// Seats `user` as `color`.
    ///
    /// Rejoining a seat already held by the same user succeeds.
    pub async fn join(&self, id: GameId, user: &str, color: Color) -> Result<GameData, LobbyError> {
        let user = require_user(user)?;
        let room = self.room(id)?;
        let _guard = room.lock.lock().await;

        let mut data = self.load(id)?;
        match data.seat(color) {
            Some(holder) if holder != user => {
                warn!(game_id = id, user, %color, "seat taken");
                return Err(LobbyError::SeatTaken(color));
            }
            _ => {}
        }
        *data.seat_mut(color) = Some(user.to_string());
        self.store.save(&data)?;

        info!(game_id = id, user, %color, "player joined");
        notify(&room, Notification::message(format!("{} joined the game as {}.", user, color)));
        Ok(data)
    }

    /// Lets `user` watch a game without taking a seat.
    ///
    /// Returns the current record and a receiver for everything broadcast
    /// after this call.
    pub async fn observe(
        &self,
        id: GameId,
        user: &str,
    ) -> Result<(GameData, NotificationReceiver), LobbyError> {
        let user = require_user(user)?;
        let room = self.room(id)?;
        let _guard = room.lock.lock().await;

        let data = self.load(id)?;
        notify(&room, Notification::message(format!("{} is observing the game.", user)));
        let receiver = room.notifications.subscribe();
        info!(game_id = id, user, "observer joined");
        Ok((data, receiver))
    }

    /// Subscribes to a game's notifications without announcing anyone.
    pub fn subscribe(&self, id: GameId) -> Result<NotificationReceiver, LobbyError> {
        Ok(self.room(id)?.notifications.subscribe())
    }

    /// Frees any seat `user` holds and announces the departure.
    pub async fn leave(&self, id: GameId, user: &str) -> Result<GameData, LobbyError> {
        let user = require_user(user)?;
        let room = self.room(id)?;
        let _guard = room.lock.lock().await;

        let mut data = self.load(id)?;
        let mut vacated = false;
        for color in Color::ALL {
            if data.seat(color) == Some(user) {
                *data.seat_mut(color) = None;
                vacated = true;
            }
        }
        if vacated {
            self.store.save(&data)?;
        }

        info!(game_id = id, user, vacated, "user left");
        notify(&room, Notification::message(format!("{} has left the game.", user)));
        Ok(data)
    }

    /// Applies a move on behalf of `user`.
    ///
    /// Only the player seated on the side to move may move. On success every
    /// subscriber receives the new state followed by a description of the
    /// move and, if relevant, a check or game-end message.
    pub async fn make_move(&self, id: GameId, user: &str, mov: Move) -> Result<GameData, LobbyError> {
        let user = require_user(user)?;
        let room = self.room(id)?;
        let _guard = room.lock.lock().await;

        let mut data = self.load(id)?;
        if data.game.is_over() {
            return Err(GameError::IllegalMove {
                mov,
                reason: IllegalMoveReason::GameOver,
            }
            .into());
        }
        if data.color_of(user).is_none() {
            warn!(game_id = id, user, mov = %mov, "move from non-participant");
            return Err(LobbyError::NotAParticipant(user.to_string()));
        }
        if data.seat(data.game.turn()) != Some(user) {
            warn!(game_id = id, user, mov = %mov, "move out of turn");
            return Err(LobbyError::NotYourTurn(user.to_string()));
        }

        if let Err(e) = data.game.apply_move(mov) {
            warn!(game_id = id, user, error = %e, "move rejected");
            return Err(e.into());
        }
        self.store.save(&data)?;
        info!(game_id = id, user, mov = %mov, "move applied");

        notify(&room, Notification::LoadGame { game: data.game.clone() });
        if let Some(piece) = data.game.board().get(mov.end) {
            notify(
                &room,
                Notification::message(format!(
                    "{} moved {} from {} to {}.",
                    user, piece, mov.start, mov.end
                )),
            );
        }
        if let Some(text) = status_message(&data) {
            notify(&room, Notification::message(text));
        }
        Ok(data)
    }

    /// Ends the game by resignation of a seated player.
    pub async fn resign(&self, id: GameId, user: &str) -> Result<GameData, LobbyError> {
        let user = require_user(user)?;
        let room = self.room(id)?;
        let _guard = room.lock.lock().await;

        let mut data = self.load(id)?;
        if data.color_of(user).is_none() {
            warn!(game_id = id, user, "resignation from non-participant");
            return Err(LobbyError::NotAParticipant(user.to_string()));
        }
        data.game.resign()?;
        self.store.save(&data)?;

        info!(game_id = id, user, "player resigned");
        notify(&room, Notification::message(format!("{} has resigned the game.", user)));
        Ok(data)
    }

    fn load(&self, id: GameId) -> Result<GameData, LobbyError> {
        self.store.get(id)?.ok_or(LobbyError::GameNotFound(id))
    }

    /// Returns the room of an existing game, creating it on first use.
    fn room(&self, id: GameId) -> Result<Arc<Room>, LobbyError> {
        let mut rooms = self.rooms.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(room) = rooms.get(&id) {
            return Ok(Arc::clone(room));
        }
        if self.store.get(id)?.is_none() {
            return Err(LobbyError::GameNotFound(id));
        }
        let (notifications, _) = broadcast::channel(self.config.broadcast_capacity);
        let room = Arc::new(Room {
            lock: tokio::sync::Mutex::new(()),
            notifications,
        });
        rooms.insert(id, Arc::clone(&room));
        Ok(room)
    }
}

fn require_user(user: &str) -> Result<&str, LobbyError> {
    let user = user.trim();
    if user.is_empty() {
        return Err(LobbyError::BadRequest("user name is blank".to_string()));
    }
    Ok(user)
}

fn notify(room: &Room, notification: Notification) {
    // No receivers is fine
    let _ = room.notifications.send(notification);
}

fn status_message(data: &GameData) -> Option<String> {
    let game = &data.game;
    let turn = game.turn();
    let name = |color: Color| data.seat(color).unwrap_or("nobody").to_string();
    match game.outcome() {
        Some(Outcome::Checkmate { winner }) => Some(format!(
            "Checkmate! {} ({}) wins.",
            name(winner),
            winner
        )),
        Some(Outcome::Stalemate) => Some("Stalemate. The game is drawn.".to_string()),
        Some(Outcome::Resigned) => None,
        None if game.is_in_check(turn) => Some(format!("{} ({}) is in check.", name(turn), turn)),
        None => None,
    }
}
