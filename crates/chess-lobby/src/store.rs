//! Game storage collaborator.
//!
//! The lobby never keeps a live [`Game`] between calls: every operation
//! loads the record, validates, applies and saves it back through a
//! [`GameStore`].

use crate::error::StoreError;
use chess_core::Color;
use chess_rules::Game;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Identifier assigned to a game by its store.
pub type GameId = u32;

/// A stored game together with its name and seated players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub game_id: GameId,
    pub game_name: String,
    pub white: Option<String>,
    pub black: Option<String>,
    pub game: Game,
}

impl GameData {
    /// Creates a fresh game with both seats empty.
    pub fn new(game_id: GameId, game_name: impl Into<String>) -> Self {
        Self {
            game_id,
            game_name: game_name.into(),
            white: None,
            black: None,
            game: Game::new(),
        }
    }

    /// Returns who holds the seat of `color`.
    pub fn seat(&self, color: Color) -> Option<&str> {
        match color {
            Color::White => self.white.as_deref(),
            Color::Black => self.black.as_deref(),
        }
    }

    pub fn seat_mut(&mut self, color: Color) -> &mut Option<String> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Returns the color `user` plays, if seated. A user holding both seats
    /// is reported as the side to move.
    pub fn color_of(&self, user: &str) -> Option<Color> {
        let turn = self.game.turn();
        [turn, turn.opposite()]
            .into_iter()
            .find(|&color| self.seat(color) == Some(user))
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            game_id: self.game_id,
            game_name: self.game_name.clone(),
            white: self.white.clone(),
            black: self.black.clone(),
            over: self.game.is_over(),
        }
    }
}

/// Listing entry for a stored game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: GameId,
    pub game_name: String,
    pub white: Option<String>,
    pub black: Option<String>,
    pub over: bool,
}

/// Persistence for game records.
///
/// Implementations need not serialize access to a single game; the lobby
/// holds a per-game lock around every load/save pair.
pub trait GameStore: Send + Sync {
    /// Stores a new game in the starting position and returns its id.
    fn create(&self, name: &str) -> Result<GameId, StoreError>;

    /// Loads a game, or `None` if the id is unknown.
    fn get(&self, id: GameId) -> Result<Option<GameData>, StoreError>;

    /// Replaces a stored game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the game was never created.
    fn save(&self, data: &GameData) -> Result<(), StoreError>;

    /// Lists every stored game in id order.
    fn list(&self) -> Result<Vec<GameSummary>, StoreError>;
}

/// In-memory store keeping each game as serialized JSON.
#[derive(Debug)]
pub struct MemoryGameStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug)]
struct MemoryInner {
    next_id: GameId,
    games: BTreeMap<GameId, String>,
}

impl Default for MemoryGameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryInner {
                next_id: 1,
                games: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GameStore for MemoryGameStore {
    fn create(&self, name: &str) -> Result<GameId, StoreError> {
        let mut inner = self.lock();
        let id = inner.next_id;
        let json = serde_json::to_string(&GameData::new(id, name))?;
        inner.games.insert(id, json);
        inner.next_id += 1;
        Ok(id)
    }

    fn get(&self, id: GameId) -> Result<Option<GameData>, StoreError> {
        let inner = self.lock();
        inner
            .games
            .get(&id)
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(StoreError::from)
    }

    fn save(&self, data: &GameData) -> Result<(), StoreError> {
        let json = serde_json::to_string(data)?;
        let mut inner = self.lock();
        match inner.games.get_mut(&data.game_id) {
            Some(slot) => {
                *slot = json;
                Ok(())
            }
            None => Err(StoreError::NotFound(data.game_id)),
        }
    }

    fn list(&self) -> Result<Vec<GameSummary>, StoreError> {
        let inner = self.lock();
        inner
            .games
            .values()
            .map(|json| serde_json::from_str::<GameData>(json).map(|data| data.summary()))
            .collect::<Result<Vec<_>, serde_json::Error>>()
            .map_err(StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = MemoryGameStore::new();
        assert_eq!(store.create("first").unwrap(), 1);
        assert_eq!(store.create("second").unwrap(), 2);

        let data = store.get(2).unwrap().unwrap();
        assert_eq!(data.game_name, "second");
        assert_eq!(data.white, None);
        assert_eq!(data.game, Game::new());
    }

    #[test]
    fn test_get_unknown_game() {
        let store = MemoryGameStore::new();
        assert!(store.get(7).unwrap().is_none());
    }

    #[test]
    fn test_save_round_trips_through_json() {
        let store = MemoryGameStore::new();
        let id = store.create("casual").unwrap();

        let mut data = store.get(id).unwrap().unwrap();
        data.white = Some("alice".to_string());
        data.game.apply_uci("e2e4").unwrap();
        store.save(&data).unwrap();

        let loaded = store.get(id).unwrap().unwrap();
        assert_eq!(loaded, data);
        assert_eq!(loaded.game.turn(), Color::Black);
    }

    #[test]
    fn test_save_unknown_game_fails() {
        let store = MemoryGameStore::new();
        let result = store.save(&GameData::new(3, "ghost"));
        assert!(matches!(result, Err(StoreError::NotFound(3))));
    }

    #[test]
    fn test_list_in_id_order() {
        let store = MemoryGameStore::new();
        store.create("a").unwrap();
        store.create("b").unwrap();
        let names: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|s| s.game_name)
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_color_of() {
        let mut data = GameData::new(1, "g");
        data.white = Some("alice".to_string());
        data.black = Some("bob".to_string());
        assert_eq!(data.color_of("alice"), Some(Color::White));
        assert_eq!(data.color_of("bob"), Some(Color::Black));
        assert_eq!(data.color_of("carol"), None);

        data.black = Some("alice".to_string());
        data.game.apply_uci("e2e4").unwrap();
        assert_eq!(data.color_of("alice"), Some(Color::Black));
    }
}
