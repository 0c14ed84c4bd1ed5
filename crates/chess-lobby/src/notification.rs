//! Notifications broadcast to everyone watching a game.

use chess_rules::Game;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages pushed to a game's participants and observers.
///
/// All messages use snake_case tag names for JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// The game changed; carries the full state for redrawing.
    LoadGame {
        game: Game,
    },
    /// Human-readable event text.
    Message {
        text: String,
    },
}

impl Notification {
    pub fn message(text: impl Into<String>) -> Self {
        Notification::Message { text: text.into() }
    }
}

/// Broadcast channel sender for one game's notifications.
pub type NotificationSender = broadcast::Sender<Notification>;

/// Broadcast channel receiver handed to observers.
pub type NotificationReceiver = broadcast::Receiver<Notification>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_string(&Notification::message("alice joined")).unwrap();
        assert_eq!(json, r#"{"type":"message","text":"alice joined"}"#);
    }

    #[test]
    fn test_load_game_round_trip() {
        let mut game = Game::new();
        game.apply_uci("g1f3").unwrap();
        let msg = Notification::LoadGame { game };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"load_game\""));
        assert!(json.contains("\"turn\":\"BLACK\""));

        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
