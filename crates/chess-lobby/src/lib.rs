//! Game lobby for two-player chess.
//!
//! A [`Lobby`] hosts named games stored through a [`GameStore`]. Players take
//! a seat with [`Lobby::join`], observers subscribe with [`Lobby::observe`],
//! and moves go through [`Lobby::make_move`], which checks that the caller
//! holds the seat of the side to move before handing the move to the rules
//! engine. Each game has its own lock and its own notification channel.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Move};
//! use chess_lobby::Lobby;
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let lobby = Lobby::in_memory();
//! let id = lobby.create_game("friendly").await.unwrap();
//! lobby.join(id, "alice", Color::White).await.unwrap();
//! lobby.join(id, "bob", Color::Black).await.unwrap();
//!
//! let data = lobby.make_move(id, "alice", Move::from_uci("e2e4").unwrap()).await.unwrap();
//! assert_eq!(data.game.turn(), Color::Black);
//! # }
//! ```

pub mod config;
mod error;
mod notification;
mod service;
mod store;

pub use config::{ConfigError, LobbyConfig};
pub use error::{LobbyError, StoreError};
pub use notification::{Notification, NotificationReceiver, NotificationSender};
pub use service::Lobby;
pub use store::{GameData, GameId, GameStore, GameSummary, MemoryGameStore};
