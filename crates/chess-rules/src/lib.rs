//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8×8 grid of optional pieces
//! - [`Game`] - game state with legality checking, turn order and termination
//! - [`GameRecord`] - serialized form of a game
//! - Pseudo-legal move generation and attack detection in [`movegen`]
//!
//! # Architecture
//!
//! Legal moves are computed in two stages. [`movegen::raw_moves`] yields the
//! moves a piece could make from its own geometry and the occupancy of the
//! board. [`Game::legal_moves`] then adds the castling conditions and en
//! passant, and drops every move that would leave the mover's king attacked,
//! testing each one on a snapshot of the board.
//!
//! # Example
//!
//! ```
//! use chess_rules::{Game, Outcome};
//! use chess_core::Color;
//!
//! let mut game = Game::new();
//! for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.apply_uci(m).unwrap();
//! }
//! assert!(game.is_in_checkmate(Color::White));
//! assert_eq!(game.outcome(), Some(Outcome::Checkmate { winner: Color::Black }));
//! ```

mod board;
mod game;
pub mod movegen;
mod record;

pub use board::Board;
pub use game::{Game, GameError, IllegalMoveReason, Outcome};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{is_square_attacked, raw_moves};
pub use record::GameRecord;
