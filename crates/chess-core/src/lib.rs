//! Core types for chess.
//!
//! This crate provides the value types shared by the rules engine and the
//! service layer:
//! - [`Piece`], [`PieceType`] and [`Color`] for piece identity
//! - [`Position`] for board coordinates (1-indexed rows and columns)
//! - [`Move`] for move descriptors
//! - [`CastlingRights`] for the four castling eligibility flags
//! - FEN parsing and serialization

mod castling;
mod color;
mod error;
mod fen;
mod mov;
mod piece;
mod position;

pub use castling::{CastleSide, CastlingRights};
pub use color::Color;
pub use error::NotationError;
pub use fen::{Fen, FenError, Placement};
pub use mov::Move;
pub use piece::{Piece, PieceType};
pub use position::Position;
