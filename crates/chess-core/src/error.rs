//! Notation errors for positions and moves.

use thiserror::Error;

/// Errors that can occur when decoding coordinates or moves.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("position off the board: row {row}, column {column}")]
    OutOfBounds { row: u8, column: u8 },

    #[error("invalid move notation: {0}")]
    InvalidMove(String),

    #[error("invalid promotion piece: '{0}'")]
    InvalidPromotion(char),
}
