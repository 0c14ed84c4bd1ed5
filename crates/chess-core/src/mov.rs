//! Move representation.

use crate::{NotationError, PieceType, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A move descriptor: where a piece starts, where it ends, and what it
/// promotes to when a pawn reaches the far rank.
///
/// Equality and hashing cover all three fields, so `e7e8q` and `e7e8n` are
/// different moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    #[serde(default)]
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Creates a move without promotion.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    /// Creates a promoting move.
    #[inline]
    pub const fn promoting(start: Position, end: Position, kind: PieceType) -> Self {
        Move {
            start,
            end,
            promotion: Some(kind),
        }
    }

    /// Returns the number of rows travelled, ignoring direction.
    #[inline]
    pub fn row_distance(self) -> u8 {
        self.start.row().abs_diff(self.end.row())
    }

    /// Returns the number of columns travelled, ignoring direction.
    #[inline]
    pub fn column_distance(self) -> u8 {
        self.start.column().abs_diff(self.end.column())
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.start, self.end, kind.to_char()),
            None => format!("{}{}", self.start, self.end),
        }
    }

    /// Parses a move from coordinate notation.
    pub fn from_uci(s: &str) -> Result<Self, NotationError> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(NotationError::InvalidMove(s.to_string()));
        }
        let start: Position = s[0..2].parse()?;
        let end: Position = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceType::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(NotationError::InvalidPromotion(c)),
            },
        };
        Ok(Move {
            start,
            end,
            promotion,
        })
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
