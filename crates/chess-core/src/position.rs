//! Board coordinates.

use crate::NotationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A square on the board addressed by row and column, both in `1..=8`.
///
/// Row 1 is White's back rank and column 1 is the a-file, so `e4` is
/// `(row 4, column 5)`. A `Position` can only be constructed on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    column: u8,
}

#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    column: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = NotationError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.column).ok_or(NotationError::OutOfBounds {
            row: raw.row,
            column: raw.column,
        })
    }
}

impl Position {
    /// Creates a position, or `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Option<Self> {
        if row >= 1 && row <= 8 && column >= 1 && column <= 8 {
            Some(Position { row, column })
        } else {
            None
        }
    }

    /// Returns the row (1-8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (1-8).
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the position shifted by the given deltas, if still on the board.
    #[inline]
    pub fn offset(self, rows: i8, columns: i8) -> Option<Self> {
        let row = self.row as i8 + rows;
        let column = self.column as i8 + columns;
        if (1..=8).contains(&row) && (1..=8).contains(&column) {
            Some(Position {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 positions, row by row starting at a1.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |column| Position { row, column }))
    }

    /// Parses algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Position::new(rank - b'0', file - b'a' + 1)
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.row)
    }

    /// Returns the file letter (`'a'`-`'h'`).
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.column - 1) as char
    }

    pub const A1: Position = Position { row: 1, column: 1 };
    pub const B1: Position = Position { row: 1, column: 2 };
    pub const C1: Position = Position { row: 1, column: 3 };
    pub const D1: Position = Position { row: 1, column: 4 };
    pub const E1: Position = Position { row: 1, column: 5 };
    pub const F1: Position = Position { row: 1, column: 6 };
    pub const G1: Position = Position { row: 1, column: 7 };
    pub const H1: Position = Position { row: 1, column: 8 };
    pub const A8: Position = Position { row: 8, column: 1 };
    pub const B8: Position = Position { row: 8, column: 2 };
    pub const C8: Position = Position { row: 8, column: 3 };
    pub const D8: Position = Position { row: 8, column: 4 };
    pub const E8: Position = Position { row: 8, column: 5 };
    pub const F8: Position = Position { row: 8, column: 6 };
    pub const G8: Position = Position { row: 8, column: 7 };
    pub const H8: Position = Position { row: 8, column: 8 };
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s).ok_or_else(|| NotationError::InvalidPosition(s.to_string()))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
