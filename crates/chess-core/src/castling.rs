//! Castling eligibility flags.

use crate::{Color, Position};
use serde::{Deserialize, Serialize};

/// The two directions a king can castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Returns the castle side whose king destination lies on the given
    /// column, if any (column 7 for kingside, 3 for queenside).
    pub const fn from_king_destination(column: u8) -> Option<Self> {
        match column {
            7 => Some(CastleSide::Kingside),
            3 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// The square the king starts on.
    pub const fn king_home(color: Color) -> Position {
        match color {
            Color::White => Position::E1,
            Color::Black => Position::E8,
        }
    }

    /// The corner square holding this side's rook before castling.
    pub const fn rook_home(self, color: Color) -> Position {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Position::H1,
            (CastleSide::Queenside, Color::White) => Position::A1,
            (CastleSide::Kingside, Color::Black) => Position::H8,
            (CastleSide::Queenside, Color::Black) => Position::A8,
        }
    }

    /// The square the king lands on.
    pub const fn king_destination(self, color: Color) -> Position {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Position::G1,
            (CastleSide::Queenside, Color::White) => Position::C1,
            (CastleSide::Kingside, Color::Black) => Position::G8,
            (CastleSide::Queenside, Color::Black) => Position::C8,
        }
    }

    /// The square the king crosses, which is also where the rook lands.
    pub const fn pass_through(self, color: Color) -> Position {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Position::F1,
            (CastleSide::Queenside, Color::White) => Position::D1,
            (CastleSide::Kingside, Color::Black) => Position::F8,
            (CastleSide::Queenside, Color::Black) => Position::D8,
        }
    }

    /// Columns strictly between the king and the rook.
    pub const fn between_columns(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[6, 7],
            CastleSide::Queenside => &[2, 3, 4],
        }
    }
}

/// The four castling flags.
///
/// Flags start set and can only be cleared; nothing sets a flag again once
/// the king or the matching rook has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    /// Parses the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`).
    ///
    /// Unknown characters are ignored; [`crate::Fen`] validates the field.
    pub fn from_fen(field: &str) -> Self {
        CastlingRights {
            white_kingside: field.contains('K'),
            white_queenside: field.contains('Q'),
            black_kingside: field.contains('k'),
            black_queenside: field.contains('q'),
        }
    }

    /// Returns the FEN castling field.
    pub fn to_fen(self) -> String {
        let mut field = String::new();
        for (set, c) in [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ] {
            if set {
                field.push(c);
            }
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }

    /// Returns true if the given flag is still set.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_kingside,
            (Color::White, CastleSide::Queenside) => self.white_queenside,
            (Color::Black, CastleSide::Kingside) => self.black_kingside,
            (Color::Black, CastleSide::Queenside) => self.black_queenside,
        }
    }

    /// Clears a single flag.
    #[inline]
    pub fn clear(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_kingside = false,
            (Color::White, CastleSide::Queenside) => self.white_queenside = false,
            (Color::Black, CastleSide::Kingside) => self.black_kingside = false,
            (Color::Black, CastleSide::Queenside) => self.black_queenside = false,
        }
    }

    /// Clears both flags for a color.
    #[inline]
    pub fn clear_color(&mut self, color: Color) {
        self.clear(color, CastleSide::Kingside);
        self.clear(color, CastleSide::Queenside);
    }

    /// Clears the flag whose rook starts on the given corner, if any.
    pub fn clear_rook_corner(&mut self, corner: Position) {
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if side.rook_home(color) == corner {
                    self.clear(color, side);
                }
            }
        }
    }

    /// Returns true if no flag is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.white_kingside || self.white_queenside || self.black_kingside || self.black_queenside)
    }
}
