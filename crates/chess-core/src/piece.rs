//! Chess piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Promotion candidates, in the order they are generated.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Returns the lowercase letter used in FEN and coordinate notation.
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Parses a piece letter, ignoring case.
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Returns true if a pawn may promote to this type.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight
        )
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: its owner and its type.
///
/// The type changes only through [`Piece::promote`]; the color never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }

    /// Replaces the piece type in place, keeping the color.
    #[inline]
    pub fn promote(&mut self, kind: PieceType) {
        self.kind = kind;
    }

    /// Returns true if this piece has the given color and type.
    #[inline]
    pub fn is(self, color: Color, kind: PieceType) -> bool {
        self.color == color && self.kind == kind
    }

    /// Returns the FEN character (uppercase for White).
    pub const fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN character into a piece.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match PieceType::from_char(c) {
            Some(kind) => Some(Piece { color, kind }),
            None => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_fen() {
        assert_eq!(Piece::new(Color::White, PieceType::Pawn).to_fen_char(), 'P');
        assert_eq!(Piece::new(Color::Black, PieceType::Pawn).to_fen_char(), 'p');
        assert_eq!(Piece::new(Color::White, PieceType::King).to_fen_char(), 'K');
        assert_eq!(Piece::new(Color::Black, PieceType::Knight).to_fen_char(), 'n');
    }

    #[test]
    fn piece_from_fen() {
        assert_eq!(
            Piece::from_fen_char('P'),
            Some(Piece::new(Color::White, PieceType::Pawn))
        );
        assert_eq!(
            Piece::from_fen_char('q'),
            Some(Piece::new(Color::Black, PieceType::Queen))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn promote_keeps_color() {
        let mut piece = Piece::new(Color::Black, PieceType::Pawn);
        piece.promote(PieceType::Knight);
        assert_eq!(piece, Piece::new(Color::Black, PieceType::Knight));
    }

    #[test]
    fn promotion_targets() {
        for kind in PieceType::PROMOTIONS {
            assert!(kind.is_promotion_target());
        }
        assert!(!PieceType::Pawn.is_promotion_target());
        assert!(!PieceType::King.is_promotion_target());
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Piece::new(Color::White, PieceType::Rook)).unwrap();
        assert_eq!(json, r#"{"color":"WHITE","type":"ROOK"}"#);
    }

    #[test]
    fn display() {
        let piece = Piece::new(Color::White, PieceType::Queen);
        assert_eq!(piece.to_string(), "White Queen");
    }
}
