//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{CastlingRights, Color, Piece, Position};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Piece placement indexed as `[row - 1][column - 1]`.
pub type Placement = [[Option<Piece>; 8]; 8];

/// A parsed FEN record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    pub placement: Placement,
    pub turn: Color,
    pub castling: CastlingRights,
    /// The square a pawn skipped over on the previous double push.
    pub en_passant: Option<Position>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_placement(parts[0])?;

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = Self::parse_castling(parts[2])?;
        let en_passant = Self::parse_en_passant(parts[3])?;

        let halfmove_clock = parts[4]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;

        let fullmove_number = parts[5]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;

        Ok(Fen {
            placement,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_placement(field: &str) -> Result<Placement, FenError> {
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut placement: Placement = [[None; 8]; 8];
        for (i, rank) in ranks.iter().enumerate() {
            let row = 7 - i; // FEN starts from rank 8
            let mut column = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    column += skip as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if column < 8 {
                        placement[row][column] = Some(piece);
                    }
                    column += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        row + 1
                    )));
                }
            }
            if column != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    row + 1,
                    column
                )));
            }
        }

        Ok(placement)
    }

    fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
        if field == "-" {
            return Ok(CastlingRights::NONE);
        }

        for c in field.chars() {
            if !"KQkq".contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )));
            }
        }

        Ok(CastlingRights::from_fen(field))
    }

    fn parse_en_passant(field: &str) -> Result<Option<Position>, FenError> {
        if field == "-" {
            return Ok(None);
        }

        match Position::from_algebraic(field) {
            Some(pos) if pos.row() == 3 || pos.row() == 6 => Ok(Some(pos)),
            _ => Err(FenError::InvalidEnPassantSquare(field.to_string())),
        }
    }

    /// Returns the piece placement field.
    pub fn placement_field(&self) -> String {
        let mut field = String::new();
        for row in (0..8).rev() {
            let mut empty_count = 0;
            for cell in &self.placement[row] {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            field.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        field.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                field.push_str(&empty_count.to_string());
            }
            if row > 0 {
                field.push('/');
            }
        }
        field
    }
}

impl FromStr for Fen {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fen::parse(s)
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let en_passant = self
            .en_passant
            .map(Position::to_algebraic)
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} {} {} {} {} {}",
            self.placement_field(),
            turn,
            self.castling.to_fen(),
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}
