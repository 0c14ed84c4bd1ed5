//! The 8x8 board.

use chess_core::{Color, Move, Piece, PieceType, Placement, Position};
use serde::{Deserialize, Serialize};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board owns every piece on it; relocating a piece moves it between
/// cells and never duplicates it. Two boards are equal when every cell
/// holds an equal piece. Cloning produces an independent snapshot.
///
/// Serializes as the bare grid, indexed `[row - 1][column - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: Placement,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates a board in the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (i, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][i] = Some(Piece::new(Color::White, kind));
            board.squares[1][i] = Some(Piece::new(Color::White, PieceType::Pawn));
            board.squares[6][i] = Some(Piece::new(Color::Black, PieceType::Pawn));
            board.squares[7][i] = Some(Piece::new(Color::Black, kind));
        }
        board
    }

    /// Creates a board from a FEN placement grid.
    pub const fn from_placement(squares: Placement) -> Self {
        Board { squares }
    }

    /// Returns the raw grid.
    pub fn placement(&self) -> &Placement {
        &self.squares
    }

    #[inline]
    fn cell(&self, pos: Position) -> &Option<Piece> {
        &self.squares[pos.row() as usize - 1][pos.column() as usize - 1]
    }

    #[inline]
    fn cell_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        &mut self.squares[pos.row() as usize - 1][pos.column() as usize - 1]
    }

    /// Returns the piece at the given position, if any.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        *self.cell(pos)
    }

    /// Returns true if no piece stands on the given position.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_none()
    }

    /// Puts a piece on (or clears) a cell, returning what was there.
    pub fn place(&mut self, pos: Position, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(self.cell_mut(pos), piece)
    }

    /// Removes and returns the piece at the given position.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.cell_mut(pos).take()
    }

    /// Relocates the piece at `m.start` to `m.end`, promoting it if the move
    /// names a promotion. Returns the piece previously standing on `m.end`.
    ///
    /// No legality checking is done; moving from an empty cell only clears
    /// the destination.
    pub fn apply_move(&mut self, m: Move) -> Option<Piece> {
        let mut moving = self.take(m.start);
        if let (Some(piece), Some(kind)) = (moving.as_mut(), m.promotion) {
            piece.promote(kind);
        }
        self.place(m.end, moving)
    }

    /// Returns an independent copy for what-if evaluation.
    #[inline]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Iterates over every occupied cell.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Iterates over the occupied cells of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Counts the pieces of a given color and type.
    pub fn count(&self, color: Color, kind: PieceType) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }

    /// Returns where the king of the given color stands.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceType::King)
            .map(|(pos, _)| pos)
    }
}
