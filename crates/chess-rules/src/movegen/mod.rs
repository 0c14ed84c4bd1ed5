//! Raw move generation.
//!
//! "Raw" (pseudo-legal) moves follow piece geometry only: they never look at
//! whether the mover's own king is left in check, and they do not include en
//! passant, which depends on game history. [`crate::Game`] layers legality on
//! top of these.

mod attacks;
pub mod perft;

use crate::Board;
use chess_core::{CastleSide, Color, Move, Piece, PieceType, Position};

pub use attacks::is_square_attacked;

/// Row/column deltas of the eight knight jumps.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Row/column deltas of the eight adjacent squares.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Generates the raw moves of the piece standing on `from`.
///
/// Returns an empty list when the square is empty.
pub fn raw_moves(board: &Board, from: Position) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(piece) = board.get(from) else {
        return moves;
    };

    match piece.kind {
        PieceType::Pawn => generate_pawn_moves(board, from, piece.color, &mut moves),
        PieceType::Knight => generate_step_moves(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceType::Bishop => generate_slide_moves(board, from, piece.color, &DIAGONAL, &mut moves),
        PieceType::Rook => generate_slide_moves(board, from, piece.color, &ORTHOGONAL, &mut moves),
        PieceType::Queen => {
            generate_slide_moves(board, from, piece.color, &ORTHOGONAL, &mut moves);
            generate_slide_moves(board, from, piece.color, &DIAGONAL, &mut moves);
        }
        PieceType::King => {
            generate_step_moves(board, from, piece.color, &KING_OFFSETS, &mut moves);
            generate_castling_candidates(board, from, piece.color, &mut moves);
        }
    }

    moves
}

/// Pushes a pawn move, expanding it into one move per promotion candidate
/// when it lands on the far rank.
fn push_pawn_move(from: Position, to: Position, color: Color, moves: &mut Vec<Move>) {
    if to.row() == color.promotion_rank() {
        for kind in PieceType::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Generates pawn pushes, double pushes and diagonal captures.
fn generate_pawn_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0).filter(|sq| board.is_empty(*sq)) {
        push_pawn_move(from, one, color, moves);

        if from.row() == color.pawn_rank() {
            if let Some(two) = one.offset(forward, 0).filter(|sq| board.is_empty(*sq)) {
                moves.push(Move::new(from, two));
            }
        }
    }

    for side in [-1, 1] {
        let Some(to) = from.offset(forward, side) else {
            continue;
        };
        if matches!(board.get(to), Some(target) if target.color != color) {
            push_pawn_move(from, to, color, moves);
        }
    }
}

/// Generates moves for pieces that jump to fixed offsets (knight, king).
fn generate_step_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(rows, columns) in offsets {
        let Some(to) = from.offset(rows, columns) else {
            continue;
        };
        if !matches!(board.get(to), Some(target) if target.color == color) {
            moves.push(Move::new(from, to));
        }
    }
}

/// Generates moves along rays until blocked. A ray includes the blocking
/// square when it holds an opposing piece.
fn generate_slide_moves(
    board: &Board,
    from: Position,
    color: Color,
    rays: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(rows, columns) in rays {
        let mut current = from;
        while let Some(to) = current.offset(rows, columns) {
            match board.get(to) {
                None => moves.push(Move::new(from, to)),
                Some(target) => {
                    if target.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Proposes a king move two squares toward each home-corner rook whose path
/// is clear. Whether castling is actually allowed is decided by the game.
fn generate_castling_candidates(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    if from != CastleSide::king_home(color) {
        return;
    }

    let row = color.back_rank();
    for side in CastleSide::ALL {
        let rook_present = board.get(side.rook_home(color)) == Some(Piece::new(color, PieceType::Rook));
        let path_clear = side
            .between_columns()
            .iter()
            .filter_map(|&column| Position::new(row, column))
            .all(|sq| board.is_empty(sq));
        if rook_present && path_clear {
            moves.push(Move::new(from, side.king_destination(color)));
        }
    }
}
