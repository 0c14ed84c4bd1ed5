//! Attack detection.

use super::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};
use crate::Board;
use chess_core::{Color, PieceType, Position};

/// Returns true if any piece of `by_color` attacks `sq`.
///
/// Looks outward from the target square instead of generating every enemy
/// move. For an occupied target this agrees with asking whether any enemy
/// raw move ends on it; unlike raw moves it also counts pawn diagonals onto
/// empty squares, which is what castling needs for the square the king
/// crosses.
pub fn is_square_attacked(board: &Board, sq: Position, by_color: Color) -> bool {
    let holds = |pos: Position, kinds: &[PieceType]| {
        matches!(board.get(pos), Some(p) if p.color == by_color && kinds.contains(&p.kind))
    };

    // A pawn attacks one row forward, so look one row backward from its view.
    let pawn_row = -by_color.forward();
    for side in [-1, 1] {
        if sq
            .offset(pawn_row, side)
            .is_some_and(|from| holds(from, &[PieceType::Pawn]))
        {
            return true;
        }
    }

    if KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(r, c)| sq.offset(r, c))
        .any(|from| holds(from, &[PieceType::Knight]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .filter_map(|&(r, c)| sq.offset(r, c))
        .any(|from| holds(from, &[PieceType::King]))
    {
        return true;
    }

    let rays = [
        (&ORTHOGONAL, [PieceType::Rook, PieceType::Queen]),
        (&DIAGONAL, [PieceType::Bishop, PieceType::Queen]),
    ];
    for (directions, sliders) in rays {
        for &(rows, columns) in directions {
            let mut current = sq;
            while let Some(next) = current.offset(rows, columns) {
                if board.get(next).is_some() {
                    if holds(next, &sliders) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
    }

    false
}
