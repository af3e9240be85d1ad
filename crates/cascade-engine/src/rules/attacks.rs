//! Attack geometry on the 8x8 grid.

use cascade_core::{Board, Color, Piece, PieceType, Square};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The two squares must share a row, a column, or a diagonal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row() as i8 - from.row() as i8).signum();
    let step_col = (to.col() as i8 - from.col() as i8).signum();
    let mut current = from.offset(step_row, step_col);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty_at(sq) {
            return false;
        }
        current = sq.offset(step_row, step_col);
    }
    false
}

/// Returns true if `piece`, standing on `from`, attacks `target`.
///
/// Pawns attack diagonally forward only; their pushes are not attacks.
/// Occupancy of `target` itself is not considered.
pub fn piece_attacks(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    if from == target {
        return false;
    }
    let d_row = target.row() as i8 - from.row() as i8;
    let d_col = target.col() as i8 - from.col() as i8;
    let diagonal = d_row.abs() == d_col.abs();
    let straight = d_row == 0 || d_col == 0;

    match piece.kind {
        PieceType::Pawn => d_row == piece.color.pawn_direction() && d_col.abs() == 1,
        PieceType::Knight => KNIGHT_DELTAS.contains(&(d_row, d_col)),
        PieceType::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceType::Bishop => diagonal && path_clear(board, from, target),
        PieceType::Rook => straight && path_clear(board, from, target),
        PieceType::Queen => (diagonal || straight) && path_clear(board, from, target),
    }
}

/// Returns true if any piece of `by` attacks `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board
        .squares_of(by)
        .any(|(from, piece)| piece_attacks(board, from, piece, sq))
}

/// Returns true if the king of `color` is attacked. A missing king is never attacked.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opposite()))
}
