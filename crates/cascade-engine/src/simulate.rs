//! Hypothetical move application.

use crate::GameState;
use cascade_core::Move;

/// Returns the state after `mv`, leaving `state` untouched.
///
/// The piece on `mv.from` is relocated to `mv.to`, the origin is cleared and
/// the other side is to move. Castling rights and the en passant target are
/// copied over unchanged. No legality check is made and no special rule is
/// applied (castling rook, en passant removal, promotion); use
/// [`StandardRules::play`](crate::StandardRules::play) for that.
pub fn apply_move(state: &GameState, mv: &Move) -> GameState {
    let board = state.board().with_relocation(mv.from, mv.to);
    state.successor(board)
}
