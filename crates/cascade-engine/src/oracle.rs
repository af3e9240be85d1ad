//! The move legality capability.

use crate::GameState;
use cascade_core::Square;

/// Answers whether a single `(from, to)` pair is legal in a state.
///
/// The engine treats the answer as authoritative: whatever rule set the
/// surrounding game implements (piece movement, turn ownership, check
/// avoidance, castling, en passant) lives behind this trait and is never
/// duplicated by the enumerator or the selector.
///
/// Any `Fn(&GameState, Square, Square) -> bool` is an oracle, which keeps
/// test doubles to a closure.
pub trait MoveOracle {
    /// Returns true if moving the piece on `from` to `to` is legal in `state`.
    fn is_valid_move(&self, state: &GameState, from: Square, to: Square) -> bool;
}

impl<F> MoveOracle for F
where
    F: Fn(&GameState, Square, Square) -> bool,
{
    #[inline]
    fn is_valid_move(&self, state: &GameState, from: Square, to: Square) -> bool {
        self(state, from, to)
    }
}
