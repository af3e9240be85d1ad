//! Move enumeration.
//!
//! Enumeration is a cross product filtered by the oracle: every square
//! holding a piece of the side, against every other square on the board.
//! The scan is row-major over the source, then row-major over the
//! destination, and downstream tie-breaks rely on that order.

use crate::{GameState, MoveOracle};
use cascade_core::{Color, Move, Square};
use tracing::trace;

/// Returns every legal move for `side`, in board scan order.
///
/// An empty result means the side cannot move; checkmate and stalemate are
/// not told apart here.
pub fn enumerate_moves<O>(oracle: &O, state: &GameState, side: Color) -> Vec<Move>
where
    O: MoveOracle + ?Sized,
{
    let mut moves = Vec::new();
    for (from, piece) in state.board().squares_of(side) {
        for to in Square::all().filter(|&to| to != from) {
            if oracle.is_valid_move(state, from, to) {
                moves.push(Move::new(from, to, piece.kind));
            }
        }
    }
    trace!(side = %side, count = moves.len(), "enumerated candidate moves");
    moves
}
