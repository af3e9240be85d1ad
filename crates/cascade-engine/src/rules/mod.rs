//! Reference rule set.
//!
//! The decision engine only needs a [`MoveOracle`](crate::MoveOracle). This
//! module supplies [`StandardRules`], an oracle implementing ordinary chess
//! movement, together with the pieces a game driver needs around it: real
//! move application and terminal-position classification.

mod attacks;
mod standard;

pub use attacks::{is_king_attacked, is_square_attacked, piece_attacks};
pub use standard::StandardRules;

use cascade_core::Color;

/// How a game ended when the side to move has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The side to move is in check with no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check but has no legal move.
    Stalemate,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameOutcome::Stalemate => write!(f, "stalemate"),
        }
    }
}
