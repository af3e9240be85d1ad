//! Move representation.

use crate::{PieceType, Square};
use serde::Serialize;
use std::fmt;

/// A candidate move: source square, destination square and the kind of piece
/// that moves.
///
/// Two moves are equal when all three fields match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceType,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceType) -> Self {
        Move { from, to, piece }
    }

    /// Returns the UCI-style coordinate notation (e.g., "e7e5").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.piece, self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
