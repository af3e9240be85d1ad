//! Static material evaluation.

use cascade_core::{Board, Color, PieceType};
use serde::{Deserialize, Serialize};

/// Material value of each piece type.
///
/// The values only matter relative to each other. Missing fields fall back
/// to the standard table when deserializing, so a config may override a
/// single piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl PieceValues {
    /// The standard table: 10 / 30 / 30 / 50 / 90 / 900.
    pub const STANDARD: PieceValues = PieceValues {
        pawn: 10,
        knight: 30,
        bishop: 30,
        rook: 50,
        queen: 90,
        king: 900,
    };

    /// Returns the value of `kind`.
    #[inline]
    pub const fn value(&self, kind: PieceType) -> i32 {
        match kind {
            PieceType::Pawn => self.pawn,
            PieceType::Knight => self.knight,
            PieceType::Bishop => self.bishop,
            PieceType::Rook => self.rook,
            PieceType::Queen => self.queen,
            PieceType::King => self.king,
        }
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Scores `board` by material: black's total minus white's total.
///
/// Positive favors black, negative favors white, and an empty board scores 0.
/// The sum is taken in `i64`, so any `i32` table is safe on a full board.
pub fn evaluate(board: &Board, values: &PieceValues) -> i64 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = i64::from(values.value(piece.kind));
            match piece.color {
                Color::Black => value,
                Color::White => -value,
            }
        })
        .sum()
}

/// Scores `board` from `side`'s point of view: positive is good for `side`.
pub fn evaluate_for(board: &Board, values: &PieceValues, side: Color) -> i64 {
    match side {
        Color::Black => evaluate(board, values),
        Color::White => -evaluate(board, values),
    }
}
