//! Board model for the cascade chess opponent.
//!
//! This crate provides the value types the decision engine works over:
//! - [`Piece`], [`PieceType`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Move`] for candidate moves
//! - [`Board`], an 8x8 grid with copy semantics
//! - FEN piece-placement parsing and serialization

mod board;
mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use board::Board;
pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceType};
pub use placement::PlacementError;
pub use square::{Square, SquareError};
