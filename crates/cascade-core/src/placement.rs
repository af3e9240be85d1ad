//! FEN piece-placement parsing and serialization.
//!
//! Only the first FEN field is handled here: eight `/`-separated ranks from
//! rank 8 down to rank 1. Rank 8 maps to row 7 and rank 1 to row 0.

use crate::{Board, Color, Piece, PieceType, Square};
use thiserror::Error;

/// Errors that can occur when parsing a piece-placement string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid placement: rank {rank} covers {squares} squares, expected 8")]
    RankWidth { rank: usize, squares: u32 },

    #[error("invalid placement: unknown character '{ch}' in rank {rank}")]
    InvalidChar { rank: usize, ch: char },
}

impl Board {
    /// The standard starting placement.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Returns the standard starting board.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for (col, kind) in Self::BACK_ROW.iter().enumerate() {
            let col = col as u8;
            for color in Color::ALL {
                let back = Square::new(color.back_row(), col);
                let pawns = Square::new(color.pawn_row(), col);
                if let (Ok(back), Ok(pawns)) = (back, pawns) {
                    board = board
                        .with_piece(back, Piece::new(*kind, color))
                        .with_piece(pawns, Piece::new(PieceType::Pawn, color));
                }
            }
        }
        board
    }

    const BACK_ROW: [PieceType; 8] = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
    ];

    /// Parses a FEN piece-placement field.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - i;
            let row = (7 - i) as u8;
            let mut width = 0u32;

            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    width += skip;
                } else if let Some(piece) = Piece::from_fen_char(ch) {
                    // Overlong ranks are rejected below.
                    if width < 8 {
                        if let Ok(sq) = Square::new(row, width as u8) {
                            board = board.with_piece(sq, piece);
                        }
                    }
                    width += 1;
                } else {
                    return Err(PlacementError::InvalidChar { rank, ch });
                }
            }

            if width != 8 {
                return Err(PlacementError::RankWidth {
                    rank,
                    squares: width,
                });
            }
        }

        Ok(board)
    }

    /// Serializes the board as a FEN piece-placement field.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in (0..8u8).rev() {
            let mut empty = 0;
            for col in 0..8u8 {
                let occupant = Square::new(row, col).ok().and_then(|sq| self.get(sq));
                match occupant {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}
