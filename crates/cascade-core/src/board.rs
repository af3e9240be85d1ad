//! The 8x8 board grid.

use crate::{Color, Piece, PieceType, Square};
use std::fmt;

/// An 8x8 grid of optional pieces, indexed `[row][col]`.
///
/// `Board` is a plain value: copying it yields an independent grid, and the
/// editing methods consume `self` and return the edited board instead of
/// mutating in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Returns the occupant of a square.
    #[inline]
    pub const fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub const fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Returns a copy of this board with `piece` on `sq`.
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Self {
        self.cells[sq.row() as usize][sq.col() as usize] = Some(piece);
        self
    }

    /// Returns a copy of this board with `sq` cleared.
    #[must_use]
    pub fn without_piece(mut self, sq: Square) -> Self {
        self.cells[sq.row() as usize][sq.col() as usize] = None;
        self
    }

    /// Returns a copy of this board with the occupant of `from` moved to `to`.
    ///
    /// Whatever stood on `to` is overwritten. If `from` is empty, `to` ends up
    /// empty as well.
    #[must_use]
    pub fn with_relocation(mut self, from: Square, to: Square) -> Self {
        let moving = self.get(from);
        self.cells[to.row() as usize][to.col() as usize] = moving;
        self.cells[from.row() as usize][from.col() as usize] = None;
        self
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces of `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Returns the first square (row-major) holding `piece`.
    pub fn find(&self, piece: Piece) -> Option<Square> {
        self.pieces().find(|&(_, p)| p == piece).map(|(sq, _)| sq)
    }

    /// Returns true if `piece` stands anywhere on the board.
    pub fn contains(&self, piece: Piece) -> bool {
        self.find(piece).is_some()
    }

    /// Returns the square of `color`'s king, if present.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.find(Piece::new(PieceType::King, color))
    }

    /// Returns a copy of this board with every piece's color swapped.
    #[must_use]
    pub fn color_swapped(mut self) -> Self {
        for cell in self.cells.iter_mut().flatten() {
            if let Some(p) = cell {
                *p = p.swapped();
            }
        }
        self
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

/// Renders the board as a diagram with black's back row on top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8u8 {
                let cell = self.cells[row as usize][col as usize];
                let c = match cell {
                    Some(p) => p.symbol(),
                    None => '·',
                };
                write!(f, "{}", c)?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn with_piece_leaves_original_untouched() {
        let original = Board::empty();
        let edited = original.with_piece(sq(0, 0), Piece::black(PieceType::Rook));
        assert!(original.is_empty_at(sq(0, 0)));
        assert_eq!(edited.get(sq(0, 0)), Some(Piece::black(PieceType::Rook)));
    }

    #[test]
    fn relocation_overwrites_destination() {
        let board = Board::empty()
            .with_piece(sq(0, 0), Piece::black(PieceType::Rook))
            .with_piece(sq(0, 5), Piece::white(PieceType::Queen));
        let after = board.with_relocation(sq(0, 0), sq(0, 5));
        assert!(after.is_empty_at(sq(0, 0)));
        assert_eq!(after.get(sq(0, 5)), Some(Piece::black(PieceType::Rook)));
        assert_eq!(after.pieces().count(), 1);
    }

    #[test]
    fn pieces_are_row_major() {
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::black(PieceType::King))
            .with_piece(sq(0, 4), Piece::white(PieceType::King))
            .with_piece(sq(0, 1), Piece::white(PieceType::Knight));
        let squares: Vec<Square> = board.pieces().map(|(s, _)| s).collect();
        assert_eq!(squares, vec![sq(0, 1), sq(0, 4), sq(7, 4)]);
        assert_eq!(board.squares_of(Color::Black).count(), 1);
    }

    #[test]
    fn king_lookup() {
        let board = Board::empty().with_piece(sq(7, 4), Piece::black(PieceType::King));
        assert_eq!(board.king_square(Color::Black), Some(sq(7, 4)));
        assert_eq!(board.king_square(Color::White), None);
        assert!(!board.contains(Piece::white(PieceType::King)));
    }

    #[test]
    fn color_swap() {
        let board = Board::empty().with_piece(sq(3, 3), Piece::white(PieceType::Bishop));
        let swapped = board.color_swapped();
        assert_eq!(swapped.get(sq(3, 3)), Some(Piece::black(PieceType::Bishop)));
    }

    #[test]
    fn display_puts_black_on_top() {
        let board = Board::empty()
            .with_piece(sq(7, 0), Piece::black(PieceType::Rook))
            .with_piece(sq(0, 7), Piece::white(PieceType::King));
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("8 ♜"));
        assert!(lines[7].ends_with("♔"));
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
