//! Standard chess rules.

use super::attacks::{is_king_attacked, is_square_attacked, piece_attacks};
use super::GameOutcome;
use crate::{enumerate_moves, GameState, MoveOracle};
use cascade_core::{Board, Color, Move, Piece, PieceType, Square};

/// How a legal `(from, to)` pair is carried out on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveKind {
    Normal,
    DoublePush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// Standard chess rules.
///
/// Implements:
/// - Turn ownership and piece movement, including blocked sliders
/// - Pawn double pushes, en passant and promotion (always to a queen)
/// - Castling through the rights carried in [`GameState`]
/// - Check avoidance: no move may leave the mover's king attacked
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl MoveOracle for StandardRules {
    fn is_valid_move(&self, state: &GameState, from: Square, to: Square) -> bool {
        match self.classify(state, from, to) {
            Some(kind) => {
                let board = self.board_after(state, from, to, kind);
                !is_king_attacked(&board, state.current_player())
            }
            None => false,
        }
    }
}

impl StandardRules {
    /// Applies a legal move to the real game state.
    ///
    /// Unlike [`apply_move`](crate::apply_move), this carries out the special
    /// rules: the rook moves when castling, an en passant capture removes the
    /// passed pawn, pawns promote to queens, and castling rights and the en
    /// passant target are updated. The move is assumed legal.
    pub fn play(&self, state: &GameState, mv: Move) -> GameState {
        let us = state.current_player();
        let kind = self
            .classify(state, mv.from, mv.to)
            .unwrap_or(MoveKind::Normal);
        let board = self.board_after(state, mv.from, mv.to, kind);

        let mut castling = state.castling();
        if mv.piece == PieceType::King {
            castling = castling.without_color(us);
        }
        // A rook leaving or being captured on its home corner loses that right.
        for sq in [mv.from, mv.to] {
            for color in Color::ALL {
                if sq.row() == color.back_row() && sq.col() == 7 {
                    castling = castling.without_kingside(color);
                }
                if sq.row() == color.back_row() && sq.col() == 0 {
                    castling = castling.without_queenside(color);
                }
            }
        }

        let en_passant = match kind {
            MoveKind::DoublePush => mv.from.offset(us.pawn_direction(), 0),
            _ => None,
        };

        state
            .successor(board)
            .with_castling(castling)
            .with_en_passant(en_passant)
    }

    /// Returns true if `color`'s king is attacked in `state`.
    pub fn is_in_check(&self, state: &GameState, color: Color) -> bool {
        is_king_attacked(state.board(), color)
    }

    /// Classifies a position where the side to move has no legal move.
    ///
    /// Returns `None` while the side to move still has a move.
    pub fn outcome(&self, state: &GameState) -> Option<GameOutcome> {
        let side = state.current_player();
        if !enumerate_moves(self, state, side).is_empty() {
            return None;
        }
        if self.is_in_check(state, side) {
            Some(GameOutcome::Checkmate {
                winner: side.opposite(),
            })
        } else {
            Some(GameOutcome::Stalemate)
        }
    }

    /// Checks everything except whether the mover's own king ends up attacked.
    fn classify(&self, state: &GameState, from: Square, to: Square) -> Option<MoveKind> {
        let board = state.board();
        let us = state.current_player();
        let piece = board.get(from)?;
        if piece.color != us || from == to {
            return None;
        }
        let target = board.get(to);
        if target.is_some_and(|t| t.color == us) {
            return None;
        }

        match piece.kind {
            PieceType::Pawn => self.classify_pawn(state, from, to, target),
            PieceType::King if to.row() == from.row() && to.col().abs_diff(from.col()) == 2 => {
                self.classify_castle(state, from, to)
            }
            _ if piece_attacks(board, from, piece, to) => Some(MoveKind::Normal),
            _ => None,
        }
    }

    fn classify_pawn(
        &self,
        state: &GameState,
        from: Square,
        to: Square,
        target: Option<Piece>,
    ) -> Option<MoveKind> {
        let board = state.board();
        let us = state.current_player();
        let dir = us.pawn_direction();
        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;

        if d_col == 0 && target.is_none() {
            if d_row == dir {
                return Some(MoveKind::Normal);
            }
            let skipped = from.offset(dir, 0)?;
            if d_row == 2 * dir && from.row() == us.pawn_row() && board.is_empty_at(skipped) {
                return Some(MoveKind::DoublePush);
            }
            return None;
        }

        if d_row == dir && d_col.abs() == 1 {
            if target.is_some() {
                return Some(MoveKind::Normal);
            }
            if state.en_passant() == Some(to) {
                let passed = Square::new(from.row(), to.col()).ok()?;
                let victim = board.get(passed)?;
                if victim == Piece::new(PieceType::Pawn, us.opposite()) {
                    return Some(MoveKind::EnPassant);
                }
            }
        }
        None
    }

    fn classify_castle(&self, state: &GameState, from: Square, to: Square) -> Option<MoveKind> {
        let board = state.board();
        let us = state.current_player();
        let row = us.back_row();
        if from.row() != row || from.col() != 4 {
            return None;
        }
        let kingside = to.col() == 6;
        let allowed = if kingside {
            state.castling().can_castle_kingside(us)
        } else {
            state.castling().can_castle_queenside(us)
        };
        if !allowed {
            return None;
        }

        let (rook_col, between, crossed): (u8, &[u8], u8) = if kingside {
            (7, &[5, 6], 5)
        } else {
            (0, &[1, 2, 3], 3)
        };
        let rook_home = Square::new(row, rook_col).ok()?;
        if board.get(rook_home) != Some(Piece::new(PieceType::Rook, us)) {
            return None;
        }
        for &col in between {
            if !board.is_empty_at(Square::new(row, col).ok()?) {
                return None;
            }
        }
        let them = us.opposite();
        let crossed = Square::new(row, crossed).ok()?;
        if is_square_attacked(board, from, them) || is_square_attacked(board, crossed, them) {
            return None;
        }

        Some(if kingside {
            MoveKind::CastleKingside
        } else {
            MoveKind::CastleQueenside
        })
    }

    fn board_after(&self, state: &GameState, from: Square, to: Square, kind: MoveKind) -> Board {
        let us = state.current_player();
        let mut board = state.board().with_relocation(from, to);

        let promotes = to.row() == us.opposite().back_row()
            && board.get(to) == Some(Piece::new(PieceType::Pawn, us));
        if promotes {
            board = board.with_piece(to, Piece::new(PieceType::Queen, us));
        }

        match kind {
            MoveKind::EnPassant => {
                if let Ok(passed) = Square::new(from.row(), to.col()) {
                    board = board.without_piece(passed);
                }
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let row = us.back_row();
                let (rook_from, rook_to) = if kind == MoveKind::CastleKingside {
                    (7, 5)
                } else {
                    (0, 3)
                };
                if let (Ok(rook_from), Ok(rook_to)) =
                    (Square::new(row, rook_from), Square::new(row, rook_to))
                {
                    board = board.with_relocation(rook_from, rook_to);
                }
            }
            MoveKind::Normal | MoveKind::DoublePush => {}
        }
        board
    }
}
