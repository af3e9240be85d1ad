//! Tiered move selection.
//!
//! The selector runs a strict priority cascade over the candidate moves of
//! the automated side. The first tier that yields anything decides the move
//! and later tiers are never consulted:
//!
//! 1. **Capture** - the capture of the most valuable opponent piece. Ties keep
//!    enumeration order.
//! 2. **King capture** - any move after which the opponent king is no longer
//!    on the board.
//! 3. **Development** - a knight, bishop or queen leaving its back two rows.
//! 4. **Fallback** - any candidate.
//!
//! Tiers 2-4 pick uniformly through the injected [`Chooser`].

use crate::{apply_move, enumerate_moves, Chooser, GameState, MoveOracle, PieceValues};
use cascade_core::{Board, Color, Move, Piece, PieceType};
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;
use tracing::debug;

/// The cascade stage that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Capture,
    KingCapture,
    Development,
    Fallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Capture => "capture",
            Tier::KingCapture => "king capture",
            Tier::Development => "development",
            Tier::Fallback => "fallback",
        };
        write!(f, "{}", name)
    }
}

/// A chosen move and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub tier: Tier,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mv, self.tier)
    }
}

/// Returns true if `mv` develops a minor piece or queen for `side`: a knight,
/// bishop or queen moving from `side`'s back two rows to beyond them.
///
/// For black that is from row 6 or 7 to row 5 or lower; for white it is the
/// mirror image.
pub fn is_developing(mv: &Move, side: Color) -> bool {
    let developable = matches!(
        mv.piece,
        PieceType::Knight | PieceType::Bishop | PieceType::Queen
    );
    let leaves_home = match side {
        Color::Black => mv.from.row() >= 6 && mv.to.row() <= 5,
        Color::White => mv.from.row() <= 1 && mv.to.row() >= 2,
    };
    developable && leaves_home
}

/// Picks one move per turn for the automated side.
///
/// The selector holds no game state between calls; `&mut self` is only
/// needed because the chooser may advance an RNG.
#[derive(Debug, Clone)]
pub struct MoveSelector<O, C> {
    oracle: O,
    chooser: C,
    values: PieceValues,
    side: Color,
}

impl<O: MoveOracle, C: Chooser> MoveSelector<O, C> {
    /// Creates a selector playing black with the standard piece values.
    pub fn new(oracle: O, chooser: C) -> Self {
        MoveSelector {
            oracle,
            chooser,
            values: PieceValues::default(),
            side: Color::Black,
        }
    }

    /// Replaces the piece-value table used to rank captures.
    #[must_use]
    pub fn with_values(mut self, values: PieceValues) -> Self {
        self.values = values;
        self
    }

    /// Sets the side the selector moves for.
    #[must_use]
    pub fn with_side(mut self, side: Color) -> Self {
        self.side = side;
        self
    }

    pub fn side(&self) -> Color {
        self.side
    }

    pub fn values(&self) -> &PieceValues {
        &self.values
    }

    /// Returns the move to play, or `None` if the side has no legal move.
    pub fn select_move(&mut self, state: &GameState) -> Option<Move> {
        self.decide(state).map(|d| d.mv)
    }

    /// Like [`select_move`](Self::select_move), also reporting the deciding tier.
    pub fn decide(&mut self, state: &GameState) -> Option<Decision> {
        let candidates = enumerate_moves(&self.oracle, state, self.side);
        self.decide_among(state, &candidates)
    }

    /// Runs the cascade over an already enumerated candidate set.
    pub fn decide_among(&mut self, state: &GameState, candidates: &[Move]) -> Option<Decision> {
        if candidates.is_empty() {
            debug!(side = %self.side, "no candidate moves");
            return None;
        }

        if let Some(mv) = self.best_capture(state.board(), candidates) {
            return Some(self.decided(mv, Tier::Capture, candidates.len()));
        }

        let king_captures = self.king_captures(state, candidates);
        if let Some(&mv) = self.chooser.choose(&king_captures) {
            return Some(self.decided(mv, Tier::KingCapture, king_captures.len()));
        }

        let developing: Vec<Move> = candidates
            .iter()
            .copied()
            .filter(|mv| is_developing(mv, self.side))
            .collect();
        if let Some(&mv) = self.chooser.choose(&developing) {
            return Some(self.decided(mv, Tier::Development, developing.len()));
        }

        let &mv = self.chooser.choose(candidates)?;
        Some(self.decided(mv, Tier::Fallback, candidates.len()))
    }

    /// The capture with the highest captured value, first in scan order on ties.
    fn best_capture(&self, board: &Board, candidates: &[Move]) -> Option<Move> {
        let opponent = self.side.opposite();
        let mut captures: Vec<(Move, i32)> = candidates
            .iter()
            .filter_map(|&mv| {
                board
                    .get(mv.to)
                    .filter(|target| target.color == opponent)
                    .map(|target| (mv, self.values.value(target.kind)))
            })
            .collect();
        // sort_by_key is stable, so equal values keep enumeration order.
        captures.sort_by_key(|&(_, value)| Reverse(value));
        captures.first().map(|&(mv, _)| mv)
    }

    /// Candidates whose simulated result has no opponent king left.
    fn king_captures(&self, state: &GameState, candidates: &[Move]) -> Vec<Move> {
        let opponent_king = Piece::new(PieceType::King, self.side.opposite());
        candidates
            .iter()
            .copied()
            .filter(|mv| !apply_move(state, mv).board().contains(opponent_king))
            .collect()
    }

    fn decided(&self, mv: Move, tier: Tier, pool: usize) -> Decision {
        debug!(side = %self.side, %tier, mv = %mv, pool, "selected move");
        Decision { mv, tier }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FirstChooser, StandardRules};
    use cascade_core::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn mv(from: (u8, u8), to: (u8, u8), piece: PieceType) -> Move {
        Move::new(sq(from.0, from.1), sq(to.0, to.1), piece)
    }

    /// Always picks the last element, to tell "first in scan order" apart
    /// from "whatever the chooser returned".
    struct LastChooser;

    impl Chooser for LastChooser {
        fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
            items.last()
        }
    }

    fn state_from(board: Board) -> GameState {
        GameState::new(board, Color::Black)
    }

    fn selector() -> MoveSelector<StandardRules, LastChooser> {
        MoveSelector::new(StandardRules, LastChooser)
    }

    #[test]
    fn developing_frame_for_black() {
        assert!(is_developing(&mv((7, 1), (5, 2), PieceType::Knight), Color::Black));
        assert!(is_developing(&mv((6, 3), (4, 3), PieceType::Queen), Color::Black));
        assert!(!is_developing(&mv((7, 1), (6, 3), PieceType::Knight), Color::Black));
        assert!(!is_developing(&mv((5, 2), (3, 3), PieceType::Knight), Color::Black));
        assert!(!is_developing(&mv((7, 0), (5, 0), PieceType::Rook), Color::Black));
        assert!(!is_developing(&mv((6, 4), (4, 4), PieceType::Pawn), Color::Black));
    }

    #[test]
    fn developing_frame_for_white_is_mirrored() {
        assert!(is_developing(&mv((0, 6), (2, 5), PieceType::Knight), Color::White));
        assert!(!is_developing(&mv((0, 6), (1, 4), PieceType::Knight), Color::White));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let state = state_from(Board::empty());
        assert_eq!(selector().decide_among(&state, &[]), None);
    }

    #[test]
    fn capture_ties_keep_enumeration_order() {
        let board = Board::empty()
            .with_piece(sq(3, 3), Piece::white(PieceType::Knight))
            .with_piece(sq(3, 5), Piece::white(PieceType::Bishop))
            .with_piece(sq(4, 4), Piece::black(PieceType::Queen));
        let state = state_from(board);
        let candidates = [
            mv((4, 4), (3, 3), PieceType::Queen),
            mv((4, 4), (3, 5), PieceType::Queen),
        ];
        let decision = selector().decide_among(&state, &candidates).unwrap();
        assert_eq!(decision.tier, Tier::Capture);
        assert_eq!(decision.mv, candidates[0]);
    }

    #[test]
    fn highest_value_capture_wins() {
        let board = Board::empty()
            .with_piece(sq(3, 3), Piece::white(PieceType::Pawn))
            .with_piece(sq(3, 5), Piece::white(PieceType::Rook))
            .with_piece(sq(4, 4), Piece::black(PieceType::Queen));
        let state = state_from(board);
        let candidates = [
            mv((4, 4), (3, 3), PieceType::Queen),
            mv((4, 4), (3, 5), PieceType::Queen),
            mv((4, 4), (5, 4), PieceType::Queen),
        ];
        let decision = selector().decide_among(&state, &candidates).unwrap();
        assert_eq!(decision.mv, candidates[1]);
    }

    #[test]
    fn injected_values_reorder_captures() {
        let board = Board::empty()
            .with_piece(sq(3, 3), Piece::white(PieceType::Pawn))
            .with_piece(sq(3, 5), Piece::white(PieceType::Rook))
            .with_piece(sq(4, 4), Piece::black(PieceType::Queen));
        let state = state_from(board);
        let candidates = [
            mv((4, 4), (3, 3), PieceType::Queen),
            mv((4, 4), (3, 5), PieceType::Queen),
        ];
        let values = PieceValues {
            pawn: 100,
            ..PieceValues::default()
        };
        let mut selector = selector().with_values(values);
        assert_eq!(
            selector.decide_among(&state, &candidates).map(|d| d.mv),
            Some(candidates[0])
        );
    }

    #[test]
    fn own_pieces_are_not_captures() {
        let board = Board::empty()
            .with_piece(sq(7, 1), Piece::black(PieceType::Knight))
            .with_piece(sq(5, 2), Piece::black(PieceType::Pawn))
            .with_piece(sq(0, 4), Piece::white(PieceType::King));
        let state = state_from(board);
        let candidates = [mv((7, 1), (5, 0), PieceType::Knight)];
        let decision = selector().decide_among(&state, &candidates).unwrap();
        assert_eq!(decision.tier, Tier::Development);
    }

    #[test]
    fn king_capture_beats_development() {
        // No white king on the board at all: every move "removes" it.
        let board = Board::empty()
            .with_piece(sq(7, 1), Piece::black(PieceType::Knight))
            .with_piece(sq(7, 4), Piece::black(PieceType::King));
        let state = state_from(board);
        let candidates = [
            mv((7, 1), (5, 2), PieceType::Knight),
            mv((7, 4), (7, 5), PieceType::King),
        ];
        let decision = selector().decide_among(&state, &candidates).unwrap();
        assert_eq!(decision.tier, Tier::KingCapture);
        assert_eq!(decision.mv, candidates[1]);
    }

    #[test]
    fn development_beats_fallback() {
        let board = Board::empty()
            .with_piece(sq(7, 1), Piece::black(PieceType::Knight))
            .with_piece(sq(6, 0), Piece::black(PieceType::Pawn))
            .with_piece(sq(0, 4), Piece::white(PieceType::King));
        let state = state_from(board);
        let candidates = [
            mv((6, 0), (5, 0), PieceType::Pawn),
            mv((7, 1), (5, 2), PieceType::Knight),
            mv((6, 0), (4, 0), PieceType::Pawn),
        ];
        let decision = selector().decide_among(&state, &candidates).unwrap();
        assert_eq!(decision.tier, Tier::Development);
        assert_eq!(decision.mv, candidates[1]);
    }

    #[test]
    fn fallback_uses_the_chooser() {
        let board = Board::empty()
            .with_piece(sq(6, 0), Piece::black(PieceType::Pawn))
            .with_piece(sq(0, 4), Piece::white(PieceType::King));
        let state = state_from(board);
        let candidates = [
            mv((6, 0), (5, 0), PieceType::Pawn),
            mv((6, 0), (4, 0), PieceType::Pawn),
        ];
        let decision = selector().decide_among(&state, &candidates).unwrap();
        assert_eq!(decision.tier, Tier::Fallback);
        assert_eq!(decision.mv, candidates[1]);

        let mut first = MoveSelector::new(StandardRules, FirstChooser);
        assert_eq!(
            first.decide_among(&state, &candidates).map(|d| d.mv),
            Some(candidates[0])
        );
    }

    #[test]
    fn selector_for_white_captures_black() {
        let state = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let mut selector = MoveSelector::new(StandardRules, FirstChooser).with_side(Color::White);
        let decision = selector.decide(&state).unwrap();
        assert_eq!(decision.tier, Tier::Capture);
        assert_eq!(decision.mv.to_uci(), "e4d5");
    }

    #[test]
    fn decision_display() {
        let decision = Decision {
            mv: mv((7, 6), (5, 5), PieceType::Knight),
            tier: Tier::Development,
        };
        assert_eq!(decision.to_string(), "g8f6 (development)");
    }
}
