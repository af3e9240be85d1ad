//! End-to-end selection scenarios.
//!
//! Positions are set up by hand or from FEN and run through the full
//! pipeline: enumeration through the oracle, simulation, and the cascade.

use cascade_core::{Board, Color, Move, Piece, PieceType, Square};
use cascade_engine::{
    apply_move, enumerate_moves, FirstChooser, GameState, MoveSelector, RandomChooser,
    StandardRules, Tier,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn rook_takes_the_only_capture() {
    let board = Board::empty()
        .with_piece(sq(0, 0), Piece::black(PieceType::Rook))
        .with_piece(sq(0, 5), Piece::white(PieceType::Queen));
    let state = GameState::new(board, Color::Black);

    let mut selector = MoveSelector::new(StandardRules, RandomChooser::seeded(9));
    assert_eq!(
        selector.select_move(&state),
        Some(Move::new(sq(0, 0), sq(0, 5), PieceType::Rook))
    );
}

#[test]
fn rook_takes_the_only_capture_with_a_stub_oracle() {
    let board = Board::empty()
        .with_piece(sq(0, 0), Piece::black(PieceType::Rook))
        .with_piece(sq(0, 5), Piece::white(PieceType::Queen));
    let state = GameState::new(board, Color::Black);
    let along_row = |_: &GameState, from: Square, to: Square| from.row() == to.row();

    let mut selector = MoveSelector::new(along_row, RandomChooser::seeded(9));
    let decision = selector.decide(&state).unwrap();
    assert_eq!(decision.tier, Tier::Capture);
    assert_eq!(decision.mv, Move::new(sq(0, 0), sq(0, 5), PieceType::Rook));
}

#[test]
fn bare_kings_fall_back_to_a_king_move() {
    let board = Board::empty()
        .with_piece(sq(7, 4), Piece::black(PieceType::King))
        .with_piece(sq(0, 4), Piece::white(PieceType::King));
    let state = GameState::new(board, Color::Black);

    let mut selector = MoveSelector::new(StandardRules, RandomChooser::seeded(5));
    for _ in 0..20 {
        let decision = selector.decide(&state).expect("the king can move");
        assert_eq!(decision.tier, Tier::Fallback);
        assert_eq!(decision.mv.piece, PieceType::King);
        assert_eq!(decision.mv.from, sq(7, 4));
        assert!(decision.mv.to.row() >= 6 && decision.mv.to.col().abs_diff(4) <= 1);
    }
}

#[test]
fn blocked_lone_pawn_has_no_move() {
    let board = Board::empty().with_piece(sq(6, 3), Piece::black(PieceType::Pawn));
    let state = GameState::new(board, Color::Black);
    let blocked = |_: &GameState, _: Square, _: Square| false;

    assert!(enumerate_moves(&blocked, &state, Color::Black).is_empty());
    let mut selector = MoveSelector::new(blocked, FirstChooser);
    assert_eq!(selector.select_move(&state), None);
}

#[test]
fn pawn_blocked_by_a_pawn_has_no_move() {
    let state = GameState::from_fen("8/p7/P7/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(enumerate_moves(&StandardRules, &state, Color::Black).is_empty());
    let mut selector = MoveSelector::new(StandardRules, FirstChooser);
    assert_eq!(selector.select_move(&state), None);
}

#[test]
fn checkmated_side_has_no_move() {
    let state = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    let mut selector = MoveSelector::new(StandardRules, FirstChooser);
    assert_eq!(selector.select_move(&state), None);
}

#[test]
fn queen_beats_pawn_in_capture_ranking() {
    // Knight on c6 can take the pawn on b4 or the queen on d4.
    let state = GameState::from_fen("4k3/8/2n5/8/1P1Q4/8/8/4K3 b - - 0 1").unwrap();
    let mut selector = MoveSelector::new(StandardRules, FirstChooser);
    let decision = selector.decide(&state).unwrap();
    assert_eq!(decision.tier, Tier::Capture);
    assert_eq!(decision.mv.to_uci(), "c6d4");
}

#[test]
fn opening_move_develops_a_piece() {
    let state = GameState::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
        .unwrap();
    let mut selector = MoveSelector::new(StandardRules, RandomChooser::seeded(11));
    for _ in 0..10 {
        let decision = selector.decide(&state).unwrap();
        assert_eq!(decision.tier, Tier::Development);
        assert_eq!(decision.mv.piece, PieceType::Knight);
    }
}

#[test]
fn taking_the_king_ranks_as_a_capture() {
    // A permissive oracle lets the rook capture the white king outright.
    let state = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 b - - 0 1").unwrap();
    let anything_on_row = |s: &GameState, from: Square, to: Square| {
        s.board().get(from).is_some_and(|p| p.kind == PieceType::Rook) && from.row() == to.row()
    };
    let mut selector = MoveSelector::new(anything_on_row, FirstChooser);
    // Taking the king is also a capture, and the capture tier comes first.
    let decision = selector.decide(&state).unwrap();
    assert_eq!(decision.tier, Tier::Capture);
    assert_eq!(decision.mv.to_uci(), "a1e1");
}

#[test]
fn king_capture_tier_uses_simulation_not_the_capture_filter() {
    // The oracle moves the black rook onto an empty square, but the stub
    // board has no white king, so every simulated result lacks one.
    let state = GameState::from_fen("4k3/8/8/8/8/8/8/r7 b - - 0 1").unwrap();
    let oracle = |_: &GameState, from: Square, to: Square| from == sq(0, 0) && to == sq(0, 1);
    let mut selector = MoveSelector::new(oracle, FirstChooser);
    let decision = selector.decide(&state).unwrap();
    assert_eq!(decision.tier, Tier::KingCapture);
    assert_eq!(
        apply_move(&state, &decision.mv).board().get(sq(0, 1)),
        Some(Piece::black(PieceType::Rook))
    );
}

#[test]
fn selection_does_not_touch_the_state() {
    let state = GameState::startpos();
    let snapshot = state;
    let mut selector =
        MoveSelector::new(StandardRules, RandomChooser::seeded(3)).with_side(Color::White);
    assert!(selector.select_move(&state).is_some());
    assert_eq!(state, snapshot);
}
