//! Decision core for an automated chess opponent.
//!
//! This crate provides:
//! - [`GameState`] - board, side to move, and the rule flags the legality oracle needs
//! - [`MoveOracle`] - the single-move legality capability the engine consumes
//! - [`StandardRules`] - a reference oracle implementing ordinary chess movement
//! - [`enumerate_moves`] - every legal `(from, to)` pair for a side, in scan order
//! - [`apply_move`] - hypothetical successor states that never touch the input
//! - [`evaluate`] - material score over an injectable [`PieceValues`] table
//! - [`MoveSelector`] - the tiered policy that picks one move per turn
//!
//! # Architecture
//!
//! Data flows one way: the board model feeds the enumerator, whose candidates
//! are filtered with the help of the simulator and the value table, and the
//! selector returns a single move or `None` when the side has nothing legal.
//! Randomized tie-breaks go through the [`Chooser`] capability so tests can
//! swap in a deterministic one.
//!
//! # Example
//!
//! ```
//! use cascade_engine::{FirstChooser, GameState, MoveSelector, StandardRules};
//!
//! let state = GameState::from_fen("4k3/8/8/8/8/8/8/r4Q1K b - - 0 1").unwrap();
//! let mut selector = MoveSelector::new(StandardRules, FirstChooser);
//! let mv = selector.select_move(&state).unwrap();
//! assert_eq!(mv.to_uci(), "a1f1");
//! ```

mod chooser;
pub mod config;
mod eval;
mod movegen;
mod oracle;
pub mod rules;
mod selector;
mod simulate;
mod state;

pub use chooser::{Chooser, FirstChooser, RandomChooser};
pub use config::{ConfigError, EngineConfig};
pub use eval::{evaluate, evaluate_for, PieceValues};
pub use movegen::enumerate_moves;
pub use oracle::MoveOracle;
pub use rules::{is_square_attacked, GameOutcome, StandardRules};
pub use selector::{is_developing, Decision, MoveSelector, Tier};
pub use simulate::apply_move;
pub use state::{CastlingRights, GameState, StateError};
