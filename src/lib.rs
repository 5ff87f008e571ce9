//! # rust-mancala
//!
//! Kalah (Mancala) rules engine with a heuristic move evaluator.
//!
//! ## Design Principles
//!
//! 1. **Value Snapshots**: The board is a `Copy` array of 14 slots. Every
//!    accessor returns a copy, so callers can never alias engine state.
//!
//! 2. **Validate Then Mutate**: `apply_move` checks the pit before touching
//!    anything. A rejected move leaves the engine as it was.
//!
//! 3. **Cheap Simulation**: Cloning an engine is a 14-slot copy, which is
//!    all the evaluator's lookahead needs.
//!
//! ## Board Layout
//!
//! ```text
//!        12 11 10  9  8  7       <- player 1 (AI) pits
//!   13                     6     <- stores
//!         0  1  2  3  4  5       <- player 0 (human) pits
//! ```
//!
//! Stones are sown counter-clockwise (increasing index), skipping the
//! opponent's store.
//!
//! ## Modules
//!
//! - `core`: Board, players, move summaries, RNG
//! - `rules`: The game engine
//! - `eval`: Move evaluation and policies
//! - `play`: Policy-vs-policy self-play
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod eval;
pub mod play;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, CaptureInfo, GameRng, MoveSummary, PlayerId, PlayerSide, Scores,
    Stones, SweepInfo, INITIAL_STONES_PER_PIT, PITS_PER_SIDE, SIDES, SLOT_COUNT,
};

pub use crate::error::{BoardError, InvalidMove, PlayError};

pub use crate::rules::{GameEngine, GameResult, ValidMoves};

pub use crate::eval::{
    choose_best, evaluate_move, hint, EvaluatorConfig, FirstMovePolicy, HeuristicPolicy,
    MoveEvaluator, MovePolicy, RandomPolicy,
};

pub use crate::play::{MatchConfig, MatchRecord, MatchRunner, SeriesStats};
