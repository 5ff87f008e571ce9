//! Kalah rules: move validation, sowing, capture, extra turns, end-of-game sweep.
//!
//! `GameEngine` is a pure state machine. It performs no I/O and never
//! hands out references into its state; callers always receive copies.

pub mod engine;

pub use engine::{GameEngine, GameResult, ValidMoves};
