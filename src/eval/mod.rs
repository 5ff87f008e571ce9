//! Move evaluation for AI play and hints.
//!
//! ## Usage
//!
//! ```
//! use rust_mancala::core::PlayerId;
//! use rust_mancala::eval::{choose_best, hint};
//! use rust_mancala::rules::GameEngine;
//!
//! let mut engine = GameEngine::new();
//!
//! // Suggest a move for the human, then play it
//! let pit = hint(&engine).unwrap();
//! engine.apply_move(pit).unwrap();
//!
//! // When it is the AI's turn, let it answer
//! if engine.current_player() == PlayerId::AI {
//!     if let Some(reply) = choose_best(&engine, PlayerId::AI) {
//!         engine.apply_move(reply).unwrap();
//!     }
//! }
//! ```

pub mod config;
pub mod evaluator;
pub mod policy;

pub use config::EvaluatorConfig;
pub use evaluator::{choose_best, evaluate_move, hint, MoveEvaluator};
pub use policy::{FirstMovePolicy, HeuristicPolicy, MovePolicy, RandomPolicy};
