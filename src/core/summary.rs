//! Move summaries: the record of one `apply_move` call.
//!
//! A `MoveSummary` is produced fresh for every move and never retained by
//! the engine. It carries everything a front end needs to animate and
//! score the move without reading engine internals.

use serde::{Deserialize, Serialize};

use super::board::{Board, Scores, Stones};
use super::player::PlayerId;

/// A capture triggered by the last stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureInfo {
    /// Pit where the last stone landed.
    pub pit: usize,
    /// Pit across from it whose stones were taken.
    pub opposite: usize,
    /// Store that received the stones.
    pub store: usize,
    /// Stones moved into the store (opposite pit contents + the landed stone).
    pub captured: Stones,
}

/// End-of-game sweep of the remaining pit stones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepInfo {
    /// Stones left in the human pits before the sweep.
    pub human_remaining: Stones,
    /// Stones left in the AI pits before the sweep.
    pub ai_remaining: Stones,
    /// Board after the sweep.
    pub board: Board,
    /// Final scores.
    pub scores: Scores,
}

/// Outcome of a single move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    /// The player who moved.
    pub player: PlayerId,

    /// The pit that was played.
    pub pit: usize,

    /// Stones lifted from `pit`.
    pub stones_picked: Stones,

    /// Slots that received a stone, in drop order.
    pub sequence: Vec<usize>,

    /// Slot of the last dropped stone.
    pub last_position: usize,

    /// Whether the last stone landed in the mover's store.
    pub landed_in_store: bool,

    /// Capture, if the last stone triggered one.
    pub capture: Option<CaptureInfo>,

    /// Sweep, present only when this move ended the game.
    pub sweep: Option<SweepInfo>,

    /// Whether the mover plays again. Equal to `landed_in_store`.
    pub extra_turn: bool,

    /// Board after the move.
    pub board: Board,

    /// Player to move after this move.
    pub current_player: PlayerId,

    /// Whether the game is over after this move.
    pub game_over: bool,

    /// Scores after the move.
    pub scores: Scores,
}

impl MoveSummary {
    /// Stones captured by this move, 0 if none.
    #[must_use]
    pub fn captured(&self) -> Stones {
        self.capture.map_or(0, |c| c.captured)
    }
}
