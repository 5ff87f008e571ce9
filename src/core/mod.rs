//! Core types: players and sides, the board, move summaries, RNG.
//!
//! Everything here is plain data. Rules live in `rules`, move choice in `eval`.

pub mod player;
pub mod board;
pub mod summary;
pub mod rng;

pub use player::{PlayerId, PlayerSide, SIDES};
pub use board::{Board, Scores, Stones, INITIAL_STONES_PER_PIT, PITS_PER_SIDE, SLOT_COUNT};
pub use summary::{CaptureInfo, MoveSummary, SweepInfo};
pub use rng::GameRng;
