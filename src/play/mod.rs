//! Self-play between move policies.

pub mod self_play;

pub use self_play::{MatchConfig, MatchRecord, MatchRunner, SeriesStats};
