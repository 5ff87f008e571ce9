//! Player identification and side layout.
//!
//! ## PlayerId
//!
//! Small integer identifier. Ids 0 (`HUMAN`) and 1 (`AI`) are the two
//! known sides; any other id is an unknown side and owns no slots.
//!
//! ## PlayerSide
//!
//! The `{start, end, store}` slot range of one side, looked up from a
//! static two-entry table indexed by player id.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Player identifier.
///
/// Player indices are 0-based: the human is `PlayerId(0)`, the AI is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Player 0, owner of pits 0-5 and store 6.
    pub const HUMAN: PlayerId = PlayerId(0);

    /// Player 1, owner of pits 7-12 and store 13.
    pub const AI: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other side. Only meaningful for known sides.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self.0 {
            0 => Self::AI,
            _ => Self::HUMAN,
        }
    }

    /// Slot layout for this player, or `None` for an unknown side.
    #[must_use]
    pub fn side(self) -> Option<&'static PlayerSide> {
        SIDES.get(self.index())
    }

    /// Iterate over both known sides, human first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::HUMAN, Self::AI].into_iter()
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::HUMAN
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Inclusive pit range and store slot of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSide {
    /// First pit slot.
    pub start: usize,
    /// Last pit slot (inclusive).
    pub end: usize,
    /// Store slot.
    pub store: usize,
}

impl PlayerSide {
    /// Pit slots, in sowing order.
    #[must_use]
    pub fn pits(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Check if a slot is one of this side's pits.
    #[must_use]
    pub fn owns_pit(&self, slot: usize) -> bool {
        self.pits().contains(&slot)
    }
}

/// Side table indexed by `PlayerId::index()`.
pub static SIDES: [PlayerSide; 2] = [
    PlayerSide { start: 0, end: 5, store: 6 },
    PlayerSide { start: 7, end: 12, store: 13 },
];
