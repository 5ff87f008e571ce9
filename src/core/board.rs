//! Fixed 14-slot Kalah board.
//!
//! Slot layout (sowing runs counter-clockwise, i.e. upwards in index):
//!
//! ```text
//!      12  11  10   9   8   7
//!  13                           6
//!       0   1   2   3   4   5
//! ```
//!
//! Slots 0-5 are the human pits, 6 the human store, 7-12 the AI pits and
//! 13 the AI store. `Board` is `Copy`: every accessor on the engine hands
//! out an independent value.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::{PlayerId, PlayerSide};
use crate::error::BoardError;

/// Stone count held by one slot.
pub type Stones = u32;

/// Total number of slots (12 pits + 2 stores).
pub const SLOT_COUNT: usize = 14;

/// Pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Stones per pit on a fresh board.
pub const INITIAL_STONES_PER_PIT: Stones = 4;

/// Board slots.
///
/// Counts are `u32`. Sums and drops saturate at `Stones::MAX`, so stones
/// are only conserved on boards whose total fits in a `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([Stones; SLOT_COUNT]);

impl Board {
    /// Standard opening position: 4 stones in every pit, empty stores.
    #[must_use]
    pub const fn new() -> Self {
        let n = INITIAL_STONES_PER_PIT;
        Self([n, n, n, n, n, n, 0, n, n, n, n, n, n, 0])
    }

    /// Wrap raw slot values.
    #[must_use]
    pub const fn from_slots(slots: [Stones; SLOT_COUNT]) -> Self {
        Self(slots)
    }

    /// Copy of the raw slot values.
    #[must_use]
    pub const fn slots(&self) -> [Stones; SLOT_COUNT] {
        self.0
    }

    /// Slot values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Stones] {
        &self.0
    }

    /// Stones in one side's pits (store excluded).
    #[must_use]
    pub fn pit_total(&self, side: &PlayerSide) -> Stones {
        self.0[side.pits()].iter().fold(0, |acc, &n| acc.saturating_add(n))
    }

    /// Total stones on the board.
    #[must_use]
    pub fn total(&self) -> Stones {
        self.0.iter().fold(0, |acc, &n| acc.saturating_add(n))
    }

    /// Store contents of both sides.
    #[must_use]
    pub fn scores(&self) -> Scores {
        Scores {
            human: self.0[6],
            ai: self.0[13],
        }
    }

    /// Pit facing `pit` across the board, `None` for stores and
    /// out-of-range slots.
    #[must_use]
    pub const fn opposite(pit: usize) -> Option<usize> {
        match pit {
            0..=5 | 7..=12 => Some(12 - pit),
            _ => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Stones; SLOT_COUNT]> for Board {
    fn from(slots: [Stones; SLOT_COUNT]) -> Self {
        Self(slots)
    }
}

impl TryFrom<&[Stones]> for Board {
    type Error = BoardError;

    fn try_from(slots: &[Stones]) -> Result<Self, Self::Error> {
        let slots: [Stones; SLOT_COUNT] = slots
            .try_into()
            .map_err(|_| BoardError::WrongLength { len: slots.len() })?;
        Ok(Self(slots))
    }
}

impl TryFrom<Vec<Stones>> for Board {
    type Error = BoardError;

    fn try_from(slots: Vec<Stones>) -> Result<Self, Self::Error> {
        Self::try_from(slots.as_slice())
    }
}

impl Index<usize> for Board {
    type Output = Stones;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.0[slot]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, slot: usize) -> &mut Self::Output {
        &mut self.0[slot]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;
        for slot in (7..=12).rev() {
            write!(f, "{:>3} ", self.0[slot])?;
        }
        writeln!(f)?;
        writeln!(f, "{:>3}{:>25}", self.0[13], self.0[6])?;
        write!(f, "    ")?;
        for slot in 0..=5 {
            write!(f, "{:>3} ", self.0[slot])?;
        }
        Ok(())
    }
}

/// Store snapshot: `human = board[6]`, `ai = board[13]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    pub human: Stones,
    pub ai: Stones,
}

impl Scores {
    /// Store of a player. Unknown sides score 0.
    #[must_use]
    pub fn of(&self, player: PlayerId) -> Stones {
        match player {
            PlayerId::HUMAN => self.human,
            PlayerId::AI => self.ai,
            _ => 0,
        }
    }

    /// Own store minus the opponent's store.
    #[must_use]
    pub fn margin(&self, player: PlayerId) -> i64 {
        i64::from(self.of(player)) - i64::from(self.of(player.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::SIDES;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.slots(), [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
        assert_eq!(board.total(), 48);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_pit_total() {
        let board = Board::from_slots([1, 2, 3, 0, 0, 0, 9, 0, 0, 0, 0, 0, 5, 7]);
        assert_eq!(board.pit_total(&SIDES[0]), 6);
        assert_eq!(board.pit_total(&SIDES[1]), 5);
    }

    #[test]
    fn test_scores() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 21, 0, 0, 0, 0, 0, 0, 27]);
        let scores = board.scores();
        assert_eq!(scores, Scores { human: 21, ai: 27 });
        assert_eq!(scores.of(PlayerId::AI), 27);
        assert_eq!(scores.margin(PlayerId::HUMAN), -6);
        assert_eq!(scores.margin(PlayerId::AI), 6);
        assert_eq!(scores.of(PlayerId::new(7)), 0);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Board::opposite(0), Some(12));
        assert_eq!(Board::opposite(4), Some(8));
        assert_eq!(Board::opposite(5), Some(7));
        assert_eq!(Board::opposite(12), Some(0));
        assert_eq!(Board::opposite(6), None);
        assert_eq!(Board::opposite(13), None);
        assert_eq!(Board::opposite(20), None);
    }

    #[test]
    fn test_totals_saturate() {
        let board = Board::from_slots([Stones::MAX, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5]);
        assert_eq!(board.pit_total(&SIDES[0]), Stones::MAX);
        assert_eq!(board.total(), Stones::MAX);
    }

    #[test]
    fn test_try_from_slice() {
        let slots: Vec<Stones> = vec![4; 14];
        let board = Board::try_from(slots).unwrap();
        assert_eq!(board.total(), 56);

        let short: &[Stones] = &[4; 12];
        assert_eq!(Board::try_from(short), Err(BoardError::WrongLength { len: 12 }));

        let long: Vec<Stones> = vec![0; 15];
        assert_eq!(Board::try_from(long), Err(BoardError::WrongLength { len: 15 }));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Board::new();
        let mut copy = original;
        copy[0] = 99;
        assert_eq!(original[0], 4);
        assert_eq!(copy[0], 99);
    }

    #[test]
    fn test_display() {
        let rendered = Board::new().to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with('0'));
        assert!(lines[1].trim_end().ends_with('0'));
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::from_slots([0, 0, 0, 1, 0, 0, 0, 4, 3, 4, 4, 4, 4, 0]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
