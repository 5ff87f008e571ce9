//! Kalah rules engine.
//!
//! `GameEngine` owns the board, the side to move and the game-over flag.
//! `apply_move` is the only transition:
//! - Sow the picked stones one per slot, skipping the opponent's store
//! - Extra turn if the last stone lands in the mover's store
//! - Capture if it lands in an empty own pit facing a non-empty pit
//! - Sweep and finish once either side's pits are all empty

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    Board, CaptureInfo, MoveSummary, PlayerId, PlayerSide, Scores, Stones, SweepInfo, PITS_PER_SIDE, SIDES,
    SLOT_COUNT,
};
use crate::error::InvalidMove;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Decide the result from final stores.
    #[must_use]
    pub fn from_scores(scores: Scores) -> Self {
        match scores.human.cmp(&scores.ai) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::HUMAN),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::AI),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Legal pits for one side, in board order.
pub type ValidMoves = SmallVec<[usize; PITS_PER_SIDE]>;

/// Game state and rules.
///
/// Cloning copies the whole board, so clones can be played forward freely
/// without touching the original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: PlayerId,
    game_over: bool,

    /// Board and starting player `reset` returns to.
    initial_board: Board,
    starting_player: PlayerId,
}

impl GameEngine {
    /// Standard opening, human to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), PlayerId::HUMAN)
    }

    /// Start from a custom position.
    #[must_use]
    pub fn with_board(board: Board, current_player: PlayerId) -> Self {
        Self {
            board,
            current_player,
            game_over: false,
            initial_board: board,
            starting_player: current_player,
        }
    }

    /// Start from optional parts, defaulting to the standard board and the human.
    #[must_use]
    pub fn from_options(board: Option<Board>, current_player: Option<PlayerId>) -> Self {
        Self::with_board(board.unwrap_or_default(), current_player.unwrap_or_default())
    }

    /// Reinitialize the game.
    ///
    /// Without a board, the last supplied board is reused. Without a player,
    /// the previously recorded starting player is reused, except that a
    /// freshly supplied board starts with the human.
    pub fn reset(&mut self, board: Option<Board>, current_player: Option<PlayerId>) {
        match board {
            Some(board) => {
                self.initial_board = board;
                self.starting_player = current_player.unwrap_or_default();
            }
            None => {
                if let Some(player) = current_player {
                    self.starting_player = player;
                }
            }
        }

        self.board = self.initial_board;
        self.current_player = self.starting_player;
        self.game_over = false;
    }

    // === Accessors ===

    /// Copy of the board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Store contents of both sides.
    #[must_use]
    pub fn scores(&self) -> Scores {
        self.board.scores()
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.game_over.then(|| GameResult::from_scores(self.scores()))
    }

    /// Total stones on the board.
    #[must_use]
    pub fn total_stones(&self) -> Stones {
        self.board.total()
    }

    /// Non-empty pits of `player`, lowest first.
    ///
    /// Empty once the game is over or for an unknown side.
    #[must_use]
    pub fn valid_moves(&self, player: PlayerId) -> ValidMoves {
        match player.side() {
            Some(side) if !self.game_over => side.pits().filter(|&pit| self.board[pit] > 0).collect(),
            _ => ValidMoves::new(),
        }
    }

    /// Check if `player` could legally play `pit`.
    #[must_use]
    pub fn is_valid_move(&self, pit: usize, player: PlayerId) -> bool {
        !self.game_over
            && player
                .side()
                .is_some_and(|side| side.owns_pit(pit) && self.board[pit] > 0)
    }

    // === Transitions ===

    /// Play `pit` for the current player.
    ///
    /// Nothing is mutated when an error is returned.
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveSummary, InvalidMove> {
        let side = self.check_move(pit)?;
        let player = self.current_player;
        let opponent_store = SIDES[player.opponent().index()].store;

        let stones_picked = self.board[pit];
        self.board[pit] = 0;

        let mut remaining = stones_picked;
        let mut sequence = Vec::with_capacity(stones_picked as usize);
        let mut position = pit;
        while remaining > 0 {
            position = (position + 1) % SLOT_COUNT;
            if position == opponent_store {
                continue;
            }
            self.board[position] = self.board[position].saturating_add(1);
            remaining -= 1;
            sequence.push(position);
        }

        let last_position = position;
        let landed_in_store = last_position == side.store;
        let capture = if landed_in_store {
            None
        } else {
            self.capture(side, last_position)
        };

        let sweep = self.sweep_if_finished();

        if !landed_in_store && !self.game_over {
            self.current_player = player.opponent();
        }

        Ok(MoveSummary {
            player,
            pit,
            stones_picked,
            sequence,
            last_position,
            landed_in_store,
            capture,
            sweep,
            extra_turn: landed_in_store,
            board: self.board,
            current_player: self.current_player,
            game_over: self.game_over,
            scores: self.scores(),
        })
    }

    /// Play `pit` on a copy, leaving `self` untouched.
    pub fn simulate_move(&self, pit: usize) -> Result<(GameEngine, MoveSummary), InvalidMove> {
        let mut engine = self.clone();
        let result = engine.apply_move(pit)?;
        Ok((engine, result))
    }

    /// Copy of this position with `player` to move.
    pub(crate) fn handed_to(&self, player: PlayerId) -> GameEngine {
        let mut engine = self.clone();
        engine.current_player = player;
        engine
    }

    fn check_move(&self, pit: usize) -> Result<&'static PlayerSide, InvalidMove> {
        if self.game_over {
            return Err(InvalidMove::GameOver);
        }
        if pit >= SLOT_COUNT || SIDES.iter().any(|side| side.store == pit) {
            return Err(InvalidMove::OutOfRange { pit });
        }

        let player = self.current_player;
        let side = player
            .side()
            .filter(|side| side.owns_pit(pit))
            .ok_or(InvalidMove::NotYourPit { pit, player })?;

        if self.board[pit] == 0 {
            return Err(InvalidMove::EmptyPit { pit });
        }
        Ok(side)
    }

    /// A single stone in an own pit means the pit was empty before the last
    /// drop; every lap adds exactly one stone, so wrap-around never fakes it.
    fn capture(&mut self, side: &PlayerSide, last: usize) -> Option<CaptureInfo> {
        if !side.owns_pit(last) || self.board[last] != 1 {
            return None;
        }

        let opposite = Board::opposite(last)?;
        let taken = self.board[opposite];
        if taken == 0 {
            return None;
        }

        let captured = taken.saturating_add(1);
        self.board[opposite] = 0;
        self.board[last] = 0;
        self.board[side.store] = self.board[side.store].saturating_add(captured);

        Some(CaptureInfo {
            pit: last,
            opposite,
            store: side.store,
            captured,
        })
    }

    fn sweep_if_finished(&mut self) -> Option<SweepInfo> {
        let human_remaining = self.board.pit_total(&SIDES[0]);
        let ai_remaining = self.board.pit_total(&SIDES[1]);
        if human_remaining > 0 && ai_remaining > 0 {
            return None;
        }

        for side in &SIDES {
            let remaining = self.board.pit_total(side);
            for pit in side.pits() {
                self.board[pit] = 0;
            }
            self.board[side.store] = self.board[side.store].saturating_add(remaining);
        }
        self.game_over = true;

        Some(SweepInfo {
            human_remaining,
            ai_remaining,
            board: self.board,
            scores: self.scores(),
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
