//! Policy-vs-policy games.
//!
//! Runs complete games between two `MovePolicy`s and keeps the move
//! summaries in memory, for regression tests and weight tuning. Records
//! are never written anywhere.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng, MoveSummary, PlayerId, Scores};
use crate::error::PlayError;
use crate::eval::{MovePolicy, RandomPolicy};
use crate::rules::{GameEngine, GameResult};

/// Configuration for policy games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum moves per game before it is cut off.
    pub max_moves: usize,

    /// Opening plies played at random (by either side) to vary games.
    pub random_opening_moves: usize,

    /// Seed for the random opening. Series derive one seed per game from it.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_moves: 200,
            random_opening_moves: 0,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the number of random opening plies.
    pub fn with_random_opening(mut self, moves: usize) -> Self {
        self.random_opening_moves = moves;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// One finished (or cut-off) game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed of the random opening.
    pub seed: u64,

    /// Every move, in order.
    pub moves: Vector<MoveSummary>,

    /// Board when play stopped.
    pub final_board: Board,

    /// Scores when play stopped.
    pub scores: Scores,

    /// Result, `None` if the game was cut off.
    pub result: Option<GameResult>,

    /// Whether `max_moves` was reached before the game ended.
    pub truncated: bool,
}

impl MatchRecord {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no move was played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player.
    pub fn moves_by(&self, player: PlayerId) -> impl Iterator<Item = &MoveSummary> {
        self.moves.iter().filter(move |m| m.player == player)
    }
}

/// Tally of a series between two policies.
///
/// `wins[0]` counts the first policy, `wins[1]` the second, whichever side
/// each played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Games played.
    pub games: u32,

    /// Wins of the first and second policy.
    pub wins: [u32; 2],

    /// Games ending with equal stores.
    pub draws: u32,

    /// Games cut off at `max_moves`.
    pub truncated: u32,
}

/// Plays games between policies.
#[derive(Clone, Debug, Default)]
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    /// Create a new runner.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play one game from `start` (which is left untouched).
    ///
    /// `human` moves for player 0, `ai` for player 1.
    pub fn play(
        &self,
        start: &GameEngine,
        human: &mut dyn MovePolicy,
        ai: &mut dyn MovePolicy,
    ) -> Result<MatchRecord, PlayError> {
        self.play_seeded(start, self.config.seed, human, ai)
    }

    /// Play `games` games, swapping sides every game.
    ///
    /// Even-numbered games give `first` the human side.
    pub fn run_series(
        &self,
        start: &GameEngine,
        games: u32,
        first: &mut dyn MovePolicy,
        second: &mut dyn MovePolicy,
    ) -> Result<SeriesStats, PlayError> {
        let mut rng = GameRng::new(self.config.seed);
        let mut stats = SeriesStats::default();

        for game in 0..games {
            let seed = rng.fork().seed();
            let first_side = if game % 2 == 0 { PlayerId::HUMAN } else { PlayerId::AI };

            let record = if first_side == PlayerId::HUMAN {
                self.play_seeded(start, seed, &mut *first, &mut *second)?
            } else {
                self.play_seeded(start, seed, &mut *second, &mut *first)?
            };

            stats.games += 1;
            match record.result {
                Some(GameResult::Winner(winner)) if winner == first_side => stats.wins[0] += 1,
                Some(GameResult::Winner(_)) => stats.wins[1] += 1,
                Some(GameResult::Draw) => stats.draws += 1,
                None => stats.truncated += 1,
            }
        }

        Ok(stats)
    }

    fn play_seeded(
        &self,
        start: &GameEngine,
        seed: u64,
        human: &mut dyn MovePolicy,
        ai: &mut dyn MovePolicy,
    ) -> Result<MatchRecord, PlayError> {
        let mut engine = start.clone();
        let mut opening = RandomPolicy::new(seed);
        let mut moves = Vector::new();
        let mut truncated = false;

        for move_number in 0.. {
            if engine.is_game_over() {
                break;
            }
            if move_number >= self.config.max_moves {
                truncated = true;
                break;
            }

            let player = engine.current_player();
            let policy: &mut dyn MovePolicy = if move_number < self.config.random_opening_moves {
                &mut opening
            } else if player == PlayerId::HUMAN {
                &mut *human
            } else {
                &mut *ai
            };

            let pit = policy.select(&engine).ok_or_else(|| PlayError::NoMove {
                policy: policy.name().to_string(),
                player,
            })?;
            let summary = engine.apply_move(pit).map_err(|source| PlayError::IllegalMove {
                policy: policy.name().to_string(),
                source,
            })?;
            moves.push_back(summary);
        }

        Ok(MatchRecord {
            seed,
            moves,
            final_board: engine.board(),
            scores: engine.scores(),
            result: engine.result(),
            truncated,
        })
    }
}
