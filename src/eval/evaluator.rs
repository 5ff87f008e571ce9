//! Heuristic move scoring: one ply plus the opponent's best reply.
//!
//! A move is scored on the store margin it leaves, the extra turn or
//! capture it earns, and (when it ends the game) the final margin.
//! Non-terminal moves that pass the turn are then penalised by a damped
//! share of the opponent's strongest answer. No deeper search is made.

use crate::core::{MoveSummary, PlayerId};
use crate::error::InvalidMove;
use crate::rules::GameEngine;

use super::config::EvaluatorConfig;

/// Stateless move scorer.
#[derive(Clone, Debug, Default)]
pub struct MoveEvaluator {
    config: EvaluatorConfig,
}

impl MoveEvaluator {
    /// Create an evaluator with custom weights.
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Get the weights.
    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Score `pit` for `player`. Higher is better for `player`.
    ///
    /// The move is simulated with `player` to move, so hints can be asked
    /// for either side. The engine is never mutated.
    ///
    /// Fails only when `pit` is not a legal move for `player`.
    pub fn evaluate_move(&self, engine: &GameEngine, player: PlayerId, pit: usize) -> Result<f64, InvalidMove> {
        let (sim, result) = if engine.current_player() == player {
            engine.simulate_move(pit)?
        } else {
            engine.handed_to(player).simulate_move(pit)?
        };

        let config = &self.config;
        let margin = result.scores.margin(player) as f64;

        let mut score = margin * config.score_weight;
        if result.extra_turn {
            score += config.extra_turn_bonus;
        }
        if let Some(capture) = result.capture {
            score += config.capture_bonus + f64::from(capture.captured) * config.capture_per_stone;
        }

        if result.game_over {
            return Ok(score + margin * config.terminal_weight);
        }

        // Same player moves again; the opponent has nothing to answer yet.
        if result.extra_turn {
            return Ok(score);
        }

        let opponent = player.opponent();
        let best_reply = sim
            .valid_moves(opponent)
            .into_iter()
            .filter_map(|reply| sim.simulate_move(reply).ok())
            .map(|(_, reply)| self.reply_score(&reply, opponent))
            .reduce(f64::max);

        Ok(match best_reply {
            Some(best) => score - best * config.reply_damping,
            None => score + config.stuck_opponent_bonus,
        })
    }

    /// Best pit for `player`, ties going to the lowest pit.
    ///
    /// Returns `None` exactly when `player` has no valid move.
    #[must_use]
    pub fn choose_best(&self, engine: &GameEngine, player: PlayerId) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for pit in engine.valid_moves(player) {
            let Ok(score) = self.evaluate_move(engine, player, pit) else {
                continue;
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pit, score));
            }
        }

        best.map(|(pit, _)| pit)
    }

    /// Opponent-perspective score of one reply.
    fn reply_score(&self, reply: &MoveSummary, opponent: PlayerId) -> f64 {
        let config = &self.config;
        let margin = reply.scores.margin(opponent) as f64;

        let mut score = margin * config.reply_score_weight;
        if reply.extra_turn {
            score += config.reply_extra_turn_bonus;
        }
        if let Some(capture) = reply.capture {
            score += config.reply_capture_bonus + f64::from(capture.captured) * config.reply_capture_per_stone;
        }
        if reply.game_over {
            score += margin * config.reply_terminal_weight;
        }
        score
    }
}

/// Score `pit` for `player` with the default weights.
pub fn evaluate_move(engine: &GameEngine, player: PlayerId, pit: usize) -> Result<f64, InvalidMove> {
    MoveEvaluator::default().evaluate_move(engine, player, pit)
}

/// Best pit for `player` with the default weights.
#[must_use]
pub fn choose_best(engine: &GameEngine, player: PlayerId) -> Option<usize> {
    MoveEvaluator::default().choose_best(engine, player)
}

/// Suggested pit for the human.
#[must_use]
pub fn hint(engine: &GameEngine) -> Option<usize> {
    choose_best(engine, PlayerId::HUMAN)
}
