//! Evaluation weights.

use serde::{Deserialize, Serialize};

/// Weights of the one-ply-plus-reply heuristic.
///
/// The `reply_*` fields score the opponent's answers from the opponent's
/// point of view; the best answer is subtracted, scaled by `reply_damping`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Per stone of store margin after the move.
    pub score_weight: f64,

    /// Bonus when the move earns another turn.
    pub extra_turn_bonus: f64,

    /// Flat bonus for any capture.
    pub capture_bonus: f64,

    /// Additional bonus per captured stone.
    pub capture_per_stone: f64,

    /// Per stone of final margin when the move ends the game.
    pub terminal_weight: f64,

    /// Bonus when the opponent has no answer.
    pub stuck_opponent_bonus: f64,

    /// Opponent reply: per stone of the opponent's margin.
    pub reply_score_weight: f64,

    /// Opponent reply: bonus for an extra turn.
    pub reply_extra_turn_bonus: f64,

    /// Opponent reply: flat capture bonus.
    pub reply_capture_bonus: f64,

    /// Opponent reply: per captured stone.
    pub reply_capture_per_stone: f64,

    /// Opponent reply: per stone of final margin when the reply ends the game.
    pub reply_terminal_weight: f64,

    /// Fraction of the best reply's score subtracted from the move's score.
    pub reply_damping: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            score_weight: 6.0,
            extra_turn_bonus: 40.0,
            capture_bonus: 15.0,
            capture_per_stone: 3.0,
            terminal_weight: 20.0,
            stuck_opponent_bonus: 10.0,
            reply_score_weight: 6.0,
            reply_extra_turn_bonus: 35.0,
            reply_capture_bonus: 15.0,
            reply_capture_per_stone: 2.0,
            reply_terminal_weight: 15.0,
            reply_damping: 0.6,
        }
    }
}

impl EvaluatorConfig {
    /// Set the extra-turn bonus.
    pub fn with_extra_turn_bonus(mut self, bonus: f64) -> Self {
        self.extra_turn_bonus = bonus;
        self
    }

    /// Set the capture bonuses (flat, per stone).
    pub fn with_capture_bonus(mut self, flat: f64, per_stone: f64) -> Self {
        self.capture_bonus = flat;
        self.capture_per_stone = per_stone;
        self
    }

    /// Set the terminal margin weight.
    pub fn with_terminal_weight(mut self, weight: f64) -> Self {
        self.terminal_weight = weight;
        self
    }

    /// Set how strongly the opponent's best reply counts against a move.
    ///
    /// 0 disables the lookahead penalty entirely.
    pub fn with_reply_damping(mut self, damping: f64) -> Self {
        self.reply_damping = damping;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.score_weight, 6.0);
        assert_eq!(config.extra_turn_bonus, 40.0);
        assert_eq!(config.reply_extra_turn_bonus, 35.0);
        assert!((config.reply_damping - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvaluatorConfig::default()
            .with_extra_turn_bonus(50.0)
            .with_capture_bonus(10.0, 4.0)
            .with_terminal_weight(30.0)
            .with_reply_damping(0.0);

        assert_eq!(config.extra_turn_bonus, 50.0);
        assert_eq!(config.capture_bonus, 10.0);
        assert_eq!(config.capture_per_stone, 4.0);
        assert_eq!(config.terminal_weight, 30.0);
        assert_eq!(config.reply_damping, 0.0);
        assert_eq!(config.score_weight, 6.0);
    }

    #[test]
    fn test_serialization() {
        let config = EvaluatorConfig::default().with_reply_damping(0.25);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EvaluatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
