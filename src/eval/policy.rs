//! Move policies: strategies that pick a pit for the side to move.
//!
//! Policies are trait-based so self-play and front ends can swap them:
//! - `HeuristicPolicy`: the evaluator's best move (AI play, hints)
//! - `RandomPolicy`: uniform over legal pits, seeded
//! - `FirstMovePolicy`: lowest legal pit, a fixed baseline

use crate::core::GameRng;
use crate::rules::GameEngine;

use super::config::EvaluatorConfig;
use super::evaluator::MoveEvaluator;

/// Strategy for choosing the next pit.
pub trait MovePolicy {
    /// Pick a pit for `engine.current_player()`.
    ///
    /// Returns `None` if that player has no legal move.
    fn select(&mut self, engine: &GameEngine) -> Option<usize>;

    /// Short name for records and error messages.
    fn name(&self) -> &str;
}

/// Plays the evaluator's top-scoring move.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy {
    evaluator: MoveEvaluator,
}

impl HeuristicPolicy {
    /// Create a heuristic policy with custom weights.
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            evaluator: MoveEvaluator::new(config),
        }
    }
}

impl MovePolicy for HeuristicPolicy {
    fn select(&mut self, engine: &GameEngine) -> Option<usize> {
        self.evaluator.choose_best(engine, engine.current_player())
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Picks uniformly among legal pits.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a random policy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl MovePolicy for RandomPolicy {
    fn select(&mut self, engine: &GameEngine) -> Option<usize> {
        let moves = engine.valid_moves(engine.current_player());
        self.rng.choose(&moves).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Always plays the lowest legal pit.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMovePolicy;

impl MovePolicy for FirstMovePolicy {
    fn select(&mut self, engine: &GameEngine) -> Option<usize> {
        engine.valid_moves(engine.current_player()).first().copied()
    }

    fn name(&self) -> &str {
        "first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, PlayerId};

    #[test]
    fn test_heuristic_policy_matches_choose_best() {
        let engine = GameEngine::new();
        let mut policy = HeuristicPolicy::default();
        assert_eq!(policy.select(&engine), Some(2));
        assert_eq!(policy.name(), "heuristic");
    }

    #[test]
    fn test_heuristic_policy_plays_for_side_to_move() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        assert_eq!(engine.current_player(), PlayerId::AI);

        let pit = HeuristicPolicy::default().select(&engine).unwrap();
        assert!(engine.is_valid_move(pit, PlayerId::AI));
    }

    #[test]
    fn test_random_policy_is_legal_and_deterministic() {
        let engine = GameEngine::with_board(
            Board::from_slots([0, 2, 0, 5, 0, 1, 0, 4, 4, 4, 4, 4, 4, 0]),
            PlayerId::HUMAN,
        );

        let mut a = RandomPolicy::new(7);
        let mut b = RandomPolicy::new(7);
        for _ in 0..20 {
            let pit = a.select(&engine).unwrap();
            assert!([1, 3, 5].contains(&pit));
            assert_eq!(Some(pit), b.select(&engine));
        }
    }

    #[test]
    fn test_first_move_policy() {
        let engine = GameEngine::with_board(
            Board::from_slots([0, 0, 3, 0, 1, 0, 0, 4, 4, 4, 4, 4, 4, 0]),
            PlayerId::HUMAN,
        );
        assert_eq!(FirstMovePolicy.select(&engine), Some(2));
    }

    #[test]
    fn test_policies_return_none_when_finished() {
        let mut engine = GameEngine::with_board(
            Board::from_slots([0, 0, 0, 0, 0, 1, 20, 0, 0, 0, 0, 0, 5, 15]),
            PlayerId::HUMAN,
        );
        engine.apply_move(5).unwrap();

        assert_eq!(HeuristicPolicy::default().select(&engine), None);
        assert_eq!(RandomPolicy::new(1).select(&engine), None);
        assert_eq!(FirstMovePolicy.select(&engine), None);
    }
}
