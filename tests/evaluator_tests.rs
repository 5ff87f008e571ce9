//! Evaluator and policy integration tests.

use rust_mancala::{
    choose_best, evaluate_move, hint, Board, EvaluatorConfig, FirstMovePolicy, GameEngine,
    HeuristicPolicy, InvalidMove, MoveEvaluator, MovePolicy, PlayerId, RandomPolicy,
};

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_opening_scores() {
    let engine = GameEngine::new();
    let scores: Vec<f64> = (0..6)
        .map(|pit| evaluate_move(&engine, PlayerId::HUMAN, pit).unwrap())
        .collect();

    assert!(scores.iter().all(|s| s.is_finite()));
    let best = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(best, scores[2]);
    assert_eq!(hint(&engine), Some(2));
}

#[test]
fn test_wrong_side_pit_is_rejected() {
    let engine = GameEngine::new();
    assert_eq!(
        evaluate_move(&engine, PlayerId::AI, 0),
        Err(InvalidMove::NotYourPit { pit: 0, player: PlayerId::AI })
    );
}

#[test]
fn test_extra_turn_bonus_is_configurable() {
    let engine = GameEngine::new();
    let plain = MoveEvaluator::default().evaluate_move(&engine, PlayerId::HUMAN, 2).unwrap();
    let boosted = MoveEvaluator::new(EvaluatorConfig::default().with_extra_turn_bonus(100.0))
        .evaluate_move(&engine, PlayerId::HUMAN, 2)
        .unwrap();

    assert!((boosted - plain - 60.0).abs() < 1e-9);
}

#[test]
fn test_config_serializes() {
    let config = EvaluatorConfig::default().with_reply_damping(0.25);
    let json = serde_json::to_string(&config).unwrap();
    let back: EvaluatorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

// =============================================================================
// Move Choice
// =============================================================================

#[test]
fn test_choose_best_matches_valid_moves() {
    let boards = [
        Board::new(),
        Board::from_slots([0, 0, 0, 1, 0, 0, 0, 4, 3, 4, 4, 4, 4, 0]),
        Board::from_slots([0, 3, 0, 0, 8, 0, 10, 1, 0, 2, 0, 0, 6, 18]),
    ];

    for board in boards {
        let engine = GameEngine::with_board(board, PlayerId::HUMAN);
        for player in PlayerId::both() {
            let moves = engine.valid_moves(player);
            match choose_best(&engine, player) {
                Some(pit) => assert!(moves.contains(&pit)),
                None => assert!(moves.is_empty()),
            }
        }
    }
}

#[test]
fn test_policies_play_legal_moves_to_the_end() {
    let mut policies: Vec<Box<dyn MovePolicy>> = vec![
        Box::new(HeuristicPolicy::default()),
        Box::new(RandomPolicy::new(11)),
        Box::new(FirstMovePolicy),
    ];

    for policy in &mut policies {
        let mut engine = GameEngine::new();
        while !engine.is_game_over() {
            let pit = policy.select(&engine).unwrap();
            assert!(engine.is_valid_move(pit, engine.current_player()), "{} chose {pit}", policy.name());
            engine.apply_move(pit).unwrap();
        }
        let scores = engine.scores();
        assert_eq!(scores.human + scores.ai, 48);
    }
}
