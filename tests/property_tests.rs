//! Property tests over random legal move sequences.

use proptest::prelude::*;
use rust_mancala::{choose_best, GameEngine, PlayerId};

/// Play `picks` as indices into the legal moves until the game ends.
fn play_out(picks: &[usize]) -> Vec<GameEngine> {
    let mut engine = GameEngine::new();
    let mut states = vec![engine.clone()];
    for &pick in picks {
        let moves = engine.valid_moves(engine.current_player());
        if moves.is_empty() {
            break;
        }
        engine.apply_move(moves[pick % moves.len()]).unwrap();
        states.push(engine.clone());
    }
    states
}

proptest! {
    #[test]
    fn test_stones_are_conserved(picks in prop::collection::vec(0usize..6, 0..120)) {
        for state in play_out(&picks) {
            prop_assert_eq!(state.total_stones(), 48);
        }
    }

    #[test]
    fn test_snapshots_are_independent(picks in prop::collection::vec(0usize..6, 0..60)) {
        let states = play_out(&picks);
        let engine = states.last().unwrap();
        let first = engine.board();
        let mut copy = engine.board();
        prop_assert_eq!(first, copy);

        copy[0] += 1;
        prop_assert_eq!(engine.board(), first);
    }

    #[test]
    fn test_choose_best_is_legal(picks in prop::collection::vec(0usize..6, 0..60)) {
        let states = play_out(&picks);
        let engine = states.last().unwrap();
        for player in PlayerId::both() {
            let moves = engine.valid_moves(player);
            match choose_best(engine, player) {
                Some(pit) => prop_assert!(moves.contains(&pit)),
                None => prop_assert!(moves.is_empty()),
            }
        }
    }

    #[test]
    fn test_game_over_means_an_empty_side(picks in prop::collection::vec(0usize..6, 0..120)) {
        let states = play_out(&picks);
        let engine = states.last().unwrap();
        if engine.is_game_over() {
            let board = engine.board();
            prop_assert!((0..6).chain(7..13).all(|pit| board[pit] == 0));
            prop_assert!(engine.result().is_some());
        }
    }
}
