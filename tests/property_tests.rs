//! Property tests over random play.
//!
//! Each case drives an engine with a random sequence of choices: sow one of
//! the legal pits, end the turn, or undo. Invariants are checked after every
//! step.

use proptest::prelude::*;

use kalah_engine::core::{Board, GameConfig, Side, UNDO_LIMIT};
use kalah_engine::rules::KalahEngine;

#[derive(Clone, Copy, Debug)]
enum Step {
    Sow(usize),
    Undo,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0usize..6).prop_map(Step::Sow),
        1 => Just(Step::Undo),
    ]
}

/// Apply one step. Ends the turn first when no move is owed.
fn apply(engine: &mut KalahEngine, step: Step) {
    match step {
        Step::Sow(choice) => {
            if engine.is_turn_ended() {
                engine.end_turn().unwrap();
            }
            let moves = engine.legal_moves();
            let pit = moves[choice % moves.len()];
            engine.make_move(pit.side, pit.index).unwrap();
        }
        Step::Undo => {
            let allowed = engine.is_undo_allowed();
            assert_eq!(engine.undo().is_ok(), allowed);
        }
    }
}

proptest! {
    /// Stones are never created or destroyed.
    #[test]
    fn prop_conservation(stones in 1u32..8, steps in prop::collection::vec(step(), 0..200)) {
        let mut engine = KalahEngine::new(GameConfig::new().with_stones_per_pit(stones)).unwrap();
        let total = 12 * stones;

        for step in steps {
            if engine.is_game_over() {
                break;
            }
            apply(&mut engine, step);
            prop_assert_eq!(engine.board().total_stones(), total);
        }
    }

    /// Stores only grow, except when a move is taken back.
    #[test]
    fn prop_store_monotonicity(steps in prop::collection::vec(step(), 0..200)) {
        let mut engine = KalahEngine::new(GameConfig::new()).unwrap();
        let mut prev = (0, 0);

        for step in steps {
            if engine.is_game_over() {
                break;
            }
            apply(&mut engine, step);
            let now = (engine.store(Side::A), engine.store(Side::B));
            if !matches!(step, Step::Undo) {
                prop_assert!(now.0 >= prev.0 && now.1 >= prev.1);
            }
            prev = now;
        }
    }

    /// Move then undo restores the exact board.
    #[test]
    fn prop_undo_round_trip(
        prefix in prop::collection::vec((0usize..6).prop_map(Step::Sow), 0..40),
        choice in 0usize..6,
    ) {
        let mut engine = KalahEngine::new(GameConfig::new()).unwrap();
        for step in prefix {
            if engine.is_game_over() {
                break;
            }
            apply(&mut engine, step);
        }
        prop_assume!(!engine.is_game_over());
        if engine.is_turn_ended() {
            engine.end_turn().unwrap();
        }

        let before: Board = *engine.board();
        let remaining = engine.undo_remaining();
        prop_assert_eq!(remaining, UNDO_LIMIT);

        let moves = engine.legal_moves();
        let pit = moves[choice % moves.len()];
        let outcome = engine.make_move(pit.side, pit.index).unwrap();
        prop_assume!(!outcome.game_over);

        engine.undo().unwrap();
        prop_assert_eq!(*engine.board(), before);
        prop_assert_eq!(engine.undo_remaining(), remaining - 1);
    }

    /// Played to the end, every stone lands in a store.
    #[test]
    fn prop_game_ends_with_full_sweep(
        stones in 1u32..6,
        choices in prop::collection::vec(0usize..6, 2000),
    ) {
        let mut engine = KalahEngine::new(GameConfig::new().with_stones_per_pit(stones)).unwrap();

        for choice in choices {
            if engine.is_game_over() {
                break;
            }
            apply(&mut engine, Step::Sow(choice));
        }

        prop_assert!(engine.is_game_over());
        prop_assert_eq!(engine.row(Side::A), [0; 6]);
        prop_assert_eq!(engine.row(Side::B), [0; 6]);
        prop_assert_eq!(engine.store(Side::A) + engine.store(Side::B), 12 * stones);
        prop_assert!(engine.result().is_some());
    }
}

/// The side that moves first with a fixed config never changes between rounds.
#[test]
fn test_fixed_first_player_across_rounds() {
    let mut engine = KalahEngine::new(GameConfig::new().first_player(Side::A)).unwrap();
    for _ in 0..5 {
        engine.initialize(3).unwrap();
        assert_eq!(engine.current_player(), Side::A);
    }
}
