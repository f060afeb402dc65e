//! Property tests for the reducer over generated action streams.
//!
//! Invariants covered:
//! - The grid keeps 20 rows of 10 cells in every reachable state.
//! - The current rotation always indexes an existing shape.
//! - Score never decreases within a game; high score never decreases at all.
//! - Level and fall speed always match the cumulative row count.
//! - Hold is re-armed by every lock.
//! - Replaying the same seed and actions reproduces the same states.

use proptest::prelude::*;
use stream_tetris::core::reducer::replay;
use stream_tetris::core::{calculate_level, reduce, speed_multiplier, State};
use stream_tetris::types::{GameAction, MoveDirection, BOARD_HEIGHT, BOARD_WIDTH};

fn action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        4 => Just(GameAction::Tick),
        2 => Just(GameAction::Move(MoveDirection::Left)),
        2 => Just(GameAction::Move(MoveDirection::Right)),
        2 => Just(GameAction::Rotate),
        1 => Just(GameAction::SoftDrop),
        1 => Just(GameAction::HardDrop),
        1 => Just(GameAction::Hold),
    ]
}

fn assert_shape_invariants(state: &State) {
    assert_eq!(state.grid.rows().count(), BOARD_HEIGHT as usize);
    for row in state.grid.rows() {
        assert_eq!(row.len(), BOARD_WIDTH as usize);
    }
    assert!(state.current.rotation() < state.current.rotation_count());
    assert_eq!(state.level, calculate_level(state.rows_cleared));
    assert_eq!(state.speed_multiplier, speed_multiplier(state.level));
    assert!(state.speed_multiplier >= 1);
}

proptest! {
    #[test]
    fn generated_rollout_respects_core_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..300),
    ) {
        let mut state = State::new(seed);
        assert_shape_invariants(&state);

        for action in actions {
            let next = reduce(&state, action);
            assert_shape_invariants(&next);

            prop_assert!(next.high_score >= state.high_score);
            if next.episode == state.episode {
                prop_assert!(next.score >= state.score);
                prop_assert!(next.rows_cleared >= state.rows_cleared);
            } else {
                prop_assert_eq!(next.score, 0);
                prop_assert_eq!(next.high_score, state.high_score.max(state.score));
            }
            if next.pieces_locked != state.pieces_locked {
                prop_assert!(!next.used_hold);
            }

            state = next;
        }
    }

    #[test]
    fn replay_is_deterministic(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..200),
    ) {
        let a = replay(State::new(seed), actions.iter().copied());
        let b = replay(State::new(seed), actions.iter().copied());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn hard_drop_always_locks(
        seed in any::<u64>(),
        shifts in prop::collection::vec(prop_oneof![
            Just(GameAction::Move(MoveDirection::Left)),
            Just(GameAction::Move(MoveDirection::Right)),
            Just(GameAction::Rotate),
        ], 0..12),
    ) {
        let state = replay(State::new(seed), shifts);
        let dropped = reduce(&state, GameAction::HardDrop);
        prop_assert_eq!(dropped.pieces_locked, state.pieces_locked + 1);
    }
}
