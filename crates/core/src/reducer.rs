//! Reducer module - one pure transition per action
//!
//! `reduce` is the single dispatch point: each [`GameAction`] maps to a
//! function from `&State` to a new `State`. Rejected moves return an equal
//! copy of the input.

use crate::pieces::Tetromino;
use crate::scoring::{calculate_level, calculate_score, speed_multiplier};
use crate::state::{LockEvent, State};
use crate::types::{Direction, GameAction, MoveDirection, BOARD_HEIGHT};

/// Fold one action into `state`.
///
/// While the game has ended only `Tick` does anything (it starts the next game).
pub fn reduce(state: &State, action: GameAction) -> State {
    match action {
        GameAction::Tick => tick(state),
        _ if state.game_end => state.clone(),
        GameAction::Move(direction) => shift(state, direction),
        GameAction::Rotate => rotate(state),
        GameAction::SoftDrop => move_down(state),
        GameAction::HardDrop => hard_drop(state),
        GameAction::Hold => hold(state),
    }
}

/// Fold a finite sequence of actions, returning the last state.
pub fn replay(state: State, actions: impl IntoIterator<Item = GameAction>) -> State {
    actions
        .into_iter()
        .fold(state, |state, action| reduce(&state, action))
}

/// Timer step: reset after game end, otherwise count up to the fall threshold.
pub fn tick(state: &State) -> State {
    if state.game_end {
        return state.reset();
    }
    if state.speed_count >= state.speed_multiplier {
        return move_down(state);
    }
    State {
        speed_count: state.speed_count + 1,
        ..state.clone()
    }
}

pub fn shift(state: &State, direction: MoveDirection) -> State {
    let direction = Direction::from(direction);
    if state.collides(direction) {
        return state.clone();
    }
    let (dx, dy) = direction.offset();
    State {
        current: state.current.shifted(dx, dy),
        ..state.clone()
    }
}

/// Rotate clockwise in place. No wall kicks: a blocked rotation is dropped.
pub fn rotate(state: &State) -> State {
    let candidate = State {
        current: state.current.rotated(),
        ..state.clone()
    };
    if candidate.collides(Direction::Rotate) {
        return state.clone();
    }
    candidate
}

/// Move the current piece down one row, or lock it if it is resting.
pub fn move_down(state: &State) -> State {
    if state.collides(Direction::Down) {
        return lock(state);
    }
    State {
        current: state.current.shifted(0, 1),
        speed_count: 0,
        ..state.clone()
    }
}

/// The state immediately before a hard drop locks: the piece has fallen as far
/// as it can and a Down collision is pending.
///
/// Each step moves the piece one row down, so the loop ends within
/// `BOARD_HEIGHT` steps.
pub fn landing(state: &State) -> State {
    let mut dropped = state.clone();
    for _ in 0..BOARD_HEIGHT {
        if dropped.collides(Direction::Down) {
            break;
        }
        dropped = move_down(&dropped);
    }
    dropped
}

pub fn hard_drop(state: &State) -> State {
    move_down(&landing(state))
}

/// Set the current piece aside once per lock.
///
/// Pieces entering the hold slot and pieces promoted to current both start
/// over at their spawn position and rotation.
pub fn hold(state: &State) -> State {
    if state.used_hold {
        return state.clone();
    }
    let stored = Some(state.current.respawned());

    match state.held {
        None => {
            let mut rng = state.rng;
            let next = Tetromino::spawn(rng.next_piece());
            State {
                current: state.next.respawned(),
                next,
                held: stored,
                used_hold: true,
                rng,
                ..state.clone()
            }
        }
        Some(held) => State {
            current: held.respawned(),
            held: stored,
            used_hold: true,
            ..state.clone()
        },
    }
}

/// Stamp the current piece, clear rows, score, and bring in the next piece.
fn lock(state: &State) -> State {
    let stamped = state.grid.with_tetromino(&state.current);
    let clear = stamped.line_clear();
    let cleared = clear.rows_cleared();

    let points = calculate_score(state.level, cleared);
    let rows_cleared = state.rows_cleared + cleared as u32;
    let level = calculate_level(rows_cleared);
    let game_end = clear.grid.is_topped_out();

    let mut rng = state.rng;
    let next = Tetromino::spawn(rng.next_piece());

    State {
        current: state.next,
        next,
        grid: clear.grid,
        score: state.score.saturating_add(points),
        level,
        game_end,
        speed_multiplier: speed_multiplier(level),
        speed_count: 0,
        rows_cleared,
        used_hold: false,
        pieces_locked: state.pieces_locked.wrapping_add(1),
        last_lock: Some(LockEvent {
            kind: state.current.kind(),
            rows_cleared: cleared as u32,
            points,
        }),
        rng,
        ..state.clone()
    }
}
