//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the state machine. It has **zero
//! dependencies** on UI, timers, or I/O:
//!
//! - **Pure**: every action is a function from `&State` to a new `State`
//! - **Deterministic**: the RNG lives inside the state, so the same seed and
//!   the same action sequence always produce the same game
//! - **Total**: every action on every state yields a valid state
//!
//! # Module Structure
//!
//! - [`rng`]: linear congruential generator used to pick pieces
//! - [`grid`]: 10x20 board, piece stamping, line clearing, top-out check
//! - [`pieces`]: tetromino shape matrices and the immutable falling piece
//! - [`collision`]: wall/floor/cell collision checks
//! - [`scoring`]: line-clear points, level, and fall speed
//! - [`state`]: the game state value
//! - [`reducer`]: the action-driven transitions
//!
//! # Example
//!
//! ```
//! use stream_tetris_core::{reducer::replay, State};
//! use stream_tetris_types::{GameAction, MoveDirection};
//!
//! let state = State::new(12345);
//! let state = replay(
//!     state,
//!     [
//!         GameAction::Move(MoveDirection::Right),
//!         GameAction::Rotate,
//!         GameAction::HardDrop,
//!     ],
//! );
//!
//! assert_eq!(state.pieces_locked, 1);
//! assert!(!state.grid.is_empty());
//! ```

pub mod collision;
pub mod grid;
pub mod pieces;
pub mod reducer;
pub mod rng;
pub mod scoring;
pub mod state;

pub use stream_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use grid::{Grid, LineClear};
pub use pieces::{shapes, spawn_position, Tetromino};
pub use reducer::reduce;
pub use rng::Lcg;
pub use scoring::{calculate_level, calculate_score, speed_multiplier};
pub use state::{LockEvent, State};
