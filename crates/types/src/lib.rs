//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so the
//! engine, the input mapper, and the terminal view can share them.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing and Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Period of the driver's tick action |
//! | `MULTIPLIER_BASE` | 10 | Ticks-per-step threshold before level is subtracted |
//! | `MIN_SPEED_MULTIPLIER` | 1 | Floor for the ticks-per-step threshold |
//! | `ROWS_PER_LEVEL` | 3 | Cleared rows needed per level |
//!
//! # Examples
//!
//! ```
//! use stream_tetris_types::{Direction, GameAction, MoveDirection, PieceKind, BOARD_WIDTH};
//!
//! let action = GameAction::Move(MoveDirection::Left);
//! assert_eq!(action.as_str(), "moveLeft");
//! assert_eq!(Direction::from(MoveDirection::Right).offset(), (1, 0));
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Tick period in milliseconds.
pub const TICK_MS: u32 = 50;

/// Ticks-per-fall-step threshold at level 0; the current level is subtracted from it.
pub const MULTIPLIER_BASE: u32 = 10;

/// Lowest ticks-per-fall-step threshold, reached at level 9.
pub const MIN_SPEED_MULTIPLIER: u32 = 1;

/// Cleared rows needed to advance one level.
pub const ROWS_PER_LEVEL: u32 = 3;

/// Line clear scoring table for 1..=4 rows cleared at once.
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Offset (in board cells) of a piece drawn inside the next/hold preview boxes.
pub const PREVIEW_ANCHOR: (u8, u8) = (1, 1);

/// The seven tetromino piece kinds.
///
/// The kind doubles as the color tag of a placed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use stream_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "i");
    /// assert_eq!(PieceKind::O.as_str(), "o");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Horizontal direction carried by [`GameAction::Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Left,
    Right,
}

/// Direction a collision check is evaluated in.
///
/// `Rotate` checks the already-rotated candidate at its unchanged position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
    Rotate,
}

impl Direction {
    /// Grid offset `(dx, dy)` applied to every filled cell before checking it.
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Rotate => (0, 0),
        }
    }
}

impl From<MoveDirection> for Direction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Left => Direction::Left,
            MoveDirection::Right => Direction::Right,
        }
    }
}

/// Actions folded into the game state by the reducer.
///
/// `Tick` comes from the driver's timer; every other action comes from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Periodic gravity step (and reset after game end)
    Tick,
    /// Shift the current piece one cell sideways
    Move(MoveDirection),
    /// Rotate the current piece clockwise
    Rotate,
    /// Drop the current piece one cell (locks if it is resting)
    SoftDrop,
    /// Drop the current piece to its landing row and lock it
    HardDrop,
    /// Swap the current piece into the hold slot
    Hold,
}

impl GameAction {
    /// camelCase name, used by the event log.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tick => "tick",
            GameAction::Move(MoveDirection::Left) => "moveLeft",
            GameAction::Move(MoveDirection::Right) => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;
