//! Game state module - the immutable value every action is folded into
//!
//! A `State` is never mutated in place once published: the reducer builds a
//! new value for every transition, so any observer can hold on to a state
//! while the next one is computed.

use crate::collision::collides;
use crate::grid::Grid;
use crate::pieces::Tetromino;
use crate::reducer::reduce;
use crate::rng::Lcg;
use crate::scoring::speed_multiplier;
use crate::types::{Direction, GameAction, PieceKind};

/// The most recent lock within the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub current: Tetromino,
    pub next: Tetromino,
    pub held: Option<Tetromino>,
    pub grid: Grid,
    pub score: u32,
    pub level: u32,
    /// Best score of any finished game in this process.
    pub high_score: u32,
    pub game_end: bool,
    /// Ticks per automatic fall step.
    pub speed_multiplier: u32,
    /// Ticks since the last downward movement.
    pub speed_count: u32,
    /// Rows cleared this game.
    pub rows_cleared: u32,
    pub used_hold: bool,
    /// Game counter, incremented on every reset.
    pub episode: u32,
    pub pieces_locked: u32,
    pub last_lock: Option<LockEvent>,
    pub rng: Lcg,
}

impl State {
    /// Create the first game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::fresh(Lcg::new(seed), 0, 0)
    }

    /// Create the first game, seeding the RNG from the wall clock
    pub fn initial() -> Self {
        Self::fresh(Lcg::from_clock(), 0, 0)
    }

    fn fresh(mut rng: Lcg, high_score: u32, episode: u32) -> Self {
        let current = Tetromino::spawn(rng.next_piece());
        let next = Tetromino::spawn(rng.next_piece());
        let level = 1;

        Self {
            current,
            next,
            held: None,
            grid: Grid::new(),
            score: 0,
            level,
            high_score,
            game_end: false,
            speed_multiplier: speed_multiplier(level),
            speed_count: 0,
            rows_cleared: 0,
            used_hold: false,
            episode,
            pieces_locked: 0,
            last_lock: None,
            rng,
        }
    }

    /// Start the next game.
    ///
    /// Everything is reinitialized except the high score, which keeps the
    /// better of the old high score and this game's score, and the RNG, which
    /// continues its sequence.
    pub fn reset(&self) -> Self {
        Self::fresh(
            self.rng,
            self.high_score.max(self.score),
            self.episode.wrapping_add(1),
        )
    }

    /// Would the current piece collide after one step in `direction`?
    pub fn collides(&self, direction: Direction) -> bool {
        collides(&self.grid, &self.current, direction)
    }

    /// Fold one action into this state
    pub fn apply(&self, action: GameAction) -> State {
        reduce(self, action)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(1)
    }
}
