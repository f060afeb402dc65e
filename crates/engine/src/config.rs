//! Driver configuration
//!
//! Defaults come from the compile-time constants in the types crate; a few
//! environment variables can override them at startup.

use std::time::Duration;

use crate::types::TICK_MS;

/// Runtime settings for the driver loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tick period in milliseconds (at least 1).
    pub tick_ms: u64,
    /// Fixed RNG seed; `None` seeds from the wall clock.
    pub seed: Option<u64>,
    /// JSON-lines event log destination; `None` disables the log.
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS as u64,
            seed: None,
            log_path: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_TICK_MS`: tick period (invalid or zero values keep the default)
    /// - `TETRIS_SEED`: fixed seed for reproducible games
    /// - `TETRIS_LOG_PATH`: enable the event log (blank disables it)
    pub fn from_env() -> Self {
        use std::env;

        Self::from_vars(
            env::var("TETRIS_TICK_MS").ok().as_deref(),
            env::var("TETRIS_SEED").ok().as_deref(),
            env::var("TETRIS_LOG_PATH").ok().as_deref(),
        )
    }

    fn from_vars(tick_ms: Option<&str>, seed: Option<&str>, log_path: Option<&str>) -> Self {
        let defaults = Self::default();

        let tick_ms = tick_ms
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = seed.and_then(|s| s.trim().parse::<u64>().ok());

        let log_path = log_path
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            tick_ms,
            seed,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
