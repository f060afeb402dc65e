//! Driver loop: merges the tick timer and the input stream into one ordered
//! sequence of actions and folds each of them into the state.
//!
//! Backpressure policy:
//! - Input actions queue without bound and are taken before a ready tick.
//! - Ticks that fall behind are skipped rather than replayed in a burst.

use std::ops::ControlFlow;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::config::EngineConfig;
use crate::core::{reduce, State};
use crate::event_log::{EventLog, EventRecord};
use crate::types::GameAction;

pub struct Driver {
    config: EngineConfig,
}

impl Driver {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// First state of the session, seeded from the config or the wall clock.
    pub fn initial_state(&self) -> State {
        match self.config.seed {
            Some(seed) => State::new(seed),
            None => State::initial(),
        }
    }

    /// Fold actions into `state` until the input closes or `observe` breaks.
    ///
    /// `observe` sees the starting state and every state produced afterwards.
    /// Returns the last state, or the first error raised by `observe`.
    pub async fn run<F>(
        &self,
        mut state: State,
        mut actions: mpsc::UnboundedReceiver<GameAction>,
        mut observe: F,
    ) -> Result<State>
    where
        F: FnMut(&State) -> Result<ControlFlow<()>>,
    {
        let log = self.config.log_path.as_deref().map(EventLog::spawn);

        let mut ticks = time::interval(self.config.tick_interval());
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick of an interval completes immediately.
        ticks.tick().await;

        let mut flow = observe(&state);
        while let Ok(ControlFlow::Continue(())) = flow {
            let action = tokio::select! {
                biased;
                received = actions.recv() => received,
                _ = ticks.tick() => Some(GameAction::Tick),
            };
            let Some(action) = action else {
                break;
            };

            let next = reduce(&state, action);
            if let Some(log) = &log {
                for rec in EventRecord::between(&state, &next, action) {
                    log.record(rec);
                }
            }
            state = next;
            flow = observe(&state);
        }

        if let Some(log) = log {
            log.close().await;
        }

        flow.map(|_| state)
    }
}
