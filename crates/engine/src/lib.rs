//! Engine runtime: drives the pure core from a timer and an input stream.
//!
//! - [`config`]: tick period, seed, and event-log settings (env overridable)
//! - [`driver`]: the async fold over merged tick/input actions
//! - [`event_log`]: optional JSON-lines record of locks, game overs, and resets

pub mod config;
pub mod driver;
pub mod event_log;

pub use stream_tetris_core as core;
pub use stream_tetris_types as types;

pub use config::EngineConfig;
pub use driver::Driver;
pub use event_log::{EventLog, EventRecord};
