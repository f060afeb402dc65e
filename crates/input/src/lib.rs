//! Terminal input: maps `crossterm` key events into [`types::GameAction`]
//! values and forwards them to the driver over a channel.
//!
//! The driver owns the tick timer, so nothing here repeats keys or tracks
//! timing. Terminal auto-repeat arrives as ordinary presses.

pub mod map;
pub mod reader;

pub use stream_tetris_types as types;

pub use map::{classify, handle_key_event, should_quit, KeyInput};
pub use reader::spawn_reader;
