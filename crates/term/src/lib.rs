//! Terminal rendering for the game.
//!
//! States are drawn into a plain framebuffer of styled characters, and only
//! the cells that changed since the previous frame are written to the terminal.
//! Nothing here feeds back into the engine.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use stream_tetris_core as core;
pub use stream_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
