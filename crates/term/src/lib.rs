//! Terminal presentation layer.
//!
//! Renders a `GameState` into a framebuffer of styled characters and flushes
//! it to the terminal. Nothing in here changes game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
