//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the core's draw list is rasterised
//! into a framebuffer of styled cells, which is then flushed to the terminal.
//! It avoids widget/layout libraries so scale and glyph choice stay under
//! direct control.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use world_of_magic_core as core;
pub use world_of_magic_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, DEFAULT_CELL_H, DEFAULT_CELL_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
