//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into the per-frame [`crate::types::FrameInput`]
//! the core consumes. Terminals differ in whether they report key releases, so
//! [`InputHandler`] tracks held keys with release events when they arrive and a
//! short timeout when they don't.

pub mod handler;
pub mod map;

pub use world_of_magic_types as types;

pub use handler::InputHandler;
pub use map::{click_position, handle_key_event, should_quit, Control};
