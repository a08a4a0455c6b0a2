//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens in a frame lives here. The crate does
//! no I/O: time comes in as `now_ms`, input as a [`FrameInput`], and drawing
//! goes out as a [`Scene`] of draw commands. That keeps every rule reproducible
//! in tests and lets any front end (terminal, GUI, headless) drive it.
//!
//! # Module Structure
//!
//! - [`tile_grid`]: solid tiles and AABB overlap queries
//! - [`camera`]: scroll offset that follows the player, clamped to the map
//! - [`physics`]: gravity, vertical resolution, horizontal pre-move checks
//! - [`animation`]: frame cycling on a 200ms cadence
//! - [`player`]: input handling and the run/idle/jump state machine
//! - [`enemy`]: contact damage behind a 1000ms cooldown
//! - [`pickup`]: one-shot items and the effects they produce
//! - [`level`]: validated layout, spawn tables
//! - [`scene`]: draw list handed to the renderer
//! - [`world`]: frame orchestration, game over and replay
//!
//! # Example
//!
//! ```
//! use world_of_magic_core::{FrameInput, FrameOutcome, LevelLayout, Scene, World};
//!
//! let level = LevelLayout::default_level().build().unwrap();
//! let mut world = World::new_game(level, 0);
//! let mut scene = Scene::new();
//!
//! let outcome = world.frame(&FrameInput::default(), 16, &mut scene);
//! assert_eq!(outcome, FrameOutcome::Running);
//! assert_eq!(world.player().health(), 100);
//! assert!(!scene.is_empty());
//! ```

pub mod animation;
pub mod camera;
pub mod enemy;
pub mod level;
pub mod physics;
pub mod pickup;
pub mod player;
pub mod scene;
pub mod tile_grid;
pub mod world;

pub use world_of_magic_types as types;

pub use camera::Camera;
pub use enemy::Enemy;
pub use level::{ItemSpawn, Level, LevelError, LevelLayout, Solid};
pub use physics::{Body, VerticalContact};
pub use pickup::{Item, ItemId, ItemSprite, Items, PickupEffect};
pub use player::{InputOutcome, Player};
pub use scene::{DrawCommand, Scene, SpriteRef};
pub use tile_grid::TileGrid;
pub use types::{FrameInput, KeyStates, Rect, Verdict};
pub use world::{FrameOutcome, GameEvent, World};
