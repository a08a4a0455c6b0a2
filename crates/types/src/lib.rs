//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, session journal).
//!
//! # World Dimensions
//!
//! All positions are in world pixels, origin at the top-left of the map, y growing down.
//!
//! - **Tile size**: 32 px
//! - **View**: 1024 x 576 px
//! - **Map right bound**: 2048 px (player cannot step past it)
//! - **World floor**: 1728 px (hard clamp for the bottom edge of an actor)
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_ACCEL` | 1 | Added to vertical velocity every frame |
//! | `JUMP_IMPULSE` | -20 | Vertical velocity set on jump |
//! | `BASE_SPEED` | 5 | Horizontal step per frame |
//! | `BOOSTED_SPEED` | 8 | Horizontal step after the sneakers pickup |
//! | `LAUNCH_VELOCITY` | -30 | Vertical velocity set by the jetpack pickup |
//! | `CONTACT_DAMAGE` | 20 | Health lost per enemy hit |
//! | `HIT_COOLDOWN_MS` | 1000 | Per-enemy window between hits |
//! | `ANIMATION_FRAME_MS` | 200 | Sprite animation cadence |
//! | `PROFIT_QUOTA` | 624 | Score needed for victory |
//!
//! # Examples
//!
//! ```
//! use world_of_magic_types::{AnimState, Facing, Motion, Rect};
//!
//! let a = Rect::new(0, 0, 32, 32);
//! let b = Rect::new(16, 16, 32, 32);
//! assert!(a.intersects(&b));
//!
//! // Sharing an edge is not an overlap.
//! let c = Rect::new(32, 0, 32, 32);
//! assert!(!a.intersects(&c));
//!
//! let state = AnimState::new(Motion::Run, Facing::Left);
//! assert_eq!(state.as_str(), "run-left");
//! ```

/// Tile edge length in world pixels
pub const TILE_SIZE: i32 = 32;

/// View (window) width in world pixels
pub const VIEW_WIDTH: i32 = 1024;

/// View (window) height in world pixels
pub const VIEW_HEIGHT: i32 = 576;

/// Player cannot move right once its right edge reaches this x
pub const MAP_RIGHT_BOUND: i32 = 2048;

/// Hard floor: an actor's bottom edge is clamped to this y
pub const WORLD_FLOOR_Y: i32 = 1728;

/// Gravity, added to vertical velocity once per frame
pub const GRAVITY_ACCEL: i32 = 1;

/// Vertical velocity applied when a jump starts
pub const JUMP_IMPULSE: i32 = -20;

/// Maximum jump allowance (single extra airborne jump)
pub const MAX_JUMP_ALLOWANCE: u8 = 1;

/// Horizontal step per frame at the start of a run
pub const BASE_SPEED: i32 = 5;

/// Horizontal step per frame after collecting the sneakers
pub const BOOSTED_SPEED: i32 = 8;

/// Vertical velocity set by the jetpack pickup
pub const LAUNCH_VELOCITY: i32 = -30;

/// Player starting health
pub const START_HEALTH: i32 = 100;

/// Health lost per enemy contact hit
pub const CONTACT_DAMAGE: i32 = 20;

/// Per-enemy cooldown between contact hits
pub const HIT_COOLDOWN_MS: u64 = 1000;

/// Sprite animation cadence
pub const ANIMATION_FRAME_MS: u64 = 200;

/// Score needed for victory
pub const PROFIT_QUOTA: u32 = 624;

/// Item values at or above this trigger a special effect instead of scoring
pub const SPECIAL_ITEM_THRESHOLD: u32 = 1000;

/// Item value of the jetpack (upward launch)
pub const JETPACK_VALUE: u32 = 1234;

/// Item value of the sneakers (permanent speed increase)
pub const SNEAKERS_VALUE: u32 = 2345;

/// Item value of the portal (immediate verdict)
pub const PORTAL_VALUE: u32 = 3456;

/// Target frame rate of the game loop
pub const TARGET_FPS: u32 = 60;

/// Frame budget in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 1000 / TARGET_FPS as u64;

/// Player body size
pub const PLAYER_WIDTH: i32 = 32;
pub const PLAYER_HEIGHT: i32 = 48;

/// Enemy body size (16 px ghost sprite scaled 3x)
pub const ENEMY_SIZE: i32 = 48;

/// Item body size (32 px icon scaled 2x)
pub const ITEM_SIZE: i32 = 64;

/// Replay button size
pub const REPLAY_BUTTON_WIDTH: i32 = 200;
pub const REPLAY_BUTTON_HEIGHT: i32 = 80;

/// HUD anchors in screen pixels
pub const HUD_SCORE_ANCHOR: (i32, i32) = (10, 10);
pub const HUD_HEALTH_ANCHOR: (i32, i32) = (10, 40);

pub const VICTORY_MESSAGE: &str = "VICTORY! You meet the profit quota!";
pub const DEFEAT_MESSAGE: &str = "YOU ARE FIRED! You did not meet the profit quota!";

/// HUD score line
pub fn score_text(score: u32) -> String {
    format!("Profit Quota: {} / {}", score, PROFIT_QUOTA)
}

/// HUD health line
pub fn health_text(health: i32) -> String {
    format!("Health: {}", health)
}


/// Axis-aligned rectangle in world pixels
///
/// `x`/`y` is the top-left corner. Width and height are expected to be positive;
/// use [`Rect::try_new`] when the extent comes from untrusted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle, rejecting a non-positive width or height
    pub fn try_new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Self::new(x, y, width, height))
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: i32) {
        self.y = y - self.height;
    }

    /// Copy translated by `(dx, dy)`
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Strict AABB overlap: no gap on either axis, shared edges do not count
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Point containment (right/bottom edges exclusive)
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Rectangle of the given size centred on `(cx, cy)`
    pub fn centered_at(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Self::new(cx - width / 2, cy - height / 2, width, height)
    }
}

/// Horizontal facing, sticky across idle and jump states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Motion component of the player animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Motion {
    #[default]
    Idle,
    Run,
    Jump,
}

impl Motion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Motion::Idle => "idle",
            Motion::Run => "run",
            Motion::Jump => "jump",
        }
    }
}

/// Player animation state: motion combined with facing
///
/// The six reachable states are `idle-left`, `idle-right`, `run-left`,
/// `run-right`, `jump-left` and `jump-right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimState {
    pub motion: Motion,
    pub facing: Facing,
}

impl AnimState {
    pub const fn new(motion: Motion, facing: Facing) -> Self {
        Self { motion, facing }
    }

    pub fn as_str(&self) -> &'static str {
        match (self.motion, self.facing) {
            (Motion::Idle, Facing::Left) => "idle-left",
            (Motion::Idle, Facing::Right) => "idle-right",
            (Motion::Run, Facing::Left) => "run-left",
            (Motion::Run, Facing::Right) => "run-right",
            (Motion::Jump, Facing::Left) => "jump-left",
            (Motion::Jump, Facing::Right) => "jump-right",
        }
    }
}

/// Key states sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyStates {
    pub left: bool,
    pub right: bool,
    /// Alternate jump key
    pub up: bool,
    pub space: bool,
}

impl KeyStates {
    pub fn jump(&self) -> bool {
        self.space || self.up
    }
}

/// Everything the game loop consumes from the input device for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub keys: KeyStates,
    /// Primary-button click in screen pixels, if any arrived this frame
    pub click: Option<(i32, i32)>,
}

/// End-of-run outcome chosen by the score at the moment of evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Victory,
    Defeat,
}

impl Verdict {
    pub fn for_score(score: u32) -> Self {
        if score >= PROFIT_QUOTA {
            Verdict::Victory
        } else {
            Verdict::Defeat
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Victory => VICTORY_MESSAGE,
            Verdict::Defeat => DEFEAT_MESSAGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Victory => "victory",
            Verdict::Defeat => "defeat",
        }
    }
}

/// RGB colour used by scene clear commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Night-sky background behind the level
pub const BACKGROUND: Color = Color::new(3, 0, 46);

/// Backdrop of the game-over and verdict screens
pub const BLACK: Color = Color::new(0, 0, 0);
