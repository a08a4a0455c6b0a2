//! Player controller - input, movement and animation state machine
//!
//! Per frame, [`Player::handle_input`] applies the horizontal/jump rules and picks
//! the animation state, then [`Player::update`] runs gravity, vertical collision
//! and the animation cadence.

use crate::animation::{frame_count, Animator};
use crate::physics::{Body, VerticalContact};
use crate::tile_grid::TileGrid;
use crate::types::{
    AnimState, Facing, KeyStates, Motion, Rect, BASE_SPEED, CONTACT_DAMAGE, JUMP_IMPULSE,
    MAP_RIGHT_BOUND, START_HEALTH,
};

/// Result of one frame of input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    /// Horizontal displacement applied this frame
    pub dx: i32,
    /// A jump started this frame
    pub jumped: bool,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    body: Body,
    speed: i32,
    state: AnimState,
    animator: Animator,
    health: i32,
    score: u32,
}

impl Player {
    pub fn new(spawn: Rect, now_ms: u64) -> Self {
        Self {
            body: Body::new(spawn),
            speed: BASE_SPEED,
            state: AnimState::new(Motion::Idle, Facing::Right),
            animator: Animator::new(now_ms),
            health: START_HEALTH,
            score: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn velocity_y(&self) -> i32 {
        self.body.velocity_y
    }

    pub fn jump_allowance(&self) -> u8 {
        self.body.jump_allowance()
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    /// Raw frame index (may exceed the current sequence until the next advance)
    pub fn frame_index(&self) -> usize {
        self.animator.frame()
    }

    /// Frame index wrapped into the current state's sequence
    pub fn display_frame(&self) -> usize {
        self.animator.frame() % frame_count(self.state)
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_grounded(&self, grid: &TileGrid) -> bool {
        self.body.is_grounded(grid)
    }

    /// Apply one frame of input
    ///
    /// Left wins over right. A direction only counts when the destination is
    /// clear of tiles and the player is inside the map edge on that side. A jump
    /// repeats the held direction's step once more in the same frame.
    pub fn handle_input(&mut self, keys: &KeyStates, grid: &TileGrid) -> InputOutcome {
        let mut outcome = InputOutcome::default();

        if let Some(facing) = self.horizontal_step(keys, grid) {
            outcome.dx += self.step_toward(facing);
            self.state = AnimState::new(Motion::Run, facing);
        } else {
            self.state = AnimState::new(Motion::Idle, self.state.facing);
        }

        if keys.jump() && self.body.rect.y > 0 && self.body.consume_jump() {
            self.body.velocity_y = JUMP_IMPULSE;
            self.animator.rewind();
            self.state = AnimState::new(Motion::Jump, self.state.facing);
            outcome.jumped = true;

            if let Some(facing) = self.horizontal_step(keys, grid) {
                outcome.dx += self.step_toward(facing);
            }
        }

        outcome
    }

    fn horizontal_step(&self, keys: &KeyStates, grid: &TileGrid) -> Option<Facing> {
        let rect = self.body.rect;
        if keys.left && !self.body.is_wall_blocked(grid, -self.speed) && rect.left() > 0 {
            Some(Facing::Left)
        } else if keys.right
            && !self.body.is_wall_blocked(grid, self.speed)
            && rect.right() < MAP_RIGHT_BOUND
        {
            Some(Facing::Right)
        } else {
            None
        }
    }

    fn step_toward(&mut self, facing: Facing) -> i32 {
        let dx = match facing {
            Facing::Left => -self.speed,
            Facing::Right => self.speed,
        };
        self.body.rect.x += dx;
        dx
    }

    /// Gravity, vertical collision and animation cadence for one frame
    pub fn update(&mut self, grid: &TileGrid, now_ms: u64) -> VerticalContact {
        let contact = self.body.step_vertical(grid);
        self.animator.tick(now_ms, frame_count(self.state));
        contact
    }

    /// Take one contact hit; health may go below zero
    pub fn hit(&mut self) {
        self.health -= CONTACT_DAMAGE;
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    /// Override vertical velocity (upward launch)
    pub fn set_velocity_y(&mut self, velocity_y: i32) {
        self.body.velocity_y = velocity_y;
    }

    /// Replace the horizontal step for the rest of the run
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }
}
