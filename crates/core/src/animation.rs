//! Sprite animation - frame tables and wall-clock cadence
//!
//! Each animation state maps to a fixed-length frame sequence. The frame index
//! advances on a wall-clock cadence and wraps by the length of whatever sequence
//! is current at the moment it advances.

use crate::types::{AnimState, Motion, ANIMATION_FRAME_MS};

/// Frames in the idle sequence
pub const IDLE_FRAMES: usize = 6;
/// Frames in the run sequence
pub const RUN_FRAMES: usize = 6;
/// Frames in the jump sequence
pub const JUMP_FRAMES: usize = 2;
/// Frames in the enemy ghost loop
pub const ENEMY_FRAMES: usize = 4;

/// Length of the frame sequence for a player state
///
/// Left-facing sequences are mirrored copies of the right-facing ones, so the
/// length depends only on the motion.
pub fn frame_count(state: AnimState) -> usize {
    match state.motion {
        Motion::Idle => IDLE_FRAMES,
        Motion::Run => RUN_FRAMES,
        Motion::Jump => JUMP_FRAMES,
    }
}

/// Frame index and cadence timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animator {
    frame: usize,
    last_advance_ms: u64,
}

impl Animator {
    pub fn new(now_ms: u64) -> Self {
        Self {
            frame: 0,
            last_advance_ms: now_ms,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Restart the sequence without touching the cadence timer
    pub fn rewind(&mut self) {
        self.frame = 0;
    }

    /// Advance one frame if more than one cadence has passed
    ///
    /// Returns true when the frame index changed.
    pub fn tick(&mut self, now_ms: u64, len: usize) -> bool {
        if now_ms.saturating_sub(self.last_advance_ms) <= ANIMATION_FRAME_MS {
            return false;
        }
        self.last_advance_ms = now_ms;
        self.frame = (self.frame + 1) % len.max(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Facing;

    #[test]
    fn test_frame_counts() {
        assert_eq!(frame_count(AnimState::new(Motion::Idle, Facing::Left)), 6);
        assert_eq!(frame_count(AnimState::new(Motion::Run, Facing::Right)), 6);
        assert_eq!(frame_count(AnimState::new(Motion::Jump, Facing::Left)), 2);
    }

    #[test]
    fn test_cadence_is_strictly_greater_than_200ms() {
        let mut anim = Animator::new(1000);
        assert!(!anim.tick(1200, 4));
        assert_eq!(anim.frame(), 0);
        assert!(anim.tick(1201, 4));
        assert_eq!(anim.frame(), 1);
        // Timer restarts at the advance.
        assert!(!anim.tick(1300, 4));
    }

    #[test]
    fn test_wraps_by_current_length() {
        let mut anim = Animator::new(0);
        let mut now = 0;
        for _ in 0..5 {
            now += 201;
            anim.tick(now, 6);
        }
        assert_eq!(anim.frame(), 5);
        // A shorter sequence wraps from the current index.
        now += 201;
        anim.tick(now, 2);
        assert_eq!(anim.frame(), 0);
    }

    #[test]
    fn test_rewind_keeps_timer() {
        let mut anim = Animator::new(0);
        anim.tick(201, 6);
        anim.rewind();
        assert_eq!(anim.frame(), 0);
        assert!(!anim.tick(300, 6));
    }
}
