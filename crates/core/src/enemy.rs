//! Enemy controller - animated ghost with cooldown-gated contact damage

use crate::animation::{Animator, ENEMY_FRAMES};
use crate::types::{Rect, ENEMY_SIZE, HIT_COOLDOWN_MS};

/// A stationary ghost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    rect: Rect,
    animator: Animator,
    last_hit_ms: u64,
}

impl Enemy {
    /// Spawn at `(x, y)`; the hit cooldown starts running at spawn time
    pub fn new(x: i32, y: i32, now_ms: u64) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            animator: Animator::new(now_ms),
            last_hit_ms: now_ms,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn frame(&self) -> usize {
        self.animator.frame()
    }

    /// Advance the animation and test for contact with the player
    ///
    /// Returns true when a hit lands. Continued overlap inside the cooldown
    /// window does nothing.
    pub fn update(&mut self, player: &Rect, now_ms: u64) -> bool {
        self.animator.tick(now_ms, ENEMY_FRAMES);

        if now_ms.saturating_sub(self.last_hit_ms) > HIT_COOLDOWN_MS && self.rect.intersects(player) {
            self.last_hit_ms = now_ms;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hit_without_overlap() {
        let mut e = Enemy::new(100, 100, 0);
        assert!(!e.update(&Rect::new(300, 100, 32, 48), 5_000));
    }

    #[test]
    fn test_cooldown_gates_continuous_overlap() {
        let mut e = Enemy::new(100, 100, 0);
        let player = Rect::new(110, 110, 32, 48);

        // Spawn counts as the last hit.
        assert!(!e.update(&player, 1_000));
        assert!(e.update(&player, 1_001));

        let mut hits = 1;
        let mut now = 1_001;
        while now < 3_000 {
            now += 16;
            if e.update(&player, now) {
                hits += 1;
            }
        }
        // 1001 -> hit, next at > 2001, next at > 3001 (outside the loop)
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_animation_loops_four_frames() {
        let mut e = Enemy::new(0, 0, 0);
        let far = Rect::new(1000, 1000, 10, 10);
        let mut now = 0;
        for _ in 0..4 {
            now += 201;
            e.update(&far, now);
        }
        assert_eq!(e.frame(), 0);
        now += 201;
        e.update(&far, now);
        assert_eq!(e.frame(), 1);
    }
}
