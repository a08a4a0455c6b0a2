//! Actor physics - gravity integration and tile collision resolution
//!
//! Vertical resolution walks the colliding tiles in grid insertion order and
//! corrects tile-by-tile. Once the first correction zeroes the velocity the
//! remaining tiles are no-ops, so with overlapping tiles at different heights
//! the outcome depends on that order. Co-planar floors resolve identically.

use crate::tile_grid::TileGrid;
use crate::types::{Rect, GRAVITY_ACCEL, MAX_JUMP_ALLOWANCE, WORLD_FLOOR_Y};

/// How the last vertical step ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// No tile touched, still airborne
    None,
    /// Fell onto a tile top
    Landed,
    /// Rose into a tile bottom
    Ceiling,
    /// Clamped to the world floor
    Floor,
}

impl VerticalContact {
    /// Landing or floor clamp, the two cases that replenish the jump allowance
    pub fn is_grounding(&self) -> bool {
        matches!(self, VerticalContact::Landed | VerticalContact::Floor)
    }
}

/// Collidable body shared by the player and enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub rect: Rect,
    pub velocity_y: i32,
    jump_allowance: u8,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            velocity_y: 0,
            jump_allowance: MAX_JUMP_ALLOWANCE,
        }
    }

    pub fn jump_allowance(&self) -> u8 {
        self.jump_allowance
    }

    /// Spend the jump allowance; returns false when none is left
    pub fn consume_jump(&mut self) -> bool {
        if self.jump_allowance == 0 {
            return false;
        }
        self.jump_allowance -= 1;
        true
    }

    fn replenish_jump(&mut self) {
        self.jump_allowance = MAX_JUMP_ALLOWANCE;
    }

    /// One frame of gravity, movement and vertical collision resolution
    pub fn step_vertical(&mut self, grid: &TileGrid) -> VerticalContact {
        self.velocity_y += GRAVITY_ACCEL;
        self.rect.y += self.velocity_y;

        let mut contact = VerticalContact::None;
        let probe = self.rect;
        for tile in grid.colliding(&probe) {
            if self.velocity_y > 0 {
                self.rect.set_bottom(tile.top());
                self.velocity_y = 0;
                self.replenish_jump();
                contact = VerticalContact::Landed;
            } else if self.velocity_y < 0 {
                self.rect.y = tile.bottom() - 1;
                self.velocity_y = 0;
                contact = VerticalContact::Ceiling;
            }
        }

        if self.rect.bottom() > WORLD_FLOOR_Y {
            self.rect.set_bottom(WORLD_FLOOR_Y);
            self.velocity_y = 0;
            self.replenish_jump();
            contact = VerticalContact::Floor;
        }

        contact
    }

    /// Whether moving by `dx` would put the body inside any tile
    pub fn is_wall_blocked(&self, grid: &TileGrid, dx: i32) -> bool {
        grid.any_colliding(&self.rect.offset(dx, 0))
    }

    /// Move by `dx` unless the destination collides; no partial slide
    pub fn try_move_horizontal(&mut self, grid: &TileGrid, dx: i32) -> bool {
        if self.is_wall_blocked(grid, dx) {
            return false;
        }
        self.rect.x += dx;
        true
    }

    /// Derived grounded flag: resting on a tile or on the world floor
    pub fn is_grounded(&self, grid: &TileGrid) -> bool {
        self.rect.bottom() >= WORLD_FLOOR_Y || grid.any_colliding(&self.rect.offset(0, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_at(y: i32) -> TileGrid {
        TileGrid::new((0..8).map(|i| Rect::new(i * 32, y, 32, 32)).collect())
    }

    #[test]
    fn test_gravity_accelerates_free_fall() {
        let grid = TileGrid::default();
        let mut body = Body::new(Rect::new(0, 0, 32, 48));
        assert_eq!(body.step_vertical(&grid), VerticalContact::None);
        assert_eq!(body.velocity_y, 1);
        assert_eq!(body.rect.y, 1);
        body.step_vertical(&grid);
        assert_eq!(body.velocity_y, 2);
        assert_eq!(body.rect.y, 3);
    }

    #[test]
    fn test_landing_snaps_and_replenishes() {
        let grid = floor_at(200);
        let mut body = Body::new(Rect::new(40, 140, 32, 48));
        body.velocity_y = 15;
        assert!(body.consume_jump());
        assert_eq!(body.jump_allowance(), 0);

        let contact = body.step_vertical(&grid);
        assert_eq!(contact, VerticalContact::Landed);
        assert_eq!(body.rect.bottom(), 200);
        assert_eq!(body.velocity_y, 0);
        assert_eq!(body.jump_allowance(), 1);
        assert!(body.is_grounded(&grid));
    }

    #[test]
    fn test_resting_body_stays_put() {
        let grid = floor_at(200);
        let mut body = Body::new(Rect::new(40, 152, 32, 48));
        for _ in 0..10 {
            assert_eq!(body.step_vertical(&grid), VerticalContact::Landed);
            assert_eq!(body.rect.bottom(), 200);
        }
    }

    #[test]
    fn test_ceiling_bump_sits_one_unit_inside() {
        let grid = floor_at(0);
        let mut body = Body::new(Rect::new(40, 40, 32, 48));
        body.velocity_y = -20;
        assert!(body.consume_jump());

        let contact = body.step_vertical(&grid);
        assert_eq!(contact, VerticalContact::Ceiling);
        assert_eq!(body.rect.top(), 31);
        assert_eq!(body.velocity_y, 0);
        // Hitting a ceiling does not give the jump back.
        assert_eq!(body.jump_allowance(), 0);
    }

    #[test]
    fn test_world_floor_clamp() {
        let grid = TileGrid::default();
        let mut body = Body::new(Rect::new(0, WORLD_FLOOR_Y - 40, 32, 48));
        body.velocity_y = 30;
        body.consume_jump();
        assert_eq!(body.step_vertical(&grid), VerticalContact::Floor);
        assert_eq!(body.rect.bottom(), WORLD_FLOOR_Y);
        assert_eq!(body.velocity_y, 0);
        assert_eq!(body.jump_allowance(), 1);
    }

    #[test]
    fn test_first_tile_in_insertion_order_wins() {
        // A high ledge listed before a low one: the high one resolves first.
        let grid = TileGrid::new(vec![Rect::new(0, 190, 32, 32), Rect::new(0, 200, 32, 32)]);
        let mut body = Body::new(Rect::new(0, 150, 32, 48));
        body.velocity_y = 10;
        body.step_vertical(&grid);
        assert_eq!(body.rect.bottom(), 190);

        let grid = TileGrid::new(vec![Rect::new(0, 200, 32, 32), Rect::new(0, 190, 32, 32)]);
        let mut body = Body::new(Rect::new(0, 150, 32, 48));
        body.velocity_y = 10;
        body.step_vertical(&grid);
        assert_eq!(body.rect.bottom(), 200);
    }

    #[test]
    fn test_horizontal_move_is_all_or_nothing() {
        let grid = TileGrid::new(vec![Rect::new(100, 0, 32, 64)]);
        let mut body = Body::new(Rect::new(64, 0, 32, 48));
        // Gap of 4 px to the wall, step of 5 collides: no partial move.
        assert!(!body.try_move_horizontal(&grid, 5));
        assert_eq!(body.rect.x, 64);
        assert!(body.try_move_horizontal(&grid, -5));
        assert_eq!(body.rect.x, 59);
    }

    #[test]
    fn test_allowance_never_negative() {
        let mut body = Body::new(Rect::new(0, 0, 10, 10));
        assert!(body.consume_jump());
        assert!(!body.consume_jump());
        assert_eq!(body.jump_allowance(), 0);
    }
}
