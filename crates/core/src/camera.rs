//! Camera module - world to screen mapping
//!
//! Rigid follow: every update snaps the offset so the target sits at the view
//! centre, then clamps each axis so the view never leaves the map.

use crate::types::Rect;

/// Scrolling camera over a `world_width` x `world_height` map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    offset_x: i32,
    offset_y: i32,
    view_width: i32,
    view_height: i32,
    world_width: i32,
    world_height: i32,
}

impl Camera {
    pub fn new(world_width: i32, world_height: i32, view_width: i32, view_height: i32) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            view_width,
            view_height,
            world_width,
            world_height,
        }
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    pub fn world_size(&self) -> (i32, i32) {
        (self.world_width, self.world_height)
    }

    pub fn view_size(&self) -> (i32, i32) {
        (self.view_width, self.view_height)
    }

    /// Centre on `target` with the given view size, clamped to the map
    pub fn follow(&mut self, target: &Rect, view_width: i32, view_height: i32) {
        self.view_width = view_width;
        self.view_height = view_height;

        let raw_x = -target.x + view_width / 2;
        let raw_y = -target.y + view_height / 2;

        self.offset_x = clamp_axis(raw_x, self.world_width, view_width);
        self.offset_y = clamp_axis(raw_y, self.world_height, view_height);
    }

    /// Screen-space rectangle for a world-space one
    pub fn transform(&self, rect: &Rect) -> Rect {
        rect.offset(self.offset_x, self.offset_y)
    }
}

/// Clamp one axis to `[-(world - view), 0]`
///
/// A map smaller than the view degenerates to a fixed offset of 0.
fn clamp_axis(raw: i32, world: i32, view: i32) -> i32 {
    let lower = -(world - view).max(0);
    raw.min(0).max(lower)
}
