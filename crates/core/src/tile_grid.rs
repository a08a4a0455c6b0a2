//! Tile grid module - static solid level geometry
//!
//! The grid is an ordered list of axis-aligned rectangles built once from a level
//! layout and never mutated afterwards. Queries return tiles in insertion order.

use crate::types::Rect;

/// Immutable collection of solid tile rectangles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileGrid {
    tiles: Vec<Rect>,
}

impl TileGrid {
    /// Create a grid from tiles in their load order
    pub fn new(tiles: Vec<Rect>) -> Self {
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles, in insertion order
    pub fn tiles(&self) -> &[Rect] {
        &self.tiles
    }

    /// Iterate every tile whose bounds overlap `rect`
    pub fn colliding<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = &'a Rect> + 'a {
        self.tiles.iter().filter(move |tile| tile.intersects(rect))
    }

    /// Collect every tile whose bounds overlap `rect`, in insertion order
    pub fn query_colliding(&self, rect: &Rect) -> Vec<Rect> {
        self.colliding(rect).copied().collect()
    }

    /// Whether any tile overlaps `rect`
    pub fn any_colliding(&self, rect: &Rect) -> bool {
        self.colliding(rect).next().is_some()
    }
}
