//! Level module - solid geometry layout and spawn tables
//!
//! A [`LevelLayout`] describes geometry in tile units as platform and wall runs.
//! [`LevelLayout::build`] validates it once and expands every run into one
//! rectangle per tile, producing the immutable [`TileGrid`] a [`Level`] owns.

use std::fmt;

use crate::pickup::{Item, ItemSprite};
use crate::tile_grid::TileGrid;
use crate::types::{Rect, PLAYER_HEIGHT, PLAYER_WIDTH, TILE_SIZE, VIEW_HEIGHT, VIEW_WIDTH};

/// Map size of the default level in tiles (2048 x 1728 px)
pub const DEFAULT_MAP_COLS: i32 = 64;
pub const DEFAULT_MAP_ROWS: i32 = 54;

/// A run of solid tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solid {
    /// `len` tiles to the right of `(col, row)`
    Platform { col: i32, row: i32, len: i32 },
    /// `len` tiles downward from `(col, row)`
    Wall { col: i32, row: i32, len: i32 },
}

impl Solid {
    fn tiles(&self) -> impl Iterator<Item = (i32, i32)> {
        let (col, row, len, horizontal) = match *self {
            Solid::Platform { col, row, len } => (col, row, len, true),
            Solid::Wall { col, row, len } => (col, row, len, false),
        };
        (0..len).map(move |i| if horizontal { (col + i, row) } else { (col, row + i) })
    }

    fn len(&self) -> i32 {
        match *self {
            Solid::Platform { len, .. } | Solid::Wall { len, .. } => len,
        }
    }
}

/// Where an item starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpawn {
    pub x: i32,
    pub y: i32,
    pub sprite: ItemSprite,
    pub value: u32,
}

/// Level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Map or tile dimensions are not positive
    EmptyMap,
    /// A solid run has no tiles
    EmptySolid { index: usize },
    /// A solid run leaves the map
    SolidOutOfBounds { index: usize },
    /// A spawn point lies outside the map
    SpawnOutOfBounds { what: &'static str, x: i32, y: i32 },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::EmptyMap => write!(f, "level map has no area"),
            LevelError::EmptySolid { index } => write!(f, "solid #{} has no tiles", index),
            LevelError::SolidOutOfBounds { index } => {
                write!(f, "solid #{} extends outside the map", index)
            }
            LevelError::SpawnOutOfBounds { what, x, y } => {
                write!(f, "{} spawn ({}, {}) is outside the map", what, x, y)
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Level description in tile units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLayout {
    pub cols: i32,
    pub rows: i32,
    pub tile_size: i32,
    pub solids: Vec<Solid>,
    pub player_spawn: (i32, i32),
    pub items: Vec<ItemSpawn>,
    pub enemies: Vec<(i32, i32)>,
}

impl LevelLayout {
    /// An empty map with no solids or spawns other than the player
    pub fn empty(cols: i32, rows: i32) -> Self {
        Self {
            cols,
            rows,
            tile_size: TILE_SIZE,
            solids: Vec::new(),
            player_spawn: default_player_spawn(),
            items: Vec::new(),
            enemies: Vec::new(),
        }
    }

    /// The shipped level
    pub fn default_level() -> Self {
        use Solid::{Platform, Wall};

        let solids = vec![
            // Starting ledge with a low wall near its right end.
            Platform { col: 0, row: 18, len: 29 },
            Wall { col: 26, row: 15, len: 3 },
            // Stepping stone up to the high ledge.
            Platform { col: 30, row: 13, len: 4 },
            Platform { col: 35, row: 8, len: 22 },
            Platform { col: 58, row: 8, len: 6 },
            // Middle band.
            Platform { col: 52, row: 22, len: 9 },
            Platform { col: 40, row: 24, len: 9 },
            Platform { col: 22, row: 28, len: 11 },
            Platform { col: 33, row: 31, len: 8 },
            Platform { col: 30, row: 38, len: 11 },
            // Lower band.
            Platform { col: 44, row: 42, len: 9 },
            Platform { col: 10, row: 46, len: 11 },
            Platform { col: 56, row: 52, len: 8 },
            // Ground.
            Platform { col: 0, row: 53, len: 64 },
        ];

        let items = vec![
            ItemSpawn { x: 1960, y: 190, sprite: ItemSprite::Sneakers, value: 2345 },
            ItemSpawn { x: 1960, y: 1590, sprite: ItemSprite::Stars, value: 521 },
            ItemSpawn { x: 1100, y: 920, sprite: ItemSprite::Shovel, value: 394 },
            ItemSpawn { x: 1100, y: 1140, sprite: ItemSprite::Jetpack, value: 1234 },
            ItemSpawn { x: 30, y: 490, sprite: ItemSprite::ClownHorn, value: 241 },
            ItemSpawn { x: 890, y: 830, sprite: ItemSprite::Portal, value: 3456 },
        ];

        let enemies = vec![(1200, 200), (1700, 200), (100, 520), (400, 520), (700, 520)];

        Self {
            cols: DEFAULT_MAP_COLS,
            rows: DEFAULT_MAP_ROWS,
            tile_size: TILE_SIZE,
            solids,
            player_spawn: default_player_spawn(),
            items,
            enemies,
        }
    }

    /// Validate and expand into a playable level
    pub fn build(&self) -> Result<Level, LevelError> {
        if self.cols <= 0 || self.rows <= 0 || self.tile_size <= 0 {
            return Err(LevelError::EmptyMap);
        }

        let mut tiles = Vec::new();
        for (index, solid) in self.solids.iter().enumerate() {
            if solid.len() <= 0 {
                return Err(LevelError::EmptySolid { index });
            }
            for (col, row) in solid.tiles() {
                if col < 0 || col >= self.cols || row < 0 || row >= self.rows {
                    return Err(LevelError::SolidOutOfBounds { index });
                }
                tiles.push(Rect::new(
                    col * self.tile_size,
                    row * self.tile_size,
                    self.tile_size,
                    self.tile_size,
                ));
            }
        }

        let width_px = self.cols * self.tile_size;
        let height_px = self.rows * self.tile_size;
        let in_map = |what: &'static str, (x, y): (i32, i32)| {
            if x < 0 || x >= width_px || y < 0 || y >= height_px {
                Err(LevelError::SpawnOutOfBounds { what, x, y })
            } else {
                Ok(())
            }
        };

        in_map("player", self.player_spawn)?;
        for item in &self.items {
            in_map("item", (item.x, item.y))?;
        }
        for &enemy in &self.enemies {
            in_map("enemy", enemy)?;
        }

        let (px, py) = self.player_spawn;
        Ok(Level {
            grid: TileGrid::new(tiles),
            width_px,
            height_px,
            player_spawn: Rect::new(px, py, PLAYER_WIDTH, PLAYER_HEIGHT),
            items: self.items.clone(),
            enemies: self.enemies.clone(),
        })
    }
}

/// Player top-left that centres the body on the view
fn default_player_spawn() -> (i32, i32) {
    (
        VIEW_WIDTH / 2 - PLAYER_WIDTH / 2,
        VIEW_HEIGHT / 2 - PLAYER_HEIGHT / 2,
    )
}

/// A validated level: immutable geometry plus spawn tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    grid: TileGrid,
    width_px: i32,
    height_px: i32,
    player_spawn: Rect,
    items: Vec<ItemSpawn>,
    enemies: Vec<(i32, i32)>,
}

impl Level {
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Map size in pixels
    pub fn size(&self) -> (i32, i32) {
        (self.width_px, self.height_px)
    }

    pub fn player_spawn(&self) -> Rect {
        self.player_spawn
    }

    pub fn enemy_spawns(&self) -> &[(i32, i32)] {
        &self.enemies
    }

    /// Fresh, all-active item set
    pub fn spawn_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .map(|s| Item::new(s.x, s.y, s.sprite, s.value))
            .collect()
    }
}
