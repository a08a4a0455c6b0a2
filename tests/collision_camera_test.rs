//! Property-style sweeps over the collision query and camera clamp

use world_of_magic::core::{Body, Camera, LevelLayout, Rect, TileGrid};
use world_of_magic::types::{VIEW_HEIGHT, VIEW_WIDTH, WORLD_FLOOR_Y};

/// Small deterministic generator so sweeps are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next() % (hi - lo) as u64) as i32
    }
}

fn default_grid() -> TileGrid {
    LevelLayout::default_level().build().unwrap().grid().clone()
}

#[test]
fn query_matches_brute_force_overlap() {
    let grid = default_grid();
    let mut rng = Lcg(7);

    for _ in 0..2_000 {
        let probe = Rect::new(
            rng.range(-100, 2100),
            rng.range(-100, 1800),
            rng.range(1, 120),
            rng.range(1, 120),
        );
        let hits = grid.query_colliding(&probe);
        let expected: Vec<Rect> = grid
            .tiles()
            .iter()
            .copied()
            .filter(|t| {
                t.left() < probe.right()
                    && probe.left() < t.right()
                    && t.top() < probe.bottom()
                    && probe.top() < t.bottom()
            })
            .collect();
        assert_eq!(hits, expected, "probe {:?}", probe);
        assert_eq!(grid.any_colliding(&probe), !expected.is_empty());
    }
}

#[test]
fn touching_edges_do_not_collide() {
    let grid = TileGrid::new(vec![Rect::new(64, 64, 32, 32)]);
    assert!(!grid.any_colliding(&Rect::new(32, 64, 32, 32)));
    assert!(!grid.any_colliding(&Rect::new(96, 64, 32, 32)));
    assert!(!grid.any_colliding(&Rect::new(64, 32, 32, 32)));
    assert!(!grid.any_colliding(&Rect::new(64, 96, 32, 32)));
    assert!(grid.any_colliding(&Rect::new(33, 64, 32, 32)));
}

#[test]
fn camera_offset_stays_within_map() {
    let mut cam = Camera::new(2048, 1728, VIEW_WIDTH, VIEW_HEIGHT);
    let mut rng = Lcg(11);

    for _ in 0..2_000 {
        let target = Rect::new(rng.range(-500, 2600), rng.range(-500, 2300), 32, 48);
        cam.follow(&target, VIEW_WIDTH, VIEW_HEIGHT);
        let (ox, oy) = cam.offset();
        assert!((-(2048 - VIEW_WIDTH)..=0).contains(&ox), "x offset {}", ox);
        assert!((-(1728 - VIEW_HEIGHT)..=0).contains(&oy), "y offset {}", oy);
    }
}

#[test]
fn camera_pins_axis_when_map_is_smaller_than_view() {
    let mut cam = Camera::new(640, 2000, VIEW_WIDTH, VIEW_HEIGHT);
    for x in [-300, 0, 320, 639, 900] {
        cam.follow(&Rect::new(x, 1900, 32, 48), VIEW_WIDTH, VIEW_HEIGHT);
        assert_eq!(cam.offset().0, 0);
    }
    // The taller axis still clamps at the map bottom.
    assert_eq!(cam.offset().1, -(2000 - VIEW_HEIGHT));

    cam.follow(&Rect::new(100, 1500, 32, 48), VIEW_WIDTH, VIEW_HEIGHT);
    assert_eq!(cam.offset(), (0, -1500 + VIEW_HEIGHT / 2));
}

#[test]
fn camera_transform_is_a_pure_translation() {
    let mut cam = Camera::new(2048, 1728, VIEW_WIDTH, VIEW_HEIGHT);
    cam.follow(&Rect::new(1200, 900, 32, 48), VIEW_WIDTH, VIEW_HEIGHT);
    let (ox, oy) = cam.offset();

    let tile = Rect::new(1216, 960, 32, 32);
    let screen = cam.transform(&tile);
    assert_eq!(screen, Rect::new(1216 + ox, 960 + oy, 32, 32));
}

#[test]
fn falling_bodies_never_sink_below_the_floor() {
    let grid = default_grid();
    let mut rng = Lcg(23);

    for _ in 0..200 {
        let mut body = Body::new(Rect::new(rng.range(0, 2016), rng.range(0, 1600), 32, 48));
        for _ in 0..300 {
            body.step_vertical(&grid);
            assert!(body.rect.bottom() <= WORLD_FLOOR_Y);
        }
        // Settled bodies come to rest on a surface.
        assert_eq!(body.velocity_y, 0);
        assert!(body.is_grounded(&grid));
    }
}
