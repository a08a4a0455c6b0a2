use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use world_of_magic::core::{
    Enemy, FrameInput, KeyStates, LevelLayout, Player, Scene, World,
};
use world_of_magic::term::{FrameBuffer, GameView};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test: the counter is global, so parallel tests in this binary would
// count each other's allocations.
#[test]
fn physics_and_render_hot_paths_do_not_allocate() {
    let level = LevelLayout::default_level().build().unwrap();
    let grid = level.grid().clone();
    let mut player = Player::new(level.player_spawn(), 0);
    let mut enemies: Vec<Enemy> = level
        .enemy_spawns()
        .iter()
        .map(|&(x, y)| Enemy::new(x, y, 0))
        .collect();

    // A full frame's draw list, built outside counting (HUD text allocates).
    let mut world = World::new_game(level, 0);
    let mut scene = Scene::new();
    world.frame(&FrameInput::default(), 16, &mut scene);

    let view = GameView::default();
    let viewport = view.view_viewport();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    // Warm-up.
    view.render_into(&scene, viewport, &mut fb);

    let keys = [
        KeyStates {
            right: true,
            ..KeyStates::default()
        },
        KeyStates {
            left: true,
            space: true,
            ..KeyStates::default()
        },
        KeyStates::default(),
    ];

    let allocs = with_alloc_counting(|| {
        let mut now = 0;
        for i in 0..600 {
            now += 16;
            player.handle_input(&keys[i / 50 % keys.len()], &grid);
            player.update(&grid, now);
            let rect = player.rect();
            for enemy in enemies.iter_mut() {
                if enemy.update(&rect, now) {
                    player.hit();
                }
            }
        }

        for _ in 0..50 {
            view.render_into(&scene, viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
