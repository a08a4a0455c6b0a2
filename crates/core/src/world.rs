//! World module - owns every gameplay object and runs one frame at a time
//!
//! Frame order: replay click (when game over) → clear → camera follow → draw
//! player and tiles → player input and physics → enemies → items → scoreboard →
//! game-over check. Once health reaches zero the world freezes: it keeps
//! drawing but stops updating until the replay button is clicked.

use crate::camera::Camera;
use crate::enemy::Enemy;
use crate::level::Level;
use crate::pickup::{ItemId, ItemSprite, Items, PickupEffect};
use crate::player::Player;
use crate::scene::{DrawCommand, Scene, SpriteRef};
use crate::types::{
    health_text, score_text, FrameInput, Rect, Verdict, BACKGROUND, BLACK, HUD_HEALTH_ANCHOR,
    HUD_SCORE_ANCHOR, REPLAY_BUTTON_HEIGHT, REPLAY_BUTTON_WIDTH, VIEW_HEIGHT, VIEW_WIDTH,
};

/// Something noteworthy that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped { x: i32, y: i32 },
    ItemCollected {
        item: ItemId,
        sprite: ItemSprite,
        value: u32,
        effect: PickupEffect,
        score: u32,
    },
    PlayerHit { enemy: usize, health: i32 },
    GameOver { score: u32 },
    VerdictReached { verdict: Verdict, score: u32 },
    Reset,
}

/// What the caller should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep looping
    Running,
    /// Health is gone; the replay button is showing and the world is frozen
    GameOver,
    /// The portal was reached; show the modal screen, then reset
    Verdict(Verdict),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World {
    level: Level,
    camera: Camera,
    player: Player,
    enemies: Vec<Enemy>,
    items: Items,
    replay_button: Rect,
    replay_visible: bool,
    frame: u64,
    events: Vec<GameEvent>,
}

impl World {
    /// Fresh run on `level`: full health, zero score, every item active
    pub fn new_game(level: Level, now_ms: u64) -> Self {
        let (world_w, world_h) = level.size();
        let player = Player::new(level.player_spawn(), now_ms);
        let enemies = level
            .enemy_spawns()
            .iter()
            .map(|&(x, y)| Enemy::new(x, y, now_ms))
            .collect();
        let items = Items::new(level.spawn_items());

        Self {
            camera: Camera::new(world_w, world_h, VIEW_WIDTH, VIEW_HEIGHT),
            player,
            enemies,
            items,
            replay_button: Rect::centered_at(
                VIEW_WIDTH / 2,
                VIEW_HEIGHT / 2,
                REPLAY_BUTTON_WIDTH,
                REPLAY_BUTTON_HEIGHT,
            ),
            replay_visible: false,
            frame: 0,
            events: Vec::new(),
            level,
        }
    }

    /// Replace this world with a fresh run on the same level
    pub fn reset(&mut self, now_ms: u64) {
        let events = std::mem::take(&mut self.events);
        *self = Self::new_game(self.level.clone(), now_ms);
        self.events = events;
        self.events.push(GameEvent::Reset);
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn items(&self) -> &Items {
        &self.items
    }

    pub fn replay_button(&self) -> Rect {
        self.replay_button
    }

    pub fn is_game_over(&self) -> bool {
        self.replay_visible
    }

    /// Frames run since the last reset
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Run one frame, recording what to draw into `scene`
    pub fn frame(&mut self, input: &FrameInput, now_ms: u64, scene: &mut Scene) -> FrameOutcome {
        if self.replay_visible {
            if let Some((x, y)) = input.click {
                if self.replay_button.contains_point(x, y) {
                    self.reset(now_ms);
                }
            }
        }
        self.frame += 1;
        let frozen = self.replay_visible;

        scene.clear();
        scene.push(DrawCommand::Clear(BACKGROUND));

        self.camera
            .follow(&self.player.rect(), VIEW_WIDTH, VIEW_HEIGHT);

        scene.sprite(
            SpriteRef::Player {
                state: self.player.state(),
                frame: self.player.display_frame(),
            },
            self.camera.transform(&self.player.rect()),
        );
        for tile in self.level.grid().tiles() {
            scene.sprite(SpriteRef::Tile, self.camera.transform(tile));
        }

        if !frozen {
            let grid = self.level.grid();
            let moved = self.player.handle_input(&input.keys, grid);
            if moved.jumped {
                let rect = self.player.rect();
                self.events.push(GameEvent::Jumped {
                    x: rect.x,
                    y: rect.y,
                });
            }
            self.player.update(grid, now_ms);
        }

        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            scene.sprite(
                SpriteRef::Enemy {
                    frame: enemy.frame(),
                },
                self.camera.transform(&enemy.rect()),
            );
            if !frozen && enemy.update(&self.player.rect(), now_ms) {
                self.player.hit();
                self.events.push(GameEvent::PlayerHit {
                    enemy: index,
                    health: self.player.health(),
                });
            }
        }

        for index in 0..self.items.len() {
            let id = ItemId(index);
            let Some(item) = self.items.get(id).copied() else {
                continue;
            };
            if !item.is_active() {
                continue;
            }
            scene.sprite(SpriteRef::Item(item.sprite), self.camera.transform(&item.rect));
            if frozen {
                continue;
            }
            let Some(effect) = self.items.try_collect(id, &self.player.rect()) else {
                continue;
            };

            let verdict = self.apply_effect(effect);
            self.events.push(GameEvent::ItemCollected {
                item: id,
                sprite: item.sprite,
                value: item.value,
                effect,
                score: self.player.score(),
            });
            if let Some(verdict) = verdict {
                self.events.push(GameEvent::VerdictReached {
                    verdict,
                    score: self.player.score(),
                });
                self.draw_hud(scene);
                return FrameOutcome::Verdict(verdict);
            }
        }

        self.draw_hud(scene);

        if self.player.health() <= 0 {
            if !self.replay_visible {
                self.events.push(GameEvent::GameOver {
                    score: self.player.score(),
                });
            }
            self.replay_visible = true;
            scene.push(DrawCommand::Clear(BLACK));
            scene.sprite(SpriteRef::ReplayButton, self.replay_button);
            FrameOutcome::GameOver
        } else {
            self.replay_visible = false;
            FrameOutcome::Running
        }
    }

    fn draw_hud(&self, scene: &mut Scene) {
        let (sx, sy) = HUD_SCORE_ANCHOR;
        scene.text(score_text(self.player.score()), sx, sy);
        let (hx, hy) = HUD_HEALTH_ANCHOR;
        scene.text(health_text(self.player.health()), hx, hy);
    }

    fn apply_effect(&mut self, effect: PickupEffect) -> Option<Verdict> {
        match effect {
            PickupEffect::Score(points) => self.player.add_score(points),
            PickupEffect::Launch { velocity_y } => self.player.set_velocity_y(velocity_y),
            PickupEffect::SpeedBoost { speed } => self.player.set_speed(speed),
            PickupEffect::EvaluateVerdict => {
                return Some(Verdict::for_score(self.player.score()));
            }
            PickupEffect::Nothing => {}
        }
        None
    }
}
