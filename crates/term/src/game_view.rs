//! GameView: rasterises a core [`Scene`] into a terminal framebuffer.
//!
//! Scene coordinates are screen pixels. Each terminal cell covers
//! `cell_w x cell_h` pixels; a sprite covers every cell its rectangle touches.
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{DrawCommand, ItemSprite, Rect, Scene, SpriteRef};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Facing, Motion, VIEW_HEIGHT, VIEW_WIDTH};

/// Default world pixels per terminal column.
pub const DEFAULT_CELL_W: i32 = 8;
/// Default world pixels per terminal row.
pub const DEFAULT_CELL_H: i32 = 16;

const REPLAY_LABEL: &str = "REPLAY";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Scene rasteriser with a fixed pixel-to-cell scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    cell_w: i32,
    cell_h: i32,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_W, DEFAULT_CELL_H)
    }
}

impl GameView {
    pub fn new(cell_w: i32, cell_h: i32) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn cell_size(&self) -> (i32, i32) {
        (self.cell_w, self.cell_h)
    }

    /// Viewport that shows the whole game view at this scale
    pub fn view_viewport(&self) -> Viewport {
        let cols = (VIEW_WIDTH + self.cell_w - 1) / self.cell_w;
        let rows = (VIEW_HEIGHT + self.cell_h - 1) / self.cell_h;
        Viewport::new(
            u16::try_from(cols).unwrap_or(u16::MAX),
            u16::try_from(rows).unwrap_or(u16::MAX),
        )
    }

    /// Cell-space rectangle `(x, y, w, h)` covering a pixel rectangle
    pub fn cell_rect(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let x0 = rect.left().div_euclid(self.cell_w);
        let y0 = rect.top().div_euclid(self.cell_h);
        let x1 = (rect.right() + self.cell_w - 1).div_euclid(self.cell_w);
        let y1 = (rect.bottom() + self.cell_h - 1).div_euclid(self.cell_h);
        (x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, scene: &Scene, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        for command in scene.commands() {
            match command {
                DrawCommand::Clear(color) => {
                    fb.clear(CellStyle::new(Rgb::new(220, 220, 220), (*color).into()).into_cell(' '));
                }
                DrawCommand::Sprite { sprite, dest } => self.draw_sprite(fb, *sprite, dest),
                DrawCommand::Text { text, x, y } => {
                    let cx = x.div_euclid(self.cell_w);
                    let cy = y.div_euclid(self.cell_h);
                    overlay_str(fb, cx, cy, text, Rgb::new(255, 255, 255), true);
                }
                DrawCommand::Message(text) => {
                    let len = text.chars().count() as i32;
                    let cx = (i32::from(fb.width()) - len) / 2;
                    let cy = i32::from(fb.height()) / 2;
                    overlay_str(fb, cx, cy, text, Rgb::new(255, 255, 255), true);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_sprite(&self, fb: &mut FrameBuffer, sprite: SpriteRef, dest: &Rect) {
        let (x, y, w, h) = self.cell_rect(dest);
        match sprite {
            SpriteRef::Tile => {
                let style = CellStyle::new(Rgb::new(150, 120, 200), Rgb::new(70, 50, 110));
                fb.fill_rect(x, y, w, h, style.into_cell('▓'));
            }
            SpriteRef::ReplayButton => {
                let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 120, 60)).bold();
                fb.fill_rect(x, y, w, h, style.into_cell(' '));
                let len = REPLAY_LABEL.len() as i32;
                overlay_str(fb, x + (w - len) / 2, y + h / 2, REPLAY_LABEL, style.fg, true);
            }
            SpriteRef::Player { state, frame } => {
                let ch = match (state.motion, state.facing) {
                    (Motion::Jump, _) => ['^', '*'][frame % 2],
                    (Motion::Run, Facing::Left) => ['<', '«'][frame % 2],
                    (Motion::Run, Facing::Right) => ['>', '»'][frame % 2],
                    (Motion::Idle, _) => '@',
                };
                fill_glyph(fb, x, y, w, h, ch, Rgb::new(255, 220, 120), true);
            }
            SpriteRef::Enemy { frame } => {
                let ch = ['O', 'o', '0', 'o'][frame % 4];
                fill_glyph(fb, x, y, w, h, ch, Rgb::new(200, 230, 255), false);
            }
            SpriteRef::Item(item) => {
                let (ch, fg) = item_glyph(item);
                fill_glyph(fb, x, y, w, h, ch, fg, true);
            }
        }
    }
}

fn item_glyph(item: ItemSprite) -> (char, Rgb) {
    match item {
        ItemSprite::Sneakers => ('S', Rgb::new(80, 200, 255)),
        ItemSprite::Stars => ('*', Rgb::new(255, 240, 80)),
        ItemSprite::Shovel => ('/', Rgb::new(200, 160, 110)),
        ItemSprite::Jetpack => ('J', Rgb::new(255, 120, 60)),
        ItemSprite::ClownHorn => ('H', Rgb::new(255, 100, 180)),
        ItemSprite::Portal => ('◎', Rgb::new(120, 255, 160)),
    }
}

/// Paint a glyph over existing cells, keeping their background.
fn overlay(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, fg: Rgb, bold: bool) {
    let (Ok(ux), Ok(uy)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    let Some(under) = fb.get(ux, uy) else {
        return;
    };
    let mut style = CellStyle::new(fg, under.style.bg);
    style.bold = bold;
    fb.set(x, y, style.into_cell(ch));
}

fn overlay_str(fb: &mut FrameBuffer, x: i32, y: i32, s: &str, fg: Rgb, bold: bool) {
    for (i, ch) in s.chars().enumerate() {
        overlay(fb, x + i as i32, y, ch, fg, bold);
    }
}

#[allow(clippy::too_many_arguments)]
fn fill_glyph(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, ch: char, fg: Rgb, bold: bool) {
    for cy in y..y + h {
        for cx in x..x + w {
            overlay(fb, cx, cy, ch, fg, bold);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnimState, Verdict, BACKGROUND};

    fn row(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .filter_map(|x| fb.get(x, y).map(|c| c.ch))
            .collect()
    }

    #[test]
    fn default_viewport_covers_the_view() {
        let view = GameView::default();
        assert_eq!(view.view_viewport(), Viewport::new(128, 36));
    }

    #[test]
    fn cell_rect_covers_touched_cells() {
        let view = GameView::new(8, 16);
        assert_eq!(view.cell_rect(&Rect::new(0, 0, 32, 32)), (0, 0, 4, 2));
        assert_eq!(view.cell_rect(&Rect::new(4, 8, 8, 8)), (0, 0, 2, 1));
        assert_eq!(view.cell_rect(&Rect::new(-12, -20, 8, 8)), (-2, -2, 2, 2));
    }

    #[test]
    fn clear_sets_background() {
        let mut scene = Scene::new();
        scene.push(DrawCommand::Clear(BACKGROUND));
        let fb = GameView::default().render(&scene, Viewport::new(4, 2));
        assert!(fb.cells().iter().all(|c| c.style.bg == Rgb::new(3, 0, 46)));
    }

    #[test]
    fn sprites_keep_background_and_clip() {
        let mut scene = Scene::new();
        scene.push(DrawCommand::Clear(BACKGROUND));
        scene.sprite(
            SpriteRef::Player {
                state: AnimState::default(),
                frame: 0,
            },
            Rect::new(-8, 0, 16, 16),
        );
        let fb = GameView::new(8, 16).render(&scene, Viewport::new(4, 1));
        assert_eq!(row(&fb, 0), "@   ");
        assert_eq!(fb.get(0, 0).map(|c| c.style.bg), Some(Rgb::new(3, 0, 46)));
    }

    #[test]
    fn hud_text_lands_on_scaled_anchor() {
        let mut scene = Scene::new();
        scene.text("Health: 80".to_string(), 10, 40);
        let fb = GameView::new(8, 16).render(&scene, Viewport::new(20, 4));
        assert_eq!(&row(&fb, 2)[1..11], "Health: 80");
    }

    #[test]
    fn verdict_message_is_centred() {
        let scene = Scene::verdict_screen(Verdict::Defeat);
        let fb = GameView::default().render(&scene, Viewport::new(60, 5));
        let line = row(&fb, 2);
        let msg = Verdict::Defeat.message();
        let start = (60 - msg.chars().count()) / 2;
        assert_eq!(line.chars().skip(start).take(msg.chars().count()).collect::<String>(), msg);
    }

    #[test]
    fn replay_button_shows_label() {
        let mut scene = Scene::new();
        scene.sprite(SpriteRef::ReplayButton, Rect::new(412, 248, 200, 80));
        let fb = GameView::default().render(&scene, GameView::default().view_viewport());
        assert!(row(&fb, 18).contains(REPLAY_LABEL));
    }
}
