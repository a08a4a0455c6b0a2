//! Scene module - per-frame draw list handed to the rendering surface
//!
//! The core never paints pixels. Each frame it records what to draw and where,
//! in screen pixels, and the front end rasterises the list in order.

use crate::pickup::ItemSprite;
use crate::types::{AnimState, Color, Rect, Verdict, BLACK};

/// Image reference for a sprite command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteRef {
    Tile,
    Player { state: AnimState, frame: usize },
    Enemy { frame: usize },
    Item(ItemSprite),
    ReplayButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear(Color),
    /// Blit a sprite into a screen-space rectangle
    Sprite { sprite: SpriteRef, dest: Rect },
    /// Text anchored at its top-left corner
    Text { text: String, x: i32, y: i32 },
    /// Text centred on the surface
    Message(&'static str),
}

/// Ordered draw list, reusable across frames
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every command but keep the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn sprite(&mut self, sprite: SpriteRef, dest: Rect) {
        self.commands.push(DrawCommand::Sprite { sprite, dest });
    }

    pub fn text(&mut self, text: String, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text { text, x, y });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sprite commands only
    pub fn sprites(&self) -> impl Iterator<Item = (SpriteRef, Rect)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite { sprite, dest } => Some((*sprite, *dest)),
            _ => None,
        })
    }

    /// Text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Message(text) => Some(*text),
            _ => None,
        })
    }

    /// Modal victory/defeat screen: black backdrop and the verdict line
    pub fn verdict_screen(verdict: Verdict) -> Self {
        let mut scene = Self::new();
        scene.push(DrawCommand::Clear(BLACK));
        scene.push(DrawCommand::Message(verdict.message()));
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_screen() {
        let scene = Scene::verdict_screen(Verdict::Victory);
        assert_eq!(scene.commands()[0], DrawCommand::Clear(BLACK));
        assert_eq!(
            scene.texts().collect::<Vec<_>>(),
            vec!["VICTORY! You meet the profit quota!"]
        );
    }

    #[test]
    fn test_clear_keeps_nothing() {
        let mut scene = Scene::new();
        scene.sprite(SpriteRef::Tile, Rect::new(0, 0, 32, 32));
        scene.text("hi".to_string(), 1, 2);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.sprites().count(), 1);
        scene.clear();
        assert!(scene.is_empty());
    }
}
