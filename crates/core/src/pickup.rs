//! Pickup system - one-shot items and the effects they produce
//!
//! Items never touch the player directly. Overlap yields a [`PickupEffect`] that
//! the world applies, and the item slot is marked consumed so its handle stays
//! valid but the item drops out of the active set.

use crate::types::{
    Rect, BOOSTED_SPEED, ITEM_SIZE, JETPACK_VALUE, LAUNCH_VELOCITY, PORTAL_VALUE, SNEAKERS_VALUE,
    SPECIAL_ITEM_THRESHOLD,
};

/// Item artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSprite {
    Sneakers,
    Stars,
    Shovel,
    Jetpack,
    ClownHorn,
    Portal,
}

impl ItemSprite {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSprite::Sneakers => "sneakers",
            ItemSprite::Stars => "stars",
            ItemSprite::Shovel => "shovel",
            ItemSprite::Jetpack => "jetpack",
            ItemSprite::ClownHorn => "clownhorn",
            ItemSprite::Portal => "portal",
        }
    }
}

/// What collecting an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupEffect {
    /// Add to the score
    Score(u32),
    /// Override vertical velocity
    Launch { velocity_y: i32 },
    /// Replace the horizontal speed for the rest of the run
    SpeedBoost { speed: i32 },
    /// Decide victory or defeat with the current score
    EvaluateVerdict,
    /// Special value with no behaviour attached
    Nothing,
}

impl PickupEffect {
    /// Dispatch on item value
    pub fn for_value(value: u32) -> Self {
        if value < SPECIAL_ITEM_THRESHOLD {
            return PickupEffect::Score(value);
        }
        match value {
            JETPACK_VALUE => PickupEffect::Launch {
                velocity_y: LAUNCH_VELOCITY,
            },
            SNEAKERS_VALUE => PickupEffect::SpeedBoost {
                speed: BOOSTED_SPEED,
            },
            PORTAL_VALUE => PickupEffect::EvaluateVerdict,
            _ => PickupEffect::Nothing,
        }
    }
}

/// Stable handle to an item slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub rect: Rect,
    pub sprite: ItemSprite,
    pub value: u32,
    consumed: bool,
}

impl Item {
    pub fn new(x: i32, y: i32, sprite: ItemSprite, value: u32) -> Self {
        Self {
            rect: Rect::new(x, y, ITEM_SIZE, ITEM_SIZE),
            sprite,
            value,
            consumed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.consumed
    }

    pub fn effect(&self) -> PickupEffect {
        PickupEffect::for_value(self.value)
    }
}

/// Arena of items created at level start
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Items {
    slots: Vec<Item>,
}

impl Items {
    pub fn new(items: Vec<Item>) -> Self {
        Self { slots: items }
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.slots.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Active items with their handles, in creation order
    pub fn active(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_active())
            .map(|(i, item)| (ItemId(i), item))
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Consume the item if it is active and overlaps `player`
    ///
    /// Returns the effect exactly once; later calls for the same handle return `None`.
    pub fn try_collect(&mut self, id: ItemId, player: &Rect) -> Option<PickupEffect> {
        let item = self.slots.get_mut(id.0)?;
        if item.consumed || !item.rect.intersects(player) {
            return None;
        }
        item.consumed = true;
        Some(item.effect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_dispatch() {
        assert_eq!(PickupEffect::for_value(521), PickupEffect::Score(521));
        assert_eq!(PickupEffect::for_value(999), PickupEffect::Score(999));
        assert_eq!(
            PickupEffect::for_value(1234),
            PickupEffect::Launch { velocity_y: -30 }
        );
        assert_eq!(
            PickupEffect::for_value(2345),
            PickupEffect::SpeedBoost { speed: 8 }
        );
        assert_eq!(PickupEffect::for_value(3456), PickupEffect::EvaluateVerdict);
        assert_eq!(PickupEffect::for_value(1000), PickupEffect::Nothing);
    }

    #[test]
    fn test_collect_is_one_shot() {
        let mut items = Items::new(vec![
            Item::new(0, 0, ItemSprite::Stars, 521),
            Item::new(500, 0, ItemSprite::Shovel, 394),
        ]);
        let player = Rect::new(10, 10, 32, 48);

        assert_eq!(items.try_collect(ItemId(1), &player), None);
        assert_eq!(items.try_collect(ItemId(0), &player), Some(PickupEffect::Score(521)));
        assert_eq!(items.try_collect(ItemId(0), &player), None);

        let active: Vec<ItemId> = items.active().map(|(id, _)| id).collect();
        assert_eq!(active, vec![ItemId(1)]);
        // Handle still resolves after consumption.
        assert!(!items.get(ItemId(0)).unwrap().is_active());
    }

    #[test]
    fn test_unknown_handle() {
        let mut items = Items::default();
        assert_eq!(items.try_collect(ItemId(3), &Rect::new(0, 0, 1, 1)), None);
    }
}
