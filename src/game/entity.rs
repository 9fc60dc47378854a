//! Entity Records
//!
//! Plain data for the two kinds of things on the field. The game state owns
//! them in flat `Vec`s and refers to them by index within a frame.

use crate::ui::Rect;

/// Pixel dimensions of a sprite
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Sprite dimensions the simulation needs, read from the loaded textures
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpriteSizes {
    pub basket: Size,
    /// Tier-0 food sprite; every food item keeps this footprint
    pub food: Size,
}

/// A basket dropping into (or sitting on) the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basket {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Still descending; not clickable until it lands
    pub is_flying: bool,
}

impl Basket {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A food item on the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Index into the food name/texture table
    pub tier: usize,
    /// Being dragged by the player
    pub is_holding: bool,
    /// Highlighted as the merge partner of the held item
    pub is_merging: bool,
}

impl Food {
    /// Fresh tier-0 food at a position
    pub fn new(x: f32, y: f32, size: Size) -> Self {
        Self {
            x,
            y,
            width: size.w,
            height: size.h,
            tier: 0,
            is_holding: false,
            is_merging: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Index of the last item whose rect contains the point
/// (`rect` returns `None` for items that cannot be hit)
pub fn last_hit<T>(items: &[T], x: f32, y: f32, rect: impl Fn(usize, &T) -> Option<Rect>) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| rect(*index, *item).is_some_and(|r| r.contains(x, y)))
        .map(|(index, _)| index)
        .last()
}
