//! Visual Effects
//!
//! One-shot sprite-sheet "puffs" played when a basket opens or two foods
//! merge. An effect only names which sheet it plays; the textures themselves
//! live in the asset table owned by the front end, so dropping an effect never
//! frees anything.

use crate::config::PuffConfig;
use crate::ui::Rect;

/// Which animation sheet an effect plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    OpenBasket,
    MergeFood,
}

/// A running puff animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualEffect {
    pub kind: EffectKind,
    pub x: f32,
    pub y: f32,
    /// Width of one animation frame on screen
    pub width: f32,
    pub height: f32,
    /// Game frames since the effect became active; -1 until its first tick
    pub frame_counter: i32,
    pub total_frames: u32,
    /// Game frames each sheet frame is shown
    pub delay: u32,
}

impl VisualEffect {
    pub fn new(kind: EffectKind, area: Rect, puff: PuffConfig) -> Self {
        Self {
            kind,
            x: area.x,
            y: area.y,
            width: area.w,
            height: area.h,
            frame_counter: -1,
            total_frames: puff.frames,
            delay: puff.delay,
        }
    }

    /// Game frames the effect stays on screen
    pub fn lifetime(&self) -> i32 {
        (self.total_frames * self.delay) as i32
    }

    /// Advance one game frame. Returns false once the animation is over.
    pub fn tick(&mut self) -> bool {
        self.frame_counter += 1;
        self.frame_counter < self.lifetime()
    }

    /// Sheet column to show
    pub fn current_frame(&self) -> u32 {
        (self.frame_counter.max(0) as u32 / self.delay.max(1)).min(self.total_frames.saturating_sub(1))
    }

    /// Slice of the sprite sheet for the current frame
    pub fn source_rect(&self) -> Rect {
        Rect::new(self.width * self.current_frame() as f32, 0.0, self.width, self.height)
    }
}

/// All running effects, in spawn order
#[derive(Debug, Clone, Default)]
pub struct EffectList {
    effects: Vec<VisualEffect>,
}

impl EffectList {
    pub fn new() -> Self {
        Self { effects: Vec::new() }
    }

    pub fn spawn(&mut self, effect: VisualEffect) {
        self.effects.push(effect);
    }

    /// Age every effect by one frame and drop finished ones
    pub fn update(&mut self) {
        self.effects.retain_mut(|effect| effect.tick());
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisualEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Count of running effects of one kind
    #[cfg(test)]
    pub fn count_kind(&self, kind: EffectKind) -> usize {
        self.effects.iter().filter(|e| e.kind == kind).count()
    }
}
