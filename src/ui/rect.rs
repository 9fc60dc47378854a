//! Rectangle type for hit-testing and sprite placement

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if point is inside (left/top edges inclusive, right/bottom exclusive)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Grow by margin on all sides
    pub fn expand(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.w + margin * 2.0,
            self.h + margin * 2.0,
        )
    }

    /// Rect of twice the size, centered on this rect's top-left corner.
    /// Puff effects are placed this way around the entity that triggered them.
    pub fn puff_around(&self, w: f32, h: f32) -> Self {
        Self::new(self.x - self.w / 2.0, self.y - self.h / 2.0, w * 2.0, h * 2.0)
    }

    /// Clamp a point into this rect (edges inclusive)
    pub fn clamp_point(&self, x: f32, y: f32) -> (f32, f32) {
        (x.clamp(self.x, self.right()), y.clamp(self.y, self.bottom()))
    }

    /// Get a horizontal band between two y coordinates
    pub fn band(&self, top: f32, bottom: f32) -> Self {
        Self::new(self.x, top, self.w, (bottom - top).max(0.0))
    }
}
