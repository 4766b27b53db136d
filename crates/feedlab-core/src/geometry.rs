use glam::Vec2;

/// Axis-aligned rectangle in feed space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let mx = self.max();
        p.x >= self.min.x && p.y >= self.min.y && p.x <= mx.x && p.y <= mx.y
    }

    /// Clamp a point into the rectangle. The input-capture surface bounds
    /// gesture coordinates with this before any animator sees them.
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        let mx = self.max();
        Vec2::new(p.x.clamp(self.min.x, mx.x), p.y.clamp(self.min.y, mx.y))
    }

    /// Convert a feed-space point to this rectangle's local space.
    #[inline]
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        p - self.min
    }

    /// Convert a local point back to feed space.
    #[inline]
    pub fn from_local(&self, p: Vec2) -> Vec2 {
        p + self.min
    }
}
