use super::Vec2;

/// Axis-aligned rectangle in logical pixels, stored as a corner pair.
///
/// Constructors accept corners in any order; operations that care about
/// orientation normalize first, so `min` above-left of `max` is a
/// convention, not an invariant.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from top-left origin and size.
    #[inline]
    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    /// True when the corners as stored span no area. A flipped rectangle
    /// counts as empty until normalized.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Reorders the corners so `min <= max` componentwise.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(
            Vec2::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            Vec2::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        )
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.min.x && p.y >= r.min.y && p.x < r.max.x && p.y < r.max.y
    }

    /// Overlap of two rectangles; `None` when they share at most an edge.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let overlap = Rect::new(
            Vec2::new(a.min.x.max(b.min.x), a.min.y.max(b.min.y)),
            Vec2::new(a.max.x.min(b.max.x), a.max.y.min(b.max.y)),
        );

        (!overlap.is_empty()).then_some(overlap)
    }
}
