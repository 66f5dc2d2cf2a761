use super::Vec2;

/// Circle given by center and radius, in logical pixels.
///
/// Radial shadings interpolate between two of these. Radius is expected to
/// be non-negative; backends reject requests that carry a negative one.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}
