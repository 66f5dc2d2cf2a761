use std::ops::RangeInclusive;

use iris_color::clamp_unit;

/// The sub-interval of the unit parameter a shading traverses.
///
/// Invariants, enforced at construction:
/// - both bounds lie in `[0, 1]` (NaN pins to `0`)
/// - `lo <= hi`; an inverted pair collapses to the point at the clamped `lo`
///
/// Fields are private so an invalid domain cannot be constructed; everything
/// downstream (function clamping, geometry mapping) relies on that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Domain {
    lo: f32,
    hi: f32,
}

impl Domain {
    /// The full unit interval, the default for every drawing operation.
    pub const FULL: Domain = Domain { lo: 0.0, hi: 1.0 };

    pub fn new(lo: f32, hi: f32) -> Self {
        let lo = clamp_unit(lo);
        let hi = clamp_unit(hi);
        if hi < lo {
            Self { lo, hi: lo }
        } else {
            Self { lo, hi }
        }
    }

    #[inline]
    pub fn lo(&self) -> f32 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> f32 {
        self.hi
    }

    /// Clamps a sample parameter into the domain.
    #[inline]
    pub fn clamp(&self, t: f32) -> f32 {
        if t.is_nan() { self.lo } else { t.clamp(self.lo, self.hi) }
    }

    /// Maps a geometry position onto the domain: `0 → lo`, `1 → hi`.
    #[inline]
    pub fn lerp(&self, s: f32) -> f32 {
        self.lo + (self.hi - self.lo) * s
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<RangeInclusive<f32>> for Domain {
    fn from(r: RangeInclusive<f32>) -> Self {
        Self::new(*r.start(), *r.end())
    }
}
