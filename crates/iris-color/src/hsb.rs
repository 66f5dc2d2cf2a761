//! HSB→RGB conversion.
//!
//! Scope:
//! - `Hsb`: an HSB color triple
//! - `wrap_hue`: cyclic hue normalization into `[0, 1)`
//! - `hsb_to_rgb`: the piecewise-linear sector conversion
//!
//! The conversion is the hot path of every ramp: backends call it once per
//! sample, at whatever density they choose. It is pure, branch-cheap and
//! allocation-free.

use crate::rgb::Rgb;

/// An HSB (hue / saturation / brightness) color triple.
///
/// Semantics: hue is cyclic, so any finite value is accepted and wrapped
/// modulo 1 (`-0.25`, `0.75` and `1.75` name the same angle). Saturation and
/// brightness are expected in `[0, 1]`; ramp construction clamps them before
/// capture so the conversion never sees out-of-range values from that path.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    #[inline]
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self { hue, saturation, brightness }
    }

    /// Converts to RGB via [`hsb_to_rgb`].
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }
}

/// Wraps a hue angle into `[0, 1)`.
///
/// Defined for every finite input: `1.0 → 0.0`, `-0.25 → 0.75`, `1.75 →
/// 0.75`. Non-finite hue pins to `0.0`.
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let h = hue.rem_euclid(1.0);
    // rem_euclid rounds up to exactly 1.0 for tiny negative inputs.
    if h >= 1.0 { 0.0 } else { h }
}

/// Piecewise-linear HSB→RGB conversion (sector method).
///
/// `pos = hue * 6` selects one of six unit sectors. Within a sector exactly
/// one channel interpolates linearly between `low = brightness * (1 - sat)`
/// and `brightness` while the other two sit on those bounds. The integer
/// sector boundaries are matched exactly, so a boundary value equals the
/// limit of either adjacent sector and the function is continuous in hue.
///
/// Zero (or negative) saturation short-circuits to the achromatic gray
/// `(brightness, brightness, brightness)` for any hue.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Rgb {
    if saturation <= 0.0 {
        return Rgb::gray(brightness);
    }

    let span = brightness * saturation;
    let low = brightness - span;
    let pos = wrap_hue(hue) * 6.0;

    if pos == 0.0 {
        Rgb::new(brightness, low, low)
    } else if pos < 1.0 {
        Rgb::new(brightness, low + span * pos, low)
    } else if pos == 1.0 {
        Rgb::new(brightness, brightness, low)
    } else if pos < 2.0 {
        Rgb::new(low + span * (2.0 - pos), brightness, low)
    } else if pos == 2.0 {
        Rgb::new(low, brightness, low)
    } else if pos < 3.0 {
        Rgb::new(low, brightness, low + span * (pos - 2.0))
    } else if pos == 3.0 {
        Rgb::new(low, brightness, brightness)
    } else if pos < 4.0 {
        Rgb::new(low, low + span * (4.0 - pos), brightness)
    } else if pos == 4.0 {
        Rgb::new(low, low, brightness)
    } else if pos < 5.0 {
        Rgb::new(low + span * (pos - 4.0), low, brightness)
    } else if pos == 5.0 {
        Rgb::new(brightness, low, brightness)
    } else {
        Rgb::new(brightness, low, low + span * (6.0 - pos))
    }
}

// ─── tests ──────────────────────────────────────────────────────────────────
