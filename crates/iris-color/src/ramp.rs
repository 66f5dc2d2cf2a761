//! One-channel HSB ramp evaluation.
//!
//! Scope:
//! - `HsbChannel`: which HSB slot receives the interpolation parameter
//! - `HsbRamp`: the captured constants plus the `t → RGBA` evaluator
//!
//! A ramp is the value a shading registers with a backend: two HSB
//! components and an alpha held fixed, the third component driven by the
//! backend's sample parameter.

use crate::hsb::Hsb;
use crate::rgb::{clamp_unit, Rgba};

/// The HSB slot that receives the interpolation parameter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HsbChannel {
    Hue,
    Saturation,
    Brightness,
}

/// Captured constants and evaluator for a one-channel HSB ramp.
///
/// `c1` / `c2` are the two fixed components, in a fixed order per channel:
///
/// | varying      | `c1`       | `c2`         |
/// |--------------|------------|--------------|
/// | `Hue`        | saturation | brightness   |
/// | `Saturation` | hue        | brightness   |
/// | `Brightness` | hue        | saturation   |
///
/// Invariant: every component is clamped into `[0, 1]` at construction
/// (NaN pins to `0`), and the value is plain immutable `Copy` data. An
/// invalid or dangling capture cannot exist at evaluation time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HsbRamp {
    channel: HsbChannel,
    c1: f32,
    c2: f32,
    alpha: f32,
}

impl HsbRamp {
    /// Capture for a ramp where `channel` varies; `c1` / `c2` hold the
    /// remaining components in the documented order.
    pub fn new(channel: HsbChannel, c1: f32, c2: f32, alpha: f32) -> Self {
        Self {
            channel,
            c1: clamp_unit(c1),
            c2: clamp_unit(c2),
            alpha: clamp_unit(alpha),
        }
    }

    /// Hue sweeps; saturation and brightness are fixed.
    #[inline]
    pub fn hue(saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self::new(HsbChannel::Hue, saturation, brightness, alpha)
    }

    /// Saturation sweeps; hue and brightness are fixed.
    #[inline]
    pub fn saturation(hue: f32, brightness: f32, alpha: f32) -> Self {
        Self::new(HsbChannel::Saturation, hue, brightness, alpha)
    }

    /// Brightness sweeps; hue and saturation are fixed.
    #[inline]
    pub fn brightness(hue: f32, saturation: f32, alpha: f32) -> Self {
        Self::new(HsbChannel::Brightness, hue, saturation, alpha)
    }

    #[inline]
    pub fn channel(&self) -> HsbChannel {
        self.channel
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Evaluates the ramp at `t`.
    ///
    /// Routes `t` into the varying slot, converts, and attaches the captured
    /// alpha. Pure and allocation-free; backends may call this at arbitrary
    /// sample density, in any order, from any thread.
    #[inline]
    pub fn eval(&self, t: f32) -> Rgba {
        let hsb = match self.channel {
            HsbChannel::Hue => Hsb::new(t, self.c1, self.c2),
            HsbChannel::Saturation => Hsb::new(self.c1, t, self.c2),
            HsbChannel::Brightness => Hsb::new(self.c1, self.c2, t),
        };
        hsb.to_rgb().with_alpha(self.alpha)
    }
}

// ─── tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsb::hsb_to_rgb;

    #[test]
    fn routes_t_into_the_varying_slot() {
        let t = 0.3;
        let hue = HsbRamp::hue(0.8, 0.9, 1.0);
        assert_eq!(hue.eval(t), hsb_to_rgb(t, 0.8, 0.9).with_alpha(1.0));

        let sat = HsbRamp::saturation(0.6, 0.9, 1.0);
        assert_eq!(sat.eval(t), hsb_to_rgb(0.6, t, 0.9).with_alpha(1.0));

        let bri = HsbRamp::brightness(0.6, 0.8, 1.0);
        assert_eq!(bri.eval(t), hsb_to_rgb(0.6, 0.8, t).with_alpha(1.0));
    }

    #[test]
    fn constants_clamp_at_construction() {
        let clamped = HsbRamp::hue(1.5, -0.2, 2.0);
        let reference = HsbRamp::hue(1.0, 0.0, 1.0);
        assert_eq!(clamped, reference);
        assert_eq!(clamped.alpha(), 1.0);
    }

    #[test]
    fn nan_constants_pin_to_zero() {
        let ramp = HsbRamp::brightness(f32::NAN, f32::NAN, f32::NAN);
        assert_eq!(ramp, HsbRamp::brightness(0.0, 0.0, 0.0));
        // Achromatic zero-alpha ramp: eval stays well-defined.
        assert_eq!(ramp.eval(0.5), Rgba::new(0.5, 0.5, 0.5, 0.0));
    }

    #[test]
    fn alpha_rides_along_unchanged() {
        for alpha in [0.0_f32, 0.25, 0.5, 1.0] {
            let ramp = HsbRamp::hue(1.0, 1.0, alpha);
            for t in [0.0_f32, 0.33, 0.66, 1.0] {
                assert_eq!(ramp.eval(t).a, alpha);
            }
        }
    }

    #[test]
    fn eval_is_pure() {
        let ramp = HsbRamp::saturation(0.12, 0.93, 0.4);
        let a = ramp.eval(0.71);
        let b = ramp.eval(0.71);
        assert_eq!(a, b);
        // The capture itself is untouched by evaluation.
        assert_eq!(ramp, HsbRamp::saturation(0.12, 0.93, 0.4));
    }

    #[test]
    fn channel_accessor_reports_the_varying_slot() {
        assert_eq!(HsbRamp::hue(1.0, 1.0, 1.0).channel(), HsbChannel::Hue);
        assert_eq!(
            HsbRamp::brightness(0.0, 0.0, 1.0).channel(),
            HsbChannel::Brightness
        );
    }
}
