//! RGB sample types.
//!
//! Scope:
//! - `Rgb`: an opaque color triple, the output of HSB conversion
//! - `Rgba`: the quadruple a shading function emits per evaluation call
//! - `clamp_unit`: the shared channel-value clamp
//!
//! Both types use straight (non-premultiplied) alpha. Compositing against a
//! destination is the consumer's concern.

/// Clamps a channel value into `[0, 1]`.
///
/// NaN pins to `0.0`; infinities clamp like any other out-of-range value.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// An RGB color triple.
///
/// Semantics: channels are nominally in `[0, 1]`. Conversion keeps values in
/// range for in-range inputs; consumers that need hard guarantees clamp at
/// the sampling boundary (see [`Rgba::clamped`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Achromatic gray of the given intensity.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Attaches an alpha channel.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

/// An RGBA color sample.
///
/// Semantics: straight alpha, channels nominally in `[0, 1]`. Samples are
/// ephemeral: produced by a ramp evaluation, handed to the backend for
/// compositing, then dropped.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Returns the sample with every channel clamped into `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            clamp_unit(self.r),
            clamp_unit(self.g),
            clamp_unit(self.b),
            clamp_unit(self.a),
        )
    }

    /// Packs into 8-bit RGBA, round to nearest, out-of-range clamped.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        #[inline]
        fn quantize(v: f32) -> u8 {
            (clamp_unit(v) * 255.0 + 0.5) as u8
        }
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

// ─── tests ──────────────────────────────────────────────────────────────────
