/// Color model classes a backend can express samples in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorModel {
    Rgb,
    Gray,
    Cmyk,
    Lab,
}

/// Descriptor for the color space a shading's samples are expressed in.
///
/// Ramp evaluation emits RGBA, so every drawing operation requires an
/// RGB-model space and rejects the request otherwise, before anything is
/// registered with the backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ColorSpace {
    model: ColorModel,
}

impl ColorSpace {
    #[inline]
    pub const fn new(model: ColorModel) -> Self {
        Self { model }
    }

    /// Device RGB, the space the drawing operations require.
    #[inline]
    pub const fn device_rgb() -> Self {
        Self::new(ColorModel::Rgb)
    }

    /// Device grayscale. Callers and tests use it to express non-RGB
    /// targets; drawing operations reject it.
    #[inline]
    pub const fn device_gray() -> Self {
        Self::new(ColorModel::Gray)
    }

    #[inline]
    pub const fn model(&self) -> ColorModel {
        self.model
    }

    #[inline]
    pub const fn is_rgb(&self) -> bool {
        matches!(self.model, ColorModel::Rgb)
    }
}
