use iris_color::Rgba;

use crate::backend::{ShadingBackend, ShadingDesc};
use crate::coords::Rect;
use crate::func::ShadingFunction;
use crate::shading::Geometry;

use super::fill;

/// An RGBA8 pixel surface that renders shadings on the CPU.
///
/// Pixels are straight-alpha, row-major, starting transparent black. An
/// optional clip rectangle scopes every subsequent draw; clearing ignores
/// the clip.
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    clip: Option<Rect>,
}

/// Compiled shading primitive of the raster backend. Opaque: it exists only
/// to be passed back to [`ShadingBackend::draw_shading`].
pub struct RasterPrimitive {
    geometry: Geometry,
    function: ShadingFunction,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills every pixel with `color`, ignoring the clip.
    pub fn clear(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        self.pixels.fill(bytes);
    }

    /// Scopes subsequent draws to `rect` (logical pixels).
    pub fn set_clip(&mut self, rect: Rect) {
        debug_assert!(rect.is_finite(), "clip rect must be finite");
        self.clip = Some(rect.normalized());
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    pub(super) fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// The pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[(y * self.width + x) as usize])
    }

    /// Raw RGBA8 bytes, row-major. Suitable for image encoders.
    pub fn pixels_raw(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Source-over composite of a straight-alpha sample onto one pixel.
    ///
    /// Caller guarantees `(x, y)` is inside the surface and the sample's
    /// channels are already in `[0, 1]`.
    pub(super) fn blend(&mut self, x: u32, y: u32, src: Rgba) {
        let dst = &mut self.pixels[(y * self.width + x) as usize];
        let sa = src.a;
        if sa <= 0.0 {
            return;
        }
        if sa >= 1.0 {
            *dst = src.to_bytes();
            return;
        }

        let da = dst[3] as f32 / 255.0;
        // sa is in (0, 1) here, so out_a >= sa > 0 and the divide is safe.
        let out_a = sa + da * (1.0 - sa);

        let over = |s: f32, d: u8| (s * sa + (d as f32 / 255.0) * da * (1.0 - sa)) / out_a;
        *dst = Rgba::new(
            over(src.r, dst[0]),
            over(src.g, dst[1]),
            over(src.b, dst[2]),
            out_a,
        )
        .to_bytes();
    }
}

impl ShadingBackend for RasterSurface {
    type Function = ShadingFunction;
    type Primitive = RasterPrimitive;

    /// Any function is accepted; sampling happens pixel by pixel at draw
    /// time.
    fn build_function(&mut self, function: ShadingFunction) -> Option<Self::Function> {
        Some(function)
    }

    fn build_shading(
        &mut self,
        desc: ShadingDesc,
        function: Self::Function,
    ) -> Option<Self::Primitive> {
        if !desc.color_space.is_rgb() {
            log::warn!("raster surface: refusing non-RGB color space");
            return None;
        }
        if !desc.geometry.is_finite() {
            log::warn!("raster surface: refusing non-finite geometry");
            return None;
        }
        match desc.geometry {
            Geometry::Axial(a) if a.start == a.end => {
                log::warn!("raster surface: refusing zero-length axis");
                None
            }
            Geometry::Radial(r) if r.start.radius < 0.0 || r.end.radius < 0.0 => {
                log::warn!("raster surface: refusing negative radius");
                None
            }
            Geometry::Radial(r) if r.start == r.end => {
                log::warn!("raster surface: refusing coincident circles");
                None
            }
            geometry => Some(RasterPrimitive { geometry, function }),
        }
    }

    fn draw_shading(&mut self, primitive: Self::Primitive) {
        match primitive.geometry {
            Geometry::Axial(a) => fill::fill_axial(self, a, &primitive.function),
            Geometry::Radial(r) => fill::fill_radial(self, r, &primitive.function),
        }
        // Dropping the primitive here releases the function's capture.
    }
}
