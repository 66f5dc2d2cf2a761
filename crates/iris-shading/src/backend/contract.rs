use crate::func::ShadingFunction;
use crate::shading::Geometry;

use super::ColorSpace;

/// A shading request: target color space plus gradient geometry.
///
/// The sampled function is not part of the payload; it is registered in a
/// separate step and joined to the request by [`ShadingBackend::build_shading`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadingDesc {
    pub color_space: ColorSpace,
    pub geometry: Geometry,
}

/// Contract between the drawing operations and a graphics backend.
///
/// The backend owns sampling: it may evaluate a registered function any
/// number of times, at any parameter within the declared domain, in any
/// order, from any thread. Either build step may refuse by returning `None`;
/// a refusal consumes the function, which releases its capture.
pub trait ShadingBackend {
    /// Registered function object, opaque to callers.
    type Function;
    /// Compiled shading primitive, opaque to callers.
    type Primitive;

    /// Registers a sampled function, taking ownership of its capture.
    fn build_function(&mut self, function: ShadingFunction) -> Option<Self::Function>;

    /// Compiles a gradient primitive over a registered function.
    fn build_shading(&mut self, desc: ShadingDesc, function: Self::Function)
    -> Option<Self::Primitive>;

    /// Renders a compiled primitive, consuming it. For a synchronous
    /// backend the function's capture is released no later than the end of
    /// this call.
    fn draw_shading(&mut self, primitive: Self::Primitive);
}
