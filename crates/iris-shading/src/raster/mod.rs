//! CPU raster backend.
//!
//! A plain RGBA8 pixel surface implementing [`crate::backend::ShadingBackend`]
//! by evaluating the registered function once per covered pixel center and
//! compositing source-over. It exists for tests, tooling and headless
//! rendering; a GPU or PDF backend would implement the same contract with
//! its own sampling strategy.

mod fill;
mod surface;

pub use surface::{RasterPrimitive, RasterSurface};
