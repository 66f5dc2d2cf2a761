//! Host backend contract.
//!
//! Scope:
//! - color space descriptors (`ColorModel`, `ColorSpace`)
//! - the shading request payload (`ShadingDesc`)
//! - the `ShadingBackend` trait the drawing operations target
//!
//! The in-tree implementation is [`crate::raster::RasterSurface`]; contract
//! tests drive a recording mock instead.

mod contract;
mod space;

#[cfg(test)]
pub(crate) mod mock;

pub use contract::{ShadingBackend, ShadingDesc};
pub use space::{ColorModel, ColorSpace};
