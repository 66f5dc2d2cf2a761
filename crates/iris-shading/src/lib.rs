//! Iris shading crate.
//!
//! Draws axial and radial HSB ramp shadings through a pluggable vector
//! backend: one HSB channel sweeps an interval while the other two are held
//! fixed, and the backend samples a registered function object at whatever
//! density it needs. The pure color math lives in [`iris_color`]; this crate
//! owns geometry, the sampled-function model, the backend contract, the
//! drawing operations, and a CPU raster backend for tests and headless use.
//!
//! # Quick start
//!
//! ```
//! use iris_shading::backend::ColorSpace;
//! use iris_shading::coords::Vec2;
//! use iris_shading::raster::RasterSurface;
//! use iris_shading::shading::{draw_axial_hue, Axial, HueParams};
//!
//! let mut surface = RasterSurface::new(64, 16);
//! let axis = Axial::new(Vec2::new(0.0, 0.0), Vec2::new(64.0, 0.0));
//! draw_axial_hue(&mut surface, ColorSpace::device_rgb(), axis, HueParams::default())?;
//! # Ok::<(), iris_shading::error::ShadingError>(())
//! ```

pub mod backend;
pub mod coords;
pub mod error;
pub mod func;
pub mod logging;
pub mod raster;
pub mod shading;

pub use iris_color as color;
