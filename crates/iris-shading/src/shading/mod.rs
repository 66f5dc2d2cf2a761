//! Shading requests and drawing operations.
//!
//! Scope:
//! - gradient geometry payloads (axial axis, radial circle pair) with
//!   their extend flags
//! - per-channel parameter blocks carrying the conventional defaults
//! - the six drawing operations wiring parameters → capture → function →
//!   backend primitive → submit

mod draw;
mod geometry;
mod params;

pub use draw::{
    draw_axial_brightness, draw_axial_hue, draw_axial_saturation, draw_radial_brightness,
    draw_radial_hue, draw_radial_saturation,
};
pub use geometry::{Axial, Geometry, Radial};
pub use params::{BrightnessParams, HueParams, SaturationParams};
