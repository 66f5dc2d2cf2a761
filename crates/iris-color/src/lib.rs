//! HSB color math for the Iris shading crates.
//!
//! Everything here is pure value code: no allocation on the evaluation
//! path, no I/O, no dependencies. The crate exists so conversion and ramp
//! evaluation can be reused by tools and tests without dragging in backend
//! traits or logging.
//!
//! # Structure
//!
//! | Module   | Contents                                           |
//! |----------|----------------------------------------------------|
//! | [`rgb`]  | `Rgb` / `Rgba` sample types, channel clamping      |
//! | [`hsb`]  | `Hsb`, hue wrapping, sector-method conversion      |
//! | [`ramp`] | `HsbChannel`, the `HsbRamp` capture and evaluator  |
//!
//! # Quick start
//!
//! ```
//! use iris_color::{HsbRamp, Rgba};
//!
//! // Hue sweeps; saturation, brightness and alpha stay fixed at 1.
//! let ramp = HsbRamp::hue(1.0, 1.0, 1.0);
//! assert_eq!(ramp.eval(0.0), Rgba::new(1.0, 0.0, 0.0, 1.0)); // red
//! assert_eq!(ramp.eval(0.5), Rgba::new(0.0, 1.0, 1.0, 1.0)); // cyan
//! ```

pub mod hsb;
pub mod ramp;
pub mod rgb;

pub use hsb::{hsb_to_rgb, wrap_hue, Hsb};
pub use ramp::{HsbChannel, HsbRamp};
pub use rgb::{clamp_unit, Rgb, Rgba};
