//! Coordinate and geometry types shared by the drawing operations and
//! backends.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Backends that render to device pixels own the mapping from this space.

mod circle;
mod rect;
mod vec2;

pub use circle::Circle;
pub use rect::Rect;
pub use vec2::Vec2;
