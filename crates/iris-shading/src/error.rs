//! Drawing failure type.

use std::fmt;

use crate::backend::ColorModel;

/// A recoverable drawing failure.
///
/// Every drawing operation reports failure this way; none of them panic.
/// Whatever the variant, nothing was drawn and the captured ramp constants
/// were already released by the time the error is returned.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShadingError {
    /// The target color space is not RGB-model.
    UnsupportedColorSpace(ColorModel),
    /// The backend refused to register the sampled-function object.
    FunctionRejected,
    /// The backend refused to build the gradient primitive.
    PrimitiveRejected,
}

impl fmt::Display for ShadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadingError::UnsupportedColorSpace(model) => {
                write!(f, "color space model must be RGB, got {model:?}")
            }
            ShadingError::FunctionRejected => {
                write!(f, "backend rejected the shading function")
            }
            ShadingError::PrimitiveRejected => {
                write!(f, "backend rejected the shading primitive")
            }
        }
    }
}

impl std::error::Error for ShadingError {}
