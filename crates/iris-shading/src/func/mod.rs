//! Sampled-function model.
//!
//! A shading is driven by a one-in / four-out function object: the backend
//! samples it over a declared scalar domain and composites the RGBA results.
//!
//! Scope:
//! - `Domain`: the declared input sub-interval of `[0, 1]`
//! - `ShadingFunction`: the function object owning the ramp capture, with
//!   its release protocol

mod domain;
mod function;

pub use domain::Domain;
pub use function::{ReleaseHook, ShadingFunction};
