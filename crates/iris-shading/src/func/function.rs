use std::fmt;

use iris_color::{HsbRamp, Rgba};

use super::Domain;

/// Hook fired exactly once when the owner of a function is done with it.
pub type ReleaseHook = Box<dyn FnOnce() + Send + Sync>;

/// A one-in / four-out sampled shading function.
///
/// Owns the ramp capture for exactly one registration: the drawing
/// operation moves the function into the backend, the backend samples it
/// while compositing, and dropping it releases the capture. Because release
/// is `Drop`, it happens exactly once on every path, including a backend
/// refusing to build its objects.
///
/// Sampling contract:
/// - the declared input domain is one-dimensional; [`eval`](Self::eval)
///   clamps the parameter into it
/// - the declared output range is `[0, 1]` per channel; `eval` clamps
///   every output
/// - evaluation is pure, re-entrant and allocation-free, so backends may
///   sample at any density, in any order, from any thread
pub struct ShadingFunction {
    ramp: HsbRamp,
    domain: Domain,
    release: Option<ReleaseHook>,
}

impl ShadingFunction {
    pub fn new(ramp: HsbRamp, domain: Domain) -> Self {
        Self {
            ramp,
            domain,
            release: None,
        }
    }

    /// Registers a hook fired exactly once when the function is released.
    ///
    /// Backends and tests use this to observe the capture lifetime. No call
    /// is needed to trigger release; dropping the function is the release.
    pub fn on_release(mut self, hook: impl FnOnce() + Send + Sync + 'static) -> Self {
        self.release = Some(Box::new(hook));
        self
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn ramp(&self) -> &HsbRamp {
        &self.ramp
    }

    /// Samples the function at `t`.
    #[inline]
    pub fn eval(&self, t: f32) -> Rgba {
        self.ramp.eval(self.domain.clamp(t)).clamped()
    }
}

impl Drop for ShadingFunction {
    fn drop(&mut self) {
        if let Some(hook) = self.release.take() {
            hook();
        }
    }
}

impl fmt::Debug for ShadingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadingFunction")
            .field("ramp", &self.ramp)
            .field("domain", &self.domain)
            .field("release", &self.release.is_some())
            .finish()
    }
}
