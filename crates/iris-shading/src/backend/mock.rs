//! Recording mock backend for contract tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use iris_color::Rgba;

use crate::func::{Domain, ShadingFunction};

use super::{ShadingBackend, ShadingDesc};

/// Mock backend that records every registration, samples registered
/// functions at configurable positions, and can refuse either build step.
///
/// A release counter hook is attached to every function the moment it
/// arrives, before any refusal decision, so capture release is observable
/// on success and failure paths alike.
#[derive(Default)]
pub(crate) struct MockBackend {
    pub refuse_function: bool,
    pub refuse_shading: bool,
    /// Geometry positions sampled per draw: 0 = domain start, 1 = domain end.
    pub sample_positions: Vec<f32>,
    pub log: MockLog,
    pub release_count: Arc<AtomicUsize>,
}

#[derive(Default)]
pub(crate) struct MockLog {
    pub functions_built: usize,
    pub shadings_built: usize,
    pub draws: usize,
    pub domains: Vec<Domain>,
    pub descs: Vec<ShadingDesc>,
    pub sampled: Vec<(f32, Rgba)>,
}

pub(crate) struct MockPrimitive {
    function: ShadingFunction,
}

impl MockBackend {
    /// Mock that samples each draw at the given geometry positions.
    pub fn sampling(positions: &[f32]) -> Self {
        Self {
            sample_positions: positions.to_vec(),
            ..Self::default()
        }
    }

    /// How many captures have been released so far.
    pub fn released(&self) -> usize {
        self.release_count.load(Ordering::Relaxed)
    }
}

impl ShadingBackend for MockBackend {
    type Function = ShadingFunction;
    type Primitive = MockPrimitive;

    fn build_function(&mut self, function: ShadingFunction) -> Option<Self::Function> {
        self.log.functions_built += 1;
        self.log.domains.push(function.domain());

        let released = self.release_count.clone();
        let function = function.on_release(move || {
            released.fetch_add(1, Ordering::Relaxed);
        });

        if self.refuse_function {
            // Dropping the refused function is the release.
            return None;
        }
        Some(function)
    }

    fn build_shading(
        &mut self,
        desc: ShadingDesc,
        function: Self::Function,
    ) -> Option<Self::Primitive> {
        self.log.shadings_built += 1;
        self.log.descs.push(desc);

        if self.refuse_shading {
            return None;
        }
        Some(MockPrimitive { function })
    }

    fn draw_shading(&mut self, primitive: Self::Primitive) {
        self.log.draws += 1;
        let domain = primitive.function.domain();
        for &s in &self.sample_positions {
            let t = domain.lerp(s);
            self.log.sampled.push((t, primitive.function.eval(t)));
        }
    }
}
