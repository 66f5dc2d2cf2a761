//! Drawing operations.
//!
//! Each operation follows the same protocol: validate the color space,
//! build the clamped ramp capture, register a sampled function whose domain
//! is the requested sub-range, compile the gradient primitive, submit.
//! Backend refusal is recoverable on every path: a diagnostic is logged,
//! nothing is drawn, the error is returned, and the capture is released.

use iris_color::HsbRamp;

use crate::backend::{ColorSpace, ShadingBackend, ShadingDesc};
use crate::error::ShadingError;
use crate::func::{Domain, ShadingFunction};

use super::{Axial, BrightnessParams, Geometry, HueParams, Radial, SaturationParams};

/// Draws an axial shading whose hue varies along the axis; saturation and
/// brightness are held at the parameter values.
pub fn draw_axial_hue<B: ShadingBackend>(
    backend: &mut B,
    color_space: ColorSpace,
    axial: Axial,
    params: HueParams,
) -> Result<(), ShadingError> {
    draw_ramp(
        backend,
        color_space,
        Geometry::Axial(axial),
        params.ramp(),
        params.range,
    )
}

/// Draws an axial shading whose saturation varies along the axis.
pub fn draw_axial_saturation<B: ShadingBackend>(
    backend: &mut B,
    color_space: ColorSpace,
    axial: Axial,
    params: SaturationParams,
) -> Result<(), ShadingError> {
    draw_ramp(
        backend,
        color_space,
        Geometry::Axial(axial),
        params.ramp(),
        params.range,
    )
}

/// Draws an axial shading whose brightness varies along the axis.
pub fn draw_axial_brightness<B: ShadingBackend>(
    backend: &mut B,
    color_space: ColorSpace,
    axial: Axial,
    params: BrightnessParams,
) -> Result<(), ShadingError> {
    draw_ramp(
        backend,
        color_space,
        Geometry::Axial(axial),
        params.ramp(),
        params.range,
    )
}

/// Draws a radial shading whose hue varies from the start circle to the end
/// circle.
pub fn draw_radial_hue<B: ShadingBackend>(
    backend: &mut B,
    color_space: ColorSpace,
    radial: Radial,
    params: HueParams,
) -> Result<(), ShadingError> {
    draw_ramp(
        backend,
        color_space,
        Geometry::Radial(radial),
        params.ramp(),
        params.range,
    )
}

/// Draws a radial shading whose saturation varies between the circles.
pub fn draw_radial_saturation<B: ShadingBackend>(
    backend: &mut B,
    color_space: ColorSpace,
    radial: Radial,
    params: SaturationParams,
) -> Result<(), ShadingError> {
    draw_ramp(
        backend,
        color_space,
        Geometry::Radial(radial),
        params.ramp(),
        params.range,
    )
}

/// Draws a radial shading whose brightness varies between the circles.
pub fn draw_radial_brightness<B: ShadingBackend>(
    backend: &mut B,
    color_space: ColorSpace,
    radial: Radial,
    params: BrightnessParams,
) -> Result<(), ShadingError> {
    draw_ramp(
        backend,
        color_space,
        Geometry::Radial(radial),
        params.ramp(),
        params.range,
    )
}

/// Shared core of every drawing operation.
///
/// Ownership of the capture moves with the function: refusal at either
/// build step consumes it, so release happens exactly once whether the
/// draw succeeds or not.
fn draw_ramp<B: ShadingBackend>(
    backend: &mut B,
    color_space: ColorSpace,
    geometry: Geometry,
    ramp: HsbRamp,
    range: Domain,
) -> Result<(), ShadingError> {
    let kind = match geometry {
        Geometry::Axial(_) => "axial",
        Geometry::Radial(_) => "radial",
    };

    if !color_space.is_rgb() {
        log::error!(
            "unable to draw the {kind} shading: color space model {:?} is not RGB",
            color_space.model()
        );
        return Err(ShadingError::UnsupportedColorSpace(color_space.model()));
    }

    let function = ShadingFunction::new(ramp, range);

    let Some(function) = backend.build_function(function) else {
        log::error!("unable to draw the {kind} shading: backend rejected the function object");
        return Err(ShadingError::FunctionRejected);
    };

    let desc = ShadingDesc {
        color_space,
        geometry,
    };
    let Some(primitive) = backend.build_shading(desc, function) else {
        log::error!("unable to draw the {kind} shading: backend rejected the primitive");
        return Err(ShadingError::PrimitiveRejected);
    };

    backend.draw_shading(primitive);
    Ok(())
}

// ─── tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use iris_color::hsb_to_rgb;

    use crate::backend::mock::MockBackend;
    use crate::backend::ColorModel;
    use crate::coords::Vec2;

    use super::*;

    fn axis() -> Axial {
        Axial::new(Vec2::zero(), Vec2::new(100.0, 0.0))
    }

    fn circles() -> Radial {
        Radial::concentric(Vec2::new(50.0, 50.0), 5.0, 40.0)
    }

    // ── sampling protocol ──

    #[test]
    fn hue_subrange_limits_what_the_evaluator_sees() {
        let mut backend = MockBackend::sampling(&[0.0, 0.5, 1.0]);
        let params = HueParams {
            range: (0.25..=0.75).into(),
            ..HueParams::default()
        };
        draw_axial_hue(&mut backend, ColorSpace::device_rgb(), axis(), params).unwrap();

        let ts: Vec<f32> = backend.log.sampled.iter().map(|(t, _)| *t).collect();
        assert_eq!(ts, vec![0.25, 0.5, 0.75]);
        assert!(ts.iter().all(|t| (0.25..=0.75).contains(t)));

        for (t, c) in &backend.log.sampled {
            let expected = hsb_to_rgb(*t, 1.0, 1.0).with_alpha(1.0);
            assert_eq!(*c, expected, "t = {t}");
        }
    }

    #[test]
    fn each_operation_routes_its_own_channel() {
        let cs = ColorSpace::device_rgb();

        let mut backend = MockBackend::sampling(&[0.5]);
        draw_axial_saturation(&mut backend, cs, axis(), SaturationParams::default()).unwrap();
        assert_eq!(backend.log.sampled[0].1, hsb_to_rgb(0.0, 0.5, 1.0).with_alpha(1.0));

        let mut backend = MockBackend::sampling(&[0.5]);
        draw_radial_brightness(&mut backend, cs, circles(), BrightnessParams::default()).unwrap();
        assert_eq!(backend.log.sampled[0].1, hsb_to_rgb(0.0, 1.0, 0.5).with_alpha(1.0));
    }

    #[test]
    fn alpha_rides_through_to_every_sample() {
        let mut backend = MockBackend::sampling(&[0.0, 0.3, 0.7, 1.0]);
        let params = HueParams {
            alpha: 0.25,
            ..HueParams::default()
        };
        draw_radial_hue(&mut backend, ColorSpace::device_rgb(), circles(), params).unwrap();

        assert_eq!(backend.log.sampled.len(), 4);
        for (_, c) in &backend.log.sampled {
            assert_eq!(c.a, 0.25);
        }
    }

    #[test]
    fn default_params_register_the_full_domain() {
        let mut backend = MockBackend::default();
        draw_axial_brightness(
            &mut backend,
            ColorSpace::device_rgb(),
            axis(),
            BrightnessParams::default(),
        )
        .unwrap();
        assert_eq!(backend.log.domains, vec![Domain::FULL]);
    }

    // ── request payload ──

    #[test]
    fn geometry_and_extend_flags_reach_the_backend() {
        let mut backend = MockBackend::default();
        let cs = ColorSpace::device_rgb();

        draw_axial_hue(&mut backend, cs, axis(), HueParams::default()).unwrap();
        let radial = circles().extend(true, false);
        draw_radial_hue(&mut backend, cs, radial, HueParams::default()).unwrap();

        assert_eq!(backend.log.descs.len(), 2);
        assert_eq!(backend.log.descs[0].geometry, Geometry::Axial(axis()));
        assert_eq!(backend.log.descs[0].geometry.extend_flags(), (true, true));
        assert_eq!(backend.log.descs[1].geometry, Geometry::Radial(radial));
        assert_eq!(backend.log.descs[1].geometry.extend_flags(), (true, false));
        assert!(backend.log.descs.iter().all(|d| d.color_space == cs));
    }

    // ── failure policy ──

    #[test]
    fn non_rgb_space_is_rejected_before_any_registration() {
        let gray = ColorSpace::device_gray();
        let lab = ColorSpace::new(ColorModel::Lab);
        let mut backend = MockBackend::default();

        let results = [
            draw_axial_hue(&mut backend, gray, axis(), HueParams::default()),
            draw_axial_saturation(&mut backend, gray, axis(), SaturationParams::default()),
            draw_axial_brightness(&mut backend, gray, axis(), BrightnessParams::default()),
            draw_radial_hue(&mut backend, lab, circles(), HueParams::default()),
            draw_radial_saturation(&mut backend, gray, circles(), SaturationParams::default()),
            draw_radial_brightness(&mut backend, gray, circles(), BrightnessParams::default()),
        ];

        for (i, result) in results.iter().enumerate() {
            match result {
                Err(ShadingError::UnsupportedColorSpace(_)) => {}
                other => panic!("operation {i}: expected color space rejection, got {other:?}"),
            }
        }
        assert_eq!(backend.log.functions_built, 0);
        assert_eq!(backend.log.draws, 0);
    }

    #[test]
    fn function_refusal_is_recoverable_and_releases_the_capture() {
        let mut backend = MockBackend {
            refuse_function: true,
            ..MockBackend::default()
        };
        let err = draw_axial_hue(
            &mut backend,
            ColorSpace::device_rgb(),
            axis(),
            HueParams::default(),
        )
        .unwrap_err();

        assert_eq!(err, ShadingError::FunctionRejected);
        assert_eq!(backend.log.shadings_built, 0);
        assert_eq!(backend.log.draws, 0);
        assert_eq!(backend.released(), 1);
    }

    #[test]
    fn primitive_refusal_is_recoverable_and_releases_the_capture() {
        let mut backend = MockBackend {
            refuse_shading: true,
            ..MockBackend::default()
        };
        let err = draw_radial_saturation(
            &mut backend,
            ColorSpace::device_rgb(),
            circles(),
            SaturationParams::default(),
        )
        .unwrap_err();

        assert_eq!(err, ShadingError::PrimitiveRejected);
        assert_eq!(backend.log.functions_built, 1);
        assert_eq!(backend.log.shadings_built, 1);
        assert_eq!(backend.log.draws, 0);
        assert_eq!(backend.released(), 1);
    }

    // ── capture lifetime ──

    #[test]
    fn capture_is_released_by_the_end_of_each_draw() {
        let mut backend = MockBackend::sampling(&[0.0, 1.0]);
        draw_axial_hue(
            &mut backend,
            ColorSpace::device_rgb(),
            axis(),
            HueParams::default(),
        )
        .unwrap();
        assert_eq!(backend.released(), 1);
    }

    #[test]
    fn a_thousand_draws_release_a_thousand_captures() {
        let mut backend = MockBackend::sampling(&[0.0, 0.5, 1.0]);
        let cs = ColorSpace::device_rgb();

        for i in 0..1000 {
            let params = HueParams {
                alpha: (i % 10) as f32 / 10.0,
                ..HueParams::default()
            };
            if i % 2 == 0 {
                draw_axial_hue(&mut backend, cs, axis(), params).unwrap();
            } else {
                draw_radial_hue(&mut backend, cs, circles(), params).unwrap();
            }
        }

        assert_eq!(backend.log.draws, 1000);
        assert_eq!(backend.released(), 1000);
    }
}
