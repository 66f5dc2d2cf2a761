//! Per-pixel gradient fills.
//!
//! Both fills walk the pixel centers of the clipped target area, recover the
//! geometry position `s` of each center (0 at the gradient start, 1 at the
//! end), gate it through the extend flags, map it onto the function's
//! domain, and composite the sample.

use crate::coords::{Rect, Vec2};
use crate::func::ShadingFunction;
use crate::shading::{Axial, Radial};

use super::surface::RasterSurface;

/// The clipped target area plus its integer pixel bounds, or `None` when
/// nothing is covered.
fn pixel_range(surface: &RasterSurface) -> Option<(Rect, u32, u32, u32, u32)> {
    let full = Rect::from_xywh(0.0, 0.0, surface.width() as f32, surface.height() as f32);
    let area = match surface.clip() {
        None => full,
        Some(clip) => full.intersect(clip)?,
    };

    let x0 = area.min.x.floor().max(0.0) as u32;
    let y0 = area.min.y.floor().max(0.0) as u32;
    let x1 = (area.max.x.ceil().max(0.0) as u32).min(surface.width());
    let y1 = (area.max.y.ceil().max(0.0) as u32).min(surface.height());
    Some((area, x0, y0, x1, y1))
}

/// Lower/upper bounds on `s` imposed by the extend flags.
#[inline]
fn extend_window(extend_start: bool, extend_end: bool) -> (f32, f32) {
    (
        if extend_start { f32::NEG_INFINITY } else { 0.0 },
        if extend_end { f32::INFINITY } else { 1.0 },
    )
}

pub(super) fn fill_axial(surface: &mut RasterSurface, axial: Axial, function: &ShadingFunction) {
    let Some((area, x0, y0, x1, y1)) = pixel_range(surface) else {
        return;
    };

    let d = axial.end - axial.start;
    let len_sq = d.length_sq();
    debug_assert!(len_sq > 0.0, "zero-length axis is refused at build");
    let (s_min, s_max) = extend_window(axial.extend_start, axial.extend_end);
    let domain = function.domain();

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if !area.contains(p) {
                continue;
            }

            // Orthogonal projection of the pixel center onto the axis.
            let s = (p - axial.start).dot(d) / len_sq;
            if s < s_min || s > s_max {
                continue;
            }

            let t = domain.lerp(s.clamp(0.0, 1.0));
            surface.blend(x, y, function.eval(t));
        }
    }
}

pub(super) fn fill_radial(surface: &mut RasterSurface, radial: Radial, function: &ShadingFunction) {
    let Some((area, x0, y0, x1, y1)) = pixel_range(surface) else {
        return;
    };

    // A pixel center p lies on the circle at position s when
    // |p - c(s)| = r(s), with c(s) and r(s) interpolating the circle pair.
    // Squaring gives the quadratic a·s² - 2·b·s + c = 0 below.
    let cd = radial.end.center - radial.start.center;
    let dr = radial.end.radius - radial.start.radius;
    let r0 = radial.start.radius;
    let a = cd.length_sq() - dr * dr;
    let (s_min, s_max) = extend_window(radial.extend_start, radial.extend_end);
    let domain = function.domain();

    let in_window = |s: f32| s >= s_min && s <= s_max && r0 + s * dr >= 0.0;

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if !area.contains(p) {
                continue;
            }

            let pd = p - radial.start.center;
            let b = pd.dot(cd) + r0 * dr;
            let c = pd.length_sq() - r0 * r0;

            let s = if a == 0.0 {
                // The cone degenerates to a linear sweep.
                if b == 0.0 {
                    continue;
                }
                let s = c / (2.0 * b);
                if !in_window(s) {
                    continue;
                }
                s
            } else {
                let disc = b * b - a * c;
                if disc < 0.0 {
                    continue;
                }
                let sq = disc.sqrt();
                let (lo, hi) = {
                    let u = (b - sq) / a;
                    let v = (b + sq) / a;
                    if u <= v { (u, v) } else { (v, u) }
                };
                // The largest admissible position wins; its circle must
                // have a real radius.
                if in_window(hi) {
                    hi
                } else if in_window(lo) {
                    lo
                } else {
                    continue;
                }
            };

            let t = domain.lerp(s.clamp(0.0, 1.0));
            surface.blend(x, y, function.eval(t));
        }
    }
}

// ─── tests ──────────────────────────────────────────────────────────────────
