//! Renders a small gallery of HSB ramp shadings to `gallery/*.png` using the
//! CPU raster backend. Doubles as an end-to-end smoke test: every drawing
//! operation and both gradient kinds show up in at least one image.

use std::path::Path;

use anyhow::{Context, Result};

use iris_shading::backend::ColorSpace;
use iris_shading::color::Rgba;
use iris_shading::coords::{Circle, Rect, Vec2};
use iris_shading::logging::{init_logging, LoggingConfig};
use iris_shading::raster::RasterSurface;
use iris_shading::shading::{
    draw_axial_brightness, draw_axial_hue, draw_axial_saturation, draw_radial_brightness,
    draw_radial_hue, draw_radial_saturation, Axial, BrightnessParams, HueParams, Radial,
    SaturationParams,
};

const RGB: ColorSpace = ColorSpace::device_rgb();

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔══════════════════════════════════════╗");
    println!("  ║   IRIS GALLERY · HSB ramp shadings   ║");
    println!("  ╚══════════════════════════════════════╝");
    println!();

    let out = Path::new("gallery");
    std::fs::create_dir_all(out)
        .with_context(|| format!("failed to create {}", out.display()))?;

    save(out, "hue-ribbon.png", &hue_ribbon()?)?;
    save(out, "hue-band.png", &hue_band()?)?;
    save(out, "saturation-fade.png", &saturation_fade()?)?;
    save(out, "brightness-fade.png", &brightness_fade()?)?;
    save(out, "hue-ring.png", &hue_ring()?)?;
    save(out, "spotlight.png", &spotlight()?)?;
    save(out, "clipped-band.png", &clipped_band()?)?;

    println!();
    Ok(())
}

/// The full hue wheel unrolled along a horizontal axis.
fn hue_ribbon() -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(512, 96);
    let axis = Axial::new(Vec2::zero(), Vec2::new(512.0, 0.0));
    draw_axial_hue(&mut surface, RGB, axis, HueParams::default())?;
    Ok(surface)
}

/// Only the cyan-centered half of the wheel, via the sub-range parameter.
fn hue_band() -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(512, 96);
    let axis = Axial::new(Vec2::zero(), Vec2::new(512.0, 0.0));
    let params = HueParams {
        range: (0.25..=0.75).into(),
        ..HueParams::default()
    };
    draw_axial_hue(&mut surface, RGB, axis, params)?;
    Ok(surface)
}

/// Azure desaturating to white, left to right.
fn saturation_fade() -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(512, 96);
    let axis = Axial::new(Vec2::new(512.0, 0.0), Vec2::zero());
    let params = SaturationParams {
        hue: 0.58,
        ..SaturationParams::default()
    };
    draw_axial_saturation(&mut surface, RGB, axis, params)?;
    Ok(surface)
}

/// Black rising to pure green.
fn brightness_fade() -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(512, 96);
    let axis = Axial::new(Vec2::zero(), Vec2::new(512.0, 0.0));
    let params = BrightnessParams {
        hue: 1.0 / 3.0,
        ..BrightnessParams::default()
    };
    draw_axial_brightness(&mut surface, RGB, axis, params)?;
    Ok(surface)
}

/// A hue ring composited over a dark background. The unextended radial
/// leaves the disc inside the start circle untouched, and the ramp's alpha
/// lets the background glow through.
fn hue_ring() -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(320, 320);
    surface.clear(Rgba::new(0.07, 0.07, 0.1, 1.0));

    let ring = Radial::concentric(Vec2::new(160.0, 160.0), 48.0, 150.0);
    let params = HueParams {
        alpha: 0.85,
        ..HueParams::default()
    };
    draw_radial_hue(&mut surface, RGB, ring, params)?;
    Ok(surface)
}

/// Brightness rising toward the inner circle. The circles are given in
/// outer-to-inner order, and extending past the end keeps the core at full
/// brightness.
fn spotlight() -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(480, 200);
    let beam = Radial::new(
        Circle::new(Vec2::new(240.0, 100.0), 160.0),
        Circle::new(Vec2::new(300.0, 90.0), 6.0),
    )
    .extend(false, true);
    let params = BrightnessParams {
        hue: 0.12,
        saturation: 0.65,
        ..BrightnessParams::default()
    };
    draw_radial_brightness(&mut surface, RGB, beam, params)?;
    Ok(surface)
}

/// A clip rectangle scoping a saturation sweep to a center band.
fn clipped_band() -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(512, 96);
    surface.clear(Rgba::new(0.12, 0.12, 0.12, 1.0));

    surface.set_clip(Rect::from_xywh(32.0, 24.0, 448.0, 48.0));
    let ramp = Radial::concentric(Vec2::new(256.0, 48.0), 0.0, 256.0).extend(false, true);
    let params = SaturationParams {
        hue: 0.83,
        ..SaturationParams::default()
    };
    draw_radial_saturation(&mut surface, RGB, ramp, params)?;
    surface.clear_clip();
    Ok(surface)
}

fn save(dir: &Path, name: &str, surface: &RasterSurface) -> Result<()> {
    let path = dir.join(name);
    image::save_buffer(
        &path,
        surface.pixels_raw(),
        surface.width(),
        surface.height(),
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("failed to encode {}", path.display()))?;

    log::info!("encoded {}", path.display());
    println!("  wrote {}", path.display());
    Ok(())
}
