use iris_color::HsbRamp;

use crate::func::Domain;

/// Parameters for the hue-varying operations.
///
/// Defaults describe the conventional full-strength ramp: saturation,
/// brightness and alpha at `1.0`, the whole hue wheel traversed. Override
/// fields with struct-update syntax:
///
/// ```
/// use iris_shading::shading::HueParams;
///
/// let params = HueParams {
///     range: (0.25..=0.75).into(),
///     ..HueParams::default()
/// };
/// assert_eq!(params.brightness, 1.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HueParams {
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
    /// Sub-interval of the hue wheel the shading traverses.
    pub range: Domain,
}

impl Default for HueParams {
    fn default() -> Self {
        Self {
            saturation: 1.0,
            brightness: 1.0,
            alpha: 1.0,
            range: Domain::FULL,
        }
    }
}

impl HueParams {
    pub(crate) fn ramp(&self) -> HsbRamp {
        HsbRamp::hue(self.saturation, self.brightness, self.alpha)
    }
}

/// Parameters for the saturation-varying operations.
///
/// Defaults: red hue, full brightness, opaque, full sweep from gray to the
/// pure hue.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SaturationParams {
    pub hue: f32,
    pub brightness: f32,
    pub alpha: f32,
    /// Sub-interval of the saturation span the shading traverses.
    pub range: Domain,
}

impl Default for SaturationParams {
    fn default() -> Self {
        Self {
            hue: 0.0,
            brightness: 1.0,
            alpha: 1.0,
            range: Domain::FULL,
        }
    }
}

impl SaturationParams {
    pub(crate) fn ramp(&self) -> HsbRamp {
        HsbRamp::saturation(self.hue, self.brightness, self.alpha)
    }
}

/// Parameters for the brightness-varying operations.
///
/// Defaults: red hue, full saturation, opaque, full sweep from black to the
/// pure hue.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BrightnessParams {
    pub hue: f32,
    pub saturation: f32,
    pub alpha: f32,
    /// Sub-interval of the brightness span the shading traverses.
    pub range: Domain,
}

impl Default for BrightnessParams {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            alpha: 1.0,
            range: Domain::FULL,
        }
    }
}

impl BrightnessParams {
    pub(crate) fn ramp(&self) -> HsbRamp {
        HsbRamp::brightness(self.hue, self.saturation, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use iris_color::HsbChannel;

    use super::*;

    #[test]
    fn defaults_are_full_strength_full_sweep() {
        let hue = HueParams::default();
        assert_eq!((hue.saturation, hue.brightness, hue.alpha), (1.0, 1.0, 1.0));
        assert_eq!(hue.range, Domain::FULL);

        let sat = SaturationParams::default();
        assert_eq!((sat.hue, sat.brightness, sat.alpha), (0.0, 1.0, 1.0));

        let bri = BrightnessParams::default();
        assert_eq!((bri.hue, bri.saturation, bri.alpha), (0.0, 1.0, 1.0));
    }

    #[test]
    fn each_block_builds_its_channel_ramp() {
        assert_eq!(HueParams::default().ramp().channel(), HsbChannel::Hue);
        assert_eq!(
            SaturationParams::default().ramp().channel(),
            HsbChannel::Saturation
        );
        assert_eq!(
            BrightnessParams::default().ramp().channel(),
            HsbChannel::Brightness
        );
    }

    #[test]
    fn out_of_range_fields_clamp_inside_the_capture() {
        let params = HueParams {
            saturation: 4.0,
            brightness: -1.0,
            alpha: 2.0,
            range: Domain::FULL,
        };
        assert_eq!(params.ramp(), HsbRamp::hue(1.0, 0.0, 1.0));
    }
}
