use crate::coords::{Circle, Vec2};

/// Axial (linear) gradient axis with extend flags.
///
/// The extend flags default to both ends on, the conventional look for a
/// linear fill: the boundary colors continue past the endpoints instead of
/// leaving the surface untouched there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Axial {
    pub start: Vec2,
    pub end: Vec2,
    pub extend_start: bool,
    pub extend_end: bool,
}

impl Axial {
    /// Axis from `start` to `end`, extended past both endpoints.
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            extend_start: true,
            extend_end: true,
        }
    }

    /// Overrides the extend flags.
    #[inline]
    pub const fn extend(mut self, start: bool, end: bool) -> Self {
        self.extend_start = start;
        self.extend_end = end;
        self
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Radial gradient between two circles, with extend flags.
///
/// The extend flags default to both ends off, the conventional look for a
/// radial fill: nothing is painted inside the start circle or beyond the
/// end circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Radial {
    pub start: Circle,
    pub end: Circle,
    pub extend_start: bool,
    pub extend_end: bool,
}

impl Radial {
    /// Gradient from `start` to `end`, not extended at either end.
    #[inline]
    pub const fn new(start: Circle, end: Circle) -> Self {
        Self {
            start,
            end,
            extend_start: false,
            extend_end: false,
        }
    }

    /// Concentric form: both circles share `center`.
    #[inline]
    pub const fn concentric(center: Vec2, start_radius: f32, end_radius: f32) -> Self {
        Self::new(
            Circle::new(center, start_radius),
            Circle::new(center, end_radius),
        )
    }

    /// Overrides the extend flags.
    #[inline]
    pub const fn extend(mut self, start: bool, end: bool) -> Self {
        self.extend_start = start;
        self.extend_end = end;
        self
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Gradient geometry of a shading request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    Axial(Axial),
    Radial(Radial),
}

impl Geometry {
    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Geometry::Axial(a) => a.is_finite(),
            Geometry::Radial(r) => r.is_finite(),
        }
    }

    /// The extend flags as `(start, end)`.
    #[inline]
    pub fn extend_flags(self) -> (bool, bool) {
        match self {
            Geometry::Axial(a) => (a.extend_start, a.extend_end),
            Geometry::Radial(r) => (r.extend_start, r.extend_end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axial_extends_both_ends_by_default() {
        let a = Axial::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!((a.extend_start, a.extend_end), (true, true));
        let a = a.extend(false, true);
        assert_eq!((a.extend_start, a.extend_end), (false, true));
    }

    #[test]
    fn radial_extends_neither_end_by_default() {
        let r = Radial::concentric(Vec2::new(5.0, 5.0), 1.0, 4.0);
        assert_eq!((r.extend_start, r.extend_end), (false, false));
        assert_eq!(r.start.center, r.end.center);
        assert_eq!((r.start.radius, r.end.radius), (1.0, 4.0));
    }

    #[test]
    fn extend_flags_reads_either_variant() {
        let axial = Geometry::Axial(Axial::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)));
        assert_eq!(axial.extend_flags(), (true, true));

        let radial = Geometry::Radial(
            Radial::concentric(Vec2::new(0.0, 0.0), 0.0, 1.0).extend(true, false),
        );
        assert_eq!(radial.extend_flags(), (true, false));
    }
}
