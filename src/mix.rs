//! Describes a Color that can be mixed with other colors in its own 3D space. Mixing, in this
//! context, is linear interpolation between the two color projections: `pct = 0` gives the first
//! color back, `pct = 1` the second.
//!
//! Mixing differs depending on the color space being used: interpolating two colors in linear RGB
//! gives a different result than interpolating the same two colors in CIELUV. For that reason
//! `a.mix(pct, b)` is only allowed if `a` and `b` share a type. Physically-meaningful blending of
//! light happens in [`LinearRGBColor`](crate::color::LinearRGBColor); the cylindrical spaces
//! (HSV, LCh, HSLuv, HPLuv) don't implement this at all, since averaging a hue angle isn't
//! well-defined.

use crate::color::Color;
use crate::coord::Coord;

/// A color that can be linearly interpolated with another color of the same type.
pub trait Mix: Color {
    /// Returns the color `pct` of the way from `self` to `other`, computed per channel as
    /// `from + pct * (to - from)`.
    fn mix(self, pct: f64, other: Self) -> Self;
}

impl<T: Color + From<Coord> + Into<Coord>> Mix for T {
    fn mix(self, pct: f64, other: T) -> T {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        T::from(c1.lerp(&c2, pct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{LinearRGBColor, XYZColor};
    use crate::colors::CIELUVColor;

    #[test]
    fn test_mix_linear_rgb() {
        // powers of 2 keep the arithmetic exact
        let c1 = LinearRGBColor {
            r: 0.5,
            g: 0.25,
            b: 0.75,
        };
        let c2 = LinearRGBColor {
            r: 1.,
            g: 0.5,
            b: 0.25,
        };
        assert_eq!(
            c1.mix(0.25, c2),
            LinearRGBColor {
                r: 0.625,
                g: 0.3125,
                b: 0.625
            }
        );
        assert_eq!(c1.mix(0., c2), c1);
        assert_eq!(c1.mix(1., c2), c2);
    }

    #[test]
    fn test_mix_xyz_and_luv() {
        let c1 = XYZColor {
            x: 0.5,
            y: 0.25,
            z: 0.75,
        };
        let c3 = XYZColor {
            x: 0.75,
            y: 0.5,
            z: 0.25,
        };
        assert_eq!(
            c1.mix(0.5, c3),
            XYZColor {
                x: 0.625,
                y: 0.375,
                z: 0.5
            }
        );
        let l1 = CIELUVColor {
            l: 40.,
            u: 10.,
            v: -20.,
        };
        let l2 = CIELUVColor {
            l: 60.,
            u: 30.,
            v: 20.,
        };
        assert_eq!(
            l1.mix(0.5, l2),
            CIELUVColor {
                l: 50.,
                u: 20.,
                v: 0.
            }
        );
    }
}
