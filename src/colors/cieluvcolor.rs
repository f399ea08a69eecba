//! This module implements the CIELUV color space (CIE 1976 L\*u\*v\*), the space HSLuv is
//! built on. u and v measure how far a color's chromaticity is from the reference white, scaled by
//! lightness, so that straight lines from white stay straight: this is what lets the sRGB gamut be
//! described by the straight boundary lines in [`bound`](crate::bound).

use std::fmt;

use crate::color::{rgb_to_xyz, xyz_to_rgb, Color, RGBColor, XYZColor};
use crate::consts::{EPSILON, KAPPA, REF_U, REF_V, REF_Y};
use crate::coord::Coord;

/// A color in CIELUV, relative to the D65 white point.
/// # Example
///
/// ```
/// # use luvly::prelude::*;
/// # use luvly::colors::CIELUVColor;
/// let white: CIELUVColor = RGBColor{r: 1., g: 1., b: 1.}.convert();
/// assert!((white.l - 100.).abs() < 1e-8);
/// assert!(white.u.abs() < 1e-8);
/// assert!(white.v.abs() < 1e-8);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The lightness component. Ranges from 0 to 100 by definition.
    pub l: f64,
    /// The red-green chromaticity component: positive is red, negative is green. Unbounded, but in
    /// sRGB it stays between roughly -84 and 176.
    pub u: f64,
    /// The yellow-blue chromaticity component: positive is yellow, negative is blue. In sRGB it
    /// stays between roughly -135 and 108.
    pub v: f64,
}

/// The CIE lightness function: relative luminance to L\*.
fn l_from_y(t: f64) -> f64 {
    if t > EPSILON {
        116.0 * (t / REF_Y).powf(1.0 / 3.0) - 16.0
    } else {
        t / REF_Y * KAPPA
    }
}

/// The inverse of [`l_from_y`]: L\* to relative luminance.
fn y_from_l(t: f64) -> f64 {
    if t > 8.0 {
        (REF_Y * ((t + 16.0) / 116.0)).powf(3.0)
    } else {
        REF_Y * t / KAPPA
    }
}

/// Converts CIE XYZ to CIELUV. Black (and anything whose lightness rounds to exactly 0) maps to
/// `(0, 0, 0)` rather than dividing by zero.
pub fn xyz_to_luv(xyz: XYZColor) -> CIELUVColor {
    let XYZColor { x, y, z } = xyz;
    if x == 0.0 && y == 0.0 && z == 0.0 {
        return CIELUVColor {
            l: 0.0,
            u: 0.0,
            v: 0.0,
        };
    }
    let l = l_from_y(y);
    if l == 0.0 {
        return CIELUVColor {
            l: 0.0,
            u: 0.0,
            v: 0.0,
        };
    }
    let denom = x + 15.0 * y + 3.0 * z;
    let u = 13.0 * l * (4.0 * x / denom - REF_U);
    let v = 13.0 * l * (9.0 * y / denom - REF_V);
    CIELUVColor { l, u, v }
}

/// Converts CIELUV back to CIE XYZ. No guard protects the denominator: chromaticities that make
/// it vanish produce infinities or NaN.
pub fn luv_to_xyz(luv: CIELUVColor) -> XYZColor {
    let CIELUVColor { l, u, v } = luv;
    if l == 0.0 {
        return XYZColor {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
    }
    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;

    let y = y_from_l(l) * REF_Y;
    let x = 0.0 - (9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    XYZColor { x, y, z }
}

impl Color for CIELUVColor {
    fn from_rgb(rgb: RGBColor) -> CIELUVColor {
        xyz_to_luv(rgb_to_xyz(rgb))
    }
    fn to_rgb(&self) -> RGBColor {
        xyz_to_rgb(luv_to_xyz(*self))
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<CIELUVColor> for Coord {
    fn from(c: CIELUVColor) -> Coord {
        Coord {
            x: c.l,
            y: c.u,
            z: c.v,
        }
    }
}

impl fmt::Display for CIELUVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Luv({}, {}, {})", self.l, self.u, self.v)
    }
}

impl_approx_eq!(CIELUVColor, l, u, v);
