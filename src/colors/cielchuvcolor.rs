//! This module implements the CIELCHuv color space, a cylindrical transformation of the
//! CIELUV space: lightness stays, and (u, v) become a chroma radius and a hue angle.

use std::fmt;

use super::cieluvcolor::{luv_to_xyz, xyz_to_luv, CIELUVColor};
use crate::color::{rgb_to_xyz, xyz_to_rgb, Color, RGBColor};
use crate::consts::CHROMA_EPSILON;

/// The polar version of CIELUV. HSLuv and HPLuv are both rescalings of this space.
/// # Example
///
/// ```
/// # use luvly::prelude::*;
/// # use luvly::colors::CIELCHuvColor;
/// // hue-shift red toward yellow, keeping the same lightness and chroma
/// let red = RGBColor{r: 0.7, g: 0.1, b: 0.1};
/// let red_lch: CIELCHuvColor = red.convert();
/// let shifted = CIELCHuvColor { h: red_lch.h + 40., ..red_lch };
/// let shifted_rgb: RGBColor = shifted.convert();
/// assert!(shifted_rgb.g > red.g);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The lightness component, the same as CIELUV's. Varies between 0 and 100.
    pub l: f64,
    /// The chroma component: how far the color is from the gray of the same lightness. This is
    /// the radius in cylindrical coordinates; sRGB reaches about 179 for pure red.
    pub c: f64,
    /// The hue component, in degrees from 0 to 360. sRGB red sits near 12, yellow near 86, green
    /// near 128 and blue near 266. Grays have a hue of 0.
    pub h: f64,
}

/// Converts CIELUV to its polar form. Chroma below `1e-8` has no meaningful direction, so such
/// colors get a hue of 0 instead of whatever `atan2` makes of rounding noise.
pub fn luv_to_lch(luv: CIELUVColor) -> CIELCHuvColor {
    let CIELUVColor { l, u, v } = luv;
    let c = (u * u + v * v).sqrt();
    if c < CHROMA_EPSILON {
        return CIELCHuvColor { l, c, h: 0.0 };
    }
    let h = v.atan2(u).to_degrees();
    let h = if h < 0.0 { h + 360.0 } else { h };
    CIELCHuvColor { l, c, h }
}

/// Converts CIELCHuv back to Cartesian CIELUV.
pub fn lch_to_luv(lch: CIELCHuvColor) -> CIELUVColor {
    let CIELCHuvColor { l, c, h } = lch;
    let hrad = h.to_radians();
    CIELUVColor {
        l,
        u: hrad.cos() * c,
        v: hrad.sin() * c,
    }
}

impl Color for CIELCHuvColor {
    fn from_rgb(rgb: RGBColor) -> CIELCHuvColor {
        luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb)))
    }
    fn to_rgb(&self) -> RGBColor {
        xyz_to_rgb(luv_to_xyz(lch_to_luv(*self)))
    }
}

impl fmt::Display for CIELCHuvColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lch({}, {}, {})", self.l, self.c, self.h)
    }
}

impl_approx_eq!(CIELCHuvColor, l, c, h);
