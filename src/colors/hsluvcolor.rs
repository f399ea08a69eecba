//! This module implements HSLuv, a human-friendly alternative to HSL. It is CIELCHuv with the
//! chroma rescaled, per lightness and hue, so that saturation 100 always lands exactly on the edge
//! of the sRGB gamut. Unlike HSL, changing the hue or saturation of an HSLuv color leaves its
//! perceived lightness alone; unlike raw CIELCHuv, every HSLuv color with saturation at most 100 is
//! displayable.

use std::fmt;

use super::cielchuvcolor::CIELCHuvColor;
use crate::bound::max_chroma_for_lh;
use crate::color::{Color, RGBColor};
use crate::consts::{L_BLACK, L_WHITE};
use crate::convert::{hsluv_to_rgb, rgb_to_hsluv};

/// A color in HSLuv.
/// # Example
///
/// ```
/// # use luvly::prelude::*;
/// # use luvly::colors::HSLuvColor;
/// // two fully saturated colors at the same lightness look equally light
/// let orange = HSLuvColor{h: 40., s: 100., l: 65.};
/// let purple = HSLuvColor{h: 280., s: 100., l: 65.};
/// let orange_rgb: RGBColor = orange.convert();
/// let purple_rgb: RGBColor = purple.convert();
/// assert!(orange_rgb.r <= 1. + 1e-9 && purple_rgb.b <= 1. + 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLuvColor {
    /// The hue, in degrees from 0 to 360. The same angle as CIELCHuv's hue.
    pub h: f64,
    /// The saturation, from 0 (gray) to 100 (the most chroma sRGB can show at this hue and
    /// lightness).
    pub s: f64,
    /// The lightness, from 0 to 100. The same as CIELUV's L\*.
    pub l: f64,
}

/// Rescales CIELCHuv chroma into HSLuv saturation. Lightness above `99.9999999` collapses to pure
/// white and lightness below `1e-8` to pure black, both with zero saturation; the hue is kept.
pub fn lch_to_hsluv(lch: CIELCHuvColor) -> HSLuvColor {
    let CIELCHuvColor { l, c, h } = lch;
    if l > L_WHITE {
        return HSLuvColor { h, s: 0.0, l: 100.0 };
    }
    if l < L_BLACK {
        return HSLuvColor { h, s: 0.0, l: 0.0 };
    }
    let max = max_chroma_for_lh(l, h);
    HSLuvColor {
        h,
        s: c / max * 100.0,
        l,
    }
}

/// Rescales HSLuv saturation back into CIELCHuv chroma, with the same white and black collapse as
/// [`lch_to_hsluv`].
pub fn hsluv_to_lch(hsluv: HSLuvColor) -> CIELCHuvColor {
    let HSLuvColor { h, s, l } = hsluv;
    if l > L_WHITE {
        return CIELCHuvColor { l: 100.0, c: 0.0, h };
    }
    if l < L_BLACK {
        return CIELCHuvColor { l: 0.0, c: 0.0, h };
    }
    let max = max_chroma_for_lh(l, h);
    CIELCHuvColor {
        l,
        c: max / 100.0 * s,
        h,
    }
}

impl Color for HSLuvColor {
    fn from_rgb(rgb: RGBColor) -> HSLuvColor {
        rgb_to_hsluv(rgb)
    }
    fn to_rgb(&self) -> RGBColor {
        hsluv_to_rgb(*self)
    }
}

impl fmt::Display for HSLuvColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hsluv({}, {}, {})", self.h, self.s, self.l)
    }
}

impl_approx_eq!(HSLuvColor, h, s, l);
