//! This module implements HPLuv, the pastel sibling of HSLuv. Instead of rescaling chroma by the
//! gamut edge at each hue, it rescales by the smallest safe chroma for the lightness, whatever the
//! hue. That makes a given percentage mean the same chroma at every hue, at the cost of only
//! reaching pastel colors: percentages above 100 are allowed and are how fully saturated colors
//! are expressed, but they can leave the gamut.

use std::fmt;

use super::cielchuvcolor::CIELCHuvColor;
use crate::bound::max_safe_chroma_for_l;
use crate::color::{Color, RGBColor};
use crate::consts::{L_BLACK, L_WHITE};
use crate::convert::{hpluv_to_rgb, rgb_to_hpluv};

/// A color in HPLuv.
/// # Example
///
/// ```
/// # use luvly::prelude::*;
/// # use luvly::colors::{CIELCHuvColor, HPLuvColor};
/// // the same percentage gives the same chroma at any hue
/// let a: CIELCHuvColor = HPLuvColor{h: 10., p: 80., l: 50.}.convert();
/// let b: CIELCHuvColor = HPLuvColor{h: 250., p: 80., l: 50.}.convert();
/// assert!((a.c - b.c).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HPLuvColor {
    /// The hue, in degrees from 0 to 360. The same angle as CIELCHuv's hue.
    pub h: f64,
    /// The percentage of the hue-independent safe chroma at this lightness. 100 is the most chroma
    /// that is displayable at every hue.
    pub p: f64,
    /// The lightness, from 0 to 100. The same as CIELUV's L\*.
    pub l: f64,
}

/// Rescales CIELCHuv chroma into an HPLuv percentage, collapsing near-white and near-black the
/// same way [`lch_to_hsluv`](super::hsluvcolor::lch_to_hsluv) does.
pub fn lch_to_hpluv(lch: CIELCHuvColor) -> HPLuvColor {
    let CIELCHuvColor { l, c, h } = lch;
    if l > L_WHITE {
        return HPLuvColor { h, p: 0.0, l: 100.0 };
    }
    if l < L_BLACK {
        return HPLuvColor { h, p: 0.0, l: 0.0 };
    }
    let max = max_safe_chroma_for_l(l);
    HPLuvColor {
        h,
        p: c / max * 100.0,
        l,
    }
}

/// Rescales an HPLuv percentage back into CIELCHuv chroma.
pub fn hpluv_to_lch(hpluv: HPLuvColor) -> CIELCHuvColor {
    let HPLuvColor { h, p, l } = hpluv;
    if l > L_WHITE {
        return CIELCHuvColor { l: 100.0, c: 0.0, h };
    }
    if l < L_BLACK {
        return CIELCHuvColor { l: 0.0, c: 0.0, h };
    }
    let max = max_safe_chroma_for_l(l);
    CIELCHuvColor {
        l,
        c: max / 100.0 * p,
        h,
    }
}

impl Color for HPLuvColor {
    fn from_rgb(rgb: RGBColor) -> HPLuvColor {
        rgb_to_hpluv(rgb)
    }
    fn to_rgb(&self) -> RGBColor {
        hpluv_to_rgb(*self)
    }
}

impl fmt::Display for HPLuvColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hpluv({}, {}, {})", self.h, self.p, self.l)
    }
}

impl_approx_eq!(HPLuvColor, h, p, l);
