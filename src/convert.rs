//! The long-haul conversions between sRGB and the CIELUV family. Each one is a straight
//! composition of the single-step conversions in [`color`](crate::color) and
//! [`colors`](crate::colors): nothing is precomputed or shared between calls.
//!
//! ```text
//! RGB <-> linear RGB <-> XYZ <-> LUV <-> LCh <-> HSLuv
//!                                            \-> HPLuv
//! ```

use crate::color::{rgb_to_xyz, xyz_to_rgb, RGBColor};
use crate::colors::cielchuvcolor::{lch_to_luv, luv_to_lch, CIELCHuvColor};
use crate::colors::cieluvcolor::{luv_to_xyz, xyz_to_luv, CIELUVColor};
use crate::colors::hpluvcolor::{hpluv_to_lch, lch_to_hpluv, HPLuvColor};
use crate::colors::hsluvcolor::{hsluv_to_lch, lch_to_hsluv, HSLuvColor};

/// CIELUV to sRGB, through XYZ.
pub fn luv_to_rgb(luv: CIELUVColor) -> RGBColor {
    xyz_to_rgb(luv_to_xyz(luv))
}

/// sRGB to CIELCHuv, through XYZ and CIELUV.
pub fn rgb_to_lch(rgb: RGBColor) -> CIELCHuvColor {
    luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb)))
}

/// CIELCHuv to sRGB, through CIELUV and XYZ.
pub fn lch_to_rgb(lch: CIELCHuvColor) -> RGBColor {
    xyz_to_rgb(luv_to_xyz(lch_to_luv(lch)))
}

/// sRGB to HSLuv.
/// # Example
/// ```
/// # use luvly::prelude::*;
/// let white = rgb_to_hsluv(RGBColor{r: 1., g: 1., b: 1.});
/// assert_eq!(white.s, 0.);
/// assert_eq!(white.l, 100.);
/// ```
pub fn rgb_to_hsluv(rgb: RGBColor) -> HSLuvColor {
    lch_to_hsluv(rgb_to_lch(rgb))
}

/// HSLuv to sRGB.
pub fn hsluv_to_rgb(hsluv: HSLuvColor) -> RGBColor {
    lch_to_rgb(hsluv_to_lch(hsluv))
}

/// sRGB to HPLuv.
pub fn rgb_to_hpluv(rgb: RGBColor) -> HPLuvColor {
    lch_to_hpluv(rgb_to_lch(rgb))
}

/// HPLuv to sRGB.
pub fn hpluv_to_rgb(hpluv: HPLuvColor) -> RGBColor {
    lch_to_rgb(hpluv_to_lch(hpluv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RGB_MARGIN;
    use float_cmp::ApproxEq;
    use proptest::prelude::*;

    #[test]
    fn test_black() {
        let black = RGBColor {
            r: 0.,
            g: 0.,
            b: 0.,
        };
        let hsluv = rgb_to_hsluv(black);
        assert_eq!(hsluv.s, 0.);
        assert_eq!(hsluv.l, 0.);
        let hpluv = rgb_to_hpluv(black);
        assert_eq!(hpluv.p, 0.);
        assert_eq!(hpluv.l, 0.);
        // any hue is black at zero lightness
        for h in (0..360).step_by(30) {
            let rgb = hsluv_to_rgb(HSLuvColor {
                h: h as f64,
                s: 100.,
                l: 0.,
            });
            assert_eq!(rgb, black);
        }
    }

    #[test]
    fn test_white() {
        let white = RGBColor {
            r: 1.,
            g: 1.,
            b: 1.,
        };
        let hsluv = rgb_to_hsluv(white);
        assert_eq!(hsluv.s, 0.);
        assert_eq!(hsluv.l, 100.);
        let back = hsluv_to_rgb(hsluv);
        assert!(back.approx_eq(white, RGB_MARGIN), "{}", back);
    }

    #[test]
    fn test_luv_to_rgb_of_origin() {
        assert_eq!(
            luv_to_rgb(CIELUVColor {
                l: 0.,
                u: 0.,
                v: 0.
            }),
            RGBColor {
                r: 0.,
                g: 0.,
                b: 0.
            }
        );
    }

    fn unit() -> impl Strategy<Value = f64> {
        0.0f64..=1.0
    }

    proptest! {
        #[test]
        fn rgb_hsluv_round_trip(r in unit(), g in unit(), b in unit()) {
            let rgb = RGBColor { r, g, b };
            let back = hsluv_to_rgb(rgb_to_hsluv(rgb));
            prop_assert!(back.approx_eq(rgb, RGB_MARGIN), "{} vs {}", back, rgb);
        }

        #[test]
        fn rgb_hpluv_round_trip(r in unit(), g in unit(), b in unit()) {
            let rgb = RGBColor { r, g, b };
            let back = hpluv_to_rgb(rgb_to_hpluv(rgb));
            prop_assert!(back.approx_eq(rgb, RGB_MARGIN), "{} vs {}", back, rgb);
        }

        #[test]
        fn rgb_lch_round_trip(r in unit(), g in unit(), b in unit()) {
            let rgb = RGBColor { r, g, b };
            let back = lch_to_rgb(rgb_to_lch(rgb));
            prop_assert!(back.approx_eq(rgb, RGB_MARGIN), "{} vs {}", back, rgb);
            let back = luv_to_rgb(lch_to_luv(rgb_to_lch(rgb)));
            prop_assert!(back.approx_eq(rgb, RGB_MARGIN), "{} vs {}", back, rgb);
        }

        #[test]
        fn rgb_xyz_round_trip(r in unit(), g in unit(), b in unit()) {
            let rgb = RGBColor { r, g, b };
            let back = xyz_to_rgb(rgb_to_xyz(rgb));
            prop_assert!(back.approx_eq(rgb, RGB_MARGIN), "{} vs {}", back, rgb);
        }
    }
}
