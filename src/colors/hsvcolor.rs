//! This module implements the HSV color space, the hexagonal hue/saturation/value model of sRGB.
//! Value is the largest RGB channel, so it runs from black to the fully saturated color rather
//! than to white, and it is a poor analog of perceived lightness: a saturated blue and white share
//! the same value. HSV is independent of the CIELUV pipeline and is kept here because it's the
//! usual currency of color pickers.
//!
//! All three components, hue included, range from 0 to 1. Hue is a fraction of a full turn around
//! the hexagon, not degrees.

use std::fmt;

use crate::color::{Color, RGBColor};

/// An HSV color, with every component in 0-1.
/// # Example
///
/// ```
/// # use luvly::prelude::*;
/// # use luvly::colors::HSVColor;
/// let red = HSVColor{h: 0., s: 1., v: 1.};
/// assert_eq!(red.to_rgb(), RGBColor{r: 1., g: 0., b: 0.});
/// let teal = HSVColor{h: 0.5, s: 1., v: 0.5};
/// assert_eq!(teal.to_style(), "rgb(0,127,127)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, as a fraction of a turn: 0 is red, 1/3 green, 2/3 blue. Cyclic, so 1 is red again.
    pub h: f64,
    /// The saturation: 0 is gray, 1 has at least one channel at zero.
    pub s: f64,
    /// The value, the largest RGB channel.
    pub v: f64,
}

// unlike f64::max, any NaN channel makes the result NaN
fn max3(a: f64, b: f64, c: f64) -> f64 {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        f64::NAN
    } else {
        a.max(b).max(c)
    }
}

fn min3(a: f64, b: f64, c: f64) -> f64 {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        f64::NAN
    } else {
        a.min(b).min(c)
    }
}

/// Converts sRGB to HSV. Grays get a hue of 0. When several channels tie for the maximum, red
/// wins over green, and green over blue.
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsv(rgb: RGBColor) -> HSVColor {
    let RGBColor { r, g, b } = rgb;
    let max = max3(r, g, b);
    let min = min3(r, g, b);
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };

    // hue is a position on the hexagon: which channel is largest picks the sector
    let h = if max == min {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    HSVColor {
        h: h / 6.0,
        s,
        v: max,
    }
}

/// Converts HSV to sRGB. The hue picks one of six sectors of the hexagon; hues outside 0-1 wrap
/// forward, while negative hues fall into the last sector.
pub fn hsv_to_rgb(hsv: HSVColor) -> RGBColor {
    let HSVColor { h, s, v } = hsv;
    // truncates toward zero like an integer cast; NaN lands in sector 0
    let i = (h * 6.0) as i32;
    let f = h * 6.0 - f64::from(i);
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    RGBColor { r, g, b }
}

impl Color for HSVColor {
    fn from_rgb(rgb: RGBColor) -> HSVColor {
        rgb_to_hsv(rgb)
    }
    fn to_rgb(&self) -> RGBColor {
        hsv_to_rgb(*self)
    }
}

impl fmt::Display for HSVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hsv({}, {}, {})", self.h, self.s, self.v)
    }
}

impl_approx_eq!(HSVColor, h, s, v);

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn test_pure_red_is_exact() {
        let red = hsv_to_rgb(HSVColor {
            h: 0.,
            s: 1.,
            v: 1.,
        });
        assert_eq!(
            red,
            RGBColor {
                r: 1.,
                g: 0.,
                b: 0.
            }
        );
        assert_eq!(
            rgb_to_hsv(red),
            HSVColor {
                h: 0.,
                s: 1.,
                v: 1.
            }
        );
    }

    #[test]
    fn test_sectors() {
        let rgb = |h: f64| hsv_to_rgb(HSVColor { h, s: 1., v: 1. });
        assert_eq!(
            rgb(1. / 6.),
            RGBColor {
                r: 1.,
                g: 1.,
                b: 0.
            }
        );
        assert_eq!(
            rgb(0.5),
            RGBColor {
                r: 0.,
                g: 1.,
                b: 1.
            }
        );
        assert_eq!(
            rgb(4. / 6.),
            RGBColor {
                r: 0.,
                g: 0.,
                b: 1.
            }
        );
        // a full turn wraps back around to red
        assert_eq!(
            rgb(1.),
            RGBColor {
                r: 1.,
                g: 0.,
                b: 0.
            }
        );
    }

    #[test]
    fn test_gray_and_black() {
        let gray = rgb_to_hsv(RGBColor {
            r: 0.4,
            g: 0.4,
            b: 0.4,
        });
        assert_eq!(
            gray,
            HSVColor {
                h: 0.,
                s: 0.,
                v: 0.4
            }
        );
        let black = rgb_to_hsv(RGBColor {
            r: 0.,
            g: 0.,
            b: 0.,
        });
        assert_eq!(
            black,
            HSVColor {
                h: 0.,
                s: 0.,
                v: 0.
            }
        );
    }

    #[test]
    fn test_ties_prefer_red_then_green() {
        // yellow: red and green tie for the maximum
        let yellow = rgb_to_hsv(RGBColor {
            r: 1.,
            g: 1.,
            b: 0.,
        });
        assert!(approx_eq!(f64, yellow.h, 1. / 6., epsilon = 1e-15));
        // magenta: red and blue tie, red's branch wraps the hue
        let magenta = rgb_to_hsv(RGBColor {
            r: 1.,
            g: 0.,
            b: 1.,
        });
        assert!(approx_eq!(f64, magenta.h, 5. / 6., epsilon = 1e-15));
    }

    #[test]
    fn test_nan_propagates() {
        let hsv = rgb_to_hsv(RGBColor {
            r: f64::NAN,
            g: 0.5,
            b: 0.2,
        });
        assert!(hsv.v.is_nan());
        assert!(hsv.s.is_nan());
    }

    #[test]
    fn test_near_black_and_near_gray_round_trip() {
        for &(h, s, v) in [(0.3, 0.5, 1e-12), (0.7, 1e-8, 1.), (0.05, 1e-4, 0.5)].iter() {
            let hsv = rgb_to_hsv(hsv_to_rgb(HSVColor { h, s, v }));
            assert!(approx_eq!(f64, hsv.v, v, epsilon = 1e-15), "{}", hsv);
            assert!(approx_eq!(f64, hsv.s, s, epsilon = 1e-12), "{}", hsv);
            assert!(approx_eq!(f64, hsv.h, h, epsilon = 1e-6), "{}", hsv);
        }
    }

    proptest! {
        #[test]
        fn hsv_rgb_round_trip(h in 0.0f64..1.0, s in 0.0f64..=1.0, v in 0.0f64..=1.0) {
            let hsv = rgb_to_hsv(hsv_to_rgb(HSVColor { h, s, v }));
            prop_assert!((hsv.v - v).abs() < 1e-6, "v: {} vs {}", hsv.v, v);
            // saturation is meaningless for black, hue for grays; hue is only as precise as the
            // channel spread v * s, and s below about 1e-16 vanishes from 1 - s entirely
            if v >= f64::MIN_POSITIVE {
                prop_assert!((hsv.s - s).abs() < 1e-6, "s: {} vs {}", hsv.s, s);
            }
            if v * s > 1e-9 {
                // hue is cyclic: 0.9999999 and 0 are neighbors
                let diff = (hsv.h - h).abs();
                prop_assert!(diff.min(1. - diff) < 1e-6, "h: {} vs {}", hsv.h, h);
            }
        }
    }
}
