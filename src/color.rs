//! This file defines the [`Color`] trait, the gamma-encoded and linear sRGB color types, and CIE
//! XYZ. Every other color space in this crate lives in [`colors`](crate::colors) and reaches these
//! through the conversion functions defined here.
//!
//! sRGB is the hub: anything that implements `Color` knows how to get to and from an
//! [`RGBColor`], and [`Color::convert`] goes through it. The conversions themselves are all plain
//! functions on `Copy` values with no caching and no shared state, so they can be called from any
//! number of threads.

use std::fmt;
use std::str::FromStr;

use float_cmp::{ApproxEq, F64Margin};

use crate::consts::{dot, M, M_INV};
use crate::coord::Coord;
use crate::csscolor::{parse_css_rgb, CSSParseError};
use crate::mix::Mix;

/// The margin used by [`Color::approx_equal`]: two colors are equal if their sRGB channels differ
/// by less than this.
pub const RGB_MARGIN: F64Margin = F64Margin {
    epsilon: 0.00001,
    ulps: 0,
};

/// A trait that includes any color representation that can be converted to and from sRGB. This is
/// the glue that lets any two color spaces talk to each other.
pub trait Color: Sized {
    /// Converts from an sRGB color to this color space.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Converts this color to sRGB. Nothing is cached: every call redoes the conversion.
    fn to_rgb(&self) -> RGBColor;

    /// Converts this color into any other color space by way of sRGB.
    /// # Example
    /// ```
    /// # use luvly::prelude::*;
    /// # use luvly::colors::HSLuvColor;
    /// let red = RGBColor{r: 1., g: 0., b: 0.};
    /// let hsluv: HSLuvColor = red.convert();
    /// assert!((hsluv.s - 100.).abs() < 1e-6);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }

    /// Formats this color as a CSS `rgb()` string. See [`RGBColor::to_style`].
    fn to_style(&self) -> String {
        self.to_rgb().to_style()
    }

    /// Returns `true` if the two colors are the same in sRGB, up to [`RGB_MARGIN`]. Colors that
    /// differ only in a meaningless channel, such as the hue of black, compare equal.
    fn approx_equal(&self, other: &Self) -> bool {
        self.to_rgb().approx_eq(other.to_rgb(), RGB_MARGIN)
    }
}

/// Decodes one sRGB channel into linear light.
#[inline]
pub fn to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Encodes one linear-light channel with the sRGB transfer function.
#[inline]
pub fn from_linear(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// A gamma-encoded sRGB color. Channels nominally range from 0 to 1, but nothing clamps them: a
/// conversion that lands outside the gamut simply produces channels outside that range.
///
/// # Example
/// ```
/// # use luvly::prelude::*;
/// let teal: RGBColor = "#008080".parse().unwrap();
/// assert_eq!(teal.to_style(), "rgb(0,128,128)");
/// let lighter = RGBColor { g: 1., ..teal };
/// assert_eq!(lighter.to_string(), "Rgb(0, 1, 0.5019607843137255)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl RGBColor {
    /// Parses a CSS color: `rgb(r, g, b)`, `#rgb`, `#rrggbb`, or either hex form without the `#`.
    /// Spaces and tabs are ignored.
    /// # Errors
    /// Returns a [`CSSParseError`] if the string doesn't match any of those forms or a component
    /// isn't a finite number.
    pub fn from_css(css: &str) -> Result<RGBColor, CSSParseError> {
        let (r, g, b) = parse_css_rgb(css)?;
        Ok(RGBColor { r, g, b })
    }

    /// Formats the color as a CSS `rgb(R,G,B)` string with integer components. Each channel is
    /// scaled by just under 256 and truncated, so 1.0 maps to 255 and nothing is rounded up.
    pub fn to_style(&self) -> String {
        format!(
            "rgb({},{},{})",
            float_to_byte(self.r),
            float_to_byte(self.g),
            float_to_byte(self.b)
        )
    }

    /// Decodes every channel into linear light.
    pub fn to_linear(&self) -> LinearRGBColor {
        LinearRGBColor {
            r: to_linear(self.r),
            g: to_linear(self.g),
            b: to_linear(self.b),
        }
    }
}

// truncates toward zero, NaN becomes 0
fn float_to_byte(x: f64) -> i32 {
    (x * 255.9999999) as i32
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

impl FromStr for RGBColor {
    type Err = CSSParseError;

    fn from_str(s: &str) -> Result<RGBColor, CSSParseError> {
        RGBColor::from_css(s)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl_approx_eq!(RGBColor, r, g, b);

/// An sRGB color with the transfer function removed, so that channels are proportional to light
/// intensity. This is the space to mix colors in.
///
/// # Example
/// ```
/// # use luvly::prelude::*;
/// let gray = RGBColor{r: 0.5, g: 0.5, b: 0.5}.to_linear();
/// let lighter = gray.lighten(0.5);
/// assert!((lighter.r - (gray.r + 1.) / 2.).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRGBColor {
    /// The red channel, in linear light.
    pub r: f64,
    /// The green channel, in linear light.
    pub g: f64,
    /// The blue channel, in linear light.
    pub b: f64,
}

impl LinearRGBColor {
    /// Full-intensity white.
    pub const WHITE: LinearRGBColor = LinearRGBColor {
        r: 1.,
        g: 1.,
        b: 1.,
    };
    /// Black.
    pub const BLACK: LinearRGBColor = LinearRGBColor {
        r: 0.,
        g: 0.,
        b: 0.,
    };

    /// Re-applies the sRGB transfer function to every channel.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_linear(&self) -> RGBColor {
        RGBColor {
            r: from_linear(self.r),
            g: from_linear(self.g),
            b: from_linear(self.b),
        }
    }

    /// Moves `pct` of the way toward white.
    pub fn lighten(self, pct: f64) -> LinearRGBColor {
        Mix::mix(self, pct, LinearRGBColor::WHITE)
    }

    /// Moves `pct` of the way toward black.
    pub fn darken(self, pct: f64) -> LinearRGBColor {
        Mix::mix(self, pct, LinearRGBColor::BLACK)
    }
}

impl Color for LinearRGBColor {
    fn from_rgb(rgb: RGBColor) -> LinearRGBColor {
        rgb.to_linear()
    }
    fn to_rgb(&self) -> RGBColor {
        self.from_linear()
    }
}

impl From<Coord> for LinearRGBColor {
    fn from(c: Coord) -> LinearRGBColor {
        LinearRGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<LinearRGBColor> for Coord {
    fn from(c: LinearRGBColor) -> Coord {
        Coord {
            x: c.r,
            y: c.g,
            z: c.b,
        }
    }
}

impl fmt::Display for LinearRGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LinearRgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl_approx_eq!(LinearRGBColor, r, g, b);

/// A point in the CIE 1931 XYZ color space, relative to the D65 white point with the white's
/// luminance normalized to 1. `y` is the luminance channel.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 XYZ space, roughly representing the long-wavelength receptors in
    /// the human eye.
    pub x: f64,
    /// The Y axis, the luminance of the color.
    pub y: f64,
    /// The Z axis, roughly representing the short-wavelength receptors in the human eye.
    pub z: f64,
}

impl Color for XYZColor {
    fn from_rgb(rgb: RGBColor) -> XYZColor {
        rgb_to_xyz(rgb)
    }
    fn to_rgb(&self) -> RGBColor {
        xyz_to_rgb(*self)
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(c: XYZColor) -> Coord {
        Coord {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl fmt::Display for XYZColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Xyz({}, {}, {})", self.x, self.y, self.z)
    }
}

impl_approx_eq!(XYZColor, x, y, z);

/// Converts gamma-encoded sRGB to CIE XYZ: linearize, then multiply by the inverse sRGB matrix.
pub fn rgb_to_xyz(rgb: RGBColor) -> XYZColor {
    let lin = rgb.to_linear();
    XYZColor {
        x: dot(&M_INV[0], lin.r, lin.g, lin.b),
        y: dot(&M_INV[1], lin.r, lin.g, lin.b),
        z: dot(&M_INV[2], lin.r, lin.g, lin.b),
    }
}

/// Converts CIE XYZ to gamma-encoded sRGB. Colors outside the sRGB gamut come back with channels
/// outside 0-1.
pub fn xyz_to_rgb(xyz: XYZColor) -> RGBColor {
    RGBColor {
        r: from_linear(dot(&M[0], xyz.x, xyz.y, xyz.z)),
        g: from_linear(dot(&M[1], xyz.x, xyz.y, xyz.z)),
        b: from_linear(dot(&M[2], xyz.x, xyz.y, xyz.z)),
    }
}

/// Returns the gray with the same weighted RMS intensity as the given color, using the Rec. 601
/// luma weights on the gamma-encoded channels.
pub fn to_gray(rgb: RGBColor) -> RGBColor {
    let gray = (0.299 * rgb.r * rgb.r + 0.587 * rgb.g * rgb.g + 0.114 * rgb.b * rgb.b).sqrt();
    RGBColor {
        r: gray,
        g: gray,
        b: gray,
    }
}
