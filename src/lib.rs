//! luvly converts colors between sRGB and the perceptual spaces built on CIELUV, above all HSLuv
//! and HPLuv. HSL is the color picker's favorite space, but its lightness is a lie: yellow and blue
//! at the same HSL lightness look nothing alike. HSLuv keeps HSL's friendly shape (a hue angle, a
//! 0-100 saturation that always stays inside the sRGB gamut, and a 0-100 lightness) while taking
//! its lightness from CIELUV, so that lightness is what a person would actually perceive.
//!
//! Every color type implements [`Color`](color::Color), which converts to and from sRGB, and
//! [`Color::convert`](color::Color::convert) goes between any two spaces through it:
//!
//! ```
//! use luvly::prelude::*;
//! use luvly::colors::HSLuvColor;
//!
//! let teal: RGBColor = "#008080".parse().unwrap();
//! let hsluv: HSLuvColor = teal.convert();
//! // darken it without changing its hue or saturation
//! let darker = HSLuvColor { l: hsluv.l - 20., ..hsluv };
//! assert_eq!(darker.to_style(), "rgb(0,75,75)");
//! ```
//!
//! Everything here is a pure function on small `Copy` values: there is no global state and
//! nothing is cached, so any conversion can run on any thread.

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

/// Implements `float_cmp::ApproxEq` for a color struct with three `f64` fields, comparing each
/// field with the same margin.
macro_rules! impl_approx_eq {
    ($t:ty, $a:ident, $b:ident, $c:ident) => {
        impl ::float_cmp::ApproxEq for $t {
            type Margin = ::float_cmp::F64Margin;

            fn approx_eq<T: Into<Self::Margin>>(self, other: Self, margin: T) -> bool {
                let margin = margin.into();
                ::float_cmp::ApproxEq::approx_eq(self.$a, other.$a, margin)
                    && ::float_cmp::ApproxEq::approx_eq(self.$b, other.$b, margin)
                    && ::float_cmp::ApproxEq::approx_eq(self.$c, other.$c, margin)
            }
        }
    };
}

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod convert;
pub mod coord;
mod csscolor;
mod cssnumeric;
pub mod mix;
pub mod prelude;

pub use crate::csscolor::CSSParseError;
