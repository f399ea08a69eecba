//! This module brings the most common luvly functionality under a single namespace, to prevent
//! excessive imports. It includes every trait, the base sRGB, linear sRGB and XYZ colors, the CSS
//! parse error, and the long-haul conversion functions. The CIELUV-family and HSV color types live
//! in [`colors`](crate::colors) and are not included.

pub use crate::color::{Color, LinearRGBColor, RGBColor, XYZColor};
pub use crate::convert::{
    hpluv_to_rgb, hsluv_to_rgb, lch_to_rgb, luv_to_rgb, rgb_to_hpluv, rgb_to_hsluv, rgb_to_lch,
};
pub use crate::csscolor::CSSParseError;
pub use crate::mix::Mix;
