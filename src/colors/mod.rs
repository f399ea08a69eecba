//! This module contains the color spaces built on top of sRGB and CIE XYZ, one per file. Each
//! defines a type implementing [`Color`] along with the plain conversion functions into and out of
//! the space one step closer to sRGB. For convenience, each main type is imported into this
//! module's namespace directly.
//!
//! [`Color`]: crate::color::Color
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod hpluvcolor;
pub mod hsluvcolor;
pub mod hsvcolor;

// for convenience, use this namespace for the color objects
pub use self::cielchuvcolor::CIELCHuvColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::hpluvcolor::HPLuvColor;
pub use self::hsluvcolor::HSLuvColor;
pub use self::hsvcolor::HSVColor;
