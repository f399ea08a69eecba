//! This file provides the constants used for matrix multiplication and color space conversion
//! throughout the HSLuv pipeline. They are hardcoded instead of derived at runtime: the published
//! HSLuv reference data was generated from exactly these digits, and recomputing the inverse would
//! drift in the last few places and break parity with it.

/// The sRGB D65 transform from CIE XYZ to linear RGB, one row per output channel (R, G, B). The
/// rows of this matrix also define the gamut boundary lines in [`bound`](crate::bound).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const M: [[f64; 3]; 3] = [
    [ 3.240969941904521, -1.537383177570093, -0.498610760293   ],
    [-0.96924363628087,   1.87596750150772,   0.041555057407175],
    [ 0.055630079696993, -0.20397695888897,   1.056971514242878],
];

/// The inverse of [`M`]: linear RGB to CIE XYZ. Stored independently, not computed from `M`.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const M_INV: [[f64; 3]; 3] = [
    [0.41239079926595,  0.35758433938387, 0.18048078840183 ],
    [0.21263900587151,  0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966 ],
];

/// Luminance of the D65 reference white.
pub(crate) const REF_Y: f64 = 1.0;
/// u' chromaticity of the D65 reference white.
pub(crate) const REF_U: f64 = 0.19783000664283;
/// v' chromaticity of the D65 reference white.
pub(crate) const REF_V: f64 = 0.46831999493879;

/// The CIE kappa constant, (29/3)^3.
pub(crate) const KAPPA: f64 = 903.2962962;
/// The CIE epsilon constant, (6/29)^3.
pub(crate) const EPSILON: f64 = 0.0088564516;

/// Lightness above which an HSLuv or HPLuv color is treated as pure white.
pub(crate) const L_WHITE: f64 = 99.9999999;
/// Lightness below which an HSLuv or HPLuv color is treated as pure black.
pub(crate) const L_BLACK: f64 = 0.00000001;
/// Chroma below which a hue is meaningless and reported as 0.
pub(crate) const CHROMA_EPSILON: f64 = 0.00000001;

/// Multiplies one row of a 3x3 matrix with the vector `(a, b, c)`, in exactly that order.
#[inline]
pub(crate) fn dot(row: &[f64; 3], a: f64, b: f64, c: f64) -> f64 {
    a * row[0] + b * row[1] + c * row[2]
}
