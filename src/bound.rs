//! This module finds the edge of the sRGB gamut in the CIELUV chromaticity plane. For a fixed
//! lightness, the six faces of the RGB unit cube (each channel at 0 or at 1) project onto straight
//! lines in the (u, v) plane, and the in-gamut colors are exactly those inside all six. HSLuv and
//! HPLuv use these lines to rescale chroma so that 100% saturation always means "on the edge of
//! the gamut".
//!
//! Lines are kept in slope-intercept form, `v = slope * u + intercept`.

use tracing::trace;

use crate::consts::{EPSILON, KAPPA, M};

/// A line in the (u, v) chromaticity plane, `v = slope * u + intercept`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// The slope of the line.
    pub slope: f64,
    /// The v coordinate where the line crosses the v axis.
    pub intercept: f64,
}

impl Line {
    /// Distance from the origin to the closest point on this line: the foot of the perpendicular
    /// through the origin.
    fn distance_from_origin(&self) -> f64 {
        let x = self.intercept / (-1.0 / self.slope - self.slope);
        let y = self.intercept + x * self.slope;
        (x * x + y * y).sqrt()
    }

    /// Distance from the origin to this line along the ray at angle `theta` (radians). Negative if
    /// the line is only reached by going the other way.
    fn ray_length_until_intersect(&self, theta: f64) -> f64 {
        self.intercept / (theta.sin() - self.slope * theta.cos())
    }
}

/// The line where the RGB channel computed from matrix row `(m1, m2, m3)` equals `t` (0 or 1),
/// at lightness `l`. `sub2` is the luminance term shared by every line at that lightness.
fn bound(m1: f64, m2: f64, m3: f64, l: f64, sub2: f64, t: f64) -> Line {
    let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
    let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2 - 769_860.0 * t * l;
    let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;
    Line {
        slope: top1 / bottom,
        intercept: top2 / bottom,
    }
}

/// Returns the six gamut boundary lines at lightness `l`: for red, green and blue in that order,
/// the line where the channel is 0 followed by the line where it's 1.
/// # Example
/// ```
/// # use luvly::bound::get_bounds;
/// let bounds = get_bounds(50.);
/// assert_eq!(bounds.len(), 6);
/// assert!(bounds.iter().all(|line| line.slope.is_finite() && line.intercept.is_finite()));
/// ```
pub fn get_bounds(l: f64) -> [Line; 6] {
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };
    let [r, g, b] = M;
    [
        bound(r[0], r[1], r[2], l, sub2, 0.0),
        bound(r[0], r[1], r[2], l, sub2, 1.0),
        bound(g[0], g[1], g[2], l, sub2, 0.0),
        bound(g[0], g[1], g[2], l, sub2, 1.0),
        bound(b[0], b[1], b[2], l, sub2, 0.0),
        bound(b[0], b[1], b[2], l, sub2, 1.0),
    ]
}

/// The largest chroma that stays inside the sRGB gamut at lightness `l` for *every* hue. This is
/// the radius HPLuv scales by.
///
/// Only the two red-channel lines are examined. Published HPLuv data is generated this way, and
/// checking all six would change HPLuv's output.
///
/// Returns `f64::MAX` if no boundary is found.
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    let bounds = get_bounds(l);
    let min = bounds[..2]
        .iter()
        .map(Line::distance_from_origin)
        .fold(f64::MAX, |min, length| if length < min { length } else { min });
    if min == f64::MAX {
        trace!(l = l, "no safe chroma boundary found");
    }
    min
}

/// The largest chroma that stays inside the sRGB gamut at lightness `l` and hue `h` (degrees):
/// the distance from the gray axis to the nearest boundary line along that hue. This is the radius
/// HSLuv scales by.
///
/// Returns `f64::MAX` if no line is hit in the direction of `h`.
/// # Example
/// ```
/// # use luvly::bound::{max_chroma_for_lh, max_safe_chroma_for_l};
/// // the hue-independent bound is never larger than the bound for a specific hue
/// for h in [0., 90., 180., 270.].iter() {
///     assert!(max_safe_chroma_for_l(60.) <= max_chroma_for_lh(60., *h) + 1e-9);
/// }
/// ```
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let hrad = h / 360.0 * std::f64::consts::PI * 2.0;
    let min = get_bounds(l)
        .iter()
        .map(|line| line.ray_length_until_intersect(hrad))
        .fold(f64::MAX, |min, length| {
            if length >= 0.0 && length < min {
                length
            } else {
                min
            }
        });
    if min == f64::MAX {
        trace!(l = l, h = h, "no chroma boundary found");
    }
    min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_chroma_positive_and_finite() {
        for l in 1..100 {
            for h in (0..360).step_by(5) {
                let c = max_chroma_for_lh(l as f64, h as f64);
                assert!(c > 0.0, "l = {}, h = {}", l, h);
                assert!(c.is_finite() && c < f64::MAX, "l = {}, h = {}", l, h);
            }
        }
        // the linear segment of the lightness curve
        assert!(max_chroma_for_lh(0.5, 200.) > 0.0);
    }

    #[test]
    fn test_safe_chroma_is_a_lower_bound() {
        for l in 1..100 {
            let safe = max_safe_chroma_for_l(l as f64);
            assert!(safe > 0.0);
            for h in 0..360 {
                assert!(safe <= max_chroma_for_lh(l as f64, h as f64) + 1e-9);
            }
        }
    }

    #[test]
    fn test_red_lies_on_the_boundary() {
        // pure sRGB red sits on the gamut boundary at its own lightness and hue
        let l = 53.23711559542933;
        let h = 12.177050630061776;
        let c = max_chroma_for_lh(l, h);
        assert!((c - 179.0380969236203).abs() < 1e-6, "c = {}", c);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_no_boundary_returns_sentinel() {
        // NaN lightness poisons every line, so no candidate survives
        assert_eq!(max_safe_chroma_for_l(f64::NAN), f64::MAX);
        assert_eq!(max_chroma_for_lh(f64::NAN, 10.), f64::MAX);
    }

    #[test]
    fn test_bounds_at_zero_lightness() {
        // the t = 0 lines collapse to 0 / 0 and must not panic
        let bounds = get_bounds(0.0);
        assert!(bounds[0].slope.is_nan());
        assert!(bounds[1].slope.is_finite());
    }
}
