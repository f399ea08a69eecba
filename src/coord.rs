//! This module contains a struct, [`Coord`], that models a point in 3D space and supports the
//! limited arithmetic needed to mix colors whose channels combine linearly: linear RGB, XYZ and
//! CIELUV. Gamma-encoded or cylindrical spaces like HSLuv don't convert to `Coord`, because
//! averaging their channels doesn't mean anything.

use std::ops::{Add, Mul, Sub};

use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can scale a [`Coord`].
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

// A scalar that can't be represented as an f64 poisons the result instead of panicking.
fn to_f64<U: Scalar>(s: U) -> f64 {
    num::cast(s).unwrap_or(f64::NAN)
}

/// A point in 3D space. The axes are named `x`, `y`, and `z`, and any color that converts to a
/// `Coord` maps its channels onto them in the order of its name: `LinearRGBColor` puts `r` on `x`,
/// `g` on `y` and `b` on `z`.
///
/// # Example
/// ```
/// # use luvly::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // (8, 10, 10)
/// let diff = point_1 - point_2;  // (-6, 6, 4)
/// let prod = point_1 * 2u8; // (2, 16, 14)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(prod.y, 16.);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r = to_f64(rhs);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// Linear interpolation: `pct` of the way from `self` to `other`, computed per axis as
    /// `from + pct * (to - from)`. A `pct` outside 0-1 extrapolates.
    /// # Example
    /// ```
    /// # use luvly::coord::Coord;
    /// let from = Coord{x: 0.2, y: 0., z: 1.};
    /// let to = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = from.lerp(&to, 0.25);
    /// assert!((mid.x - 0.4).abs() <= 1e-10);
    /// assert!((mid.y - 0.2).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn lerp(&self, other: &Coord, pct: f64) -> Coord {
        *self + (*other - *self) * pct
    }
}
