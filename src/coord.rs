//! Geographic coordinates and planar vectors.
//!
//! All geometry in this crate lives on a local flat plane measured in
//! decimal degrees: longitude is the x axis, latitude is the y axis.
//! Distances given in meters are converted with a single constant and no
//! latitude correction, so results degrade away from the mid-latitudes
//! the approximation is tuned for.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Meters per degree on the flat-degree plane.
///
/// One constant for both axes. The true figure varies between roughly
/// 111 320 m per degree of latitude and much less per degree of longitude
/// at high latitudes; this approximation keeps the plane isotropic and is
/// adequate for fence-scale distances (tens of meters to a few
/// kilometers).
pub const METERS_PER_DEGREE: f64 = 111000.0;

/// Converts a distance in meters to degrees on the flat-degree plane.
#[inline]
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

/// A geographic position in decimal degrees.
///
/// `longitude` is the planar x coordinate and `latitude` is y. Note that
/// the serialized text format writes pairs latitude first; use
/// [`Coordinate::from_lat_lon`] when consuming that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Longitude in decimal degrees (planar x).
    pub longitude: f64,
    /// Latitude in decimal degrees (planar y).
    pub latitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude and latitude, in that order.
    #[inline]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Creates a coordinate from latitude and longitude, in that order.
    ///
    /// This is the single place the latitude-first field order of the
    /// text format is swapped into the internal longitude-first
    /// convention.
    #[inline]
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Returns the squared distance to another coordinate, in degrees
    /// squared.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        (other - self).magnitude_squared()
    }
}

/// A displacement on the flat-degree plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized (unit length) vector.
    ///
    /// Returns `None` if the vector is zero or too small to normalize
    /// reliably.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > f64::EPSILON {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Returns a vector perpendicular to this one (rotated 90 degrees
    /// counter-clockwise).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Sub for Coordinate {
    type Output = Vec2;

    /// The displacement from `other` to `self`.
    #[inline]
    fn sub(self, other: Self) -> Vec2 {
        Vec2 {
            x: self.longitude - other.longitude,
            y: self.latitude - other.latitude,
        }
    }
}

impl Add<Vec2> for Coordinate {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2) -> Self {
        Self {
            longitude: self.longitude + offset.x,
            latitude: self.latitude + offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_order() {
        let c = Coordinate::new(31.9424, 54.26491);
        assert_eq!(c.longitude, 31.9424);
        assert_eq!(c.latitude, 54.26491);
    }

    #[test]
    fn test_from_lat_lon_swaps() {
        let c = Coordinate::from_lat_lon(54.26491, 31.9424);
        assert_eq!(c, Coordinate::new(31.9424, 54.26491));
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::new(2.3522, 48.8566).is_finite());
        assert!(!Coordinate::new(f64::NAN, 48.8566).is_finite());
        assert!(!Coordinate::new(2.3522, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_distance_squared() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
    }

    #[test]
    fn test_meters_to_degrees() {
        assert_relative_eq!(meters_to_degrees(111000.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(meters_to_degrees(100.0), 100.0 / 111000.0, epsilon = 1e-15);
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(Vec2::new(1.0, 0.0).cross(Vec2::new(0.0, 1.0)), 1.0);
        assert_eq!(Vec2::new(0.0, 1.0).cross(Vec2::new(1.0, 0.0)), -1.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vec2::new(3.0, 4.0).normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-10);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-10);
    }

    #[test]
    fn test_normalize_zero() {
        assert!(Vec2::zero().normalize().is_none());
    }

    #[test]
    fn test_perpendicular_is_ccw() {
        let east = Vec2::new(1.0, 0.0);
        let north = east.perpendicular();
        assert_eq!(north.x, 0.0);
        assert_eq!(north.y, 1.0);
        assert_eq!(east.dot(north), 0.0);
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        let diff = b - a;
        assert_eq!(diff.x, 2.0);
        assert_eq!(diff.y, 2.0);

        let halved = b / 2.0;
        assert_eq!(halved.x, 1.5);
        assert_eq!(halved.y, 2.0);
    }

    #[test]
    fn test_coordinate_vector_arithmetic() {
        let a = Coordinate::new(1.0, 2.0);
        let b = Coordinate::new(4.0, 6.0);

        let d = b - a;
        assert_eq!(d.x, 3.0);
        assert_eq!(d.y, 4.0);

        let back = a + d;
        assert_eq!(back, b);

        let scaled = d * 0.5;
        assert_eq!(scaled.x, 1.5);
        assert_eq!(scaled.y, 2.0);

        let neg = -d;
        assert_eq!(neg.x, -3.0);
        assert_eq!(neg.y, -4.0);
    }
}
