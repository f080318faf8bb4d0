//! Point-in-ring containment testing.
//!
//! Membership is decided by the nonzero winding rule, which is
//! insensitive to vertex order and tolerates the mild self-overlap a
//! buffered outline can produce at sharp bends. Points on the boundary
//! count as inside: every query first checks the distance to each ring
//! edge against [`BOUNDARY_EPSILON_DEGREES`].

use crate::coord::{Coordinate, Vec2};

/// Distance in degrees within which a point is considered on the ring
/// boundary, roughly 0.1 mm on the ground.
pub const BOUNDARY_EPSILON_DEGREES: f64 = 1e-9;

/// Tests whether a point lies inside a polygon ring, boundary included.
///
/// The ring may be explicitly closed (first coordinate repeated at the
/// end) or left open; the edge from the last coordinate back to the
/// first is always considered. Rings with fewer than three coordinates
/// enclose nothing and always return `false`.
///
/// # Example
///
/// ```
/// use perimetrum::{point_in_ring, Coordinate};
///
/// let ring = [
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(2.0, 0.0),
///     Coordinate::new(2.0, 2.0),
///     Coordinate::new(0.0, 2.0),
///     Coordinate::new(0.0, 0.0),
/// ];
///
/// assert!(point_in_ring(&ring, Coordinate::new(1.0, 1.0)));
/// assert!(!point_in_ring(&ring, Coordinate::new(3.0, 1.0)));
/// ```
pub fn point_in_ring(ring: &[Coordinate], point: Coordinate) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let (min, max) = ring_bounds(ring);
    if point.longitude < min.longitude - BOUNDARY_EPSILON_DEGREES
        || point.longitude > max.longitude + BOUNDARY_EPSILON_DEGREES
        || point.latitude < min.latitude - BOUNDARY_EPSILON_DEGREES
        || point.latitude > max.latitude + BOUNDARY_EPSILON_DEGREES
    {
        return false;
    }

    let eps_sq = BOUNDARY_EPSILON_DEGREES * BOUNDARY_EPSILON_DEGREES;
    let n = ring.len();

    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if distance_squared_to_edge(point, a, b) <= eps_sq {
            return true;
        }
    }

    let mut winding = 0i32;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];

        if a.latitude <= point.latitude {
            // Upward crossing counts when the point is left of the edge.
            if b.latitude > point.latitude && edge_cross(a, b, point) > 0.0 {
                winding += 1;
            }
        } else if b.latitude <= point.latitude && edge_cross(a, b, point) < 0.0 {
            // Downward crossing counts when the point is right of the edge.
            winding -= 1;
        }
    }

    winding != 0
}

/// Axis-aligned bounds of a non-empty ring as (min, max) corners.
pub(crate) fn ring_bounds(ring: &[Coordinate]) -> (Coordinate, Coordinate) {
    let mut min = ring[0];
    let mut max = ring[0];

    for c in &ring[1..] {
        if c.longitude < min.longitude {
            min.longitude = c.longitude;
        }
        if c.latitude < min.latitude {
            min.latitude = c.latitude;
        }
        if c.longitude > max.longitude {
            max.longitude = c.longitude;
        }
        if c.latitude > max.latitude {
            max.latitude = c.latitude;
        }
    }

    (min, max)
}

/// Cross product of (b - a) and (p - a); positive when `p` is left of
/// the directed edge a -> b.
#[inline]
fn edge_cross(a: Coordinate, b: Coordinate, p: Coordinate) -> f64 {
    (b - a).cross(p - a)
}

/// Squared distance from a point to the closed segment a -> b.
fn distance_squared_to_edge(point: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
    let ab: Vec2 = b - a;
    let len_sq = ab.magnitude_squared();

    if len_sq < f64::EPSILON {
        // Degenerate edge, measure to the endpoint.
        return point.distance_squared(a);
    }

    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance_squared(a + ab * t)
}
