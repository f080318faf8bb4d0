//! The canonical region type.

use crate::coord::Coordinate;

use super::contain;

/// A geofence reduced to its canonical form: a polygon ring on the
/// flat-degree plane.
///
/// Every builder produces a `Region`, so circles and corridors answer
/// containment queries through the same ring test as hand-written
/// polygons. A region is an immutable value; it can be cloned freely
/// and queried from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    ring: Vec<Coordinate>,
}

impl Region {
    /// Wraps a ring produced by one of the builders.
    pub(crate) fn from_ring(ring: Vec<Coordinate>) -> Self {
        Self { ring }
    }

    /// The boundary ring. Builder-produced rings repeat their first
    /// coordinate at the end.
    #[inline]
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    /// Tests whether a point lies inside the region.
    ///
    /// Points on the boundary count as inside. See
    /// [`point_in_ring`](super::point_in_ring) for the underlying test.
    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        contain::point_in_ring(&self.ring, point)
    }

    /// The axis-aligned bounding box of the ring as `(min, max)`
    /// corners.
    pub fn bounding_box(&self) -> (Coordinate, Coordinate) {
        contain::ring_bounds(&self.ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Region {
        Region::from_ring(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 0.0),
        ])
    }

    #[test]
    fn test_ring_accessor_round_trips() {
        let region = unit_square();
        assert_eq!(region.ring().len(), 5);
        assert_eq!(region.ring().first(), region.ring().last());
    }

    #[test]
    fn test_contains_delegates_to_ring_test() {
        let region = unit_square();
        assert!(region.contains(Coordinate::new(0.5, 0.5)));
        assert!(region.contains(Coordinate::new(0.0, 0.5)));
        assert!(!region.contains(Coordinate::new(1.5, 0.5)));
    }

    #[test]
    fn test_bounding_box_corners() {
        let (min, max) = unit_square().bounding_box();
        assert_eq!(min, Coordinate::new(0.0, 0.0));
        assert_eq!(max, Coordinate::new(1.0, 1.0));
    }

    #[test]
    fn test_regions_compare_by_ring() {
        let a = unit_square();
        let b = a.clone();
        assert_eq!(a, b);
    }
}
