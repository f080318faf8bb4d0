//! Geofence builders.
//!
//! Each builder validates its input, reduces the shape to a closed ring
//! on the flat-degree plane, and wraps it in a [`Region`]. Distances
//! arrive in meters and are converted with the crate-wide flat-degree
//! constant; see [`crate::coord::METERS_PER_DEGREE`].

use crate::coord::{meters_to_degrees, Coordinate};
use crate::error::GeofenceError;

use super::{buffer, Region};

/// Builds a polygonal geofence from an explicitly closed ring.
///
/// The ring is used exactly as given: no reordering, no winding
/// normalization, and no closing repair. Callers must repeat the first
/// coordinate at the end and keep the ring simple; an unclosed ring is
/// not rejected here, and containment treats the last-to-first edge as
/// present either way.
///
/// Fails with [`GeofenceError::InvalidGeometry`] when fewer than four
/// coordinates are given.
///
/// # Example
///
/// ```
/// use perimetrum::{build_polygon, Coordinate};
///
/// let ring = [
///     Coordinate::new(31.9424, 54.26491),
///     Coordinate::new(31.8204, 54.25787),
///     Coordinate::new(31.8204, 54.52955),
///     Coordinate::new(31.9424, 54.53579),
///     Coordinate::new(31.9424, 54.26491),
/// ];
///
/// let zone = build_polygon(&ring)?;
/// assert!(zone.contains(Coordinate::new(31.88791, 54.39709)));
/// # Ok::<(), perimetrum::GeofenceError>(())
/// ```
pub fn build_polygon(coordinates: &[Coordinate]) -> Result<Region, GeofenceError> {
    if coordinates.len() < 4 {
        return Err(GeofenceError::InvalidGeometry {
            operation: "build_polygon",
            reason: format!(
                "a closed ring needs at least 4 coordinates, got {}",
                coordinates.len()
            ),
        });
    }

    Ok(Region::from_ring(coordinates.to_vec()))
}

/// Builds a circular geofence around a center point.
///
/// The disc is approximated by a regular inscribed 32-gon; near the rim
/// the approximation undershoots the true circle by about half a
/// percent of the radius.
///
/// Fails with [`GeofenceError::InvalidGeometry`] unless `radius_meters`
/// is positive and finite.
pub fn build_circle(center: Coordinate, radius_meters: f64) -> Result<Region, GeofenceError> {
    if !(radius_meters.is_finite() && radius_meters > 0.0) {
        return Err(GeofenceError::InvalidGeometry {
            operation: "build_circle",
            reason: format!("radius must be positive and finite, got {}", radius_meters),
        });
    }

    let radius = meters_to_degrees(radius_meters);
    Ok(Region::from_ring(buffer::circle_ring(center, radius)))
}

/// Builds a corridor geofence around a route polyline.
///
/// The region encloses every point within `half_width_meters` of any
/// route segment, with semicircular caps past both endpoints and
/// rounded outer bends. Repeated consecutive route points are
/// tolerated.
///
/// Fails with [`GeofenceError::InvalidGeometry`] when the route has
/// fewer than two points or the half-width is not positive and finite.
///
/// # Example
///
/// ```
/// use perimetrum::{build_corridor, Coordinate};
///
/// let route = [
///     Coordinate::from_lat_lon(48.8566, 2.3522),
///     Coordinate::from_lat_lon(48.8570, 2.3530),
///     Coordinate::from_lat_lon(48.8575, 2.3540),
/// ];
///
/// let corridor = build_corridor(&route, 50.0)?;
/// assert!(corridor.contains(Coordinate::from_lat_lon(48.8568, 2.3525)));
/// # Ok::<(), perimetrum::GeofenceError>(())
/// ```
pub fn build_corridor(
    line: &[Coordinate],
    half_width_meters: f64,
) -> Result<Region, GeofenceError> {
    if line.len() < 2 {
        return Err(GeofenceError::InvalidGeometry {
            operation: "build_corridor",
            reason: format!("a route needs at least 2 coordinates, got {}", line.len()),
        });
    }

    if !(half_width_meters.is_finite() && half_width_meters > 0.0) {
        return Err(GeofenceError::InvalidGeometry {
            operation: "build_corridor",
            reason: format!(
                "half-width must be positive and finite, got {}",
                half_width_meters
            ),
        });
    }

    let half_width = meters_to_degrees(half_width_meters);
    Ok(Region::from_ring(buffer::corridor_ring(line, half_width)))
}
