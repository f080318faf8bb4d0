//! Geofence construction and point containment on a flat-degree plane.
//!
//! `perimetrum` reduces three kinds of geofence to one canonical form,
//! a closed polygon ring, and answers point-in-region queries against
//! it.
//!
//! # Shapes
//!
//! * **Polygon**: an explicitly closed ring of coordinates, used as
//!   given.
//! * **Circle**: a center and a radius in meters, approximated by an
//!   inscribed 32-gon.
//! * **Corridor**: a route polyline buffered to a half-width in meters,
//!   with rounded caps and bends.
//!
//! Shapes arrive either through the builder functions or as text in the
//! `TYPE=(data)` format understood by [`parse_geofence`].
//!
//! # Coordinates
//!
//! All geometry lives on a flat plane where longitude is the x axis,
//! latitude is the y axis, and one degree on either axis spans
//! [`METERS_PER_DEGREE`] meters. No latitude correction is applied, so
//! east-west distances stretch toward the poles; the approximation
//! suits fences up to a few kilometers at mid latitudes.
//!
//! Textual descriptions write coordinates latitude first. Everything
//! else in the crate is longitude first, and
//! [`Coordinate::from_lat_lon`] is the single place the order is
//! swapped.
//!
//! # Example
//!
//! ```
//! use perimetrum::{parse_geofence, Coordinate};
//!
//! let zone = parse_geofence("CIRCULAR=(54.26491 31.94240 500)")?;
//!
//! assert!(zone.contains(Coordinate::from_lat_lon(54.26491, 31.94240)));
//! assert!(!zone.contains(Coordinate::from_lat_lon(54.30000, 31.94240)));
//! # Ok::<(), perimetrum::GeofenceError>(())
//! ```

pub mod coord;
pub mod error;
pub mod parse;
pub mod region;

pub use coord::{meters_to_degrees, Coordinate, Vec2, METERS_PER_DEGREE};
pub use error::GeofenceError;
pub use parse::{parse_geofence, DEFAULT_ROUTE_HALF_WIDTH_METERS};
pub use region::{
    build_circle, build_corridor, build_polygon, point_in_ring, Region, BOUNDARY_EPSILON_DEGREES,
};
