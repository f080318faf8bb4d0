//! Geofence regions and containment.
//!
//! Every supported geofence shape reduces to one canonical form: a
//! closed polygon ring on the flat-degree plane, wrapped in a
//! [`Region`]. Polygons keep their coordinates as given, circles become
//! inscribed 32-gons, and corridors become buffered outlines with
//! rounded caps and bends. Containment is a single ring test shared by
//! all three, so the shapes cannot drift apart in behavior.
//!
//! # Example
//!
//! ```
//! use perimetrum::{build_circle, Coordinate};
//!
//! // 500 m exclusion zone around a monitored site.
//! let zone = build_circle(Coordinate::new(31.9424, 54.26491), 500.0)?;
//!
//! assert!(zone.contains(Coordinate::new(31.9424, 54.26491)));
//! assert!(!zone.contains(Coordinate::new(31.9600, 54.26491)));
//! # Ok::<(), perimetrum::GeofenceError>(())
//! ```

mod buffer;
mod build;
mod contain;
mod core;

pub use build::{build_circle, build_corridor, build_polygon};
pub use contain::{point_in_ring, BOUNDARY_EPSILON_DEGREES};
pub use core::Region;
