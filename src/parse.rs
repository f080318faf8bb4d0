//! Parsing of textual geofence descriptions.
//!
//! A description has the form `TYPE=(data)`. The tag before the `=` is
//! case-insensitive, the parentheses around the data are optional, and
//! coordinates are written latitude first. That is the reverse of the
//! longitude-first order used everywhere else in the crate; the swap
//! happens in [`Coordinate::from_lat_lon`] and nowhere else.

use crate::coord::Coordinate;
use crate::error::GeofenceError;
use crate::region::{build_circle, build_corridor, build_polygon, Region};

/// Half-width in meters applied to `ROUTE` descriptions.
pub const DEFAULT_ROUTE_HALF_WIDTH_METERS: f64 = 100.0;

/// Parses a textual geofence description into a [`Region`].
///
/// Three shapes are understood:
///
/// * `POLYGON=(55.75 37.61, 55.74 37.62, 55.73 37.60)` builds a
///   polygon, closing the ring automatically when the description
///   leaves it open.
/// * `ROUTE=(55.75 37.61, 55.76 37.63)` buffers the polyline into a
///   corridor [`DEFAULT_ROUTE_HALF_WIDTH_METERS`] meters to each side.
/// * `CIRCULAR=(55.75 37.61 200)` builds a disc with the radius given
///   in meters.
///
/// # Example
///
/// ```
/// use perimetrum::{parse_geofence, Coordinate};
///
/// let corridor = parse_geofence("ROUTE=(31.87 54.35, 31.87 54.34)")?;
///
/// // Halfway along the route, on the centerline.
/// assert!(corridor.contains(Coordinate::from_lat_lon(31.87, 54.345)));
/// # Ok::<(), perimetrum::GeofenceError>(())
/// ```
pub fn parse_geofence(description: &str) -> Result<Region, GeofenceError> {
    let (tag, data) = description.split_once('=').ok_or_else(|| {
        GeofenceError::MalformedDescription {
            reason: "missing '=' separator",
            offending: description.trim().to_string(),
        }
    })?;

    let tag = tag.trim().to_ascii_uppercase();
    let body = data.trim().trim_matches(|c| c == '(' || c == ')');

    match tag.as_str() {
        "POLYGON" => {
            let mut ring = parse_coordinate_list(body)?;
            if ring.len() < 3 || ring.first() != ring.last() {
                if let Some(first) = ring.first().copied() {
                    ring.push(first);
                }
            }
            build_polygon(&ring)
        }
        "ROUTE" => {
            let line = parse_coordinate_list(body)?;
            build_corridor(&line, DEFAULT_ROUTE_HALF_WIDTH_METERS)
        }
        "CIRCULAR" => {
            let fields: Vec<&str> = body.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(GeofenceError::MalformedDescription {
                    reason: "circular geofence needs latitude, longitude and radius",
                    offending: body.to_string(),
                });
            }

            let center =
                Coordinate::from_lat_lon(parse_number(fields[0])?, parse_number(fields[1])?);
            if !center.is_finite() {
                return Err(GeofenceError::MalformedDescription {
                    reason: "coordinate is not finite",
                    offending: body.to_string(),
                });
            }

            build_circle(center, parse_number(fields[2])?)
        }
        _ => Err(GeofenceError::UnsupportedGeofenceType { tag }),
    }
}

fn parse_coordinate_list(body: &str) -> Result<Vec<Coordinate>, GeofenceError> {
    body.split(',').map(parse_coordinate_pair).collect()
}

fn parse_coordinate_pair(chunk: &str) -> Result<Coordinate, GeofenceError> {
    let fields: Vec<&str> = chunk.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(GeofenceError::MalformedDescription {
            reason: "coordinate pair needs exactly latitude and longitude",
            offending: chunk.trim().to_string(),
        });
    }

    let coordinate =
        Coordinate::from_lat_lon(parse_number(fields[0])?, parse_number(fields[1])?);
    // f64 parsing happily accepts spellings like "NaN" and "inf".
    if !coordinate.is_finite() {
        return Err(GeofenceError::MalformedDescription {
            reason: "coordinate is not finite",
            offending: chunk.trim().to_string(),
        });
    }

    Ok(coordinate)
}

fn parse_number(token: &str) -> Result<f64, GeofenceError> {
    token.parse().map_err(|_| GeofenceError::MalformedDescription {
        reason: "expected a number",
        offending: token.to_string(),
    })
}
