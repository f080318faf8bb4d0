//! Ring synthesis for buffered shapes.
//!
//! Discs and route corridors both reduce to closed polygon rings here.
//! A corridor offsets the route polyline on each side, joins bends with
//! the offset-line intersection on the concave side while that corner
//! stays within reach of both legs (a flat bevel otherwise) and a round
//! arc on the convex side, and closes both ends with semicircular caps.
//! Every ring vertex sits within the half-width of the route. All arcs
//! share the disc discretization so boundary error is uniform across
//! shapes, and both ring kinds come out counter-clockwise.

use crate::coord::{Coordinate, Vec2};

/// Arc segments per quarter circle. A full disc outline has four times
/// this many edges; the inscribed polygon undershoots the true circle
/// by at most `1 - cos(pi / 32)`, about 0.5% of the radius.
pub(crate) const QUADRANT_SEGMENTS: usize = 8;

/// Miter length limit as a multiple of the offset distance. Bends
/// sharper than this get a flat bevel instead of a spike.
const MITER_LIMIT: f64 = 4.0;

/// Closed ring approximating a disc, counter-clockwise from due east.
pub(crate) fn circle_ring(center: Coordinate, radius_degrees: f64) -> Vec<Coordinate> {
    let steps = 4 * QUADRANT_SEGMENTS;
    let mut ring = Vec::with_capacity(steps + 1);

    for i in 0..steps {
        let angle = std::f64::consts::TAU * i as f64 / steps as f64;
        ring.push(point_on_circle(center, radius_degrees, angle));
    }

    let first = ring[0];
    ring.push(first);
    ring
}

/// Closed ring enclosing every point within `half_width_degrees` of the
/// route polyline, counter-clockwise like [`circle_ring`]. The caller
/// guarantees at least two route points.
pub(crate) fn corridor_ring(line: &[Coordinate], half_width_degrees: f64) -> Vec<Coordinate> {
    let n = line.len();
    let directions = segment_directions(line);

    let right = offset_side(line, &directions, half_width_degrees, -1.0);
    let mut left = offset_side(line, &directions, half_width_degrees, 1.0);
    left.reverse();

    let mut ring = Vec::with_capacity(left.len() + right.len() + 4 * QUADRANT_SEGMENTS + 3);

    ring.extend(right);

    // Cap beyond the end, from the right-hand offset around to the left.
    let end_normal = directions[n - 2].perpendicular();
    ring.extend(semicircle(line[n - 1], half_width_degrees, -end_normal));

    ring.extend(left);

    // Cap behind the start, from the left-hand offset around to the
    // right, closing the loop.
    let start_normal = directions[0].perpendicular();
    ring.extend(semicircle(line[0], half_width_degrees, start_normal));

    close_ring(&mut ring);
    ring
}

/// Unit direction of each route segment. Zero-length segments reuse the
/// previous direction so repeated route points do not break the offset.
fn segment_directions(line: &[Coordinate]) -> Vec<Vec2> {
    let mut directions = Vec::with_capacity(line.len() - 1);

    for pair in line.windows(2) {
        match (pair[1] - pair[0]).normalize() {
            Some(direction) => directions.push(direction),
            None => {
                let fallback = directions.last().copied().unwrap_or(Vec2::new(1.0, 0.0));
                directions.push(fallback);
            }
        }
    }

    directions
}

/// One side of the corridor, walked start to end. `side` is `1.0` for
/// the left of travel and `-1.0` for the right.
fn offset_side(
    line: &[Coordinate],
    directions: &[Vec2],
    half_width: f64,
    side: f64,
) -> Vec<Coordinate> {
    let n = line.len();
    let mut points = Vec::with_capacity(n + 2);

    points.push(line[0] + directions[0].perpendicular() * (side * half_width));

    for i in 1..n - 1 {
        let normal_in = directions[i - 1].perpendicular() * side;
        let normal_out = directions[i].perpendicular() * side;
        let shorter_leg = (line[i] - line[i - 1])
            .magnitude()
            .min((line[i + 1] - line[i]).magnitude());
        join_bend(
            &mut points,
            line[i],
            normal_in,
            normal_out,
            half_width,
            side,
            shorter_leg,
        );
    }

    points.push(line[n - 1] + directions[n - 2].perpendicular() * (side * half_width));

    points
}

/// Joins two offset segments at an interior route vertex. The normals
/// are already adjusted for the side being walked; `max_reach` is the
/// length of the shorter adjacent leg.
fn join_bend(
    points: &mut Vec<Coordinate>,
    vertex: Coordinate,
    normal_in: Vec2,
    normal_out: Vec2,
    half_width: f64,
    side: f64,
    max_reach: f64,
) {
    // Left turns are positive; the side the route turns toward is the
    // concave one.
    let turn = normal_in.cross(normal_out);

    if turn * side > 0.0 {
        match miter_point(vertex, normal_in, normal_out, half_width, max_reach) {
            Some(corner) => points.push(corner),
            None => {
                points.push(vertex + normal_in * half_width);
                points.push(vertex + normal_out * half_width);
            }
        }
    } else {
        let sweep = turn.atan2(normal_in.dot(normal_out));
        let start_angle = normal_in.y.atan2(normal_in.x);
        points.extend(arc_points(vertex, half_width, start_angle, sweep));
    }
}

/// Intersection of the two offset lines at a bend, reached along the
/// bisector of the offset normals. The intersection is on the buffered
/// boundary only while its perpendicular feet land on the adjacent
/// legs, so it is rejected once its reach along either leg passes
/// `max_reach`. Also returns `None` for bends sharper than
/// [`MITER_LIMIT`] allows and for full reversals; the caller bevels
/// instead, which keeps the ring within the half-width envelope.
fn miter_point(
    vertex: Coordinate,
    normal_in: Vec2,
    normal_out: Vec2,
    half_width: f64,
    max_reach: f64,
) -> Option<Coordinate> {
    let bisector = (normal_in + normal_out).normalize()?;
    let cos_half_angle = bisector.dot(normal_in);

    if cos_half_angle <= 0.0 {
        return None;
    }

    let length = half_width / cos_half_angle;
    if length > MITER_LIMIT * half_width {
        return None;
    }

    let sin_half_angle = (1.0 - cos_half_angle * cos_half_angle).max(0.0).sqrt();
    if length * sin_half_angle > max_reach {
        return None;
    }

    Some(vertex + bisector * length)
}

/// Half-circle starting at the offset along `from_normal`, swept
/// counter-clockwise to the diametrically opposite offset.
fn semicircle(center: Coordinate, radius: f64, from_normal: Vec2) -> Vec<Coordinate> {
    let start_angle = from_normal.y.atan2(from_normal.x);
    arc_points(center, radius, start_angle, std::f64::consts::PI)
}

/// Points along a circular arc, both endpoints included.
fn arc_points(center: Coordinate, radius: f64, start_angle: f64, sweep: f64) -> Vec<Coordinate> {
    let steps = ((sweep.abs() / std::f64::consts::FRAC_PI_2) * QUADRANT_SEGMENTS as f64)
        .ceil()
        .max(1.0) as usize;

    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let angle = start_angle + sweep * i as f64 / steps as f64;
        points.push(point_on_circle(center, radius, angle));
    }

    points
}

/// Point at `angle` radians on the circle around `center`, measured
/// counter-clockwise from due east.
#[inline]
fn point_on_circle(center: Coordinate, radius: f64, angle: f64) -> Coordinate {
    center + Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Appends the first coordinate unless the ring already ends on it.
fn close_ring(ring: &mut Vec<Coordinate>) {
    if ring.first() != ring.last() {
        let first = ring[0];
        ring.push(first);
    }
}
