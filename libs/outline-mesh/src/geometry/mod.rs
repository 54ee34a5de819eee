//! # Geometry Predicates
//!
//! Planar predicates shared by the triangulator and the hole bridging code.
//!
//! ## Winding Convention
//!
//! A ring is *clockwise* when `Σ (x_next − x_curr)(y_next + y_curr) > 0`.
//! [`signed_area`] returns half of that sum, so a positive area always means
//! clockwise and its magnitude is the enclosed area.
//!
//! ## Tolerances
//!
//! All thresholds come from [`config::constants`]; nothing here is exact.

pub mod ring;

use config::constants::{
    areas_match, DIRECTION_TOLERANCE, MIN_POLYGON_VERTICES, POINT_ON_SEGMENT_TOLERANCE,
    VERTEX_MERGE_EPSILON, VERTICAL_EDGE_TOLERANCE,
};
use glam::DVec2;
use log::warn;

// =============================================================================
// AREA AND WINDING
// =============================================================================

/// Doubled signed area of triangle `abc` (the 2D cross product of `ab` and `ac`).
///
/// Positive when `a`, `b`, `c` turn counter-clockwise.
#[inline]
pub fn doubled_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Signed area of a closed ring. Positive means clockwise.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use outline_mesh::geometry::signed_area;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(0.0, 3.0),
///     DVec2::new(3.0, 3.0),
///     DVec2::new(3.0, 0.0),
/// ];
/// assert_eq!(signed_area(&square), 9.0);
/// ```
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let current = points[i];
        let next = points[(i + 1) % n];
        sum += (next.x - current.x) * (next.y + current.y);
    }
    sum * 0.5
}

/// Returns true if the ring winds clockwise.
///
/// Fails closed: fewer than three points is never clockwise, and a warning is
/// logged instead of raising an error.
pub fn is_clockwise(points: &[DVec2]) -> bool {
    if points.len() < MIN_POLYGON_VERTICES {
        warn!(
            "a polygon needs at least {} vertices to have a winding, got {}",
            MIN_POLYGON_VERTICES,
            points.len()
        );
        return false;
    }
    signed_area(points) > 0.0
}

/// Reverses the ring in place unless it is already clockwise.
///
/// Returns true if the ring was reversed.
pub fn normalize_winding(points: &mut [DVec2]) -> bool {
    if is_clockwise(points) {
        return false;
    }
    points.reverse();
    true
}

// =============================================================================
// POINT PREDICATES
// =============================================================================

/// Returns true if two points are the same within [`VERTEX_MERGE_EPSILON`].
#[inline]
pub fn points_coincide(a: DVec2, b: DVec2) -> bool {
    a.abs_diff_eq(b, VERTEX_MERGE_EPSILON)
}

/// Where a point sits along a segment it was found to lie on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// `|ap| / |ab|`, the parametric position of the point along the segment.
    pub ratio: f64,
    /// `|ap| + |pb| − |ab|`, how far the detour through the point overshoots.
    pub deviation: f64,
}

/// Tests whether `p` lies on segment `ab`.
///
/// The test is the loose "detour" check `| |ap| + |pb| − |ab| | < 0.1`, which
/// tolerates the drift of interpolated bridge endpoints. A zero-length
/// segment never matches.
pub fn point_on_segment(a: DVec2, b: DVec2, p: DVec2) -> Option<SegmentHit> {
    let length = a.distance(b);
    if length < VERTEX_MERGE_EPSILON {
        return None;
    }
    let to_point = a.distance(p);
    let deviation = (to_point + p.distance(b) - length).abs();
    (deviation < POINT_ON_SEGMENT_TOLERANCE).then_some(SegmentHit {
        ratio: to_point / length,
        deviation,
    })
}

/// Tests whether `p` lies inside or on triangle `abc`.
///
/// Uses the "sub-areas sum to the whole" identity with absolute areas, so the
/// result does not depend on the triangle's winding. A point that coincides
/// with one of the corners is not inside: a ring that visits the same
/// position twice must not block its own ears.
pub fn point_in_triangle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    if points_coincide(p, a) || points_coincide(p, b) || points_coincide(p, c) {
        return false;
    }
    let whole = doubled_area(a, b, c).abs();
    let parts = doubled_area(p, b, c).abs()
        + doubled_area(a, p, c).abs()
        + doubled_area(a, b, p).abs();
    areas_match(whole, parts)
}

/// Even-odd point-in-polygon test.
pub fn point_in_polygon(points: &[DVec2], p: DVec2) -> bool {
    let n = points.len();
    let mut inside = false;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

// =============================================================================
// VERTICAL CROSSINGS
// =============================================================================

/// Intersection of a vertical line with a ring edge.
///
/// `position` is the fractional contour position `j + ratio`: `j` is the
/// index of the edge's start vertex and `ratio ∈ [0, 1]` the parametric
/// position along the edge, wrapped into `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingPoint {
    /// Intersection point.
    pub point: DVec2,
    /// Fractional contour position.
    pub position: f64,
}

/// Returns true if `x` lies between `a` and `b`, endpoints included.
#[inline]
fn is_between(a: f64, b: f64, x: f64) -> bool {
    (a >= x && b <= x) || (a <= x && b >= x)
}

/// Intersects the vertical line `x = c` with every edge of a ring.
///
/// Near-vertical edges (`|Δx| < 1e-3`) are skipped; their endpoints are
/// reported by the neighboring edges. A line through a vertex reports that
/// vertex once per adjacent non-vertical edge. Results follow edge traversal
/// order, starting with the closing edge `(len − 1, 0)`.
pub fn find_vertical_crossings(points: &[DVec2], x: f64) -> Vec<CrossingPoint> {
    let n = points.len();
    let mut crossings = Vec::new();
    for i in 0..n {
        let j = ring::previous(i, n);
        let start = points[j];
        let end = points[i];
        let range = end.x - start.x;

        if range.abs() < VERTICAL_EDGE_TOLERANCE || !is_between(start.x, end.x, x) {
            continue;
        }

        let ratio = (x - start.x) / range;
        let y = start.y + ratio * (end.y - start.y);
        crossings.push(CrossingPoint {
            point: DVec2::new(x, y),
            position: (j as f64 + ratio) % n as f64,
        });
    }
    crossings
}

/// Picks the items with the lowest and highest y.
///
/// Returns `None` for an empty slice. With one or two items no scan is
/// needed and the pair is formed directly; a single item is both extremes.
pub fn extreme_two_by_y<T: Copy>(items: &[T], y: impl Fn(&T) -> f64) -> Option<(T, T)> {
    match items {
        [] => None,
        [only] => Some((*only, *only)),
        [a, b] if y(a) <= y(b) => Some((*a, *b)),
        [a, b] => Some((*b, *a)),
        [first, rest @ ..] => {
            let mut low = *first;
            let mut high = *first;
            for item in rest {
                if y(item) < y(&low) {
                    low = *item;
                }
                if y(item) > y(&high) {
                    high = *item;
                }
            }
            Some((low, high))
        }
    }
}

// =============================================================================
// SIMPLIFICATION
// =============================================================================

/// Collapses runs of collinear points into their two endpoints.
///
/// Single pass over a stack: each entry remembers the unit direction it was
/// reached from. Before pushing a point, the top is popped for as long as the
/// direction from the top to the new point matches the top's own direction.
/// Consecutive equal points are skipped. Spikes that double back are kept.
/// The first and last points always survive.
pub fn simplify_collinear(points: &[DVec2]) -> Vec<DVec2> {
    let mut stack: Vec<(DVec2, Option<DVec2>)> = Vec::with_capacity(points.len());

    for &point in points {
        if let Some(&(top, _)) = stack.last() {
            if points_coincide(top, point) {
                continue;
            }
        }

        while let Some(&(top, Some(reached_along))) = stack.last() {
            let heading = (point - top).normalize();
            let parallel = reached_along.perp_dot(heading).abs() < DIRECTION_TOLERANCE;
            if parallel && reached_along.dot(heading) > 0.0 {
                stack.pop();
            } else {
                break;
            }
        }

        let reached_along = stack.last().map(|&(top, _)| (point - top).normalize());
        stack.push((point, reached_along));
    }

    stack.into_iter().map(|(point, _)| point).collect()
}

#[cfg(test)]
mod tests;
