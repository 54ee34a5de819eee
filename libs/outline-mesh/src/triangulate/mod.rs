//! # Ear-Clipping Triangulation
//!
//! Triangulates a simple clockwise polygon by repeatedly cutting off ears.
//!
//! ## Algorithm
//!
//! 1. Keep a working list of the remaining vertex indices, in ring order.
//! 2. Scan the list from the front. A vertex is an ear when its turn is
//!    convex under the clockwise convention and no other remaining vertex
//!    lies inside the triangle it forms with its neighbors.
//! 3. Emit the first ear found, drop its vertex, and restart the scan.
//! 4. When three vertices remain, emit them as the last triangle.
//!
//! A full scan without an ear means the input was not a simple clockwise
//! polygon. Success always yields exactly `n - 2` triangles.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use outline_mesh::triangulate::triangulate;
//!
//! let square = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(0.0, 3.0),
//!     DVec2::new(3.0, 3.0),
//!     DVec2::new(3.0, 0.0),
//! ];
//! let triangles = triangulate(&square).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

use crate::error::{MeshError, MeshResult};
use crate::geometry::point_in_triangle;
use config::constants::MIN_POLYGON_VERTICES;
use glam::DVec2;
use log::debug;
use robust::{orient2d, Coord};

/// Triangulates a clockwise simple polygon.
///
/// Indices in the returned triples refer to positions in `points`. Each
/// triple winds the same way as the input ring.
///
/// # Errors
///
/// - [`MeshError::InvalidVertices`] for fewer than three points.
/// - [`MeshError::Failure`] when no ear can be found, which happens for
///   counter-clockwise or self-intersecting input.
pub fn triangulate(points: &[DVec2]) -> MeshResult<Vec<[u32; 3]>> {
    let n = points.len();
    if n < MIN_POLYGON_VERTICES {
        return Err(MeshError::InvalidVertices { count: n });
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let len = remaining.len();
        let Some(i) = (0..len).find(|&i| is_ear(points, &remaining, i)) else {
            debug!(
                "no ear among {} remaining vertices: {:?}",
                len,
                remaining.iter().map(|&k| points[k]).collect::<Vec<_>>()
            );
            return Err(MeshError::failure(format!(
                "no ear found with {len} vertices remaining; the polygon is not simple and clockwise"
            )));
        };

        let prev = remaining[(i + len - 1) % len];
        let next = remaining[(i + 1) % len];
        triangles.push([prev as u32, remaining[i] as u32, next as u32]);
        remaining.remove(i);
    }

    triangles.push([
        remaining[0] as u32,
        remaining[1] as u32,
        remaining[2] as u32,
    ]);

    Ok(triangles)
}

/// Returns true if the `i`-th remaining vertex is an ear.
fn is_ear(points: &[DVec2], remaining: &[usize], i: usize) -> bool {
    let len = remaining.len();
    let prev = remaining[(i + len - 1) % len];
    let curr = remaining[i];
    let next = remaining[(i + 1) % len];

    let (a, b, c) = (points[prev], points[curr], points[next]);

    // A counter-clockwise turn is a reflex vertex in a clockwise ring.
    if orient2d(coord(a), coord(b), coord(c)) > 0.0 {
        return false;
    }

    !remaining
        .iter()
        .filter(|&&k| k != prev && k != curr && k != next)
        .any(|&k| point_in_triangle(a, b, c, points[k]))
}

#[inline]
fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}
