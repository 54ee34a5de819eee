//! Circular index arithmetic over closed rings.
//!
//! Cut points are addressed by fractional contour positions (`index + ratio`).
//! These helpers turn a pair of such positions into the integer vertex span
//! between them, wrapping around the end of the ring.

use super::points_coincide;
use glam::DVec2;

/// Index before `i` on a ring of `len` vertices.
#[inline]
pub fn previous(i: usize, len: usize) -> usize {
    (i + len - 1) % len
}

/// Index after `i` on a ring of `len` vertices.
#[inline]
pub fn next(i: usize, len: usize) -> usize {
    (i + 1) % len
}

/// Vertex indices strictly between two fractional positions, walking forward.
///
/// Vertex `k` sits at position `k`. The walk starts just after `from` and
/// stops just before `to`, wrapping modulo `len` when `to` is behind `from`.
/// Equal positions walk the whole ring.
///
/// # Example
///
/// ```rust
/// use outline_mesh::geometry::ring::vertices_between;
///
/// assert_eq!(vertices_between(4, 0.5, 2.5), vec![1, 2]);
/// assert_eq!(vertices_between(4, 3.5, 1.5), vec![0, 1]);
/// assert_eq!(vertices_between(3, 0.0, 0.0), vec![1, 2]);
/// ```
pub fn vertices_between(len: usize, from: f64, to: f64) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }

    let to = if to <= from { to + len as f64 } else { to };
    let first = from.floor() as i64 + 1;
    let last = to.ceil() as i64 - 1;

    (first..=last)
        .map(|k| k.rem_euclid(len as i64) as usize)
        .collect()
}

/// Drops consecutive coincident points from an open chain.
pub fn dedup_open(points: Vec<DVec2>) -> Vec<DVec2> {
    let mut result: Vec<DVec2> = Vec::with_capacity(points.len());
    for point in points {
        if result.last().is_some_and(|&last| points_coincide(last, point)) {
            continue;
        }
        result.push(point);
    }
    result
}

/// Drops consecutive coincident points from a closed ring, including a last
/// point that repeats the first.
pub fn dedup_ring(points: Vec<DVec2>) -> Vec<DVec2> {
    let mut result = dedup_open(points);
    while result.len() > 1 && points_coincide(result[0], result[result.len() - 1]) {
        result.pop();
    }
    result
}
