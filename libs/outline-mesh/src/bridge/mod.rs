//! # Hole Bridging
//!
//! Turns a hole into a [`SplitLine`]: two boundary chains that run along a
//! vertical column through the hole's first vertex and around either side
//! of the hole. Cutting a ring along the split line yields two simple
//! polygons whose union is the ring minus the hole.
//!
//! ## Chains
//!
//! With `x0 = hole[0].x`, the column meets the hole boundary at a lower
//! crossing `L` and an upper crossing `U`. The column itself spans from
//! `B = (x0, low)` to `T = (x0, high)`.
//!
//! - `left` runs `T → U → (hole arc on the low-x side) → L → B` and closes
//!   the piece on the low-x side of the column.
//! - `right` runs `B → L → (hole arc on the high-x side) → U → T` and closes
//!   the piece on the high-x side.
//!
//! So `left.first == right.last == T` and `left.last == right.first == B`.
//! A hole that only touches the column at one point puts its whole
//! boundary into the chain on the side it occupies.

use crate::error::{MeshError, MeshResult};
use crate::geometry::ring::{dedup_open, vertices_between};
use crate::geometry::{
    extreme_two_by_y, find_vertical_crossings, normalize_winding, points_coincide,
    simplify_collinear, CrossingPoint,
};
use config::constants::{approx_equal, MIN_POLYGON_VERTICES, VERTEX_MERGE_EPSILON};
use glam::DVec2;
use log::{debug, warn};

/// The two boundary chains of a bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitLine {
    /// Top endpoint to bottom endpoint, bounding the low-x piece.
    pub left: Vec<DVec2>,
    /// Bottom endpoint to top endpoint, bounding the high-x piece.
    pub right: Vec<DVec2>,
}

impl SplitLine {
    /// Returns true if both chains have at least two points and close
    /// into a loop at both ends.
    pub fn is_valid(&self) -> bool {
        match (
            self.left.first(),
            self.left.last(),
            self.right.first(),
            self.right.last(),
        ) {
            (Some(&lf), Some(&ll), Some(&rf), Some(&rl)) => {
                self.left.len() >= 2
                    && self.right.len() >= 2
                    && points_coincide(lf, rl)
                    && points_coincide(ll, rf)
            }
            _ => false,
        }
    }

    /// Upper end of the bridge column.
    pub fn top(&self) -> Option<DVec2> {
        self.left.first().copied()
    }

    /// Lower end of the bridge column.
    pub fn bottom(&self) -> Option<DVec2> {
        self.left.last().copied()
    }
}

/// Builds the bridge for `hole` along the column through its first vertex.
///
/// `height_range` is the `(low, high)` extent of the column; it is reordered
/// if given backwards. A counter-clockwise hole is reversed first, which
/// also changes which vertex is first.
///
/// # Errors
///
/// - [`MeshError::InvalidVertices`] for holes with fewer than three points.
/// - [`MeshError::InvalidHeightRange`] if the hole pokes out of the range.
/// - [`MeshError::InvalidMethod`] if the column misses the hole boundary.
pub fn build_bridge(hole: &[DVec2], height_range: (f64, f64)) -> MeshResult<SplitLine> {
    if hole.len() < MIN_POLYGON_VERTICES {
        return Err(MeshError::InvalidVertices { count: hole.len() });
    }

    let mut hole = hole.to_vec();
    if normalize_winding(&mut hole) {
        warn!("hole was counter-clockwise and has been reversed");
    }

    let (low, high) = ordered(height_range);
    let extent = y_extent(&hole);
    if extent.0 < low || extent.1 > high {
        return Err(MeshError::InvalidHeightRange {
            hole: extent,
            range: (low, high),
        });
    }

    let x0 = hole[0].x;
    let (lower, upper) = column_crossings(&hole, x0)?;

    let n = hole.len();
    let (left_walk, right_walk) = if touches_column_once(lower, upper) {
        let extends_left = hole.iter().any(|p| p.x < x0 - VERTEX_MERGE_EPSILON);
        if extends_left {
            (vertices_between(n, lower.position, upper.position), Vec::new())
        } else {
            (Vec::new(), vertices_between(n, upper.position, lower.position))
        }
    } else {
        (
            vertices_between(n, lower.position, upper.position),
            vertices_between(n, upper.position, lower.position),
        )
    };

    let bottom = DVec2::new(x0, low);
    let top = DVec2::new(x0, high);

    let mut left = vec![top, upper.point];
    left.extend(left_walk.iter().rev().map(|&k| hole[k]));
    left.extend([lower.point, bottom]);

    let mut right = vec![bottom, lower.point];
    right.extend(right_walk.iter().rev().map(|&k| hole[k]));
    right.extend([upper.point, top]);

    debug!(
        "bridge at x = {x0}: column [{low}, {high}], hole crossings {} and {}",
        lower.point.y, upper.point.y
    );

    Ok(SplitLine {
        left: simplify_collinear(&dedup_open(left)),
        right: simplify_collinear(&dedup_open(right)),
    })
}

/// Height range for bridging `hole` inside `ring`.
///
/// The column through `hole[0]` is bounded by the nearest crossings of
/// `ring` below the hole's lower crossing and above its upper crossing.
/// For a rectangle this is the rectangle's y-extent.
///
/// # Errors
///
/// - [`MeshError::InvalidMethod`] if the column misses the hole boundary.
/// - [`MeshError::InvalidHeightRange`] if the ring does not enclose the
///   column above and below the hole.
pub fn column_range(ring: &[DVec2], hole: &[DVec2]) -> MeshResult<(f64, f64)> {
    let Some(&first) = hole.first() else {
        return Err(MeshError::InvalidVertices { count: 0 });
    };
    let (lower, upper) = column_crossings(hole, first.x)?;
    let (hole_low, hole_high) = (lower.point.y, upper.point.y);

    let ring_ys: Vec<f64> = find_vertical_crossings(ring, first.x)
        .iter()
        .map(|c| c.point.y)
        .collect();

    let below = ring_ys
        .iter()
        .copied()
        .filter(|&y| y <= hole_low + VERTEX_MERGE_EPSILON)
        .reduce(f64::max);
    let above = ring_ys
        .iter()
        .copied()
        .filter(|&y| y >= hole_high - VERTEX_MERGE_EPSILON)
        .reduce(f64::min);

    match (below, above) {
        (Some(low), Some(high)) => Ok((low, high)),
        _ => Err(MeshError::InvalidHeightRange {
            hole: (hole_low, hole_high),
            range: y_extent(ring),
        }),
    }
}

/// Lowest and highest crossings of the vertical line `x` with `hole`.
fn column_crossings(hole: &[DVec2], x: f64) -> MeshResult<(CrossingPoint, CrossingPoint)> {
    let crossings = find_vertical_crossings(hole, x);
    extreme_two_by_y(&crossings, |c| c.point.y).ok_or_else(|| {
        MeshError::invalid_method(format!(
            "vertical line x = {x} does not cross the hole boundary"
        ))
    })
}

fn touches_column_once(lower: CrossingPoint, upper: CrossingPoint) -> bool {
    approx_equal(lower.position, upper.position) || points_coincide(lower.point, upper.point)
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

pub(crate) fn y_extent(points: &[DVec2]) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.y), hi.max(p.y))
    })
}
