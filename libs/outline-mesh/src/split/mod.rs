//! # Split and Merge
//!
//! Cuts a flat mesh along a [`SplitLine`] into two independently
//! triangulated pieces, and concatenates meshes back into one buffer.
//!
//! ## Cutting
//!
//! Both bridge endpoints are located on the mesh boundary as fractional
//! contour positions. The boundary is then split at those positions:
//!
//! - the left piece is `left` chain + boundary walked forward from the
//!   bottom endpoint to the top endpoint,
//! - the right piece is `right` chain + boundary walked forward from the
//!   top endpoint back to the bottom endpoint.
//!
//! Each piece must still wind clockwise before it is triangulated. A piece
//! that collapses onto the bridge column encloses nothing: this happens when
//! the hole already touches the boundary along the column, and that side of
//! the cut comes back empty.

use crate::bridge::SplitLine;
use crate::error::{MeshError, MeshResult};
use crate::geometry::ring::{dedup_ring, vertices_between};
use crate::geometry::{is_clockwise, point_on_segment};
use crate::mesh::Mesh;
use crate::triangulate::triangulate;
use config::constants::{MIN_POLYGON_VERTICES, VERTEX_MERGE_EPSILON};
use glam::DVec2;
use log::debug;

/// The two pieces produced by a cut.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitMesh {
    /// Piece on the low-x side of the bridge column.
    pub left: Mesh,
    /// Piece on the high-x side of the bridge column.
    pub right: Mesh,
}

impl SplitMesh {
    /// Concatenates both pieces into one mesh.
    pub fn merge(self) -> Mesh {
        let SplitMesh { mut left, right } = self;
        left.merge(&right);
        left.compute_normals();
        left
    }

    /// Total number of triangles in both pieces.
    pub fn triangle_count(&self) -> usize {
        self.left.triangle_count() + self.right.triangle_count()
    }

    /// Total triangle area of both pieces.
    pub fn triangle_area_sum(&self) -> f64 {
        self.left.triangle_area_sum() + self.right.triangle_area_sum()
    }

    /// The non-empty pieces, left first.
    pub fn into_pieces(self) -> impl Iterator<Item = Mesh> {
        [self.left, self.right]
            .into_iter()
            .filter(|piece| !piece.is_empty())
    }
}

/// Cuts `mesh` along `line`.
///
/// The first boundary loop of `mesh` that both bridge endpoints attach to
/// is the one that gets cut; other loops are ignored.
///
/// # Errors
///
/// - [`MeshError::InvalidMesh`] if the mesh has fewer than three vertices
///   or out-of-range indices.
/// - [`MeshError::InvalidPoint`] if the line is not a closed bridge, an
///   endpoint does not lie on the boundary, a piece is not clockwise, or
///   both pieces collapse onto the bridge column.
/// - [`MeshError::InvalidSplitMesh`] if a piece cannot be triangulated.
pub fn cut(mesh: &Mesh, line: &SplitLine) -> MeshResult<SplitMesh> {
    if mesh.vertex_count() < MIN_POLYGON_VERTICES || !mesh.validate() {
        return Err(MeshError::invalid_mesh(format!(
            "cannot cut a mesh with {} vertices and {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        )));
    }

    let (Some(top), Some(bottom)) = (line.top(), line.bottom()) else {
        return Err(MeshError::invalid_point("split line has no endpoints"));
    };
    if !line.is_valid() {
        return Err(MeshError::invalid_point(
            "split line chains do not close into a loop",
        ));
    }

    let (ring, bottom_at, top_at) = (0..mesh.boundary_loops().len())
        .map(|i| mesh.boundary_ring(i))
        .find_map(|ring| {
            let bottom_at = locate(&ring, bottom)?;
            let top_at = locate(&ring, top)?;
            Some((ring, bottom_at, top_at))
        })
        .ok_or_else(|| {
            MeshError::invalid_point(format!(
                "bridge endpoints {bottom} and {top} are not on the mesh boundary"
            ))
        })?;

    let n = ring.len();
    debug!("cutting a {n}-vertex ring at positions {bottom_at:.3} and {top_at:.3}");

    let left = assemble(&line.left, &ring, vertices_between(n, bottom_at, top_at));
    let right = assemble(&line.right, &ring, vertices_between(n, top_at, bottom_at));

    let column = top.x;
    let left = piece("left", left, column)?;
    let right = piece("right", right, column)?;
    if left.is_empty() && right.is_empty() {
        return Err(MeshError::invalid_point(
            "both pieces of the cut collapse onto the bridge column",
        ));
    }

    debug!(
        "cut produced pieces of {} and {} vertices",
        left.vertex_count(),
        right.vertex_count()
    );

    Ok(SplitMesh { left, right })
}

/// Concatenates two meshes, failing if either side is missing.
///
/// Indices of `b` are offset by the vertex count of `a` and normals are
/// recomputed over the combined buffer.
pub fn merge_meshes(a: Option<&Mesh>, b: Option<&Mesh>) -> MeshResult<Mesh> {
    let (Some(a), Some(b)) = (a, b) else {
        return Err(MeshError::UnassignedMesh);
    };
    let mut merged = a.clone();
    merged.merge(b);
    merged.compute_normals();
    Ok(merged)
}

/// Triangulates one side of a cut. A side lying entirely on the column
/// `x = column` becomes an empty mesh.
fn piece(side: &'static str, ring: Vec<DVec2>, column: f64) -> MeshResult<Mesh> {
    if ring.iter().all(|p| (p.x - column).abs() < VERTEX_MERGE_EPSILON) {
        debug!("{side} piece of the cut collapses onto x = {column}");
        return Ok(Mesh::new());
    }
    if ring.len() < MIN_POLYGON_VERTICES || !is_clockwise(&ring) {
        return Err(MeshError::invalid_point(format!(
            "{side} piece of the cut is not a clockwise polygon"
        )));
    }
    let triangles = triangulate(&ring).map_err(|e| MeshError::split(side, e))?;
    Ok(Mesh::from_polygon(&ring, triangles))
}

/// Fractional position of `p` on `ring`, using the edge it deviates from
/// least.
fn locate(ring: &[DVec2], p: DVec2) -> Option<f64> {
    let n = ring.len();
    (0..n)
        .filter_map(|i| {
            point_on_segment(ring[i], ring[(i + 1) % n], p)
                .map(|hit| ((i as f64 + hit.ratio) % n as f64, hit.deviation))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(position, _)| position)
}

fn assemble(chain: &[DVec2], ring: &[DVec2], walk: Vec<usize>) -> Vec<DVec2> {
    let mut piece = chain.to_vec();
    piece.extend(walk.into_iter().map(|k| ring[k]));
    dedup_ring(piece)
}
