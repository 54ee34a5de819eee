//! # Prism Extrusion
//!
//! Lifts a flat triangulated mesh into a closed block:
//!
//! - **front**: the input vertices and triangles, unchanged
//! - **back**: a copy translated by `(0, 0, -depth)` with every triangle's
//!   winding reversed
//! - **sides**: one quad (two triangles) per wall edge, joining the front
//!   copy of the edge to its back copy
//!
//! Wall edges follow the boundary loops. A meshed outline with holes is a
//! set of pieces that meet along bridge seams, and every seam is walked once
//! by each of the two pieces in opposite directions. Those stretches lie
//! inside the solid and get no wall, which leaves walls on the outline and
//! on each hole rim.
//!
//! The result always has `2V` vertices. For a mesh with a single boundary
//! loop it has `2T + 2V` triangles.

use crate::error::{MeshError, MeshResult};
use crate::geometry::ring;
use crate::mesh::Mesh;
use config::constants::{ConfigError, VERTEX_MERGE_EPSILON};
use glam::{DVec2, DVec3};

/// Extrudes `mesh` backwards along Z by `depth`.
///
/// # Errors
///
/// - [`MeshError::InvalidMesh`] if the mesh has no vertices or invalid
///   indices.
/// - [`MeshError::Config`] if `depth` is not positive and finite.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use outline_mesh::{extrude::extrude, triangulate::triangulate, Mesh};
///
/// let ring = [DVec2::new(0.0, 0.0), DVec2::new(0.0, 1.0), DVec2::new(1.0, 0.0)];
/// let flat = Mesh::from_polygon(&ring, triangulate(&ring).unwrap());
/// let solid = extrude(&flat, 2.0).unwrap();
/// assert_eq!(solid.vertex_count(), 6);
/// assert_eq!(solid.triangle_count(), 8);
/// ```
pub fn extrude(mesh: &Mesh, depth: f64) -> MeshResult<Mesh> {
    if mesh.is_empty() {
        return Err(MeshError::invalid_mesh("cannot extrude a mesh with no vertices"));
    }
    if !mesh.validate() {
        return Err(MeshError::invalid_mesh("cannot extrude a mesh with invalid indices"));
    }
    if !depth.is_finite() || depth <= 0.0 {
        return Err(ConfigError::InvalidDepth(depth).into());
    }

    let count = mesh.vertex_count();
    let offset = count as u32;
    let walls = wall_edges(mesh);

    let mut solid = Mesh::with_capacity(count * 2, mesh.triangle_count() * 2 + walls.len() * 2);

    // Front then back vertices
    for &v in mesh.vertices() {
        solid.add_vertex(v);
    }
    for &v in mesh.vertices() {
        solid.add_vertex(v - DVec3::new(0.0, 0.0, depth));
    }

    for &[a, b, c] in mesh.triangles() {
        solid.add_triangle(a, b, c);
    }
    for &[a, b, c] in mesh.triangles() {
        solid.add_triangle(a + offset, c + offset, b + offset);
    }

    for (current, next) in walls {
        solid.add_triangle(current, current + offset, next);
        solid.add_triangle(next, current + offset, next + offset);
    }

    for boundary in mesh.boundaries() {
        solid.add_boundary(boundary.clone());
    }
    solid.compute_normals();

    Ok(solid)
}

/// Directed boundary edges that need a side wall, as front vertex indices.
///
/// Each loop edge keeps the stretches that no other loop edge covers in the
/// opposite direction. A stretch that ends partway along an edge ends at
/// the vertex of the covering edge found there.
fn wall_edges(mesh: &Mesh) -> Vec<(u32, u32)> {
    let position = |i: u32| mesh.vertices()[i as usize].truncate();
    let edges: Vec<(u32, u32)> = mesh
        .boundary_loops()
        .iter()
        .flat_map(|boundary| {
            let n = boundary.len();
            (0..n).map(move |i| (boundary[i], boundary[ring::next(i, n)]))
        })
        .collect();

    let mut walls = Vec::with_capacity(edges.len());
    for (k, &(from, to)) in edges.iter().enumerate() {
        let (a, b) = (position(from), position(to));
        let length = a.distance(b);
        if length < VERTEX_MERGE_EPSILON {
            continue;
        }
        let direction = (b - a) / length;

        let mut covered: Vec<(f64, f64)> = edges
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != k)
            .filter_map(|(_, &(c, d))| {
                opposite_overlap(a, direction, length, position(c), position(d))
            })
            .collect();
        covered.sort_by(|x, y| x.0.total_cmp(&y.0));

        let vertex_at = |distance: f64| {
            if distance < VERTEX_MERGE_EPSILON {
                from
            } else if length - distance < VERTEX_MERGE_EPSILON {
                to
            } else {
                nearest_vertex(mesh, a + direction * distance)
            }
        };

        let mut reached = 0.0_f64;
        for (start, end) in covered.into_iter().chain([(length, length)]) {
            if start - reached > VERTEX_MERGE_EPSILON {
                walls.push((vertex_at(reached), vertex_at(start)));
            }
            reached = reached.max(end);
        }
    }
    walls
}

/// Stretch `(start, end)`, as distances from `a` along `direction`, that
/// segment `cd` covers while running the opposite way on the same line.
fn opposite_overlap(
    a: DVec2,
    direction: DVec2,
    length: f64,
    c: DVec2,
    d: DVec2,
) -> Option<(f64, f64)> {
    let on_line = |p: DVec2| direction.perp_dot(p - a).abs() < VERTEX_MERGE_EPSILON;
    if !on_line(c) || !on_line(d) || direction.dot(d - c) >= 0.0 {
        return None;
    }
    let start = direction.dot(d - a).max(0.0);
    let end = direction.dot(c - a).min(length);
    (end - start > VERTEX_MERGE_EPSILON).then_some((start, end))
}

fn nearest_vertex(mesh: &Mesh, p: DVec2) -> u32 {
    mesh.vertices()
        .iter()
        .map(|v| v.truncate().distance_squared(p))
        .enumerate()
        .min_by(|x, y| x.1.total_cmp(&y.1))
        .map_or(0, |(i, _)| i as u32)
}

#[cfg(test)]
mod tests;
