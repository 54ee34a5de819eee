//! Tests for prism extrusion.

use super::*;
use crate::bridge::build_bridge;
use crate::shapes::{box_outline, cheese_outline, star_outline};
use crate::split::cut;
use crate::triangulate::triangulate;
use approx::assert_relative_eq;
use glam::DVec2;
use std::collections::HashMap;

fn flat(ring: &[DVec2]) -> Mesh {
    Mesh::from_polygon(ring, triangulate(ring).unwrap())
}

#[test]
fn test_square_block_counts() {
    let solid = extrude(&flat(&box_outline()), 5.0).unwrap();
    assert_eq!(solid.vertex_count(), 8);
    assert_eq!(solid.triangle_count(), 2 * 2 + 2 * 4);
    assert!(solid.validate());
}

#[test]
fn test_extrusion_symmetry_law() {
    let mesh = flat(&star_outline());
    let solid = extrude(&mesh, 1.5).unwrap();

    let v = mesh.vertex_count();
    let t = mesh.triangle_count();
    assert_eq!(solid.vertex_count(), 2 * v);
    assert_eq!(solid.triangle_count(), 2 * t + 2 * v);
    assert_eq!(solid.indices_u32().len(), 3 * (2 * t + 2 * v));
}

#[test]
fn test_back_face_is_offset_and_reversed() {
    let mesh = flat(&box_outline());
    let solid = extrude(&mesh, 2.0).unwrap();
    let offset = mesh.vertex_count() as u32;

    for (front, back) in mesh.vertices().iter().zip(&solid.vertices()[4..]) {
        assert_relative_eq!(back.z, front.z - 2.0);
        assert_eq!(back.truncate(), front.truncate());
    }

    let [a, b, c] = mesh.triangles()[0];
    assert_eq!(solid.triangles()[2], [a + offset, c + offset, b + offset]);

    let (min, max) = solid.bounding_box();
    assert_relative_eq!(max.z - min.z, 2.0);
}

/// Every directed edge of a closed, consistently wound solid is matched by
/// exactly one edge running the other way.
#[test]
fn test_block_is_closed_and_consistently_wound() {
    let solid = extrude(&flat(&star_outline()), 1.0).unwrap();

    let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
    for &[a, b, c] in solid.triangles() {
        for edge in [(a, b), (b, c), (c, a)] {
            *directed.entry(edge).or_default() += 1;
        }
    }

    for (&(from, to), &count) in &directed {
        assert_eq!(count, 1, "edge {from}->{to} used {count} times");
        assert_eq!(directed.get(&(to, from)), Some(&1), "edge {from}->{to} is open");
    }
}

#[test]
fn test_mesh_without_boundaries_uses_whole_buffer() {
    let vertices = vec![DVec3::ZERO, DVec3::Y, DVec3::X];
    let mesh = Mesh::from_buffers(vertices, &[0, 1, 2]).unwrap();
    let solid = extrude(&mesh, 1.0).unwrap();

    assert_eq!(solid.vertex_count(), 6);
    assert_eq!(solid.triangle_count(), 8);
}

#[test]
fn test_each_boundary_loop_gets_walls() {
    let mut mesh = flat(&box_outline());
    let shifted: Vec<DVec2> = box_outline()
        .into_iter()
        .map(|p| p + DVec2::new(10.0, 0.0))
        .collect();
    mesh.merge(&flat(&shifted));

    let solid = extrude(&mesh, 1.0).unwrap();
    assert_eq!(solid.vertex_count(), 16);
    assert_eq!(solid.triangle_count(), 2 * 4 + 2 * 8);
}

/// Slab with a unit square hole at (2, 1), cut along x = 2 and merged back.
fn slab_with_hole() -> Mesh {
    let hole = [(2.0, 1.0), (2.0, 2.0), (3.0, 2.0), (3.0, 1.0)].map(|(x, y)| DVec2::new(x, y));
    let line = build_bridge(&hole, (0.0, 4.0)).unwrap();
    cut(&flat(&cheese_outline()), &line).unwrap().merge()
}

fn triangle_area(mesh: &Mesh, tri: [u32; 3]) -> f64 {
    let [a, b, c] = tri.map(|i| mesh.vertices()[i as usize]);
    (b - a).cross(c - a).length() * 0.5
}

#[test]
fn test_seams_between_pieces_get_no_walls() {
    let mesh = slab_with_hole();
    assert_eq!(mesh.boundaries().len(), 2);

    let solid = extrude(&mesh, 1.0).unwrap();
    assert_eq!(solid.vertex_count(), 2 * mesh.vertex_count());
    assert!(solid.validate());

    let walls = &solid.triangles()[2 * mesh.triangle_count()..];
    // Six outline stretches (top and bottom end at the seam) and the four
    // hole sides.
    assert_eq!(walls.len(), 2 * 10);

    for &tri in walls {
        let corners = tri.map(|i| solid.vertices()[i as usize]);
        if corners.iter().all(|v| (v.x - 2.0).abs() < 1e-9) {
            assert!(corners.iter().all(|v| (1.0..=2.0).contains(&v.y)));
        }
    }

    // Outline perimeter 20 plus the hole rim 4, one unit deep.
    let area: f64 = walls.iter().map(|&tri| triangle_area(&solid, tri)).sum();
    assert_relative_eq!(area, 24.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_rejects_empty_mesh() {
    assert!(matches!(
        extrude(&Mesh::new(), 1.0),
        Err(MeshError::InvalidMesh { .. })
    ));
}

#[test]
fn test_extrude_rejects_bad_depth() {
    let mesh = flat(&box_outline());
    assert!(matches!(
        extrude(&mesh, 0.0),
        Err(MeshError::Config(ConfigError::InvalidDepth(_)))
    ));
    assert!(extrude(&mesh, f64::NAN).is_err());
}
