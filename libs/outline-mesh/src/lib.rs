//! # Outline Mesh
//!
//! Turns a 2D outline with optional holes into a flat triangle mesh, and
//! extrudes flat meshes into solid blocks.
//!
//! ## Architecture
//!
//! ```text
//! outline + holes
//!   → bridge    (per hole: column through the hole, two boundary chains)
//!   → split     (cut the piece containing the hole along the bridge)
//!   → triangulate (ear clipping on each simple piece)
//!   → merge     (concatenate all pieces)
//!   → extrude   (optional: front, back and side walls)
//! ```
//!
//! The triangulator only accepts simple polygons. Holes are removed by
//! cutting the outline along a vertical bridge through each hole, which
//! leaves two simple polygons per hole. Holes are processed in order, each
//! one cutting whichever piece currently contains it.
//!
//! ## Conventions
//!
//! Rings are clockwise under `Σ (x_next − x_curr)(y_next + y_curr) > 0`.
//! Counter-clockwise input is reversed, with a warning. Holes must lie
//! strictly inside the outline and must not touch each other. A hole may
//! sit on an earlier hole's bridge column but must not be crossed by it.
//!
//! ## Usage
//!
//! ```rust
//! use outline_mesh::{create_flat_mesh, shapes};
//!
//! let mesh = create_flat_mesh(&shapes::cheese_outline(), &shapes::cheese_holes()).unwrap();
//! assert!((mesh.triangle_area_sum() - 20.0).abs() < 1e-9);
//! ```

pub mod bridge;
pub mod error;
pub mod export;
pub mod extrude;
pub mod geometry;
pub mod mesh;
pub mod shapes;
pub mod split;
pub mod triangulate;

pub use bridge::{build_bridge, column_range, SplitLine};
pub use config::constants::GlobalConfig;
pub use error::{MeshError, MeshResult};
pub use export::MeshBuffers;
pub use mesh::Mesh;
pub use split::{cut, merge_meshes, SplitMesh};
pub use triangulate::triangulate;

use config::constants::{areas_match, MIN_POLYGON_VERTICES};
use geometry::{
    doubled_area, normalize_winding, point_in_polygon, signed_area, simplify_collinear,
};
use glam::DVec2;
use log::{debug, error, warn};

/// Builds a flat (z = 0) mesh from an outline and its holes.
///
/// With no holes the outline is triangulated directly. Otherwise each hole
/// is bridged and cut out of the piece that contains it, and the pieces are
/// concatenated at the end. The result carries one boundary loop per piece.
///
/// # Errors
///
/// - [`MeshError::InvalidVertices`] if the outline or a hole has fewer than
///   three points.
/// - [`MeshError::InvalidHeightRange`] if a hole is not inside the outline.
/// - Any error from bridging, cutting or triangulating, unchanged.
///
/// No partial mesh is returned on failure.
pub fn create_flat_mesh(outline: &[DVec2], holes: &[Vec<DVec2>]) -> MeshResult<Mesh> {
    if outline.len() < MIN_POLYGON_VERTICES {
        error!("outline rejected: {} points", outline.len());
        return Err(MeshError::InvalidVertices {
            count: outline.len(),
        });
    }

    let mut outline = outline.to_vec();
    if normalize_winding(&mut outline) {
        warn!("outline was counter-clockwise and has been reversed");
    }

    let triangles = stage("outline triangulation", triangulate(&outline))?;
    let mut pieces = vec![Mesh::from_polygon(&outline, triangles)];

    for (index, hole) in holes.iter().enumerate() {
        if hole.len() < MIN_POLYGON_VERTICES {
            error!("hole {index} rejected: {} points", hole.len());
            return Err(MeshError::InvalidVertices { count: hole.len() });
        }
        let mut hole = hole.clone();
        if normalize_winding(&mut hole) {
            warn!("hole {index} was counter-clockwise and has been reversed");
        }

        let (target, split) = stage("hole cut", cut_out_hole(&pieces, &hole, &outline, index))?;
        debug!(
            "hole {index}: piece {target} split into {} and {} vertices",
            split.left.vertex_count(),
            split.right.vertex_count()
        );
        pieces.splice(target..=target, split.into_pieces());
    }

    let mut pieces = pieces.into_iter();
    let mut mesh = pieces
        .next()
        .ok_or_else(|| MeshError::failure("no mesh pieces to assemble"))?;
    for piece in pieces {
        mesh.merge(&piece);
    }
    mesh.compute_normals();

    Ok(mesh)
}

/// Extrudes a flat mesh into a block `depth` deep.
///
/// See [`extrude::extrude`].
pub fn extrude_mesh(mesh: &Mesh, depth: f64) -> MeshResult<Mesh> {
    stage("extrusion", extrude::extrude(mesh, depth))
}

/// Builds a solid block from an outline and its holes.
///
/// Collapses collinear runs in the outline first when
/// [`GlobalConfig::simplify_outline`] is set, then extrudes the flat mesh by
/// [`GlobalConfig::extrude_depth`].
pub fn generate_solid(
    outline: &[DVec2],
    holes: &[Vec<DVec2>],
    config: &GlobalConfig,
) -> MeshResult<Mesh> {
    let flat = if config.simplify_outline {
        let simplified = simplify_collinear(outline);
        debug!(
            "outline simplified from {} to {} points",
            outline.len(),
            simplified.len()
        );
        create_flat_mesh(&simplified, holes)?
    } else {
        create_flat_mesh(outline, holes)?
    };
    extrude_mesh(&flat, config.extrude_depth)
}

/// Cuts a clockwise `hole` out of the piece that contains it.
///
/// The piece is found with a point strictly inside the hole, so holes that
/// touch an earlier seam still land in the right piece. The bridge column
/// runs through the hole's first vertex; when that column lies along an
/// earlier seam the cut fails or loses area, so each vertex is tried as the
/// start in turn. The first error is returned if none of them works.
fn cut_out_hole(
    pieces: &[Mesh],
    hole: &[DVec2],
    outline: &[DVec2],
    index: usize,
) -> MeshResult<(usize, SplitMesh)> {
    let inside = interior_point(hole)?;
    let Some(target) = pieces
        .iter()
        .position(|piece| point_in_polygon(&piece.boundary_ring(0), inside))
    else {
        return Err(MeshError::InvalidHeightRange {
            hole: bridge::y_extent(hole),
            range: bridge::y_extent(outline),
        });
    };

    let ring = pieces[target].boundary_ring(0);
    let expected = signed_area(&ring) - signed_area(hole);
    let mut first_error = None;

    for start in 0..hole.len() {
        let mut rotated = hole.to_vec();
        rotated.rotate_left(start);

        let attempt = column_range(&ring, &rotated)
            .and_then(|range| build_bridge(&rotated, range))
            .and_then(|line| cut(&pieces[target], &line));
        let error = match attempt {
            Ok(split) if areas_match(expected, split.triangle_area_sum()) => {
                if start > 0 {
                    debug!("hole {index}: bridged from vertex {start}");
                }
                return Ok((target, split));
            }
            Ok(split) => MeshError::failure(format!(
                "pieces around hole {index} cover {} instead of {expected}",
                split.triangle_area_sum()
            )),
            Err(e) => e,
        };
        debug!("hole {index}: start vertex {start} rejected: {error}");
        first_error.get_or_insert(error);
    }

    Err(first_error
        .unwrap_or_else(|| MeshError::failure(format!("hole {index} has no vertices"))))
}

/// Centroid of the largest ear of a clockwise ring, which lies strictly
/// inside it.
fn interior_point(ring: &[DVec2]) -> MeshResult<DVec2> {
    triangulate(ring)?
        .into_iter()
        .map(|[a, b, c]| [ring[a as usize], ring[b as usize], ring[c as usize]])
        .max_by(|x, y| ear_area(x).total_cmp(&ear_area(y)))
        .map(|[a, b, c]| (a + b + c) / 3.0)
        .ok_or_else(|| MeshError::failure("hole has no interior"))
}

fn ear_area([a, b, c]: &[DVec2; 3]) -> f64 {
    doubled_area(*a, *b, *c).abs()
}

/// Logs a failing pipeline stage before handing the error back.
fn stage<T>(name: &str, result: MeshResult<T>) -> MeshResult<T> {
    result.map_err(|e| {
        error!("{name} failed: {e}");
        e
    })
}
