//! Mesh buffer export for rendering.
//!
//! This module flattens a [`Mesh`] into GPU-friendly buffers using `f32`
//! precision. The buffers are `serde`-serializable so a host can ship them
//! across a process or language boundary as-is.

use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};

/// Mesh buffers suitable for GPU rendering.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use outline_mesh::{create_flat_mesh, MeshBuffers};
///
/// let square = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(0.0, 3.0),
///     DVec2::new(3.0, 3.0),
///     DVec2::new(3.0, 0.0),
/// ];
/// let mesh = create_flat_mesh(&square, &[]).unwrap();
/// let buffers = MeshBuffers::from(&mesh);
///
/// assert_eq!(buffers.vertex_count(), 4);
/// assert_eq!(buffers.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub positions: Vec<f32>,

    /// Vertex normals as flat array, empty if the mesh had none.
    pub normals: Vec<f32>,

    /// Texture coordinates as flat array [u, v, u, v, ...].
    pub uvs: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl From<&Mesh> for MeshBuffers {
    fn from(mesh: &Mesh) -> Self {
        Self {
            positions: mesh.vertices_f32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            uvs: mesh.uvs_f32(),
            indices: mesh.indices_u32(),
        }
    }
}
