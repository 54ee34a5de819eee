//! # Mesh Data Structure
//!
//! Triangle mesh with placeholder UVs, optional normals and the boundary
//! rings it was triangulated from.

use crate::error::{MeshError, MeshResult};
use glam::{DVec2, DVec3};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens when handing buffers to a renderer.
///
/// `boundaries` records the closed vertex loops that outline the mesh. Flat
/// meshes built from a polygon have exactly one; merged meshes carry one per
/// merged piece. Extrusion raises side walls along the stretches of these
/// loops that no other loop runs back along.
///
/// # Example
///
/// ```rust
/// use outline_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.uvs().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Texture coordinates, one zero vector per vertex
    uvs: Vec<DVec2>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
    /// Closed boundary loops as vertex indices
    boundaries: Vec<Vec<u32>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            uvs: Vec::new(),
            normals: None,
            boundaries: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            uvs: Vec::with_capacity(vertex_count),
            normals: None,
            boundaries: Vec::new(),
        }
    }

    /// Builds a flat mesh (z = 0) from a ring and its triangulation.
    ///
    /// The ring becomes the mesh's single boundary loop and normals are
    /// computed.
    pub fn from_polygon(ring: &[DVec2], triangles: Vec<[u32; 3]>) -> Self {
        let mut mesh = Self::with_capacity(ring.len(), triangles.len());
        for p in ring {
            mesh.add_vertex(p.extend(0.0));
        }
        mesh.triangles = triangles;
        mesh.boundaries.push((0..ring.len() as u32).collect());
        mesh.compute_normals();
        mesh
    }

    /// Builds a mesh from raw vertex and flat index buffers.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidMesh`] if there are no vertices, the index count
    /// is not a multiple of 3, or an index is out of range.
    pub fn from_buffers(vertices: Vec<DVec3>, indices: &[u32]) -> MeshResult<Self> {
        if vertices.is_empty() {
            return Err(MeshError::invalid_mesh("vertex buffer is empty"));
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::invalid_mesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        let vertex_count = vertices.len();
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::invalid_mesh(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }

        let triangles = indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        Ok(Self {
            uvs: vec![DVec2::ZERO; vertex_count],
            vertices,
            triangles,
            normals: None,
            boundaries: Vec::new(),
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.uvs.push(DVec2::ZERO);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Records a closed boundary loop.
    pub fn add_boundary(&mut self, ring: Vec<u32>) {
        self.boundaries.push(ring);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the recorded boundary loops.
    #[inline]
    pub fn boundaries(&self) -> &[Vec<u32>] {
        &self.boundaries
    }

    /// Boundary loops to walk, falling back to the whole vertex buffer as a
    /// single loop when none were recorded.
    pub fn boundary_loops(&self) -> Vec<Vec<u32>> {
        if self.boundaries.is_empty() && !self.vertices.is_empty() {
            return vec![(0..self.vertices.len() as u32).collect()];
        }
        self.boundaries.clone()
    }

    /// Positions of boundary loop `index` projected onto the XY plane.
    ///
    /// Empty if the loop does not exist.
    pub fn boundary_ring(&self, index: usize) -> Vec<DVec2> {
        self.boundary_loops()
            .get(index)
            .map(|ring| {
                ring.iter()
                    .map(|&i| self.vertices[i as usize].truncate())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes per-vertex normals as the average of adjacent face normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((&first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Sum of the unsigned triangle areas projected onto the XY plane.
    pub fn triangle_area_sum(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let a = self.vertices[tri[0] as usize].truncate();
                let b = self.vertices[tri[1] as usize].truncate();
                let c = self.vertices[tri[2] as usize].truncate();
                (b - a).perp_dot(c - a).abs() * 0.5
            })
            .sum()
    }

    /// Merges another mesh into this one.
    ///
    /// Indices and boundary loops of `other` are offset by this mesh's
    /// vertex count. Normals survive only if both sides had them.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.uvs.extend_from_slice(&other.uvs);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }

        for ring in &other.boundaries {
            self.boundaries
                .push(ring.iter().map(|&i| i + offset).collect());
        }

        match (&mut self.normals, &other.normals) {
            (Some(self_normals), Some(other_normals)) => {
                self_normals.extend_from_slice(other_normals);
            }
            _ => self.normals = None,
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle and boundary indices are valid
    /// - No triangle repeats a vertex index
    ///
    /// Zero-area triangles are allowed: ear clipping keeps collinear
    /// vertices and may emit slivers through them.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let triangles_ok = self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        });
        let boundaries_ok = self
            .boundaries
            .iter()
            .flatten()
            .all(|&i| i < vertex_count);

        triangles_ok && boundaries_ok && self.uvs.len() == self.vertices.len()
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }

    /// Exports texture coordinates as f32 array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }
}
