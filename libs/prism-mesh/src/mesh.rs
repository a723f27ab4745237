//! # Mesh Data Structure
//!
//! Renderable buffer set: positions, per-vertex normals, triangle indices.

use config::constants::{EPSILON, NORMAL_TOLERANCE};
use glam::DVec3;

/// A triangle mesh with index-aligned positions and normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer boundary.
///
/// # Example
///
/// ```rust
/// use prism_mesh::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::from_buffers(
///     "Triangle",
///     vec![DVec3::ZERO, DVec3::X, DVec3::Z],
///     vec![DVec3::Y; 3],
///     vec![[0, 2, 1]],
/// );
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Display name, e.g. "Prism (6)"
    name: String,
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// One normal per vertex
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Assembles a mesh from fully materialized buffers.
    ///
    /// `normals` must be index-aligned with `vertices`.
    pub fn from_buffers(
        name: impl Into<String>,
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        Self {
            name: name.into(),
            vertices,
            normals,
            triangles,
        }
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
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

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the normal at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Normals are index-aligned with vertices
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.vertices.len() {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < EPSILON {
                return false;
            }
        }

        true
    }

    /// Returns true if every normal has unit length.
    pub fn has_unit_normals(&self) -> bool {
        self.normals
            .iter()
            .all(|n| (n.length() - 1.0).abs() < NORMAL_TOLERANCE)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten_f32(vectors: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vectors.len() * 3);
    for v in vectors {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
