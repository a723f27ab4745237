//! # Generator and Sink Seams
//!
//! A host asks a [`MeshGenerator`] for fresh buffers whenever it decides the
//! shape is stale, then hands them to whatever owns the renderer through a
//! [`MeshSink`]. Neither side is stateful from this crate's point of view.

use crate::mesh::Mesh;

/// A shape that can produce its mesh.
///
/// Each call builds new buffers; implementors hold only their parameters.
pub trait MeshGenerator {
    /// Builds the mesh for the current parameters.
    fn generate_mesh(&self) -> Mesh;

    /// Display name of the shape; matches the name of the generated mesh.
    fn name(&self) -> String;
}

/// Receiver of finished meshes, typically a GPU upload layer.
pub trait MeshSink {
    /// Takes ownership of a freshly generated mesh.
    fn upload(&mut self, mesh: Mesh);
}

/// Collects meshes in generation order.
impl MeshSink for Vec<Mesh> {
    fn upload(&mut self, mesh: Mesh) {
        self.push(mesh);
    }
}

/// Regenerates `generator`'s mesh and passes it to `sink`.
///
/// # Example
///
/// ```rust
/// use prism_mesh::{render, Prism, PrismParams};
///
/// let prism = Prism::new(PrismParams::default())?;
/// let mut uploaded: Vec<prism_mesh::Mesh> = Vec::new();
/// render(&prism, &mut uploaded);
/// assert_eq!(uploaded.len(), 1);
/// # Ok::<(), prism_mesh::MeshError>(())
/// ```
pub fn render<G, S>(generator: &G, sink: &mut S)
where
    G: MeshGenerator + ?Sized,
    S: MeshSink + ?Sized,
{
    let mesh = generator.generate_mesh();
    tracing::debug!(
        name = mesh.name(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "uploading mesh"
    );
    sink.upload(mesh);
}
