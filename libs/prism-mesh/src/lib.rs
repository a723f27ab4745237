//! # Prism Mesh
//!
//! Procedural mesh generation for the prism family: cylinders, cones,
//! frustums, and truncated or sheared variants.
//!
//! ## Architecture
//!
//! ```text
//! PrismParams → build_prism → Mesh { vertices, normals, triangles } → MeshSink
//!                   │
//!                   └─ fill_surface (caps and side walls)
//! ```
//!
//! ## Algorithms
//!
//! - **Triangulation**: recursive pairwise fan reduction over index rings
//! - **Normals**: analytic, either one per side face (flat) or one per
//!   corner (round)
//!
//! ## Usage
//!
//! ```rust
//! use prism_mesh::{FaceType, MeshGenerator, Prism, PrismParams};
//!
//! let params = PrismParams::default()
//!     .with_vertex_count(24)
//!     .with_face_type(FaceType::Round);
//! let mesh = Prism::new(params)?.generate_mesh();
//! assert_eq!(mesh.vertex_count(), 2 * 24 * 2);
//! # Ok::<(), prism_mesh::MeshError>(())
//! ```

pub mod error;
pub mod generator;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use generator::{render, MeshGenerator, MeshSink};
pub use mesh::Mesh;
pub use ops::fill_surface;
pub use primitives::{build_prism, FaceType, Prism, PrismParams, TopType};
