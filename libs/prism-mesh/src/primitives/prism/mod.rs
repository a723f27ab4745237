//! # Prism Primitive
//!
//! Generates closed prisms: cylinders, cones, frustums, truncated and
//! sheared variants, with faceted or smooth side walls.
//!
//! ## Vertex Layout
//!
//! Every corner is stored `n = normals_per_vertex` times so that each copy
//! can carry its own normal. The top ring fills the first half of the
//! vertex buffer, the bottom ring the second half:
//!
//! ```text
//! slot:   0    1    2  | 3    4    5  | ...  | half+0  half+1 ...
//!       [cap  left right][cap left right] ...  [bottom ring, same layout]
//!        \__ corner 0 _/ \__ corner 1 _/
//! ```
//!
//! Round walls drop the right slot: the single side slot of a corner is
//! shared by the faces on either side of it.

mod params;


pub use params::{FaceType, PrismParams};

use crate::error::MeshError;
use crate::generator::MeshGenerator;
use crate::mesh::Mesh;
use crate::ops::fill::fill_surface_into;
use crate::primitives::ring::points_about_ellipse;
use glam::DVec3;
use std::f64::consts::TAU;

/// A validated prism description.
///
/// # Example
///
/// ```rust
/// use prism_mesh::{MeshGenerator, Prism, PrismParams};
///
/// let prism = Prism::new(PrismParams::default().with_vertex_count(5))?;
/// let mesh = prism.generate_mesh();
/// assert_eq!(prism.name(), "Prism (5)");
/// assert_eq!(mesh.name(), prism.name());
/// # Ok::<(), prism_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Prism {
    params: PrismParams,
}

impl Prism {
    /// Validates `params` and wraps them.
    pub fn new(params: PrismParams) -> Result<Self, MeshError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the shape parameters.
    pub fn params(&self) -> &PrismParams {
        &self.params
    }
}

impl MeshGenerator for Prism {
    fn generate_mesh(&self) -> Mesh {
        build_prism(&self.params)
    }

    fn name(&self) -> String {
        prism_name(self.params.vertex_count)
    }
}

fn prism_name(vertex_count: u32) -> String {
    format!("Prism ({})", vertex_count)
}

/// Builds the vertex, normal and triangle buffers of a prism.
///
/// Parameters are not validated here; see [`PrismParams::validate`].
/// Degenerate shapes (zero radius, zero thickness, extreme truncation)
/// produce whatever geometry the math dictates.
///
/// # Example
///
/// ```rust
/// use prism_mesh::primitives::{build_prism, PrismParams};
///
/// let mesh = build_prism(&PrismParams::default().with_vertex_count(4));
/// assert_eq!(mesh.vertex_count(), 2 * 4 * 3);
/// assert_eq!(mesh.triangle_count(), 2 * 2 + 4 * 2);
/// ```
pub fn build_prism(params: &PrismParams) -> Mesh {
    let slots = params.face_type.normals_per_vertex();
    let corner_count = params.vertex_count as usize;
    let half = corner_count * slots;

    let corners = points_about_ellipse(params.vertex_count, params.top_type, params.vertical_squash);

    // Positions
    let radius = params.radius;
    let incline = params.truncation_angle.tan();
    let mut vertices = vec![DVec3::ZERO; 2 * half];

    for (i, corner) in corners.iter().enumerate() {
        let top = DVec3::new(corner.x * radius, 0.0, corner.y * radius);
        let bottom = DVec3::new(
            (corner.x + params.shear.x) * params.frustum_scale.x * radius,
            -params.thickness - incline * corner.x * radius,
            (corner.y + params.shear.y) * params.frustum_scale.y * radius,
        );

        let group = i * slots..(i + 1) * slots;
        vertices[group.clone()].fill(top);
        vertices[group.start + half..group.end + half].fill(bottom);
    }

    let mut triangles = Vec::with_capacity(triangle_capacity(params));

    // End caps use slot 0 of every corner
    if !params.hide_top {
        let ring: Vec<u32> = (0..half).step_by(slots).map(|k| k as u32).collect();
        tracing::trace!(corners = ring.len(), "filling top cap");
        fill_surface_into(&ring, true, &mut triangles);
    }

    if !params.hide_bottom {
        let ring: Vec<u32> = (half..2 * half).step_by(slots).map(|k| k as u32).collect();
        tracing::trace!(corners = ring.len(), "filling bottom cap");
        fill_surface_into(&ring, false, &mut triangles);
    }

    // Side walls and normals
    let mut normals = vec![DVec3::ZERO; 2 * half];
    let bottom_normal = DVec3::new(
        -params.truncation_angle.sin(),
        -params.truncation_angle.cos(),
        0.0,
    )
    .normalize();
    let side_skip = params.face_type.side_skip();
    let step = TAU / params.vertex_count as f64;

    for (i, corner) in corners.iter().enumerate() {
        let cap = i * slots;
        normals[cap] = DVec3::Y;
        normals[cap + half] = bottom_normal;

        let top_left = cap + 1;
        let bottom_left = top_left + half;
        let top_right = (top_left + side_skip) % half;
        let bottom_right = top_right + half;

        let quad = [top_left, bottom_left, bottom_right, top_right].map(|k| k as u32);

        if !params.hidden_side_faces.contains(&(i as u32)) {
            fill_surface_into(&quad, true, &mut triangles);
        }

        match params.face_type {
            FaceType::Flat => {
                // Bisector of corners i and i + 1
                let angle = step * (i as f64 + 0.5 + params.top_type.step_offset());
                let normal = DVec3::new(angle.cos(), 0.0, angle.sin());
                for k in quad {
                    normals[k as usize] = normal;
                }
            }
            FaceType::Round => {
                // The right edge is written as the next face's left edge
                let normal = DVec3::new(corner.x, 0.0, corner.y).normalize_or_zero();
                normals[top_left] = normal;
                normals[bottom_left] = normal;
            }
        }
    }

    if params.show_insides {
        let outward = triangles.len();
        for t in 0..outward {
            let [a, b, c] = triangles[t];
            triangles.push([a, c, b]);
        }
    }

    tracing::debug!(
        vertex_count = params.vertex_count,
        face_type = ?params.face_type,
        vertices = vertices.len(),
        triangles = triangles.len(),
        "built prism mesh"
    );

    Mesh::from_buffers(
        prism_name(params.vertex_count),
        vertices,
        normals,
        triangles,
    )
}

/// Number of triangles [`build_prism`] emits for `params`.
pub fn triangle_capacity(params: &PrismParams) -> usize {
    let cap = (params.vertex_count as usize).saturating_sub(2);
    let sides = (0..params.vertex_count)
        .filter(|face| !params.hidden_side_faces.contains(face))
        .count();

    let mut count = 2 * sides;
    if !params.hide_top {
        count += cap;
    }
    if !params.hide_bottom {
        count += cap;
    }
    if params.show_insides {
        count *= 2;
    }
    count
}
