//! # Prism Parameters
//!
//! Shape description consumed by [`build_prism`](super::build_prism).

use crate::error::MeshError;
use crate::primitives::ring::TopType;
use config::constants::{
    DEFAULT_RADIUS, DEFAULT_THICKNESS, DEFAULT_VERTEX_COUNT, DEFAULT_VERTICAL_SQUASH,
    MAX_VERTEX_COUNT, MIN_VERTEX_COUNT,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shading of the side walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceType {
    /// One normal per side face; corners are split between faces
    #[default]
    Flat,
    /// One radial normal per corner, shared by both adjacent faces
    Round,
}

impl FaceType {
    /// Number of vertex slots each corner is replicated into.
    ///
    /// Slot 0 carries the cap normal. Flat walls need two more slots (one per
    /// adjacent face), round walls share a single side slot.
    #[inline]
    pub fn normals_per_vertex(self) -> usize {
        match self {
            FaceType::Flat => 3,
            FaceType::Round => 2,
        }
    }

    /// Distance in slots from a side face's top-left slot to its top-right slot.
    ///
    /// The left edge uses the first side slot of corner `i`, the right edge
    /// the last side slot of corner `i + 1`. With `n` slots per corner that is
    /// `n + (n - 2) = 2 * (n - 1)`: 4 for flat walls, 2 for round ones.
    #[inline]
    pub fn side_skip(self) -> usize {
        2 * (self.normals_per_vertex() - 1)
    }
}

/// Parameters of a prism, cylinder or frustum.
///
/// The top end face lies in the `y = 0` plane; the bottom end face sits
/// `thickness` below it and is the only one affected by `shear`,
/// `frustum_scale` and `truncation_angle`.
///
/// Missing fields in a serialized document take their defaults.
///
/// # Example
///
/// ```rust
/// use prism_mesh::primitives::{FaceType, PrismParams};
///
/// let params = PrismParams::default()
///     .with_vertex_count(12)
///     .with_face_type(FaceType::Round)
///     .with_thickness(2.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismParams {
    /// Number of corners on each end face
    pub vertex_count: u32,
    /// Rotation of the end-face ring
    pub top_type: TopType,
    /// Ratio between the end-face ellipse axes
    pub vertical_squash: f64,
    /// Offset applied to the bottom end face
    pub shear: DVec2,
    /// Per-axis factor applied to the bottom end face
    pub frustum_scale: DVec2,
    /// Incline of the bottom end face, in radians
    pub truncation_angle: f64,
    /// Side wall shading
    pub face_type: FaceType,
    /// Vertical distance between the end faces
    pub thickness: f64,
    /// Distance from the end-face center to each corner
    pub radius: f64,
    /// Skip the top end face
    pub hide_top: bool,
    /// Skip the bottom end face
    pub hide_bottom: bool,
    /// Also emit every triangle with reversed winding
    pub show_insides: bool,
    /// Side faces to skip; face `i` spans corners `i` and `i + 1`
    pub hidden_side_faces: BTreeSet<u32>,
}

impl Default for PrismParams {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            top_type: TopType::default(),
            vertical_squash: DEFAULT_VERTICAL_SQUASH,
            shear: DVec2::ZERO,
            frustum_scale: DVec2::ONE,
            truncation_angle: 0.0,
            face_type: FaceType::default(),
            thickness: DEFAULT_THICKNESS,
            radius: DEFAULT_RADIUS,
            hide_top: false,
            hide_bottom: false,
            show_insides: false,
            hidden_side_faces: BTreeSet::new(),
        }
    }
}

impl PrismParams {
    /// Parses a JSON parameter document and validates it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism_mesh::primitives::{PrismParams, TopType};
    ///
    /// let params = PrismParams::from_json(r#"{ "vertex_count": 8, "top_type": "pointy" }"#)?;
    /// assert_eq!(params.vertex_count, 8);
    /// assert_eq!(params.top_type, TopType::Pointy);
    /// assert_eq!(params.radius, 1.0);
    /// # Ok::<(), prism_mesh::MeshError>(())
    /// ```
    pub fn from_json(source: &str) -> Result<Self, MeshError> {
        let params: Self = serde_json::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks the preconditions of the mesh builder.
    ///
    /// Rejects vertex counts outside `MIN_VERTEX_COUNT..=MAX_VERTEX_COUNT`,
    /// non-finite numbers, and hidden side faces that do not exist.
    /// Degenerate but finite shapes (zero radius, zero thickness) pass.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.check().map_err(|message| {
            tracing::warn!(%message, "rejected prism parameters");
            MeshError::invalid_config(message)
        })
    }

    fn check(&self) -> Result<(), String> {
        if !(MIN_VERTEX_COUNT..=MAX_VERTEX_COUNT).contains(&self.vertex_count) {
            return Err(format!(
                "vertex_count must be within {}..={}: {}",
                MIN_VERTEX_COUNT, MAX_VERTEX_COUNT, self.vertex_count
            ));
        }

        let scalars = [
            ("vertical_squash", self.vertical_squash),
            ("truncation_angle", self.truncation_angle),
            ("thickness", self.thickness),
            ("radius", self.radius),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(format!("{} must be finite: {}", name, value));
            }
        }

        if !self.shear.is_finite() {
            return Err(format!("shear must be finite: {}", self.shear));
        }
        if !self.frustum_scale.is_finite() {
            return Err(format!("frustum_scale must be finite: {}", self.frustum_scale));
        }

        if let Some(face) = self
            .hidden_side_faces
            .iter()
            .find(|&&face| face >= self.vertex_count)
        {
            return Err(format!(
                "hidden side face {} does not exist on a {}-sided prism",
                face, self.vertex_count
            ));
        }

        Ok(())
    }

    /// Sets the number of corners on each end face.
    pub fn with_vertex_count(mut self, vertex_count: u32) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Sets the end-face ring rotation.
    pub fn with_top_type(mut self, top_type: TopType) -> Self {
        self.top_type = top_type;
        self
    }

    /// Sets the side wall shading.
    pub fn with_face_type(mut self, face_type: FaceType) -> Self {
        self.face_type = face_type;
        self
    }

    /// Sets the end-face ellipse axis ratio.
    pub fn with_vertical_squash(mut self, vertical_squash: f64) -> Self {
        self.vertical_squash = vertical_squash;
        self
    }

    /// Sets the bottom end-face offset.
    pub fn with_shear(mut self, shear: DVec2) -> Self {
        self.shear = shear;
        self
    }

    /// Sets the bottom end-face scale.
    pub fn with_frustum_scale(mut self, frustum_scale: DVec2) -> Self {
        self.frustum_scale = frustum_scale;
        self
    }

    /// Sets the bottom end-face incline, in radians.
    pub fn with_truncation_angle(mut self, truncation_angle: f64) -> Self {
        self.truncation_angle = truncation_angle;
        self
    }

    /// Sets the distance between the end faces.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the corner distance from the end-face center.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Hides or shows the top end face.
    pub fn with_hide_top(mut self, hide: bool) -> Self {
        self.hide_top = hide;
        self
    }

    /// Hides or shows the bottom end face.
    pub fn with_hide_bottom(mut self, hide: bool) -> Self {
        self.hide_bottom = hide;
        self
    }

    /// Enables or disables inward-facing duplicates of every triangle.
    pub fn with_show_insides(mut self, show: bool) -> Self {
        self.show_insides = show;
        self
    }

    /// Hides side face `face`.
    pub fn with_hidden_side_face(mut self, face: u32) -> Self {
        self.hidden_side_faces.insert(face);
        self
    }
}
