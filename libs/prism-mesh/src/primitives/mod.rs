//! # Primitives
//!
//! Mesh generation for the prism family and the end-face rings it is
//! built from.

pub mod prism;
pub mod ring;

pub use prism::{build_prism, triangle_capacity, FaceType, Prism, PrismParams};
pub use ring::{points_about_ellipse, TopType};
