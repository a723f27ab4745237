//! # Mesh Operations
//!
//! Index-level operations shared by the primitive builders.

pub mod fill;

pub use fill::{fill_surface, fill_surface_into};
