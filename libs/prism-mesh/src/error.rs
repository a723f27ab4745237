//! # Mesh Errors
//!
//! Error types for mesh generation. Building a mesh from validated
//! parameters cannot fail; every variant here is raised at the boundary,
//! before a build starts.

use thiserror::Error;

/// Errors that can occur while preparing a mesh build.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Shape parameters violate a precondition of the builder
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Parameter document could not be parsed
    #[error("Invalid parameter document: {0}")]
    Json(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
