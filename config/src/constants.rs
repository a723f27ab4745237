//! # Configuration Constants
//!
//! Centralized constants for prism mesh generation.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Bounds on the end-face vertex count
//! - **Shape Defaults**: Values used when a parameter is not supplied

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance on the length of a unit normal.
///
/// Normals are produced analytically from `sin`/`cos`, so they deviate from
/// unit length only by rounding.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_TOLERANCE;
///
/// let n = [0.6_f64, 0.8, 0.0];
/// let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
/// assert!((len - 1.0).abs() < NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f64 = 1e-9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of vertices on an end face.
///
/// Fewer than three corners cannot enclose a face.
pub const MIN_VERTEX_COUNT: u32 = 3;

/// Maximum number of vertices on an end face.
///
/// Practical upper bound; past this the faceted prism is visually
/// indistinguishable from a smooth cylinder.
pub const MAX_VERTEX_COUNT: u32 = 60;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default number of vertices on an end face (hexagonal prism).
pub const DEFAULT_VERTEX_COUNT: u32 = 6;

/// Default vertical separation between the top and bottom end faces.
pub const DEFAULT_THICKNESS: f64 = 0.5;

/// Default distance from the end-face center to each corner.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default ratio between the end-face ellipse axes (1.0 is a circle).
pub const DEFAULT_VERTICAL_SQUASH: f64 = 1.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
