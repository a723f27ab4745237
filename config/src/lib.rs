//! # Config Crate
//!
//! Centralized configuration constants for prism mesh generation.
//! Parameter bounds, shape defaults and numeric tolerances live here so the
//! mesh crate and any host application agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_VERTEX_COUNT, MAX_VERTEX_COUNT, MIN_VERTEX_COUNT};
//!
//! // Parameter sets outside this range are rejected before building
//! assert!((MIN_VERTEX_COUNT..=MAX_VERTEX_COUNT).contains(&DEFAULT_VERTEX_COUNT));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values and small helpers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
