//! # End-Face Rings
//!
//! Evenly spaced corner positions around an ellipse.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Orientation of the end-face polygon.
///
/// `Pointy` puts the first corner on the +X axis; `Flat` rotates the ring by
/// half a step so an edge faces +X instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopType {
    Pointy,
    #[default]
    Flat,
}

impl TopType {
    /// Angular offset of the first corner, as a fraction of one step.
    #[inline]
    pub fn step_offset(self) -> f64 {
        match self {
            TopType::Pointy => 0.0,
            TopType::Flat => 0.5,
        }
    }
}

/// Returns `count` points on an ellipse with unit X radius and Y radius
/// `vertical_squash`, in counter-clockwise order.
///
/// Point `i` sits at angle `TAU * (i + offset) / count`, where `offset`
/// comes from [`TopType::step_offset`].
///
/// # Example
///
/// ```rust
/// use prism_mesh::primitives::{points_about_ellipse, TopType};
///
/// let ring = points_about_ellipse(4, TopType::Pointy, 1.0);
/// assert_eq!(ring.len(), 4);
/// assert!((ring[0].x - 1.0).abs() < 1e-12);
/// ```
pub fn points_about_ellipse(count: u32, top_type: TopType, vertical_squash: f64) -> Vec<DVec2> {
    let offset = top_type.step_offset();

    (0..count)
        .map(|i| {
            let theta = TAU * ((i as f64 + offset) / count as f64);
            DVec2::new(theta.cos(), theta.sin() * vertical_squash)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_length() {
        for n in 3..=60 {
            assert_eq!(points_about_ellipse(n, TopType::Flat, 1.0).len(), n as usize);
        }
    }

    #[test]
    fn test_pointy_starts_on_x_axis() {
        let ring = points_about_ellipse(6, TopType::Pointy, 1.0);
        assert_relative_eq!(ring[0].x, 1.0);
        assert_relative_eq!(ring[0].y, 0.0);
    }

    #[test]
    fn test_flat_starts_half_step_later() {
        let ring = points_about_ellipse(4, TopType::Flat, 1.0);
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(ring[0].x, half, epsilon = 1e-12);
        assert_relative_eq!(ring[0].y, half, epsilon = 1e-12);
    }

    #[test]
    fn test_points_on_unit_circle() {
        for p in points_about_ellipse(17, TopType::Pointy, 1.0) {
            assert_relative_eq!(p.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_vertical_squash_scales_y_only() {
        let round = points_about_ellipse(8, TopType::Flat, 1.0);
        let squashed = points_about_ellipse(8, TopType::Flat, 0.25);
        for (r, s) in round.iter().zip(&squashed) {
            assert_eq!(r.x, s.x);
            assert_relative_eq!(r.y * 0.25, s.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_points_evenly_spaced() {
        let ring = points_about_ellipse(9, TopType::Flat, 1.0);
        let step = TAU / 9.0;
        for i in 0..9 {
            let a = ring[i];
            let b = ring[(i + 1) % 9];
            assert_relative_eq!(a.angle_between(b), step, epsilon = 1e-9);
            // Counter-clockwise order
            assert!(a.perp_dot(b) > 0.0);
        }
    }
}
