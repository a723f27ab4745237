//! # Surface Filling Tests

use super::*;
use glam::DVec2;
use std::collections::BTreeSet;
use std::f64::consts::TAU;

/// Counter-clockwise unit polygon with `n` corners.
fn regular_polygon(n: usize) -> Vec<DVec2> {
    (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            DVec2::new(theta.cos(), theta.sin())
        })
        .collect()
}

fn signed_area(points: &[DVec2], tri: [u32; 3]) -> f64 {
    let a = points[tri[0] as usize];
    let b = points[tri[1] as usize];
    let c = points[tri[2] as usize];
    (b - a).perp_dot(c - a) / 2.0
}

fn ring(n: u32) -> Vec<u32> {
    (0..n).collect()
}

#[test]
fn test_fill_degenerate_rings() {
    assert!(fill_surface(&[], false).is_empty());
    assert!(fill_surface(&[7], true).is_empty());
    assert!(fill_surface(&[7, 8], false).is_empty());
}

#[test]
fn test_fill_triangle_counter_clockwise() {
    assert_eq!(fill_surface(&[4, 5, 6], false), vec![[4, 5, 6]]);
}

#[test]
fn test_fill_triangle_clockwise() {
    assert_eq!(fill_surface(&[4, 5, 6], true), vec![[4, 6, 5]]);
}

#[test]
fn test_fill_quad() {
    assert_eq!(fill_surface(&[0, 1, 2, 3], false), vec![[0, 1, 2], [2, 3, 0]]);
    assert_eq!(fill_surface(&[0, 1, 2, 3], true), vec![[0, 2, 1], [2, 0, 3]]);
}

#[test]
fn test_fill_pentagon_order() {
    // Outer ears first, then the surviving triangle 0-2-4
    assert_eq!(
        fill_surface(&ring(5), false),
        vec![[0, 1, 2], [2, 3, 4], [0, 2, 4]]
    );
}

#[test]
fn test_fill_hexagon_order() {
    assert_eq!(
        fill_surface(&ring(6), false),
        vec![[0, 1, 2], [2, 3, 4], [4, 5, 0], [0, 2, 4]]
    );
}

#[test]
fn test_fill_triangle_count() {
    for n in 3..=64 {
        for clockwise in [false, true] {
            let tris = fill_surface(&ring(n), clockwise);
            assert_eq!(tris.len(), (n - 2) as usize, "n = {n}, clockwise = {clockwise}");
        }
    }
}

#[test]
fn test_fill_conserves_indices() {
    for n in 3..=64u32 {
        // Offset and stride so slot numbers differ from ring positions
        let indices: Vec<u32> = (0..n).map(|i| 100 + i * 3).collect();
        let tris = fill_surface(&indices, true);

        let used: BTreeSet<u32> = tris.iter().flatten().copied().collect();
        let expected: BTreeSet<u32> = indices.iter().copied().collect();
        assert_eq!(used, expected, "n = {n}");
    }
}

#[test]
fn test_fill_triangles_have_distinct_corners() {
    for n in 3..=64 {
        for tri in fill_surface(&ring(n), false) {
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
    }
}

#[test]
fn test_fill_winding_inverts_pairwise() {
    for n in 3..=32 {
        let ccw = fill_surface(&ring(n), false);
        let cw = fill_surface(&ring(n), true);
        assert_eq!(ccw.len(), cw.len());
        for (a, b) in ccw.iter().zip(&cw) {
            assert_eq!(*b, [a[0], a[2], a[1]]);
        }
    }
}

#[test]
fn test_fill_winding_matches_geometry() {
    for n in 3..=60 {
        let points = regular_polygon(n);
        let indices = ring(n as u32);

        for tri in fill_surface(&indices, false) {
            assert!(signed_area(&points, tri) > 0.0, "n = {n}, tri = {tri:?}");
        }
        for tri in fill_surface(&indices, true) {
            assert!(signed_area(&points, tri) < 0.0, "n = {n}, tri = {tri:?}");
        }
    }
}

#[test]
fn test_fill_covers_polygon_area() {
    for n in 3..=60 {
        let points = regular_polygon(n);
        let polygon_area = 0.5 * n as f64 * (TAU / n as f64).sin();

        let covered: f64 = fill_surface(&ring(n as u32), false)
            .into_iter()
            .map(|tri| signed_area(&points, tri))
            .sum();
        approx::assert_relative_eq!(covered, polygon_area, epsilon = 1e-9);
    }
}

#[test]
fn test_fill_into_appends() {
    let mut out = vec![[9, 9, 9]];
    fill_surface_into(&[0, 1, 2, 3], false, &mut out);
    assert_eq!(out, vec![[9, 9, 9], [0, 1, 2], [2, 3, 0]]);
}
