// Copyright 2025 Lars Brubaker
// Shared test utilities for quadcurve-tess tests.

#![allow(dead_code)]

use quadcurve_tess::geom::{polygon_signed_area, triangle_signed_area, Point, Real};
use quadcurve_tess::{Config, CurveTessellator};

/// `sin(i)` for i in 0..n, the signal the demo draws.
pub fn sine_samples(n: usize) -> Vec<Real> {
    (0..n).map(|i| (i as Real).sin()).collect()
}

/// Tessellates `samples` with a default config sized to fit them.
pub fn tessellate_samples(samples: &[Real]) -> CurveTessellator {
    let mut tess = CurveTessellator::new(Config::with_sample_count(samples.len()))
        .expect("default config is valid");
    tess.tessellate(samples)
        .unwrap_or_else(|e| panic!("tessellation failed: {}", e));
    tess
}

/// The three expanded corners of control triangle `i` from a flat vertex buffer.
pub fn control_triangle(vertices: &[Real], i: usize) -> [Point; 3] {
    let b = i * 9;
    [
        [vertices[b], vertices[b + 1]],
        [vertices[b + 3], vertices[b + 4]],
        [vertices[b + 6], vertices[b + 7]],
    ]
}

pub fn triangle_area(tri: [Point; 3]) -> Real {
    triangle_signed_area(tri[0], tri[1], tri[2]).abs()
}

/// Total absolute area of the triangles in `indices`.
pub fn total_triangulation_area(poly: &[Point], indices: &[u32]) -> Real {
    indices
        .chunks(3)
        .map(|t| triangle_area([poly[t[0] as usize], poly[t[1] as usize], poly[t[2] as usize]]))
        .sum()
}

/// Indices in range, right count, every triangle non-degenerate, union
/// area equal to the polygon's.
pub fn verify_triangulation(poly: &[Point], indices: &[u32], epsilon: Real) {
    assert_eq!(
        indices.len(),
        3 * (poly.len() - 2),
        "expected 3 * (V - 2) indices for V = {}",
        poly.len()
    );
    for (i, &idx) in indices.iter().enumerate() {
        assert!(
            (idx as usize) < poly.len(),
            "index[{}] = {} out of range (vertex_count={})",
            i,
            idx,
            poly.len()
        );
    }
    for (i, t) in indices.chunks(3).enumerate() {
        let area = triangle_area([poly[t[0] as usize], poly[t[1] as usize], poly[t[2] as usize]]);
        assert!(area > epsilon, "triangle {} is degenerate (area={})", i, area);
    }
    let expected = polygon_signed_area(poly).abs();
    let covered = total_triangulation_area(poly, indices);
    assert!(
        (covered - expected).abs() <= expected * 1e-4 + 1e-6,
        "triangles cover {} but polygon area is {}",
        covered,
        expected
    );
}
