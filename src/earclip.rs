// Copyright 2025 Lars Brubaker
// License: MIT
//
// Ear-clipping triangulation of a simple polygon without holes.
//
// Works on concave boundaries: a vertex is only clipped when it is strictly
// convex with respect to the polygon's winding, no other remaining vertex
// lies strictly inside its triangle and none lies on the new diagonal.
// Orientation tests go through `geom::orient_sign`, so runs of vertices that
// are collinear up to rounding behave as exactly collinear. Each ear test
// counts as one iteration and the search gives up after V^2 of them.

use log::{debug, trace};

use crate::error::TessError;
use crate::geom::{
    on_open_segment, orient_sign, point_strictly_in_triangle, polygon_signed_area, segments_intersect, vert_eq,
    Point,
};

/// Checks that no two non-adjacent edges of the closed polygon touch.
///
/// Edge `i` runs from vertex `i` to vertex `i + 1` (wrapping). Returns the
/// first offending pair of edges.
pub fn check_simple(poly: &[Point]) -> Result<(), TessError> {
    let n = poly.len();
    if n < 3 {
        return Err(TessError::TooFewVertices(n));
    }
    for i in 0..n {
        let (a0, a1) = (poly[i], poly[(i + 1) % n]);
        if vert_eq(a0, a1) {
            return Err(TessError::SelfIntersecting { first: i, second: i });
        }
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }
            let (b0, b1) = (poly[j], poly[(j + 1) % n]);
            if segments_intersect(a0, a1, b0, b1) {
                return Err(TessError::SelfIntersecting { first: i, second: j });
            }
        }
    }
    Ok(())
}

/// Triangulates `poly` into `3 * (V - 2)` indices referencing its vertices.
/// Triangles keep the polygon's winding. A polygon whose edges cross or
/// touch is rejected with `SelfIntersecting`.
pub fn triangulate(poly: &[Point]) -> Result<Vec<u32>, TessError> {
    let n = poly.len();
    if n < 3 {
        return Err(TessError::TooFewVertices(n));
    }
    check_simple(poly)?;
    let area = polygon_signed_area(poly);
    if area == 0.0 || !area.is_finite() {
        return Err(TessError::DegeneratePolygon);
    }
    let winding: i8 = if area > 0.0 { 1 } else { -1 };

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut indices = Vec::with_capacity(3 * (n - 2));
    let max_iterations = n * n;
    let mut iterations = 0;
    // Resume the search where the last ear was cut; keeps the fan from
    // restarting at vertex 0 every time.
    let mut cursor = 0;

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut ear = None;
        for step in 0..m {
            iterations += 1;
            if iterations > max_iterations {
                return Err(TessError::TriangulationFailed { iterations: max_iterations, remaining: m });
            }
            let i = (cursor + step) % m;
            if is_ear(poly, &remaining, i, winding) {
                ear = Some(i);
                break;
            }
        }
        // With no ear left, a vertex lying between its neighbours goes
        // instead; its triangle has no area.
        let i = match ear.or_else(|| find_collinear(poly, &remaining)) {
            Some(i) => i,
            None => return Err(TessError::TriangulationFailed { iterations, remaining: m }),
        };
        let (prev, cur, next) = neighbours(&remaining, i);
        if ear.is_none() {
            debug!("no ear among {} vertices, dropping collinear vertex {}", m, cur);
        }
        trace!("clip ear {} ({} vertices left)", cur, m - 1);
        indices.extend_from_slice(&[prev as u32, cur as u32, next as u32]);
        remaining.remove(i);
        cursor = if i == 0 { 0 } else { i - 1 };
    }

    indices.extend(remaining.iter().map(|&v| v as u32));
    Ok(indices)
}

#[inline]
fn neighbours(remaining: &[usize], i: usize) -> (usize, usize, usize) {
    let m = remaining.len();
    (remaining[(i + m - 1) % m], remaining[i], remaining[(i + 1) % m])
}

fn is_ear(poly: &[Point], remaining: &[usize], i: usize, winding: i8) -> bool {
    let (prev, cur, next) = neighbours(remaining, i);
    let (a, b, c) = (poly[prev], poly[cur], poly[next]);
    if orient_sign(a, b, c) != winding {
        return false;
    }
    remaining
        .iter()
        .filter(|&&v| v != prev && v != cur && v != next)
        .all(|&v| !point_strictly_in_triangle(poly[v], a, b, c) && !on_open_segment(poly[v], a, c))
}

fn find_collinear(poly: &[Point], remaining: &[usize]) -> Option<usize> {
    (0..remaining.len()).find(|&i| {
        let (prev, cur, next) = neighbours(remaining, i);
        on_open_segment(poly[cur], poly[prev], poly[next])
    })
}

/// Expands a triangle index list into line-segment index pairs, three edges per triangle.
pub fn wireframe_indices(triangles: &[u32]) -> Vec<u32> {
    triangles
        .chunks_exact(3)
        .flat_map(|t| [t[0], t[1], t[1], t[2], t[2], t[0]])
        .collect()
}
