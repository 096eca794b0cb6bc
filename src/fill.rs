// Copyright 2025 Lars Brubaker
// License: MIT
//
// Fill polygon builder: the region under the curve as one closed boundary.
//
// The boundary follows the same anchors as the curve segments. Where a
// segment bulges below its chord the control point is added as well, so the
// flat fill stays under the curve and the curve pass only has to add the
// sliver between this boundary and the true curve.

use crate::config::{Config, FillClosure};
use crate::curve::{Concavity, CurveSegment};
use crate::geom::{Point, Real};

/// Builds the fill boundary for `segments` (as produced by `curve::tessellate`).
pub fn build_fill_polygon(segments: &[CurveSegment], config: &Config) -> Vec<Point> {
    let first = match segments.first() {
        Some(seg) => seg.start,
        None => return Vec::new(),
    };

    let mut chain = Vec::with_capacity(segments.len() * 2 + 1);
    chain.push(first);
    for seg in segments {
        if seg.concavity == Concavity::Downward {
            chain.push(seg.control);
        }
        chain.push(seg.end);
    }

    let min_y = chain.iter().map(|p| p[1]).fold(Real::INFINITY, Real::min);
    let base_y = min_y - config.baseline_offset;
    let last = chain[chain.len() - 1];

    let mut poly = Vec::with_capacity(chain.len() + 2);
    poly.push([first[0], base_y]);
    poly.extend(chain);
    if config.fill_closure == FillClosure::BaselineEdge {
        poly.push([last[0], base_y]);
    }
    poly
}

/// Flattens polygon vertices into `[x0, y0, x1, y1, ...]` for a vertex buffer.
pub fn flatten(poly: &[Point]) -> Vec<Real> {
    poly.iter().flat_map(|p| p.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::tessellate;
    use crate::earclip::check_simple;

    fn sine(n: usize) -> Vec<Real> {
        (0..n).map(|i| (i as Real).sin()).collect()
    }

    #[test]
    fn empty_segments_give_empty_polygon() {
        assert!(build_fill_polygon(&[], &Config::default()).is_empty());
    }

    #[test]
    fn baseline_vertices_sit_below_everything() {
        let config = Config::with_sample_count(20);
        let segs = tessellate(&sine(20), &config);
        let poly = build_fill_polygon(&segs, &config);
        let first = poly[0];
        let last = poly[poly.len() - 1];
        assert_eq!(first[0], segs[0].start[0]);
        assert_eq!(last[0], segs[segs.len() - 1].end[0]);
        assert_eq!(first[1], last[1]);
        for p in &poly[1..poly.len() - 1] {
            assert!(p[1] > first[1]);
        }
    }

    #[test]
    fn downward_segments_contribute_control_points() {
        let config = Config::with_sample_count(20);
        let segs = tessellate(&sine(20), &config);
        let downward = segs.iter().filter(|s| s.concavity == Concavity::Downward).count();
        let poly = build_fill_polygon(&segs, &config);
        // baseline + anchor 0 + one end per segment + controls + baseline
        assert_eq!(poly.len(), 1 + 1 + segs.len() + downward + 1);
    }

    #[test]
    fn single_vertex_closure_has_one_baseline_vertex() {
        let config = Config {
            fill_closure: FillClosure::SingleVertex,
            ..Config::with_sample_count(20)
        };
        let segs = tessellate(&sine(20), &config);
        let poly = build_fill_polygon(&segs, &config);
        assert_eq!(poly[poly.len() - 1], segs[segs.len() - 1].end);
    }

    #[test]
    fn sine_fill_is_simple() {
        for n in [8, 20, 80] {
            let config = Config::with_sample_count(n);
            let segs = tessellate(&sine(n), &config);
            let poly = build_fill_polygon(&segs, &config);
            assert!(check_simple(&poly).is_ok(), "n={}", n);
        }
    }

    #[test]
    fn baseline_fill_of_steep_zigzag_is_simple() {
        // Sample runs on one slanted line put far-apart fill edges on it.
        let samples: [Real; 8] = [2.0, 1.0, 1.0, -1.0, -2.0, -1.0, 1.0, 2.0];
        let config = Config::with_sample_count(samples.len());
        let poly = build_fill_polygon(&tessellate(&samples, &config), &config);
        assert!(check_simple(&poly).is_ok());
    }

    #[test]
    fn flatten_interleaves() {
        assert_eq!(flatten(&[[1.0, 2.0], [3.0, 4.0]]), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
