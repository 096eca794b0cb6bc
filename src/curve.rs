// Copyright 2025 Lars Brubaker
// License: MIT
//
// Curve tessellation: turns a sample sequence into quadratic Bezier segments,
// one control triangle per segment.
//
// Segment k runs from anchor k to anchor k+1 with mapped sample k+1 as its
// off-curve control point. Anchor 0 is sample 0 itself; every later anchor is
// the midpoint of two consecutive mapped samples, so neighbouring segments
// meet with a continuous tangent.

use crate::config::Config;
use crate::geom::{centroid, index_to_x, midpoint, orient_sign, scale_about, Point, Real};

/// UV role of each control-triangle vertex: start anchor, control point, end anchor.
pub const UV_TEMPLATE: [[Real; 2]; 3] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];

/// Reals per vertex in the control-triangle buffer: x, y, direction.
pub const VERTEX_STRIDE: usize = 3;

/// Which side of the chord the curve bulges towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Concavity {
    /// Control point on or above the chord.
    Upward,
    /// Control point below the chord.
    Downward,
}

impl Concavity {
    /// Classifies the curve through `start`, `control`, `end`.
    ///
    /// Equivalent to `slope(start, control) < slope(start, end)` whenever
    /// both horizontal deltas are positive, without dividing. Points that
    /// are collinear to within rounding (including a zero horizontal delta)
    /// classify as `Upward`.
    pub fn classify(start: Point, control: Point, end: Point) -> Concavity {
        if orient_sign(start, control, end) > 0 {
            Concavity::Downward
        } else {
            Concavity::Upward
        }
    }

    #[inline]
    pub fn sign(self) -> Real {
        match self {
            Concavity::Upward => 1.0,
            Concavity::Downward => -1.0,
        }
    }

    pub fn flipped(self) -> Concavity {
        match self {
            Concavity::Upward => Concavity::Downward,
            Concavity::Downward => Concavity::Upward,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveSegment {
    pub start: Point,
    pub control: Point,
    pub end: Point,
    pub concavity: Concavity,
}

impl CurveSegment {
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        CurveSegment {
            start,
            control,
            end,
            concavity: Concavity::classify(start, control, end),
        }
    }

    /// The unexpanded triangle in UV-template order.
    #[inline]
    pub fn points(&self) -> [Point; 3] {
        [self.start, self.control, self.end]
    }

    pub fn centroid(&self) -> Point {
        centroid(self.start, self.control, self.end)
    }

    /// Triangle pushed out from its centroid by `1 + scale_amt`, leaving
    /// room for the antialiased edge of the curve.
    pub fn control_triangle(&self, scale_amt: Real) -> [Point; 3] {
        let c = self.centroid();
        let s = 1.0 + scale_amt;
        self.points().map(|p| scale_about(p, c, s))
    }
}

/// Mapped position of every sample: x spread across the span, y scaled.
pub fn map_samples(samples: &[Real], config: &Config) -> Vec<Point> {
    let n = samples.len();
    samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            [
                index_to_x(i, n, config.span[0], config.span[1]),
                config.baseline_y + s * config.vertical_scale,
            ]
        })
        .collect()
}

/// Number of segments produced for `sample_count` samples.
#[inline]
pub fn segment_count(sample_count: usize) -> usize {
    (sample_count / 2).saturating_sub(1)
}

/// Walks the mapped samples and emits `N/2 - 1` segments.
///
/// The previous anchor is the only state carried from one segment to the
/// next, and it lives in the fold accumulator.
pub fn tessellate(samples: &[Real], config: &Config) -> Vec<CurveSegment> {
    let points = map_samples(samples, config);
    let count = segment_count(points.len());
    if count == 0 {
        return Vec::new();
    }

    let (_, segments) = (0..count).fold(
        (points[0], Vec::with_capacity(count)),
        |(start, mut segments), k| {
            let control = points[k + 1];
            let end = midpoint(control, points[k + 2]);
            segments.push(CurveSegment::new(start, control, end));
            (end, segments)
        },
    );
    segments
}

/// Flattened `(x, y, direction)` triples, three vertices per segment.
pub fn vertex_buffer(segments: &[CurveSegment], scale_amt: Real) -> Vec<Real> {
    let mut out = Vec::with_capacity(segments.len() * 3 * VERTEX_STRIDE);
    for seg in segments {
        let dir = seg.concavity.sign();
        for p in seg.control_triangle(scale_amt) {
            out.extend_from_slice(&[p[0], p[1], dir]);
        }
    }
    out
}

/// The UV template repeated once per triangle.
pub fn uv_buffer(triangle_count: usize) -> Vec<Real> {
    UV_TEMPLATE
        .iter()
        .cycle()
        .take(triangle_count * 3)
        .flat_map(|uv| uv.iter().copied())
        .collect()
}
