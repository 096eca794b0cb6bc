// Copyright 2025 Lars Brubaker
// License: MIT
//
// Per-fragment curve test for control triangles.
//
// The UV template places the parabola y = x^2 in each triangle's local
// space: (0,0) -> start anchor, (1,0) -> control point, (0,1) -> end anchor
// map to (0,0), (0.5,0), (1,1). The implicit function f(x, y) = x^2 - y is
// zero on the curve; dividing by its screen-space gradient turns it into an
// approximate distance in pixels, which becomes coverage.
//
// This is the same computation the GLSL in `shader` performs. Each fragment
// is independent, so evaluating it is a pure function.

use crate::config::CurveShading;
use crate::geom::Real;

pub type Rgba = [Real; 4];

/// Lower bound on the gradient length. Collinear control points make the
/// gradient vanish; the distance saturates instead of becoming inf/NaN.
pub const GRADIENT_EPSILON: Real = 1e-6;

/// Interpolated attributes available to one fragment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FragmentInput {
    pub uv: [Real; 2],
    /// d(uv)/dx between this fragment and its horizontal neighbour.
    pub duv_dx: [Real; 2],
    /// d(uv)/dy between this fragment and its vertical neighbour.
    pub duv_dy: [Real; 2],
    /// Concavity sign of the segment (+1 or -1).
    pub direction: Real,
}

impl FragmentInput {
    /// Forms the screen-space derivatives by finite differences with the
    /// neighbouring fragments, as a GPU's dFdx/dFdy does.
    pub fn from_neighbors(uv: [Real; 2], uv_right: [Real; 2], uv_up: [Real; 2], direction: Real) -> Self {
        FragmentInput {
            uv,
            duv_dx: [uv_right[0] - uv[0], uv_right[1] - uv[1]],
            duv_dy: [uv_up[0] - uv[0], uv_up[1] - uv[1]],
            direction,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FragmentOutput {
    Discard,
    Color(Rgba),
}

impl FragmentOutput {
    pub fn alpha(&self) -> Option<Real> {
        match self {
            FragmentOutput::Discard => None,
            FragmentOutput::Color(c) => Some(c[3]),
        }
    }
}

/// Shading parameters shared by every fragment of a draw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FragmentParams {
    pub scale_amt: Real,
    pub stroke_thickness: Real,
    pub color: Rgba,
}

/// Undoes the control-triangle expansion: maps a UV of the expanded
/// triangle back into the unexpanded triangle's UV space.
#[inline]
pub fn unexpand_uv(uv: [Real; 2], scale_amt: Real) -> [Real; 2] {
    let s = 1.0 + scale_amt;
    let shift = scale_amt / 3.0;
    [uv[0] * s - shift, uv[1] * s - shift]
}

/// Fixed affine map from template UV into the parabola's local frame.
#[inline]
pub fn curve_point(uv: [Real; 2]) -> [Real; 2] {
    [uv[0] * 0.5 + uv[1], uv[1]]
}

/// Approximate signed distance, in pixels, from the fragment to the curve.
/// Negative below the parabola (x^2 < y), positive above.
pub fn signed_distance(input: &FragmentInput, scale_amt: Real) -> Real {
    let s = 1.0 + scale_amt;
    let p = curve_point(unexpand_uv(input.uv, scale_amt));
    // Linear map, so derivatives only pick up the expansion factor.
    let px = curve_point([input.duv_dx[0] * s, input.duv_dx[1] * s]);
    let py = curve_point([input.duv_dy[0] * s, input.duv_dy[1] * s]);

    // Chain rule on f(x, y) = x^2 - y.
    let fx = 2.0 * p[0] * px[0] - px[1];
    let fy = 2.0 * p[0] * py[0] - py[1];
    let grad = (fx * fx + fy * fy).sqrt().max(GRADIENT_EPSILON);

    (p[0] * p[0] - p[1]) / grad
}

/// Decides coverage for one fragment of a control triangle.
pub fn evaluate_fragment(input: &FragmentInput, shading: CurveShading, params: &FragmentParams) -> FragmentOutput {
    let sd = signed_distance(input, params.scale_amt);
    if !sd.is_finite() {
        return FragmentOutput::Discard;
    }
    let alpha = match shading {
        CurveShading::Fill => {
            let sd = sd * input.direction;
            if sd >= 0.0 {
                return FragmentOutput::Discard;
            }
            sd.abs().min(1.0)
        }
        CurveShading::Stroke => {
            let a = params.stroke_thickness - sd.abs();
            if a < 0.0 {
                return FragmentOutput::Discard;
            }
            a.min(1.0)
        }
    };
    let [r, g, b, _] = params.color;
    FragmentOutput::Color([r, g, b, alpha])
}
