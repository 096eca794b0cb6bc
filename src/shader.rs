// Copyright 2025 Lars Brubaker
// License: MIT
//
// GLSL ES 1.00 sources for hosts that rasterize on the GPU.
//
// Attribute layout matches the buffers produced by `CurveTessellator`:
// `aVertexPosition` is (x, y, direction) from `vertices()`, `uv` comes from
// `uvs()`, and the fill program reads (x, y) from `fill_vertices()`.

use crate::config::CurveShading;
use crate::geom::Real;

pub const CURVE_VERTEX_SHADER: &str = r#"
attribute vec3 aVertexPosition;
attribute vec2 uv;

varying vec2 vUv;
varying float direction;

void main() {
  direction = aVertexPosition.z;
  vUv = uv;
  gl_Position = vec4(aVertexPosition.xy, 0.0, 1.0);
}
"#;

pub const FILL_VERTEX_SHADER: &str = r#"
attribute vec2 aVertexPosition;

void main() {
  gl_Position = vec4(aVertexPosition, 0.0, 1.0);
}
"#;

pub const FILL_FRAGMENT_SHADER: &str = r#"
precision mediump float;
uniform vec4 col;

void main() {
  gl_FragColor = col;
}
"#;

/// Fragment shader for the curve pass; the GPU twin of
/// `fragment::evaluate_fragment`.
pub fn curve_fragment_shader(scale_amt: Real, stroke_thickness: Real, shading: CurveShading) -> String {
    let coverage = match shading {
        CurveShading::Fill => {
            r#"  sd *= direction;
  if (sd >= 0.0) {
    discard;
  }
  color.a = min(abs(sd), 1.0);"#
        }
        CurveShading::Stroke => {
            r#"  float alpha = thickness - abs(sd);
  if (alpha < 0.0) {
    discard;
  }
  color.a = min(alpha, 1.0);"#
        }
    };

    format!(
        r#"#extension GL_OES_standard_derivatives : enable

precision mediump float;
uniform vec4 col;

varying vec2 vUv;
varying float direction;

const float scale_amt = {scale:?};
const float thickness = {thickness:?};
const float gradient_epsilon = 1e-6;

void main() {{
  vec4 color = col;
  vec2 scaled = vUv * (1.0 + scale_amt) - scale_amt / 3.0;
  vec2 p = scaled.x * vec2(0.5, 0.0) + scaled.y * vec2(1.0);

  vec2 px = dFdx(p);
  vec2 py = dFdy(p);
  float fx = (2.0 * p.x) * px.x - px.y;
  float fy = (2.0 * p.x) * py.x - py.y;
  float sd = (p.x * p.x - p.y) / max(sqrt(fx * fx + fy * fy), gradient_epsilon);

{coverage}
  gl_FragColor = color;
}}
"#,
        scale = scale_amt,
        thickness = stroke_thickness,
        coverage = coverage,
    )
}
