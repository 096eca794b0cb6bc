// Copyright 2025 Lars Brubaker
// License: MIT
//
// CPU reference consumer for the tessellator's buffers.
//
// Draws the same passes a GPU host would, into an RGBA float canvas, with
// source-over blending. Curve triangles run `fragment::evaluate_fragment` at
// every covered pixel centre; UVs come from barycentric interpolation and the
// screen-space derivatives from the neighbouring pixel centres, which is what
// dFdx/dFdy measure on a GPU. Useful for tests and for hosts without a GPU.

use crate::config::CurveShading;
use crate::curve::{UV_TEMPLATE, VERTEX_STRIDE};
use crate::fragment::{evaluate_fragment, FragmentInput, FragmentOutput, FragmentParams, Rgba};
use crate::geom::{orient, Point, Real};
use crate::tess::{CurveTessellator, DrawPass, Primitive};

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// A canvas cleared to opaque white.
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![WHITE; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y` (row 0 at the top).
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Maps normalized device coordinates (y up) to pixel space (y down).
    pub fn to_screen(&self, p: Point) -> Point {
        [
            (p[0] + 1.0) * 0.5 * self.width as Real,
            (1.0 - p[1]) * 0.5 * self.height as Real,
        ]
    }

    /// Source-over compositing of `src` onto the pixel.
    pub fn blend(&mut self, x: usize, y: usize, src: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let dst = &mut self.pixels[y * self.width + x];
        let a = src[3].clamp(0.0, 1.0);
        for c in 0..3 {
            dst[c] = src[c] * a + dst[c] * (1.0 - a);
        }
        dst[3] = a + dst[3] * (1.0 - a);
    }

    /// Pixel bounding box of a screen-space triangle, clipped to the canvas.
    fn bounds(&self, s: &[Point; 3]) -> Option<(usize, usize, usize, usize)> {
        let min_x = s.iter().map(|p| p[0]).fold(Real::INFINITY, Real::min).floor().max(0.0);
        let min_y = s.iter().map(|p| p[1]).fold(Real::INFINITY, Real::min).floor().max(0.0);
        let max_x = s.iter().map(|p| p[0]).fold(Real::NEG_INFINITY, Real::max).ceil();
        let max_y = s.iter().map(|p| p[1]).fold(Real::NEG_INFINITY, Real::max).ceil();
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return None;
        }
        let max_x = (max_x as usize).min(self.width);
        let max_y = (max_y as usize).min(self.height);
        let (min_x, min_y) = (min_x as usize, min_y as usize);
        if min_x >= max_x || min_y >= max_y {
            return None;
        }
        Some((min_x, min_y, max_x, max_y))
    }

    /// Flat-coloured triangle in NDC; covers pixels whose centre is inside.
    pub fn fill_triangle(&mut self, tri: [Point; 3], color: Rgba) {
        let s = tri.map(|p| self.to_screen(p));
        let Some((x0, y0, x1, y1)) = self.bounds(&s) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let c = [x as Real + 0.5, y as Real + 0.5];
                if barycentric(&s, c).is_some_and(inside) {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// One-pixel line between two NDC points.
    pub fn draw_line(&mut self, a: Point, b: Point, color: Rgba) {
        let (sa, sb) = (self.to_screen(a), self.to_screen(b));
        let steps = (sb[0] - sa[0]).abs().max((sb[1] - sa[1]).abs()).ceil().max(1.0);
        if !steps.is_finite() {
            return;
        }
        let n = steps as usize;
        for i in 0..=n {
            let t = i as Real / steps;
            let x = sa[0] + (sb[0] - sa[0]) * t;
            let y = sa[1] + (sb[1] - sa[1]) * t;
            if x >= 0.0 && y >= 0.0 {
                self.blend(x as usize, y as usize, color);
            }
        }
    }

    /// Control triangle in NDC, vertices in UV-template order.
    pub fn draw_curve_triangle(
        &mut self,
        tri: [Point; 3],
        direction: Real,
        shading: CurveShading,
        params: &FragmentParams,
    ) {
        let s = tri.map(|p| self.to_screen(p));
        let Some((x0, y0, x1, y1)) = self.bounds(&s) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let (cx, cy) = (x as Real + 0.5, y as Real + 0.5);
                let Some(w) = barycentric(&s, [cx, cy]) else {
                    return;
                };
                if !inside(w) {
                    continue;
                }
                let uv = interpolate_uv(w);
                let uv_right = barycentric(&s, [cx + 1.0, cy]).map_or(uv, interpolate_uv);
                let uv_up = barycentric(&s, [cx, cy + 1.0]).map_or(uv, interpolate_uv);
                let input = FragmentInput::from_neighbors(uv, uv_right, uv_up, direction);
                if let FragmentOutput::Color(c) = evaluate_fragment(&input, shading, params) {
                    self.blend(x, y, c);
                }
            }
        }
    }
}

/// Barycentric weights of `p` in screen triangle `s`; `None` if degenerate.
fn barycentric(s: &[Point; 3], p: Point) -> Option<[Real; 3]> {
    let area = orient(s[0], s[1], s[2]);
    if area == 0.0 || !area.is_finite() {
        return None;
    }
    let w0 = orient(s[1], s[2], p) / area;
    let w1 = orient(s[2], s[0], p) / area;
    Some([w0, w1, 1.0 - w0 - w1])
}

#[inline]
fn inside(w: [Real; 3]) -> bool {
    w.iter().all(|&v| v >= 0.0)
}

fn interpolate_uv(w: [Real; 3]) -> [Real; 2] {
    let mut uv = [0.0; 2];
    for (wi, t) in w.iter().zip(UV_TEMPLATE.iter()) {
        uv[0] += wi * t[0];
        uv[1] += wi * t[1];
    }
    uv
}

/// Draws the tessellator's current buffers following its render mode.
pub fn render(tess: &CurveTessellator, color: Rgba, canvas: &mut Canvas) {
    let poly = tess.fill_polygon();
    let config = tess.config();
    for pass in tess.passes() {
        match pass {
            DrawPass::Fill(Primitive::Triangles) => {
                for t in tess.fill_indices().chunks_exact(3) {
                    canvas.fill_triangle([poly[t[0] as usize], poly[t[1] as usize], poly[t[2] as usize]], color);
                }
            }
            DrawPass::Fill(Primitive::Lines) => {
                for l in tess.wireframe_indices().chunks_exact(2) {
                    canvas.draw_line(poly[l[0] as usize], poly[l[1] as usize], color);
                }
            }
            DrawPass::Curve(shading) => {
                let params = FragmentParams {
                    scale_amt: config.scale_amt,
                    stroke_thickness: config.stroke_thickness,
                    color,
                };
                for tri in tess.vertices().chunks_exact(3 * VERTEX_STRIDE) {
                    let points = [[tri[0], tri[1]], [tri[3], tri[4]], [tri[6], tri[7]]];
                    canvas.draw_curve_triangle(points, tri[2], shading, &params);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGENTA: Rgba = [1.0, 0.0, 1.0, 1.0];

    #[test]
    fn new_canvas_is_white() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.pixels().len(), 12);
        assert!(c.pixels().iter().all(|p| *p == WHITE));
    }

    #[test]
    fn ndc_corners_map_to_screen_corners() {
        let c = Canvas::new(100, 50);
        assert_eq!(c.to_screen([-1.0, 1.0]), [0.0, 0.0]);
        assert_eq!(c.to_screen([1.0, -1.0]), [100.0, 50.0]);
    }

    #[test]
    fn source_over_half_alpha() {
        let mut c = Canvas::new(1, 1);
        c.blend(0, 0, [0.0, 0.0, 0.0, 0.5]);
        let p = c.pixel(0, 0);
        assert!((p[0] - 0.5).abs() < 1e-6);
        assert!((p[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn blend_outside_is_ignored() {
        let mut c = Canvas::new(2, 2);
        c.blend(5, 5, MAGENTA);
        assert!(c.pixels().iter().all(|p| *p == WHITE));
    }

    #[test]
    fn fill_triangle_covers_interior_only() {
        let mut c = Canvas::new(10, 10);
        c.fill_triangle([[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0]], MAGENTA);
        assert_eq!(c.pixel(1, 8), MAGENTA);
        assert_eq!(c.pixel(9, 0), WHITE);
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let mut c = Canvas::new(10, 10);
        c.fill_triangle([[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]], MAGENTA);
        let params = FragmentParams {
            scale_amt: 0.3,
            stroke_thickness: 1.5,
            color: MAGENTA,
        };
        c.draw_curve_triangle([[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]], 1.0, CurveShading::Fill, &params);
        assert!(c.pixels().iter().all(|p| *p == WHITE));
    }

    #[test]
    fn line_touches_endpoints() {
        let mut c = Canvas::new(10, 10);
        c.draw_line([-0.9, 0.0], [0.9, 0.0], MAGENTA);
        assert_eq!(c.pixel(0, 5), MAGENTA);
        assert_eq!(c.pixel(9, 5), MAGENTA);
    }
}
