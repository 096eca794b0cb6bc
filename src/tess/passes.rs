// Copyright 2025 Lars Brubaker
// Draw-pass planning for each render mode.

use crate::config::{CurveShading, RenderMode};

/// How a fill pass submits its indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// `fill_indices` as a triangle list.
    Triangles,
    /// `wireframe_indices` as a line list.
    Lines,
}

/// One draw call, in the order a host should issue them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawPass {
    Fill(Primitive),
    Curve(CurveShading),
}

impl RenderMode {
    /// The fill pass (if any) always comes before the curve pass so the
    /// curve's antialiased edge blends over the flat fill.
    pub fn passes(self) -> Vec<DrawPass> {
        let fill = match self {
            RenderMode::FilledCurve | RenderMode::FillOnly => Some(Primitive::Triangles),
            RenderMode::Wireframe => Some(Primitive::Lines),
            RenderMode::StrokedOutline => None,
        };
        fill.map(DrawPass::Fill)
            .into_iter()
            .chain(self.curve_shading().map(DrawPass::Curve))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_curve_draws_fill_then_curve() {
        assert_eq!(
            RenderMode::FilledCurve.passes(),
            vec![DrawPass::Fill(Primitive::Triangles), DrawPass::Curve(CurveShading::Fill)]
        );
    }

    #[test]
    fn stroked_outline_skips_fill() {
        assert_eq!(RenderMode::StrokedOutline.passes(), vec![DrawPass::Curve(CurveShading::Stroke)]);
    }

    #[test]
    fn wireframe_uses_lines() {
        assert_eq!(RenderMode::Wireframe.passes()[0], DrawPass::Fill(Primitive::Lines));
    }

    #[test]
    fn fill_only_has_single_pass() {
        assert_eq!(RenderMode::FillOnly.passes(), vec![DrawPass::Fill(Primitive::Triangles)]);
    }
}
