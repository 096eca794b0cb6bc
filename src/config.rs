// Copyright 2025 Lars Brubaker
// License: MIT
//
// Tessellation and rendering options. Every field has a default so a partial
// JSON document is enough to override just what a host cares about.

use serde::{Deserialize, Serialize};

use crate::error::TessError;
use crate::geom::Real;

/// How the curve pass colours fragments inside a control triangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveShading {
    /// Keep the concave side of the curve, alpha from the signed distance.
    Fill,
    /// Keep a band of `stroke_thickness` around the curve.
    Stroke,
}

/// Which passes a host draws. Replaces a hidden click counter: the host owns
/// the mode and can step through them with [`RenderMode::next`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    #[default]
    FilledCurve,
    StrokedOutline,
    Wireframe,
    FillOnly,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::FilledCurve,
        RenderMode::StrokedOutline,
        RenderMode::Wireframe,
        RenderMode::FillOnly,
    ];

    pub fn next(self) -> RenderMode {
        match self {
            RenderMode::FilledCurve => RenderMode::StrokedOutline,
            RenderMode::StrokedOutline => RenderMode::Wireframe,
            RenderMode::Wireframe => RenderMode::FillOnly,
            RenderMode::FillOnly => RenderMode::FilledCurve,
        }
    }

    /// Shading of the curve pass, or `None` when the mode skips it.
    pub fn curve_shading(self) -> Option<CurveShading> {
        match self {
            RenderMode::FilledCurve | RenderMode::Wireframe => Some(CurveShading::Fill),
            RenderMode::StrokedOutline => Some(CurveShading::Stroke),
            RenderMode::FillOnly => None,
        }
    }
}

/// How the fill polygon is closed below the curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillClosure {
    /// Baseline vertices below both the first and the last anchor, so the
    /// closing edge is vertical and never crosses the curve. This departs
    /// from the classic single-vertex closure (see `SingleVertex`), which
    /// rejects signals that end high after dipping below their start.
    #[default]
    BaselineEdge,
    /// A single baseline vertex below the first anchor. The closing edge runs
    /// diagonally back from the last anchor and may cross the curve.
    SingleVertex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of samples every tessellation pass expects.
    #[serde(alias = "sampleCount")]
    pub sample_count: usize,
    /// Outward expansion of each control triangle about its centroid.
    #[serde(alias = "scaleAmt")]
    pub scale_amt: Real,
    #[serde(alias = "renderMode")]
    pub render_mode: RenderMode,
    /// Horizontal range the sample indices are spread across.
    pub span: [Real; 2],
    /// Multiplier applied to each sample value.
    pub vertical_scale: Real,
    /// Vertical offset added to each scaled sample.
    pub baseline_y: Real,
    /// Distance between the lowest fill vertex and the closing baseline.
    pub baseline_offset: Real,
    /// Width of the antialiased band in stroke shading, in pixels.
    pub stroke_thickness: Real,
    pub fill_closure: FillClosure,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_count: 80,
            scale_amt: 0.3,
            render_mode: RenderMode::default(),
            span: [-1.0, 1.0],
            vertical_scale: 0.2,
            baseline_y: 0.0,
            baseline_offset: 0.1,
            stroke_thickness: 1.5,
            fill_closure: FillClosure::default(),
        }
    }
}

impl Config {
    pub fn with_sample_count(sample_count: usize) -> Self {
        Config {
            sample_count,
            ..Config::default()
        }
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Config, TessError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TessError> {
        if self.sample_count < 4 {
            return Err(TessError::TooFewSamples(self.sample_count));
        }
        if !(self.scale_amt > 0.0 && self.scale_amt < 1.0) {
            return Err(TessError::InvalidConfig(format!(
                "scale_amt must lie in (0, 1), got {}",
                self.scale_amt
            )));
        }
        if !(self.span[0].is_finite() && self.span[1].is_finite() && self.span[0] < self.span[1]) {
            return Err(TessError::InvalidConfig(format!(
                "span must be an increasing finite range, got [{}, {}]",
                self.span[0], self.span[1]
            )));
        }
        if !self.vertical_scale.is_finite() || !self.baseline_y.is_finite() {
            return Err(TessError::InvalidConfig(
                "vertical_scale and baseline_y must be finite".to_string(),
            ));
        }
        if !(self.baseline_offset > 0.0 && self.baseline_offset.is_finite()) {
            return Err(TessError::InvalidConfig(format!(
                "baseline_offset must be positive, got {}",
                self.baseline_offset
            )));
        }
        if !(self.stroke_thickness > 0.0 && self.stroke_thickness.is_finite()) {
            return Err(TessError::InvalidConfig(format!(
                "stroke_thickness must be positive, got {}",
                self.stroke_thickness
            )));
        }
        Ok(())
    }
}
