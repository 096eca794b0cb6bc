// Copyright 2025 Lars Brubaker
// License: MIT

use thiserror::Error;

use crate::geom::Real;

/// Reasons a tessellation or triangulation request is rejected.
///
/// Numeric degeneracies (collinear control points, vanishing gradients) are
/// not errors; they are resolved where they occur.
#[derive(Error, Debug)]
pub enum TessError {
    #[error("expected {expected} samples, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },
    #[error("at least 4 samples are required, got {0}")]
    TooFewSamples(usize),
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: Real },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("fill polygon is not simple: edge {first} intersects edge {second}")]
    SelfIntersecting { first: usize, second: usize },
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon has zero area")]
    DegeneratePolygon,
    #[error("no ear found after {iterations} iterations with {remaining} vertices left")]
    TriangulationFailed { iterations: usize, remaining: usize },
}
