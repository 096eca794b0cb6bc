// quadcurve-tess: sampled signal -> antialiased quadratic curve + fill triangulation
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod config;
pub mod curve;
pub mod earclip;
pub mod error;
pub mod fill;
pub mod fragment;
pub mod geom;
pub mod raster;
pub mod shader;
pub mod tess;

pub use config::{Config, CurveShading, FillClosure, RenderMode};
pub use curve::{Concavity, CurveSegment};
pub use error::TessError;
pub use fragment::{evaluate_fragment, FragmentInput, FragmentOutput, FragmentParams};
pub use tess::{CurveMesh, CurveTessellator, DrawPass, Primitive, TessStatus};
