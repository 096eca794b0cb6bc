// Copyright 2025 Lars Brubaker
// License: MIT
//
// The tessellator: public API tying the curve walk, fill polygon and ear
// clipper together and owning the resulting buffers.
//
// A pass builds a complete `CurveMesh` before touching `self`; on any error
// the previously published mesh stays in place, so a consumer never sees a
// half-updated set of buffers.

mod passes;
#[cfg(test)]
mod tests;

pub use passes::{DrawPass, Primitive};

use log::{debug, warn};

use crate::config::{Config, RenderMode};
use crate::curve::{self, CurveSegment};
use crate::earclip;
use crate::error::TessError;
use crate::fill;
use crate::geom::{Point, Real};

// ─────────────────────────────── Public types ──────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TessStatus {
    /// Nothing tessellated yet.
    Empty,
    /// The last pass succeeded.
    Ok,
    /// The last pass was rejected; the previous mesh is still published.
    Rejected,
}

/// Every buffer one tessellation pass produces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveMesh {
    pub segments: Vec<CurveSegment>,
    /// `(x, y, direction)` per control-triangle vertex.
    pub vertices: Vec<Real>,
    /// `(u, v)` per control-triangle vertex.
    pub uvs: Vec<Real>,
    pub fill_polygon: Vec<Point>,
    pub fill_indices: Vec<u32>,
    /// Line pairs over the fill triangulation.
    pub wireframe_indices: Vec<u32>,
}

impl CurveMesh {
    /// Runs every stage for `samples`, returning the first failure.
    pub fn build(samples: &[Real], config: &Config) -> Result<CurveMesh, TessError> {
        if samples.len() != config.sample_count {
            return Err(TessError::SampleCountMismatch {
                expected: config.sample_count,
                actual: samples.len(),
            });
        }
        if samples.len() < 4 {
            return Err(TessError::TooFewSamples(samples.len()));
        }
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(TessError::NonFiniteSample { index, value });
        }

        let segments = curve::tessellate(samples, config);
        let vertices = curve::vertex_buffer(&segments, config.scale_amt);
        let uvs = curve::uv_buffer(segments.len());

        let fill_polygon = fill::build_fill_polygon(&segments, config);
        let fill_indices = earclip::triangulate(&fill_polygon)?;
        let wireframe_indices = earclip::wireframe_indices(&fill_indices);

        Ok(CurveMesh {
            segments,
            vertices,
            uvs,
            fill_polygon,
            fill_indices,
            wireframe_indices,
        })
    }
}

// ─────────────────────────── Tessellator ──────────────────────────────────────

pub struct CurveTessellator {
    config: Config,
    mesh: CurveMesh,
    status: TessStatus,
}

impl CurveTessellator {
    pub fn new(config: Config) -> Result<Self, TessError> {
        config.validate()?;
        Ok(CurveTessellator {
            config,
            mesh: CurveMesh::default(),
            status: TessStatus::Empty,
        })
    }

    /// Tessellates `samples`. On success the new buffers replace the old
    /// ones; on failure the old ones are kept and the error is returned.
    pub fn tessellate(&mut self, samples: &[Real]) -> Result<(), TessError> {
        match CurveMesh::build(samples, &self.config) {
            Ok(mesh) => {
                debug!(
                    "tessellated {} samples: {} segments, {} fill vertices, {} fill triangles",
                    samples.len(),
                    mesh.segments.len(),
                    mesh.fill_polygon.len(),
                    mesh.fill_indices.len() / 3
                );
                self.mesh = mesh;
                self.status = TessStatus::Ok;
                Ok(())
            }
            Err(err) => {
                warn!("tessellation rejected, keeping previous buffers: {}", err);
                self.status = TessStatus::Rejected;
                Err(err)
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn status(&self) -> TessStatus {
        self.status
    }

    pub fn mesh(&self) -> &CurveMesh {
        &self.mesh
    }

    pub fn segments(&self) -> &[CurveSegment] {
        &self.mesh.segments
    }

    pub fn segment_count(&self) -> usize {
        self.mesh.segments.len()
    }

    /// Flat control-triangle vertex data [x0,y0,dir0, x1,y1,dir1, ...].
    pub fn vertices(&self) -> &[Real] {
        &self.mesh.vertices
    }

    /// Number of control-triangle vertices (3 per segment).
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / curve::VERTEX_STRIDE
    }

    pub fn uvs(&self) -> &[Real] {
        &self.mesh.uvs
    }

    pub fn fill_polygon(&self) -> &[Point] {
        &self.mesh.fill_polygon
    }

    /// Flat fill vertex positions [x0,y0, x1,y1, ...].
    pub fn fill_vertices(&self) -> Vec<Real> {
        fill::flatten(&self.mesh.fill_polygon)
    }

    pub fn fill_indices(&self) -> &[u32] {
        &self.mesh.fill_indices
    }

    pub fn wireframe_indices(&self) -> &[u32] {
        &self.mesh.wireframe_indices
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.config.render_mode = mode;
    }

    /// Draw passes for the configured render mode.
    pub fn passes(&self) -> Vec<DrawPass> {
        self.config.render_mode.passes()
    }
}
