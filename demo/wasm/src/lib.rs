// Copyright 2025 Lars Brubaker
// WASM bindings for quadcurve-tess

use quadcurve_tess::shader;
use quadcurve_tess::{Config, CurveShading, CurveTessellator, DrawPass, Primitive, RenderMode};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
}

/// Holds the latest successful tessellation; a rejected pass leaves the
/// buffers from the previous one in place.
#[wasm_bindgen]
pub struct CurveTessellatorJs {
    inner: CurveTessellator,
}

#[wasm_bindgen]
impl CurveTessellatorJs {
    /// Build from a JSON config document (fields may be omitted).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<CurveTessellatorJs, JsValue> {
        let config = if config_json.trim().is_empty() {
            Config::default()
        } else {
            Config::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let inner = CurveTessellator::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(CurveTessellatorJs { inner })
    }

    /// Tessellate a Float32Array of samples. Returns false (and logs why)
    /// if the pass was rejected.
    pub fn tessellate(&mut self, samples: &[f32]) -> bool {
        match self.inner.tessellate(samples) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{}", e);
                false
            }
        }
    }

    /// Render mode: 0=FilledCurve 1=StrokedOutline 2=Wireframe 3=FillOnly
    pub fn set_render_mode(&mut self, mode: u32) {
        self.inner.set_render_mode(render_mode(mode));
    }

    /// Advance to the next render mode (e.g. on click); returns its number.
    pub fn cycle_render_mode(&mut self) -> u32 {
        let next = self.inner.config().render_mode.next();
        self.inner.set_render_mode(next);
        render_mode_index(next)
    }

    pub fn segment_count(&self) -> u32 {
        self.inner.segment_count() as u32
    }

    /// Flat [x, y, direction, ...] control-triangle vertices.
    pub fn get_vertices(&self) -> Vec<f32> {
        self.inner.vertices().to_vec()
    }

    /// Flat [u, v, ...] per control-triangle vertex.
    pub fn get_uvs(&self) -> Vec<f32> {
        self.inner.uvs().to_vec()
    }

    pub fn get_fill_vertices(&self) -> Vec<f32> {
        self.inner.fill_vertices()
    }

    pub fn get_fill_indices(&self) -> Vec<u32> {
        self.inner.fill_indices().to_vec()
    }

    pub fn get_wireframe_indices(&self) -> Vec<u32> {
        self.inner.wireframe_indices().to_vec()
    }

    /// Draw passes for the current mode, encoded as
    /// 0=fill triangles 1=fill lines 2=curve fill 3=curve stroke.
    pub fn get_passes(&self) -> Vec<u32> {
        self.inner
            .passes()
            .into_iter()
            .map(|p| match p {
                DrawPass::Fill(Primitive::Triangles) => 0,
                DrawPass::Fill(Primitive::Lines) => 1,
                DrawPass::Curve(CurveShading::Fill) => 2,
                DrawPass::Curve(CurveShading::Stroke) => 3,
            })
            .collect()
    }

    /// GLSL for the curve pass with the configured constants baked in.
    /// stroke: false = fill shading, true = stroke shading.
    pub fn curve_fragment_shader(&self, stroke: bool) -> String {
        let config = self.inner.config();
        let shading = if stroke { CurveShading::Stroke } else { CurveShading::Fill };
        shader::curve_fragment_shader(config.scale_amt, config.stroke_thickness, shading)
    }
}

#[wasm_bindgen]
pub fn curve_vertex_shader() -> String {
    shader::CURVE_VERTEX_SHADER.to_string()
}

#[wasm_bindgen]
pub fn fill_vertex_shader() -> String {
    shader::FILL_VERTEX_SHADER.to_string()
}

#[wasm_bindgen]
pub fn fill_fragment_shader() -> String {
    shader::FILL_FRAGMENT_SHADER.to_string()
}

fn render_mode(mode: u32) -> RenderMode {
    match mode {
        1 => RenderMode::StrokedOutline,
        2 => RenderMode::Wireframe,
        3 => RenderMode::FillOnly,
        _ => RenderMode::FilledCurve,
    }
}

fn render_mode_index(mode: RenderMode) -> u32 {
    match mode {
        RenderMode::FilledCurve => 0,
        RenderMode::StrokedOutline => 1,
        RenderMode::Wireframe => 2,
        RenderMode::FillOnly => 3,
    }
}
