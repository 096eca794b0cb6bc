// Copyright 2025 Lars Brubaker
// Unit tests for the tessellator internals.

use super::*;
use crate::config::FillClosure;

fn sine(n: usize) -> Vec<Real> {
    (0..n).map(|i| (i as Real).sin()).collect()
}

#[test]
fn new_rejects_invalid_config() {
    let config = Config {
        scale_amt: 1.5,
        ..Config::default()
    };
    assert!(CurveTessellator::new(config).is_err());
}

#[test]
fn starts_empty() {
    let tess = CurveTessellator::new(Config::default()).unwrap();
    assert_eq!(tess.status(), TessStatus::Empty);
    assert_eq!(tess.segment_count(), 0);
    assert!(tess.vertices().is_empty());
    assert!(tess.fill_indices().is_empty());
}

#[test]
fn default_sine_tessellates() {
    let mut tess = CurveTessellator::new(Config::default()).unwrap();
    tess.tessellate(&sine(80)).unwrap();
    assert_eq!(tess.status(), TessStatus::Ok);
    assert_eq!(tess.segment_count(), 39);
    assert_eq!(tess.vertex_count(), 39 * 3);
    assert_eq!(tess.uvs().len(), 39 * 6);
    assert_eq!(tess.fill_vertices().len(), tess.fill_polygon().len() * 2);
    assert_eq!(tess.fill_indices().len(), 3 * (tess.fill_polygon().len() - 2));
    assert_eq!(tess.wireframe_indices().len(), tess.fill_indices().len() * 2);
}

#[test]
fn wrong_length_keeps_previous_mesh() {
    let mut tess = CurveTessellator::new(Config::with_sample_count(16)).unwrap();
    tess.tessellate(&sine(16)).unwrap();
    let before = tess.mesh().clone();

    let err = tess.tessellate(&sine(15)).unwrap_err();
    assert!(matches!(err, TessError::SampleCountMismatch { expected: 16, actual: 15 }));
    assert_eq!(tess.status(), TessStatus::Rejected);
    assert_eq!(tess.mesh(), &before);
}

#[test]
fn non_finite_sample_is_rejected() {
    let mut tess = CurveTessellator::new(Config::with_sample_count(8)).unwrap();
    let mut samples = sine(8);
    samples[5] = Real::NAN;
    assert!(matches!(
        tess.tessellate(&samples),
        Err(TessError::NonFiniteSample { index: 5, .. })
    ));
    assert!(tess.vertices().is_empty());
}

#[test]
fn self_intersecting_fill_keeps_previous_mesh() {
    let config = Config {
        fill_closure: FillClosure::SingleVertex,
        ..Config::with_sample_count(8)
    };
    let mut tess = CurveTessellator::new(config).unwrap();
    // Rising curve: the diagonal closing edge stays under it.
    let rising: [Real; 8] = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];
    let bent: Vec<Real> = rising.iter().enumerate().map(|(i, v)| v + if i % 2 == 0 { 0.0 } else { 0.1 }).collect();
    tess.tessellate(&bent).unwrap();
    let before = tess.mesh().clone();

    // Ends high then dives: the closing edge from the last anchor back to
    // the baseline vertex crosses the curve.
    let dive: [Real; 8] = [0.0, 0.0, 0.0, -2.0, 3.0, 3.0, 3.0, 3.0];
    let err = tess.tessellate(&dive).unwrap_err();
    assert!(matches!(err, TessError::SelfIntersecting { .. }), "got {:?}", err);
    assert_eq!(tess.mesh(), &before);
}

#[test]
fn render_mode_switch_changes_passes() {
    let mut tess = CurveTessellator::new(Config::default()).unwrap();
    assert_eq!(tess.passes().len(), 2);
    tess.set_render_mode(RenderMode::StrokedOutline);
    assert_eq!(tess.passes(), vec![DrawPass::Curve(crate::config::CurveShading::Stroke)]);
}
