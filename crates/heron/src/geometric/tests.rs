use super::*;
use crate::calc::compute;
use crate::validate::{validate, InputMode};
use nalgebra::vector;
use proptest::prelude::*;

fn diag() -> f64 {
    HeronCfg::default().diagonal(ScaleMode::Rest)
}

#[test]
fn sides_are_opposite_their_vertices() {
    let v = VertexSet::new([
        vector![0.0, 0.0],
        vector![3.0, 0.0],
        vector![0.0, 4.0],
    ]);
    let raw = raw_sides(&v);
    assert!((raw.a - 5.0).abs() < 1e-12); // |v2 v3|
    assert!((raw.b - 4.0).abs() < 1e-12); // |v1 v3|
    assert!((raw.c - 3.0).abs() < 1e-12); // |v1 v2|
}

#[test]
fn equilateral_pixels_rescale_to_equal_sides() {
    let v = VertexSet::new([
        vector![0.0, 0.0],
        vector![100.0, 0.0],
        vector![50.0, 86.6],
    ]);
    let sides = derive_sides(&v, diag());
    assert_eq!(sides, SideLengths::new(18.0, 18.0, 18.0));
    // Area follows the rescaled sides, not the pixel distances.
    let r = compute(&validate(sides, InputMode::Geometric).unwrap());
    assert_eq!(r.semi_perimeter, 27.0);
    assert_eq!(r.area_display(), "140.30");
}

#[test]
fn rescale_bounds_and_floor() {
    let full = SideLengths::new(diag(), 0.0, 1.0);
    let s = rescale(&full, diag());
    assert_eq!(s.a, 100.0);
    assert_eq!(s.b, 1.0);
    assert_eq!(s.c, 1.0);
}

#[test]
fn clamp_keeps_inset() {
    let c = CanvasBounds::default();
    assert_eq!(clamp_to_canvas(vector![-50.0, 400.0], &c), vector![10.0, 290.0]);
    assert_eq!(clamp_to_canvas(vector![600.0, 5.0], &c), vector![490.0, 10.0]);
    assert_eq!(clamp_to_canvas(vector![200.0, 100.0], &c), vector![200.0, 100.0]);
}

#[test]
fn clamp_survives_narrow_canvas() {
    let narrow = CanvasBounds {
        width: 15.0,
        ..CanvasBounds::default()
    };
    assert_eq!(clamp_to_canvas(vector![5.0, 5.0], &narrow), vector![10.0, 10.0]);
    assert_eq!(clamp_to_canvas(vector![f64::NAN, 50.0], &narrow).y, 50.0);
}

#[test]
fn degenerate_moves_are_rejected() {
    let v = VertexSet::default();
    // Coincident with V2.
    assert!(try_move(&v, VertexIndex::V1, vector![100.0, 250.0], diag()).is_none());
    // Collinear with V2 and V3.
    assert!(try_move(&v, VertexIndex::V1, vector![250.0, 250.0], diag()).is_none());
    // Closer than one side unit to V2.
    assert!(try_move(&v, VertexIndex::V1, vector![100.0, 245.0], diag()).is_none());
    // Thin but representable.
    let s = try_move(&v, VertexIndex::V1, vector![100.0, 240.0], diag()).unwrap();
    assert_eq!(s, SideLengths::new(52.0, 52.0, 3.0));
}

#[test]
fn set_vertex_commits_only_valid_points() {
    let mut g = GeometricInput::new(HeronCfg::default());
    let before = *g.vertices();
    assert!(!g.set_vertex(VertexIndex::V3, vector![100.0, 250.0]));
    assert_eq!(g.vertices(), &before);
    assert!(!g.set_vertex(VertexIndex::V3, vector![f64::NAN, 250.0]));
    assert!(g.set_vertex(VertexIndex::V3, vector![400.0, 200.0]));
    assert_eq!(g.vertices().get(VertexIndex::V3), vector![400.0, 200.0]);
}

#[test]
fn drag_token_is_exclusive() {
    let mut g = GeometricInput::new(HeronCfg::default());
    assert!(!g.drag_to(vector![200.0, 100.0]));
    assert!(g.press(VertexIndex::V1));
    assert!(!g.press(VertexIndex::V2));
    assert!(g.press(VertexIndex::V1));
    assert!(g.drag_to(vector![-100.0, -100.0]));
    assert_eq!(g.vertices().get(VertexIndex::V1), vector![10.0, 10.0]);
    g.release();
    assert_eq!(g.drag().captured(), None);
    assert!(g.press(VertexIndex::V2));
}

#[test]
fn live_sides_use_drag_scale_while_captured() {
    let cfg = HeronCfg {
        drag_diagonal: Some(2.0 * diag()),
        ..HeronCfg::default()
    };
    let mut g = GeometricInput::new(cfg);
    assert_eq!(g.live_sides(), g.sides());
    g.press(VertexIndex::V2);
    assert!(g.live_sides().a < g.sides().a);
    g.release();
    assert_eq!(g.live_sides(), g.sides());
}

#[test]
fn vertex_index_from_usize() {
    assert_eq!(VertexIndex::try_from(2), Ok(VertexIndex::V3));
    assert_eq!(VertexIndex::try_from(3), Err(3));
}

proptest! {
    #[test]
    fn rescaled_sides_stay_in_domain(
        x in proptest::array::uniform3(10.0f64..=490.0),
        y in proptest::array::uniform3(10.0f64..=290.0),
    ) {
        let v = VertexSet::new([
            vector![x[0], y[0]],
            vector![x[1], y[1]],
            vector![x[2], y[2]],
        ]);
        let s = derive_sides(&v, diag());
        for d in s.as_array() {
            prop_assert!(d >= SIDE_MIN);
            prop_assert!(d <= SIDE_MAX);
        }
    }

    #[test]
    fn accepted_moves_always_validate(
        px in 10.0f64..=490.0,
        py in 10.0f64..=290.0,
        which in 0usize..3,
    ) {
        let v = VertexSet::default();
        let i = VertexIndex::try_from(which).unwrap();
        if let Some(s) = try_move(&v, i, vector![px, py], diag()) {
            prop_assert!(validate(s, InputMode::Numeric).is_ok());
        }
    }
}
