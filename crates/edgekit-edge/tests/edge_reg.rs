//! Edge pipeline regression test
//!
//! Walks the four stages end to end on synthetic fixtures and pins the
//! classification and tracking scenarios the pipeline's behavior is
//! defined by.

use edgekit_core::Image;
use edgekit_edge::{
    EdgeParams, detect_edges, double_threshold, edge_track, gradient, non_maximum_suppression,
};
use edgekit_test::{assert_samples_in, constant, vertical_step};

const STRONG: f32 = 1.0;
const WEAK: f32 = 0.25;

#[test]
fn gradient_reg() {
    // Normalized magnitude spans exactly [0, 1] on a non-constant input.
    let grad = gradient(&vertical_step(12, 12)).unwrap();
    let data = grad.magnitude.data();
    let min = data.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(min, 0.0);
    assert_eq!(max, 1.0);

    // Constant input: defined all-zero output, never NaN/Inf.
    let grad = gradient(&constant(8, 8, 1, 0.5)).unwrap();
    assert!(grad.magnitude.data().iter().all(|&v| v == 0.0));
    assert!(grad.direction.data().iter().all(|v| v.is_finite()));
}

#[test]
fn nms_monotonicity_reg() {
    // nms(x, y) <= magnitude(x, y) for every pixel of a busy field.
    let mut im = Image::new(15, 15, 1);
    for y in 0..15 {
        for x in 0..15 {
            im.set(x, y, 0, (((x * 7 + y * 13) % 17) as f32) / 17.0);
        }
    }
    let grad = gradient(&im).unwrap();
    let thinned = non_maximum_suppression(&grad.magnitude, &grad.direction).unwrap();
    for (out, mag) in thinned.data().iter().zip(grad.magnitude.data()) {
        assert!(out <= mag, "nms exceeded magnitude: {out} > {mag}");
    }
}

#[test]
fn double_threshold_scenario_a_reg() {
    // 1x4 row [0, 0.05, 0.2, 0.6] with low=0.1, high=0.5 classifies as
    // [0, 0, weak, strong].
    let im = Image::from_data(4, 1, 1, vec![0.0, 0.05, 0.2, 0.6]).unwrap();
    let out = double_threshold(&im, 0.1, 0.5, STRONG, WEAK);
    assert_eq!(out.data(), &[0.0, 0.0, WEAK, STRONG]);
    assert_samples_in(&out, &[0.0, WEAK, STRONG]);
}

#[test]
fn edge_track_scenario_b_reg() {
    // Strong center, exactly one weak 8-neighbor: the weak pixel is
    // promoted, everything else stays background.
    let mut im = Image::new(3, 3, 1);
    im.set(1, 1, 0, STRONG);
    im.set(0, 2, 0, WEAK);
    let out = edge_track(&im, WEAK, STRONG);
    assert_eq!(out.at(1, 1, 0), 1.0);
    assert_eq!(out.at(0, 2, 0), 1.0);
    let ones = out.data().iter().filter(|&&v| v == 1.0).count();
    assert_eq!(ones, 2);
    assert_samples_in(&out, &[0.0, 1.0]);
}

#[test]
fn edge_track_scenario_c_reg() {
    // An isolated weak pixel is suppressed even when a strong pixel
    // sits two cells away: promotion is not transitive.
    let mut im = Image::new(5, 5, 1);
    im.set(1, 2, 0, WEAK);
    im.set(3, 2, 0, STRONG);
    let out = edge_track(&im, WEAK, STRONG);
    assert_eq!(out.at(1, 2, 0), 0.0);
    assert_eq!(out.at(3, 2, 0), 1.0);

    // Even a weak bridge between them does not carry promotion across:
    // the bridge pixel touches the strong pixel and is promoted, the
    // far weak pixel still is not.
    im.set(2, 2, 0, WEAK);
    let out = edge_track(&im, WEAK, STRONG);
    assert_eq!(out.at(2, 2, 0), 1.0);
    assert_eq!(out.at(1, 2, 0), 0.0);
}

#[test]
fn pipeline_scenario_d_reg() {
    // All-zero image through the full pipeline: all-zero edge map, no
    // division errors anywhere.
    let edges = detect_edges(&Image::new(10, 10, 1), &EdgeParams::default()).unwrap();
    assert!(edges.data().iter().all(|&v| v == 0.0));
}

#[test]
fn pipeline_step_edge_reg() {
    // A clean step must produce a thin vertical line of edge pixels
    // near the boundary column.
    let edges = detect_edges(&vertical_step(24, 24), &EdgeParams::default()).unwrap();
    assert_samples_in(&edges, &[0.0, 1.0]);

    let w = edges.width();
    let mut edge_columns = Vec::new();
    for x in 0..w {
        let mut any = false;
        for y in 0..edges.height() {
            if edges.at(x, y, 0) == 1.0 {
                any = true;
            }
        }
        if any {
            edge_columns.push(x);
        }
    }
    assert!(
        !edge_columns.is_empty(),
        "no edges detected on a step image"
    );
    for &x in &edge_columns {
        assert!(
            (x as i32 - w as i32 / 2).abs() <= 3,
            "edge column {x} far from the step at {}",
            w / 2
        );
    }
}
