//! Tests that follow a point around complete tracks.

use assert_approx_eq::assert_approx_eq;
use numerical_path::{
    cgmath::prelude::*,
    math::{CirclePath, FnCurve, LineSegment2d, LoopTheLoopPath, OvalPath, ParametricCurve2d, Point2d},
    Interval, NumericalPath, PathError,
};

/// Test the worked examples for a unit circle.
#[test]
fn unit_circle_scenario() {
    let path = NumericalPath::with_table_size(&CirclePath::default(), 3600).unwrap();
    assert_approx_eq!(path.length(), std::f64::consts::TAU, 1e-3);

    let quarter = path.position_at(path.length() / 4.0);
    assert_approx_eq!(quarter.x, 0.0, 1e-2);
    assert_approx_eq!(quarter.y, 1.0, 1e-2);

    let start = path.slope_at(0.0, None);
    assert_approx_eq!(start.normal.x, 1.0, 1e-6);
    assert_approx_eq!(start.normal.y, 0.0, 1e-6);

    let nearest = path.find_nearest_global(Point2d::new(2.0, 0.0));
    assert_approx_eq!(nearest.pos.distance(Point2d::new(1.0, 0.0)), 0.0, 1e-6);
}

/// Test the worked examples for a straight line.
#[test]
fn line_segment_scenario() {
    let segment = LineSegment2d::from_ends(Point2d::new(0.0, 0.0), Point2d::new(10.0, 0.0));
    let path = NumericalPath::new(&segment).unwrap();
    assert!(path.is_x_monotonic());
    assert_approx_eq!(path.x_to_y(5.0).unwrap(), 0.0);

    let beyond = path.position_at(path.length() + 1.0);
    assert_approx_eq!(beyond.x, 11.0);
    assert_approx_eq!(beyond.y, 0.0);
}

/// Test that a point coasting along a loop-the-loop keeps a smooth path distance.
#[test]
fn coast_through_loop() {
    let track = LoopTheLoopPath::default();
    let path = NumericalPath::new(&track).unwrap();
    let mut point = path.slope_at(path.start_p(), None);
    let mut p = point.p;
    for i in 1..=2000 {
        let t = track.bounds().lerp(i as f64 / 2000.0);
        let target = track.sample(t) + 0.05 * point.normal;
        point = path.find_nearest_local(target, &point);
        // Passing the bottom of the loop, where three branches meet, must not skip ahead
        assert!(point.p >= p - 1e-6, "moved backwards at step {i}");
        assert!(point.p - p < 0.1, "jumped at step {i}");
        p = point.p;
    }
    assert_approx_eq!(p, path.finish_p(), 1e-3);
}

/// Test that laps of a closed track accumulate path distance.
#[test]
fn lap_an_oval() {
    let track = OvalPath::new(2.0, 5.0);
    let path = NumericalPath::new(&track).unwrap();
    let mut point = path.slope_at(0.0, None);
    let steps = 500;
    for i in 1..=2 * steps {
        let t = track.bounds().lerp((i % steps) as f64 / steps as f64);
        point = path.find_nearest_local(track.sample(t), &point);
    }
    assert_approx_eq!(point.p, 2.0 * path.length(), 1e-6);
    // Back at the stitch, from one side or the other
    let wrapped = path.mod_p(point.p);
    assert!(wrapped < 1e-6 || path.length() - wrapped < 1e-6);
}

/// Test that rebuilding a path for a changed curve replaces it wholesale.
#[test]
fn rebuild_after_change() {
    let make = |height: f64| {
        FnCurve::new(
            move |t: f64| Point2d::new(t, height * (1.0 - t * t)),
            Interval::new(-1.0, 1.0),
        )
    };
    let low = NumericalPath::new(&make(0.5)).unwrap();
    let high = NumericalPath::new(&make(2.0)).unwrap();
    assert!(high.length() > low.length());
    assert_approx_eq!(low.x_to_y(0.0).unwrap(), 0.5, 1e-9);
    assert_approx_eq!(high.x_to_y(0.0).unwrap(), 2.0, 1e-9);

    // A hint from the old table is no better than no hint at all
    let old = low.slope_at(low.length() * 0.3, None);
    let with_stale_hint = high.slope_at(old.p, old.idx);
    let without_hint = high.slope_at(old.p, None);
    assert_eq!(with_stale_hint, without_hint);
}

/// Test that unusable curves are reported rather than built.
#[test]
fn malformed_curves() {
    let stuck = FnCurve::new(|_| Point2d::new(0.0, 0.0), Interval::new(0.0, 1.0));
    assert!(matches!(
        NumericalPath::new(&stuck),
        Err(PathError::MalformedPath { .. })
    ));
    let closed = FnCurve::closed(
        |t: f64| Point2d::new(t.cos(), t.sin()),
        Interval::new(0.0, std::f64::consts::TAU),
    );
    let path = NumericalPath::new(&closed).unwrap();
    assert!(path.is_closed_loop());
    assert_eq!(path.x_to_p(0.3), Err(PathError::NonMonotonicX));
}
