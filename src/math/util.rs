use super::Vector2d;
use cgmath::prelude::*;

/// Tangent components smaller than this are treated as zero when choosing a normal.
pub const VERTICAL_EPSILON: f64 = 1e-12;

/// Rotates a vector 90 degrees clockwise.
pub fn rot90_cw(vec: Vector2d) -> Vector2d {
    Vector2d::new(vec.y, -vec.x)
}

/// Computes the unit normal of a curve from its derivative with respect to path distance.
///
/// The normal points to the right of the direction of travel. Axis-aligned
/// tangents snap to an exact axis so the sign never depends on round-off, and
/// a degenerate (zero) tangent yields an axis-aligned normal instead of NaN.
///
/// # Parameters
/// * `dp` - The vector `(dx/dp, dy/dp)`
pub fn normal_from_tangent(dp: Vector2d) -> Vector2d {
    if dp.x.abs() < VERTICAL_EPSILON {
        Vector2d::new(dp.y.signum(), 0.0)
    } else if dp.y.abs() < VERTICAL_EPSILON {
        Vector2d::new(0.0, -dp.x.signum())
    } else {
        rot90_cw(dp.normalize())
    }
}

/// Wraps an angle into the range `(-pi, pi]`.
pub fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
