use crate::math::{normal_from_tangent, Point2d, Rect2d, Vector2d, VERTICAL_EPSILON};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use table::Table;

pub use nearest::LOCAL_SEARCH_TOLERANCE;
pub use points::PathPoints;

mod nearest;
mod points;
mod query;
mod table;

/// The number of samples in a table built with [NumericalPath::new].
pub const DEFAULT_TABLE_SIZE: usize = 9000;

/// The fewest samples a table can be built from.
pub const MIN_TABLE_SIZE: usize = 4;

/// A curve approximated by a dense table of samples, addressed by path distance.
///
/// Path distance `p` is the cumulative chord length between samples, starting
/// at zero. The table is built once from a [ParametricCurve2d](crate::math::ParametricCurve2d)
/// and never changes; a curve that changes shape is rebuilt from scratch.
#[derive(Clone, Debug)]
pub struct NumericalPath {
    /// The sampled curve and its derivatives.
    table: Table,
    /// Whether the last sample connects back to the first.
    closed_loop: bool,
    /// The total path distance covered by the table.
    length: f64,
    /// The bounding box of all samples.
    bounds: Rect2d,
    /// Whether x is strictly monotonic along the table.
    x_monotonic: bool,
    /// The first sample, anchoring extrapolation before the start.
    start_point: PathPoint,
    /// The last sample, anchoring extrapolation past the end.
    end_point: PathPoint,
}

/// The result of querying a [NumericalPath] at some path distance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathPoint {
    /// The path distance of the point. For closed loops this keeps whatever
    /// lap the caller is on, so it may exceed the path's length.
    pub p: f64,
    /// The table segment containing the point. Pass it back into later
    /// queries to speed up the search; `None` means there is no hint.
    pub idx: Option<usize>,
    /// The position of the point.
    pub pos: Point2d,
    /// The gradient `dy/dx`, which is infinite where the path is vertical.
    pub slope: f64,
    /// `1.0` if x increases with `p`, `-1.0` if it decreases. Where the path is
    /// vertical, `1.0` if y increases with `p`.
    pub direction: f64,
    /// The unit tangent, pointing in the direction of increasing `p`.
    pub tangent: Vector2d,
    /// The unit normal, pointing to the right of the tangent.
    pub normal: Vector2d,
    /// The derivative of `normal` with respect to `p`.
    pub normal_dp: Vector2d,
    /// The derivative of `pos` with respect to `p`.
    pub dp: Vector2d,
    /// The signed radius of curvature, positive when turning anticlockwise.
    /// Only computed on request, and infinite where the path is straight.
    pub radius: Option<f64>,
}

impl PathPoint {
    /// Creates a point from its position and derivatives.
    pub(crate) fn from_derivatives(
        p: f64,
        idx: Option<usize>,
        pos: Point2d,
        dp: Vector2d,
        normal_dp: Vector2d,
    ) -> Self {
        use cgmath::InnerSpace;

        let (slope, direction) = if dp.x.abs() < VERTICAL_EPSILON {
            (f64::INFINITY, if dp.y < 0.0 { -1.0 } else { 1.0 })
        } else {
            (dp.y / dp.x, dp.x.signum())
        };
        let magnitude = dp.magnitude();
        let tangent = if magnitude > VERTICAL_EPSILON {
            dp / magnitude
        } else {
            Vector2d::new(0.0, direction)
        };
        let point = Self {
            p,
            idx,
            pos,
            slope,
            direction,
            tangent,
            normal: normal_from_tangent(dp),
            normal_dp,
            dp,
            radius: None,
        };
        point.debug_check();
        point
    }

    /// Checks the point is free of NaNs and its unit vectors are normalised.
    fn debug_check(&self) {
        use cgmath::InnerSpace;

        debug_assert!(self.p.is_finite(), "non-finite path distance {}", self.p);
        debug_assert!(self.pos.x.is_finite() && self.pos.y.is_finite());
        debug_assert!(!self.slope.is_nan());
        debug_assert!((self.tangent.magnitude() - 1.0).abs() < 1e-6);
        debug_assert!((self.normal.magnitude() - 1.0).abs() < 1e-6);
        debug_assert!(self.normal_dp.x.is_finite() && self.normal_dp.y.is_finite());
    }
}

impl NumericalPath {
    /// The total path distance from start to finish.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The path distance at the first sample.
    pub fn start_p(&self) -> f64 {
        self.start_point.p
    }

    /// The path distance at the last sample.
    pub fn finish_p(&self) -> f64 {
        self.end_point.p
    }

    /// Whether the path's end connects back to its start.
    pub fn is_closed_loop(&self) -> bool {
        self.closed_loop
    }

    /// Whether x strictly increases or strictly decreases along the path,
    /// which is required by the x-indexed queries.
    pub fn is_x_monotonic(&self) -> bool {
        self.x_monotonic
    }

    /// The world space bounding box of the path.
    pub fn bounds(&self) -> Rect2d {
        self.bounds
    }

    /// The number of samples in the table.
    pub fn sample_count(&self) -> usize {
        self.table.len()
    }

    /// The first sample of the path.
    pub fn start_point(&self) -> &PathPoint {
        &self.start_point
    }

    /// The last sample of the path.
    pub fn end_point(&self) -> &PathPoint {
        &self.end_point
    }
}
