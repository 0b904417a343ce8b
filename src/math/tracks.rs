//! Ready-made tracks for constrained-motion demos.

use super::curve::ParametricCurve2d;
use super::{Point2d, Vector2d};
use crate::util::Interval;
use std::f64::consts::{PI, TAU};

/// A straight line segment
#[derive(Copy, Clone, Debug)]
pub struct LineSegment2d {
    start: Point2d,
    end: Point2d,
}

impl LineSegment2d {
    pub const fn from_ends(start: Point2d, end: Point2d) -> Self {
        Self { start, end }
    }
}

impl ParametricCurve2d for LineSegment2d {
    fn sample(&self, t: f64) -> Point2d {
        self.start + (self.end - self.start) * t
    }

    fn bounds(&self) -> Interval<f64> {
        Interval::new(0.0, 1.0)
    }
}

/// A circle traversed anticlockwise, starting at its rightmost point.
#[derive(Copy, Clone, Debug)]
pub struct CirclePath {
    centre: Point2d,
    radius: f64,
}

impl CirclePath {
    pub const fn new(centre: Point2d, radius: f64) -> Self {
        Self { centre, radius }
    }
}

impl Default for CirclePath {
    fn default() -> Self {
        Self::new(Point2d::new(0.0, 0.0), 1.0)
    }
}

impl ParametricCurve2d for CirclePath {
    fn sample(&self, t: f64) -> Point2d {
        self.centre + self.radius * Vector2d::new(t.cos(), t.sin())
    }

    fn bounds(&self) -> Interval<f64> {
        Interval::new(0.0, TAU)
    }

    fn is_closed_loop(&self) -> bool {
        true
    }
}

/// A stadium-shaped oval: two semicircles joined by straight sections,
/// traversed anticlockwise from the left end of the bottom straight.
#[derive(Copy, Clone, Debug)]
pub struct OvalPath {
    radius: f64,
    straight: f64,
}

impl OvalPath {
    /// # Parameters
    /// * `radius` - The radius of the semicircular ends
    /// * `straight` - The length of each straight section
    pub const fn new(radius: f64, straight: f64) -> Self {
        Self { radius, straight }
    }
}

impl Default for OvalPath {
    fn default() -> Self {
        Self::new(1.0, 2.0)
    }
}

impl ParametricCurve2d for OvalPath {
    fn sample(&self, t: f64) -> Point2d {
        let (r, s) = (self.radius, self.straight);
        let half_turn = PI * r;
        if t < s {
            Point2d::new(t - 0.5 * s, -r)
        } else if t < s + half_turn {
            let angle = -0.5 * PI + (t - s) / r;
            Point2d::new(0.5 * s + r * angle.cos(), r * angle.sin())
        } else if t < 2.0 * s + half_turn {
            Point2d::new(0.5 * s - (t - s - half_turn), r)
        } else {
            let angle = 0.5 * PI + (t - 2.0 * s - half_turn) / r;
            Point2d::new(-0.5 * s + r * angle.cos(), r * angle.sin())
        }
    }

    fn bounds(&self) -> Interval<f64> {
        Interval::new(0.0, 2.0 * self.straight + TAU * self.radius)
    }

    fn is_closed_loop(&self) -> bool {
        true
    }
}

/// The lemniscate of Bernoulli, a figure-eight which crosses itself at the origin.
///
/// The curve starts at the crossing heading down and to the right.
#[derive(Copy, Clone, Debug)]
pub struct LemniscatePath {
    size: f64,
}

impl LemniscatePath {
    /// # Parameters
    /// * `size` - The distance from the crossing to either end of the figure-eight
    pub const fn new(size: f64) -> Self {
        Self { size }
    }
}

impl Default for LemniscatePath {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ParametricCurve2d for LemniscatePath {
    fn sample(&self, t: f64) -> Point2d {
        let (sin, cos) = t.sin_cos();
        let scale = self.size / (1.0 + sin * sin);
        Point2d::new(scale * cos, scale * sin * cos)
    }

    fn bounds(&self) -> Interval<f64> {
        Interval::new(-0.5 * PI, 1.5 * PI)
    }

    fn is_closed_loop(&self) -> bool {
        true
    }
}

/// A hill between two valleys: `y = 3 - 7/6 x^2 + 1/6 x^4`.
#[derive(Copy, Clone, Debug)]
pub struct HumpPath {
    bounds: Interval<f64>,
}

impl HumpPath {
    pub const fn new(x_min: f64, x_max: f64) -> Self {
        Self {
            bounds: Interval::new(x_min, x_max),
        }
    }
}

impl Default for HumpPath {
    fn default() -> Self {
        Self::new(-3.0, 3.0)
    }
}

impl ParametricCurve2d for HumpPath {
    fn sample(&self, t: f64) -> Point2d {
        let t2 = t * t;
        Point2d::new(t, 3.0 - 7.0 / 6.0 * t2 + t2 * t2 / 6.0)
    }

    fn bounds(&self) -> Interval<f64> {
        self.bounds
    }
}

/// A roller-coaster loop: a parabolic ramp down into a vertical circle,
/// and a parabolic ramp back up once the circle is complete.
///
/// The loop touches the ground at the origin, where both ramps also meet it.
#[derive(Copy, Clone, Debug)]
pub struct LoopTheLoopPath {
    radius: f64,
    ramp: f64,
    steepness: f64,
}

impl LoopTheLoopPath {
    /// # Parameters
    /// * `radius` - The radius of the loop
    /// * `ramp` - The horizontal length of each ramp
    /// * `steepness` - The coefficient `k` of each ramp's parabola `y = k x^2`
    pub const fn new(radius: f64, ramp: f64, steepness: f64) -> Self {
        Self {
            radius,
            ramp,
            steepness,
        }
    }

    fn loop_length(&self) -> f64 {
        TAU * self.radius
    }
}

impl Default for LoopTheLoopPath {
    fn default() -> Self {
        Self::new(1.0, 3.0, 0.5)
    }
}

impl ParametricCurve2d for LoopTheLoopPath {
    fn sample(&self, t: f64) -> Point2d {
        let r = self.radius;
        if t < 0.0 {
            Point2d::new(t, self.steepness * t * t)
        } else if t <= self.loop_length() {
            let angle = t / r;
            Point2d::new(r * angle.sin(), r * (1.0 - angle.cos()))
        } else {
            let x = t - self.loop_length();
            Point2d::new(x, self.steepness * x * x)
        }
    }

    fn bounds(&self) -> Interval<f64> {
        Interval::new(-self.ramp, self.loop_length() + self.ramp)
    }
}
