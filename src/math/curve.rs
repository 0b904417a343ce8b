use super::Point2d;
use crate::util::Interval;

/// A parametric curve in 2D space.
pub trait ParametricCurve2d {
    /// Samples the parametric curve.
    fn sample(&self, t: f64) -> Point2d;

    /// Returns the minimum and maximum t-values that define the bounds of the curve.
    fn bounds(&self) -> Interval<f64>;

    /// Whether the curve's end connects back to its start.
    ///
    /// A closed curve must return to its starting point at the maximum t-value.
    fn is_closed_loop(&self) -> bool {
        false
    }
}

impl<T: ParametricCurve2d + ?Sized> ParametricCurve2d for &T {
    fn sample(&self, t: f64) -> Point2d {
        (**self).sample(t)
    }

    fn bounds(&self) -> Interval<f64> {
        (**self).bounds()
    }

    fn is_closed_loop(&self) -> bool {
        (**self).is_closed_loop()
    }
}

/// A parametric curve defined by a closure.
pub struct FnCurve<F>
where
    F: Fn(f64) -> Point2d,
{
    func: F,
    bounds: Interval<f64>,
    closed_loop: bool,
}

impl<F> FnCurve<F>
where
    F: Fn(f64) -> Point2d,
{
    /// Creates an open curve from a function of `t` over the given bounds.
    pub fn new(func: F, bounds: Interval<f64>) -> Self {
        Self {
            func,
            bounds,
            closed_loop: false,
        }
    }

    /// Creates a closed curve; `func` must return the same point at both ends of `bounds`.
    pub fn closed(func: F, bounds: Interval<f64>) -> Self {
        Self {
            func,
            bounds,
            closed_loop: true,
        }
    }
}

impl<F> ParametricCurve2d for FnCurve<F>
where
    F: Fn(f64) -> Point2d,
{
    #[inline(always)]
    fn sample(&self, t: f64) -> Point2d {
        (self.func)(t)
    }

    #[inline(always)]
    fn bounds(&self) -> Interval<f64> {
        self.bounds
    }

    #[inline(always)]
    fn is_closed_loop(&self) -> bool {
        self.closed_loop
    }
}
