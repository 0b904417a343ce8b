use super::{NumericalPath, PathPoint, DEFAULT_TABLE_SIZE, MIN_TABLE_SIZE};
use crate::error::{PathError, Result};
use crate::math::{derivative3, normal_from_tangent, ParametricCurve2d, Point2d, Rect2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;
use log::{debug, warn};

/// Parallel arrays holding the sampled curve.
#[derive(Clone, Debug)]
pub(super) struct Table {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Cumulative chord length; strictly increasing.
    pub p: Vec<f64>,
    pub dxdp: Vec<f64>,
    pub dydp: Vec<f64>,
    pub normal_x: Vec<f64>,
    pub normal_y: Vec<f64>,
    pub normal_x_dp: Vec<f64>,
    pub normal_y_dp: Vec<f64>,
}

impl NumericalPath {
    /// Builds a path from the given parametric curve, with the default table size.
    pub fn new<C: ParametricCurve2d + ?Sized>(curve: &C) -> Result<Self> {
        Self::with_table_size(curve, DEFAULT_TABLE_SIZE)
    }

    /// Builds a path from the given parametric curve, sampled at `size`
    /// uniformly spaced values of `t`.
    ///
    /// # Errors
    /// * [PathError::TableTooSmall] if `size` is less than [MIN_TABLE_SIZE]
    /// * [PathError::MalformedPath] if the curve does not progress between two
    ///   consecutive samples, or produces non-finite points
    pub fn with_table_size<C: ParametricCurve2d + ?Sized>(curve: &C, size: usize) -> Result<Self> {
        if size < MIN_TABLE_SIZE {
            warn!("rejected path table of {} samples", size);
            return Err(PathError::TableTooSmall {
                size,
                min: MIN_TABLE_SIZE,
            });
        }

        let closed_loop = curve.is_closed_loop();
        let table = Table::sample(curve, size, closed_loop).map_err(|err| {
            warn!("rejected path table: {}", err);
            err
        })?;

        let bounds = Rect2d {
            x: Interval::enclosing(table.x.iter().copied()).unwrap_or_default(),
            y: Interval::enclosing(table.y.iter().copied()).unwrap_or_default(),
        };
        let x_monotonic = is_strictly_monotonic(&table.x);
        let length = table.p[size - 1] - table.p[0];

        debug!(
            "built path table: {} samples, length {:.6}, closed loop: {}, monotonic x: {}",
            size, length, closed_loop, x_monotonic
        );

        Ok(Self {
            start_point: table.row(0),
            end_point: table.row(size - 1),
            table,
            closed_loop,
            length,
            bounds,
            x_monotonic,
        })
    }
}

impl Table {
    /// Samples the curve and derives the tangent and normal columns.
    fn sample<C: ParametricCurve2d + ?Sized>(curve: &C, size: usize, closed_loop: bool) -> Result<Self> {
        let ts = curve.bounds();
        let delta = ts.length() / (size - 1) as f64;

        let mut x = Vec::with_capacity(size);
        let mut y = Vec::with_capacity(size);
        let mut p = Vec::with_capacity(size);
        let mut last: Option<Point2d> = None;
        let mut dist = 0.0;
        for i in 0..size {
            // Hit the end exactly, so closed loops meet themselves
            let t = if i + 1 == size { ts.max } else { ts.min + i as f64 * delta };
            let point = curve.sample(t);
            if let Some(last) = last {
                dist += point.distance(last);
            }
            x.push(point.x);
            y.push(point.y);
            p.push(dist);
            last = Some(point);
        }

        // Written so that NaN distances also fail
        if let Some(i) = p.windows(2).position(|w| !(w[0] < w[1])) {
            return Err(PathError::MalformedPath {
                index: i + 1,
                p: p[i + 1],
            });
        }

        let dxdp = derivatives(&p, &x, closed_loop);
        let dydp = derivatives(&p, &y, closed_loop);

        let (normal_x, normal_y): (Vec<_>, Vec<_>) = dxdp
            .iter()
            .zip(&dydp)
            .map(|(&dx, &dy)| {
                let normal = normal_from_tangent(Vector2d::new(dx, dy));
                (normal.x, normal.y)
            })
            .unzip();

        let normal_x_dp = derivatives(&p, &normal_x, closed_loop);
        let normal_y_dp = derivatives(&p, &normal_y, closed_loop);

        Ok(Self {
            x,
            y,
            p,
            dxdp,
            dydp,
            normal_x,
            normal_y,
            normal_x_dp,
            normal_y_dp,
        })
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.p.len()
    }

    /// The position of sample `i`.
    pub fn pos(&self, i: usize) -> Point2d {
        Point2d::new(self.x[i], self.y[i])
    }

    /// Reads sample `i` without interpolation.
    pub fn row(&self, i: usize) -> PathPoint {
        let dp = Vector2d::new(self.dxdp[i], self.dydp[i]);
        let normal_dp = Vector2d::new(self.normal_x_dp[i], self.normal_y_dp[i]);
        let idx = usize::min(i, self.len() - 2);
        PathPoint::from_derivatives(self.p[i], Some(idx), self.pos(i), dp, normal_dp)
    }
}

/// Differentiates `vals` with respect to `p` at every sample, using three-point
/// formulas: centred in the interior, one-sided at the ends of an open curve,
/// and centred across the stitch of a closed loop.
fn derivatives(p: &[f64], vals: &[f64], closed_loop: bool) -> Vec<f64> {
    let n = p.len();
    let length = p[n - 1] - p[0];
    (0..n)
        .map(|i| {
            if closed_loop && (i == 0 || i + 1 == n) {
                // Samples 0 and n - 1 are the same point on the curve
                let ps = [p[n - 2] - length, p[0], p[1]];
                return derivative3(ps, [vals[n - 2], vals[i], vals[1]], 1);
            }
            let (k, at) = match i {
                0 => (0, 0),
                i if i + 1 == n => (n - 3, 2),
                i => (i - 1, 1),
            };
            derivative3(
                [p[k], p[k + 1], p[k + 2]],
                [vals[k], vals[k + 1], vals[k + 2]],
                at,
            )
        })
        .collect()
}

fn is_strictly_monotonic(vals: &[f64]) -> bool {
    vals.windows(2).all(|w| w[0] < w[1]) || vals.windows(2).all(|w| w[0] > w[1])
}
