use super::{NumericalPath, PathPoint};
use crate::error::{PathError, Result};
use crate::math::{binary_search, interpolate4, linear_search, wrap_angle, Bracket, Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;

impl NumericalPath {
    /// Wraps a path distance into `[start_p, start_p + length)` for closed
    /// loops. Open paths return `p` unchanged.
    pub fn mod_p(&self, p: f64) -> f64 {
        if !self.closed_loop {
            return p;
        }
        let start = self.start_p();
        let wrapped = (p - start).rem_euclid(self.length);
        // Round-off can land exactly on `length`
        if wrapped >= self.length {
            start
        } else {
            start + wrapped
        }
    }

    /// Brings a path distance within the table: wrapped for closed loops,
    /// clamped to `[start_p, finish_p]` for open paths.
    pub fn limit_p(&self, p: f64) -> f64 {
        if self.closed_loop {
            self.mod_p(p)
        } else {
            Interval::new(self.start_p(), self.finish_p()).clamp(p)
        }
    }

    /// The index of the table segment containing the path distance `p`,
    /// after it has been brought within the table by [limit_p](Self::limit_p).
    pub fn table_index_at(&self, p: f64) -> usize {
        self.segment_index(self.limit_p(p), None)
    }

    /// The position at path distance `p`.
    ///
    /// Open paths continue in a straight line beyond either end.
    pub fn position_at(&self, p: f64) -> Point2d {
        if let Some(point) = self.extrapolate(p) {
            return point.pos;
        }
        let q = self.mod_p(p);
        self.position_in_segment(q, self.segment_index(q, None))
    }

    /// Samples the path at path distance `p`, without curvature.
    ///
    /// # Parameters
    /// * `p` - The path distance
    /// * `hint` - The segment index of a nearby earlier result, usually
    ///   [PathPoint::idx], which avoids a full search of the table
    pub fn slope_at(&self, p: f64, hint: Option<usize>) -> PathPoint {
        if let Some(point) = self.extrapolate(p) {
            return point;
        }
        let table = &self.table;
        let q = self.mod_p(p);
        let i = self.segment_index(q, hint);
        let pos = self.position_in_segment(q, i);
        let dp = Vector2d::new(
            self.interpolate(&table.dxdp, q, i),
            self.interpolate(&table.dydp, q, i),
        );
        let normal_dp = Vector2d::new(
            self.interpolate(&table.normal_x_dp, q, i),
            self.interpolate(&table.normal_y_dp, q, i),
        );
        PathPoint::from_derivatives(p, Some(i), pos, dp, normal_dp)
    }

    /// Samples the path at path distance `p`, including its radius of curvature.
    ///
    /// The radius is infinite within two samples of either end of an open path.
    pub fn slope_at_with_radius(&self, p: f64, hint: Option<usize>) -> PathPoint {
        let mut point = self.slope_at(p, hint);
        let beyond_ends =
            !self.closed_loop && !Interval::new(self.start_p(), self.finish_p()).contains(p);
        let radius = match point.idx {
            Some(i) if !beyond_ends => self.radius_in_segment(i),
            _ => f64::INFINITY,
        };
        point.radius = Some(radius);
        point
    }

    /// The x coordinate at path distance `p`.
    ///
    /// # Errors
    /// [PathError::NonMonotonicX] if x is not monotonic along the path.
    pub fn x_at(&self, p: f64) -> Result<f64> {
        self.require_x_monotonic()?;
        Ok(self.position_at(p).x)
    }

    /// The y coordinate at path distance `p`.
    ///
    /// # Errors
    /// [PathError::NonMonotonicX] if x is not monotonic along the path.
    pub fn y_at(&self, p: f64) -> Result<f64> {
        self.require_x_monotonic()?;
        Ok(self.position_at(p).y)
    }

    /// The path distance at which the path reaches the given x coordinate.
    ///
    /// # Errors
    /// [PathError::NonMonotonicX] if x is not monotonic along the path.
    pub fn x_to_p(&self, x: f64) -> Result<f64> {
        self.require_x_monotonic()?;
        let table = &self.table;
        Ok(match self.x_boundary(x) {
            Some(edge) if edge.dp.x.abs() > f64::EPSILON => edge.p + (x - edge.pos.x) / edge.dp.x,
            Some(edge) => edge.p,
            None => {
                let i = binary_search(&table.x, x).segment(table.len());
                interpolate4(&table.x, &table.p, x, i as isize - 1)
            }
        })
    }

    /// The y coordinate of the path at the given x coordinate.
    ///
    /// # Errors
    /// [PathError::NonMonotonicX] if x is not monotonic along the path.
    pub fn x_to_y(&self, x: f64) -> Result<f64> {
        self.require_x_monotonic()?;
        let table = &self.table;
        Ok(match self.x_boundary(x) {
            Some(edge) if edge.slope.is_finite() => edge.pos.y + (x - edge.pos.x) * edge.slope,
            Some(edge) => edge.pos.y,
            None => {
                let i = binary_search(&table.x, x).segment(table.len());
                interpolate4(&table.x, &table.y, x, i as isize - 1)
            }
        })
    }

    fn require_x_monotonic(&self) -> Result<()> {
        if self.x_monotonic {
            Ok(())
        } else {
            Err(PathError::NonMonotonicX)
        }
    }

    /// The end of the path lying beyond `x`, if `x` is outside the table.
    fn x_boundary(&self, x: f64) -> Option<&PathPoint> {
        match binary_search(&self.table.x, x) {
            Bracket::Before => Some(&self.start_point),
            Bracket::After => Some(&self.end_point),
            Bracket::At(_) => None,
        }
    }

    /// Finds the segment containing `q`, which must already be within the table.
    ///
    /// A hint which still brackets `q` is used as is, otherwise the search
    /// walks from the hint. Without a hint the whole table is searched.
    pub(super) fn segment_index(&self, q: f64, hint: Option<usize>) -> usize {
        let p = &self.table.p;
        let n = p.len();
        match hint {
            Some(i)
                if i < n - 1
                    && p[i] <= q
                    && (q < p[i + 1] || (i + 2 == n && q == p[i + 1])) =>
            {
                i
            }
            Some(i) => linear_search(p, q, i).segment(n),
            None => binary_search(p, q).segment(n),
        }
    }

    /// Interpolates the position within segment `i`.
    fn position_in_segment(&self, q: f64, i: usize) -> Point2d {
        Point2d::new(
            self.interpolate(&self.table.x, q, i),
            self.interpolate(&self.table.y, q, i),
        )
    }

    /// Interpolates a table column at path distance `q`, which lies in segment `i`.
    ///
    /// The cubic is fitted to the samples `i - 1 ..= i + 2`. Near the ends of a
    /// closed loop these wrap around the stitch.
    fn interpolate(&self, column: &[f64], q: f64, i: usize) -> f64 {
        let n = self.table.len() as isize;
        let k = i as isize - 1;
        if self.closed_loop && (k < 0 || k + 4 > n) {
            let mut ps = [0.0; 4];
            let mut vals = [0.0; 4];
            for (j, idx) in (k..k + 4).enumerate() {
                let (idx, p) = self.wrapped_sample(idx);
                ps[j] = p;
                vals[j] = column[idx];
            }
            return interpolate4(&ps, &vals, q, 0);
        }
        interpolate4(&self.table.p, column, q, k)
    }

    /// Maps an index up to one lap outside a closed table onto a sample, along
    /// with the sample's path distance shifted onto the same lap as the index.
    fn wrapped_sample(&self, idx: isize) -> (usize, f64) {
        let p = &self.table.p;
        let n = p.len() as isize;
        // Samples 0 and n - 1 coincide, so a lap is n - 1 samples
        let period = n - 1;
        if idx < 0 {
            let i = (idx + period) as usize;
            (i, p[i] - self.length)
        } else if idx >= n {
            let i = (idx - period) as usize;
            (i, p[i] + self.length)
        } else {
            (idx as usize, p[idx as usize])
        }
    }

    /// Estimates the radius of curvature in segment `i` from the change in
    /// tangent angle between the samples either side of it.
    fn radius_in_segment(&self, i: usize) -> f64 {
        let table = &self.table;
        let n = table.len();
        let (a, b) = (i as isize - 1, i as isize + 2);
        let ((a, pa), (b, pb)) = if self.closed_loop {
            (self.wrapped_sample(a), self.wrapped_sample(b))
        } else if i >= 2 && i + 4 <= n {
            let (a, b) = (a as usize, b as usize);
            ((a, table.p[a]), (b, table.p[b]))
        } else {
            return f64::INFINITY;
        };
        let angle = |k: usize| table.dydp[k].atan2(table.dxdp[k]);
        let turn = wrap_angle(angle(b) - angle(a));
        let radius = (pb - pa) / turn;
        if radius.is_finite() {
            radius
        } else {
            f64::INFINITY
        }
    }

    /// For open paths, continues the path in a straight line beyond its ends.
    fn extrapolate(&self, p: f64) -> Option<PathPoint> {
        if self.closed_loop {
            return None;
        }
        let edge = if p < self.start_p() {
            &self.start_point
        } else if p > self.finish_p() {
            &self.end_point
        } else {
            return None;
        };
        Some(PathPoint {
            p,
            pos: edge.pos + edge.dp * (p - edge.p),
            normal_dp: Vector2d::zero(),
            radius: None,
            ..*edge
        })
    }
}
