use super::{NumericalPath, PathPoint};
use crate::debug::debug_point;
use crate::math::Point2d;
use cgmath::prelude::*;
use itertools::Itertools;
use log::trace;

/// The local nearest point search stops refining once its step, in units of
/// path distance, falls below this.
pub const LOCAL_SEARCH_TOLERANCE: f64 = 1e-9;

impl NumericalPath {
    /// Finds the table sample closest to `target`, by checking every sample.
    ///
    /// The result is not interpolated between samples, so it is best used as
    /// the starting point for [find_nearest_local](Self::find_nearest_local).
    pub fn find_nearest_global(&self, target: Point2d) -> PathPoint {
        let table = &self.table;
        let nearest = (0..table.len())
            .map(|i| (table.pos(i) - target).magnitude2())
            .position_min_by(|a, b| a.total_cmp(b))
            .unwrap_or(0);
        table.row(nearest)
    }

    /// Finds the point on the path closest to `target`, searching only the
    /// neighbourhood of an earlier result.
    ///
    /// Because the search never leaves the neighbourhood of `previous`, it
    /// keeps following the same branch where the path crosses itself.
    ///
    /// For closed loops the returned path distance continues on from
    /// `previous.p` across the stitch rather than wrapping, provided the
    /// target has moved less than a third of the loop since `previous`.
    pub fn find_nearest_local(&self, target: Point2d, previous: &PathPoint) -> PathPoint {
        let table = &self.table;
        let n = table.len();
        let distance2 = |pos: Point2d| (pos - target).magnitude2();

        // Hill-climb over the raw samples, halving the step when stuck
        let mut i = self.segment_index(self.limit_p(previous.p), previous.idx);
        let mut best = distance2(table.pos(i));
        let mut step = usize::max(n / 20, 1);
        while step >= 2 {
            let forward = self.step_index(i, step as isize);
            let backward = self.step_index(i, -(step as isize));
            let (fwd_dist, back_dist) = (distance2(table.pos(forward)), distance2(table.pos(backward)));
            debug_point("nearest-table", table.pos(forward));
            debug_point("nearest-table", table.pos(backward));
            if fwd_dist < best && fwd_dist <= back_dist {
                (i, best) = (forward, fwd_dist);
            } else if back_dist < best {
                (i, best) = (backward, back_dist);
            } else {
                step /= 2;
            }
        }

        // Refine between samples with interpolated positions
        let spacing = self.length / (n - 1) as f64;
        let mut p = table.p[i];
        let mut delta = 2.0 * spacing;
        while delta > LOCAL_SEARCH_TOLERANCE {
            let forward = self.limit_p(p + delta);
            let backward = self.limit_p(p - delta);
            let (fwd_pos, back_pos) = (self.position_at(forward), self.position_at(backward));
            debug_point("nearest-interp", fwd_pos);
            debug_point("nearest-interp", back_pos);
            let (fwd_dist, back_dist) = (distance2(fwd_pos), distance2(back_pos));
            if fwd_dist < best && fwd_dist <= back_dist {
                (p, best) = (forward, fwd_dist);
            } else if back_dist < best {
                (p, best) = (backward, back_dist);
            } else {
                delta *= 0.5;
            }
        }

        trace!(
            "nearest point to ({:.4}, {:.4}) at p = {:.6}, distance {:.6}",
            target.x,
            target.y,
            p,
            best.sqrt()
        );

        let hint = self.segment_index(p, Some(i));
        self.slope_at(self.continue_lap(p, previous.p), Some(hint))
    }

    /// Moves along the table by `step` samples, wrapping around closed loops
    /// and stopping at the ends of open paths.
    fn step_index(&self, i: usize, step: isize) -> usize {
        let n = self.table.len() as isize;
        let j = i as isize + step;
        if self.closed_loop {
            j.rem_euclid(n - 1) as usize
        } else {
            j.clamp(0, n - 1) as usize
        }
    }

    /// Places a wrapped path distance on the same lap as `previous`, moving to
    /// the next or previous lap if the stitch was crossed in between.
    fn continue_lap(&self, p: f64, previous: f64) -> f64 {
        if !self.closed_loop {
            return p;
        }
        let length = self.length;
        let previous_wrapped = self.mod_p(previous);
        let lap_start = previous - previous_wrapped;
        let mut unwrapped = lap_start + p;
        if previous_wrapped > 2.0 * length / 3.0 && p < length / 3.0 {
            unwrapped += length;
        } else if previous_wrapped < length / 3.0 && p > 2.0 * length / 3.0 {
            unwrapped -= length;
        }
        unwrapped
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{CirclePath, LemniscatePath, LineSegment2d, LoopTheLoopPath};
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::TAU;

    #[test]
    fn global_search_on_circle() {
        let path = NumericalPath::with_table_size(&CirclePath::default(), 3600).unwrap();
        let nearest = path.find_nearest_global(Point2d::new(2.0, 0.0));
        assert_approx_eq!(nearest.pos.x, 1.0, 1e-9);
        assert_approx_eq!(nearest.pos.y, 0.0, 1e-9);

        let nearest = path.find_nearest_global(Point2d::new(0.0, -3.0));
        assert_approx_eq!(nearest.pos.x, 0.0, 1e-3);
        assert_approx_eq!(nearest.pos.y, -1.0, 1e-6);
        assert_approx_eq!(nearest.p, 0.75 * path.length(), 1e-3);
    }

    #[test]
    fn global_search_returns_raw_sample() {
        let segment = LineSegment2d::from_ends(Point2d::new(0.0, 0.0), Point2d::new(9.0, 0.0));
        let path = NumericalPath::with_table_size(&segment, 10).unwrap();
        let nearest = path.find_nearest_global(Point2d::new(4.4, 1.0));
        assert_approx_eq!(nearest.pos.x, 4.0, 1e-9);
        assert_eq!(nearest.idx, Some(4));
    }

    #[test]
    fn local_search_interpolates() {
        let path = NumericalPath::with_table_size(&CirclePath::default(), 360).unwrap();
        let start = path.slope_at(0.3, None);
        let angle: f64 = 0.4321;
        let target = Point2d::new(2.0 * angle.cos(), 2.0 * angle.sin());
        let nearest = path.find_nearest_local(target, &start);
        assert_approx_eq!(nearest.p, angle * path.length() / TAU, 1e-6);
        assert_approx_eq!(nearest.pos.distance(target), 1.0, 1e-6);
    }

    #[test]
    fn local_search_stays_on_branch() {
        // The lemniscate starts at its crossing heading along y = -x,
        // and returns to the crossing halfway round along y = x.
        let path = NumericalPath::new(&LemniscatePath::default()).unwrap();
        let start = path.slope_at(0.0, None);
        let target = Point2d::new(0.1, 0.08);

        let global = path.find_nearest_global(target);
        assert_approx_eq!(global.pos.x, 0.09, 5e-3);
        assert_approx_eq!(global.pos.y, 0.09, 5e-3);

        let local = path.find_nearest_local(target, &start);
        assert_approx_eq!(local.pos.x, 0.01, 5e-3);
        assert_approx_eq!(local.pos.y, -0.01, 5e-3);
        assert!(local.p < 0.1 * path.length());
        assert!(local.pos.distance(target) > global.pos.distance(target));
    }

    #[test]
    fn local_search_keeps_counting_laps() {
        let path = NumericalPath::with_table_size(&CirclePath::default(), 3600).unwrap();
        let mut point = path.slope_at(0.0, None);
        let mut angle: f64 = 0.0;
        // Three laps anticlockwise...
        while angle < 3.0 * TAU {
            angle += 0.05;
            let target = Point2d::new(1.5 * angle.cos(), 1.5 * angle.sin());
            point = path.find_nearest_local(target, &point);
            assert_approx_eq!(point.p, angle * path.length() / TAU, 1e-6);
        }
        // ...and back past the start
        while angle > -TAU {
            angle -= 0.05;
            let target = Point2d::new(0.5 * angle.cos(), 0.5 * angle.sin());
            point = path.find_nearest_local(target, &point);
            assert_approx_eq!(point.p, angle * path.length() / TAU, 1e-6);
        }
    }

    #[test]
    fn local_search_at_open_ends() {
        let path = NumericalPath::new(&LoopTheLoopPath::default()).unwrap();
        let start = *path.start_point();
        let nearest = path.find_nearest_local(Point2d::new(-10.0, 4.5), &start);
        assert_eq!(nearest.p, path.start_p());
        let end = *path.end_point();
        let nearest = path.find_nearest_local(Point2d::new(10.0, 4.5), &end);
        assert_eq!(nearest.p, path.finish_p());
    }

    #[test]
    fn local_search_without_hint() {
        let path = NumericalPath::new(&LoopTheLoopPath::default()).unwrap();
        let stale = PathPoint {
            idx: Some(path.sample_count() + 100),
            ..*path.start_point()
        };
        let nearest = path.find_nearest_local(Point2d::new(-2.0, 2.5), &stale);
        // Nearest point on the entry ramp y = x^2 / 2
        assert!(nearest.pos.x < 0.0);
        assert_approx_eq!(tangential_offset(nearest, Point2d::new(-2.0, 2.5)), 0.0, 1e-6);
    }

    /// The component of the offset to `target` along the path's tangent.
    fn tangential_offset(point: PathPoint, target: Point2d) -> f64 {
        (target - point.pos).dot(point.tangent)
    }
}
