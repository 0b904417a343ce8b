use super::NumericalPath;
use crate::math::Point2d;

/// An iterator over roughly evenly spaced samples of a [NumericalPath],
/// for drawing it as a polyline.
///
/// Always includes the first and last samples.
#[derive(Clone)]
pub struct PathPoints<'a> {
    path: &'a NumericalPath,
    /// The minimum path distance between consecutive points.
    delta: f64,
    /// The table index of the next point, if any.
    next: Option<usize>,
    /// Whether the iterator yields anything at all.
    empty: bool,
}

impl NumericalPath {
    /// Iterates over about `count` samples of the path, spaced evenly by path distance.
    pub fn points(&self, count: usize) -> PathPoints<'_> {
        PathPoints::new(self, count)
    }
}

impl<'a> PathPoints<'a> {
    fn new(path: &'a NumericalPath, count: usize) -> Self {
        let empty = count == 0;
        Self {
            path,
            delta: path.length() / count as f64,
            next: (!empty).then_some(0),
            empty,
        }
    }

    /// Starts the iteration again from the first sample.
    pub fn rewind(&mut self) {
        self.next = (!self.empty).then_some(0);
    }
}

impl<'a> Iterator for PathPoints<'a> {
    type Item = Point2d;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next?;
        let table = &self.path.table;
        let n = table.len();
        self.next = if i + 1 < n {
            let mut j = i + 1;
            while j + 1 < n && table.p[j] - table.p[i] < self.delta {
                j += 1;
            }
            Some(j)
        } else {
            None
        };
        Some(table.pos(i))
    }
}
