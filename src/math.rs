//! Mathematical structs and functions.

use cgmath::{Point2, Vector2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::util::Interval;

pub use cubic::{derivative3, interpolate4, NewtonCubic};
pub use curve::{FnCurve, ParametricCurve2d};
pub use search::{binary_search, linear_search, Bracket, LINEAR_SEARCH_LIMIT};
pub use tracks::{CirclePath, HumpPath, LemniscatePath, LineSegment2d, LoopTheLoopPath, OvalPath};
pub use util::*;

mod cubic;
mod curve;
mod search;
mod tracks;
mod util;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;

/// An axis-aligned rectangle in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect2d {
    /// The horizontal extent.
    pub x: Interval<f64>,
    /// The vertical extent.
    pub y: Interval<f64>,
}

impl Rect2d {
    /// Returns true if the point lies within the rectangle, including its edges.
    pub fn contains(&self, point: Point2d) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }
}
