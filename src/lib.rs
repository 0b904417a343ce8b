//! A tabulated approximation of 2D parametric curves, for constraining a
//! point mass to move along a track.
//!
//! A [NumericalPath] samples a [ParametricCurve2d](math::ParametricCurve2d)
//! into a dense table addressed by path distance, and answers position,
//! tangent, normal and curvature queries as well as nearest point searches.

pub use cgmath;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::{PathError, Result};
pub use path::{
    NumericalPath, PathPoint, PathPoints, DEFAULT_TABLE_SIZE, LOCAL_SEARCH_TOLERANCE,
    MIN_TABLE_SIZE,
};
pub use util::Interval;

mod debug;
mod error;
pub mod math;
mod path;
mod util;
