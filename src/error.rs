use thiserror::Error;

/// Errors produced while building or querying a [NumericalPath](crate::NumericalPath).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// The tabulated path distance does not strictly increase, which happens
    /// when the curve is degenerate (zero length) or stops progressing.
    #[error("path distance is not strictly increasing at table index {index} (p = {p})")]
    MalformedPath { index: usize, p: f64 },

    /// An x-indexed query was made on a path whose x coordinate is not monotonic.
    #[error("x is not monotonic along the path; use path distance queries instead")]
    NonMonotonicX,

    /// Too few samples were requested to build a table.
    #[error("table size {size} is too small, at least {min} samples are required")]
    TableTooSmall { size: usize, min: usize },
}

/// Convenience type alias for results using [`PathError`].
pub type Result<T> = std::result::Result<T, PathError>;
