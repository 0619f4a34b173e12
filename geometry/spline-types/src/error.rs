//! Error types for spline construction.

use thiserror::Error;

/// Result type for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;

/// Errors that can occur when constructing a spline.
#[derive(Debug, Error)]
pub enum SplineError {
    /// Spline has no segments.
    #[error("spline needs at least one segment")]
    Empty,

    /// Polyline has too few points.
    #[error("polyline needs at least {min} points, got {actual}")]
    TooFewPoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },
}
