//! Error types for pipe generation.

use thiserror::Error;

/// Result type for pipe generation operations.
pub type PipeResult<T> = Result<T, PipeError>;

/// Errors that can occur during pipe mesh generation.
///
/// All variants are fatal to the generation call; there is nothing to
/// retry. Configuration errors are reported before any buffer is
/// allocated.
#[derive(Debug, Error)]
pub enum PipeError {
    /// Axial sample count is too low to form a tube.
    #[error("frequency must be at least {min}, got {actual}")]
    InvalidFrequency {
        /// Minimum required axial samples.
        min: usize,
        /// Actual configured value.
        actual: usize,
    },

    /// Radial sample count is too low.
    #[error("segment count must be at least {min}, got {actual}")]
    InvalidSegmentCount {
        /// Minimum required radial samples.
        min: usize,
        /// Actual configured value.
        actual: usize,
    },

    /// Radius is invalid (zero, negative, or non-finite).
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),

    /// UV tile count must be positive.
    #[error("v tile count must be at least 1, got {0}")]
    InvalidTileCount(usize),

    /// Not enough cross-sections to stitch any tube geometry.
    #[error("need at least {min} cross-sections, got {actual}")]
    TooFewSections {
        /// Minimum required cross-sections.
        min: usize,
        /// Actual cross-section count.
        actual: usize,
    },

    /// A cross-section ring does not match the expected radial size.
    #[error("cross-section {index} has {actual} points, expected {expected}")]
    MismatchedRing {
        /// Index of the offending cross-section.
        index: usize,
        /// Expected point count per ring.
        expected: usize,
        /// Actual point count.
        actual: usize,
    },

    /// The spline produced a non-finite sample point.
    #[error("spline produced a non-finite point at t = {t}")]
    NonFinitePoint {
        /// Parameter value of the bad sample.
        t: f64,
    },

    /// The spline tangent vanished or was non-finite, so the
    /// cross-section orientation is undefined.
    #[error("degenerate spline tangent at t = {t}")]
    DegenerateTangent {
        /// Parameter value of the bad sample.
        t: f64,
    },
}
