//! Pipe generation configuration.

use crate::error::{PipeError, PipeResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one pipe generation run.
///
/// The configuration is immutable during generation; buffers are
/// rebuilt from scratch on every call.
///
/// # Example
///
/// ```
/// use pipe_from_splines::PipeConfig;
///
/// let config = PipeConfig::default()
///     .with_frequency(24)
///     .with_segment_count(12)
///     .with_radii(1.0, 0.8)
///     .with_v_tile_count(4);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipeConfig {
    /// Axial resolution: number of cross-sections sampled along the
    /// spline. Must be at least 2.
    pub frequency: usize,

    /// Radial resolution: number of points per cross-section ring.
    /// Must be at least 1.
    pub segment_count: usize,

    /// Radius of the outer wall.
    pub outer_radius: f64,

    /// Radius of the inner bore.
    pub inner_radius: f64,

    /// Number of V tiles the texture spans along each wall. Axial
    /// bands past the tiling clamp to the final tile.
    pub v_tile_count: usize,

    /// Whether the axial walk reaches the spline endpoint.
    ///
    /// `false` (the historical behavior) samples `t = p / frequency`,
    /// so `t = 1` is never evaluated and the tube stops one step short
    /// of the spline's end. `true` samples `t = p / (frequency - 1)`,
    /// placing the final cross-section exactly at the endpoint.
    pub sample_endpoint: bool,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            frequency: 8,
            segment_count: 16,
            outer_radius: 1.0,
            inner_radius: 0.85,
            v_tile_count: 1,
            sample_endpoint: false,
        }
    }
}

impl PipeConfig {
    /// Set the axial sample count.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: usize) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the radial sample count.
    #[must_use]
    pub const fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    /// Set the outer wall and inner bore radii.
    #[must_use]
    pub const fn with_radii(mut self, outer_radius: f64, inner_radius: f64) -> Self {
        self.outer_radius = outer_radius;
        self.inner_radius = inner_radius;
        self
    }

    /// Set the V tiling divisor.
    #[must_use]
    pub const fn with_v_tile_count(mut self, v_tile_count: usize) -> Self {
        self.v_tile_count = v_tile_count;
        self
    }

    /// Sample the spline's exact endpoint with the final cross-section.
    #[must_use]
    pub const fn sampling_endpoint(mut self) -> Self {
        self.sample_endpoint = true;
        self
    }

    /// Check the configuration before any buffer is allocated.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: `frequency < 2`,
    /// `segment_count < 1`, a non-positive or non-finite radius, or
    /// `v_tile_count < 1`.
    pub fn validate(&self) -> PipeResult<()> {
        if self.frequency < 2 {
            return Err(PipeError::InvalidFrequency {
                min: 2,
                actual: self.frequency,
            });
        }
        if self.segment_count < 1 {
            return Err(PipeError::InvalidSegmentCount {
                min: 1,
                actual: self.segment_count,
            });
        }
        for radius in [self.outer_radius, self.inner_radius] {
            if radius <= 0.0 || !radius.is_finite() {
                return Err(PipeError::InvalidRadius(radius));
            }
        }
        if self.v_tile_count < 1 {
            return Err(PipeError::InvalidTileCount(self.v_tile_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PipeConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_low_frequency() {
        let config = PipeConfig::default().with_frequency(1);
        assert!(matches!(
            config.validate(),
            Err(PipeError::InvalidFrequency { min: 2, actual: 1 })
        ));
    }

    #[test]
    fn rejects_zero_segment_count() {
        let config = PipeConfig::default().with_segment_count(0);
        assert!(matches!(
            config.validate(),
            Err(PipeError::InvalidSegmentCount { .. })
        ));
    }

    #[test]
    fn rejects_bad_radii() {
        let negative = PipeConfig::default().with_radii(-1.0, 0.5);
        assert!(matches!(
            negative.validate(),
            Err(PipeError::InvalidRadius(_))
        ));

        let non_finite = PipeConfig::default().with_radii(1.0, f64::NAN);
        assert!(matches!(
            non_finite.validate(),
            Err(PipeError::InvalidRadius(_))
        ));
    }

    #[test]
    fn rejects_zero_tile_count() {
        let config = PipeConfig::default().with_v_tile_count(0);
        assert!(matches!(
            config.validate(),
            Err(PipeError::InvalidTileCount(0))
        ));
    }
}
