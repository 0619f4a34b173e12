//! Piecewise-linear splines.

use crate::error::{SplineError, SplineResult};
use crate::traits::Spline;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piecewise-linear path through a sequence of points.
///
/// The parameter `t ∈ [0, 1]` is mapped uniformly across segments
/// (not by arc length): with `n` segments, segment `i` covers
/// `[i/n, (i+1)/n)`. The direction on a segment is the segment vector
/// itself, constant along the segment.
///
/// # Example
///
/// ```
/// use spline_types::{Polyline, Spline};
/// use nalgebra::Point3;
///
/// let path = Polyline::new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 10.0),
/// ])?;
///
/// let mid = path.point_at(0.5);
/// assert!((mid.z - 5.0).abs() < 1e-10);
/// # Ok::<(), spline_types::SplineError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polyline {
    points: Vec<Point3<f64>>,
}

impl Polyline {
    /// Create a polyline from a point sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::TooFewPoints`] if fewer than 2 points
    /// are given.
    pub fn new(points: Vec<Point3<f64>>) -> SplineResult<Self> {
        if points.len() < 2 {
            return Err(SplineError::TooFewPoints {
                min: 2,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// The points of the polyline, in traversal order.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Map a global parameter to `(segment index, local parameter)`.
    fn locate(&self, t: f64) -> (usize, f64) {
        let segment_count = self.points.len() - 1;
        let scaled = t.clamp(0.0, 1.0) * segment_count as f64;
        let index = (scaled.floor() as usize).min(segment_count - 1);
        (index, scaled - index as f64)
    }
}

impl Spline for Polyline {
    fn point_at(&self, t: f64) -> Point3<f64> {
        let (index, local) = self.locate(t);
        let from = self.points[index];
        let to = self.points[index + 1];
        from + (to - from) * local
    }

    fn direction_at(&self, t: f64) -> Vector3<f64> {
        let (index, _) = self.locate(t);
        self.points[index + 1] - self.points[index]
    }
}
