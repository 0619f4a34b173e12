//! Bézier curve types.
//!
//! A single cubic segment and a multi-segment spline that walks its
//! segments uniformly in parameter space.

use crate::error::{SplineError, SplineResult};
use crate::traits::Spline;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve passes through `p0` and `p3`, tangent to `p0p1` at the
/// start and `p2p3` at the end.
///
/// # Equation
///
/// ```text
/// B(t) = (1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃
/// ```
///
/// # Example
///
/// ```
/// use spline_types::{CubicBezier, Spline};
/// use nalgebra::Point3;
///
/// let curve = CubicBezier::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(3.0, 2.0, 0.0),
///     Point3::new(4.0, 0.0, 0.0),
/// );
///
/// assert!((curve.point_at(0.0).x - 0.0).abs() < 1e-10);
/// assert!((curve.point_at(1.0).x - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubicBezier {
    /// Start point.
    pub p0: Point3<f64>,
    /// First control point (affects start tangent).
    pub p1: Point3<f64>,
    /// Second control point (affects end tangent).
    pub p2: Point3<f64>,
    /// End point.
    pub p3: Point3<f64>,
}

impl CubicBezier {
    /// Create a new cubic Bézier curve.
    #[must_use]
    pub const fn new(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>, p3: Point3<f64>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Get the control points as an array.
    #[must_use]
    pub fn control_points(&self) -> [Point3<f64>; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

impl Spline for CubicBezier {
    fn point_at(&self, t: f64) -> Point3<f64> {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;

        Point3::from(
            self.p0.coords * (s * s * s)
                + self.p1.coords * (3.0 * s * s * t)
                + self.p2.coords * (3.0 * s * t * t)
                + self.p3.coords * (t * t * t),
        )
    }

    fn direction_at(&self, t: f64) -> Vector3<f64> {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;

        // B'(t) = 3(1-t)²(P₁-P₀) + 6(1-t)t(P₂-P₁) + 3t²(P₃-P₂)
        (self.p1 - self.p0) * (3.0 * s * s)
            + (self.p2 - self.p1) * (6.0 * s * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }
}

/// A spline composed of multiple cubic Bézier segments.
///
/// The parameter `t ∈ [0, 1]` is mapped uniformly across segments:
/// with `n` segments, segment `i` covers `[i/n, (i+1)/n)`. This is a
/// parametric walk, not an arc-length one; segments of different
/// lengths are traversed at different speeds.
///
/// # Example
///
/// ```
/// use spline_types::{BezierSpline, CubicBezier, Spline};
/// use nalgebra::Point3;
///
/// let spline = BezierSpline::new(vec![
///     CubicBezier::new(
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 1.0, 0.0),
///         Point3::new(2.0, 1.0, 0.0),
///         Point3::new(3.0, 0.0, 0.0),
///     ),
///     CubicBezier::new(
///         Point3::new(3.0, 0.0, 0.0),
///         Point3::new(4.0, -1.0, 0.0),
///         Point3::new(5.0, -1.0, 0.0),
///         Point3::new(6.0, 0.0, 0.0),
///     ),
/// ])?;
///
/// // Halfway through the spline is the joint between segments
/// let joint = spline.point_at(0.5);
/// assert!((joint.x - 3.0).abs() < 1e-10);
/// # Ok::<(), spline_types::SplineError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierSpline {
    segments: Vec<CubicBezier>,
}

impl BezierSpline {
    /// Create a spline from cubic segments.
    ///
    /// Segments are expected to be positionally continuous (each
    /// segment's `p0` equal to the previous segment's `p3`); this is
    /// not enforced.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::Empty`] if `segments` is empty.
    pub fn new(segments: Vec<CubicBezier>) -> SplineResult<Self> {
        if segments.is_empty() {
            return Err(SplineError::Empty);
        }
        Ok(Self { segments })
    }

    /// Number of cubic segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The cubic segments, in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[CubicBezier] {
        &self.segments
    }

    /// Map a global parameter to `(segment index, local parameter)`.
    fn locate(&self, t: f64) -> (usize, f64) {
        let scaled = t.clamp(0.0, 1.0) * self.segments.len() as f64;
        let index = (scaled.floor() as usize).min(self.segments.len() - 1);
        (index, scaled - index as f64)
    }
}

impl Spline for BezierSpline {
    fn point_at(&self, t: f64) -> Point3<f64> {
        let (index, local) = self.locate(t);
        self.segments[index].point_at(local)
    }

    fn direction_at(&self, t: f64) -> Vector3<f64> {
        let (index, local) = self.locate(t);
        self.segments[index].direction_at(local)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> CubicBezier {
        CubicBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(3.0, 2.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        )
    }

    #[test]
    fn cubic_passes_through_endpoints() {
        let curve = arch();
        assert_relative_eq!(curve.point_at(0.0).coords, curve.p0.coords, epsilon = 1e-12);
        assert_relative_eq!(curve.point_at(1.0).coords, curve.p3.coords, epsilon = 1e-12);
    }

    #[test]
    fn cubic_start_direction_follows_control_polygon() {
        let curve = arch();
        let dir = curve.direction_at(0.0);
        let expected = (curve.p1 - curve.p0) * 3.0;
        assert_relative_eq!(dir, expected, epsilon = 1e-12);
    }

    #[test]
    fn cubic_clamps_parameter() {
        let curve = arch();
        assert_relative_eq!(
            curve.point_at(1.5).coords,
            curve.point_at(1.0).coords,
            epsilon = 1e-12
        );
    }

    #[test]
    fn spline_rejects_empty() {
        assert!(BezierSpline::new(Vec::new()).is_err());
    }

    #[test]
    fn spline_walks_segments_uniformly() {
        let second = CubicBezier::new(
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(5.0, -2.0, 0.0),
            Point3::new(7.0, -2.0, 0.0),
            Point3::new(8.0, 0.0, 0.0),
        );
        let spline = BezierSpline::new(vec![arch(), second]).unwrap();

        // t = 0.25 is the midpoint of the first segment
        assert_relative_eq!(
            spline.point_at(0.25).coords,
            arch().point_at(0.5).coords,
            epsilon = 1e-12
        );
        // t = 0.5 lands on the joint
        assert_relative_eq!(spline.point_at(0.5).x, 4.0, epsilon = 1e-12);
        // t = 1.0 is the end of the last segment
        assert_relative_eq!(spline.point_at(1.0).x, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn spline_direction_continuous_at_interior_sample() {
        let spline = BezierSpline::new(vec![arch()]).unwrap();
        let dir = spline.direction_at(0.5);
        assert!(dir.norm() > 0.0);
        assert_relative_eq!(dir, arch().direction_at(0.5), epsilon = 1e-12);
    }
}
