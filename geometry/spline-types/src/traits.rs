//! The spline evaluation contract.

use nalgebra::{Point3, Vector3};

/// A parametric path in 3D space, evaluated over `t ∈ [0, 1]`.
///
/// This is the contract a sweep-based mesh generator needs from its
/// path: a position and a travel direction at any parameter value.
/// The direction is the curve's first derivative and is **not**
/// required to be unit length; consumers normalize as needed.
///
/// # Implementors
///
/// - [`CubicBezier`](crate::CubicBezier) - Single cubic segment
/// - [`BezierSpline`](crate::BezierSpline) - Multiple cubic segments
/// - [`Polyline`](crate::Polyline) - Piecewise linear
pub trait Spline {
    /// Evaluate the position at parameter `t ∈ [0, 1]`.
    fn point_at(&self, t: f64) -> Point3<f64>;

    /// Evaluate the travel direction (tangent) at parameter `t`.
    ///
    /// The returned vector is not necessarily normalized. For a
    /// well-formed spline it is non-zero everywhere; a zero direction
    /// marks a degenerate parameterization that consumers should
    /// reject.
    fn direction_at(&self, t: f64) -> Vector3<f64>;

    /// Evaluate the position, clamping `t` to `[0, 1]` first.
    fn point_at_clamped(&self, t: f64) -> Point3<f64> {
        self.point_at(t.clamp(0.0, 1.0))
    }

    /// Get the start point of the spline (`t = 0`).
    fn start(&self) -> Point3<f64> {
        self.point_at(0.0)
    }

    /// Get the end point of the spline (`t = 1`).
    fn end(&self) -> Point3<f64> {
        self.point_at(1.0)
    }
}
