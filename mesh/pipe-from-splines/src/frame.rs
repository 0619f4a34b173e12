//! Cross-section frames along the spline.

use nalgebra::{Point3, UnitQuaternion, Vector3};

/// A positioned, oriented cross-section plane at one sample along the
/// spline.
///
/// The frame's forward axis (+Z) points along the spline tangent; the
/// cross-section ring lies in the frame's local XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// World-space position of the cross-section center.
    pub position: Point3<f64>,
    /// World-space orientation; local +Z is the travel direction.
    pub orientation: UnitQuaternion<f64>,
}

impl Frame {
    /// Create a frame at `position` looking along `direction`.
    ///
    /// The up reference is world +Y, falling back to +Z when the
    /// direction is near-vertical so the orientation stays
    /// well-defined. The direction does not need to be normalized,
    /// but callers must reject zero or non-finite tangents first
    /// (see [`PipeError::DegenerateTangent`](crate::PipeError::DegenerateTangent));
    /// a degenerate input falls back to +Z forward here.
    #[must_use]
    pub fn look_along(position: Point3<f64>, direction: Vector3<f64>) -> Self {
        let forward = direction
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::z);

        let up = if forward.y.abs() > 0.999 {
            Vector3::z()
        } else {
            Vector3::y()
        };

        Self {
            position,
            orientation: UnitQuaternion::face_towards(&forward, &up),
        }
    }

    /// Transform a point from frame-local space to world space.
    ///
    /// Applies the orientation, then translates by the frame position.
    #[must_use]
    pub fn transform_point(&self, local: Point3<f64>) -> Point3<f64> {
        self.position + self.orientation * local.coords
    }

    /// The frame's forward axis in world space (unit length).
    #[must_use]
    pub fn forward(&self) -> Vector3<f64> {
        self.orientation * Vector3::z()
    }
}
