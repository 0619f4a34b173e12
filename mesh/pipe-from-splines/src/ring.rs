//! Cross-section ring sampling.

use crate::frame::Frame;
use nalgebra::Point3;

/// The outer and inner point rings of one pipe cross-section.
///
/// Both rings have the same length and are evaluated at the same
/// angular steps, so `outer()[i]` and `inner()[i]` lie on the same
/// radial spoke. Index order is angle order; the mesh builder consumes
/// the points positionally, so the sequences are never reordered after
/// construction (fields stay private).
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionRing {
    outer: Vec<Point3<f64>>,
    inner: Vec<Point3<f64>>,
}

impl CrossSectionRing {
    /// Sample a cross-section ring in the given frame.
    ///
    /// For `i` in `[0, segment_count)` the angle is
    /// `θ = i · 2π / segment_count` and the local point on a circle of
    /// radius `r` is `(r·sin θ, r·cos θ, 0)`, transformed to world
    /// space by the frame. `segment_count > 0` is guaranteed upstream
    /// by [`PipeConfig::validate`](crate::PipeConfig::validate).
    #[must_use]
    pub fn compute(
        frame: &Frame,
        segment_count: usize,
        outer_radius: f64,
        inner_radius: f64,
    ) -> Self {
        let step = std::f64::consts::TAU / segment_count as f64;

        let mut outer = Vec::with_capacity(segment_count);
        let mut inner = Vec::with_capacity(segment_count);

        for i in 0..segment_count {
            let (sin, cos) = (i as f64 * step).sin_cos();
            let local = |r: f64| Point3::new(r * sin, r * cos, 0.0);
            outer.push(frame.transform_point(local(outer_radius)));
            inner.push(frame.transform_point(local(inner_radius)));
        }

        Self { outer, inner }
    }

    /// Number of points per ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outer.len()
    }

    /// Whether the ring holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// The outer wall points, in angle order.
    #[must_use]
    pub fn outer(&self) -> &[Point3<f64>] {
        &self.outer
    }

    /// The inner bore points, in angle order.
    #[must_use]
    pub fn inner(&self) -> &[Point3<f64>] {
        &self.inner
    }
}
