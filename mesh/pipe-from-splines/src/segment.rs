//! Axial sampling: one cross-section ring per spline step.

use spline_types::Spline;
use tracing::debug;

use crate::config::PipeConfig;
use crate::error::{PipeError, PipeResult};
use crate::frame::Frame;
use crate::ring::CrossSectionRing;

/// Ordered cross-sections along the spline, consumed pairwise by the
/// mesh builder.
pub type SegmentSequence = Vec<CrossSectionRing>;

/// Tangents shorter than this give no usable orientation.
const MIN_TANGENT: f64 = 1e-12;

/// Walk the spline at `frequency` uniform parametric steps and sample
/// a cross-section ring at each.
///
/// With `sample_endpoint` off, step `p` evaluates `t = p / frequency`,
/// so the spline endpoint is never sampled; with it on,
/// `t = p / (frequency - 1)` and the final ring lands exactly on the
/// endpoint.
///
/// # Errors
///
/// Returns a configuration error from
/// [`PipeConfig::validate`], [`PipeError::NonFinitePoint`] if the
/// spline evaluates to a non-finite position, or
/// [`PipeError::DegenerateTangent`] if the tangent vanishes or is
/// non-finite at any sample.
pub fn sample_segments<S: Spline + ?Sized>(
    spline: &S,
    config: &PipeConfig,
) -> PipeResult<SegmentSequence> {
    config.validate()?;

    let denominator = if config.sample_endpoint {
        (config.frequency - 1) as f64
    } else {
        config.frequency as f64
    };

    let mut segments = Vec::with_capacity(config.frequency);
    for p in 0..config.frequency {
        let t = p as f64 / denominator;

        let position = spline.point_at(t);
        if !position.coords.iter().all(|c| c.is_finite()) {
            return Err(PipeError::NonFinitePoint { t });
        }

        let direction = spline.direction_at(t);
        if !direction.iter().all(|c| c.is_finite()) || direction.norm() < MIN_TANGENT {
            return Err(PipeError::DegenerateTangent { t });
        }

        let frame = Frame::look_along(position, direction);
        segments.push(CrossSectionRing::compute(
            &frame,
            config.segment_count,
            config.outer_radius,
            config.inner_radius,
        ));
    }

    debug!(
        cross_sections = segments.len(),
        points_per_ring = config.segment_count,
        "sampled spline cross-sections"
    );

    Ok(segments)
}
