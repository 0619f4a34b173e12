//! Double-walled, capped pipe meshes swept along spline paths.
//!
//! This crate samples a spline at uniform parametric steps, builds an
//! outer and inner point ring at each step, and stitches consecutive
//! rings into a hollow pipe: two concentric tube walls plus annular
//! caps sealing both ends. The output is a flat vertex buffer, a
//! triangle-index buffer, and a parallel UV buffer suitable for
//! tiling textures along the pipe's length and around its
//! circumference.
//!
//! # Quick Start
//!
//! ```
//! use pipe_from_splines::{pipe_from_spline, PipeConfig};
//! use spline_types::Polyline;
//! use nalgebra::Point3;
//!
//! let path = Polyline::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 10.0),
//! ])?;
//!
//! let config = PipeConfig::default()
//!     .with_frequency(8)
//!     .with_segment_count(12)
//!     .with_radii(1.0, 0.8);
//!
//! let buffers = pipe_from_spline(&path, &config)?;
//! assert_eq!(buffers.vertices.len(), 12 * 8 * 8);
//! assert_eq!(buffers.uv.len(), buffers.vertices.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pipeline
//!
//! - [`CrossSectionRing::compute`] - one cross-section's outer and
//!   inner point rings in a [`Frame`]
//! - [`sample_segments`] - the axial walk producing one ring per step
//! - [`build_buffers`] - the stitching pass producing [`PipeBuffers`]
//! - [`pipe_from_spline`] - all of the above behind one call
//!
//! Generation is a pure, single-threaded batch: the same spline and
//! configuration produce bit-identical buffers, and nothing persists
//! between runs.
//!
//! # Collaborators
//!
//! The spline evaluator is the [`spline_types::Spline`] trait; the
//! renderer consumes [`PipeBuffers`] (wrapped in a
//! [`PipeRenderable`]) and owns normal recomputation and texture
//! interpretation.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for configuration
//!   and output types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

mod buffers;
mod builder;
mod config;
mod error;
mod frame;
mod renderable;
mod ring;
mod segment;

pub use buffers::{PipeBuffers, PipeLayout};
pub use builder::build_buffers;
pub use config::PipeConfig;
pub use error::{PipeError, PipeResult};
pub use frame::Frame;
pub use renderable::{PipeRenderable, TextureHandle};
pub use ring::CrossSectionRing;
pub use segment::{sample_segments, SegmentSequence};

use spline_types::Spline;
use tracing::debug;

/// Generate a complete pipe mesh along a spline.
///
/// Validates the configuration, samples one cross-section per axial
/// step, and stitches the result into [`PipeBuffers`]. One call is an
/// atomic unit: rerun it from scratch rather than attempting
/// incremental updates.
///
/// # Errors
///
/// Returns a configuration error before any allocation
/// ([`PipeError::InvalidFrequency`], [`PipeError::InvalidSegmentCount`],
/// [`PipeError::InvalidRadius`], [`PipeError::InvalidTileCount`]), or a
/// degenerate-spline error from sampling
/// ([`PipeError::NonFinitePoint`], [`PipeError::DegenerateTangent`]).
pub fn pipe_from_spline<S: Spline + ?Sized>(
    spline: &S,
    config: &PipeConfig,
) -> PipeResult<PipeBuffers> {
    config.validate()?;

    debug!(
        frequency = config.frequency,
        segment_count = config.segment_count,
        "generating pipe mesh"
    );

    let segments = sample_segments(spline, config)?;
    build_buffers(&segments, config.v_tile_count)
}
