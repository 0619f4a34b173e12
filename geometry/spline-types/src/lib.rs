//! Parametric spline evaluators for swept geometry.
//!
//! This crate provides the curve-side contract consumed by mesh
//! generators that sweep a cross-section along a path:
//!
//! - [`Spline`] - The evaluation trait: position and direction at `t ∈ [0, 1]`
//! - [`CubicBezier`] - A single cubic Bézier segment
//! - [`BezierSpline`] - A chain of cubic segments walked uniformly in `t`
//! - [`Polyline`] - Piecewise-linear paths (useful for straight test pipes)
//!
//! # Example
//!
//! ```
//! use spline_types::{Spline, CubicBezier};
//! use nalgebra::Point3;
//!
//! let curve = CubicBezier::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 2.0, 0.0),
//!     Point3::new(3.0, 2.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//! );
//!
//! let mid = curve.point_at(0.5);
//! assert!(mid.y > 0.0);
//!
//! // Direction is the (non-normalized) first derivative
//! let dir = curve.direction_at(0.0);
//! assert!(dir.norm() > 0.0);
//! ```
//!
//! # Coordinate System
//!
//! Right-handed, all coordinates `f64`. The crate is unit-agnostic.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all curve types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::suboptimal_flops
)]

mod bezier;
mod error;
mod polyline;
mod traits;

pub use bezier::{BezierSpline, CubicBezier};
pub use error::{SplineError, SplineResult};
pub use polyline::Polyline;
pub use traits::Spline;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
