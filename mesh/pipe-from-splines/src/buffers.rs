//! Output buffers and the index arithmetic behind them.

use nalgebra::{Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index arithmetic for the interleaved pipe vertex layout.
///
/// The vertex array splits into two equal halves: the outer-tube wall
/// in `[0, len/2)` and the inner-tube wall in `[len/2, len)`. Each
/// half holds `frequency` bands of `segment_count` quads, 4 vertices
/// per quad (vertices are duplicated across quads for hard-edge
/// shading). Band 0 of the outer half is the start cap; band 0 of the
/// inner half is the end cap; bands `1..frequency` are the pipe body.
///
/// Named accessors replace the raw `len/2 + t` offset arithmetic while
/// keeping the numeric layout identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipeLayout {
    segment_count: usize,
    frequency: usize,
}

impl PipeLayout {
    /// Create a layout for `segment_count` radial and `frequency`
    /// axial samples.
    #[must_use]
    pub const fn new(segment_count: usize, frequency: usize) -> Self {
        Self {
            segment_count,
            frequency,
        }
    }

    /// Radial sample count.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Axial sample count.
    #[must_use]
    pub const fn frequency(&self) -> usize {
        self.frequency
    }

    /// Total vertex count: `segment_count * frequency * 8`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.segment_count * self.frequency * 8
    }

    /// Total triangle-index count: `segment_count * frequency * 24`.
    #[must_use]
    pub const fn index_count(&self) -> usize {
        self.segment_count * self.frequency * 24
    }

    /// Vertices per wall: half of [`Self::vertex_count`].
    #[must_use]
    pub const fn wall_vertex_count(&self) -> usize {
        self.vertex_count() / 2
    }

    /// Vertices per band: 4 per radial quad.
    #[must_use]
    pub const fn band_stride(&self) -> usize {
        self.segment_count * 4
    }

    /// Bands per wall, caps included.
    #[must_use]
    pub const fn bands_per_wall(&self) -> usize {
        self.frequency
    }

    /// First vertex index of radial quad `v` in outer-wall band `band`.
    #[must_use]
    pub const fn outer_index(&self, band: usize, v: usize) -> usize {
        band * self.band_stride() + v * 4
    }

    /// First vertex index of radial quad `v` in inner-wall band `band`.
    #[must_use]
    pub const fn inner_index(&self, band: usize, v: usize) -> usize {
        self.wall_vertex_count() + band * self.band_stride() + v * 4
    }
}

/// The generated pipe mesh: flat vertex, triangle-index, and UV
/// buffers plus the layout that describes their structure.
///
/// Invariants, upheld by the builder:
///
/// - `vertices.len() == uv.len() == layout.vertex_count()`
/// - `triangles.len() == layout.index_count()` and every entry indexes
///   into `vertices`
/// - the outer-tube wall occupies `[0, len/2)`, the inner-tube wall
///   `[len/2, len)`
///
/// Smooth-shading normals are deliberately absent: recomputing them
/// from `vertices`/`triangles` is the rendering collaborator's job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipeBuffers {
    /// World-space vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Triangle indices into `vertices`, three per triangle.
    pub triangles: Vec<u32>,
    /// Texture coordinates, parallel to `vertices`.
    pub uv: Vec<Point2<f64>>,
    /// The index arithmetic for this mesh.
    pub layout: PipeLayout,
}

impl PipeBuffers {
    /// Allocate zero-filled buffers sized for `layout`.
    #[must_use]
    pub fn zeroed(layout: PipeLayout) -> Self {
        Self {
            vertices: vec![Point3::origin(); layout.vertex_count()],
            triangles: vec![0; layout.index_count()],
            uv: vec![Point2::origin(); layout.vertex_count()],
            layout,
        }
    }

    /// Number of triangles (index count / 3).
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}
