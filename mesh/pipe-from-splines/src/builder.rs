//! Mesh assembly: stitching cross-sections into a double-walled,
//! capped tube.

use nalgebra::{Point2, Point3};
use tracing::debug;

use crate::buffers::{PipeBuffers, PipeLayout};
use crate::error::{PipeError, PipeResult};
use crate::ring::CrossSectionRing;

/// Stitch an ordered cross-section sequence into the final vertex,
/// triangle-index, and UV buffers.
///
/// # Layout
///
/// The vertex array is split into the outer-tube half `[0, len/2)`
/// and the inner-tube half `[len/2, len)`; see
/// [`PipeLayout`] for the band arithmetic. Band 0 of the outer half
/// is the annular cap sealing the start of the pipe, band 0 of the
/// inner half seals the end; bands `1..frequency` of each half are the
/// pipe body between adjacent rings.
///
/// # UV policy
///
/// U tiles once around the circumference per band. V advances one tile
/// per axial band within each wall, in `v_tile_count` equal steps;
/// bands past the tiling clamp to the final tile (V never wraps and is
/// monotone non-decreasing along each wall).
///
/// # Errors
///
/// - [`PipeError::InvalidTileCount`] if `v_tile_count == 0`
/// - [`PipeError::TooFewSections`] if fewer than 2 cross-sections
/// - [`PipeError::InvalidSegmentCount`] if the rings are empty
/// - [`PipeError::MismatchedRing`] if the rings disagree in size
pub fn build_buffers(
    segments: &[CrossSectionRing],
    v_tile_count: usize,
) -> PipeResult<PipeBuffers> {
    if v_tile_count < 1 {
        return Err(PipeError::InvalidTileCount(v_tile_count));
    }
    if segments.len() < 2 {
        return Err(PipeError::TooFewSections {
            min: 2,
            actual: segments.len(),
        });
    }

    let segment_count = segments[0].len();
    if segment_count == 0 {
        return Err(PipeError::InvalidSegmentCount { min: 1, actual: 0 });
    }
    for (index, ring) in segments.iter().enumerate() {
        if ring.len() != segment_count {
            return Err(PipeError::MismatchedRing {
                index,
                expected: segment_count,
                actual: ring.len(),
            });
        }
    }

    let layout = PipeLayout::new(segment_count, segments.len());
    let mut buffers = PipeBuffers::zeroed(layout);

    write_vertices(&mut buffers.vertices, layout, segments);
    write_triangles(&mut buffers.triangles);
    write_uv(&mut buffers.uv, layout, v_tile_count);

    debug!(
        vertices = buffers.vertices.len(),
        triangles = buffers.triangle_count(),
        "stitched pipe mesh"
    );

    Ok(buffers)
}

/// Emit one band of quads from two point rings into `dst`
/// (`4 * ring length` entries).
///
/// Each quad is `[prev_a, a[v], prev_b, b[v]]`; the `(prev_a, prev_b)`
/// pair is the loop-carried state that makes adjacent quads share an
/// edge. It starts at the rings' last points, so quad 0 already
/// connects back to quad `len-1` and the band closes around the
/// circumference.
fn write_strip(dst: &mut [Point3<f64>], a: &[Point3<f64>], b: &[Point3<f64>]) {
    let mut prev_a = a[a.len() - 1];
    let mut prev_b = b[b.len() - 1];

    for (v, quad) in dst.chunks_exact_mut(4).enumerate() {
        quad[0] = prev_a;
        quad[1] = a[v];
        quad[2] = prev_b;
        quad[3] = b[v];
        prev_a = a[v];
        prev_b = b[v];
    }
}

/// Fill the vertex halves band by band.
///
/// The outer wall runs rings front-to-back and the inner wall swaps
/// the ring roles; that vertex-ordering swap is what flips the inner
/// surface to face the bore, with no change to triangle winding. The
/// caps are the same strip shape fed both rings of a single
/// cross-section (outer against inner), sealing the wall gap at each
/// end.
fn write_vertices(
    vertices: &mut [Point3<f64>],
    layout: PipeLayout,
    segments: &[CrossSectionRing],
) {
    let stride = layout.band_stride();

    for u in 1..segments.len() {
        let first = &segments[u];
        let second = &segments[u - 1];

        // Start cap: the first ring's outer and inner points, at the
        // head of the outer half.
        if u == 1 {
            let start = layout.outer_index(0, 0);
            write_strip(&mut vertices[start..start + stride], second.outer(), second.inner());
        }

        // End cap: the last ring's inner and outer points, at the head
        // of the inner half.
        if u == segments.len() - 1 {
            let start = layout.inner_index(0, 0);
            write_strip(&mut vertices[start..start + stride], first.inner(), first.outer());
        }

        let outer_start = layout.outer_index(u, 0);
        write_strip(
            &mut vertices[outer_start..outer_start + stride],
            first.outer(),
            second.outer(),
        );

        let inner_start = layout.inner_index(u, 0);
        write_strip(
            &mut vertices[inner_start..inner_start + stride],
            second.inner(),
            first.inner(),
        );
    }
}

/// Fill the triangle-index array.
///
/// Every group of 4 vertices is one quad split along the `(i+1, i+2)`
/// diagonal into `(i, i+1, i+2)` and `(i+1, i+3, i+2)`. The second
/// half of the array mirrors the first: both walls use the identical
/// pattern, and the inner wall's facing comes from its swapped vertex
/// ordering, not from reversed winding.
fn write_triangles(triangles: &mut [u32]) {
    let half = triangles.len() / 2;

    let mut i = 0u32;
    for tri in triangles[..half].chunks_exact_mut(6) {
        tri[0] = i;
        tri[1] = i + 1;
        tri[2] = i + 2;
        tri[3] = i + 2;
        tri[4] = i + 1;
        tri[5] = i + 3;
        i += 4;
    }

    let (head, tail) = triangles.split_at_mut(half);
    tail.copy_from_slice(head);
}

/// Fill the UV array quad by quad.
///
/// Quad corners 0/2 sit at `v / segment_count` and corners 1/3 at
/// `(v + 1) / segment_count`, so U sweeps 0→1 once per band with no
/// drift. Corners 0/1 take the band's high V, corners 2/3 the low V.
fn write_uv(uv: &mut [Point2<f64>], layout: PipeLayout, v_tile_count: usize) {
    let radial = layout.segment_count() as f64;
    let tiles = v_tile_count as f64;

    for (quad_index, quad) in uv.chunks_exact_mut(4).enumerate() {
        let v = quad_index % layout.segment_count();
        let band = (quad_index / layout.segment_count()) % layout.bands_per_wall();

        let u_low = v as f64 / radial;
        let u_high = (v + 1) as f64 / radial;

        // Clamp to the final tile instead of wrapping or zero-filling.
        let tile = band.min(v_tile_count - 1) as f64;
        let v_low = tile / tiles;
        let v_high = (tile + 1.0) / tiles;

        quad[0] = Point2::new(u_low, v_high);
        quad[1] = Point2::new(u_high, v_high);
        quad[2] = Point2::new(u_low, v_low);
        quad[3] = Point2::new(u_high, v_low);
    }
}
