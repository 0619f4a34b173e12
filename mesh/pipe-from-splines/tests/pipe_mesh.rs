//! End-to-end properties of generated pipe meshes.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use nalgebra::Point3;
use pipe_from_splines::{pipe_from_spline, PipeBuffers, PipeConfig};
use spline_types::{BezierSpline, CubicBezier, Polyline};

fn straight_path() -> Polyline {
    Polyline::new(vec![Point3::origin(), Point3::new(0.0, 0.0, 10.0)]).unwrap()
}

fn curved_path() -> BezierSpline {
    BezierSpline::new(vec![CubicBezier::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 4.0, 3.0),
        Point3::new(0.0, 4.0, 7.0),
        Point3::new(0.0, 0.0, 10.0),
    )])
    .unwrap()
}

fn config(frequency: usize, segment_count: usize) -> PipeConfig {
    PipeConfig::default()
        .with_frequency(frequency)
        .with_segment_count(segment_count)
        .with_radii(1.0, 0.6)
}

#[test]
fn buffer_sizes_hold_for_varied_configurations() {
    for (frequency, segment_count) in [(2, 4), (3, 5), (8, 12), (16, 3)] {
        let buffers =
            pipe_from_spline(&straight_path(), &config(frequency, segment_count)).unwrap();
        assert_eq!(buffers.vertices.len(), segment_count * frequency * 8);
        assert_eq!(buffers.uv.len(), buffers.vertices.len());
        assert_eq!(buffers.triangles.len(), segment_count * frequency * 24);
    }
}

#[test]
fn triangle_indices_stay_in_bounds() {
    let buffers = pipe_from_spline(&curved_path(), &config(6, 8)).unwrap();
    let vertex_count = buffers.vertices.len() as u32;
    assert!(buffers.triangles.iter().all(|&i| i < vertex_count));
}

#[test]
fn walls_split_the_vertex_array_in_half() {
    let buffers = pipe_from_spline(&straight_path(), &config(4, 6)).unwrap();
    let layout = buffers.layout;
    assert_eq!(layout.wall_vertex_count() * 2, buffers.vertices.len());
    assert_eq!(layout.inner_index(0, 0), buffers.vertices.len() / 2);
}

#[test]
fn minimal_pipe_has_one_body_band_and_both_caps() {
    let buffers = pipe_from_spline(&straight_path(), &config(2, 4)).unwrap();
    let layout = buffers.layout;
    assert_eq!(layout.bands_per_wall(), 2);

    // Every distinct triangle (the second index half mirrors the
    // first) has measurable area.
    let half = buffers.triangles.len() / 2;
    for tri in buffers.triangles[..half].chunks_exact(3) {
        let a = buffers.vertices[tri[0] as usize];
        let b = buffers.vertices[tri[1] as usize];
        let c = buffers.vertices[tri[2] as usize];
        let area = (b - a).cross(&(c - a)).norm() / 2.0;
        assert!(area > 1e-9, "degenerate triangle {tri:?} (area {area})");
    }
}

#[test]
fn u_cycles_per_band_without_drift() {
    let buffers = pipe_from_spline(&straight_path(), &config(5, 7)).unwrap();
    let segment_count = buffers.layout.segment_count();

    for (quad_index, quad) in buffers.uv.chunks_exact(4).enumerate() {
        let v = quad_index % segment_count;
        let low = v as f64 / segment_count as f64;
        let high = (v + 1) as f64 / segment_count as f64;
        assert_eq!(quad[0].x, low);
        assert_eq!(quad[1].x, high);
        assert_eq!(quad[2].x, low);
        assert_eq!(quad[3].x, high);
    }
}

#[test]
fn v_is_monotone_along_each_wall() {
    for v_tile_count in [1, 2, 3, 8] {
        let buffers = pipe_from_spline(
            &straight_path(),
            &config(6, 4).with_v_tile_count(v_tile_count),
        )
        .unwrap();
        let layout = buffers.layout;

        for wall_start in [0, layout.bands_per_wall()] {
            let mut previous = 0.0;
            for band in 0..layout.bands_per_wall() {
                let quad = if wall_start == 0 {
                    layout.outer_index(band, 0)
                } else {
                    layout.inner_index(band, 0)
                };
                let high = buffers.uv[quad].y;
                assert!(high >= previous, "V regressed at band {band}");
                previous = high;
            }
        }
    }
}

#[test]
fn single_tile_v_is_binary() {
    let buffers =
        pipe_from_spline(&straight_path(), &config(5, 4).with_v_tile_count(1)).unwrap();
    for uv in &buffers.uv {
        assert!(uv.y == 0.0 || uv.y == 1.0, "unexpected V {}", uv.y);
    }
}

#[test]
fn regeneration_is_bit_identical() {
    let config = config(7, 9).with_v_tile_count(3);
    let first = pipe_from_spline(&curved_path(), &config).unwrap();
    let second = pipe_from_spline(&curved_path(), &config).unwrap();
    assert_eq!(first, second);
}

/// Count how many distinct triangles use each positional edge.
///
/// Vertices are duplicated across quads, so edges are keyed by
/// position bits; shared corners are exact copies of the same ring
/// point, so bit equality is the right identity.
fn edge_use_counts(buffers: &PipeBuffers) -> HashMap<(usize, usize), usize> {
    let mut ids: HashMap<[u64; 3], usize> = HashMap::new();
    let mut id_of = |p: Point3<f64>| {
        let key = [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
        let next = ids.len();
        *ids.entry(key).or_insert(next)
    };

    let mut counts = HashMap::new();
    let half = buffers.triangles.len() / 2;
    for tri in buffers.triangles[..half].chunks_exact(3) {
        let ids = [
            id_of(buffers.vertices[tri[0] as usize]),
            id_of(buffers.vertices[tri[1] as usize]),
            id_of(buffers.vertices[tri[2] as usize]),
        ];
        for (a, b) in [(ids[0], ids[1]), (ids[1], ids[2]), (ids[2], ids[0])] {
            let edge = (a.min(b), a.max(b));
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}

#[test]
fn caps_seal_the_pipe_watertight() {
    let buffers = pipe_from_spline(&straight_path(), &config(4, 6)).unwrap();
    let counts = edge_use_counts(&buffers);

    assert!(!counts.is_empty());
    for (edge, count) in counts {
        assert_eq!(count, 2, "edge {edge:?} used {count} times");
    }
}

#[test]
fn endpoint_sampling_still_seals() {
    let buffers =
        pipe_from_spline(&straight_path(), &config(4, 6).sampling_endpoint()).unwrap();
    for (edge, count) in edge_use_counts(&buffers) {
        assert_eq!(count, 2, "edge {edge:?} used {count} times");
    }
}

#[test]
fn curved_pipe_vertices_are_finite() {
    let buffers = pipe_from_spline(&curved_path(), &config(12, 8)).unwrap();
    assert!(buffers
        .vertices
        .iter()
        .all(|p| p.coords.iter().all(|c| c.is_finite())));
}
