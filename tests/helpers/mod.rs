// Copyright 2025 Lars Brubaker
// Shared test utilities for lanelet-mesh tests.

#![allow(dead_code)]

use std::sync::Once;

use glam::Vec3;
use lanelet_mesh::{LaneletId, LaneletMap, Mesh};

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once; RUST_LOG picks the level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Points along x = `x`, at the given z values, on the ground plane.
pub fn line(x: f32, zs: &[f32]) -> Vec<Vec3> {
    zs.iter().map(|&z| Vec3::new(x, 0.0, z)).collect()
}

/// Small deterministic LCG so property-style tests stay reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 40) as f32) / ((1u64 << 24) as f32)
    }

    /// Ground-plane polyline of `n` points wandering forward along z.
    pub fn polyline(&mut self, n: usize, x: f32) -> Vec<Vec3> {
        let mut z = 0.0;
        (0..n)
            .map(|_| {
                z += 0.25 + self.next_f32() * 3.0;
                Vec3::new(x + self.next_f32() - 0.5, 0.0, z)
            })
            .collect()
    }
}

/// Verify index-list shape: whole triangles, indices in range, finite
/// vertices.
pub fn verify_valid_output(mesh: &Mesh) {
    for (i, v) in mesh.vertices().iter().enumerate() {
        assert!(v.is_finite(), "vertex [{}] = {} is not finite", i, v);
    }
    assert_eq!(
        mesh.indices().len() % 3,
        0,
        "index count {} is not a multiple of 3",
        mesh.indices().len()
    );
    for (i, &idx) in mesh.indices().iter().enumerate() {
        assert!(
            (idx as usize) < mesh.vertex_count(),
            "index[{}] = {} out of range (vertex_count={})",
            i,
            idx,
            mesh.vertex_count()
        );
    }
}

/// Which side each strip step advanced, read back from the emitted
/// triangles: the third index of every triangle is the new vertex.
pub fn advance_sides(mesh: &Mesh, left: &[Vec3]) -> Vec<char> {
    mesh.triangles()
        .map(|[_, _, new]| {
            let p = mesh.vertices()[new as usize];
            if left.contains(&p) {
                'L'
            } else {
                'R'
            }
        })
        .collect()
}

/// A lanelet driven through `anchors` center clicks.
pub fn drawn_lanelet(map: &mut LaneletMap, anchors: &[Vec3]) -> LaneletId {
    let id = map.add_lanelet();
    for &a in anchors {
        map.add_point(id, a);
    }
    id
}

/// Straight anchors every 10 units along +z.
pub fn straight_anchors(n: usize) -> Vec<Vec3> {
    (0..n).map(|i| Vec3::new(0.0, 0.0, i as f32 * 10.0)).collect()
}
