// Copyright 2025 Lars Brubaker
// License: MIT
//
// Greedy triangle strip between two boundary polylines.
//
// The strip is seeded with the first right and first left point. Each step
// bridges to whichever side's next point lies closer to the last placed point
// of the opposite side, so boundaries of different length are stitched
// without resampling. Ties advance the left side.

use glam::Vec3;
use tracing::trace;

use crate::mesh::Mesh;

/// Bookkeeping from one [`build_strip_with_stats`] run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StripStats {
    pub left_consumed: usize,
    pub right_consumed: usize,
    /// Both sides ran out before the expected step count.
    pub early_exit: bool,
}

/// Build the strip mesh. Returns an empty mesh if either side is empty.
/// Normals are not computed; see [`Mesh::recalculate_normals`].
pub fn build_strip(left: &[Vec3], right: &[Vec3]) -> Mesh {
    build_strip_with_stats(left, right).0
}

pub fn build_strip_with_stats(left: &[Vec3], right: &[Vec3]) -> (Mesh, StripStats) {
    let mut mesh = Mesh::new();
    if left.is_empty() || right.is_empty() {
        return (mesh, StripStats::default());
    }

    let count = left.len() + right.len() - 2;
    let mut last_left = left[0];
    let mut last_right = right[0];
    let mut last_left_index = 1u32;
    let mut last_right_index = 0u32;
    let mut left_count = 1usize;
    let mut right_count = 1usize;
    let mut early_exit = false;

    mesh.vertices.reserve(count + 2);
    mesh.indices.reserve(count * 3);
    mesh.vertices.push(last_right);
    mesh.vertices.push(last_left);

    for _ in 0..count {
        let next_left = left.get(left_count);
        let next_right = right.get(right_count);

        let advance_left = match (next_left, next_right) {
            (None, None) => {
                early_exit = true;
                break;
            }
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(l), Some(r)) => {
                let dl = l.distance(last_right);
                let dr = r.distance(last_left);
                dl <= dr
            }
        };

        let new_index = mesh.vertices.len() as u32;
        mesh.indices
            .extend_from_slice(&[last_right_index, last_left_index, new_index]);

        if advance_left {
            last_left = left[left_count];
            left_count += 1;
            last_left_index = new_index;
            mesh.vertices.push(last_left);
        } else {
            last_right = right[right_count];
            right_count += 1;
            last_right_index = new_index;
            mesh.vertices.push(last_right);
        }
    }

    let stats = StripStats {
        left_consumed: left_count,
        right_consumed: right_count,
        early_exit,
    };
    trace!(
        vertices = mesh.vertices.len(),
        triangles = mesh.triangle_count(),
        ?stats,
        "built lanelet strip"
    );
    (mesh, stats)
}
