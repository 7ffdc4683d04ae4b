// Copyright 2025 Lars Brubaker
// License: MIT
//
// Render-side surface of a lanelet: vertex positions, a flat triangle index
// list and per-vertex normals. Always rebuilt from the boundaries, never
// patched in place and never persisted.

use glam::Vec3;

use crate::geom::{face_normal, faces_down};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub(crate) vertices: Vec<Vec3>,
    pub(crate) indices: Vec<u32>,
    pub(crate) normals: Vec<Vec3>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangle list, three indices per triangle, winding as emitted.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Per-vertex normals from the last [`Mesh::recalculate_normals`] call.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.normals.clear();
    }

    /// Flat `[x0, y0, z0, x1, ...]` positions for upload to a renderer.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Per-vertex normals: sum of the area-weighted face normals of every
    /// triangle touching the vertex, normalized. Vertices no triangle uses,
    /// or whose faces cancel out, get a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];
        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            if a >= normals.len() || b >= normals.len() || c >= normals.len() {
                continue;
            }
            let n = face_normal(self.vertices[a], self.vertices[b], self.vertices[c]);
            normals[a] += n;
            normals[b] += n;
            normals[c] += n;
        }
        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
    }

    /// True if any vertex normal points more than 90 degrees away from up.
    pub fn has_downward_normal(&self) -> bool {
        self.normals.iter().any(|&n| faces_down(n))
    }
}
