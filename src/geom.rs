// Copyright 2025 Lars Brubaker
// License: MIT
//
// Small geometric helpers shared by the point editor, the strip mesher and
// the orientation check. Everything works on glam::Vec3 in a y-up frame.

use glam::Vec3;

pub const UP: Vec3 = Vec3::Y;
pub const DOWN: Vec3 = Vec3::NEG_Y;

/// Offsets of the left and right boundary from a center point, given the
/// travel direction. Left is `dir × up`, right is `dir × down`, each scaled
/// to `width / 2`. A zero direction gives zero offsets.
#[inline]
pub fn side_offsets(dir: Vec3, width: f32) -> (Vec3, Vec3) {
    let half = width / 2.0;
    let left = dir.cross(UP).normalize_or_zero() * half;
    let right = dir.cross(DOWN).normalize_or_zero() * half;
    (left, right)
}

/// Unnormalized face normal of triangle (a, b, c). Length is twice the area.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}

/// True if `normal` is more than 90 degrees away from up.
/// Zero normals never count as facing down.
#[inline]
pub fn faces_down(normal: Vec3) -> bool {
    normal.dot(UP) < 0.0
}

/// Foot of `p` on the polyline `points`, first segment wins on ties.
///
/// Interior segments are clamped to their endpoints. The first segment
/// extends backwards and the last one forwards as lines, so a point past
/// either end projects onto the continuation instead of the end vertex.
/// A single point is its own foot; an empty polyline has none.
pub fn nearest_on_polyline(points: &[Vec3], p: Vec3) -> Option<Vec3> {
    match points {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }
    let last = points.len() - 2;
    let mut best: Option<(Vec3, f32)> = None;
    for (i, seg) in points.windows(2).enumerate() {
        let (a, b) = (seg[0], seg[1]);
        let ab = b - a;
        let len_sq = ab.length_squared();
        let mut t = if len_sq > 0.0 { (p - a).dot(ab) / len_sq } else { 0.0 };
        if i > 0 {
            t = t.max(0.0);
        }
        if i < last {
            t = t.min(1.0);
        }
        let q = a + ab * t;
        let d = q.distance_squared(p);
        match best {
            Some((_, bd)) if bd <= d => {}
            _ => best = Some((q, d)),
        }
    }
    best.map(|(q, _)| q)
}

/// Mirror `p` through `center`.
#[inline]
pub fn reflect_through(p: Vec3, center: Vec3) -> Vec3 {
    center * 2.0 - p
}
