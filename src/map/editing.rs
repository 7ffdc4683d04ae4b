// Copyright 2025 Lars Brubaker
// Center-path point editing for the LaneletMap.
//
// Clicks arrive as center anchors. Boundary points are synthesized by
// offsetting each anchor half a lane width to either side, perpendicular to
// the direction from the previous anchor. The first anchor has no direction
// yet, so the second one emits the cross-sections for both.

use glam::Vec3;
use tracing::debug;

use super::LaneletMap;
use crate::geom::side_offsets;
use crate::lanelet::LaneletId;

impl LaneletMap {
    /// Append a center anchor and the boundary points it implies, then
    /// rebuild. The anchor's y is replaced by the configured ground height.
    pub fn add_point(&mut self, id: LaneletId, anchor: Vec3) -> bool {
        let ground_y = self.settings.ground_y;
        let Some(lanelet) = self.lanelets.get_mut(id) else {
            return false;
        };
        let center = Vec3::new(anchor.x, ground_y, anchor.z);

        // (left, right) pairs in emission order
        let mut emitted: Vec<(Vec3, Vec3)> = Vec::with_capacity(2);
        if let Some(&last) = lanelet.center_points.last() {
            let (left_offset, right_offset) = side_offsets(center - last, lanelet.width);
            if lanelet.center_points.len() == 1 {
                emitted.push((last + left_offset, last + right_offset));
            }
            emitted.push((center + left_offset, center + right_offset));
        }
        lanelet.center_points.push(center);
        let (left, right) = (lanelet.left, lanelet.right);

        for (l, r) in emitted {
            if let Some(b) = self.boundaries.get_mut(left) {
                b.add_point_final(l);
            }
            if let Some(b) = self.boundaries.get_mut(right) {
                b.add_point_final(r);
            }
        }
        debug!(lanelet = ?id, ?center, "added center point");
        self.rebuild_referencing(&[left, right]);
        true
    }

    /// Undo the most recent anchor: drop the last center point and the last
    /// point of each boundary. Empty lists are left alone.
    pub fn remove_last_point(&mut self, id: LaneletId) -> bool {
        let Some(lanelet) = self.lanelets.get_mut(id) else {
            return false;
        };
        lanelet.center_points.pop();
        let (left, right) = (lanelet.left, lanelet.right);
        for b in [left, right] {
            if let Some(boundary) = self.boundaries.get_mut(b) {
                boundary.remove_point_final();
            }
        }
        debug!(lanelet = ?id, "removed last point");
        self.rebuild_referencing(&[left, right]);
        true
    }
}
