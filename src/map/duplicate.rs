// Copyright 2025 Lars Brubaker
// Lane duplication for the LaneletMap.
//
// Duplicating the left side creates a neighbour lanelet to the left: its
// right boundary *is* this lanelet's left boundary (shared, not copied) and
// its left boundary is new, built by mirroring this lanelet's right boundary
// across the shared one. A boundary that is already shared can't be
// duplicated again.

use tracing::debug;

use super::LaneletMap;
use crate::boundary::Boundary;
use crate::lanelet::LaneletId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl LaneletMap {
    pub fn can_duplicate_left(&self, id: LaneletId) -> bool {
        self.can_duplicate(id, Side::Left)
    }

    pub fn can_duplicate_right(&self, id: LaneletId) -> bool {
        self.can_duplicate(id, Side::Right)
    }

    /// New lanelet sharing this lanelet's left boundary as its right one.
    /// `None` if [`LaneletMap::can_duplicate_left`] is false.
    pub fn duplicate_left(&mut self, id: LaneletId) -> Option<LaneletId> {
        self.duplicate(id, Side::Left)
    }

    /// New lanelet sharing this lanelet's right boundary as its left one.
    pub fn duplicate_right(&mut self, id: LaneletId) -> Option<LaneletId> {
        self.duplicate(id, Side::Right)
    }

    fn can_duplicate(&self, id: LaneletId, side: Side) -> bool {
        let Some(lanelet) = self.lanelets.get(id) else {
            return false;
        };
        let b = match side {
            Side::Left => lanelet.left,
            Side::Right => lanelet.right,
        };
        self.boundaries
            .get(b)
            .map_or(false, |b| b.len() > 1 && b.only_used_by(id))
    }

    fn duplicate(&mut self, id: LaneletId, side: Side) -> Option<LaneletId> {
        if !self.can_duplicate(id, side) {
            return None;
        }
        let lanelet = self.lanelets.get(id)?;
        let (shared, opposite) = match side {
            Side::Left => (lanelet.left, lanelet.right),
            Side::Right => (lanelet.right, lanelet.left),
        };
        let width = lanelet.width;
        let shared_points = self.boundaries.get(shared)?.points().to_vec();
        let opposite_points = self.boundaries.get(opposite)?.points().to_vec();

        self.history.checkpoint("Duplicate Lanelet");
        let mut fresh = Boundary::new();
        fresh.duplicate_nodes(&opposite_points, &shared_points);
        let fresh = self.boundaries.insert(fresh);

        let (left, right) = match side {
            Side::Left => (fresh, shared),
            Side::Right => (shared, fresh),
        };
        let new_id = self.insert_lanelet(left, right, width);
        debug!(from = ?id, lanelet = ?new_id, ?side, "duplicated lanelet");
        self.rebuild(new_id);
        Some(new_id)
    }
}
