// Copyright 2025 Lars Brubaker
// License: MIT
//
// One lane edge: an ordered polyline plus the set of lanelets that use it.
//
// The reference set is also the listener list. Whoever mutates the points
// (the map) reads `refs` afterwards and rebuilds every listed lanelet.

use glam::Vec3;

use crate::arena::Handle;
use crate::geom::{nearest_on_polyline, reflect_through};
use crate::lanelet::LaneletId;

pub type BoundaryId = Handle<Boundary>;

#[derive(Clone, Debug, Default)]
pub struct Boundary {
    points: Vec<Vec3>,
    refs: Vec<LaneletId>,
}

impl Boundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self {
            points,
            refs: Vec::new(),
        }
    }

    /// Points in travel order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn add_point_final(&mut self, p: Vec3) {
        self.points.push(p);
    }

    /// Drop the most recent point. No-op on an empty boundary.
    pub(crate) fn remove_point_final(&mut self) -> Option<Vec3> {
        self.points.pop()
    }

    pub(crate) fn move_point(&mut self, index: usize, p: Vec3) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = p;
                true
            }
            None => false,
        }
    }

    /// Replace the points with `opposite` mirrored across `shared`: each
    /// opposite point is reflected through its foot on the `shared`
    /// polyline. The result is the far edge of a lane adjacent to `shared`,
    /// with as many points as `opposite` and in the same travel order.
    pub(crate) fn duplicate_nodes(&mut self, opposite: &[Vec3], shared: &[Vec3]) {
        self.points = opposite
            .iter()
            .filter_map(|&o| nearest_on_polyline(shared, o).map(|s| reflect_through(o, s)))
            .collect();
    }

    /// Lanelets holding this boundary, in subscription order.
    pub fn refs(&self) -> &[LaneletId] {
        &self.refs
    }

    /// Register `lanelet` as a holder/listener. Registering twice is harmless.
    pub(crate) fn subscribe(&mut self, lanelet: LaneletId) {
        self.unsubscribe(lanelet);
        self.refs.push(lanelet);
    }

    pub(crate) fn unsubscribe(&mut self, lanelet: LaneletId) -> bool {
        let before = self.refs.len();
        self.refs.retain(|&r| r != lanelet);
        self.refs.len() != before
    }

    /// True iff `lanelet` is the one and only holder.
    pub fn only_used_by(&self, lanelet: LaneletId) -> bool {
        self.refs.len() == 1 && self.refs[0] == lanelet
    }
}
