// Copyright 2025 Lars Brubaker
// License: MIT
//
// The lanelet container.
//
// Owns every lanelet and boundary in two arenas. Lanelets hold boundary
// handles, boundaries list the lanelets that hold them, and every structural
// edit goes through here so the affected meshes are rebuilt before the
// editing call returns.
//
// Point editing lives in map/editing.rs, duplication in map/duplicate.rs.

use glam::Vec3;
use tracing::debug;

use crate::arena::Arena;
use crate::boundary::{Boundary, BoundaryId};
use crate::history::{NoHistory, UndoRecorder};
use crate::lanelet::{Lanelet, LaneletId};
use crate::mesh::Mesh;
use crate::orient::{repair_orientation, ReversedMode};
use crate::settings::Settings;

mod duplicate;
mod editing;

#[cfg(test)]
mod tests;

/// What a call to [`LaneletMap::rebuild`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rebuild {
    /// Unknown lanelet, or a side with fewer than two points. Any previous
    /// mesh has been cleared.
    Skipped,
    Built {
        mode: ReversedMode,
        attempts: usize,
        /// False when the orientation repair gave up and kept its last mesh.
        resolved: bool,
    },
}

pub struct LaneletMap {
    lanelets: Arena<Lanelet>,
    boundaries: Arena<Boundary>,
    settings: Settings,
    history: Box<dyn UndoRecorder>,
    next_name: usize,
}

impl LaneletMap {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        LaneletMap {
            lanelets: Arena::new(),
            boundaries: Arena::new(),
            settings,
            history: Box::new(NoHistory),
            next_name: 0,
        }
    }

    /// Route creation checkpoints to the host's undo stack.
    pub fn with_history(mut self, history: impl UndoRecorder + 'static) -> Self {
        self.history = Box::new(history);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create a lanelet with two fresh, empty boundaries.
    pub fn add_lanelet(&mut self) -> LaneletId {
        self.history.checkpoint("Add Lanelet");
        let left = self.boundaries.insert(Boundary::new());
        let right = self.boundaries.insert(Boundary::new());
        let width = self.settings.lane_width;
        let id = self.insert_lanelet(left, right, width);
        debug!(lanelet = ?id, "added lanelet");
        id
    }

    pub(crate) fn insert_lanelet(
        &mut self,
        left: BoundaryId,
        right: BoundaryId,
        width: f32,
    ) -> LaneletId {
        let name = self.next_name.to_string();
        self.next_name += 1;
        let id = self.lanelets.insert(Lanelet::new(name, left, right, width));
        for b in [left, right] {
            if let Some(boundary) = self.boundaries.get_mut(b) {
                boundary.subscribe(id);
            }
        }
        id
    }

    /// Remove a lanelet. Boundaries no other lanelet holds are freed.
    pub fn remove_lanelet(&mut self, id: LaneletId) -> bool {
        let Some(lanelet) = self.lanelets.remove(id) else {
            return false;
        };
        for b in [lanelet.left, lanelet.right] {
            let orphaned = match self.boundaries.get_mut(b) {
                Some(boundary) => {
                    boundary.unsubscribe(id);
                    boundary.refs().is_empty()
                }
                None => false,
            };
            if orphaned {
                self.boundaries.remove(b);
            }
        }
        debug!(lanelet = ?id, "removed lanelet");
        true
    }

    pub fn lanelet(&self, id: LaneletId) -> Option<&Lanelet> {
        self.lanelets.get(id)
    }

    /// Mutable access for metadata (name, width, turn direction).
    pub fn lanelet_mut(&mut self, id: LaneletId) -> Option<&mut Lanelet> {
        self.lanelets.get_mut(id)
    }

    pub fn lanelet_ids(&self) -> Vec<LaneletId> {
        self.lanelets.handles().collect()
    }

    pub fn lanelet_count(&self) -> usize {
        self.lanelets.len()
    }

    pub fn boundary(&self, id: BoundaryId) -> Option<&Boundary> {
        self.boundaries.get(id)
    }

    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Left and right boundary of a lanelet.
    pub fn boundaries(&self, id: LaneletId) -> Option<(BoundaryId, BoundaryId)> {
        self.lanelets.get(id).map(|l| (l.left, l.right))
    }

    /// Current surface of a lanelet, if one has been built.
    pub fn mesh(&self, id: LaneletId) -> Option<&Mesh> {
        self.lanelets.get(id)?.mesh.as_ref()
    }

    /// Move one point of a boundary and rebuild every lanelet holding it.
    pub fn move_point(&mut self, boundary: BoundaryId, index: usize, position: Vec3) -> bool {
        let moved = self
            .boundaries
            .get_mut(boundary)
            .map_or(false, |b| b.move_point(index, position));
        if moved {
            self.rebuild_referencing(&[boundary]);
        }
        moved
    }

    /// Regenerate a lanelet's mesh from its boundaries.
    pub fn rebuild(&mut self, id: LaneletId) -> Rebuild {
        let Some(lanelet) = self.lanelets.get(id) else {
            return Rebuild::Skipped;
        };
        let hint = lanelet.reversed_mode;
        let sides = self
            .boundaries
            .get(lanelet.left)
            .zip(self.boundaries.get(lanelet.right));

        let repair = match sides {
            Some((left, right)) if left.len() > 1 && right.len() > 1 => {
                repair_orientation(left.points(), right.points(), hint)
            }
            _ => {
                if let Some(lanelet) = self.lanelets.get_mut(id) {
                    lanelet.mesh = None;
                }
                return Rebuild::Skipped;
            }
        };

        let outcome = Rebuild::Built {
            mode: repair.mode,
            attempts: repair.tried.len(),
            resolved: repair.resolved,
        };
        if let Some(lanelet) = self.lanelets.get_mut(id) {
            lanelet.reversed_mode = repair.mode;
            lanelet.mesh = Some(repair.mesh);
        }
        debug!(lanelet = ?id, ?outcome, "rebuilt lanelet mesh");
        outcome
    }

    /// Rebuild every lanelet holding any of `boundaries`, each once.
    /// Returns how many lanelets were visited.
    pub(crate) fn rebuild_referencing(&mut self, boundaries: &[BoundaryId]) -> usize {
        let mut listeners: Vec<LaneletId> = Vec::new();
        for &b in boundaries {
            if let Some(boundary) = self.boundaries.get(b) {
                for &r in boundary.refs() {
                    if !listeners.contains(&r) {
                        listeners.push(r);
                    }
                }
            }
        }
        for &id in &listeners {
            self.rebuild(id);
        }
        listeners.len()
    }
}

impl Default for LaneletMap {
    fn default() -> Self {
        Self::new()
    }
}
