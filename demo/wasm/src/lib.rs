// Copyright 2025 Lars Brubaker
// WASM bindings for lanelet-mesh: the browser demo feeds ground-plane clicks
// in and draws the returned buffers.

use glam::Vec3;
use lanelet_mesh::{LaneletId, LaneletMap, Settings};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A lanelet map plus the lanelet currently being drawn.
#[wasm_bindgen]
pub struct LaneletEditorJs {
    map: LaneletMap,
    ids: Vec<LaneletId>,
    active: Option<usize>,
}

#[wasm_bindgen]
impl LaneletEditorJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LaneletEditorJs {
        LaneletEditorJs {
            map: LaneletMap::new(),
            ids: Vec::new(),
            active: None,
        }
    }

    /// Build the editor from a JSON settings string; falls back to defaults
    /// if it doesn't parse.
    pub fn with_settings_json(json: &str) -> LaneletEditorJs {
        let settings = Settings::from_json_str(json).unwrap_or_default();
        LaneletEditorJs {
            map: LaneletMap::with_settings(settings),
            ids: Vec::new(),
            active: None,
        }
    }

    /// Start a new lanelet and make it active. Returns its slot.
    pub fn add_lanelet(&mut self) -> u32 {
        let id = self.map.add_lanelet();
        self.ids.push(id);
        let slot = self.ids.len() - 1;
        self.active = Some(slot);
        slot as u32
    }

    pub fn select(&mut self, slot: u32) -> bool {
        if (slot as usize) < self.ids.len() {
            self.active = Some(slot as usize);
            true
        } else {
            false
        }
    }

    /// Ctrl+click: append a center point on the ground plane.
    pub fn add_point(&mut self, x: f32, z: f32) -> bool {
        match self.active_id() {
            Some(id) => self.map.add_point(id, Vec3::new(x, 0.0, z)),
            None => false,
        }
    }

    /// Ctrl+Shift+click: drop the last center point.
    pub fn remove_last_point(&mut self) -> bool {
        match self.active_id() {
            Some(id) => self.map.remove_last_point(id),
            None => false,
        }
    }

    pub fn can_duplicate_left(&self) -> bool {
        self.active_id()
            .map_or(false, |id| self.map.can_duplicate_left(id))
    }

    pub fn can_duplicate_right(&self) -> bool {
        self.active_id()
            .map_or(false, |id| self.map.can_duplicate_right(id))
    }

    /// Duplicate to the left; the new lanelet becomes active. -1 if refused.
    pub fn duplicate_left(&mut self) -> i32 {
        let new_id = self.active_id().and_then(|id| self.map.duplicate_left(id));
        self.push_active(new_id)
    }

    pub fn duplicate_right(&mut self) -> i32 {
        let new_id = self.active_id().and_then(|id| self.map.duplicate_right(id));
        self.push_active(new_id)
    }

    pub fn lanelet_count(&self) -> u32 {
        self.ids.len() as u32
    }

    /// Flat [x0,y0,z0, x1,...] surface positions of lanelet `slot`.
    pub fn get_vertices(&self, slot: u32) -> Vec<f32> {
        self.mesh_of(slot)
            .map(|m| m.positions_flat())
            .unwrap_or_default()
    }

    /// Flat triangle index triples of lanelet `slot`.
    pub fn get_indices(&self, slot: u32) -> Vec<u32> {
        self.mesh_of(slot)
            .map(|m| m.indices().to_vec())
            .unwrap_or_default()
    }

    /// Flat [x0,y0,z0, ...] points of the left (side 0) or right boundary.
    pub fn get_boundary(&self, slot: u32, side: u32) -> Vec<f32> {
        let Some(&id) = self.ids.get(slot as usize) else {
            return Vec::new();
        };
        let Some((left, right)) = self.map.boundaries(id) else {
            return Vec::new();
        };
        let b = if side == 0 { left } else { right };
        self.map
            .boundary(b)
            .map(|b| b.points().iter().flat_map(|p| p.to_array()).collect())
            .unwrap_or_default()
    }
}

impl LaneletEditorJs {
    fn active_id(&self) -> Option<LaneletId> {
        self.active.and_then(|slot| self.ids.get(slot).copied())
    }

    fn mesh_of(&self, slot: u32) -> Option<&lanelet_mesh::Mesh> {
        let id = *self.ids.get(slot as usize)?;
        self.map.mesh(id)
    }

    fn push_active(&mut self, id: Option<LaneletId>) -> i32 {
        match id {
            Some(id) => {
                self.ids.push(id);
                let slot = self.ids.len() - 1;
                self.active = Some(slot);
                slot as i32
            }
            None => -1,
        }
    }
}

impl Default for LaneletEditorJs {
    fn default() -> Self {
        Self::new()
    }
}
