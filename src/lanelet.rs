// Copyright 2025 Lars Brubaker
// License: MIT
//
// A single lane segment: two boundary handles, the click path that drives
// boundary synthesis, and the derived surface mesh.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::arena::Handle;
use crate::boundary::BoundaryId;
use crate::mesh::Mesh;
use crate::orient::ReversedMode;

pub type LaneletId = Handle<Lanelet>;

/// Turn tag carried for the map format. The mesher ignores it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    #[default]
    Null,
    Straight,
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct Lanelet {
    pub name: String,
    pub(crate) left: BoundaryId,
    pub(crate) right: BoundaryId,
    pub(crate) center_points: Vec<Vec3>,
    pub width: f32,
    pub turn_direction: TurnDirection,
    pub(crate) reversed_mode: ReversedMode,
    pub(crate) mesh: Option<Mesh>,
}

impl Lanelet {
    pub(crate) fn new(name: String, left: BoundaryId, right: BoundaryId, width: f32) -> Self {
        Self {
            name,
            left,
            right,
            center_points: Vec::new(),
            width,
            turn_direction: TurnDirection::Null,
            reversed_mode: ReversedMode::None,
            mesh: None,
        }
    }

    pub fn left(&self) -> BoundaryId {
        self.left
    }

    pub fn right(&self) -> BoundaryId {
        self.right
    }

    pub fn center_points(&self) -> &[Vec3] {
        &self.center_points
    }

    /// Reversal that last produced an upward-facing mesh; tried first on
    /// the next rebuild.
    pub fn reversed_mode(&self) -> ReversedMode {
        self.reversed_mode
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }
}
