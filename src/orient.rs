// Copyright 2025 Lars Brubaker
// License: MIT
//
// Orientation repair for strip meshes.
//
// The strip mesher only looks at distances, so boundaries drawn in opposite
// directions (or with the sides swapped) come out with triangles facing
// down. The repair loop re-runs the mesher with one or both input orders
// reversed, walking a fixed cycle of modes, and keeps the first mesh whose
// vertex normals all face up. After the last mode it keeps that mesh as is.

use glam::Vec3;
use tracing::{debug, warn};

use crate::mesh::Mesh;
use crate::strip::build_strip;

/// Which boundary orders are reversed before meshing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReversedMode {
    #[default]
    None,
    Left,
    Right,
    All,
}

impl ReversedMode {
    /// Upper bound on meshing attempts in one repair pass.
    pub const MAX_ATTEMPTS: usize = 4;

    /// Next mode in the cycle None, Left, Right, All. `None` after All.
    pub fn next(self) -> Option<ReversedMode> {
        match self {
            ReversedMode::None => Some(ReversedMode::Left),
            ReversedMode::Left => Some(ReversedMode::Right),
            ReversedMode::Right => Some(ReversedMode::All),
            ReversedMode::All => None,
        }
    }

    pub fn reverses_left(self) -> bool {
        matches!(self, ReversedMode::Left | ReversedMode::All)
    }

    pub fn reverses_right(self) -> bool {
        matches!(self, ReversedMode::Right | ReversedMode::All)
    }

    /// Fresh copies of both sides with this mode's reversals applied.
    pub fn apply(self, left: &[Vec3], right: &[Vec3]) -> (Vec<Vec3>, Vec<Vec3>) {
        let mut left = left.to_vec();
        let mut right = right.to_vec();
        if self.reverses_left() {
            left.reverse();
        }
        if self.reverses_right() {
            right.reverse();
        }
        (left, right)
    }
}

/// Outcome of [`repair_orientation`].
#[derive(Clone, Debug)]
pub struct Repair {
    pub mesh: Mesh,
    /// Mode that produced `mesh`; callers cache it as the next starting hint.
    pub mode: ReversedMode,
    /// Modes attempted, in order.
    pub tried: Vec<ReversedMode>,
    /// False when every mode left a downward normal and the last mesh was
    /// accepted anyway.
    pub resolved: bool,
}

/// Build the strip for `left`/`right`, starting at `hint` and walking the
/// mode cycle until no vertex normal faces down. The inputs are not modified.
pub fn repair_orientation(left: &[Vec3], right: &[Vec3], hint: ReversedMode) -> Repair {
    let mut mode = hint;
    let mut tried = Vec::with_capacity(ReversedMode::MAX_ATTEMPTS);
    loop {
        let (l, r) = mode.apply(left, right);
        let mut mesh = build_strip(&l, &r);
        mesh.recalculate_normals();
        tried.push(mode);

        if !mesh.has_downward_normal() {
            debug!(?mode, attempts = tried.len(), "strip orientation resolved");
            return Repair {
                mesh,
                mode,
                tried,
                resolved: true,
            };
        }

        match mode.next() {
            Some(next) => mode = next,
            None => {
                warn!(
                    attempts = tried.len(),
                    "strip still faces down after trying every reversal, keeping last result"
                );
                return Repair {
                    mesh,
                    mode,
                    tried,
                    resolved: false,
                };
            }
        }
    }
}
