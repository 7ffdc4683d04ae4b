// lanelet-mesh: lanelet boundary editing and drivable-surface triangulation
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod arena;
pub mod boundary;
pub mod geom;
pub mod history;
pub mod lanelet;
pub mod map;
pub mod mesh;
pub mod orient;
pub mod settings;
pub mod strip;

pub use boundary::{Boundary, BoundaryId};
pub use history::{NoHistory, UndoRecorder};
pub use lanelet::{Lanelet, LaneletId, TurnDirection};
pub use map::{LaneletMap, Rebuild};
pub use mesh::Mesh;
pub use orient::{repair_orientation, Repair, ReversedMode};
pub use settings::{Settings, SettingsError};
pub use strip::{build_strip, build_strip_with_stats, StripStats};
