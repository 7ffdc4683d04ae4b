// Copyright 2025 Lars Brubaker
// License: MIT
//
// Hook into the host editor's undo stack.

/// Receives a checkpoint before the map creates lanelets or boundaries.
/// The map only announces; storing and replaying state is up to the host.
pub trait UndoRecorder {
    fn checkpoint(&mut self, label: &str);
}

/// Recorder that drops every checkpoint.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHistory;

impl UndoRecorder for NoHistory {
    fn checkpoint(&mut self, _label: &str) {}
}
