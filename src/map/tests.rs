// Copyright 2025 Lars Brubaker
// Unit tests for the LaneletMap internals.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use super::*;

fn straight_lane(map: &mut LaneletMap, anchors: usize) -> LaneletId {
    let id = map.add_lanelet();
    for i in 0..anchors {
        map.add_point(id, Vec3::new(0.0, 0.0, i as f32 * 10.0));
    }
    id
}

fn boundary_len(map: &LaneletMap, id: BoundaryId) -> usize {
    map.boundary(id).map_or(0, |b| b.len())
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl UndoRecorder for Recorder {
    fn checkpoint(&mut self, label: &str) {
        self.0.borrow_mut().push(label.to_string());
    }
}

#[test]
fn new_lanelet_has_two_distinct_empty_boundaries() {
    let mut map = LaneletMap::new();
    let id = map.add_lanelet();
    let (l, r) = map.boundaries(id).unwrap();
    assert_ne!(l, r);
    assert_eq!(boundary_len(&map, l), 0);
    assert!(map.boundary(l).unwrap().only_used_by(id));
    assert!(map.boundary(r).unwrap().only_used_by(id));
    let lanelet = map.lanelet(id).unwrap();
    assert_eq!(lanelet.width, 3.75);
    assert_eq!(lanelet.reversed_mode(), ReversedMode::None);
    assert!(map.mesh(id).is_none());
}

#[test]
fn lanelet_names_follow_creation_order() {
    let mut map = LaneletMap::new();
    let a = map.add_lanelet();
    let b = map.add_lanelet();
    assert_eq!(map.lanelet(a).unwrap().name, "0");
    assert_eq!(map.lanelet(b).unwrap().name, "1");
}

#[test]
fn anchor_height_is_pinned_to_ground() {
    let mut map = LaneletMap::with_settings(Settings {
        ground_y: 2.0,
        ..Settings::default()
    });
    let id = map.add_lanelet();
    map.add_point(id, Vec3::new(1.0, 7.0, 3.0));
    assert_eq!(map.lanelet(id).unwrap().center_points(), &[Vec3::new(1.0, 2.0, 3.0)]);
}

#[test]
fn second_anchor_emits_both_cross_sections() {
    let mut map = LaneletMap::new();
    let id = straight_lane(&mut map, 2);
    let (l, r) = map.boundaries(id).unwrap();
    let left = map.boundary(l).unwrap().points();
    let right = map.boundary(r).unwrap().points();
    // travelling +z: left at -x, right at +x, half the lane width out
    assert!((left[0] - Vec3::new(-1.875, 0.0, 0.0)).length() < 1e-5);
    assert!((left[1] - Vec3::new(-1.875, 0.0, 10.0)).length() < 1e-5);
    assert!((right[0] - Vec3::new(1.875, 0.0, 0.0)).length() < 1e-5);
    assert!((right[1] - Vec3::new(1.875, 0.0, 10.0)).length() < 1e-5);
}

#[test]
fn repeated_anchor_does_not_produce_nan() {
    let mut map = LaneletMap::new();
    let id = map.add_lanelet();
    map.add_point(id, Vec3::ZERO);
    map.add_point(id, Vec3::ZERO);
    let (l, _) = map.boundaries(id).unwrap();
    assert!(map
        .boundary(l)
        .unwrap()
        .points()
        .iter()
        .all(|p| p.is_finite()));
}

#[test]
fn rebuild_caches_mode() {
    let mut map = LaneletMap::new();
    let id = straight_lane(&mut map, 3);
    match map.rebuild(id) {
        Rebuild::Built {
            mode,
            attempts,
            resolved,
        } => {
            assert_eq!(mode, ReversedMode::None);
            assert_eq!(attempts, 1);
            assert!(resolved);
        }
        Rebuild::Skipped => panic!("three anchors should mesh"),
    }
}

#[test]
fn rebuild_unknown_lanelet_is_skipped() {
    let mut map = LaneletMap::new();
    let id = map.add_lanelet();
    let (old_left, old_right) = map.boundaries(id).unwrap();
    map.remove_lanelet(id);

    // the freed slots are reused; the stale ids must not reach the newcomer
    let fresh = map.add_lanelet();
    assert_eq!(fresh.index(), id.index());
    assert_ne!(fresh, id);
    assert_eq!(map.rebuild(id), Rebuild::Skipped);
    assert!(!map.add_point(id, Vec3::ZERO));
    assert!(!map.remove_last_point(id));
    assert!(map.lanelet(id).is_none());
    assert!(map.boundaries(id).is_none());
    assert!(map.boundary(old_left).is_none());
    assert!(map.boundary(old_right).is_none());
    assert!(!map.move_point(old_left, 0, Vec3::X));

    assert!(map.lanelet(fresh).unwrap().center_points().is_empty());
    assert!(map.add_point(fresh, Vec3::ZERO));
    assert_eq!(map.lanelet(fresh).unwrap().center_points().len(), 1);
}

#[test]
fn remove_lanelet_frees_unshared_boundaries_only() {
    let mut map = LaneletMap::new();
    let a = straight_lane(&mut map, 2);
    let b = map.duplicate_left(a).unwrap();
    assert_eq!(map.boundary_count(), 3);
    let (shared, _) = map.boundaries(a).unwrap();

    assert!(map.remove_lanelet(b));
    assert_eq!(map.lanelet_count(), 1);
    assert_eq!(map.boundary_count(), 2);
    assert!(map.boundary(shared).unwrap().only_used_by(a));
    assert!(!map.remove_lanelet(b));
}

#[test]
fn fan_out_visits_each_lanelet_once() {
    let mut map = LaneletMap::new();
    let a = straight_lane(&mut map, 2);
    let b = map.duplicate_left(a).unwrap();
    let (a_left, a_right) = map.boundaries(a).unwrap();
    let (b_left, _) = map.boundaries(b).unwrap();
    assert_eq!(map.rebuild_referencing(&[a_left, a_right, b_left]), 2);
    assert_eq!(map.rebuild_referencing(&[a_right]), 1);
}

#[test]
fn history_sees_creations() {
    let recorder = Recorder::default();
    let log = recorder.0.clone();
    let mut map = LaneletMap::new().with_history(recorder);
    let a = straight_lane(&mut map, 2);
    map.duplicate_right(a).unwrap();
    // refused duplication records nothing
    assert!(map.duplicate_right(a).is_none());
    assert_eq!(*log.borrow(), vec!["Add Lanelet", "Duplicate Lanelet"]);
}
