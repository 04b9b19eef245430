use super::*;
use crate::util::settings::{KeyValueStore, MemoryStore};

fn bounds() -> Bounds {
    Bounds { viewport_width: 1280.0, viewport_height: 800.0, panel_width: 120.0, panel_height: 40.0 }
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn position_round_trips_exactly() {
    let mut store = MemoryStore::default();
    let pos = Position { x: 10.0, y: 20.0 };
    TEST_PANEL_POSITION.save(&mut store, &pos).expect("save");
    let loaded = TEST_PANEL_POSITION.load_or_else(&store, || bounds().default_position());
    assert_eq!(loaded, pos);
}

#[test]
fn absent_key_falls_back_to_default() {
    let store = MemoryStore::default();
    let loaded = TEST_PANEL_POSITION.load_or_else(&store, || bounds().default_position());
    assert_eq!(loaded, Position { x: 1136.0, y: 380.0 });
}

#[test]
fn stored_under_fixed_key_as_xy_json() {
    let mut store = MemoryStore::default();
    TEST_PANEL_POSITION.save(&mut store, &Position { x: 1.5, y: 2.0 }).expect("save");
    let raw = store.get("ima_studio_test_panel_position").expect("get").expect("present");
    assert_eq!(raw, r#"{"x":1.5,"y":2.0}"#);
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn default_position_never_negative_on_tiny_viewport() {
    let tiny = Bounds { viewport_width: 50.0, viewport_height: 20.0, panel_width: 120.0, panel_height: 40.0 };
    assert_eq!(tiny.default_position(), Position { x: 0.0, y: 0.0 });
}

#[test]
fn clamp_keeps_panel_on_screen() {
    let b = bounds();
    assert_eq!(b.clamp(Position { x: -30.0, y: 900.0 }), Position { x: 0.0, y: 760.0 });
    assert_eq!(b.clamp(Position { x: 500.0, y: 300.0 }), Position { x: 500.0, y: 300.0 });
}

#[test]
fn drag_preserves_grab_offset() {
    let drag = Drag::start(Position { x: 100.0, y: 100.0 }, Position { x: 110.0, y: 105.0 });
    let moved = drag.move_to(Position { x: 210.0, y: 305.0 }, &bounds());
    assert_eq!(moved, Position { x: 200.0, y: 300.0 });
}
