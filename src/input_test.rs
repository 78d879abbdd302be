#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;

// =============================================================
// DropTarget
// =============================================================

#[test]
fn drop_target_equality() {
    assert_eq!(DropTarget::Canvas, DropTarget::Canvas);
}

#[test]
fn drop_target_debug_format() {
    assert_eq!(format!("{:?}", DropTarget::Canvas), "Canvas");
}

// =============================================================
// DragPayload
// =============================================================

#[test]
fn palette_payload_is_unplaced() {
    let payload = DragPayload::palette(ComponentKind::Button);
    assert_eq!(payload.kind, ComponentKind::Button);
    assert!(!payload.placed);
    assert!(payload.id.is_none());
}

#[test]
fn placed_payload_carries_id() {
    let id = Uuid::new_v4();
    let payload = DragPayload::placed(id, ComponentKind::Card);
    assert_eq!(payload.kind, ComponentKind::Card);
    assert!(payload.placed);
    assert_eq!(payload.id, Some(id));
}

#[test]
fn payload_serde_roundtrip() {
    let payload = DragPayload::placed(Uuid::nil(), ComponentKind::List);
    let json = serde_json::to_string(&payload).unwrap();
    let back: DragPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn payload_deserialize_unknown_kind_tag() {
    // Unrecognized tags from the wire degrade to Unknown instead of failing.
    let payload: DragPayload =
        serde_json::from_str(r#"{"kind":"hexagon","placed":false,"id":null}"#).unwrap();
    assert_eq!(payload.kind, ComponentKind::Unknown);
}

#[test]
fn payload_clone_and_copy() {
    let a = DragPayload::palette(ComponentKind::Heading);
    let b = a;
    let c = a.clone();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_no_selection() {
    let ui = UiState::default();
    assert!(ui.selected_id.is_none());
}

// =============================================================
// ResizeState
// =============================================================

#[test]
fn resize_state_default_is_idle() {
    let state = ResizeState::default();
    assert!(matches!(state, ResizeState::Idle));
    assert!(!state.is_resizing());
}

#[test]
fn resize_state_resizing_reports_active() {
    let state = ResizeState::Resizing {
        id: Uuid::new_v4(),
        start_pointer: Point::new(10.0, 10.0),
        start_size: Size::new(200.0, 100.0),
    };
    assert!(state.is_resizing());
}

#[test]
fn resize_state_carries_gesture_context() {
    let id = Uuid::new_v4();
    let state = ResizeState::Resizing {
        id,
        start_pointer: Point::new(5.0, 6.0),
        start_size: Size::new(200.0, 100.0),
    };
    let ResizeState::Resizing { id: got, start_pointer, start_size } = state else {
        panic!("expected Resizing");
    };
    assert_eq!(got, id);
    assert_eq!(start_pointer, Point::new(5.0, 6.0));
    assert_eq!(start_size, Size::new(200.0, 100.0));
}
