#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn new_handle_is_pending_until_cancelled() {
    let handle = after(10, || {});
    assert!(handle.is_pending());
    handle.cancel();
    assert!(!handle.is_pending());
}

#[test]
fn cancel_is_visible_through_clones() {
    let handle = after(10, || {});
    let clone = handle.clone();
    clone.cancel();
    assert!(!handle.is_pending());
}

#[test]
fn slot_schedule_cancels_previous() {
    let slot = DelaySlot::default();
    assert!(!slot.is_pending());
    slot.schedule(10, || {});
    let first = slot.current_handle().expect("scheduled");
    slot.schedule(10, || {});
    assert!(!first.is_pending());
    assert!(slot.is_pending());
}

#[test]
fn slot_clones_share_state() {
    let slot = DelaySlot::default();
    let cleanup = slot.clone();
    slot.schedule(10, || {});
    cleanup.cancel();
    assert!(!slot.is_pending());
    assert!(slot.current_handle().is_none());
}
