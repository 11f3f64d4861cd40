// Host-side tests for deferred-call bookkeeping (debounce timers, frame loop).
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod schedule {
    include!("../src/schedule.rs");
}

use schedule::*;

#[test]
fn rescheduling_displaces_the_earlier_call() {
    let mut slot = PendingSlot::default();
    assert_eq!(slot.replace(1, "first"), None);
    // The displaced call comes back so its timeout can be cleared.
    assert_eq!(slot.replace(2, "second"), Some((1, "first")));
    assert_eq!(slot.handle(), Some(2));
    assert_eq!(slot.take(), Some((2, "second")));
}

#[test]
fn only_the_last_of_a_burst_stays_pending() {
    let mut slot = PendingSlot::default();
    let mut cleared = Vec::new();
    for handle in 10..15 {
        if let Some((stale, _)) = slot.replace(handle, handle * 100) {
            cleared.push(stale);
        }
    }
    assert_eq!(cleared, vec![10, 11, 12, 13]);
    assert_eq!(slot.take(), Some((14, 1400)));
    assert!(!slot.is_pending());
}

#[test]
fn cancel_empties_the_slot() {
    let mut slot = PendingSlot::default();
    slot.replace(7, ());
    assert!(slot.is_pending());
    assert_eq!(slot.take(), Some((7, ())));
    assert!(!slot.is_pending());
    assert_eq!(slot.take(), None);
}

#[test]
fn second_start_does_not_request_another_frame() {
    let mut frames = FrameSlot::default();
    assert!(frames.needs_request());
    frames.requested(1);
    assert!(!frames.needs_request());
    assert_eq!(frames.pending(), Some(1));
}

#[test]
fn stop_then_start_leaves_exactly_one_pending_frame() {
    let mut frames = FrameSlot::default();
    frames.requested(1);
    assert_eq!(frames.stop(), Some(1));
    assert_eq!(frames.pending(), None);
    assert_eq!(frames.stop(), None);

    assert!(frames.needs_request());
    frames.requested(2);
    assert!(!frames.needs_request());
    assert_eq!(frames.pending(), Some(2));
}

#[test]
fn running_frame_hands_over_to_the_next_request() {
    let mut frames = FrameSlot::default();
    frames.requested(1);
    frames.frame_began();
    // Stopping mid-frame has nothing left to cancel.
    assert_eq!(frames.pending(), None);
    frames.requested(2);
    assert_eq!(frames.stop(), Some(2));
}

#[test]
fn dom_ready_waits_only_while_parsing() {
    assert!(is_still_parsing("loading"));
    assert!(!is_still_parsing("interactive"));
    assert!(!is_still_parsing("complete"));
}
