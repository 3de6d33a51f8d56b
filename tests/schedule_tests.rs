// Host-side tests for frame coalescing and resize debouncing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod schedule {
    include!("../src/schedule.rs");
}

use schedule::*;

#[test]
fn frame_gate_coalesces_bursts() {
    let mut gate = FrameGate::default();
    let requested = (0..50).filter(|_| gate.try_begin()).count();
    assert_eq!(requested, 1);
    assert!(gate.is_pending());

    gate.finish();
    assert!(!gate.is_pending());
    assert!(gate.try_begin());
}

#[test]
fn rapid_resizes_settle_once() {
    let mut debounce = Debounce::default();
    let tickets: Vec<Ticket> = (0..10).map(|_| debounce.trigger()).collect();
    // timers fire in order once the burst is over
    let recomputations = tickets
        .into_iter()
        .filter(|&t| debounce.settle(t))
        .count();
    assert_eq!(recomputations, 1);
}

#[test]
fn only_latest_ticket_settles() {
    let mut debounce = Debounce::default();
    let first = debounce.trigger();
    let second = debounce.trigger();
    assert!(!debounce.settle(first));
    assert!(debounce.settle(second));
    assert!(!debounce.settle(second), "a ticket settles at most once");
}

#[test]
fn separate_bursts_each_settle() {
    let mut debounce = Debounce::default();
    let a = debounce.trigger();
    assert!(debounce.settle(a));
    let b = debounce.trigger();
    let c = debounce.trigger();
    assert!(!debounce.settle(b));
    assert!(debounce.settle(c));
}
