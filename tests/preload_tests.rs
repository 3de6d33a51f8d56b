// Host-side tests for preload bookkeeping and the reveal transition.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod preload {
    include!("../src/preload.rs");
}
mod reveal {
    include!("../src/reveal.rs");
}

use constants::*;
use preload::*;
use reveal::*;
use std::cell::RefCell;

#[test]
fn critical_first_plan_partitions_every_asset_once() {
    let plan = PreloadPlan::new(ASSETS, CRITICAL_ASSETS, PreloadStrategy::CriticalFirst);
    assert_eq!(plan.total(), ASSETS.len());
    assert_eq!(plan.gating.len(), CRITICAL_ASSETS.len());
    for asset in ASSETS {
        let in_gating = plan.gating.contains(asset);
        let in_deferred = plan.deferred.contains(asset);
        assert!(in_gating ^ in_deferred, "{asset} must be in exactly one set");
    }
    // list order is kept
    assert_eq!(plan.gating, vec!["image/labubuBorder.png", "giff/fond.gif"]);
}

#[test]
fn all_strategy_gates_on_everything() {
    let plan = PreloadPlan::new(ASSETS, CRITICAL_ASSETS, PreloadStrategy::All);
    assert_eq!(plan.gating, ASSETS.to_vec());
    assert!(plan.deferred.is_empty());
}

#[test]
fn unknown_critical_entries_are_ignored() {
    let plan = PreloadPlan::new(
        &["a.png", "b.png"],
        &["missing.gif", "b.png"],
        PreloadStrategy::CriticalFirst,
    );
    assert_eq!(plan.gating, vec!["b.png"]);
    assert_eq!(plan.deferred, vec!["a.png"]);
}

#[test]
fn progress_completes_exactly_once_with_failures() {
    let mut progress = PreloadProgress::new(ASSETS.len());
    let mut completions = 0;
    for (i, _) in ASSETS.iter().enumerate() {
        let outcome = if i % 3 == 0 {
            AssetOutcome::Failed
        } else {
            AssetOutcome::Loaded
        };
        if progress.record(outcome) {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(progress.settled(), ASSETS.len());
    assert_eq!(progress.failed(), 4);
    assert_eq!(progress.loaded(), ASSETS.len() - 4);
    assert!(progress.is_complete());
    assert_eq!(progress.percent(), 100.0);

    // stray callbacks never push the counter past the total
    assert!(!progress.record(AssetOutcome::Loaded));
    assert_eq!(progress.settled(), ASSETS.len());
}

#[test]
fn progress_percent_tracks_settled_assets() {
    let mut progress = PreloadProgress::new(4);
    assert_eq!(progress.percent(), 0.0);
    progress.record(AssetOutcome::Failed);
    assert_eq!(progress.percent(), 25.0);
    assert!(PreloadProgress::new(0).is_complete());
}

#[test]
fn stylesheet_probe_settles_unless_pending() {
    assert!(SheetProbe::Absent.is_settled());
    assert!(SheetProbe::Readable.is_settled());
    assert!(SheetProbe::CrossOrigin.is_settled());
    assert!(!SheetProbe::Pending.is_settled());
}

#[test]
fn stylesheet_polling_is_bounded() {
    let attempts =
        stylesheet_poll_attempts(STYLESHEET_POLL_INTERVAL_MS, STYLESHEET_POLL_TIMEOUT_MS);
    assert_eq!(attempts, 300);
    assert_eq!(stylesheet_poll_attempts(0, 1_000), 1);
    assert_eq!(stylesheet_poll_attempts(10, 0), 1);
}

#[derive(Default)]
struct Surface {
    calls: RefCell<Vec<&'static str>>,
}

impl RevealSurface for Surface {
    fn hide_overlay(&self) {
        self.calls.borrow_mut().push("hidden");
    }
    fn mark_content_loaded(&self) {
        self.calls.borrow_mut().push("loaded");
    }
    fn remove_overlay(&self) {
        self.calls.borrow_mut().push("removed");
    }
}

#[test]
fn reveal_applies_both_states_together() {
    let surface = Surface::default();
    let mut revealer = Revealer::default();
    assert!(!revealer.is_revealed());
    assert!(revealer.reveal(&surface));
    assert_eq!(*surface.calls.borrow(), vec!["hidden", "loaded"]);
    assert!(revealer.is_revealed());
}

#[test]
fn forced_reveal_after_normal_reveal_is_a_no_op() {
    let surface = Surface::default();
    let mut revealer = Revealer::default();
    revealer.reveal(&surface);
    assert!(!revealer.reveal(&surface));
    assert_eq!(surface.calls.borrow().len(), 2);
}

#[test]
fn failed_load_still_reveals_the_page() {
    let surface = Surface::default();
    let mut revealer = Revealer::default();
    let result: anyhow::Result<()> = Err(anyhow::anyhow!("stylesheet probe threw"));
    assert!(finish_load(result, &mut revealer, &surface));
    assert!(revealer.is_revealed());
    assert_eq!(*surface.calls.borrow(), vec!["hidden", "loaded"]);
}

#[test]
fn failure_after_normal_reveal_changes_nothing() {
    let surface = Surface::default();
    let mut revealer = Revealer::default();
    revealer.reveal(&surface);
    let result: anyhow::Result<()> = Err(anyhow::anyhow!("late failure"));
    assert!(!finish_load(result, &mut revealer, &surface));
    assert_eq!(surface.calls.borrow().len(), 2);
}

#[test]
fn successful_load_is_left_alone() {
    let surface = Surface::default();
    let mut revealer = Revealer::default();
    revealer.reveal(&surface);
    assert!(!finish_load(Ok::<(), anyhow::Error>(()), &mut revealer, &surface));
    assert_eq!(surface.calls.borrow().len(), 2);
}
