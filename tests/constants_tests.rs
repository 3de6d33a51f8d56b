// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn loader_timings_are_sane() {
    assert!(REVEAL_DELAY_MS > 0);
    assert!(OVERLAY_REMOVE_DELAY_MS > 0);
    assert!(STYLESHEET_POLL_INTERVAL_MS > 0);
    // the timeout must allow more than one probe
    assert!(STYLESHEET_POLL_TIMEOUT_MS > STYLESHEET_POLL_INTERVAL_MS);
    assert!(RESIZE_DEBOUNCE_MS > 0);
}

#[test]
fn critical_assets_are_part_of_the_asset_list() {
    for critical in CRITICAL_ASSETS {
        assert!(ASSETS.contains(critical), "{critical} not preloaded");
    }
    for asset in ASSETS {
        assert!(asset.starts_with("image/") || asset.starts_with("giff/"));
    }
}

#[test]
fn parallax_specs_have_valid_speeds() {
    for spec in PARALLAX_SPECS.iter() {
        assert!(spec.speed > 0.0 && spec.speed <= 1.0, "{}", spec.target);
        assert!(spec.max_movement > 0.0, "{}", spec.target);
    }
}

#[test]
fn named_borders_keep_their_displacement_caps() {
    let caps: Vec<(&str, f64)> = PARALLAX_SPECS
        .iter()
        .map(|s| (s.target, s.max_movement))
        .collect();
    assert_eq!(
        caps,
        vec![
            (".labubu-border", 20.0),
            (".dubai-border", 40.0),
            (".labubu-border-2", 70.0),
            (".labubu-border-3", 40.0),
            (".gif-front", 60.0),
        ]
    );
    let leads: Vec<&str> = PARALLAX_SPECS
        .iter()
        .filter(|s| s.lead_viewport)
        .map(|s| s.target)
        .collect();
    assert_eq!(leads, vec![".labubu-border-2"]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn noise_stays_subtle() {
    assert!(NOISE_ALPHA < 64);
    assert!(NOISE_AMPLITUDE > 0.0 && NOISE_AMPLITUDE <= 16.0);
    assert!(SETTLE_EPSILON_PX > 0.0 && SETTLE_EPSILON_PX < 1.0);
}
