// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_tuning_is_within_reasonable_bounds() {
    // Smoothing must be a convergent exponential-filter coefficient
    assert!(GLOW_SMOOTHING > 0.0 && GLOW_SMOOTHING <= 1.0);

    // Phase must advance every frame
    assert!(GLOW_PULSE_SPEED > 0.0);

    // The soft edge cannot be negative
    assert!(GLOW_BLUR >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_band_keeps_the_radius_positive() {
    assert!(GLOW_BASE_RADIUS > 0.0);
    assert!(GLOW_PULSE_AMPLITUDE > 0.0);
    assert!(GLOW_PULSE_AMPLITUDE < GLOW_BASE_RADIUS);
}
