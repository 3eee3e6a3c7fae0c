// Host-side tests for the pure glow state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod glow {
    include!("../src/core/glow.rs");
}

use glam::DVec2;
use glow::*;

#[test]
fn starts_at_viewport_center() {
    let state = GlowState::new(Viewport::new(800.0, 600.0, 2.0));
    assert_eq!(state.current, state.target);
    assert_eq!(state.current, DVec2::new(400.0, 300.0));
}

#[test]
fn one_step_covers_the_smoothing_fraction() {
    // target (400, 300) from (0, 0) with smoothing 0.035 lands at (14, 10.5)
    let mut state = GlowState::new(Viewport::new(800.0, 600.0, 1.0));
    state.current = DVec2::ZERO;
    state.set_target(400.0, 300.0);
    state.step();
    assert!((state.current.x - 14.0).abs() < 1e-9);
    assert!((state.current.y - 10.5).abs() < 1e-9);
}

#[test]
fn distance_to_fixed_target_strictly_decreases() {
    let mut state = GlowState::new(Viewport::new(1024.0, 768.0, 1.0));
    state.set_target(900.0, 100.0);
    let target = state.target;
    let mut prev = (state.current - target).length();
    assert!(prev > 0.0);
    for _ in 0..240 {
        state.step();
        let dist = (state.current - target).length();
        assert!(dist < prev, "distance did not shrink: {} -> {}", prev, dist);
        prev = dist;
    }
}

#[test]
fn convergence_respects_the_exponential_bound() {
    let mut state = GlowState::new(Viewport::new(800.0, 600.0, 1.0));
    state.current = DVec2::ZERO;
    state.set_target(400.0, 300.0);
    let target = state.target;
    let initial = target.length();
    for n in 1..=120u32 {
        state.step();
        let dist = (state.current - target).length();
        let bound = initial * (1.0 - state.smoothing).powi(n as i32);
        assert!(
            dist <= bound + 1e-6,
            "frame {}: {} exceeds bound {}",
            n,
            dist,
            bound
        );
    }
}

#[test]
fn pulse_radius_stays_within_the_band() {
    let mut state = GlowState::new(Viewport::new(800.0, 600.0, 1.0));
    let lo = state.base_radius - state.pulse_amplitude;
    let hi = state.base_radius + state.pulse_amplitude;
    for _ in 0..10_000 {
        state.step();
        let r = state.radius();
        assert!(r >= lo - 1e-9 && r <= hi + 1e-9);
        assert!(r > 0.0);
    }
}

#[test]
fn pulse_phase_advances_monotonically() {
    let mut state = GlowState::new(Viewport::new(800.0, 600.0, 1.0));
    let mut prev = state.pulse_phase;
    for _ in 0..1_000 {
        state.step();
        assert!(state.pulse_phase > prev);
        prev = state.pulse_phase;
    }
}

#[test]
fn radius_peaks_at_quarter_phase() {
    // sin(pi/2) = 1, so base 50 + amplitude 20 gives 70
    let mut state = GlowState::new(Viewport::new(800.0, 600.0, 1.0));
    state.pulse_phase = std::f64::consts::FRAC_PI_2;
    assert!((state.radius() - 70.0).abs() < 1e-9);
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(Viewport::new(800.0, 600.0, 1.0).backing_size(), (800, 600));
    assert_eq!(
        Viewport::new(1600.0, 1200.0, 2.0).backing_size(),
        (3200, 2400)
    );
}

#[test]
fn viewport_updates_are_idempotent() {
    let mut state = GlowState::new(Viewport::new(800.0, 600.0, 1.0));
    let resized = Viewport::new(1600.0, 1200.0, 2.0);

    state.set_viewport(resized);
    let once = (state.viewport, state.viewport.backing_size());

    state.set_viewport(resized);
    assert_eq!((state.viewport, state.viewport.backing_size()), once);
}

#[test]
fn target_updates_do_not_move_the_current_position() {
    let mut state = GlowState::new(Viewport::new(800.0, 600.0, 1.0));
    let before = state.current;
    state.set_target(10.0, 20.0);
    assert_eq!(state.current, before);
}
