use glam::DVec2;

use crate::constants::{
    GLOW_BASE_RADIUS, GLOW_BLUR, GLOW_PULSE_AMPLITUDE, GLOW_PULSE_SPEED, GLOW_SMOOTHING,
};

/// Viewport dimensions in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self { width, height, dpr }
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr) as u32,
            (self.height * self.dpr) as u32,
        )
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// State of the cursor-following glow.
///
/// `current` trails `target` through an exponential filter stepped once per
/// animation frame; convergence speed therefore tracks the display refresh
/// rate.
pub struct GlowState {
    pub current: DVec2,
    pub target: DVec2,
    pub base_radius: f64,
    pub pulse_amplitude: f64,
    pub pulse_speed: f64,
    pub pulse_phase: f64,
    pub smoothing: f64,
    pub blur_radius: f64,
    pub viewport: Viewport,
}

impl GlowState {
    /// Starts with both positions at the viewport center.
    pub fn new(viewport: Viewport) -> Self {
        let center = viewport.center();
        Self {
            current: center,
            target: center,
            base_radius: GLOW_BASE_RADIUS,
            pulse_amplitude: GLOW_PULSE_AMPLITUDE,
            pulse_speed: GLOW_PULSE_SPEED,
            pulse_phase: 0.0,
            smoothing: GLOW_SMOOTHING,
            blur_radius: GLOW_BLUR,
            viewport,
        }
    }

    /// Records the latest observed pointer position. Only the frame step
    /// consumes it; nothing is drawn from here.
    #[inline]
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
    }

    /// Replaces the viewport snapshot. Idempotent for unchanged dimensions.
    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advances one animation frame: pulls `current` toward `target` and
    /// moves the pulse phase forward.
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.smoothing;
        self.pulse_phase += self.pulse_speed;
    }

    /// Pulsing circle radius at the current phase. Stays positive as long
    /// as the amplitude is below the base radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.base_radius + self.pulse_amplitude * self.pulse_phase.sin()
    }
}
