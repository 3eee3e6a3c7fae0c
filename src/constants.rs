/// Glow layer tuning constants.
///
/// These constants express intended behavior (radii, follow smoothness,
/// layering) and keep magic numbers out of the code.
// Resting radius of the glow circle (CSS pixels)
pub const GLOW_BASE_RADIUS: f64 = 50.0;

// Pulse oscillation around the base radius
pub const GLOW_PULSE_AMPLITUDE: f64 = 20.0;
pub const GLOW_PULSE_SPEED: f64 = 0.03; // phase advance per frame, radians

// Pointer follow filter; lower value = smoother but slower follow
pub const GLOW_SMOOTHING: f64 = 0.035;

// Soft-edge falloff added to the gradient's outer radius (CSS pixels)
pub const GLOW_BLUR: f64 = 500.0;

// Purple tint, solid center through transparent edge
pub const GLOW_TINT_CORE: &str = "rgba(124, 58, 237, 0.4)";
pub const GLOW_TINT_MID: &str = "rgba(124, 58, 237, 0.2)";
pub const GLOW_TINT_EDGE: &str = "rgba(124, 58, 237, 0)";
pub const GLOW_SHADOW: &str = "rgba(124, 58, 237, 0.3)";

// Stacking order; the canvas sits behind all interactive content
pub const GLOW_Z_INDEX: &str = "-5";
