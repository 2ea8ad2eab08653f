use std::time::Duration;

// Shared tuning constants for the tag cloud engine.

// Rotation dynamics
pub const DAMPING: f32 = 0.98; // velocity fraction retained per normalized tick
pub const TICKS_PER_SEC: f32 = 60.0; // dt normalization base for `advance`
pub const DRAG_SENSITIVITY: f32 = 0.005; // radians per pointer pixel

// Projection
pub const MAX_PERSPECTIVE_SCALE: f32 = 4.0; // guard against float drift near the camera plane
pub const MIN_DEPTH_ALPHA: f32 = 0.1; // far-side tags stay faintly visible
pub const Z_ORDER_SCALE: f32 = 100.0; // depth-to-stacking-order quantization

// Gestures
pub const LONG_PRESS: Duration = Duration::from_millis(600);

// Frame timing
pub const MAX_FRAME_DT: Duration = Duration::from_millis(250); // cap dt after the host suspends the loop
