//! User-tunable cloud parameters and their boundary validation.
//!
//! The surrounding application owns the config (including any persistence);
//! the engine reads it once per frame and never writes it back. Validation
//! happens here, at the boundary, so the projection math never sees a
//! degenerate radius.

use thiserror::Error;

/// Sign of the idle spin around the yaw axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl SpinDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            SpinDirection::Clockwise => 1.0,
            SpinDirection::CounterClockwise => -1.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("max angular speed must be positive and finite, got {0}")]
    InvalidMaxSpeed(f32),
    #[error("idle spin speed must be non-negative and finite, got {0}")]
    InvalidIdleSpeed(f32),
}

/// Tunable parameters for one cloud instance.
///
/// Angular speeds are radians per normalized 60 Hz tick.
#[derive(Clone, Debug)]
pub struct CloudConfig {
    /// Sphere radius in presentation units (typically CSS pixels).
    pub radius: f32,
    /// Per-axis velocity clamp.
    pub max_speed: f32,
    /// Yaw velocity the free spin settles toward.
    pub idle_speed: f32,
    pub direction: SpinDirection,
    /// Fade far-side tags by depth.
    pub depth_alpha: bool,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            radius: 300.0,
            max_speed: 0.08,
            idle_speed: 0.004,
            direction: SpinDirection::Clockwise,
            depth_alpha: true,
        }
    }
}

impl CloudConfig {
    /// Validates the config, returning it with `idle_speed` brought under
    /// the velocity clamp (the idle target must be reachable, otherwise the
    /// damped velocity would chase a value the clamp forbids).
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        if !self.idle_speed.is_finite() || self.idle_speed < 0.0 {
            return Err(ConfigError::InvalidIdleSpeed(self.idle_speed));
        }
        self.idle_speed = self.idle_speed.min(self.max_speed);
        Ok(self)
    }
}
