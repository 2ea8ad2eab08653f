//! Rotation angles and inertial angular velocity for the cloud sphere.

use crate::config::CloudConfig;
use crate::constants::{DAMPING, DRAG_SENSITIVITY};

/// Mutable rotation record, one per cloud view.
///
/// Angles are radians; velocities are radians per normalized 60 Hz tick.
/// Velocities never exceed `max_speed` in magnitude on either axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationState {
    pub pitch: f32,
    pub yaw: f32,
    pub pitch_vel: f32,
    pub yaw_vel: f32,
}

impl RotationState {
    /// One free-spin step. Velocities are exponentially damped toward the
    /// idle spin (yaw carries the configured direction, pitch settles to
    /// rest), then integrated into the angles. With `DAMPING` < 1 the
    /// sphere never fully stops and never runs away; it converges to the
    /// idle speed asymptotically.
    pub fn advance(&mut self, dt_factor: f32, cfg: &CloudConfig) {
        let max = cfg.max_speed;
        let idle_yaw = cfg.idle_speed * cfg.direction.sign();
        self.yaw_vel = (self.yaw_vel * DAMPING + idle_yaw * (1.0 - DAMPING)).clamp(-max, max);
        self.pitch_vel = (self.pitch_vel * DAMPING).clamp(-max, max);
        self.yaw += self.yaw_vel * dt_factor;
        self.pitch += self.pitch_vel * dt_factor;
    }

    /// One drag step. Angles follow the pointer directly; velocities are set
    /// from the *instantaneous* delta (not accumulated), so releasing the
    /// pointer hands the last observed drag speed off to the free spin.
    pub fn apply_drag(&mut self, dx: f32, dy: f32, cfg: &CloudConfig) {
        let max = cfg.max_speed;
        self.yaw += dx * DRAG_SENSITIVITY;
        self.pitch -= dy * DRAG_SENSITIVITY;
        self.yaw_vel = (dx * DRAG_SENSITIVITY).clamp(-max, max);
        self.pitch_vel = (-dy * DRAG_SENSITIVITY).clamp(-max, max);
    }
}
