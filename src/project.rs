//! Per-tag, per-frame projection from sphere-local space to screen space.

use glam::Vec3;

use crate::constants::{MAX_PERSPECTIVE_SCALE, MIN_DEPTH_ALPHA, Z_ORDER_SCALE};
use crate::rotation::RotationState;
use crate::tag::ProjectedTag;

/// Rotates `base` by the current pitch/yaw and projects it to a 2D offset,
/// perspective scale, opacity, and stacking order.
///
/// The two axis rotations are composed in a fixed order and the screen
/// offset takes the yawed x together with the *pitched* y (`y1`, not a
/// further-rotated y). The composition is deliberately non-commutative and
/// produces the cloud's characteristic tumbling motion; the axis-specific
/// speed controls assume this asymmetry, so the order of operations here is
/// the contract, not an approximation of a full 3D rotation.
///
/// Returns `None` when the inputs are degenerate enough to produce
/// non-finite output; the caller skips that tag for the frame.
pub fn project(
    base: Vec3,
    rot: &RotationState,
    radius: f32,
    depth_alpha: bool,
) -> Option<ProjectedTag> {
    let (sp, cp) = rot.pitch.sin_cos();
    let (sy, cy) = rot.yaw.sin_cos();

    // Pitch: rotate in the y/z plane.
    let y1 = base.y * cp - base.z * sp;
    let z1 = base.y * sp + base.z * cp;
    // Yaw: rotate in the x/z plane using the already-pitched z.
    let x2 = base.x * cy - z1 * sy;
    let z2 = base.x * sy + z1 * cy;

    // Fixed-distance perspective divide. z2 is bounded to [-radius, radius]
    // for on-sphere input, so the denominator stays positive; the clamp
    // tolerates float drift.
    let scale = ((2.0 * radius) / (2.0 * radius - z2)).min(MAX_PERSPECTIVE_SCALE);

    let opacity = if depth_alpha {
        ((z2 + radius) / (2.0 * radius)).clamp(MIN_DEPTH_ALPHA, 1.0)
    } else {
        1.0
    };

    let z_order = (z2 * Z_ORDER_SCALE).floor();

    if !(x2.is_finite() && y1.is_finite() && scale.is_finite() && z_order.is_finite()) {
        return None;
    }

    Some(ProjectedTag {
        x: x2,
        y: y1,
        scale,
        opacity,
        z_order: z_order as i32,
    })
}
