//! Static distribution of tags over the sphere surface.

use glam::Vec3;
use std::f32::consts::PI;

/// Computes `count` base positions evenly spread on a sphere of `radius`.
///
/// Uses an area-equalizing spherical spiral: the polar angle is spaced
/// evenly in its cosine so every point claims the same surface area, and the
/// azimuthal step is scaled by `sqrt(count * pi)` so successive points
/// interleave instead of forming latitude rings. A plain lat/long grid would
/// cluster tags at the poles.
///
/// Pure and deterministic in `(count, radius)`; base positions must stay
/// bit-identical across re-layouts so tags do not teleport when only the
/// rotation changes.
pub fn sphere_layout(count: usize, radius: f32) -> Vec<Vec3> {
    if count == 0 {
        return Vec::new();
    }
    let theta_factor = (count as f32 * PI).sqrt();
    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / count as f32).acos();
            let theta = theta_factor * phi;
            Vec3::new(
                radius * theta.cos() * phi.sin(),
                radius * theta.sin() * phi.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}
