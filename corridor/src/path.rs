use bevy_math::Vec3;

use crate::CorridorParams;

/// Lateral offset of the corridor centerline at `step`.
///
/// Always within `[-amplitude, amplitude]`. The look-ahead target goes through
/// this same function so the camera path and its aim point share one curve.
#[inline]
pub fn center_x(params: &CorridorParams, step: u32) -> f32 {
    params.amplitude * (forward_y(params, step) * params.frequency).sin()
}

/// Forward distance of `step` along +Y.
#[inline]
pub fn forward_y(params: &CorridorParams, step: u32) -> f32 {
    step as f32 * params.advance_z
}

pub fn centerline(params: &CorridorParams, step: u32, height: f32) -> Vec3 {
    Vec3::new(center_x(params, step), forward_y(params, step), height)
}
