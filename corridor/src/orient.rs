use bevy_math::{Mat3, Quat, Vec3};

/// World up in the corridor's Z-up convention.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Orientation that aims local −Z from `eye` at `target`, keeping local +Y as
/// close to `world_up` as possible.
///
/// Returns `None` when the two points coincide or the aim is parallel to
/// `world_up`; callers keep their previous rotation in that case.
pub fn track_to(eye: Vec3, target: Vec3, world_up: Vec3) -> Option<Quat> {
    // Local +Z points away from the target.
    let back = (eye - target).try_normalize()?;
    let right = world_up.cross(back).try_normalize()?;
    let up = back.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize())
}
