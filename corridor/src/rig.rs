use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{centerline, CorridorParams};

/// Rest pose of the camera before any keyframe: this far behind the origin.
pub const CAMERA_REST_BACK: f32 = 5.0;

/// Camera and target positions recorded together at one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigKeyframe {
    pub step: u32,
    pub frame: u32,
    pub camera: Vec3,
    pub target: Vec3,
}

pub fn rig_keyframe(params: &CorridorParams, step: u32) -> RigKeyframe {
    let ahead = step + params.lookahead_offset;
    RigKeyframe {
        step,
        frame: step * params.frames_per_step,
        camera: centerline(params, step, params.eye_height),
        target: centerline(params, ahead, params.eye_height),
    }
}

/// One keyframe per segment, frames strictly increasing when
/// `frames_per_step > 0`.
pub fn rig_keyframes(params: &CorridorParams) -> impl Iterator<Item = RigKeyframe> + '_ {
    (0..params.num_steps).map(move |step| rig_keyframe(params, step))
}

/// Timeline end frame for the whole flythrough. Only meaningful for
/// parameters that passed [`CorridorParams::validate`].
pub fn animation_length(params: &CorridorParams) -> u32 {
    params.num_steps * params.frames_per_step
}

impl RigKeyframe {
    /// Pose the rig holds before the first keyframe is applied.
    pub fn rest(params: &CorridorParams) -> (Vec3, Vec3) {
        (
            Vec3::new(0.0, -CAMERA_REST_BACK, params.eye_height),
            Vec3::new(0.0, 0.0, params.eye_height),
        )
    }
}
