use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{center_x, forward_y, CorridorParams, MaterialRole, WallDecoration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentPart {
    Floor,
    LeftWall,
    RightWall,
}

/// An axis-aligned box built from a unit cube (half-extent 1) scaled per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxVolume {
    pub part: SegmentPart,
    pub center: Vec3,
    /// Per-axis scale of the unit cube, which equals its half-extents.
    pub half_extents: Vec3,
    pub material: MaterialRole,
}

impl BoxVolume {
    pub fn min_z(&self) -> f32 {
        self.center.z - self.half_extents.z
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentVolumes {
    pub step: u32,
    pub floor: BoxVolume,
    pub left_wall: BoxVolume,
    pub right_wall: BoxVolume,
}

impl SegmentVolumes {
    pub fn left_decoration(&self) -> WallDecoration {
        WallDecoration::for_step(self.step)
    }

    /// Volumes in creation order: floor, left wall, right wall.
    pub fn volumes(&self) -> [BoxVolume; 3] {
        [self.floor, self.left_wall, self.right_wall]
    }
}

/// Lays out the floor and both walls of segment `step`.
///
/// Only the left wall follows the alternating decoration; the right wall is
/// always standard.
pub fn build_segment(params: &CorridorParams, step: u32) -> SegmentVolumes {
    let cx = center_x(params, step);
    let y = forward_y(params, step);

    let floor = BoxVolume {
        part: SegmentPart::Floor,
        center: Vec3::new(cx, y, 0.0),
        half_extents: Vec3::new(
            params.half_width + params.floor_margin,
            1.0,
            params.floor_thickness,
        ),
        material: MaterialRole::Floor,
    };

    let deco = WallDecoration::for_step(step);
    let left_wall = BoxVolume {
        part: SegmentPart::LeftWall,
        center: Vec3::new(cx - params.half_width, y, deco.center_height(params)),
        half_extents: Vec3::new(1.0, 1.0, deco.height_scale(params)),
        material: deco.material(),
    };

    let right_wall = BoxVolume {
        part: SegmentPart::RightWall,
        center: Vec3::new(cx + params.half_width, y, params.base_height),
        half_extents: Vec3::ONE,
        material: MaterialRole::WallDark,
    };

    SegmentVolumes { step, floor, left_wall, right_wall }
}

pub fn segments(params: &CorridorParams) -> impl Iterator<Item = SegmentVolumes> + '_ {
    (0..params.num_steps).map(move |step| build_segment(params, step))
}
