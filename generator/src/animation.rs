use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_transform::components::Transform;

use crate::scene::Timeline;

/// Location keyframes of one entity, sorted by frame with at most one key per
/// frame.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct PositionTrack {
    keys: Vec<(u32, Vec3)>,
}

impl PositionTrack {
    /// Inserting at an already keyed frame replaces that key.
    pub fn insert(&mut self, frame: u32, value: Vec3) {
        match self.keys.binary_search_by_key(&frame, |(f, _)| *f) {
            Ok(i) => self.keys[i].1 = value,
            Err(i) => self.keys.insert(i, (frame, value)),
        }
    }

    pub fn keys(&self) -> &[(u32, Vec3)] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Holds the end keys outside the keyed range and interpolates linearly
    /// inside it.
    pub fn sample(&self, frame: u32) -> Option<Vec3> {
        let (first, last) = (self.keys.first()?, self.keys.last()?);
        if frame <= first.0 {
            return Some(first.1);
        }
        if frame >= last.0 {
            return Some(last.1);
        }
        // first.0 < frame < last.0, so 1 <= idx < len
        let idx = self.keys.partition_point(|(f, _)| *f <= frame);
        let (f0, v0) = self.keys[idx - 1];
        let (f1, v1) = self.keys[idx];
        let t = (frame - f0) as f32 / (f1 - f0) as f32;
        Some(v0.lerp(v1, t))
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playhead {
    pub frame: u32,
    pub finished: bool,
}

/// Records the entity's current location at `frame`. Returns false if the
/// entity has no transform or track.
pub fn keyframe_location(world: &mut World, entity: Entity, frame: u32) -> bool {
    let Some(pos) = world.get::<Transform>(entity).map(|t| t.translation) else {
        return false;
    };
    let Some(mut track) = world.get_mut::<PositionTrack>(entity) else {
        return false;
    };
    track.insert(frame, pos);
    true
}

pub fn sample_position_tracks(
    playhead: Res<Playhead>,
    mut q: Query<(&PositionTrack, &mut Transform)>,
) {
    for (track, mut transform) in &mut q {
        if let Some(pos) = track.sample(playhead.frame) {
            transform.translation = pos;
        }
    }
}

pub fn advance_playhead(timeline: Res<Timeline>, mut playhead: ResMut<Playhead>) {
    if playhead.frame < timeline.frame_end {
        playhead.frame += 1;
    } else {
        playhead.finished = true;
    }
}
