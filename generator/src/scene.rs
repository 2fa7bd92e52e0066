use bevy_ecs::name::Name;
use bevy_ecs::prelude::*;
use bevy_transform::components::Transform;
use corridor::{BoxVolume, SegmentPart};
use tracing::debug;

use crate::materials::{MaterialId, MaterialSlot};

/// Marker for everything the generator spawns; `clear_scene` removes these.
#[derive(Component)]
pub struct SceneObject;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPiece {
    pub step: u32,
    pub part: SegmentPart,
}

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct CameraTarget;

/// Camera the scene is viewed through.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCamera(pub Entity);

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeline {
    pub frame_start: u32,
    pub frame_end: u32,
}

/// Despawns every scene object and drops the active camera. Returns how many
/// entities were removed.
pub fn clear_scene(world: &mut World) -> usize {
    let mut q = world.query_filtered::<Entity, With<SceneObject>>();
    let doomed: Vec<Entity> = q.iter(world).collect();
    for entity in &doomed {
        world.despawn(*entity);
    }
    world.remove_resource::<ActiveCamera>();
    world.insert_resource(Timeline::default());
    debug!(removed = doomed.len(), "scene cleared");
    doomed.len()
}

/// Spawns one corridor box: translation is the volume center, scale is its
/// half-extents (unit cube of half-extent 1).
pub fn spawn_volume(
    world: &mut World,
    volume: &BoxVolume,
    step: u32,
    material: MaterialId,
) -> Entity {
    world
        .spawn((
            SceneObject,
            Name::new(format!("{:?}.{:03}", volume.part, step)),
            Transform::from_translation(volume.center).with_scale(volume.half_extents),
            MaterialSlot(material),
            SegmentPiece { step, part: volume.part },
        ))
        .id()
}
