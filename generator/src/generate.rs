use std::collections::HashMap;

use bevy_ecs::name::Name;
use bevy_ecs::prelude::*;
use bevy_transform::components::Transform;
use corridor::{
    animation_length, build_segment, palette, rig_keyframe, CorridorParams, MaterialRole,
    ParamsError, RigKeyframe,
};
use tracing::{debug, error, info};

use crate::animation::{keyframe_location, Playhead, PositionTrack};
use crate::constraint::TrackTo;
use crate::materials::{MaterialId, MaterialLibrary};
use crate::scene::{
    clear_scene, spawn_volume, ActiveCamera, CameraTarget, MainCamera, SceneObject, Timeline,
};
use crate::Config;

/// Summary of the last generation run.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub segments: u32,
    pub volumes: u32,
    pub keyframes: u32,
    pub frame_end: u32,
    pub camera: Entity,
    pub target: Entity,
}

/// Clears `world`, rebuilds the corridor and keys the camera rig.
///
/// Safe to call repeatedly on the same world: objects are cleared and
/// materials are recreated by name.
pub fn generate_and_animate(
    world: &mut World,
    params: &CorridorParams,
) -> Result<GenerationReport, ParamsError> {
    params.validate()?;

    clear_scene(world);

    let mut role_materials: HashMap<MaterialRole, MaterialId> = HashMap::new();
    {
        world.init_resource::<MaterialLibrary>();
        let mut library = world.resource_mut::<MaterialLibrary>();
        for role in MaterialRole::ALL {
            let spec = palette(role);
            role_materials.insert(role, library.create_simple_material(&spec.name, spec.base_color));
        }
    }

    let (camera, target) = spawn_rig(world, params);

    let frame_end = animation_length(params);
    world.insert_resource(Timeline { frame_start: 0, frame_end });
    world.insert_resource(Playhead::default());

    let mut volumes = 0;
    let mut keyframes = 0;
    for step in 0..params.num_steps {
        let segment = build_segment(params, step);
        for volume in segment.volumes() {
            spawn_volume(world, &volume, step, role_materials[&volume.material]);
            volumes += 1;
        }

        let key = rig_keyframe(params, step);
        if key_rig(world, camera, target, &key) {
            keyframes += 1;
        }
    }

    let report = GenerationReport {
        segments: params.num_steps,
        volumes,
        keyframes,
        frame_end,
        camera,
        target,
    };
    debug!(?report, "corridor generated");
    Ok(report)
}

/// Spawns the look-at target and the camera at their rest pose and makes the
/// camera active.
fn spawn_rig(world: &mut World, params: &CorridorParams) -> (Entity, Entity) {
    let (camera_rest, target_rest) = RigKeyframe::rest(params);
    let target = world
        .spawn((
            SceneObject,
            CameraTarget,
            Name::new("CameraTarget"),
            Transform::from_translation(target_rest),
            PositionTrack::default(),
        ))
        .id();
    let camera = world
        .spawn((
            SceneObject,
            MainCamera,
            Name::new("MainCamera"),
            Transform::from_translation(camera_rest),
            PositionTrack::default(),
            TrackTo::new(target),
        ))
        .id();
    world.insert_resource(ActiveCamera(camera));
    (camera, target)
}

fn key_rig(world: &mut World, camera: Entity, target: Entity, key: &RigKeyframe) -> bool {
    for (entity, pos) in [(camera, key.camera), (target, key.target)] {
        if let Some(mut transform) = world.get_mut::<Transform>(entity) {
            transform.translation = pos;
        }
        if !keyframe_location(world, entity, key.frame) {
            return false;
        }
    }
    true
}

/// Startup system: generate from the app's [`Config`]. Invalid parameters are
/// fatal; `build_generator_app` rejects them before this can run.
pub fn generate_scene(world: &mut World) {
    let params = world.resource::<Config>().corridor.clone();
    match generate_and_animate(world, &params) {
        Ok(report) => {
            info!(
                segments = report.segments,
                volumes = report.volumes,
                frame_end = report.frame_end,
                "procedural corridor and flythrough ready"
            );
            world.insert_resource(report);
        }
        Err(err) => {
            error!(%err, "corridor generation failed");
            panic!("corridor generation failed: {err}");
        }
    }
}
