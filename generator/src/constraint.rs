use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_transform::components::Transform;
use corridor::{track_to, WORLD_UP};
use tracing::warn;

/// Keeps the owner's local −Z aimed at `target`, local +Y toward `world_up`.
#[derive(Component, Debug, Clone, Copy)]
pub struct TrackTo {
    pub target: Entity,
    pub world_up: Vec3,
}

impl TrackTo {
    pub fn new(target: Entity) -> Self {
        Self { target, world_up: WORLD_UP }
    }
}

/// Re-aims every constrained entity at its target's current location. A
/// degenerate aim keeps the previous rotation.
pub fn solve_track_to(constraints: Query<(Entity, &TrackTo)>, mut transforms: Query<&mut Transform>) {
    for (entity, constraint) in &constraints {
        let Ok(target) = transforms.get(constraint.target).map(|t| t.translation) else {
            warn!(?entity, target = ?constraint.target, "track-to target has no transform");
            continue;
        };
        let Ok(mut transform) = transforms.get_mut(entity) else {
            continue;
        };
        if let Some(rotation) = track_to(transform.translation, target, constraint.world_up) {
            transform.rotation = rotation;
        }
    }
}
