//! Headless scene generator: builds the corridor into a bevy `World` and plays
//! the camera flythrough back frame by frame.

use bevy_app::{App, Startup, Update};
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_transform::components::Transform;
use corridor::ParamsError;
use tracing::info;

pub mod animation;
pub mod args;
pub mod config;
pub mod constraint;
pub mod generate;
pub mod materials;
pub mod scene;

pub use args::{Args, Preset};
pub use config::{load_config, parse_config, Config, ConfigError, PlaybackConfig};
pub use generate::{generate_and_animate, generate_scene, GenerationReport};

use animation::{advance_playhead, sample_position_tracks, Playhead};
use constraint::solve_track_to;
use materials::MaterialLibrary;
use scene::{ActiveCamera, Timeline};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackSet;

/// Validates the corridor parameters and assembles the app. Generation runs
/// on the first update; playback systems run on every update after it.
pub fn build_generator_app(cfg: Config) -> Result<App, ParamsError> {
    cfg.corridor.validate()?;
    let playback = cfg.playback.enabled;

    let mut app = App::new();
    app.insert_resource(cfg)
        .init_resource::<MaterialLibrary>()
        .init_resource::<Timeline>()
        .init_resource::<Playhead>()
        .add_systems(Startup, generate_scene);

    if playback {
        app.add_systems(
            Update,
            (
                sample_position_tracks,
                solve_track_to,
                log_rig_pose,
                advance_playhead,
            )
                .chain()
                .in_set(PlaybackSet),
        );
    }

    Ok(app)
}

pub fn log_rig_pose(
    cfg: Res<Config>,
    playhead: Res<Playhead>,
    active: Option<Res<ActiveCamera>>,
    q: Query<&Transform>,
) {
    let every = cfg.playback.log_every_frames;
    if playhead.finished || every == 0 || playhead.frame % every != 0 {
        return;
    }
    let Some(active) = active else {
        return;
    };
    let Ok(t) = q.get(active.0) else {
        return;
    };
    let forward = t.rotation * Vec3::NEG_Z;
    info!(
        frame = playhead.frame,
        position = ?t.translation,
        ?forward,
        "camera pose"
    );
}
