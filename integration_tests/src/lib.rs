#[cfg(test)]
mod integration {
    use anyhow::{anyhow, Result};
    use bevy_app::App;
    use bevy_ecs::prelude::*;
    use bevy_math::Vec3;
    use bevy_transform::components::Transform;
    use corridor::{animation_length, builtins::default_corridor, rig_keyframe};
    use generator::animation::Playhead;
    use generator::materials::MaterialLibrary;
    use generator::scene::{ActiveCamera, SceneObject, Timeline};
    use generator::{build_generator_app, generate_scene, Config, GenerationReport, PlaybackConfig};
    use tracing::info;

    const AIM_TOLERANCE: f32 = 1e-4;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn reference_config() -> Config {
        Config {
            corridor: default_corridor(),
            playback: PlaybackConfig { enabled: true, log_every_frames: 120 },
        }
    }

    fn report(app: &App) -> Result<GenerationReport> {
        app.world()
            .get_resource::<GenerationReport>()
            .copied()
            .ok_or_else(|| anyhow!("generation never ran"))
    }

    fn camera_transform(app: &App) -> Result<Transform> {
        let active = app
            .world()
            .get_resource::<ActiveCamera>()
            .ok_or_else(|| anyhow!("no active camera"))?;
        app.world()
            .get::<Transform>(active.0)
            .copied()
            .ok_or_else(|| anyhow!("active camera has no transform"))
    }

    fn scene_object_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<SceneObject>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn full_flythrough_plays_to_the_end() -> Result<()> {
        init_tracing();

        let cfg = reference_config();
        let params = cfg.corridor.clone();
        let frame_end = animation_length(&params);
        assert_eq!(frame_end, 600);

        let mut app = build_generator_app(cfg)?;
        app.update();

        let rep = report(&app)?;
        assert_eq!(rep.volumes, 3 * params.num_steps);
        assert_eq!(rep.keyframes, params.num_steps);
        assert_eq!(*app.world().resource::<Timeline>(), Timeline { frame_start: 0, frame_end });

        let mut max_aim_err = 0.0f32;
        for frame in 1..=frame_end {
            app.update();
            let cam = camera_transform(&app)?;
            let target = app
                .world()
                .get::<Transform>(rep.target)
                .map(|t| t.translation)
                .ok_or_else(|| anyhow!("target has no transform"))?;
            let aim = (target - cam.translation).normalize();
            let err = (cam.rotation * Vec3::NEG_Z - aim).length();
            max_aim_err = max_aim_err.max(err);
            assert!(
                (cam.rotation * Vec3::Y).z > 0.0,
                "camera rolled upside down at frame {frame}"
            );
        }
        info!(max_aim_err, "flythrough finished");
        assert!(max_aim_err < AIM_TOLERANCE, "aim error {max_aim_err} too large");

        let last = rig_keyframe(&params, params.num_steps - 1);
        assert_eq!(camera_transform(&app)?.translation, last.camera);

        app.update();
        assert!(app.world().resource::<Playhead>().finished);
        Ok(())
    }

    #[test]
    fn regenerating_in_a_live_app_keeps_the_scene_stable() -> Result<()> {
        init_tracing();

        let mut app = build_generator_app(reference_config())?;
        app.update();
        let before = scene_object_count(&mut app);
        let first = report(&app)?;

        generate_scene(app.world_mut());
        let second = report(&app)?;

        assert_eq!(scene_object_count(&mut app), before);
        assert_eq!(app.world().resource::<MaterialLibrary>().len(), 3);
        assert_ne!(first.camera, second.camera, "rig should be rebuilt");
        assert_eq!(
            app.world().resource::<ActiveCamera>().0,
            second.camera,
            "active camera must follow the rebuilt rig"
        );
        Ok(())
    }

    #[test]
    fn generation_only_app_builds_without_playback() -> Result<()> {
        init_tracing();

        let mut cfg = reference_config();
        cfg.playback.enabled = false;
        cfg.corridor.num_steps = 10;

        let mut app = build_generator_app(cfg)?;
        app.update();
        app.update();

        assert_eq!(scene_object_count(&mut app), 32);
        // Nothing advances the playhead without playback systems.
        assert_eq!(app.world().resource::<Playhead>().frame, 0);
        Ok(())
    }
}
