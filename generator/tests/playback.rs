use bevy_app::{App, Update};
use bevy_math::{Quat, Vec3};
use bevy_transform::components::Transform;
use corridor::{rig_keyframe, CorridorParams};
use generator::animation::{Playhead, PositionTrack};
use generator::constraint::{solve_track_to, TrackTo};
use generator::{build_generator_app, Config, GenerationReport, PlaybackConfig};

fn params() -> CorridorParams {
    CorridorParams { num_steps: 12, frames_per_step: 4, ..CorridorParams::default() }
}

fn app() -> App {
    let cfg = Config {
        corridor: params(),
        playback: PlaybackConfig { enabled: true, log_every_frames: 0 },
    };
    build_generator_app(cfg).expect("valid config")
}

/// Runs updates until `frame` has been sampled.
fn play_to(app: &mut App, frame: u32) {
    for _ in 0..=frame {
        app.update();
    }
}

fn rig_pose(app: &App) -> (Transform, Vec3) {
    let report = *app.world().resource::<GenerationReport>();
    let cam = *app.world().get::<Transform>(report.camera).expect("camera transform");
    let target = app.world().get::<Transform>(report.target).expect("target transform").translation;
    (cam, target)
}

#[test]
fn keyed_frames_reproduce_keyed_positions() {
    let p = params();
    for step in [0, 3, 11] {
        let mut app = app();
        let key = rig_keyframe(&p, step);
        play_to(&mut app, key.frame);
        let (cam, target) = rig_pose(&app);
        assert_eq!(cam.translation, key.camera, "camera at step {step}");
        assert_eq!(target, key.target, "target at step {step}");
    }
}

#[test]
fn camera_faces_target_during_playback() {
    let mut app = app();
    for frame in 0..=48 {
        app.update();
        let (cam, target) = rig_pose(&app);
        let aim = (target - cam.translation).normalize();
        let forward = cam.rotation * Vec3::NEG_Z;
        assert!((forward - aim).length() < 1e-4, "frame {frame}: {forward:?} vs {aim:?}");
    }
}

#[test]
fn between_keys_positions_interpolate() {
    let p = params();
    let mut app = app();
    play_to(&mut app, 2);
    let (cam, _) = rig_pose(&app);
    let a = rig_keyframe(&p, 0).camera;
    let b = rig_keyframe(&p, 1).camera;
    assert!((cam.translation - a.lerp(b, 0.5)).length() < 1e-5);
}

#[test]
fn playhead_stops_at_timeline_end() {
    let mut app = app();
    play_to(&mut app, 48 + 3);
    let playhead = *app.world().resource::<Playhead>();
    assert_eq!(playhead.frame, 48);
    assert!(playhead.finished);
}

#[test]
fn track_sampling_holds_ends_and_replaces_keys() {
    let mut track = PositionTrack::default();
    assert!(track.sample(0).is_none());

    track.insert(10, Vec3::X);
    track.insert(0, Vec3::ZERO);
    track.insert(10, Vec3::Y);
    assert_eq!(track.len(), 2);
    assert_eq!(track.keys()[0].0, 0);

    assert_eq!(track.sample(0), Some(Vec3::ZERO));
    assert_eq!(track.sample(25), Some(Vec3::Y));
    assert_eq!(track.sample(5), Some(Vec3::new(0.0, 0.5, 0.0)));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let cfg = Config {
        corridor: CorridorParams { advance_z: -1.0, ..params() },
        ..Config::default()
    };
    assert!(build_generator_app(cfg).is_err());
}

fn solver_app() -> App {
    let mut app = App::new();
    app.add_systems(Update, solve_track_to);
    app
}

#[test]
fn degenerate_aim_keeps_previous_rotation() {
    let eye = Vec3::new(3.0, 8.0, 2.2);
    let earlier = Quat::from_rotation_z(0.7);

    for target_pos in [eye, eye + Vec3::Z * 10.0] {
        let mut app = solver_app();
        let target = app.world_mut().spawn(Transform::from_translation(target_pos)).id();
        let camera = app
            .world_mut()
            .spawn((Transform::from_translation(eye).with_rotation(earlier), TrackTo::new(target)))
            .id();

        app.update();

        let cam = app.world().get::<Transform>(camera).expect("camera transform");
        assert_eq!(cam.rotation, earlier, "target at {target_pos:?} changed the rotation");
    }
}

#[test]
fn missing_target_leaves_camera_untouched() {
    let mut app = solver_app();
    let earlier = Quat::from_rotation_z(-0.3);
    let target = app.world_mut().spawn(Transform::from_xyz(0.0, 10.0, 2.2)).id();
    let camera = app
        .world_mut()
        .spawn((Transform::from_xyz(0.0, 0.0, 2.2).with_rotation(earlier), TrackTo::new(target)))
        .id();
    app.world_mut().despawn(target);

    app.update();

    let cam = app.world().get::<Transform>(camera).expect("camera transform");
    assert_eq!(cam.rotation, earlier);
}

#[test]
fn solver_aims_once_target_is_valid() {
    let mut app = solver_app();
    let target = app.world_mut().spawn(Transform::from_xyz(0.0, 10.0, 2.2)).id();
    let camera = app
        .world_mut()
        .spawn((Transform::from_xyz(0.0, 0.0, 2.2), TrackTo::new(target)))
        .id();

    app.update();

    let cam = app.world().get::<Transform>(camera).expect("camera transform");
    assert!((cam.rotation * Vec3::NEG_Z - Vec3::Y).length() < 1e-5);
}
