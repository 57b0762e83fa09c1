use rocket_launch_sim::camera_engine::{
    Camera, CameraConfig, CameraMode, CameraSubject, PendingRevert,
};
use rocket_launch_sim::input_engine::{Command, HeldControls};
use rocket_launch_sim::physic_engine::{
    ConstantRandom, FlightEvent, PhysicEngine, PhysicEngineLaunch, PhysicEngineTestHelpers, Vec2,
};
mod helpers;
use helpers::{launched_engine, quiet_config, quiet_engine, run_ticks};

fn flying_subject(y: f32) -> CameraSubject {
    CameraSubject {
        rocket_pos: Vec2::new(400.0, y),
        rocket_stage: 1,
        launching: true,
        launched: false,
        exploded: false,
        falling_stages: [None, None],
    }
}

// ==================================
// 1. Lissage
// ==================================

#[test]
fn test_camera_converges_monotonically() {
    let config = CameraConfig::default();
    let mut camera = Camera::new(&config);
    camera.follow(CameraMode::FollowRocket);
    let subject = flying_subject(600.0);
    let mut rng = ConstantRandom::default();

    camera.update(1, &subject, &config, &mut rng);
    let mut distance = camera.pos.distance(camera.target);
    let mut zoom_gap = (camera.zoom - camera.target_zoom).abs();

    for tick in 2..300 {
        camera.update(tick, &subject, &config, &mut rng);
        let d = camera.pos.distance(camera.target);
        let z = (camera.zoom - camera.target_zoom).abs();
        assert!(d <= distance, "camera moved away from its target at tick {tick}");
        assert!(z <= zoom_gap);
        distance = d;
        zoom_gap = z;
    }
    assert!(distance < 1.0);
    // zoom cible : 1 - y / 2000
    assert!((camera.target_zoom - 0.7).abs() < 1e-5);
}

#[test]
fn test_shake_decays_then_stops() {
    let config = CameraConfig::default();
    let mut camera = Camera::new(&config);
    camera.start_shake(1.5);
    let subject = flying_subject(150.0);
    let mut rng = ConstantRandom::new(0.9);

    let mut ticks = 0;
    while camera.shaking && ticks < 1000 {
        let before = camera.shake_intensity;
        camera.update(ticks, &subject, &config, &mut rng);
        assert!(camera.shake_intensity < before);
        ticks += 1;
    }
    assert!(!camera.shaking);
    assert_eq!(camera.shake_intensity, 0.0);
}

// ==================================
// 2. Bascule sur les étages largués
// ==================================

#[test]
fn test_separation_schedules_a_camera_revert() {
    let mut engine = launched_engine();
    engine.force_altitude(410.0);

    let result = engine.update();
    assert!(result.has_event(|e| *e
        == FlightEvent::CameraSwitched {
            mode: CameraMode::FollowStage1
        }));
    // 3000 ms à 16 ms par tick
    assert_eq!(
        engine.camera().pending_revert(),
        Some(PendingRevert {
            due_tick: 1 + 188,
            stage: 1
        })
    );
}

#[test]
fn test_camera_reverts_on_the_scheduled_tick() {
    let mut config = quiet_config();
    config.camera.revert_delay_ms = 160;
    let mut engine = PhysicEngineLaunch::with_seed(&config, 42);
    engine.force_liftoff();
    engine.force_altitude(410.0);

    engine.update();
    assert_eq!(engine.camera().mode, CameraMode::FollowStage1);

    run_ticks(&mut engine, 9);
    assert_eq!(engine.tick_count(), 10);
    assert_eq!(engine.camera().mode, CameraMode::FollowStage1);

    let result = engine.update();
    assert!(result.has_event(|e| *e
        == FlightEvent::CameraSwitched {
            mode: CameraMode::FollowRocket
        }));
    assert_eq!(engine.camera().mode, CameraMode::FollowRocket);
    assert_eq!(engine.camera().pending_revert(), None);
}

#[test]
fn test_no_stage_switch_when_camera_is_fixed() {
    let mut engine = launched_engine();
    engine.apply_command(Command::ToggleCameraFollow);
    assert!(!engine.camera().follow_rocket);
    engine.force_altitude(410.0);

    let result = engine.update();
    assert!(!result.has_event(|e| matches!(e, FlightEvent::CameraSwitched { .. })));
    assert_eq!(engine.camera().mode, CameraMode::LaunchPad);
    assert_eq!(engine.camera().pending_revert(), None);
}

#[test]
fn test_auto_switch_prefers_the_upper_stage() {
    let mut engine = launched_engine();
    engine.force_altitude(410.0);
    engine.update();
    engine.apply_command(Command::SeparateStage);
    engine.apply_command(Command::View(CameraMode::FollowRocket));

    assert!(engine.apply_command(Command::AutoSwitchCamera).is_applied());
    assert_eq!(engine.camera().mode, CameraMode::FollowStage2);
}

// ==================================
// 3. Zoom
// ==================================

#[test]
fn test_held_zoom_applies_every_other_tick() {
    let mut engine = quiet_engine();
    engine.set_held_controls(HeldControls {
        zoom_in: true,
        zoom_out: false,
    });

    engine.update();
    assert_eq!(engine.camera().zoom, 1.0);
    engine.update();
    assert!(engine.camera().zoom > 1.0);
}

#[test]
fn test_zoom_commands_are_clamped() {
    let mut engine = quiet_engine();
    for _ in 0..100 {
        engine.apply_command(Command::ZoomIn);
    }
    assert_eq!(engine.camera().zoom, quiet_config().camera.zoom_max);
    for _ in 0..100 {
        engine.apply_command(Command::ZoomOut);
    }
    assert_eq!(engine.camera().zoom, quiet_config().camera.zoom_min);
}

#[test]
fn test_wide_view_snaps_immediately() {
    let mut engine = quiet_engine();
    assert!(engine
        .apply_command(Command::View(CameraMode::WideView))
        .is_applied());
    let camera = engine.camera();
    assert_eq!(camera.zoom, quiet_config().camera.wide_zoom);
    assert_eq!(camera.mode, CameraMode::WideView);
    assert!(!camera.follow_rocket);
}
