use rocket_launch_sim::camera_engine::{Camera, CameraMode};
use rocket_launch_sim::input_engine::{
    parse_script, Command, CommandOutcome, Key, KeyBindings, ManualControl, ScriptStep,
};
use rocket_launch_sim::physic_engine::{
    FlightEvent, MissionState, PhysicConfig, PhysicEngine, PhysicEngineLaunch,
    PhysicEngineTestHelpers, Rocket, RocketStage, SeparationReason,
};
mod helpers;
use helpers::{launched_engine, quiet_config, quiet_engine, run_ticks};

// ==================================
// 1. Actions refusées
// ==================================

#[test]
fn test_manual_separation_before_launch_is_ignored() {
    let mut engine = quiet_engine();
    let outcome = engine.apply_command(Command::SeparateStage);
    assert!(matches!(outcome, CommandOutcome::Ignored(_)));
    assert_eq!(engine.rocket().stage, 1);
    assert!(!engine.stage(1).separated);
}

#[test]
fn test_stage_view_before_separation_is_ignored() {
    let mut engine = launched_engine();
    for mode in [CameraMode::FollowStage1, CameraMode::FollowStage2] {
        let outcome = engine.apply_command(Command::View(mode));
        assert!(matches!(outcome, CommandOutcome::Ignored(_)));
    }
    assert_eq!(engine.camera().mode, CameraMode::LaunchPad);
}

#[test]
fn test_auto_switch_without_falling_stage_is_ignored() {
    let mut engine = launched_engine();
    assert_eq!(
        engine.apply_command(Command::AutoSwitchCamera),
        CommandOutcome::Ignored("no falling stage to follow")
    );
}

#[test]
fn test_payload_zoom_requires_the_payload() {
    let mut engine = launched_engine();
    assert!(matches!(
        engine.apply_command(Command::PayloadZoomIn),
        CommandOutcome::Ignored(_)
    ));

    engine.update();
    engine.separate_stage(1, SeparationReason::Manual);
    engine.separate_stage(2, SeparationReason::Manual);
    let before = engine.camera().target_zoom;
    assert!(engine.apply_command(Command::PayloadZoomIn).is_applied());
    assert!((engine.camera().target_zoom - before * 1.2).abs() < 1e-5);
}

#[test]
fn test_destroyed_rocket_ignores_flight_commands() {
    let config = PhysicConfig {
        random_failure_chance: 1.0,
        ..quiet_config()
    };
    let mut engine = PhysicEngineLaunch::with_seed(&config, 42);
    engine.force_liftoff();
    engine.update();
    assert!(engine.rocket().exploded);
    // l'explosion ne coupe pas le lancement : seules les gardes protègent l'état
    assert!(engine.rocket().launching);

    let before = engine.rocket().clone();
    let explosions = engine.explosions().len();
    let mode = engine.camera().mode;

    for command in [
        Command::SeparateStage,
        Command::TestSeparation,
        Command::AddFuel,
        Command::Manual(ManualControl::ThrottleUp),
        Command::Manual(ManualControl::SteerLeft),
    ] {
        assert_eq!(
            engine.apply_command(command),
            CommandOutcome::Ignored("rocket destroyed")
        );
    }
    assert_eq!(engine.rocket(), &before);
    assert!(!engine.stage(1).separated);
    assert_eq!(engine.explosions().len(), explosions);
    assert_eq!(engine.camera().mode, mode);
}

#[test]
fn test_payload_never_separates_even_with_a_rule() {
    let mut config = quiet_config();
    config.stages[2].separation = config.stages[1].separation.clone();
    let mut engine = PhysicEngineLaunch::with_seed(&config, 42);
    engine.force_liftoff();
    engine.update();
    assert!(engine.separate_stage(1, SeparationReason::Manual));
    assert!(engine.separate_stage(2, SeparationReason::Manual));

    assert_eq!(
        engine.apply_command(Command::SeparateStage),
        CommandOutcome::Ignored("no stages left to separate")
    );
    assert!(!engine.separate_stage(3, SeparationReason::Manual));

    // la règle automatique ne s'applique pas non plus
    engine.force_fuel(5.0);
    run_ticks(&mut engine, 50);
    assert_eq!(engine.rocket().stage, 3);
    assert!(!engine.stage(3).separated);
}

#[test]
fn test_manual_control_requires_thrust() {
    let mut engine = quiet_engine();
    for control in [
        ManualControl::SteerLeft,
        ManualControl::SteerRight,
        ManualControl::ThrottleUp,
        ManualControl::ThrottleDown,
    ] {
        assert!(matches!(
            engine.apply_command(Command::Manual(control)),
            CommandOutcome::Ignored(_)
        ));
    }
}

#[test]
fn test_countdown_cannot_restart() {
    let mut engine = quiet_engine();
    assert!(engine.apply_command(Command::StartCountdown).is_applied());
    assert!(matches!(
        engine.apply_command(Command::StartCountdown),
        CommandOutcome::Ignored(_)
    ));
    assert_eq!(engine.mission().state(), MissionState::Countdown);
}

#[test]
fn test_no_stage_left_to_separate() {
    let mut engine = launched_engine();
    assert!(engine.apply_command(Command::SeparateStage).is_applied());
    assert!(engine.apply_command(Command::SeparateStage).is_applied());
    assert_eq!(
        engine.apply_command(Command::SeparateStage),
        CommandOutcome::Ignored("no stages left to separate")
    );
    assert_eq!(engine.rocket().stage, 3);
}

// ==================================
// 2. Actions appliquées
// ==================================

#[test]
fn test_command_events_are_reported_on_next_update() {
    let mut engine = launched_engine();
    engine.update();
    assert!(engine.apply_command(Command::SeparateStage).is_applied());

    let result = engine.update();
    assert!(result.has_event(|e| *e
        == FlightEvent::StageSeparated {
            stage: 1,
            reason: SeparationReason::Manual
        }));

    // Rapporté une seule fois
    let result = engine.update();
    assert!(!result.has_event(|e| matches!(e, FlightEvent::StageSeparated { .. })));
}

#[test]
fn test_manual_controls_in_powered_flight() {
    let mut engine = launched_engine();
    let config = quiet_config();

    engine.apply_command(Command::Manual(ManualControl::SteerLeft));
    assert!((engine.rocket().angle + config.manual_steer_step).abs() < 1e-5);

    let (velocity, fuel) = (engine.rocket().velocity, engine.rocket().fuel);
    engine.apply_command(Command::Manual(ManualControl::ThrottleUp));
    assert!((engine.rocket().velocity - velocity - config.manual_thrust_step).abs() < 1e-5);
    assert!((fuel - engine.rocket().fuel - config.manual_thrust_fuel_cost).abs() < 1e-5);

    for _ in 0..1000 {
        engine.apply_command(Command::Manual(ManualControl::SteerRight));
    }
    assert_eq!(engine.rocket().angle, config.manual_max_angle);
}

#[test]
fn test_add_fuel_is_capped() {
    let mut engine = launched_engine();
    engine.force_fuel(50.0);
    engine.apply_command(Command::AddFuel);
    assert_eq!(engine.rocket().fuel, 70.0);

    engine.force_fuel(95.0);
    engine.apply_command(Command::AddFuel);
    assert_eq!(engine.rocket().fuel, 100.0);
}

#[test]
fn test_display_toggles() {
    let mut engine = quiet_engine();
    let initial = *engine.display();

    engine.apply_command(Command::ToggleGrid);
    engine.apply_command(Command::ToggleTrajectory);
    engine.apply_command(Command::ToggleStats);
    let display = engine.display();
    assert_eq!(display.show_grid, !initial.show_grid);
    assert_eq!(display.show_trajectory, !initial.show_trajectory);
    assert_eq!(display.show_stats, !initial.show_stats);

    let cycle = engine.environment().day_night_cycle;
    engine.apply_command(Command::ToggleDayNight);
    assert_eq!(engine.environment().day_night_cycle, !cycle);
}

#[test]
fn test_quit_is_reported_to_the_caller() {
    let mut engine = quiet_engine();
    assert_eq!(engine.apply_command(Command::Quit), CommandOutcome::Quit);
    assert!(engine.apply_command(Command::PrintDebugInfo).is_applied());
    assert!(engine.apply_command(Command::TestSeparation) != CommandOutcome::Quit);
}

// ==================================
// 3. Reset
// ==================================

#[test]
fn test_reset_mid_flight_restores_initial_state() {
    let config = quiet_config();
    let mut engine = launched_engine();
    engine.apply_command(Command::ToggleTrajectory);
    engine.force_altitude(410.0);
    run_ticks(&mut engine, 100);
    assert!(engine.rocket().stage >= 2);

    assert!(engine.apply_command(Command::Reset).is_applied());

    assert_eq!(engine.rocket(), &Rocket::new(&config));
    for number in 1..=3 {
        assert_eq!(
            engine.stage(number),
            &RocketStage::new(number, engine.rocket(), &config)
        );
    }
    assert_eq!(engine.mission().state(), MissionState::PreLaunch);
    assert_eq!(engine.mission().countdown, config.countdown_start);
    assert_eq!(engine.camera(), &Camera::new(&config.camera));
    assert!(engine.smoke().is_empty());
    assert!(engine.explosions().is_empty());
    assert!(engine.trajectory().is_empty());
    assert!(!engine.display().show_trajectory);
    // L'horloge de simulation continue
    assert_eq!(engine.tick_count(), 100);
}

#[test]
fn test_launch_again_after_reset() {
    let mut engine = launched_engine();
    run_ticks(&mut engine, 50);
    engine.apply_command(Command::Reset);

    assert!(engine.apply_command(Command::StartCountdown).is_applied());
    let events = run_ticks(&mut engine, 10);
    assert!(events.contains(&FlightEvent::Liftoff));
    assert!(engine.rocket().launching);
}

// ==================================
// 4. Clavier et scripts
// ==================================

#[test]
fn test_default_bindings() {
    let bindings = KeyBindings::default();
    assert_eq!(
        bindings.command_for(Key::Char('t')),
        Some(Command::ToggleTrajectory)
    );
    assert_eq!(
        bindings.command_for(Key::Char('T')),
        Some(Command::TestSeparation)
    );
    assert_eq!(
        bindings.command_for(Key::Char('3')),
        Some(Command::View(CameraMode::FollowRocket))
    );
    assert_eq!(bindings.command_for(Key::Escape), Some(Command::Quit));
    assert_eq!(bindings.command_for(Key::Char('q')), None);
}

#[test]
fn test_parse_launch_script() {
    let steps = parse_script("space wait:600 p hold:+ wait:4 release:+ esc").unwrap();
    assert_eq!(
        steps,
        vec![
            ScriptStep::Tap(Key::Space),
            ScriptStep::Wait(600),
            ScriptStep::Tap(Key::Char('p')),
            ScriptStep::Hold(Key::Char('+')),
            ScriptStep::Wait(4),
            ScriptStep::Release(Key::Char('+')),
            ScriptStep::Tap(Key::Escape),
        ]
    );
    assert!(parse_script("wait:soon").is_err());
    assert!(parse_script("launch").is_err());
}
