use rocket_launch_sim::input_engine::Command;
use rocket_launch_sim::physic_engine::{
    FlightEvent, MissionState, PhysicConfig, PhysicEngine, PhysicEngineTestHelpers,
    SeparationReason, StageStatus,
};
mod helpers;
use helpers::{launched_engine, quiet_config, quiet_engine, run_ticks, run_until};
use rocket_launch_sim::PhysicEngineLaunch;

// ==================================
// 1. Compte à rebours et décollage
// ==================================

#[test]
fn test_countdown_lifts_off_after_ten_steps() {
    let mut engine = quiet_engine();
    engine.apply_command(Command::StartCountdown);

    let events = run_ticks(&mut engine, 9);
    let steps: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            FlightEvent::CountdownStep { remaining } => Some(*remaining),
            _ => None,
        })
        .collect();
    assert_eq!(steps, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    assert!(events.contains(&FlightEvent::CountdownStarted));
    assert!(!engine.rocket().launching);

    // Un pas par tick : le 10e tick déclenche le décollage
    let result = engine.update();
    assert_eq!(result.tick, 10);
    assert!(result.has_event(|e| *e == FlightEvent::Liftoff));
    assert!(engine.rocket().launching);
    assert_eq!(engine.mission().state(), MissionState::Launch);
}

#[test]
fn test_last_countdown_steps_shake_the_camera() {
    let mut engine = quiet_engine();
    engine.apply_command(Command::StartCountdown);

    // T-3 tombe au tick 7
    run_ticks(&mut engine, 6);
    assert!(!engine.camera().shaking);
    engine.update();
    assert!(engine.camera().shaking);
}

#[test]
fn test_countdown_cadence_is_configurable() {
    let config = PhysicConfig {
        countdown_ticks_per_step: 60,
        ..quiet_config()
    };
    let mut engine = PhysicEngineLaunch::with_seed(&config, 42);
    engine.apply_command(Command::StartCountdown);

    assert!(run_until(&mut engine, 599, |e| *e == FlightEvent::Liftoff).is_none());
    assert_eq!(engine.mission().countdown, 1);
    let result = engine.update();
    assert_eq!(result.tick, 600);
    assert!(result.has_event(|e| *e == FlightEvent::Liftoff));
}

// ==================================
// 2. Carburant
// ==================================

#[test]
fn test_fuel_burns_at_a_fixed_rate() {
    let mut engine = launched_engine();
    let burn_rate = quiet_config().fuel_burn_rate;

    for _ in 0..50 {
        let before = engine.rocket().fuel;
        engine.update();
        let after = engine.rocket().fuel;
        assert!(
            (before - after - burn_rate).abs() < 1e-4,
            "fuel went from {before} to {after}"
        );
    }
    assert_eq!(engine.rocket().stage, 1);
}

#[test]
fn test_velocity_grows_with_stage_thrust() {
    let mut engine = launched_engine();
    run_ticks(&mut engine, 10);

    // v = 0.12 n, altitude = 0.06 n (n + 1)
    let rocket = engine.rocket();
    assert!((rocket.velocity - 1.2).abs() < 1e-4);
    assert!((rocket.altitude - 6.6).abs() < 1e-3);
}

// ==================================
// 3. Séparations automatiques
// ==================================

#[test]
fn test_stage_one_separates_on_high_altitude() {
    let mut engine = launched_engine();

    run_ticks(&mut engine, 81);
    assert!(!engine.stage(1).separated);

    let event = run_until(&mut engine, 1, |e| {
        matches!(e, FlightEvent::StageSeparated { .. })
    });
    assert_eq!(
        event,
        Some(FlightEvent::StageSeparated {
            stage: 1,
            reason: SeparationReason::HighAltitude
        })
    );
    assert_eq!(engine.rocket().stage, 2);
    assert_eq!(engine.rocket().fuel, 100.0);
    assert_eq!(engine.stage(1).status(), StageStatus::Falling);
    assert!(engine.stage(2).active);
}

#[test]
fn test_low_fuel_triggers_emergency_separation() {
    let mut engine = launched_engine();
    engine.force_fuel(5.0);

    let result = engine.update();
    assert!(result.has_event(|e| *e
        == FlightEvent::StageSeparated {
            stage: 1,
            reason: SeparationReason::LowFuel
        }));
    assert_eq!(engine.rocket().stage, 2);
}

#[test]
fn test_forced_altitude_triggers_altitude_separation() {
    let mut engine = launched_engine();
    engine.force_altitude(410.0);

    let result = engine.update();
    assert!(result.has_event(|e| *e
        == FlightEvent::StageSeparated {
            stage: 1,
            reason: SeparationReason::HighAltitude
        }));
    // 5 % de vitesse perdus à la séparation
    assert!((engine.rocket().velocity - 0.12 * 0.95).abs() < 1e-4);
}

#[test]
fn test_coasting_rocket_separates_when_out_of_fuel() {
    let mut engine = launched_engine();
    engine.force_fuel(0.0);
    engine.force_altitude(250.0);
    engine.force_velocity(3.0);

    let result = engine.update();
    assert!(result.has_event(|e| *e
        == FlightEvent::StageSeparated {
            stage: 1,
            reason: SeparationReason::OutOfFuel
        }));
}

#[test]
fn test_separation_is_idempotent() {
    let mut engine = launched_engine();
    engine.update();

    assert!(engine.separate_stage(1, SeparationReason::Manual));
    assert!(!engine.separate_stage(1, SeparationReason::Manual));
    // L'étage 3 n'a pas de règle de séparation
    assert!(engine.separate_stage(2, SeparationReason::Manual));
    assert!(!engine.separate_stage(3, SeparationReason::Manual));
    assert_eq!(engine.rocket().stage, 3);
    assert_eq!(engine.rocket().fuel, 50.0);
}

#[test]
fn test_second_separation_reaches_orbit() {
    let mut engine = launched_engine();
    engine.update();
    engine.separate_stage(1, SeparationReason::Manual);
    assert_eq!(engine.mission().state(), MissionState::Launch);

    engine.separate_stage(2, SeparationReason::Manual);
    assert_eq!(engine.mission().state(), MissionState::Orbit);
}

// ==================================
// 4. Chute des étages largués
// ==================================

#[test]
fn test_falling_stage_accelerates_downward() {
    let mut engine = launched_engine();
    engine.force_altitude(410.0);
    engine.update();
    assert!(engine.stage(1).separated);

    let gravity = quiet_config().stages[0]
        .fall
        .as_ref()
        .map(|f| f.gravity)
        .unwrap_or_default();

    // Au-dessus de y=400 le parachute reste fermé
    for _ in 0..50 {
        let before = engine.stage(1).velocity;
        engine.update();
        let stage = engine.stage(1);
        assert!(stage.pos.y > 400.0);
        assert!(stage.velocity < before);
        assert!((before - stage.velocity - gravity).abs() < 1e-4);
    }
}

#[test]
fn test_falling_stage_eventually_crashes() {
    let mut engine = launched_engine();
    engine.force_altitude(410.0);
    engine.update();

    let crash = run_until(&mut engine, 2000, |e| {
        matches!(e, FlightEvent::StageCrashed { stage: 1, .. })
    });
    assert!(crash.is_some(), "stage 1 never hit the ground");
    assert_eq!(engine.stage(1).status(), StageStatus::Crashed);
    assert!(!engine.explosions().is_empty());
    // L'écrasement d'un étage ne détruit pas la fusée
    assert!(!engine.rocket().exploded);
}

// ==================================
// 5. Retombée de la fusée
// ==================================

#[test]
fn test_hard_impact_explodes_and_freezes_the_rocket() {
    let mut engine = launched_engine();
    engine.force_launching(false);
    engine.force_altitude(1.0);
    engine.force_velocity(-3.0);

    let result = engine.update();
    assert!(result.has_event(|e| matches!(e, FlightEvent::RocketExploded { .. })));
    assert!(engine.rocket().exploded);

    let frozen = engine.rocket().pos;
    run_ticks(&mut engine, 30);
    assert_eq!(engine.rocket().pos, frozen);
}

#[test]
fn test_soft_touchdown_lands() {
    let mut engine = launched_engine();
    engine.force_launching(false);
    engine.force_altitude(1.0);
    engine.force_velocity(-1.0);

    let result = engine.update();
    assert!(result.has_event(|e| *e == FlightEvent::Landed));
    let rocket = engine.rocket();
    assert!(!rocket.exploded);
    assert_eq!(rocket.velocity, 0.0);
    assert_eq!(rocket.altitude, 0.0);
}

#[test]
fn test_certain_failure_destroys_the_rocket() {
    let config = rocket_launch_sim::PhysicConfig {
        random_failure_chance: 1.0,
        ..quiet_config()
    };
    let mut engine = PhysicEngineLaunch::with_seed(&config, 3);
    engine.force_liftoff();

    let result = engine.update();
    assert!(result.has_event(|e| matches!(e, FlightEvent::RocketExploded { .. })));
    assert_eq!(engine.explosions().len(), config.explosion_particles);
}

// ==================================
// 6. Vol complet
// ==================================

#[test]
fn test_full_flight_invariants() {
    let mut engine = launched_engine();

    let mut events = Vec::new();
    let mut last_stage = engine.rocket().stage;
    let mut last_mission = engine.mission().state();

    for _ in 0..3000 {
        let result = engine.update();
        events.extend_from_slice(result.events);

        let rocket = engine.rocket();
        assert!(rocket.fuel >= 0.0 && rocket.fuel <= 100.0);
        assert!(rocket.stage >= last_stage, "stage index went backwards");
        assert!(
            engine.mission().state() >= last_mission,
            "mission state regressed"
        );
        assert!(engine.smoke().particles().iter().all(|p| p.is_alive()));
        assert!(engine.explosions().particles().iter().all(|p| p.is_alive()));

        last_stage = rocket.stage;
        last_mission = engine.mission().state();
        if rocket.exploded {
            break;
        }
    }

    let separations: Vec<u8> = events
        .iter()
        .filter_map(|e| match e {
            FlightEvent::StageSeparated { stage, .. } => Some(*stage),
            _ => None,
        })
        .collect();
    assert_eq!(separations, vec![1, 2]);
    assert!(events
        .iter()
        .any(|e| matches!(e, FlightEvent::MissionComplete { .. })));
    assert!(events.contains(&FlightEvent::CeilingReached));
    assert!(events
        .iter()
        .any(|e| matches!(e, FlightEvent::RocketExploded { .. })));
    assert_eq!(engine.mission().state(), MissionState::MissionComplete);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, FlightEvent::MissionComplete { .. }))
            .count(),
        1
    );
}

#[test]
fn test_trajectory_history_is_bounded() {
    let mut engine = launched_engine();
    engine.apply_command(Command::ToggleTrajectory);
    run_ticks(&mut engine, 500);
    assert_eq!(
        engine.trajectory().len(),
        quiet_config().trajectory_history_len
    );
}
