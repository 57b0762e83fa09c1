use itertools::Itertools;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera_engine::{Camera, CameraMode, CameraSubject};
use crate::input_engine::{Command, CommandOutcome, HeldControls, ManualControl};
use crate::physic_engine::{
    config::PhysicConfig,
    environment::Environment,
    explosion_system::ExplosionSystem,
    mission::{CountdownTick, Mission, MissionState},
    random::RandomSource,
    rocket::Rocket,
    scene::{DisplayOptions, Scene},
    smoke_system::SmokeSystem,
    stage::{attached_offset, RocketStage, SeparationReason, StageStatus},
    trajectory::TrajectoryHistory,
    types::{FlightEvent, UpdateResult},
    PhysicEngine, PhysicEngineView,
};

/// Moteur de la simulation de lancement : un seul état, muté une fois par tick.
///
/// Ordre d'un tick : zoom maintenu → compte à rebours → décor → fumée →
/// explosions → vol et étages → caméra → horloge jour/nuit, balise, vent.
#[derive(Debug)]
pub struct PhysicEngineLaunch<G: RandomSource = StdRng> {
    config: PhysicConfig,
    rng: G,
    tick: u64,

    rocket: Rocket,
    stages: [RocketStage; 3],
    mission: Mission,
    camera: Camera,
    environment: Environment,

    smoke: SmokeSystem,
    explosions: ExplosionSystem,
    trajectory: TrajectoryHistory,
    display: DisplayOptions,

    held: HeldControls,
    zoom_counter: u32,
    telemetry_counter: u32,

    // Événements du tick courant (+ ceux des commandes reçues depuis le dernier tick)
    events: Vec<FlightEvent>,
    reported_events: usize,
}

impl PhysicEngineLaunch<StdRng> {
    pub fn new(config: &PhysicConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Moteur déterministe (tests, replays)
    pub fn with_seed(config: &PhysicConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

fn initial_stages(rocket: &Rocket, config: &PhysicConfig) -> [RocketStage; 3] {
    [1, 2, 3].map(|number| RocketStage::new(number, rocket, config))
}

impl<G: RandomSource> PhysicEngineLaunch<G> {
    pub fn with_rng(config: &PhysicConfig, mut rng: G) -> Self {
        let rocket = Rocket::new(config);
        let stages = initial_stages(&rocket, config);
        let environment = Environment::new(config, &mut rng);

        Self {
            config: config.clone(),
            rng,
            tick: 0,
            stages,
            rocket,
            mission: Mission::new(config.countdown_start),
            camera: Camera::new(&config.camera),
            environment,
            smoke: SmokeSystem::new(),
            explosions: ExplosionSystem::new(),
            trajectory: TrajectoryHistory::new(config.trajectory_history_len),
            display: DisplayOptions::default(),
            held: HeldControls::default(),
            zoom_counter: 0,
            telemetry_counter: 0,
            events: Vec::with_capacity(16),
            reported_events: 0,
        }
    }

    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    /// Étage `number` (1..=3)
    pub fn stage(&self, number: u8) -> &RocketStage {
        &self.stages[(number.clamp(1, 3) - 1) as usize]
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn smoke(&self) -> &SmokeSystem {
        &self.smoke
    }

    pub fn explosions(&self) -> &ExplosionSystem {
        &self.explosions
    }

    pub fn trajectory(&self) -> &TrajectoryHistory {
        &self.trajectory
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    fn emit(&mut self, event: FlightEvent) {
        self.events.push(event);
    }

    // ---------------------------
    // Tick
    // ---------------------------

    fn step(&mut self) {
        self.tick += 1;
        let elapsed_ms = self.config.elapsed_ms(self.tick);

        self.update_held_zoom();
        self.update_countdown();

        self.environment.update_entities(elapsed_ms, &mut self.rng);
        self.update_smoke(elapsed_ms);
        self.explosions.update();
        self.update_flight(elapsed_ms);
        self.update_camera();

        if let Some(wind) = self.environment.advance_clock(&self.config, &mut self.rng) {
            debug!(
                "🌬️ Wind changed: speed {:.2}, direction {:+.0}",
                wind.speed, wind.direction
            );
            self.emit(FlightEvent::WindChanged {
                speed: wind.speed,
                direction: wind.direction,
            });
        }
    }

    fn update_held_zoom(&mut self) {
        self.zoom_counter += 1;
        if self.zoom_counter < 2 {
            return;
        }
        self.zoom_counter = 0;
        if self.held.zoom_in {
            self.camera.zoom_by(1.02, &self.config.camera);
        }
        if self.held.zoom_out {
            self.camera.zoom_by(0.98, &self.config.camera);
        }
    }

    fn update_countdown(&mut self) {
        match self.mission.tick_countdown(self.config.countdown_ticks_per_step) {
            CountdownTick::Step(remaining) => {
                info!("⏱️ T-{remaining}");
                if remaining <= 3 {
                    self.camera.start_shake(0.5 * (4 - remaining) as f32);
                }
                self.emit(FlightEvent::CountdownStep { remaining });
            }
            CountdownTick::Liftoff => self.liftoff(),
            CountdownTick::Idle | CountdownTick::Waiting => {}
        }
    }

    fn liftoff(&mut self) {
        self.rocket.launching = true;
        self.camera.follow_rocket = true;
        self.stages = initial_stages(&self.rocket, &self.config);
        info!("🚀 === LIFTOFF! ===");
        self.emit(FlightEvent::Liftoff);
    }

    fn update_smoke(&mut self, elapsed_ms: f32) {
        if self.rocket.is_powered() && !self.rocket.exploded {
            self.smoke
                .emit_exhaust(self.rocket.stage, self.rocket.pos, &mut self.rng);
        }
        self.smoke
            .emit_from_explosions(self.explosions.particles(), &mut self.rng);
        self.smoke
            .update(elapsed_ms, self.environment.wind.direction, &mut self.rng);
    }

    fn update_flight(&mut self, elapsed_ms: f32) {
        // Une fusée détruite fige tout le vol, étages largués compris
        if self.rocket.exploded {
            return;
        }

        self.update_separated_stages(elapsed_ms);

        if self.display.show_trajectory || self.rocket.launching {
            self.trajectory.record(self.rocket.pos);
        }

        if self.rocket.is_powered() {
            self.powered_tick(elapsed_ms);
        } else if self.rocket.is_coasting() {
            self.coasting_tick();
        }

        if !self.rocket.launching && !self.rocket.exploded && self.rocket.pos.y > self.config.ground_y
        {
            self.falling_tick();
        }

        self.mirror_attached_stages();
    }

    fn powered_tick(&mut self, elapsed_ms: f32) {
        let ground_y = self.config.ground_y;
        let thrust = self.config.stage(self.rocket.stage).thrust;

        self.rocket.apply_thrust(thrust, self.config.fuel_burn_rate);
        self.rocket
            .apply_wind(self.environment.wind.signed(), &self.config);
        self.rocket.advance(ground_y);

        self.telemetry_counter += 1;
        if self.telemetry_counter >= self.config.telemetry_interval_ticks {
            self.telemetry_counter = 0;
            debug!(
                "Stage: {} | Alt: {:.0} m | Fuel: {:.0} % | Vel: {:.1} m/s | Stage1Sep: {} | Stage2Sep: {}",
                self.rocket.stage,
                self.rocket.altitude,
                self.rocket.fuel,
                self.rocket.velocity,
                self.stages[0].separated,
                self.stages[1].separated,
            );
        }

        self.check_separation(false);
        self.rocket.update_flame(elapsed_ms, &self.config);

        if self.rng.chance(self.config.random_failure_chance) {
            warn!("💥 Random failure at altitude {:.0} m", self.rocket.altitude);
            self.explode_rocket();
        }

        if !self.rocket.exploded
            && self.rocket.altitude > self.config.target_altitude
            && self.rocket.velocity > self.config.target_velocity
            && self.mission.complete()
        {
            info!(
                "🎯 === MISSION SUCCESS === altitude {:.0} m, velocity {:.1} m/s",
                self.rocket.altitude, self.rocket.velocity
            );
            self.emit(FlightEvent::MissionComplete {
                altitude: self.rocket.altitude,
                velocity: self.rocket.velocity,
            });
        }

        if self.rocket.pos.y > self.config.ceiling_y {
            self.rocket.launched = true;
            self.rocket.launching = false;
            info!("=== MAXIMUM ALTITUDE REACHED ===");
            self.emit(FlightEvent::CeilingReached);
        }
    }

    fn coasting_tick(&mut self) {
        self.rocket.velocity -= self.config.coasting_gravity;
        self.rocket.advance(self.config.ground_y);
        self.check_separation(true);
    }

    fn falling_tick(&mut self) {
        let ground_y = self.config.ground_y;
        self.rocket.velocity -= self.config.falling_gravity;
        self.rocket.advance(ground_y);

        if self.rocket.pos.y > ground_y {
            return;
        }
        if self.rocket.velocity < self.config.crash_velocity {
            warn!(
                "💥 === ROCKET CRASHED === impact velocity {:.2}",
                self.rocket.velocity
            );
            self.explode_rocket();
        } else {
            self.rocket.pos.y = ground_y;
            self.rocket.velocity = 0.0;
            self.rocket.launching = false;
            self.rocket.launched = false;
            self.rocket.refresh_telemetry(ground_y);
            info!("🛬 === ROCKET LANDED ===");
            self.emit(FlightEvent::Landed);
        }
    }

    fn explode_rocket(&mut self) {
        self.rocket.exploded = true;
        let pos = self.rocket.pos;
        self.explosions
            .burst(pos, self.config.explosion_particles, &mut self.rng);
        self.emit(FlightEvent::RocketExploded { pos });
    }

    fn check_separation(&mut self, coasting: bool) {
        let number = self.rocket.stage;
        if self.stage(number).separated {
            return;
        }
        let reason = match &self.config.stage(number).separation {
            Some(rule) if coasting => rule.evaluate_coasting(self.rocket.altitude),
            Some(rule) => rule.evaluate(self.rocket.altitude, self.rocket.fuel, self.rocket.velocity),
            None => None,
        };
        if let Some(reason) = reason {
            self.separate_stage(number, reason);
        }
    }

    /// Largue l'étage `number` s'il est l'étage actif et n'a pas déjà été largué.
    /// Retourne `true` si la séparation a eu lieu.
    pub fn separate_stage(&mut self, number: u8, reason: SeparationReason) -> bool {
        // la charge utile n'a pas d'étage au-dessus d'elle
        if number != self.rocket.stage || number as usize >= self.stages.len() {
            return false;
        }
        let Some(rule) = self.config.stage(number).separation.clone() else {
            return false;
        };
        let index = (number - 1) as usize;
        if self.stages[index].separated {
            return false;
        }

        let tilt = self.rng.spread(self.config.separation_tilt);
        self.stages[index].detach(&self.rocket, self.tick, rule.momentum_share, tilt);

        let origin = self.rocket.pos;
        self.smoke
            .emit_separation_debris(number, origin, &mut self.rng);
        self.explosions
            .separation_sparks(number, origin, &mut self.rng);

        self.rocket.stage = number + 1;
        self.rocket.fuel = rule.next_stage_fuel;
        self.rocket.flame_size = self.config.stage(self.rocket.stage).flame_base;
        self.rocket.velocity *= rule.velocity_retention;

        let next = &mut self.stages[index + 1];
        next.active = true;
        next.mirror(&self.rocket, 0.0);

        info!(
            "🚀 === STAGE {number} SEPARATION === {reason} | alt {:.0} m | fuel now {:.0} % | vel {:.1} m/s",
            self.rocket.altitude, self.rocket.fuel, self.rocket.velocity
        );
        self.emit(FlightEvent::StageSeparated {
            stage: number,
            reason,
        });

        if number == 2 && self.mission.advance(MissionState::Orbit) {
            info!("🛰️ ORBIT ACHIEVED, payload active");
        }

        if self.camera.follow_rocket {
            if let Some(mode) = CameraMode::follow_stage(number) {
                self.camera.mode = mode;
                let due = self.tick + self.config.ms_to_ticks(self.config.camera.revert_delay_ms);
                self.camera.schedule_revert(due, number);
                info!("🎥 Camera: following stage {number} (falling)");
                self.emit(FlightEvent::CameraSwitched { mode });
            }
        }
        true
    }

    fn update_separated_stages(&mut self, elapsed_ms: f32) {
        let wind = self.environment.wind.signed();
        let ground_y = self.config.ground_y;

        for index in 0..2 {
            let Some(fall) = &self.config.stages[index].fall else {
                continue;
            };
            let stage = &mut self.stages[index];
            if stage.status() != StageStatus::Falling {
                continue;
            }

            let crashed = stage.fall_step(fall, wind, elapsed_ms, ground_y);
            self.smoke
                .emit_trail(stage.number, stage.pos, fall.trail_chance, &mut self.rng);

            if crashed {
                let (number, pos) = (stage.number, stage.pos);
                self.explosions
                    .burst(pos, self.config.explosion_particles, &mut self.rng);
                info!("💥 Stage {number} CRASHED at X={:.0} Y={:.0}", pos.x, pos.y);
                self.events.push(FlightEvent::StageCrashed { stage: number, pos });
            }
        }
    }

    fn mirror_attached_stages(&mut self) {
        for stage in self.stages.iter_mut().filter(|s| !s.separated) {
            if let Some(offset) = attached_offset(stage.number, self.rocket.stage, &self.config) {
                stage.mirror(&self.rocket, offset);
            }
        }
    }

    fn camera_subject(&self) -> CameraSubject {
        let falling = |stage: &RocketStage| (stage.status() == StageStatus::Falling).then_some(stage.pos);
        CameraSubject {
            rocket_pos: self.rocket.pos,
            rocket_stage: self.rocket.stage,
            launching: self.rocket.launching,
            launched: self.rocket.launched,
            exploded: self.rocket.exploded,
            falling_stages: [falling(&self.stages[0]), falling(&self.stages[1])],
        }
    }

    fn update_camera(&mut self) {
        let subject = self.camera_subject();
        if self
            .camera
            .update(self.tick, &subject, &self.config.camera, &mut self.rng)
            .is_some()
        {
            let mode = self.camera.mode;
            self.emit(FlightEvent::CameraSwitched { mode });
        }
    }

    // ---------------------------
    // Commandes
    // ---------------------------

    fn handle_command(&mut self, command: Command) -> CommandOutcome {
        use CommandOutcome::{Applied, Ignored};

        match command {
            Command::StartCountdown => {
                if !self.mission.start_countdown() {
                    return Ignored("countdown can only start from pre-launch");
                }
                info!("⏱️ Countdown started! T-{}", self.mission.countdown);
                self.emit(FlightEvent::CountdownStarted);
            }
            Command::Reset => self.reset(),
            Command::ToggleGrid => {
                self.display.show_grid = !self.display.show_grid;
                info!("Grid: {}", on_off(self.display.show_grid));
            }
            Command::ToggleTrajectory => {
                self.display.show_trajectory = !self.display.show_trajectory;
                info!("Trajectory: {}", on_off(self.display.show_trajectory));
            }
            Command::ToggleStats => {
                self.display.show_stats = !self.display.show_stats;
                info!("Stats display: {}", on_off(self.display.show_stats));
            }
            Command::TestSeparation => {
                info!("=== MANUAL SEPARATION TEST ===");
                self.log_status();
                return self.manual_separation();
            }
            Command::SeparateStage => return self.manual_separation(),
            Command::ToggleCameraFollow => {
                let following = self.camera.toggle_follow();
                info!(
                    "🎥 Camera: {}",
                    if following {
                        "following rocket"
                    } else {
                        "fixed on launch pad"
                    }
                );
            }
            Command::ToggleDayNight => {
                let cycle = self.environment.toggle_day_night();
                info!("Day/Night cycle: {}", on_off(cycle));
            }
            Command::ZoomIn => {
                let zoom = self.camera.zoom_by(1.1, &self.config.camera);
                info!("Zoom in: {zoom:.2}");
            }
            Command::ZoomOut => {
                let zoom = self.camera.zoom_by(0.9, &self.config.camera);
                info!("Zoom out: {zoom:.2}");
            }
            Command::View(mode) => return self.select_view(mode),
            Command::AddFuel => {
                if self.rocket.exploded {
                    return Ignored("rocket destroyed");
                }
                self.rocket.refuel(self.config.refuel_amount);
                info!("⛽ Fuel added: {:.0} %", self.rocket.fuel);
            }
            Command::AutoSwitchCamera => {
                let falling = [2u8, 1]
                    .into_iter()
                    .find(|&n| self.stage(n).status() == StageStatus::Falling);
                let Some(mode) = falling.and_then(CameraMode::follow_stage) else {
                    return Ignored("no falling stage to follow");
                };
                self.camera.mode = mode;
                info!("🎥 Auto-switched to {mode} camera");
                self.emit(FlightEvent::CameraSwitched { mode });
            }
            Command::PrintDebugInfo => self.log_status(),
            Command::PayloadZoomIn => {
                if self.rocket.stage != 3 {
                    return Ignored("payload zoom is only available once the payload is active");
                }
                let zoom = self.camera.zoom_target_by(1.2, &self.config.camera);
                info!("Manual zoom for payload: {zoom:.2}x");
            }
            Command::PayloadZoomOut => {
                let zoom = self.camera.zoom_target_by(0.8, &self.config.camera);
                info!("Manual zoom out: {zoom:.2}x");
            }
            Command::Manual(control) => return self.manual_control(control),
            Command::Quit => return CommandOutcome::Quit,
        }
        Applied
    }

    fn manual_separation(&mut self) -> CommandOutcome {
        if self.rocket.exploded {
            return CommandOutcome::Ignored("rocket destroyed");
        }
        if !self.rocket.launching {
            return CommandOutcome::Ignored("rocket not launching yet");
        }
        let number = self.rocket.stage;
        if self.separate_stage(number, SeparationReason::Manual) {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored("no stages left to separate")
        }
    }

    fn select_view(&mut self, mode: CameraMode) -> CommandOutcome {
        match mode {
            CameraMode::LaunchPad | CameraMode::WideView => {
                self.camera.snap_view(mode, &self.config.camera);
            }
            CameraMode::FollowRocket => self.camera.follow(mode),
            CameraMode::FollowStage1 | CameraMode::FollowStage2 => {
                let number = mode.followed_stage().unwrap_or(1);
                if !self.stage(number).separated {
                    return CommandOutcome::Ignored("stage not separated yet");
                }
                self.camera.follow(mode);
            }
        }
        info!("🎥 View: {mode}");
        CommandOutcome::Applied
    }

    fn manual_control(&mut self, control: ManualControl) -> CommandOutcome {
        if self.rocket.exploded {
            return CommandOutcome::Ignored("rocket destroyed");
        }
        if !self.rocket.is_powered() {
            return CommandOutcome::Ignored("manual control needs a powered rocket");
        }
        let step = self.config.manual_steer_step;
        let max_angle = self.config.manual_max_angle;
        match control {
            ManualControl::SteerLeft => self.rocket.steer(-step, max_angle),
            ManualControl::SteerRight => self.rocket.steer(step, max_angle),
            ManualControl::ThrottleUp => {
                self.rocket.velocity += self.config.manual_thrust_step;
                self.rocket.fuel =
                    (self.rocket.fuel - self.config.manual_thrust_fuel_cost).max(0.0);
            }
            ManualControl::ThrottleDown => {
                self.rocket.velocity -= self.config.manual_thrust_step;
            }
        }
        debug!(
            "🕹️ {control:?}: angle {:.1}°, velocity {:.2}, fuel {:.0} %",
            self.rocket.angle, self.rocket.velocity, self.rocket.fuel
        );
        CommandOutcome::Applied
    }

    fn log_status(&self) {
        let stages = self
            .stages
            .iter()
            .map(|s| format!("#{}:{:?}", s.number, s.status()))
            .join(", ");
        info!("=== ROCKET STATUS ===");
        info!("  Mission      : {}", self.mission.state());
        info!("  Current stage: {}", self.rocket.stage);
        info!(
            "  Position     : X={:.1} Y={:.1}",
            self.rocket.pos.x, self.rocket.pos.y
        );
        info!("  Altitude     : {:.1} m", self.rocket.altitude);
        info!("  Fuel         : {:.1} %", self.rocket.fuel);
        info!("  Velocity     : {:.2} m/s", self.rocket.velocity);
        info!("  Stages       : {stages}");
        info!("  Camera mode  : {}", self.camera.mode);
        info!("  Flame size   : {:.1}", self.rocket.flame_size);
        info!("=== END STATUS ===");
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

impl<G: RandomSource> PhysicEngine for PhysicEngineLaunch<G> {
    fn update(&mut self) -> UpdateResult<'_> {
        // Les événements déjà rapportés laissent la place à ceux de ce tick
        self.events.drain(..self.reported_events);
        self.step();
        self.reported_events = self.events.len();

        UpdateResult {
            tick: self.tick,
            events: &self.events,
        }
    }

    fn apply_command(&mut self, command: Command) -> CommandOutcome {
        let outcome = self.handle_command(command);
        if let CommandOutcome::Ignored(reason) = outcome {
            info!("⚠️ {command:?} ignored: {reason}");
        }
        outcome
    }

    fn set_held_controls(&mut self, held: HeldControls) {
        self.held = held;
    }

    fn reset(&mut self) {
        self.rocket = Rocket::new(&self.config);
        self.stages = initial_stages(&self.rocket, &self.config);
        self.mission = Mission::new(self.config.countdown_start);
        self.camera.reset(&self.config.camera);
        self.smoke.clear();
        self.explosions.clear();
        self.trajectory.clear();
        self.display.show_trajectory = false;
        self.zoom_counter = 0;
        self.telemetry_counter = 0;
        info!("🔄 === SIMULATION RESET ===");
    }

    fn reload_config(&mut self, config: &PhysicConfig) -> bool {
        if *config == self.config {
            return false;
        }
        if config.trajectory_history_len != self.config.trajectory_history_len {
            self.trajectory = TrajectoryHistory::new(config.trajectory_history_len);
        }
        self.config = config.clone();
        info!("Physic config reloaded");
        true
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn tick_count(&self) -> u64 {
        self.tick
    }
}

impl<G: RandomSource> PhysicEngineView for PhysicEngineLaunch<G> {
    fn scene(&self) -> Scene<'_> {
        Scene {
            tick: self.tick,
            config: &self.config,
            rocket: &self.rocket,
            stages: &self.stages,
            mission: &self.mission,
            camera: &self.camera,
            environment: &self.environment,
            smoke: self.smoke.particles(),
            explosions: self.explosions.particles(),
            trajectory: &self.trajectory,
            display: &self.display,
        }
    }
}

#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    /// Saute le compte à rebours et déclenche le décollage immédiatement
    fn force_liftoff(&mut self);
    fn force_fuel(&mut self, fuel: f32);
    /// Place la fusée à `altitude` au-dessus du sol
    fn force_altitude(&mut self, altitude: f32);
    fn force_velocity(&mut self, velocity: f32);
    fn force_launching(&mut self, launching: bool);
    fn force_wind(&mut self, speed: f32, direction: f32);
    fn camera_mut(&mut self) -> &mut Camera;
}

#[cfg(any(test, feature = "test_helpers"))]
impl<G: RandomSource> PhysicEngineTestHelpers for PhysicEngineLaunch<G> {
    fn force_liftoff(&mut self) {
        while self.mission.state() < MissionState::Launch {
            if self.mission.state() == MissionState::PreLaunch {
                self.mission.start_countdown();
            }
            if self.mission.tick_countdown(1) == CountdownTick::Liftoff {
                self.liftoff();
            }
        }
    }

    fn force_fuel(&mut self, fuel: f32) {
        self.rocket.fuel = fuel;
    }

    fn force_altitude(&mut self, altitude: f32) {
        self.rocket.pos.y = self.config.ground_y + altitude;
        self.rocket.refresh_telemetry(self.config.ground_y);
    }

    fn force_velocity(&mut self, velocity: f32) {
        self.rocket.velocity = velocity;
    }

    fn force_launching(&mut self, launching: bool) {
        self.rocket.launching = launching;
    }

    fn force_wind(&mut self, speed: f32, direction: f32) {
        self.environment.wind.speed = speed;
        self.environment.wind.direction = direction;
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}
