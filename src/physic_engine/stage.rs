use std::fmt;

use crate::physic_engine::config::{FallProfile, PhysicConfig, SeparationRule};
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::Vec2;

/// Raison d'une séparation d'étage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationReason {
    /// Altitude, carburant et vitesse dans la fenêtre nominale
    Nominal,
    /// Carburant sous le seuil d'urgence
    LowFuel,
    /// Altitude au-dessus du seuil forcé
    HighAltitude,
    /// Vol balistique sans carburant au-dessus de l'altitude de secours
    OutOfFuel,
    /// Déclenchée au clavier
    Manual,
}

impl fmt::Display for SeparationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeparationReason::Nominal => "nominal separation",
            SeparationReason::LowFuel => "emergency separation (low fuel)",
            SeparationReason::HighAltitude => "altitude separation",
            SeparationReason::OutOfFuel => "emergency separation (out of fuel)",
            SeparationReason::Manual => "manual separation",
        };
        f.write_str(label)
    }
}

impl SeparationRule {
    /// Évalue la règle pour un tick propulsé ; la première condition vérifiée l'emporte.
    pub fn evaluate(&self, altitude: f32, fuel: f32, velocity: f32) -> Option<SeparationReason> {
        if altitude > self.nominal_altitude
            && fuel < self.nominal_fuel
            && velocity > self.nominal_velocity
        {
            Some(SeparationReason::Nominal)
        } else if fuel < self.emergency_fuel {
            Some(SeparationReason::LowFuel)
        } else if altitude > self.emergency_altitude {
            Some(SeparationReason::HighAltitude)
        } else {
            None
        }
    }

    /// Évalue la règle pendant le vol balistique (carburant épuisé)
    pub fn evaluate_coasting(&self, altitude: f32) -> Option<SeparationReason> {
        (altitude > self.coasting_altitude).then_some(SeparationReason::OutOfFuel)
    }
}

/// Cycle de vie d'un étage : attaché → en chute → écrasé (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Attached,
    Falling,
    Crashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RocketStage {
    pub number: u8,
    pub pos: Vec2,
    pub velocity: f32,
    pub angle: f32,
    pub fuel: f32,
    pub active: bool,
    pub separated: bool,
    pub falling: bool,
    /// Tick de la séparation (0 tant que l'étage est attaché)
    pub separation_tick: u64,
    pub width: f32,
    pub height: f32,
}

impl RocketStage {
    pub fn new(number: u8, rocket: &Rocket, config: &PhysicConfig) -> Self {
        let profile = config.stage(number);
        Self {
            number,
            pos: rocket.pos + Vec2::new(0.0, profile.stack_offset),
            velocity: rocket.velocity,
            angle: rocket.angle,
            fuel: config.initial_fuel,
            active: number == 1,
            separated: false,
            falling: false,
            separation_tick: 0,
            width: profile.width,
            height: profile.height,
        }
    }

    pub fn status(&self) -> StageStatus {
        match (self.separated, self.falling) {
            (false, _) => StageStatus::Attached,
            (true, true) => StageStatus::Falling,
            (true, false) => StageStatus::Crashed,
        }
    }

    /// Un étage attaché suit la fusée avec un décalage vertical
    pub fn mirror(&mut self, rocket: &Rocket, offset: f32) {
        self.pos = rocket.pos + Vec2::new(0.0, offset);
        self.velocity = rocket.velocity;
        self.angle = rocket.angle;
    }

    /// Largage : l'étage garde une part de l'élan de la fusée et bascule de `tilt` degrés.
    pub fn detach(&mut self, rocket: &Rocket, tick: u64, momentum_share: f32, tilt: f32) {
        self.separated = true;
        self.falling = true;
        self.active = false;
        self.separation_tick = tick;
        self.pos = rocket.pos;
        self.velocity = rocket.velocity * momentum_share;
        self.angle = rocket.angle + tilt;
    }

    /// Un tick de chute libre. Retourne `true` si l'étage vient de toucher le sol.
    pub fn fall_step(
        &mut self,
        profile: &FallProfile,
        wind: f32,
        elapsed_ms: f32,
        ground_y: f32,
    ) -> bool {
        if self.status() != StageStatus::Falling {
            return false;
        }

        self.velocity -= profile.gravity;
        self.pos.y += self.velocity;

        let time = elapsed_ms * 0.001;
        self.pos.x += wind * profile.wind_drift
            + (time + profile.sway_phase).sin() * profile.sway_amplitude;
        self.angle += profile.spin_base
            + (elapsed_ms * profile.spin_frequency + profile.sway_phase).sin()
                * profile.spin_amplitude;

        if let Some(parachute) = &profile.parachute {
            if self.pos.y < parachute.deploy_below_y && self.velocity < parachute.min_velocity {
                self.velocity *= parachute.drag;
            }
        }

        if self.pos.y <= ground_y {
            self.falling = false;
            return true;
        }
        false
    }
}

/// Décalage vertical d'un étage attaché par rapport à la base de l'étage actif.
///
/// Retourne `None` si l'étage n'est plus porté par la fusée (étage inférieur
/// à l'étage actif). Le décalage est la somme des hauteurs des étages actifs en dessous.
pub fn attached_offset(number: u8, active_stage: u8, config: &PhysicConfig) -> Option<f32> {
    if number < active_stage {
        return None;
    }
    Some(
        (active_stage..number)
            .map(|below| config.stage(below).height)
            .sum(),
    )
}
