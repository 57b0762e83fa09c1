use serde::{Deserialize, Serialize};

use crate::camera_engine::CameraConfig;

/// Règle de séparation d'un étage (une ligne de la table de séparation).
///
/// Les trois conditions sont évaluées dans l'ordre : nominale, carburant bas,
/// altitude élevée. La première qui matche donne la raison de la séparation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeparationRule {
    /// Condition nominale : altitude > `nominal_altitude`, carburant < `nominal_fuel`
    /// et vitesse > `nominal_velocity`
    pub nominal_altitude: f32,
    pub nominal_fuel: f32,
    pub nominal_velocity: f32,
    /// Séparation d'urgence quand le carburant passe sous ce seuil (%)
    pub emergency_fuel: f32,
    /// Séparation forcée au-dessus de cette altitude
    pub emergency_altitude: f32,
    /// Séparation d'urgence en vol balistique (plus de carburant)
    pub coasting_altitude: f32,
    /// Part de la vitesse de la fusée transmise à l'étage largué
    pub momentum_share: f32,
    /// Facteur appliqué à la vitesse de la fusée qui continue
    pub velocity_retention: f32,
    /// Carburant de l'étage suivant (%)
    pub next_stage_fuel: f32,
}

/// Parachute d'un étage largué : freine la chute sous une certaine hauteur.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ParachuteProfile {
    pub deploy_below_y: f32,
    pub min_velocity: f32,
    pub drag: f32,
}

/// Chute libre d'un étage largué (gravité, dérive, rotation, traînée de fumée).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FallProfile {
    pub gravity: f32,
    /// Multiplicateur du vent pour la dérive horizontale
    pub wind_drift: f32,
    /// Balancement horizontal : `sway_amplitude * sin(t_s + sway_phase)`
    pub sway_amplitude: f32,
    pub sway_phase: f32,
    /// Rotation par tick : `spin_base + spin_amplitude * sin(t_ms * spin_frequency + sway_phase)`
    pub spin_base: f32,
    pub spin_amplitude: f32,
    pub spin_frequency: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parachute: Option<ParachuteProfile>,
    /// Probabilité d'émettre une particule de fumée par tick
    pub trail_chance: f32,
}

/// Profil d'un étage : poussée, géométrie, flamme, et comportement après largage.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StageProfile {
    pub thrust: f32,
    pub width: f32,
    pub height: f32,
    /// Décalage vertical initial par rapport à l'origine de la fusée
    pub stack_offset: f32,
    pub flame_base: f32,
    pub flame_amplitude: f32,
    pub flame_frequency: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separation: Option<SeparationRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall: Option<FallProfile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicConfig {
    /// Durée d'un tick de simulation (ms). Toutes les constantes sont exprimées par tick.
    pub tick_ms: u64,
    pub screen_width: f32,
    pub screen_height: f32,

    pub ground_y: f32,
    pub launch_pad_x: f32,

    pub initial_fuel: f32,
    pub fuel_burn_rate: f32,
    pub countdown_start: u32,
    /// Nombre de ticks entre deux pas du compte à rebours
    pub countdown_ticks_per_step: u32,

    pub target_altitude: f32,
    pub target_velocity: f32,
    pub ceiling_y: f32,

    pub coasting_gravity: f32,
    pub falling_gravity: f32,
    pub crash_velocity: f32,

    pub max_wind_angle: f32,
    pub wind_altitude_falloff: f32,
    pub initial_wind_speed: f32,
    pub wind_change_chance: f32,
    pub wind_min_speed: f32,
    pub wind_max_speed: f32,

    pub manual_steer_step: f32,
    pub manual_max_angle: f32,
    pub manual_thrust_step: f32,
    pub manual_thrust_fuel_cost: f32,
    pub refuel_amount: f32,

    /// Probabilité d'explosion spontanée par tick propulsé (0 = désactivé)
    pub random_failure_chance: f32,
    /// Inclinaison aléatoire max (°) donnée à un étage largué
    pub separation_tilt: f32,
    pub explosion_particles: usize,

    pub trajectory_history_len: usize,
    pub prediction_steps: usize,
    pub prediction_idle_velocity: f32,
    pub prediction_floor_y: f32,
    pub prediction_ceiling_y: f32,

    /// Télémétrie debug tous les N ticks propulsés
    pub telemetry_interval_ticks: u32,

    pub stages: [StageProfile; 3],
    pub camera: CameraConfig,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            screen_width: 800.0,
            screen_height: 600.0,
            ground_y: 150.0,
            launch_pad_x: 400.0,
            initial_fuel: 100.0,
            fuel_burn_rate: 0.4,
            countdown_start: 10,
            countdown_ticks_per_step: 1,
            target_altitude: 800.0,
            target_velocity: 5.0,
            ceiling_y: 1000.0,
            coasting_gravity: 0.02,
            falling_gravity: 0.05,
            crash_velocity: -2.0,
            max_wind_angle: 10.0,
            wind_altitude_falloff: 1000.0,
            initial_wind_speed: 0.1,
            wind_change_chance: 0.001,
            wind_min_speed: 0.05,
            wind_max_speed: 0.15,
            manual_steer_step: 0.5,
            manual_max_angle: 30.0,
            manual_thrust_step: 0.05,
            manual_thrust_fuel_cost: 1.0,
            refuel_amount: 20.0,
            random_failure_chance: 0.0002,
            separation_tilt: 10.0,
            explosion_particles: 100,
            trajectory_history_len: 200,
            prediction_steps: 100,
            prediction_idle_velocity: 0.5,
            prediction_floor_y: 0.0,
            prediction_ceiling_y: 1400.0,
            telemetry_interval_ticks: 30,
            stages: default_stages(),
            camera: CameraConfig::default(),
        }
    }
}

fn default_stages() -> [StageProfile; 3] {
    [
        // Booster
        StageProfile {
            thrust: 0.12,
            width: 40.0,
            height: 150.0,
            stack_offset: 0.0,
            flame_base: 40.0,
            flame_amplitude: 15.0,
            flame_frequency: 0.01,
            separation: Some(SeparationRule {
                nominal_altitude: 250.0,
                nominal_fuel: 50.0,
                nominal_velocity: 3.0,
                emergency_fuel: 10.0,
                emergency_altitude: 400.0,
                coasting_altitude: 200.0,
                momentum_share: 0.7,
                velocity_retention: 0.95,
                next_stage_fuel: 100.0,
            }),
            fall: Some(FallProfile {
                gravity: 0.08,
                wind_drift: 2.0,
                sway_amplitude: 0.5,
                sway_phase: 0.0,
                spin_base: 5.0,
                spin_amplitude: 2.0,
                spin_frequency: 0.002,
                parachute: Some(ParachuteProfile {
                    deploy_below_y: 400.0,
                    min_velocity: -1.5,
                    drag: 0.97,
                }),
                trail_chance: 0.2,
            }),
        },
        // Étage supérieur
        StageProfile {
            thrust: 0.09,
            width: 30.0,
            height: 70.0,
            stack_offset: 148.0,
            flame_base: 25.0,
            flame_amplitude: 8.0,
            flame_frequency: 0.015,
            separation: Some(SeparationRule {
                nominal_altitude: 500.0,
                nominal_fuel: 40.0,
                nominal_velocity: 4.0,
                emergency_fuel: 15.0,
                emergency_altitude: 700.0,
                coasting_altitude: 450.0,
                momentum_share: 0.7,
                velocity_retention: 0.98,
                next_stage_fuel: 50.0,
            }),
            fall: Some(FallProfile {
                gravity: 0.07,
                wind_drift: 1.5,
                sway_amplitude: 0.3,
                sway_phase: std::f32::consts::FRAC_PI_2,
                spin_base: 6.0,
                spin_amplitude: 3.0,
                spin_frequency: 0.003,
                parachute: None,
                trail_chance: 0.125,
            }),
        },
        // Charge utile : ne se sépare jamais
        StageProfile {
            thrust: 0.06,
            width: 20.0,
            height: 40.0,
            stack_offset: 218.0,
            flame_base: 15.0,
            flame_amplitude: 5.0,
            flame_frequency: 0.02,
            separation: None,
            fall: None,
        },
    ]
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Profil de l'étage `stage` (1..=3). Les indices hors bornes sont ramenés dans [1, 3].
    pub fn stage(&self, stage: u8) -> &StageProfile {
        let index = (stage.clamp(1, 3) - 1) as usize;
        &self.stages[index]
    }

    /// Durée écoulée (ms) après `tick` ticks, horloge déterministe de la simulation
    pub fn elapsed_ms(&self, tick: u64) -> f32 {
        (tick * self.tick_ms) as f32
    }

    /// Nombre de ticks correspondant à une durée en millisecondes (arrondi)
    pub fn ms_to_ticks(&self, ms: u64) -> u64 {
        if self.tick_ms == 0 {
            return 0;
        }
        (ms + self.tick_ms / 2) / self.tick_ms
    }
}
