use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::Vec2;

/// Représentation de la fusée active (l'empilement d'étages encore attachés).
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    /// Position de la base de l'étage actif
    pub pos: Vec2,
    /// Vitesse verticale (unités par tick)
    pub velocity: f32,
    /// Inclinaison en degrés
    pub angle: f32,
    /// Carburant restant de l'étage actif (%)
    pub fuel: f32,
    /// Étage actif : 1 (booster), 2 (étage supérieur), 3 (charge utile)
    pub stage: u8,

    /// État de la fusée
    pub launching: bool,
    pub launched: bool,
    pub exploded: bool,

    /// Télémétrie
    pub altitude: f32,
    pub acceleration: f32,

    /// Flamme (présentation uniquement)
    pub flame_size: f32,
    pub flame_intensity: f32,
}

impl Default for Rocket {
    fn default() -> Self {
        Self::new(&PhysicConfig::default())
    }
}

impl Rocket {
    /// Fusée posée sur le pas de tir, pleine de carburant
    pub fn new(config: &PhysicConfig) -> Self {
        Self {
            pos: Vec2::new(config.launch_pad_x, config.ground_y),
            velocity: 0.0,
            angle: 0.0,
            fuel: config.initial_fuel,
            stage: 1,
            launching: false,
            launched: false,
            exploded: false,
            altitude: 0.0,
            acceleration: 0.0,
            flame_size: config.stage(1).flame_base,
            flame_intensity: 0.0,
        }
    }

    /// Vrai si la fusée peut pousser ce tick
    #[inline]
    pub fn is_powered(&self) -> bool {
        self.launching && self.fuel > 0.0
    }

    /// Vrai si la fusée est en vol balistique (plus de carburant, toujours en lancement)
    #[inline]
    pub fn is_coasting(&self) -> bool {
        self.launching && self.fuel <= 0.0
    }

    /// Applique la poussée de l'étage et brûle le carburant (jamais négatif).
    pub fn apply_thrust(&mut self, thrust: f32, burn_rate: f32) {
        self.velocity += thrust;
        self.fuel = (self.fuel - burn_rate).max(0.0);
        self.acceleration = thrust * 100.0;
    }

    /// Perturbation du vent, atténuée avec l'altitude. Retourne le décalage horizontal appliqué.
    pub fn apply_wind(&mut self, wind: f32, config: &PhysicConfig) -> f32 {
        let effect = wind * 0.1 * (1.0 - self.altitude / config.wind_altitude_falloff);
        self.pos.x += effect;
        self.angle = (self.angle + effect * 0.5).clamp(-config.max_wind_angle, config.max_wind_angle);
        effect
    }

    /// Intègre la vitesse verticale et rafraîchit l'altitude
    pub fn advance(&mut self, ground_y: f32) {
        self.pos.y += self.velocity;
        self.refresh_telemetry(ground_y);
    }

    pub fn refresh_telemetry(&mut self, ground_y: f32) {
        self.altitude = self.pos.y - ground_y;
    }

    /// Correction manuelle de l'inclinaison (flèches gauche/droite)
    pub fn steer(&mut self, delta: f32, max_angle: f32) {
        self.angle = (self.angle + delta).clamp(-max_angle, max_angle);
    }

    /// Ajoute du carburant, plafonné à 100 %
    pub fn refuel(&mut self, amount: f32) {
        self.fuel = (self.fuel + amount).min(100.0);
    }

    /// Animation de la flamme, fonction de l'horloge de simulation
    pub fn update_flame(&mut self, elapsed_ms: f32, config: &PhysicConfig) {
        let profile = config.stage(self.stage);
        let time = elapsed_ms * 0.001;
        self.flame_size = profile.flame_base + profile.flame_amplitude * (time * profile.flame_frequency).sin();
        self.flame_intensity = 0.5 + 0.5 * (time * 0.02).sin();
    }
}
