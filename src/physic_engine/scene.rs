use crate::camera_engine::Camera;
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::environment::Environment;
use crate::physic_engine::mission::Mission;
use crate::physic_engine::particle::{ExplosionParticle, SmokeParticle};
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::stage::RocketStage;
use crate::physic_engine::trajectory::{predict_trajectory, TrajectoryHistory};
use crate::physic_engine::types::Vec2;

/// Options d'affichage pilotées au clavier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_grid: bool,
    pub show_stats: bool,
    pub show_trajectory: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_grid: false,
            show_stats: true,
            show_trajectory: false,
        }
    }
}

/// Vue en lecture seule de l'état de la simulation, lue une fois par frame par le renderer.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub tick: u64,
    pub config: &'a PhysicConfig,
    pub rocket: &'a Rocket,
    pub stages: &'a [RocketStage; 3],
    pub mission: &'a Mission,
    pub camera: &'a Camera,
    pub environment: &'a Environment,
    pub smoke: &'a [SmokeParticle],
    pub explosions: &'a [ExplosionParticle],
    pub trajectory: &'a TrajectoryHistory,
    pub display: &'a DisplayOptions,
}

impl Scene<'_> {
    /// Projection de la trajectoire (calculée à la demande, sans effet de bord)
    pub fn predicted_trajectory(&self) -> Vec<Vec2> {
        predict_trajectory(self.rocket, self.environment.wind.signed(), self.config)
    }

    /// Nombre total de particules vivantes
    pub fn particle_count(&self) -> usize {
        self.smoke.len() + self.explosions.len()
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.config.elapsed_ms(self.tick)
    }
}
