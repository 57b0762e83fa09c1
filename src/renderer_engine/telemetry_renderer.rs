use std::mem::size_of;

use itertools::{Itertools, MinMaxResult};
use log::info;

use crate::camera_engine::CameraMode;
use crate::physic_engine::{
    ExplosionParticle, MissionState, Scene, SmokeParticle, StageStatus,
};
use crate::renderer_engine::config::RendererConfig;
use crate::renderer_engine::r#trait::RendererEngine;
use crate::utils::HumanBytes;

/// Résumé d'une frame : ce qu'un HUD afficherait
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    pub tick: u64,
    pub mission: MissionState,
    pub stage: u8,
    pub altitude: f32,
    pub velocity: f32,
    pub fuel: f32,
    pub camera_mode: CameraMode,
    pub zoom: f32,
    pub smoke: usize,
    pub explosions: usize,
    pub falling_stages: usize,
    /// Étendue verticale (min, max) de toutes les particules vivantes
    pub particle_span: Option<(f32, f32)>,
    /// Points de trajectoire prédite (0 si l'affichage est désactivé)
    pub prediction_points: usize,
}

impl FrameSummary {
    pub fn from_scene(scene: &Scene<'_>) -> Self {
        let span = scene
            .smoke
            .iter()
            .map(|p| p.pos.y)
            .chain(scene.explosions.iter().map(|p| p.pos.y))
            .minmax();
        let particle_span = match span {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(y) => Some((y, y)),
            MinMaxResult::MinMax(low, high) => Some((low, high)),
        };

        let prediction_points = if scene.display.show_trajectory {
            scene.predicted_trajectory().len()
        } else {
            0
        };

        Self {
            tick: scene.tick,
            mission: scene.mission.state(),
            stage: scene.rocket.stage,
            altitude: scene.rocket.altitude,
            velocity: scene.rocket.velocity,
            fuel: scene.rocket.fuel,
            camera_mode: scene.camera.mode,
            zoom: scene.camera.zoom,
            smoke: scene.smoke.len(),
            explosions: scene.explosions.len(),
            falling_stages: scene
                .stages
                .iter()
                .filter(|s| s.status() == StageStatus::Falling)
                .count(),
            particle_span,
            prediction_points,
        }
    }

    /// Mémoire occupée par les particules vivantes
    pub fn particle_bytes(&self) -> usize {
        self.smoke * size_of::<SmokeParticle>() + self.explosions * size_of::<ExplosionParticle>()
    }
}

/// Renderer headless : journalise périodiquement l'état de la simulation.
#[derive(Debug)]
pub struct TelemetryRenderer {
    config: RendererConfig,
    window_size: (i32, i32),
    frames: u64,
    reports: u64,
    last_summary: Option<FrameSummary>,
}

impl TelemetryRenderer {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            config: config.clone(),
            window_size: (800, 600),
            frames: 0,
            reports: 0,
            last_summary: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Nombre de résumés effectivement journalisés
    pub fn reports(&self) -> u64 {
        self.reports
    }

    pub fn last_summary(&self) -> Option<&FrameSummary> {
        self.last_summary.as_ref()
    }

    pub fn window_size(&self) -> (i32, i32) {
        self.window_size
    }

    fn report(&mut self, summary: &FrameSummary) {
        self.reports += 1;
        info!(
            "📡 T+{} | {} | stage {} | alt {:.0} m | vel {:.2} m/s | fuel {:.0} %",
            summary.tick,
            summary.mission,
            summary.stage,
            summary.altitude,
            summary.velocity,
            summary.fuel
        );
        info!(
            "   camera {} x{:.2} | smoke {} | debris {} ({}) | falling stages {}",
            summary.camera_mode,
            summary.zoom,
            summary.smoke,
            summary.explosions,
            summary.particle_bytes().human_bytes(),
            summary.falling_stages
        );
        if let Some((low, high)) = summary.particle_span {
            info!("   particles between y={low:.0} and y={high:.0}");
        }
    }
}

impl RendererEngine for TelemetryRenderer {
    fn render_frame(&mut self, scene: &Scene<'_>) -> usize {
        self.frames += 1;
        let summary = FrameSummary::from_scene(scene);

        let interval = self.config.stats_interval_frames.max(1);
        if scene.display.show_stats && self.frames % interval == 0 {
            self.report(&summary);
        }

        let count = summary.smoke + summary.explosions;
        self.last_summary = Some(summary);
        count
    }

    fn set_window_size(&mut self, width: i32, height: i32) {
        self.window_size = (width, height);
    }

    fn close(&mut self) {
        info!(
            "📡 Telemetry renderer closed after {} frames ({} reports)",
            self.frames, self.reports
        );
    }
}
