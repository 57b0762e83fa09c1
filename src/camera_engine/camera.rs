use std::fmt;

use log::info;

use crate::camera_engine::config::CameraConfig;
use crate::physic_engine::random::RandomSource;
use crate::physic_engine::types::Vec2;

/// Source de la cible de la caméra
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    LaunchPad,
    WideView,
    FollowRocket,
    FollowStage1,
    FollowStage2,
}

impl CameraMode {
    /// Étage largué suivi par ce mode, le cas échéant
    pub fn followed_stage(self) -> Option<u8> {
        match self {
            CameraMode::FollowStage1 => Some(1),
            CameraMode::FollowStage2 => Some(2),
            _ => None,
        }
    }

    pub fn follow_stage(stage: u8) -> Option<Self> {
        match stage {
            1 => Some(CameraMode::FollowStage1),
            2 => Some(CameraMode::FollowStage2),
            _ => None,
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CameraMode::LaunchPad => "launch pad",
            CameraMode::WideView => "wide view",
            CameraMode::FollowRocket => "follow rocket",
            CameraMode::FollowStage1 => "follow stage 1",
            CameraMode::FollowStage2 => "follow stage 2",
        };
        f.write_str(label)
    }
}

/// Instantané de ce que la caméra peut suivre, construit à chaque tick par le moteur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSubject {
    pub rocket_pos: Vec2,
    pub rocket_stage: u8,
    pub launching: bool,
    pub launched: bool,
    pub exploded: bool,
    /// Position des étages largués encore en chute (booster, étage supérieur)
    pub falling_stages: [Option<Vec2>; 2],
}

impl CameraSubject {
    fn falling_stage(&self, stage: u8) -> Option<Vec2> {
        match stage {
            1 | 2 => self.falling_stages[(stage - 1) as usize],
            _ => None,
        }
    }
}

/// Retour sur la fusée programmé après un largage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRevert {
    pub due_tick: u64,
    pub stage: u8,
}

/// Changement de mode décidé par la caméra elle-même
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraEvent {
    /// Retour programmé sur la fusée après le largage de `stage`
    Reverted { stage: u8 },
    /// L'étage suivi a cessé de tomber
    StageLost { stage: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub zoom: f32,
    pub target: Vec2,
    pub target_zoom: f32,
    pub mode: CameraMode,
    pub follow_rocket: bool,
    pub shaking: bool,
    pub shake_intensity: f32,
    pending_revert: Option<PendingRevert>,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        let home = Vec2::new(config.home_x, config.home_y);
        Self {
            pos: home,
            zoom: 1.0,
            target: home,
            target_zoom: 1.0,
            mode: CameraMode::LaunchPad,
            follow_rocket: false,
            shaking: false,
            shake_intensity: 0.0,
            pending_revert: None,
        }
    }

    pub fn pending_revert(&self) -> Option<PendingRevert> {
        self.pending_revert
    }

    pub fn schedule_revert(&mut self, due_tick: u64, stage: u8) {
        self.pending_revert = Some(PendingRevert { due_tick, stage });
    }

    pub fn start_shake(&mut self, intensity: f32) {
        self.shaking = true;
        self.shake_intensity = intensity;
    }

    /// Vue fixe (pas de tir ou plan large) : la caméra saute directement sur la cible.
    pub fn snap_view(&mut self, mode: CameraMode, config: &CameraConfig) {
        let zoom = match mode {
            CameraMode::WideView => config.wide_zoom,
            _ => 1.0,
        };
        let home = Vec2::new(config.home_x, config.home_y);
        self.mode = mode;
        self.follow_rocket = false;
        self.target = home;
        self.target_zoom = zoom;
        self.pos = home;
        self.zoom = zoom;
    }

    /// Passe en suivi (fusée ou étage largué)
    pub fn follow(&mut self, mode: CameraMode) {
        self.mode = mode;
        self.follow_rocket = true;
    }

    /// Active/désactive le suivi de la fusée. Retourne le nouvel état.
    pub fn toggle_follow(&mut self) -> bool {
        self.follow_rocket = !self.follow_rocket;
        self.mode = if self.follow_rocket {
            CameraMode::FollowRocket
        } else {
            CameraMode::LaunchPad
        };
        self.follow_rocket
    }

    /// Zoom immédiat (`+`/`-`) : multiplie le zoom courant et synchronise la cible.
    pub fn zoom_by(&mut self, factor: f32, config: &CameraConfig) -> f32 {
        self.zoom = (self.zoom * factor).clamp(config.zoom_min, config.zoom_max);
        self.target_zoom = self.zoom;
        self.zoom
    }

    /// Zoom cible uniquement (`Z`/`X`), atteint par lissage.
    pub fn zoom_target_by(&mut self, factor: f32, config: &CameraConfig) -> f32 {
        self.target_zoom = (self.target_zoom * factor).clamp(config.zoom_min, config.zoom_max);
        self.target_zoom
    }

    /// Un tick de caméra : retour programmé, choix de la cible, lissage, tremblement.
    pub fn update(
        &mut self,
        tick: u64,
        subject: &CameraSubject,
        config: &CameraConfig,
        rng: &mut impl RandomSource,
    ) -> Option<CameraEvent> {
        let reverted = self.process_revert(tick, subject);

        if let Some(lost) = self.update_target(subject, config) {
            // Pas de lissage ce tick-là
            return Some(lost);
        }

        let k = config.smoothing;
        self.pos += (self.target - self.pos) * k;
        self.zoom += (self.target_zoom - self.zoom) * k;

        if self.shaking && self.shake_intensity > 0.0 {
            let jitter = Vec2::new(rng.spread(0.5), rng.spread(0.5));
            self.pos += jitter * self.shake_intensity;
            self.shake_intensity *= config.shake_decay;
            if self.shake_intensity < config.shake_cutoff {
                self.shaking = false;
                self.shake_intensity = 0.0;
            }
        }

        reverted
    }

    fn process_revert(&mut self, tick: u64, subject: &CameraSubject) -> Option<CameraEvent> {
        let pending = self.pending_revert?;
        if tick < pending.due_tick {
            return None;
        }
        self.pending_revert = None;

        if subject.exploded || self.mode.followed_stage() != Some(pending.stage) {
            return None;
        }

        self.mode = CameraMode::FollowRocket;
        if pending.stage == 1 {
            self.target_zoom = 0.8;
            info!("🎥 Camera: back on the upper stage");
        } else {
            self.target_zoom = 1.2;
            self.pos = subject.rocket_pos + Vec2::new(0.0, 80.0);
            info!("🎥 Camera: back on the payload (zoom 1.2x)");
        }
        Some(CameraEvent::Reverted {
            stage: pending.stage,
        })
    }

    fn update_target(
        &mut self,
        subject: &CameraSubject,
        config: &CameraConfig,
    ) -> Option<CameraEvent> {
        match self.mode {
            CameraMode::LaunchPad => {
                self.target = Vec2::new(config.home_x, config.home_y);
                self.target_zoom = 1.0;
            }
            CameraMode::WideView => {
                self.target = Vec2::new(config.home_x, config.home_y);
                self.target_zoom = config.wide_zoom;
            }
            CameraMode::FollowRocket => self.target_rocket(subject, config),
            CameraMode::FollowStage1 | CameraMode::FollowStage2 => {
                let stage = self.mode.followed_stage().unwrap_or(1);
                match subject.falling_stage(stage) {
                    Some(stage_pos) => {
                        self.target = stage_pos + Vec2::new(0.0, 100.0);
                        self.target_zoom = if stage == 1 { 0.8 } else { 0.9 };
                    }
                    None => {
                        self.mode = CameraMode::FollowRocket;
                        self.target_zoom = if stage == 1 { 0.8 } else { 1.2 };
                        info!("🎥 Stage {stage} lost, camera switching back to the rocket");
                        return Some(CameraEvent::StageLost { stage });
                    }
                }
            }
        }
        None
    }

    fn target_rocket(&mut self, subject: &CameraSubject, config: &CameraConfig) {
        let rocket = subject.rocket_pos;
        if subject.exploded {
            self.target = rocket;
            self.target_zoom = 1.0;
        } else if subject.launching || subject.launched {
            let (offset, zoom) = match subject.rocket_stage {
                1 => (100.0, 1.0 - rocket.y / 2000.0),
                2 => (80.0, 0.8 - rocket.y / 2500.0),
                _ => (60.0, 1.2 - rocket.y / 3000.0),
            };
            self.target = rocket + Vec2::new(0.0, offset);
            self.target_zoom = zoom.clamp(config.follow_zoom_min, config.follow_zoom_max);
            if subject.rocket_stage == 3 && rocket.y > 1000.0 {
                self.target_zoom = 0.8;
            }
        } else {
            self.target = rocket + Vec2::new(0.0, 50.0);
            self.target_zoom = 1.0;
        }
    }

    pub fn reset(&mut self, config: &CameraConfig) {
        *self = Self::new(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic_engine::random::ConstantRandom;

    fn idle_subject() -> CameraSubject {
        CameraSubject {
            rocket_pos: Vec2::new(400.0, 150.0),
            rocket_stage: 1,
            launching: false,
            launched: false,
            exploded: false,
            falling_stages: [None, None],
        }
    }

    #[test]
    fn follow_zoom_is_clamped() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(&config);
        camera.follow(CameraMode::FollowRocket);
        let subject = CameraSubject {
            rocket_pos: Vec2::new(400.0, 1900.0),
            launching: true,
            ..idle_subject()
        };
        camera.update(0, &subject, &config, &mut ConstantRandom::default());
        assert_eq!(camera.target_zoom, 0.3);
        assert_eq!(camera.target, Vec2::new(400.0, 2000.0));
    }

    #[test]
    fn shake_decays_then_stops() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(&config);
        camera.start_shake(1.5);
        let mut rng = ConstantRandom::default();
        let mut ticks = 0;
        while camera.shaking {
            let before = camera.shake_intensity;
            camera.update(ticks, &idle_subject(), &config, &mut rng);
            assert!(camera.shake_intensity < before);
            ticks += 1;
        }
        assert_eq!(camera.shake_intensity, 0.0);
        // 1.5 * 0.9^n < 0.01 pour n = 48
        assert_eq!(ticks, 48);
    }

    #[test]
    fn stage_view_without_falling_stage_reverts() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(&config);
        camera.follow(CameraMode::FollowStage2);
        let pos_before = camera.pos;
        let event = camera.update(0, &idle_subject(), &config, &mut ConstantRandom::default());
        assert_eq!(event, Some(CameraEvent::StageLost { stage: 2 }));
        assert_eq!(camera.mode, CameraMode::FollowRocket);
        assert_eq!(camera.target_zoom, 1.2);
        assert_eq!(camera.pos, pos_before);
    }
}
