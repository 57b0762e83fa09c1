pub use glam::{Vec2, Vec3 as Color};

use crate::camera_engine::CameraMode;
use crate::physic_engine::stage::SeparationReason;

// ------------------------
// FlightEvent
// ------------------------
/// Événements produits pendant un tick, consommés par le simulateur (logs, rendu).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightEvent {
    CountdownStarted,
    CountdownStep { remaining: u32 },
    Liftoff,
    StageSeparated { stage: u8, reason: SeparationReason },
    StageCrashed { stage: u8, pos: Vec2 },
    RocketExploded { pos: Vec2 },
    Landed,
    CeilingReached,
    MissionComplete { altitude: f32, velocity: f32 },
    CameraSwitched { mode: CameraMode },
    WindChanged { speed: f32, direction: f32 },
}

// ------------------------
// UpdateResult
// ------------------------
pub struct UpdateResult<'a> {
    pub tick: u64,
    pub events: &'a [FlightEvent],
}

impl UpdateResult<'_> {
    pub fn has_event(&self, predicate: impl Fn(&FlightEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }
}
