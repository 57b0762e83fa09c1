use crate::physic_engine::types::{Color, Vec2};

/// Particule de fumée : monte à `speed` par tick, grossit et s'estompe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokeParticle {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub life: f32,
    pub alpha: f32,
    pub color: Color,
}

impl SmokeParticle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0 && self.alpha > 0.0
    }
}

/// Débris d'explosion (balistique, soumis à la gravité).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub life: f32,
    pub color: Color,
}

impl ExplosionParticle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}
