use crate::physic_engine::particle::ExplosionParticle;
use crate::physic_engine::random::RandomSource;
use crate::physic_engine::types::{Color, Vec2};

const DEBRIS_GRAVITY: f32 = 0.05;
const DEBRIS_FADE: f32 = 0.01;
const DEBRIS_GROWTH: f32 = 0.1;

const BURST_SPEED: f32 = 10.0;
const SPARK_COUNT: usize = 15;
const SPARK_SPEED: f32 = 4.0;
const SPARK_LIFE: f32 = 0.9;

const ORANGE: Color = Color::new(1.0, 0.6, 0.0);
const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
const RED: Color = Color::new(1.0, 0.0, 0.0);
const GREY: Color = Color::splat(0.6);
const BLUE: Color = Color::new(0.4, 0.6, 1.0);

/// Palette d'une explosion : 30 % orange, 30 % jaune, 20 % rouge, 20 % gris.
pub fn explosion_color(roll: f32) -> Color {
    match roll {
        r if r < 0.3 => ORANGE,
        r if r < 0.6 => YELLOW,
        r if r < 0.8 => RED,
        _ => GREY,
    }
}

#[derive(Debug, Default)]
pub struct ExplosionSystem {
    particles: Vec<ExplosionParticle>,
}

impl ExplosionSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(256),
        }
    }

    /// Explosion complète : `count` débris à vitesse aléatoire dans `[-10, 10)`.
    pub fn burst(&mut self, origin: Vec2, count: usize, rng: &mut impl RandomSource) {
        self.particles.reserve(count);
        for _ in 0..count {
            let vel = Vec2::new(rng.spread(BURST_SPEED), rng.spread(BURST_SPEED));
            let size = rng.range(2.0, 10.0);
            let color = explosion_color(rng.range(0.0, 1.0));
            self.particles.push(ExplosionParticle {
                pos: origin,
                vel,
                size,
                life: 1.0,
                color,
            });
        }
    }

    /// Étincelles de séparation, orange pour le booster, bleues pour l'étage supérieur.
    pub fn separation_sparks(&mut self, stage: u8, origin: Vec2, rng: &mut impl RandomSource) {
        let color = if stage <= 1 { ORANGE } else { BLUE };
        for _ in 0..SPARK_COUNT {
            let vel = Vec2::new(rng.spread(SPARK_SPEED), rng.spread(SPARK_SPEED));
            self.particles.push(ExplosionParticle {
                pos: origin,
                vel,
                size: rng.range(1.0, 4.0),
                life: SPARK_LIFE,
                color,
            });
        }
    }

    pub fn update(&mut self) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.vel.y -= DEBRIS_GRAVITY;
            p.life -= DEBRIS_FADE;
            p.size += DEBRIS_GROWTH;
        }
        self.particles.retain(ExplosionParticle::is_alive);
    }

    pub fn particles(&self) -> &[ExplosionParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
