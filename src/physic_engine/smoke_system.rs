use crate::physic_engine::particle::{ExplosionParticle, SmokeParticle};
use crate::physic_engine::random::RandomSource;
use crate::physic_engine::types::{Color, Vec2};

// ---------------------------
// Table des émetteurs de fumée
// ---------------------------

/// Teinte d'une particule émise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shade {
    /// Couleur fixe
    Fixed(Color),
    /// Gris uniforme tiré dans `[low, high)`
    Grey { low: f32, high: f32 },
    /// Chaque composante tirée indépendamment entre `low` et `high`
    Tinted { low: Color, high: Color },
}

impl Shade {
    fn pick(&self, rng: &mut impl RandomSource) -> Color {
        match *self {
            Shade::Fixed(color) => color,
            Shade::Grey { low, high } => Color::splat(rng.range(low, high)),
            Shade::Tinted { low, high } => Color::new(
                rng.range(low.x, high.x),
                rng.range(low.y, high.y),
                rng.range(low.z, high.z),
            ),
        }
    }
}

/// Description d'un émetteur : combien, où, et quelles plages de valeurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokeEmitter {
    pub count: usize,
    /// Probabilité que l'émetteur se déclenche ce tick
    pub chance: f32,
    /// Demi-largeur du jitter horizontal autour de l'origine
    pub x_spread: f32,
    /// Décalage vertical tiré dans `[y_range.0, y_range.1)`
    pub y_range: (f32, f32),
    pub size: (f32, f32),
    pub speed: (f32, f32),
    pub life: (f32, f32),
    pub alpha: f32,
    pub shade: Shade,
}

/// Fumée d'échappement par étage (index 0 = booster).
pub const EXHAUST_EMITTERS: [SmokeEmitter; 3] = [
    SmokeEmitter {
        count: 4,
        chance: 1.0,
        x_spread: 10.0,
        y_range: (-35.0, -20.0),
        size: (5.0, 15.0),
        speed: (0.1, 0.6),
        life: (0.8, 1.1),
        alpha: 0.9,
        shade: Shade::Grey {
            low: 0.7,
            high: 1.0,
        },
    },
    SmokeEmitter {
        count: 2,
        chance: 1.0,
        x_spread: 4.5,
        y_range: (-25.0, -15.0),
        size: (4.0, 10.0),
        speed: (0.15, 0.55),
        life: (0.6, 0.8),
        alpha: 0.8,
        shade: Shade::Fixed(Color::splat(0.95)),
    },
    SmokeEmitter {
        count: 1,
        chance: 0.2,
        x_spread: 2.0,
        y_range: (-18.0, -10.0),
        size: (2.0, 6.0),
        speed: (0.2, 0.2),
        life: (0.4, 0.5),
        alpha: 0.6,
        shade: Shade::Fixed(Color::ONE),
    },
];

/// Traînée des étages largués (booster, étage supérieur).
/// La probabilité d'émission vient du `FallProfile` de l'étage.
pub const TRAIL_EMITTERS: [SmokeEmitter; 2] = [
    SmokeEmitter {
        count: 1,
        chance: 1.0,
        x_spread: 10.0,
        y_range: (-10.0, 10.0),
        size: (3.0, 9.0),
        speed: (0.2, 0.2),
        life: (0.5, 0.5),
        alpha: 0.6,
        shade: Shade::Fixed(Color::splat(0.6)),
    },
    SmokeEmitter {
        count: 1,
        chance: 1.0,
        x_spread: 7.5,
        y_range: (-7.5, 7.5),
        size: (2.0, 6.0),
        speed: (0.15, 0.15),
        life: (0.4, 0.4),
        alpha: 0.5,
        shade: Shade::Fixed(Color::splat(0.7)),
    },
];

/// Nuage de débris au moment d'une séparation (orange/brun puis bleu/gris).
pub const SEPARATION_DEBRIS_EMITTERS: [SmokeEmitter; 2] = [
    SmokeEmitter {
        count: 30,
        chance: 1.0,
        x_spread: 30.0,
        y_range: (-30.0, 30.0),
        size: (2.0, 8.0),
        speed: (0.05, 0.55),
        life: (0.6, 1.0),
        alpha: 0.9,
        shade: Shade::Tinted {
            low: Color::new(0.8, 0.4, 0.2),
            high: Color::new(1.0, 0.7, 0.4),
        },
    },
    SmokeEmitter {
        count: 30,
        chance: 1.0,
        x_spread: 30.0,
        y_range: (-30.0, 30.0),
        size: (2.0, 8.0),
        speed: (0.05, 0.55),
        life: (0.6, 1.0),
        alpha: 0.9,
        shade: Shade::Tinted {
            low: Color::new(0.6, 0.7, 0.9),
            high: Color::new(0.8, 0.9, 1.0),
        },
    },
];

const EXPLOSION_SMOKE_MIN_LIFE: f32 = 0.5;
const EXPLOSION_SMOKE_TINT: Color = Color::new(1.0, 0.8, 0.6);

const SMOKE_FADE: f32 = 0.005;
const SMOKE_GROWTH: f32 = 0.15;
const SMOKE_WIND_JITTER: f32 = 0.3;

fn emitter_index(stage: u8, table_len: usize) -> usize {
    (stage.max(1) as usize - 1).min(table_len - 1)
}

// ---------------------------
// Gestionnaire de fumée
// ---------------------------
#[derive(Debug, Default)]
pub struct SmokeSystem {
    particles: Vec<SmokeParticle>,
}

impl SmokeSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(1024),
        }
    }

    /// Déclenche un émetteur à une position. Retourne le nombre de particules créées.
    pub fn emit(
        &mut self,
        emitter: &SmokeEmitter,
        origin: Vec2,
        rng: &mut impl RandomSource,
    ) -> usize {
        if emitter.chance < 1.0 && !rng.chance(emitter.chance) {
            return 0;
        }
        for _ in 0..emitter.count {
            let offset = Vec2::new(
                rng.spread(emitter.x_spread),
                rng.range(emitter.y_range.0, emitter.y_range.1),
            );
            self.particles.push(SmokeParticle {
                pos: origin + offset,
                size: rng.range(emitter.size.0, emitter.size.1),
                speed: rng.range(emitter.speed.0, emitter.speed.1),
                life: rng.range(emitter.life.0, emitter.life.1),
                alpha: emitter.alpha,
                color: emitter.shade.pick(rng),
            });
        }
        emitter.count
    }

    /// Fumée d'échappement de l'étage actif
    pub fn emit_exhaust(&mut self, stage: u8, origin: Vec2, rng: &mut impl RandomSource) -> usize {
        let emitter = EXHAUST_EMITTERS[emitter_index(stage, EXHAUST_EMITTERS.len())];
        self.emit(&emitter, origin, rng)
    }

    /// Traînée d'un étage largué, émise avec la probabilité `chance`
    pub fn emit_trail(
        &mut self,
        stage: u8,
        origin: Vec2,
        chance: f32,
        rng: &mut impl RandomSource,
    ) -> usize {
        let emitter = SmokeEmitter {
            chance,
            ..TRAIL_EMITTERS[emitter_index(stage, TRAIL_EMITTERS.len())]
        };
        self.emit(&emitter, origin, rng)
    }

    pub fn emit_separation_debris(
        &mut self,
        stage: u8,
        origin: Vec2,
        rng: &mut impl RandomSource,
    ) -> usize {
        let emitter =
            SEPARATION_DEBRIS_EMITTERS[emitter_index(stage, SEPARATION_DEBRIS_EMITTERS.len())];
        self.emit(&emitter, origin, rng)
    }

    /// Chaque débris d'explosion encore vif laisse une particule de fumée sombre
    pub fn emit_from_explosions(
        &mut self,
        debris: &[ExplosionParticle],
        rng: &mut impl RandomSource,
    ) -> usize {
        let before = self.particles.len();
        for particle in debris
            .iter()
            .filter(|p| p.life > EXPLOSION_SMOKE_MIN_LIFE)
        {
            let dark = rng.range(0.3, 0.5);
            self.particles.push(SmokeParticle {
                pos: particle.pos,
                size: particle.size * 2.0,
                speed: 0.05,
                life: particle.life * 0.8,
                alpha: 0.7,
                color: EXPLOSION_SMOKE_TINT * dark,
            });
        }
        self.particles.len() - before
    }

    /// Update physique des particules de fumée, puis retrait des particules mortes.
    ///
    /// `elapsed_ms` est l'horloge déterministe de la simulation (tick × durée du tick).
    pub fn update(&mut self, elapsed_ms: f32, wind_direction: f32, rng: &mut impl RandomSource) {
        let time = elapsed_ms * 0.001;
        for smoke in self.particles.iter_mut() {
            smoke.pos.y += smoke.speed;
            smoke.pos.x += rng.spread(1.0) * SMOKE_WIND_JITTER * wind_direction;

            smoke.life -= SMOKE_FADE;
            smoke.alpha = smoke.life;
            smoke.size += SMOKE_GROWTH;

            smoke.pos.x += (time * 0.5 + smoke.pos.y * 0.01).sin() * 0.1;
            smoke.pos.y += (time * 0.3 + smoke.pos.x * 0.01).cos() * 0.05;
        }
        self.particles.retain(SmokeParticle::is_alive);
    }

    pub fn particles(&self) -> &[SmokeParticle] {
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
