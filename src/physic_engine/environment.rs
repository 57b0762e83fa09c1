use std::collections::VecDeque;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::random::RandomSource;
use crate::physic_engine::types::Vec2;

const STAR_COUNT: usize = 300;
const CLOUD_COUNT: usize = 8;
const SATELLITE_COUNT: usize = 3;
const METEOR_COUNT: usize = 2;
const METEOR_TRAIL_LEN: usize = 10;

const WRAP_MIN_X: f32 = -50.0;
const WRAP_MAX_X: f32 = 850.0;

const DAY_CLOCK_STEP: f32 = 0.0001;
const BEACON_PERIOD_TICKS: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub brightness: f32,
    pub twinkle_speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Meteor {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    /// Positions récentes, la plus récente en tête (10 points max)
    pub trail: VecDeque<Vec2>,
}

impl Meteor {
    fn spawn(rng: &mut impl RandomSource) -> Self {
        let pos = Vec2::new(rng.range(0.0, 800.0), rng.range(500.0, 600.0));
        Self {
            pos,
            speed: rng.range(0.3, 0.5),
            size: rng.range(3.0, 10.0),
            trail: Self::initial_trail(pos),
        }
    }

    fn initial_trail(pos: Vec2) -> VecDeque<Vec2> {
        (0..METEOR_TRAIL_LEN)
            .map(|j| pos - Vec2::splat(j as f32 * 2.0))
            .collect()
    }
}

/// Vent horizontal : vitesse et sens (+1 / -1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub speed: f32,
    pub direction: f32,
}

impl Wind {
    /// Composante signée utilisée par la physique
    #[inline]
    pub fn signed(&self) -> f32 {
        self.speed * self.direction
    }
}

/// Décor animé : ciel, vent, horloge jour/nuit et balise de la tour.
#[derive(Debug, Clone)]
pub struct Environment {
    pub wind: Wind,
    pub day_time: f32,
    pub day_night_cycle: bool,
    pub beacon_on: bool,
    beacon_timer: u32,

    pub stars: Vec<Star>,
    pub clouds: Vec<Cloud>,
    pub satellites: Vec<Satellite>,
    pub meteors: Vec<Meteor>,
}

impl Environment {
    pub fn new(config: &PhysicConfig, rng: &mut impl RandomSource) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(rng.range(0.0, 800.0), rng.range(300.0, 600.0)),
                brightness: rng.range(0.5, 1.0),
                twinkle_speed: rng.range(0.1, 1.0),
            })
            .collect();
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                pos: Vec2::new(rng.range(WRAP_MIN_X, WRAP_MAX_X), rng.range(200.0, 350.0)),
                speed: rng.range(0.05, 0.35),
                size: rng.range(15.0, 40.0),
                opacity: rng.range(0.4, 1.0),
            })
            .collect();
        let satellites = (0..SATELLITE_COUNT)
            .map(|_| Satellite {
                pos: Vec2::new(rng.range(0.0, 800.0), rng.range(400.0, 600.0)),
                speed: rng.range(0.1, 0.3),
                size: rng.range(5.0, 15.0),
                angle: rng.range(0.0, 360.0),
            })
            .collect();
        let meteors = (0..METEOR_COUNT).map(|_| Meteor::spawn(rng)).collect();

        Self {
            wind: Wind {
                speed: config.initial_wind_speed,
                direction: 1.0,
            },
            day_time: 0.5,
            day_night_cycle: false,
            beacon_on: false,
            beacon_timer: 0,
            stars,
            clouds,
            satellites,
            meteors,
        }
    }

    /// Étoiles, nuages, satellites et météores (avant la fumée dans l'ordre du tick)
    pub fn update_entities(&mut self, elapsed_ms: f32, rng: &mut impl RandomSource) {
        for star in self.stars.iter_mut() {
            star.brightness =
                0.5 + 0.5 * (elapsed_ms * 0.001 * star.twinkle_speed).sin().abs();
        }

        let wind = self.wind.signed();
        for cloud in self.clouds.iter_mut() {
            cloud.pos.x += cloud.speed * wind;
            if cloud.pos.x > WRAP_MAX_X || cloud.pos.x < WRAP_MIN_X {
                cloud.pos.x = if cloud.pos.x > WRAP_MAX_X {
                    WRAP_MIN_X
                } else {
                    WRAP_MAX_X
                };
                cloud.pos.y = rng.range(200.0, 350.0);
                cloud.opacity = rng.range(0.4, 1.0);
            }
            cloud.pos.y += 0.05 * (elapsed_ms * 0.001 + cloud.pos.x * 0.01).sin();
        }

        for sat in self.satellites.iter_mut() {
            sat.pos.x += sat.speed;
            sat.angle += 1.0;
            if sat.pos.x > WRAP_MAX_X {
                sat.pos.x = WRAP_MIN_X;
                sat.pos.y = rng.range(400.0, 600.0);
            }
        }

        for meteor in self.meteors.iter_mut() {
            meteor.pos.x += meteor.speed;
            meteor.pos.y -= meteor.speed * 0.5;
            meteor.trail.push_front(meteor.pos);
            meteor.trail.truncate(METEOR_TRAIL_LEN);

            if meteor.pos.x > WRAP_MAX_X || meteor.pos.y < WRAP_MIN_X {
                meteor.pos = Vec2::new(rng.range(0.0, 800.0), rng.range(500.0, 600.0));
                meteor.trail = Meteor::initial_trail(meteor.pos);
            }
        }
    }

    /// Horloge jour/nuit, balise, et changement de vent occasionnel (fin de tick).
    /// Retourne le nouveau vent s'il a changé.
    pub fn advance_clock(
        &mut self,
        config: &PhysicConfig,
        rng: &mut impl RandomSource,
    ) -> Option<Wind> {
        if self.day_night_cycle {
            self.day_time += DAY_CLOCK_STEP;
            if self.day_time > 1.0 {
                self.day_time = 0.0;
            }
        }

        self.beacon_timer += 1;
        if self.beacon_timer >= BEACON_PERIOD_TICKS {
            self.beacon_on = !self.beacon_on;
            self.beacon_timer = 0;
        }

        if rng.chance(config.wind_change_chance) {
            self.wind.direction = -self.wind.direction;
            self.wind.speed = rng.range(config.wind_min_speed, config.wind_max_speed);
            return Some(self.wind);
        }
        None
    }

    pub fn toggle_day_night(&mut self) -> bool {
        self.day_night_cycle = !self.day_night_cycle;
        self.day_night_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic_engine::random::ConstantRandom;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn entity_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let env = Environment::new(&PhysicConfig::default(), &mut rng);
        assert_eq!(env.stars.len(), 300);
        assert_eq!(env.clouds.len(), 8);
        assert_eq!(env.satellites.len(), 3);
        assert_eq!(env.meteors.len(), 2);
        assert!(env.meteors.iter().all(|m| m.trail.len() == 10));
    }

    #[test]
    fn beacon_toggles_every_15_ticks() {
        let config = PhysicConfig::default();
        let mut rng = ConstantRandom::new(0.5);
        let mut env = Environment::new(&config, &mut rng);
        for _ in 0..14 {
            env.advance_clock(&config, &mut rng);
        }
        assert!(!env.beacon_on);
        env.advance_clock(&config, &mut rng);
        assert!(env.beacon_on);
    }

    #[test]
    fn wind_flip_keeps_speed_in_range() {
        let config = PhysicConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut env = Environment::new(&config, &mut rng);
        let mut flips = 0;
        for _ in 0..20_000 {
            if let Some(wind) = env.advance_clock(&config, &mut rng) {
                flips += 1;
                assert!(wind.speed >= 0.05 && wind.speed < 0.15);
                assert!(wind.direction.abs() == 1.0);
            }
        }
        assert!(flips > 0);
    }

    #[test]
    fn day_clock_wraps() {
        let config = PhysicConfig::default();
        let mut rng = ConstantRandom::new(0.5);
        let mut env = Environment::new(&config, &mut rng);
        env.advance_clock(&config, &mut rng);
        assert_eq!(env.day_time, 0.5);

        env.toggle_day_night();
        env.day_time = 0.99995;
        env.advance_clock(&config, &mut rng);
        assert_eq!(env.day_time, 0.0);
    }

    #[test]
    fn meteor_trail_stays_bounded() {
        let config = PhysicConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut env = Environment::new(&config, &mut rng);
        for tick in 0..5000 {
            env.update_entities(tick as f32 * 16.0, &mut rng);
        }
        assert!(env.meteors.iter().all(|m| m.trail.len() <= 10));
        assert!(env
            .clouds
            .iter()
            .all(|c| c.pos.x >= WRAP_MIN_X && c.pos.x <= WRAP_MAX_X));
    }
}
