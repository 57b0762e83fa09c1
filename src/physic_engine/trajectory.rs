use std::collections::VecDeque;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::Vec2;

/// Dernières positions réelles de la fusée (FIFO bornée).
#[derive(Debug, Clone, Default)]
pub struct TrajectoryHistory {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl TrajectoryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, pos: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(pos);
    }

    pub fn points(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Projection de la trajectoire à partir de l'état courant de la fusée.
///
/// Fonction pure : rejoue les règles du tick réel (poussée tant qu'il reste du
/// carburant, gravité de croisière en vol balistique, gravité de chute une fois
/// le lancement terminé) sur au plus `prediction_steps` pas, sans toucher à l'état
/// de la simulation. La projection s'arrête dès qu'un point sort de
/// `[prediction_floor_y, prediction_ceiling_y]` (ce point est inclus).
pub fn predict_trajectory(rocket: &Rocket, wind: f32, config: &PhysicConfig) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(config.prediction_steps);
    let mut pos = rocket.pos;
    let mut vy = if rocket.launching || rocket.launched || rocket.velocity != 0.0 {
        rocket.velocity
    } else {
        config.prediction_idle_velocity
    };
    let mut fuel = rocket.fuel;
    let mut launching = rocket.launching;
    let thrust = config.stage(rocket.stage).thrust;

    for _ in 0..config.prediction_steps {
        if launching && fuel > 0.0 {
            vy += thrust;
            fuel = (fuel - config.fuel_burn_rate).max(0.0);
            pos.y += vy;
            if pos.y > config.ceiling_y {
                launching = false;
            }
        } else if launching {
            vy -= config.coasting_gravity;
            pos.y += vy;
        }
        if !launching {
            vy -= config.falling_gravity;
            pos.y += vy;
        }
        pos.x += wind * 0.1;
        points.push(pos);

        if pos.y < config.prediction_floor_y || pos.y > config.prediction_ceiling_y {
            break;
        }
    }
    points
}
