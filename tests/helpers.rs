#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rocket_launch_sim::input_engine::InputEvent;
use rocket_launch_sim::physic_engine::{
    FlightEvent, PhysicConfig, PhysicEngine, PhysicEngineLaunch, PhysicEngineTestHelpers, Scene,
};
use rocket_launch_sim::renderer_engine::RendererEngine;
use rocket_launch_sim::window_engine::WindowEngine;

/// Configuration sans aléa "métier" : pas de panne spontanée, pas de saute de vent
pub fn quiet_config() -> PhysicConfig {
    PhysicConfig {
        random_failure_chance: 0.0,
        wind_change_chance: 0.0,
        ..PhysicConfig::default()
    }
}

pub fn quiet_engine() -> PhysicEngineLaunch {
    PhysicEngineLaunch::with_seed(&quiet_config(), 42)
}

/// Moteur déjà décollé (compte à rebours sauté)
pub fn launched_engine() -> PhysicEngineLaunch {
    let mut engine = quiet_engine();
    engine.force_liftoff();
    engine
}

/// Avance de `ticks` ticks et retourne tous les événements produits
pub fn run_ticks<P: PhysicEngine>(engine: &mut P, ticks: usize) -> Vec<FlightEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        events.extend_from_slice(engine.update().events);
    }
    events
}

/// Avance jusqu'au premier événement qui satisfait `predicate` (au plus `max_ticks`)
pub fn run_until<P: PhysicEngine>(
    engine: &mut P,
    max_ticks: usize,
    predicate: impl Fn(&FlightEvent) -> bool,
) -> Option<FlightEvent> {
    for _ in 0..max_ticks {
        let result = engine.update();
        if let Some(event) = result.events.iter().find(|e| predicate(e)) {
            return Some(*event);
        }
    }
    None
}

/// Renderer qui journalise ses appels dans un log partagé
pub struct LoggingRenderer {
    pub log: Rc<RefCell<Vec<String>>>,
    pub frames: usize,
}

impl LoggingRenderer {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { log, frames: 0 }
    }
}

impl RendererEngine for LoggingRenderer {
    fn render_frame(&mut self, scene: &Scene<'_>) -> usize {
        self.frames += 1;
        if self.frames == 1 {
            self.log.borrow_mut().push("renderer.render_frame".into());
        }
        scene.particle_count()
    }

    fn set_window_size(&mut self, width: i32, height: i32) {
        self.log
            .borrow_mut()
            .push(format!("renderer.resize {width}x{height}"));
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("renderer.close".into());
    }
}

/// Fenêtre de test : `frames` frames de durée fixe, événements injectés à la première frame
pub struct FixedDeltaWindow {
    pub delta: Duration,
    pub frames_left: u32,
    pub first_events: Vec<InputEvent>,
    pub closed: bool,
}

impl FixedDeltaWindow {
    pub fn new(delta: Duration, frames: u32) -> Self {
        Self {
            delta,
            frames_left: frames,
            first_events: Vec::new(),
            closed: false,
        }
    }
}

impl WindowEngine for FixedDeltaWindow {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames_left = self.frames_left.saturating_sub(1);
        std::mem::take(&mut self.first_events)
    }

    fn frame_delta(&mut self) -> Duration {
        self.delta
    }

    fn should_close(&self) -> bool {
        self.closed || self.frames_left == 0
    }

    fn set_should_close(&mut self, value: bool) {
        self.closed = value;
    }

    fn get_size(&self) -> (i32, i32) {
        (800, 600)
    }
}
