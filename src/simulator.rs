use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::input_engine::{CommandOutcome, HeldControls, InputEvent, KeyBindings};
use crate::log_metrics_and_fps;
use crate::physic_engine::{config::PhysicConfig, FlightEvent, PhysicEngineFull};
use crate::profiler::Profiler;
use crate::renderer_engine::RendererEngine;
use crate::window_engine::WindowEngine;

/// Nombre d'événements de vol conservés pour consultation
const FLIGHT_LOG_CAPACITY: usize = 256;

/// Boucle principale : événements → ticks fixes → rendu.
///
/// Le temps réel rapporté par la fenêtre est accumulé puis consommé par pas
/// de `tick_duration` ; au plus `max_ticks_per_frame` ticks sont simulés par frame,
/// le retard éventuel est abandonné.
pub struct Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngineFull,
    W: WindowEngine,
{
    renderer_engine: R,
    physic_engine: P,
    window_engine: W,

    bindings: KeyBindings,
    held: HeldControls,

    tick_duration: Duration,
    max_ticks_per_frame: u32,
    accumulator: Duration,

    frames: u64,
    flight_log: VecDeque<FlightEvent>,

    profiler: Profiler,
    log_interval: Duration,
    last_log: Instant,
    first_frame: bool,
}

impl<R, P, W> Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngineFull,
    W: WindowEngine,
{
    pub fn new(renderer_engine: R, physic_engine: P, window_engine: W) -> Self {
        let tick_ms = physic_engine.get_config().tick_ms;
        Self {
            renderer_engine,
            physic_engine,
            window_engine,
            bindings: KeyBindings::default(),
            held: HeldControls::default(),
            tick_duration: Duration::from_millis(tick_ms.max(1)),
            max_ticks_per_frame: 5,
            accumulator: Duration::ZERO,
            frames: 0,
            flight_log: VecDeque::with_capacity(FLIGHT_LOG_CAPACITY),
            profiler: Profiler::new(200),
            log_interval: Duration::from_secs(5),
            last_log: Instant::now(),
            first_frame: true,
        }
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_max_ticks_per_frame(mut self, max_ticks: u32) -> Self {
        self.max_ticks_per_frame = max_ticks.max(1);
        self
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.step() {}
        info!(
            "🏁 Simulation stopped after {} frames ({} ticks)",
            self.frames,
            self.physic_engine.tick_count()
        );
        Ok(())
    }

    /// Une frame complète. Retourne `false` quand la fenêtre doit se fermer.
    pub fn step(&mut self) -> bool {
        if self.window_engine.should_close() {
            return false;
        }

        for event in self.window_engine.poll_events() {
            self.handle_input(event);
        }

        // 🔹 start global frame
        let _frame_guard = self.profiler.frame();
        self.frames += 1;

        self.accumulator += self.window_engine.frame_delta();
        let mut ticks = 0u32;
        while self.accumulator >= self.tick_duration && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.tick_duration;
            ticks += 1;

            let update_result = self
                .profiler
                .profile_block("physic - update", || self.physic_engine.update());
            Self::record_flight_events(&mut self.flight_log, update_result.events);
        }
        if self.accumulator >= self.tick_duration {
            debug!(
                "⏩ Dropping {:?} of simulation backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        self.profiler.record_metric("ticks per frame", ticks);

        self.profiler.profile_block("render frame", || {
            self.profiler.record_metric(
                "total particles drawn",
                self.renderer_engine
                    .render_frame(&self.physic_engine.scene()),
            );
        });

        self.window_engine.swap_buffers();

        if self.last_log.elapsed() >= self.log_interval {
            log_metrics_and_fps!(&self.profiler);
            self.last_log = Instant::now();
        }

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        true
    }

    fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resized(w, h) => {
                self.renderer_engine.set_window_size(w, h);
                info!("🖥️ Window resized: {} x {}", w, h);
            }
            InputEvent::Pressed(key) => {
                if self.held.apply(key, true) {
                    self.physic_engine.set_held_controls(self.held);
                }
                match self.bindings.command_for(key) {
                    Some(command) => {
                        if self.physic_engine.apply_command(command) == CommandOutcome::Quit {
                            info!("👋 Quit requested");
                            self.window_engine.set_should_close(true);
                        }
                    }
                    None => debug!("Unbound key {key}"),
                }
            }
            InputEvent::Released(key) => {
                if self.held.apply(key, false) {
                    self.physic_engine.set_held_controls(self.held);
                }
            }
        }
    }

    fn record_flight_events(flight_log: &mut VecDeque<FlightEvent>, events: &[FlightEvent]) {
        for event in events {
            debug!("🛰️ {event:?}");
            if flight_log.len() >= FLIGHT_LOG_CAPACITY {
                flight_log.pop_front();
            }
            flight_log.push_back(*event);
        }
    }

    /// Recharge la configuration physique depuis un fichier TOML.
    /// Retourne `true` si la configuration a changé.
    pub fn reload_config(&mut self, path: &str) -> anyhow::Result<bool> {
        let physic_config = PhysicConfig::from_file(path)?;
        let changed = self.physic_engine.reload_config(&physic_config);
        if changed {
            self.tick_duration = Duration::from_millis(physic_config.tick_ms.max(1));
            info!("Physic config reloaded from {path}");
        }
        Ok(changed)
    }

    pub fn close(&mut self) {
        self.renderer_engine.close();
        self.physic_engine.close();
        // Window engine cleanup happens automatically when dropped
    }

    /// Événements de vol récents (les plus anciens en premier)
    pub fn flight_log(&self) -> impl Iterator<Item = &FlightEvent> {
        self.flight_log.iter()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }

    pub fn renderer_engine(&self) -> &R {
        &self.renderer_engine
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn physic_engine_mut(&mut self) -> &mut P {
        &mut self.physic_engine
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }
}
