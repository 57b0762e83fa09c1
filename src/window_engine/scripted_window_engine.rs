use std::collections::VecDeque;
use std::time::Duration;

use log::debug;

use super::r#trait::WindowEngine;
use crate::input_engine::{InputEvent, ScriptStep};

/// Fenêtre "virtuelle" pilotée par un script de touches.
///
/// Chaque frame avance d'exactement un tick (`frame_delta` = durée d'un tick),
/// ce qui rend une exécution headless entièrement déterministe.
/// La fenêtre se ferme d'elle-même quand le script est épuisé.
#[derive(Debug)]
pub struct ScriptedWindowEngine {
    steps: VecDeque<ScriptStep>,
    waiting: u32,
    frame_delta: Duration,
    size: (i32, i32),
    frames: u64,
    should_close: bool,
}

impl ScriptedWindowEngine {
    pub fn new(steps: Vec<ScriptStep>, tick: Duration) -> Self {
        Self {
            steps: steps.into(),
            waiting: 0,
            frame_delta: tick,
            size: (800, 600),
            frames: 0,
            should_close: false,
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = (width, height);
        self
    }

    /// Nombre de frames déjà servies
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn remaining_steps(&self) -> usize {
        self.steps.len()
    }
}

impl WindowEngine for ScriptedWindowEngine {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames += 1;

        if self.waiting > 0 {
            self.waiting -= 1;
            return Vec::new();
        }

        let Some(step) = self.steps.pop_front() else {
            debug!("📜 Script finished after {} frames", self.frames);
            self.should_close = true;
            return Vec::new();
        };

        match step {
            ScriptStep::Tap(key) => vec![InputEvent::Pressed(key), InputEvent::Released(key)],
            ScriptStep::Hold(key) => vec![InputEvent::Pressed(key)],
            ScriptStep::Release(key) => vec![InputEvent::Released(key)],
            // La frame courante compte dans l'attente
            ScriptStep::Wait(frames) => {
                self.waiting = frames.saturating_sub(1);
                Vec::new()
            }
        }
    }

    fn frame_delta(&mut self) -> Duration {
        self.frame_delta
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn get_size(&self) -> (i32, i32) {
        self.size
    }
}
