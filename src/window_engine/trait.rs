use std::time::Duration;

use crate::input_engine::InputEvent;

/// Source d'événements et cadence des frames.
///
/// Le `Simulator` ne connaît que ce trait : la fenêtre GLFW (feature `window`)
/// et le moteur scripté headless l'implémentent de la même manière.
pub trait WindowEngine {
    /// Récupère les événements clavier/fenêtre survenus depuis la frame précédente.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Temps réel écoulé depuis la frame précédente, converti en ticks par le `Simulator`.
    fn frame_delta(&mut self) -> Duration;

    fn swap_buffers(&mut self) {}

    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn get_size(&self) -> (i32, i32);
}
