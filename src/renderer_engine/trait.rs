use crate::physic_engine::Scene;

pub trait RendererEngine {
    /// Dessine (ou résume) une frame à partir de l'état courant.
    /// Retourne le nombre de particules prises en compte.
    fn render_frame(&mut self, scene: &Scene<'_>) -> usize;

    fn set_window_size(&mut self, width: i32, height: i32);

    fn close(&mut self) {}
}
