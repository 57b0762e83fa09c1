use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Facteur de lissage exponentiel par tick (5 %)
    pub smoothing: f32,
    pub shake_decay: f32,
    pub shake_cutoff: f32,
    /// Délai avant de revenir sur la fusée après un largage (ms)
    pub revert_delay_ms: u64,

    pub home_x: f32,
    pub home_y: f32,
    pub wide_zoom: f32,

    /// Bornes du zoom automatique en suivi de fusée
    pub follow_zoom_min: f32,
    pub follow_zoom_max: f32,
    /// Bornes du zoom manuel
    pub zoom_min: f32,
    pub zoom_max: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.05,
            shake_decay: 0.9,
            shake_cutoff: 0.01,
            revert_delay_ms: 3000,
            home_x: 400.0,
            home_y: 300.0,
            wide_zoom: 0.4,
            follow_zoom_min: 0.3,
            follow_zoom_max: 2.0,
            zoom_min: 0.1,
            zoom_max: 3.0,
        }
    }
}
