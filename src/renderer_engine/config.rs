use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Période (en frames) du résumé télémétrique quand les stats sont affichées
    pub stats_interval_frames: u64,
    /// Nombre maximum de points envoyés au GPU par frame
    pub max_points: usize,
    pub point_scale: f32,
    pub day_sky: [f32; 3],
    pub night_sky: [f32; 3],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            stats_interval_frames: 60,
            max_points: 20_000,
            point_scale: 1.0,
            day_sky: [0.53, 0.81, 0.92],
            night_sky: [0.02, 0.02, 0.08],
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Couleur du ciel pour une heure du jour dans [0, 1] (0.5 = midi)
    pub fn sky_color(&self, day_time: f32) -> [f32; 3] {
        let daylight = 1.0 - (day_time - 0.5).abs() * 2.0;
        let t = daylight.clamp(0.0, 1.0);
        std::array::from_fn(|i| self.night_sky[i] + (self.day_sky[i] - self.night_sky[i]) * t)
    }
}
