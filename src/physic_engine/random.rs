use rand::Rng;

/// Source d'aléa injectée dans la simulation.
///
/// Toute variation visuelle (jitter des particules, couleurs, inclinaison au
/// largage) passe par ce trait, ce qui permet aux tests de fournir une séquence
/// déterministe. N'importe quel `rand::Rng` l'implémente.
pub trait RandomSource {
    /// Tirage uniforme dans `[low, high)`. Retourne `low` si l'intervalle est vide.
    fn range(&mut self, low: f32, high: f32) -> f32;

    /// `true` avec une probabilité `p`
    fn chance(&mut self, p: f32) -> bool;

    /// Tirage uniforme dans `[-half_width, half_width)`
    fn spread(&mut self, half_width: f32) -> f32 {
        self.range(-half_width, half_width)
    }
}

impl<R: Rng> RandomSource for R {
    fn range(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.random_range(low..high)
    }

    fn chance(&mut self, p: f32) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.random_bool(p as f64)
    }
}

/// Source constante : chaque tirage retourne la même fraction de l'intervalle.
///
/// `chance(p)` vaut `fraction < p`, donc `ConstantRandom::new(0.5)` ne déclenche
/// jamais la panne aléatoire (p = 0.0002) mais ne produit pas non plus de
/// traînée de fumée à faible probabilité.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRandom {
    pub fraction: f32,
}

impl ConstantRandom {
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }
}

impl Default for ConstantRandom {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl RandomSource for ConstantRandom {
    fn range(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        low + (high - low) * self.fraction
    }

    fn chance(&mut self, p: f32) -> bool {
        self.fraction < p
    }
}
