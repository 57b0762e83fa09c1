use crate::input_engine::{Command, CommandOutcome, HeldControls};
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::scene::Scene;
use crate::physic_engine::types::UpdateResult;

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune aux moteurs de simulation pilotés par le `Simulator`.
/// Un appel à `update` correspond exactement à un tick fixe (16 ms par défaut) :
/// toutes les constantes physiques sont exprimées par tick, jamais par seconde.
///
/// ### Choix de conception : événements empruntés
///
/// - `update` retourne un `UpdateResult<'_>` qui **emprunte** le buffer d'événements
///   interne du moteur, plutôt qu'un `Vec` alloué à chaque tick.
/// - Le buffer est réutilisé d'un tick à l'autre : pas d'allocation en régime établi.
/// - Les événements produits par `apply_command` entre deux ticks sont rapportés
///   par le `update` suivant.
pub trait PhysicEngine {
    /// Avance la simulation d'un tick.
    fn update(&mut self) -> UpdateResult<'_>;

    /// Applique une commande clavier. Les actions invalides retournent `Ignored`.
    fn apply_command(&mut self, command: Command) -> CommandOutcome;

    /// État des touches de zoom maintenues (lu à chaque tick).
    fn set_held_controls(&mut self, held: HeldControls);

    /// Retour à l'état initial (pas de tir, carburant plein, caméra par défaut).
    fn reset(&mut self);

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.

    fn reload_config(&mut self, config: &PhysicConfig) -> bool;

    fn get_config(&self) -> &PhysicConfig;

    /// Nombre de ticks simulés depuis la création du moteur
    fn tick_count(&self) -> u64;
}

/// Accès en lecture à l'état complet, pour le rendu.
pub trait PhysicEngineView {
    fn scene(&self) -> Scene<'_>;
}

pub trait PhysicEngineFull: PhysicEngine + PhysicEngineView {}

impl<T: PhysicEngine + PhysicEngineView> PhysicEngineFull for T {}
