use crate::camera_engine::CameraMode;

/// Contrôle manuel de la fusée (flèches), actif seulement en vol propulsé
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualControl {
    SteerLeft,
    SteerRight,
    ThrottleUp,
    ThrottleDown,
}

/// Commandes clavier de la simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartCountdown,
    Reset,
    ToggleGrid,
    ToggleTrajectory,
    /// Dump de l'état des étages puis séparation forcée
    TestSeparation,
    ToggleCameraFollow,
    ToggleDayNight,
    ZoomIn,
    ZoomOut,
    View(CameraMode),
    ToggleStats,
    AddFuel,
    SeparateStage,
    /// Bascule la caméra sur un étage largué encore en chute
    AutoSwitchCamera,
    PrintDebugInfo,
    /// Zoom cible ×1.2 (charge utile uniquement)
    PayloadZoomIn,
    /// Zoom cible ×0.8
    PayloadZoomOut,
    Manual(ManualControl),
    Quit,
}

/// Issue d'une commande appliquée au moteur physique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// Action invalide dans l'état courant, avec la raison (loggée en info)
    Ignored(&'static str),
    Quit,
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }
}
