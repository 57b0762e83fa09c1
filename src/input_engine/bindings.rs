use std::collections::HashMap;

use crate::camera_engine::CameraMode;
use crate::input_engine::command::{Command, ManualControl};
use crate::input_engine::key::Key;

/// Table touche → commande
#[derive(Debug, Clone)]
pub struct KeyBindings {
    table: HashMap<Key, Command>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            table: HashMap::new(),
        };

        bindings.bind(Key::Space, Command::StartCountdown);
        bindings.bind(Key::Escape, Command::Quit);
        bindings.bind_both('r', Command::Reset);
        bindings.bind_both('g', Command::ToggleGrid);
        // 't' et 'T' ne font pas la même chose
        bindings.bind(Key::Char('t'), Command::ToggleTrajectory);
        bindings.bind(Key::Char('T'), Command::TestSeparation);
        bindings.bind_both('c', Command::ToggleCameraFollow);
        bindings.bind_both('d', Command::ToggleDayNight);
        bindings.bind_both('s', Command::ToggleStats);
        bindings.bind_both('f', Command::AddFuel);
        bindings.bind_both('p', Command::SeparateStage);
        bindings.bind_both('a', Command::AutoSwitchCamera);
        bindings.bind_both('i', Command::PrintDebugInfo);
        bindings.bind_both('z', Command::PayloadZoomIn);
        bindings.bind_both('x', Command::PayloadZoomOut);

        for c in ['+', '='] {
            bindings.bind(Key::Char(c), Command::ZoomIn);
        }
        for c in ['-', '_'] {
            bindings.bind(Key::Char(c), Command::ZoomOut);
        }

        let views = [
            CameraMode::LaunchPad,
            CameraMode::WideView,
            CameraMode::FollowRocket,
            CameraMode::FollowStage1,
            CameraMode::FollowStage2,
        ];
        for (digit, mode) in ('1'..='5').zip(views) {
            bindings.bind(Key::Char(digit), Command::View(mode));
        }

        bindings.bind(Key::Left, Command::Manual(ManualControl::SteerLeft));
        bindings.bind(Key::Right, Command::Manual(ManualControl::SteerRight));
        bindings.bind(Key::Up, Command::Manual(ManualControl::ThrottleUp));
        bindings.bind(Key::Down, Command::Manual(ManualControl::ThrottleDown));

        bindings
    }
}

impl KeyBindings {
    pub fn bind(&mut self, key: Key, command: Command) {
        self.table.insert(key, command);
    }

    fn bind_both(&mut self, lower: char, command: Command) {
        self.bind(Key::Char(lower), command);
        self.bind(Key::Char(lower.to_ascii_uppercase()), command);
    }

    pub fn command_for(&self, key: Key) -> Option<Command> {
        self.table.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Touches de zoom maintenues (zoom continu un tick sur deux)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldControls {
    pub zoom_in: bool,
    pub zoom_out: bool,
}

impl HeldControls {
    /// Met à jour l'état à partir d'un appui/relâchement. Retourne `true` si la touche est une touche de zoom.
    pub fn apply(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::Char('+') | Key::Char('=') => {
                self.zoom_in = pressed;
                true
            }
            Key::Char('-') | Key::Char('_') => {
                self.zoom_out = pressed;
                true
            }
            _ => false,
        }
    }

    pub fn any(&self) -> bool {
        self.zoom_in || self.zoom_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.command_for(Key::Space), Some(Command::StartCountdown));
        assert_eq!(bindings.command_for(Key::Char('R')), Some(Command::Reset));
        assert_eq!(bindings.command_for(Key::Char('t')), Some(Command::ToggleTrajectory));
        assert_eq!(bindings.command_for(Key::Char('T')), Some(Command::TestSeparation));
        assert_eq!(
            bindings.command_for(Key::Char('4')),
            Some(Command::View(CameraMode::FollowStage1))
        );
        assert_eq!(bindings.command_for(Key::Char('_')), Some(Command::ZoomOut));
        assert_eq!(bindings.command_for(Key::Char('q')), None);
    }

    #[test]
    fn held_zoom_keys() {
        let mut held = HeldControls::default();
        assert!(held.apply(Key::Char('='), true));
        assert!(held.zoom_in);
        assert!(!held.apply(Key::Char('r'), true));
        held.apply(Key::Char('+'), false);
        assert!(!held.any());
    }
}
