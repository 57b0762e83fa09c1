use std::fmt;

use anyhow::{bail, Result};

/// Touches reconnues par la simulation, indépendantes du backend de fenêtrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Space,
    Escape,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Parse un nom de touche : `space`, `esc`, `left`, `right`, `up`, `down`, ou un caractère.
    pub fn parse(name: &str) -> Result<Self> {
        let key = match name {
            "space" => Key::Space,
            "esc" | "escape" => Key::Escape,
            "left" => Key::Left,
            "right" => Key::Right,
            "up" => Key::Up,
            "down" => Key::Down,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => bail!("unknown key name: {name:?}"),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "'{c}'"),
            Key::Space => f.write_str("Space"),
            Key::Escape => f.write_str("Esc"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
        }
    }
}

/// Événements délivrés par un `WindowEngine`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
    Resized(i32, i32),
}
