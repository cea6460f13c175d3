//! Normalized input events consumed by the interaction controller.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self { shift: true, ..Self::NONE }
    }

    pub fn meta() -> Self {
        Self { meta: true, ..Self::NONE }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// A keyboard key, named the way browsers report `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Shift,
    Meta,
    Control,
    Alt,
    Backspace,
    Delete,
    Escape,
    /// A printable character, lowercased.
    Char(char),
    Other(String),
}

impl Key {
    /// Parse a key name such as `"Shift"`, `"Backspace"` or `"f"`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Shift" => Key::Shift,
            "Meta" | "OS" | "Super" => Key::Meta,
            "Control" => Key::Control,
            "Alt" => Key::Alt,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }

    /// Whether this key is itself a modifier.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Shift | Key::Meta | Key::Control | Key::Alt)
    }
}

/// Pointer and keyboard events in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        position: Point,
        modifiers: Modifiers,
    },
    PointerMove {
        position: Point,
    },
    PointerUp {
        position: Point,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
    KeyUp {
        key: Key,
    },
    /// Wheel step; only the sign of `delta` matters.
    Wheel {
        position: Point,
        delta: f64,
    },
}
