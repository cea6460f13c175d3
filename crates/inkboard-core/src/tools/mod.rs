//! Drawing tools and keyboard commands.

use crate::input::{Key, Modifiers};
use crate::shapes::ShapeKind;
use serde::{Deserialize, Serialize};

/// Shape kind produced by a drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    #[default]
    Rectangle,
    Ellipse,
    Triangle,
}

impl Tool {
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            Tool::Rectangle => ShapeKind::Rectangle,
            Tool::Ellipse => ShapeKind::Ellipse,
            Tool::Triangle => ShapeKind::Triangle,
        }
    }
}

/// What the currently held key asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Drag a shape instead of drawing.
    Move,
    /// Delete the selection, or a clicked shape.
    Delete,
    /// Raise the clicked shape to the top.
    BringToFront,
    /// Drag pans the canvas, wheel zooms.
    PanZoom,
    Undo,
    Redo,
}

impl Command {
    /// Map a key press to a command.
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Option<Self> {
        match key {
            Key::Backspace | Key::Delete => Some(Command::Delete),
            Key::Shift => Some(Command::Move),
            Key::Meta => Some(Command::PanZoom),
            Key::Char('f') => Some(Command::BringToFront),
            Key::Char('z') if modifiers.meta && modifiers.shift => Some(Command::Redo),
            Key::Char('z') if modifiers.meta => Some(Command::Undo),
            _ => None,
        }
    }

    /// Command implied by modifiers alone, for pointer events that arrive
    /// without a matching key press.
    pub fn from_modifiers(modifiers: Modifiers) -> Option<Self> {
        if modifiers.meta {
            Some(Command::PanZoom)
        } else if modifiers.shift {
            Some(Command::Move)
        } else {
            None
        }
    }

    /// Short label shown while the command is active.
    pub fn label(self) -> &'static str {
        match self {
            Command::Move => "Move",
            Command::Delete => "Delete",
            Command::BringToFront => "Bring to Front",
            Command::PanZoom => "Zoom / Pan",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
        }
    }
}
