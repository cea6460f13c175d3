//! Inkboard Core Library
//!
//! Platform-agnostic shape-editing engine for the inkboard whiteboard:
//! an ordered shape document, a pan/zoom viewport, linear undo/redo, and an
//! interaction controller that turns pointer and key events into edits.

pub mod config;
pub mod controller;
pub mod document;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod input;
pub mod render;
pub mod selection;
pub mod shapes;
pub mod tools;
pub mod viewport;

pub use config::{ConfigError, EngineConfig};
pub use controller::{Interaction, InteractionMode};
pub use document::{Document, ShapeList};
pub use engine::EngineState;
pub use geometry::Corner;
pub use history::History;
pub use input::{InputEvent, Key, Modifiers};
pub use render::{RenderSnapshot, ShapeView};
pub use selection::{Handle, HandleKind};
pub use shapes::{FillColor, ImageData, ImageFormat, Shape, ShapeId, ShapeKind};
pub use tools::{Command, Tool};
pub use viewport::Viewport;
