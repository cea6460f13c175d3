//! Engine state: the document, view, history and interaction in one place.

use crate::config::{ConfigError, EngineConfig};
use crate::controller::{self, Interaction};
use crate::document::Document;
use crate::history::History;
use crate::input::{InputEvent, Key, Modifiers};
use crate::render::RenderSnapshot;
use crate::shapes::{FillColor, ImageData, ShapeId, ShapeKind};
use crate::tools::Tool;
use crate::viewport::Viewport;
use kurbo::{Point, Rect, Size};

/// Everything an editor session needs.
///
/// Every public operation that changes the document commits exactly one
/// history entry, or none when it changed nothing.
#[derive(Debug, Clone)]
pub struct EngineState {
    /// The document being edited.
    pub document: Document,
    /// View transform.
    pub viewport: Viewport,
    /// Undo/redo entries.
    pub history: History,
    /// Transient gesture state.
    pub interaction: Interaction,
    config: EngineConfig,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Create an engine with the default configuration and an empty document.
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Create an engine from a configuration, validating it first.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let viewport = Viewport::new(Size::new(config.viewport_width, config.viewport_height))
            .with_scale_limits(config.min_scale, config.max_scale)
            .with_zoom_factor(config.zoom_factor);
        Self {
            document: Document::new(),
            viewport,
            history: History::new().with_limit(config.history_limit),
            interaction: Interaction::new(config.default_fill),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Feed one input event to the interaction controller.
    pub fn handle_event(&mut self, event: InputEvent) {
        controller::handle_event(self, event);
    }

    pub fn pointer_down(&mut self, position: Point, modifiers: Modifiers) {
        controller::pointer_down(self, position, modifiers);
    }

    pub fn pointer_move(&mut self, position: Point) {
        controller::pointer_move(self, position);
    }

    pub fn pointer_up(&mut self, position: Point) {
        controller::pointer_up(self, position);
    }

    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) {
        controller::key_down(self, key, modifiers);
    }

    pub fn key_up(&mut self, key: &Key) {
        controller::key_up(self, key);
    }

    /// Returns whether the zoom level changed.
    pub fn wheel(&mut self, position: Point, delta: f64) -> bool {
        controller::wheel(self, position, delta)
    }

    /// Abort the gesture in progress, if any, restoring the document.
    pub fn cancel(&mut self) {
        controller::cancel(self);
    }

    fn commit(&mut self) {
        self.history.commit(&self.document);
    }

    /// Step back one history entry. Any running gesture is cancelled first.
    pub fn undo(&mut self) -> bool {
        self.cancel();
        match self.history.undo() {
            Some(entry) => {
                self.document.restore(entry);
                true
            }
            None => false,
        }
    }

    /// Step forward one history entry. Any running gesture is cancelled first.
    pub fn redo(&mut self) -> bool {
        self.cancel();
        match self.history.redo() {
            Some(entry) => {
                self.document.restore(entry);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Add a shape with the given box (canvas coordinates).
    pub fn add_shape(&mut self, kind: ShapeKind, fill: FillColor, bounds: Rect) -> Option<ShapeId> {
        self.cancel();
        let id = self.document.add_shape(kind, fill, bounds).map(|s| s.id())?;
        self.commit();
        Some(id)
    }

    /// Insert an image shape covering `bounds` (canvas coordinates).
    pub fn insert_image(&mut self, image: ImageData, bounds: Rect) -> Option<ShapeId> {
        let fill = self.interaction.active_fill;
        self.add_shape(ShapeKind::Image { image }, fill, bounds)
    }

    pub fn delete_shape(&mut self, id: ShapeId) -> bool {
        self.cancel();
        if self.document.delete_shape(id).is_none() {
            return false;
        }
        self.commit();
        true
    }

    /// Delete the selected shape, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.document.selected() {
            Some(id) => self.delete_shape(id),
            None => false,
        }
    }

    pub fn bring_to_front(&mut self, id: ShapeId) -> bool {
        self.cancel();
        if !self.document.bring_to_front(id) {
            return false;
        }
        self.commit();
        true
    }

    pub fn set_fill_color(&mut self, id: ShapeId, fill: FillColor) -> bool {
        self.cancel();
        if !self.document.set_fill_color(id, fill) {
            return false;
        }
        self.commit();
        true
    }

    /// Set a shape's corner radius, as a percentage clamped to `[0, 50]`.
    pub fn set_corner_radius(&mut self, id: ShapeId, percent: f64) -> bool {
        self.cancel();
        if !self.document.set_corner_radius(id, percent) {
            return false;
        }
        self.commit();
        true
    }

    /// Remove every shape. Recorded as one undoable entry.
    pub fn clear(&mut self) {
        self.cancel();
        self.document.clear();
        self.commit();
        log::debug!("Cleared document");
    }

    pub fn tool(&self) -> Tool {
        self.interaction.tool
    }

    /// Choose the kind drawn by the next drawing gesture.
    pub fn set_tool(&mut self, tool: Tool) {
        self.interaction.tool = tool;
    }

    pub fn active_fill(&self) -> FillColor {
        self.interaction.active_fill
    }

    /// Set the fill used for newly drawn shapes.
    pub fn set_active_fill(&mut self, fill: FillColor) {
        self.interaction.active_fill = fill;
    }

    /// Update the visible screen size.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport.set_size(width, height);
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    pub fn reset_pan(&mut self) {
        self.viewport.reset_pan();
    }

    /// Everything a renderer needs for the next frame.
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot::new(self)
    }
}
