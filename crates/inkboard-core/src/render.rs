//! Read-only frame description handed to a renderer.
//!
//! Boxes are already projected to screen space, so a renderer only has to
//! draw them. Nothing here feeds back into the engine.

use crate::engine::EngineState;
use crate::geometry;
use crate::selection::{self, Handle};
use crate::shapes::{FillColor, ImageData, Shape, ShapeId};
use crate::viewport::Viewport;
use kurbo::{Point, Rect, Vec2};
use serde::Serialize;

/// One shape, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeView<'a> {
    pub id: ShapeId,
    /// Kind name: `rectangle`, `ellipse`, `triangle` or `image`.
    pub kind: &'static str,
    /// Screen-space box, before rotation.
    pub screen_bounds: Rect,
    /// Radians, about the box center.
    pub rotation: f64,
    pub corner_radius_percent: f64,
    /// Corner radius in screen pixels.
    pub corner_radius: f64,
    pub fill: FillColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a ImageData>,
    pub selected: bool,
}

impl<'a> ShapeView<'a> {
    fn new(shape: &'a Shape, viewport: &Viewport, selected: bool) -> Self {
        Self {
            id: shape.id(),
            kind: shape.kind().name(),
            screen_bounds: selection::screen_bounds(shape, viewport),
            rotation: shape.rotation(),
            corner_radius_percent: shape.corner_radius_percent(),
            corner_radius: shape.corner_radius() * viewport.scale(),
            fill: shape.fill(),
            image: shape.kind().image(),
            selected,
        }
    }
}

/// A whole frame: shapes back to front, plus overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot<'a> {
    pub scale: f64,
    pub offset: Vec2,
    pub shapes: Vec<ShapeView<'a>>,
    /// Screen-space box of the shape being drawn.
    pub preview: Option<Rect>,
    /// Label of the held command.
    pub command: Option<&'static str>,
    /// Handles of the selected shape.
    pub handles: Vec<Handle>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl<'a> RenderSnapshot<'a> {
    pub fn new(state: &'a EngineState) -> Self {
        let viewport = &state.viewport;
        let document = &state.document;

        let shapes = document
            .shapes()
            .iter()
            .map(|shape| ShapeView::new(shape, viewport, document.is_selected(shape.id())))
            .collect();

        let handles = document
            .selected_shape()
            .map(|shape| selection::get_handles(shape, viewport, state.config().rotate_handle_offset))
            .unwrap_or_default();

        let preview = state.interaction.preview_bounds().map(|bounds| {
            geometry::from_points(
                viewport.project(Point::new(bounds.x0, bounds.y0)),
                viewport.project(Point::new(bounds.x1, bounds.y1)),
            )
        });

        Self {
            scale: viewport.scale(),
            offset: viewport.offset(),
            shapes,
            preview,
            command: state.interaction.command().map(|c| c.label()),
            handles,
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
        }
    }

    pub fn selected(&self) -> Option<&ShapeView<'a>> {
        self.shapes.iter().find(|s| s.selected)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
