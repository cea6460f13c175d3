//! The shape document: ordered shapes plus the current selection.

use crate::geometry::{self, Corner};
use crate::shapes::{FillColor, Shape, ShapeId, ShapeKind};
use kurbo::{Point, Rect, Vec2};
use std::sync::Arc;

/// Shared, immutable view of a shape list.
///
/// The document and every history entry hold one of these; an edit copies the
/// list only when it is still shared with a snapshot.
pub type ShapeList = Arc<Vec<Shape>>;

/// A canvas document containing all shapes.
///
/// Array order is z-order, back to front. Every id-keyed operation is a
/// no-op when the id is unknown.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: ShapeList,
    selected: Option<ShapeId>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Cheap handle on the current shape list.
    pub fn snapshot(&self) -> ShapeList {
        Arc::clone(&self.shapes)
    }

    /// Replace the shape list, dropping the selection if its shape is gone.
    pub fn restore(&mut self, shapes: ShapeList) {
        self.shapes = shapes;
        if let Some(id) = self.selected {
            if self.get_shape(id).is_none() {
                self.selected = None;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        let index = self.index_of(id)?;
        Arc::make_mut(&mut self.shapes).get_mut(index)
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.get_shape(id))
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }

    /// Select a shape. Returns false (and leaves the selection alone) if the
    /// id is unknown.
    pub fn select(&mut self, id: ShapeId) -> bool {
        if self.get_shape(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Add a new front-most shape and select it.
    ///
    /// The box is normalized first. A box with zero width and zero height,
    /// or with non-finite coordinates, is discarded and `None` returned.
    pub fn add_shape(&mut self, kind: ShapeKind, fill: FillColor, bounds: Rect) -> Option<&Shape> {
        if !geometry::is_finite(bounds) {
            log::warn!("Discarding shape with non-finite bounds {:?}", bounds);
            return None;
        }
        if geometry::is_point_like(bounds) {
            return None;
        }
        let shape = Shape::new(kind, fill, bounds);
        let id = shape.id;
        let shapes = Arc::make_mut(&mut self.shapes);
        shapes.push(shape);
        self.selected = Some(id);
        shapes.last()
    }

    /// Translate a shape by a canvas-space delta. A non-finite delta is
    /// ignored.
    pub fn move_shape(&mut self, id: ShapeId, delta: Vec2) -> bool {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite move {:?}", delta);
            return false;
        }
        match self.shape_mut(id) {
            Some(shape) => {
                shape.translate(delta);
                true
            }
            None => false,
        }
    }

    /// Drag one corner of a shape by a canvas-space delta.
    ///
    /// Returns the corner that continues the drag: if the box inverted, this
    /// is the mirrored corner, and later deltas of the same gesture must be
    /// applied to it. `None` if the shape does not exist or the delta is not
    /// finite.
    pub fn resize_shape_corner(&mut self, id: ShapeId, corner: Corner, delta: Vec2) -> Option<Corner> {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite resize {:?}", delta);
            return None;
        }
        let shape = self.shape_mut(id)?;
        let (bounds, active) = geometry::resize_corner(shape.bounds, corner, delta);
        shape.bounds = bounds;
        Some(active)
    }

    /// Point a shape's rotation at `pointer` (canvas coordinates).
    ///
    /// Rotation 0 means the pointer sits in the direction of the un-rotated
    /// top-right corner as seen from the center. A pointer exactly on the
    /// center, or a non-finite pointer, leaves the rotation unchanged.
    pub fn rotate_shape(&mut self, id: ShapeId, pointer: Point) -> bool {
        if !pointer.is_finite() {
            log::warn!("Ignoring non-finite rotate target {:?}", pointer);
            return false;
        }
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        let center = shape.bounds.center();
        let to_pointer = pointer - center;
        if to_pointer.hypot2() < f64::EPSILON {
            return false;
        }
        let reference = Corner::TopRight.point_of(shape.bounds) - center;
        shape.rotation = geometry::angle_between(reference, to_pointer);
        true
    }

    /// Remove a shape from the document.
    pub fn delete_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        let removed = Arc::make_mut(&mut self.shapes).remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(removed)
    }

    /// Bring a shape to the front (topmost).
    pub fn bring_to_front(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let shapes = Arc::make_mut(&mut self.shapes);
        let shape = shapes.remove(index);
        shapes.push(shape);
        true
    }

    pub fn set_fill_color(&mut self, id: ShapeId, fill: FillColor) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.fill = fill;
                true
            }
            None => false,
        }
    }

    /// Set the corner radius percentage, clamped to `[0, 50]`.
    pub fn set_corner_radius(&mut self, id: ShapeId, percent: f64) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.set_corner_radius_percent(percent);
                true
            }
            None => false,
        }
    }

    /// Topmost shape whose axis-aligned box contains `point` (canvas
    /// coordinates). Rotation is ignored.
    pub fn hit_test(&self, point: Point) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.contains(point))
    }

    /// Remove every shape and clear the selection.
    pub fn clear(&mut self) {
        self.shapes = Arc::new(Vec::new());
        self.selected = None;
    }
}
