//! Selection handles for the selected shape.
//!
//! Handles live in screen space so their hit area does not shrink or grow
//! with zoom.

use crate::geometry::{self, Corner};
use crate::shapes::Shape;
use crate::viewport::Viewport;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Type of selection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Corner handle for resizing.
    Corner(Corner),
    /// Rotation handle, just beyond the top-right corner.
    Rotate,
}

/// A selection handle with its position and type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    /// Position in screen coordinates.
    pub position: Point,
    pub kind: HandleKind,
}

impl Handle {
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a screen point lies within `radius` of this handle.
    pub fn hit_test(&self, point: Point, radius: f64) -> bool {
        (point - self.position).hypot2() <= radius * radius
    }
}

/// Screen-space box of a shape (rotation not applied).
pub fn screen_bounds(shape: &Shape, viewport: &Viewport) -> Rect {
    let b = shape.bounds();
    let p0 = viewport.project(Point::new(b.x0, b.y0));
    let p1 = viewport.project(Point::new(b.x1, b.y1));
    geometry::from_points(p0, p1)
}

/// Get the selection handles for a shape, in screen coordinates.
///
/// Corners follow the shape's rotation. The rotate handle sits
/// `rotate_offset` pixels further out along the center -> top-right
/// diagonal, which is the direction a rotation of 0 points at.
pub fn get_handles(shape: &Shape, viewport: &Viewport, rotate_offset: f64) -> Vec<Handle> {
    let bounds = screen_bounds(shape, viewport);
    let center = bounds.center();
    let rotation = shape.rotation();

    let mut handles: Vec<Handle> = Corner::ALL
        .iter()
        .map(|&corner| {
            let position = geometry::rotate_about(corner.point_of(bounds), center, rotation);
            Handle::new(position, HandleKind::Corner(corner))
        })
        .collect();

    let diagonal = Corner::TopRight.point_of(bounds) - center;
    let direction = if diagonal.hypot2() > f64::EPSILON {
        diagonal.normalize()
    } else {
        Vec2::new(1.0, -1.0).normalize()
    };
    let rotate_at = center + diagonal + direction * rotate_offset;
    handles.push(Handle::new(
        geometry::rotate_about(rotate_at, center, rotation),
        HandleKind::Rotate,
    ));
    handles
}

/// Find which handle (if any) is hit at the given screen point.
pub fn hit_test_handles(
    shape: &Shape,
    viewport: &Viewport,
    point: Point,
    radius: f64,
    rotate_offset: f64,
) -> Option<HandleKind> {
    get_handles(shape, viewport, rotate_offset)
        .into_iter()
        .find(|h| h.hit_test(point, radius))
        .map(|h| h.kind)
}
