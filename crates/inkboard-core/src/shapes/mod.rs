//! Shape definitions for the whiteboard.

mod color;
mod image;

pub use color::{ColorParseError, FillColor};
pub use image::{ImageData, ImageError, ImageFormat};

use crate::geometry;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Largest allowed corner radius, as a percentage of the shorter side.
pub const MAX_CORNER_RADIUS_PERCENT: f64 = 50.0;

/// What a shape draws as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Triangle,
    Image { image: ImageData },
}

impl ShapeKind {
    /// Short lowercase name, as used by renderers.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Image { .. } => "image",
        }
    }

    /// Whether `corner_radius_percent` affects how this kind renders.
    pub fn supports_corner_radius(&self) -> bool {
        matches!(self, ShapeKind::Rectangle | ShapeKind::Ellipse)
    }

    pub fn image(&self) -> Option<&ImageData> {
        match self {
            ShapeKind::Image { image } => Some(image),
            _ => None,
        }
    }
}

/// A drawable entity on the canvas.
///
/// The bounding box is in canvas units and stays normalized
/// (`x0 <= x1`, `y0 <= y1`) between operations. The id never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    pub(crate) kind: ShapeKind,
    pub(crate) bounds: Rect,
    pub(crate) fill: FillColor,
    pub(crate) corner_radius_percent: f64,
    /// Rotation in radians around the box center.
    #[serde(default)]
    pub(crate) rotation: f64,
}

impl Shape {
    /// Create a shape with a fresh id. `bounds` is normalized.
    pub fn new(kind: ShapeKind, fill: FillColor, bounds: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            bounds: geometry::normalize(bounds),
            fill,
            corner_radius_percent: 0.0,
            rotation: 0.0,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Bounding box in canvas coordinates (rotation not applied).
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn fill(&self) -> FillColor {
        self.fill
    }

    pub fn corner_radius_percent(&self) -> f64 {
        self.corner_radius_percent
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Axis-aligned containment; rotation is ignored.
    pub fn contains(&self, point: Point) -> bool {
        geometry::contains(self.bounds, point)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.bounds = self.bounds + delta;
    }

    pub(crate) fn set_corner_radius_percent(&mut self, percent: f64) {
        self.corner_radius_percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, MAX_CORNER_RADIUS_PERCENT)
        };
    }

    /// Corner radius in canvas units for the current box size.
    pub fn corner_radius(&self) -> f64 {
        let side = self.bounds.width().min(self.bounds.height());
        side * self.corner_radius_percent / 100.0
    }
}
