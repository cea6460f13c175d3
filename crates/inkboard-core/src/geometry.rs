//! Pure geometry helpers for axis-aligned boxes, corners and rotation.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A corner of an axis-aligned box.
///
/// The numeric index matches the handle order used by the interaction layer:
/// 0 = top-left, 1 = top-right, 2 = bottom-left, 3 = bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in index order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Corner for a handle index, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }

    /// Whether this corner drives the left edge (otherwise the right edge).
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Whether this corner drives the top edge (otherwise the bottom edge).
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Mirror across the vertical axis (left <-> right).
    pub fn flip_horizontal(self) -> Self {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
        }
    }

    /// Mirror across the horizontal axis (top <-> bottom).
    pub fn flip_vertical(self) -> Self {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::BottomRight => Corner::TopRight,
        }
    }

    /// Position of this corner on a box.
    pub fn point_of(self, rect: Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(rect.x0, rect.y0),
            Corner::TopRight => Point::new(rect.x1, rect.y0),
            Corner::BottomLeft => Point::new(rect.x0, rect.y1),
            Corner::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }
}

/// Swap coordinates so that `x0 <= x1` and `y0 <= y1`.
pub fn normalize(rect: Rect) -> Rect {
    Rect::new(
        rect.x0.min(rect.x1),
        rect.y0.min(rect.y1),
        rect.x0.max(rect.x1),
        rect.y0.max(rect.y1),
    )
}

/// Box spanned by two arbitrary corner points.
pub fn from_points(a: Point, b: Point) -> Rect {
    normalize(Rect::new(a.x, a.y, b.x, b.y))
}

/// Whether a box has both width and height equal to zero.
pub fn is_point_like(rect: Rect) -> bool {
    rect.width() == 0.0 && rect.height() == 0.0
}

/// Whether all four coordinates are finite.
pub fn is_finite(rect: Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}

/// Edge-inclusive containment test. Boxes with zero area contain nothing.
pub fn contains(rect: Rect, point: Point) -> bool {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return false;
    }
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}

/// Move the two edges adjacent to `corner` by `delta`, then normalize.
///
/// Returns the new box together with the corner that now sits where the
/// dragged corner is, so a continuing drag keeps moving the same visual
/// corner after the box inverts.
pub fn resize_corner(rect: Rect, corner: Corner, delta: Vec2) -> (Rect, Corner) {
    let mut r = rect;
    if corner.is_left() {
        r.x0 += delta.x;
    } else {
        r.x1 += delta.x;
    }
    if corner.is_top() {
        r.y0 += delta.y;
    } else {
        r.y1 += delta.y;
    }

    let mut active = corner;
    if r.x0 > r.x1 {
        std::mem::swap(&mut r.x0, &mut r.x1);
        active = active.flip_horizontal();
    }
    if r.y0 > r.y1 {
        std::mem::swap(&mut r.y0, &mut r.y1);
        active = active.flip_vertical();
    }
    (r, active)
}

/// Wrap an angle into `(-PI, PI]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI { wrapped + 2.0 * PI } else { wrapped }
}

/// Signed angle that turns `from` onto `to`, wrapped into `(-PI, PI]`.
pub fn angle_between(from: Vec2, to: Vec2) -> f64 {
    wrap_angle(to.atan2() - from.atan2())
}

/// Rotate `point` by `angle` radians around `center`.
pub fn rotate_about(point: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Point::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}
