//! Viewport module for pan/zoom transforms.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Default lower zoom bound.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;
/// Default upper zoom bound.
pub const DEFAULT_MAX_SCALE: f64 = 4.0;
/// Default relative scale change per wheel step.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.05;

/// Viewport manages the view transform for the canvas.
///
/// Zoom is centered on the middle of the visible area: with zero pan, the
/// screen midpoint and the canvas point under it stay put when the scale
/// changes. Pan is an extra offset in screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current pan offset in screen pixels.
    pub(crate) offset: Vec2,
    /// Current zoom level (1.0 = 100%).
    pub(crate) scale: f64,
    /// Minimum allowed zoom level.
    pub(crate) min_scale: f64,
    /// Maximum allowed zoom level.
    pub(crate) max_scale: f64,
    /// Relative scale change applied by one zoom step.
    pub(crate) zoom_factor: f64,
    /// Visible screen area.
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl Viewport {
    /// Create a viewport of the given screen size at scale 1 and no pan.
    pub fn new(size: Size) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            size,
        }
    }

    /// Set the zoom bounds. Limits that are not finite, not positive or
    /// out of order are ignored.
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        let valid = min_scale.is_finite()
            && max_scale.is_finite()
            && min_scale > 0.0
            && min_scale <= max_scale;
        if !valid {
            log::warn!("Ignoring scale limits {}..{}", min_scale, max_scale);
            return self;
        }
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.scale = self.clamp_scale(self.scale);
        self
    }

    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        if !(zoom_factor.is_finite() && zoom_factor > 0.0) {
            log::warn!("Ignoring zoom factor {}", zoom_factor);
            return self;
        }
        self.zoom_factor = zoom_factor;
        self
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    // max/min rather than clamp: a deserialized viewport may carry
    // inverted bounds.
    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Update the visible screen size (e.g. on window resize).
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Midpoint of the visible area in screen coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Get the affine transform for rendering (canvas -> screen).
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset + self.center() * (1.0 - self.scale))
            * Affine::scale(self.scale)
    }

    /// Get the inverse transform for input handling (screen -> canvas).
    pub fn inverse_transform(&self) -> Affine {
        self.transform().inverse()
    }

    /// Convert a screen point to canvas coordinates.
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        let c = self.center();
        Point::new(
            (screen.x - self.offset.x - c.x * (1.0 - self.scale)) / self.scale,
            (screen.y - self.offset.y - c.y * (1.0 - self.scale)) / self.scale,
        )
    }

    /// Convert a canvas point to screen coordinates; the exact inverse of
    /// [`screen_to_canvas`](Self::screen_to_canvas).
    pub fn project(&self, canvas: Point) -> Point {
        let c = self.center();
        Point::new(
            canvas.x * self.scale + self.offset.x + c.x * (1.0 - self.scale),
            canvas.y * self.scale + self.offset.y + c.y * (1.0 - self.scale),
        )
    }

    /// Map a point into the pan-removed, scale-normalized drag frame.
    ///
    /// Only differences between two results are meaningful: they equal the
    /// canvas-space distance covered by the corresponding screen drag. Use
    /// [`project`](Self::project) to place canvas points on screen.
    pub fn canvas_to_screen(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.offset.x) / self.scale,
            (point.y - self.offset.y) / self.scale,
        )
    }

    /// Pan the viewport by a delta in screen pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom one step in (`direction > 0`) or out (`direction < 0`), keeping
    /// the canvas point under `anchor` fixed on screen.
    ///
    /// `direction` is clamped to `[-1, 1]`. Returns whether the scale changed.
    pub fn zoom_at(&mut self, anchor: Point, direction: f64) -> bool {
        let direction = if direction.is_nan() { 0.0 } else { direction.clamp(-1.0, 1.0) };
        let new_scale = self.clamp_scale(self.scale + direction * self.zoom_factor * self.scale);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return false;
        }

        // Anchor relative to the zoom origin (viewport midpoint).
        let relative = anchor.to_vec2() - self.center();
        let target = (relative - self.offset) / self.scale;

        self.scale = new_scale;
        self.offset = relative - target * self.scale;
        true
    }

    /// Back to 100% zoom, keeping the pan offset.
    pub fn reset_zoom(&mut self) {
        self.scale = self.clamp_scale(1.0);
    }

    /// Back to zero pan, keeping the zoom level.
    pub fn reset_pan(&mut self) {
        self.offset = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::default();
        assert_eq!(viewport.offset(), Vec2::ZERO);
        assert!((viewport.scale() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_canvas_identity() {
        let viewport = Viewport::default();
        let screen = Point::new(100.0, 200.0);
        assert_point_eq(viewport.screen_to_canvas(screen), screen);
    }

    #[test]
    fn test_screen_to_canvas_with_offset() {
        let mut viewport = Viewport::default();
        viewport.pan(Vec2::new(50.0, 100.0));
        let canvas = viewport.screen_to_canvas(Point::new(100.0, 200.0));
        assert_point_eq(canvas, Point::new(50.0, 100.0));
    }

    #[test]
    fn test_zoom_is_centered_on_midpoint() {
        let mut viewport = Viewport::new(Size::new(800.0, 600.0));
        viewport.scale = 2.0;
        // The viewport midpoint is a fixed point of the zoom.
        assert_point_eq(
            viewport.screen_to_canvas(Point::new(400.0, 300.0)),
            Point::new(400.0, 300.0),
        );
        assert_point_eq(
            viewport.screen_to_canvas(Point::new(600.0, 300.0)),
            Point::new(500.0, 300.0),
        );
    }

    #[test]
    fn test_project_roundtrip() {
        let mut viewport = Viewport::default();
        viewport.offset = Vec2::new(30.0, -20.0);
        viewport.scale = 1.5;

        let original = Point::new(123.0, 456.0);
        let canvas = viewport.screen_to_canvas(original);
        assert_point_eq(viewport.project(canvas), original);
        assert_point_eq(viewport.transform() * canvas, original);
        assert_point_eq(viewport.inverse_transform() * original, canvas);
    }

    #[test]
    fn test_canvas_to_screen_measures_drag_distance() {
        let mut viewport = Viewport::default();
        viewport.offset = Vec2::new(15.0, 40.0);
        viewport.scale = 2.0;
        let a = viewport.canvas_to_screen(Point::new(100.0, 100.0));
        let b = viewport.canvas_to_screen(Point::new(140.0, 60.0));
        assert_point_eq(Point::new(b.x - a.x, b.y - a.y), Point::new(20.0, -20.0));
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut viewport = Viewport::default();
        viewport.offset = Vec2::new(-35.0, 12.0);
        viewport.scale = 1.3;
        let anchor = Point::new(250.0, 410.0);

        for direction in [1.0, 1.0, -1.0, 1.0, -1.0, -1.0] {
            let before = viewport.screen_to_canvas(anchor);
            viewport.zoom_at(anchor, direction);
            let after = viewport.screen_to_canvas(anchor);
            assert_point_eq(before, after);
        }
    }

    #[test]
    fn test_zoom_clamp() {
        let mut viewport = Viewport::default().with_zoom_factor(0.9);
        for _ in 0..100 {
            viewport.zoom_at(Point::ZERO, -1.0);
        }
        assert!((viewport.scale() - viewport.min_scale()).abs() < f64::EPSILON);

        for _ in 0..100 {
            viewport.zoom_at(Point::ZERO, 1.0);
        }
        assert!((viewport.scale() - viewport.max_scale()).abs() < f64::EPSILON);
        assert!(!viewport.zoom_at(Point::ZERO, 1.0));
    }

    #[test]
    fn test_invalid_limits_are_ignored() {
        let viewport = Viewport::default()
            .with_scale_limits(4.0, 0.1)
            .with_scale_limits(f64::NAN, 2.0)
            .with_scale_limits(0.0, 2.0)
            .with_zoom_factor(-1.0)
            .with_zoom_factor(f64::INFINITY);
        assert_eq!(viewport.min_scale(), DEFAULT_MIN_SCALE);
        assert_eq!(viewport.max_scale(), DEFAULT_MAX_SCALE);
        assert_eq!(viewport.zoom_factor(), DEFAULT_ZOOM_FACTOR);

        let mut viewport = viewport;
        assert!(viewport.zoom_at(Point::new(400.0, 300.0), 1.0));
        assert!((viewport.scale() - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let mut viewport = Viewport::default();
        viewport.min_scale = 3.0;
        viewport.max_scale = 0.5;
        viewport.zoom_at(Point::ZERO, 1.0);
        viewport.reset_zoom();
        assert!(viewport.scale().is_finite());
    }

    #[test]
    fn test_direction_is_clamped() {
        let mut viewport = Viewport::default();
        viewport.zoom_at(Point::new(400.0, 300.0), 120.0);
        assert!((viewport.scale() - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_pan_and_resets() {
        let mut viewport = Viewport::default();
        viewport.pan(Vec2::new(10.0, 20.0));
        viewport.zoom_at(Point::new(10.0, 10.0), 1.0);
        viewport.reset_zoom();
        assert!((viewport.scale() - 1.0).abs() < f64::EPSILON);
        viewport.reset_pan();
        assert_eq!(viewport.offset(), Vec2::ZERO);
    }
}
