//! Interaction state machine: turns pointer and key events into document
//! and viewport operations, committing history at gesture boundaries.

use crate::engine::EngineState;
use crate::geometry::{self, Corner};
use crate::input::{InputEvent, Key, Modifiers};
use crate::selection::{self, HandleKind};
use crate::shapes::{FillColor, ShapeId};
use crate::tools::{Command, Tool};
use crate::viewport::Viewport;
use kurbo::{Point, Rect, Vec2};

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging out a new shape. Points are in canvas space.
    Drawing { start: Point, current: Point },
    /// Pointer is down under a command that acts on release (delete,
    /// bring to front) or on a modifier press that hit nothing.
    Pressed { command: Option<Command> },
    /// Dragging a shape. `last` is the previous screen position.
    MovingShape { id: ShapeId, last: Point },
    /// Dragging a corner handle. `corner` is remapped as the box inverts.
    ResizingCorner { id: ShapeId, corner: Corner, last: Point },
    /// Dragging the rotate handle.
    Rotating { id: ShapeId },
    /// Dragging the canvas. `last` is the previous screen position.
    Panning { last: Point },
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }
}

/// Transient interaction state. Never part of history.
#[derive(Debug, Clone)]
pub struct Interaction {
    pub(crate) mode: InteractionMode,
    /// Command of the key currently held.
    pub(crate) command: Option<Command>,
    pub(crate) held_key: Option<Key>,
    pub(crate) modifiers: Modifiers,
    /// Screen position of the last pointer-down.
    pub(crate) anchor: Option<Point>,
    /// Whether the current gesture has changed the document.
    pub(crate) mutated: bool,
    pub(crate) tool: Tool,
    pub(crate) active_fill: FillColor,
}

impl Interaction {
    pub fn new(active_fill: FillColor) -> Self {
        Self {
            mode: InteractionMode::Idle,
            command: None,
            held_key: None,
            modifiers: Modifiers::default(),
            anchor: None,
            mutated: false,
            tool: Tool::default(),
            active_fill,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn command(&self) -> Option<Command> {
        self.command
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn active_fill(&self) -> FillColor {
        self.active_fill
    }

    /// Normalized canvas box of the shape being drawn, if any.
    pub fn preview_bounds(&self) -> Option<Rect> {
        match self.mode {
            InteractionMode::Drawing { start, current } => Some(geometry::from_points(start, current)),
            _ => None,
        }
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(FillColor::default())
    }
}

/// Canvas-space distance covered by a screen drag from `from` to `to`.
fn drag_delta(viewport: &Viewport, from: Point, to: Point) -> Vec2 {
    viewport.canvas_to_screen(to) - viewport.canvas_to_screen(from)
}

/// Dispatch a normalized input event.
pub fn handle_event(state: &mut EngineState, event: InputEvent) {
    match event {
        InputEvent::PointerDown { position, modifiers } => pointer_down(state, position, modifiers),
        InputEvent::PointerMove { position } => pointer_move(state, position),
        InputEvent::PointerUp { position } => pointer_up(state, position),
        InputEvent::KeyDown { key, modifiers } => key_down(state, key, modifiers),
        InputEvent::KeyUp { key } => key_up(state, &key),
        InputEvent::Wheel { position, delta } => {
            wheel(state, position, delta);
        }
    }
}

/// Start a gesture at a screen position.
pub fn pointer_down(state: &mut EngineState, position: Point, modifiers: Modifiers) {
    if !position.is_finite() {
        log::warn!("Ignoring pointer down at {:?}", position);
        return;
    }
    if !state.interaction.mode.is_idle() {
        // A release we never saw; close the old gesture first.
        end_gesture(state, true);
    }

    state.interaction.modifiers = modifiers;
    state.interaction.anchor = Some(position);
    state.interaction.mutated = false;

    let command = state
        .interaction
        .command
        .or_else(|| Command::from_modifiers(modifiers));
    let canvas = state.viewport.screen_to_canvas(position);

    let mode = match command {
        Some(Command::PanZoom) => InteractionMode::Panning { last: position },
        Some(Command::Move) => match state.document.hit_test(canvas).map(|s| s.id()) {
            Some(id) => {
                state.document.select(id);
                InteractionMode::MovingShape { id, last: position }
            }
            None => InteractionMode::Pressed { command },
        },
        Some(_) => InteractionMode::Pressed { command },
        None => match handle_under(state, position) {
            Some((id, HandleKind::Corner(corner))) => InteractionMode::ResizingCorner {
                id,
                corner,
                last: position,
            },
            Some((id, HandleKind::Rotate)) => InteractionMode::Rotating { id },
            None => InteractionMode::Drawing {
                start: canvas,
                current: canvas,
            },
        },
    };

    log::trace!("Gesture start at {:?}: {:?}", position, mode);
    state.interaction.mode = mode;
}

/// Handle of the selected shape under a screen point.
fn handle_under(state: &EngineState, position: Point) -> Option<(ShapeId, HandleKind)> {
    let shape = state.document.selected_shape()?;
    let config = state.config();
    selection::hit_test_handles(
        shape,
        &state.viewport,
        position,
        config.handle_radius,
        config.rotate_handle_offset,
    )
    .map(|kind| (shape.id(), kind))
}

/// Continue the current gesture.
pub fn pointer_move(state: &mut EngineState, position: Point) {
    if !position.is_finite() {
        log::warn!("Ignoring pointer move to {:?}", position);
        return;
    }
    let mode = match state.interaction.mode {
        InteractionMode::Idle | InteractionMode::Pressed { .. } => return,
        InteractionMode::Drawing { start, .. } => InteractionMode::Drawing {
            start,
            current: state.viewport.screen_to_canvas(position),
        },
        InteractionMode::MovingShape { id, last } => {
            let delta = drag_delta(&state.viewport, last, position);
            if state.document.move_shape(id, delta) {
                state.interaction.mutated = true;
            }
            InteractionMode::MovingShape { id, last: position }
        }
        InteractionMode::ResizingCorner { id, corner, last } => {
            let delta = drag_delta(&state.viewport, last, position);
            let corner = match state.document.resize_shape_corner(id, corner, delta) {
                Some(next) => {
                    state.interaction.mutated = true;
                    if next != corner {
                        log::trace!("Resize corner {:?} -> {:?}", corner, next);
                    }
                    next
                }
                None => corner,
            };
            InteractionMode::ResizingCorner {
                id,
                corner,
                last: position,
            }
        }
        InteractionMode::Rotating { id } => {
            let canvas = state.viewport.screen_to_canvas(position);
            if state.document.rotate_shape(id, canvas) {
                state.interaction.mutated = true;
            }
            InteractionMode::Rotating { id }
        }
        InteractionMode::Panning { last } => {
            state.viewport.pan(position - last);
            InteractionMode::Panning { last: position }
        }
    };
    state.interaction.mode = mode;
}

/// Finish the current gesture at a screen position.
pub fn pointer_up(state: &mut EngineState, position: Point) {
    if !position.is_finite() {
        log::warn!("Pointer up at {:?}, closing gesture at last position", position);
        if !state.interaction.mode.is_idle() {
            end_gesture(state, true);
        }
        return;
    }
    pointer_move(state, position);

    let clicked = state.interaction.anchor == Some(position);
    let canvas = state.viewport.screen_to_canvas(position);

    match state.interaction.mode {
        InteractionMode::Drawing { start, .. } => {
            if clicked {
                click_select(state, canvas);
            } else {
                finish_drawing(state, start, canvas);
            }
        }
        InteractionMode::Pressed { command } => {
            let hit = state.document.hit_test(canvas).map(|s| s.id());
            match (command, hit) {
                (Some(Command::Delete), Some(id)) => {
                    state.document.delete_shape(id);
                    state.interaction.mutated = true;
                }
                (Some(Command::BringToFront), Some(id)) => {
                    if state.document.bring_to_front(id) {
                        state.interaction.mutated = true;
                    }
                }
                (Some(Command::Delete | Command::BringToFront), None) => {}
                _ => click_select(state, canvas),
            }
        }
        _ => {}
    }

    end_gesture(state, true);
}

/// Add the drawn shape spanning two canvas points.
fn finish_drawing(state: &mut EngineState, start: Point, end: Point) {
    let kind = state.interaction.tool.shape_kind();
    let fill = state.interaction.active_fill;
    let bounds = geometry::from_points(start, end);
    if state.document.add_shape(kind, fill, bounds).is_some() {
        state.interaction.mutated = true;
    }
}

fn click_select(state: &mut EngineState, canvas: Point) {
    match state.document.hit_test(canvas).map(|s| s.id()) {
        Some(id) => {
            state.document.select(id);
        }
        None => state.document.clear_selection(),
    }
}

/// Close the current gesture and return to idle.
///
/// With `commit`, a gesture that changed the document is recorded as one
/// history entry. Without it, the document is rolled back to the last
/// committed entry.
pub(crate) fn end_gesture(state: &mut EngineState, commit: bool) {
    let mode = std::mem::take(&mut state.interaction.mode);
    if state.interaction.mutated {
        if commit {
            state.history.commit(&state.document);
            log::debug!("Gesture committed: {:?}", mode);
        } else {
            state.document.restore(state.history.current());
            log::debug!("Gesture cancelled: {:?}", mode);
        }
    }
    state.interaction.mutated = false;
    state.interaction.anchor = None;
    state.interaction.modifiers = Modifiers::default();
}

/// Abort the current gesture, discarding its changes.
pub fn cancel(state: &mut EngineState) {
    if !state.interaction.mode.is_idle() {
        end_gesture(state, false);
    }
}

/// Handle a key press.
pub fn key_down(state: &mut EngineState, key: Key, modifiers: Modifiers) {
    if key == Key::Escape {
        cancel(state);
        state.interaction.command = None;
        state.interaction.held_key = None;
        return;
    }

    // Auto-repeat of the held key keeps the gesture; anything else ends it.
    if !state.interaction.mode.is_idle() && state.interaction.held_key.as_ref() != Some(&key) {
        cancel(state);
    }

    state.interaction.modifiers = modifiers;
    let command = Command::from_key(&key, modifiers);
    state.interaction.command = command;
    state.interaction.held_key = Some(key);

    match command {
        Some(Command::Delete) => {
            state.delete_selected();
        }
        Some(Command::Undo) => {
            state.undo();
        }
        Some(Command::Redo) => {
            state.redo();
        }
        _ => {}
    }
}

/// Handle a key release: the held command is dropped and a running
/// gesture is closed as if the pointer had been released at its last
/// sampled position.
pub fn key_up(state: &mut EngineState, key: &Key) {
    log::trace!("Key up: {:?}", key);
    if let InteractionMode::Drawing { start, current } = state.interaction.mode {
        finish_drawing(state, start, current);
    }
    if !state.interaction.mode.is_idle() {
        end_gesture(state, true);
    }
    state.interaction.command = None;
    state.interaction.held_key = None;
    state.interaction.modifiers = Modifiers::default();
}

/// Zoom around a screen point while the pan/zoom command is held, or meta
/// was down for the current gesture. Returns whether the scale changed.
pub fn wheel(state: &mut EngineState, position: Point, delta: f64) -> bool {
    let zooming =
        state.interaction.command == Some(Command::PanZoom) || state.interaction.modifiers.meta;
    if !zooming || !position.is_finite() {
        return false;
    }
    state.viewport.zoom_at(position, delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;

    fn down(state: &mut EngineState, x: f64, y: f64) {
        pointer_down(state, Point::new(x, y), Modifiers::default());
    }

    fn drag(state: &mut EngineState, from: (f64, f64), to: (f64, f64)) {
        down(state, from.0, from.1);
        pointer_move(state, Point::new((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0));
        pointer_up(state, Point::new(to.0, to.1));
    }

    fn press(state: &mut EngineState, name: &str) {
        key_down(state, Key::from_name(name), Modifiers::default());
    }

    fn release(state: &mut EngineState, name: &str) {
        key_up(state, &Key::from_name(name));
    }

    #[test]
    fn test_draw_commits_once() {
        let mut state = EngineState::new();
        down(&mut state, 10.0, 10.0);
        assert!(matches!(state.interaction.mode(), InteractionMode::Drawing { .. }));
        for i in 1..20 {
            pointer_move(&mut state, Point::new(10.0 + f64::from(i) * 5.0, 10.0 + f64::from(i) * 5.0));
        }
        assert_eq!(state.interaction.preview_bounds(), Some(Rect::new(10.0, 10.0, 105.0, 105.0)));
        pointer_up(&mut state, Point::new(110.0, 110.0));

        assert_eq!(state.document.len(), 1);
        assert_eq!(state.history.len(), 2);
        assert!(state.interaction.mode().is_idle());
        assert_eq!(state.interaction.preview_bounds(), None);
    }

    #[test]
    fn test_click_selects_instead_of_drawing() {
        let mut state = EngineState::new();
        drag(&mut state, (10.0, 10.0), (110.0, 110.0));
        let id = state.document.shapes()[0].id();

        down(&mut state, 300.0, 300.0);
        pointer_up(&mut state, Point::new(300.0, 300.0));
        assert_eq!(state.document.selected(), None);
        assert_eq!(state.document.len(), 1);

        down(&mut state, 50.0, 50.0);
        pointer_up(&mut state, Point::new(50.0, 50.0));
        assert_eq!(state.document.selected(), Some(id));
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_shift_drag_moves_shape() {
        let mut state = EngineState::new();
        drag(&mut state, (10.0, 10.0), (110.0, 110.0));
        let id = state.document.shapes()[0].id();

        press(&mut state, "Shift");
        drag(&mut state, (50.0, 50.0), (80.0, 70.0));
        assert_eq!(
            state.document.get_shape(id).map(Shape::bounds),
            Some(Rect::new(40.0, 30.0, 140.0, 130.0))
        );
        assert_eq!(state.history.len(), 3);
        release(&mut state, "Shift");
        assert_eq!(state.interaction.command(), None);
    }

    #[test]
    fn test_move_uses_modifiers_without_key_event() {
        let mut state = EngineState::new();
        drag(&mut state, (10.0, 10.0), (110.0, 110.0));
        let id = state.document.shapes()[0].id();

        pointer_down(&mut state, Point::new(50.0, 50.0), Modifiers::shift());
        pointer_up(&mut state, Point::new(60.0, 50.0));
        assert_eq!(
            state.document.get_shape(id).map(Shape::bounds),
            Some(Rect::new(20.0, 10.0, 120.0, 110.0))
        );
    }

    #[test]
    fn test_move_delta_is_scaled() {
        let mut state = EngineState::new();
        drag(&mut state, (300.0, 200.0), (500.0, 400.0));
        let id = state.document.shapes()[0].id();
        state.viewport.zoom_at(Point::new(400.0, 300.0), 1.0);
        let scale = state.viewport.scale();

        press(&mut state, "Shift");
        drag(&mut state, (400.0, 300.0), (400.0 + 10.0 * scale, 300.0));
        let bounds = state.document.get_shape(id).unwrap().bounds();
        assert!((bounds.x0 - 310.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_via_handle_remaps_corner() {
        let mut state = EngineState::new();
        drag(&mut state, (100.0, 100.0), (200.0, 200.0));
        let id = state.document.shapes()[0].id();

        down(&mut state, 100.0, 100.0);
        assert!(matches!(
            state.interaction.mode(),
            InteractionMode::ResizingCorner { corner: Corner::TopLeft, .. }
        ));
        pointer_move(&mut state, Point::new(250.0, 100.0));
        assert!(matches!(
            state.interaction.mode(),
            InteractionMode::ResizingCorner { corner: Corner::TopRight, .. }
        ));
        pointer_up(&mut state, Point::new(240.0, 100.0));

        assert_eq!(
            state.document.get_shape(id).map(Shape::bounds),
            Some(Rect::new(200.0, 100.0, 240.0, 200.0))
        );
        assert_eq!(state.history.len(), 3);
    }

    #[test]
    fn test_rotate_via_handle() {
        let mut state = EngineState::new();
        drag(&mut state, (100.0, 100.0), (200.0, 200.0));
        let id = state.document.shapes()[0].id();

        let handle = selection::get_handles(
            state.document.get_shape(id).unwrap(),
            &state.viewport,
            state.config().rotate_handle_offset,
        )
        .into_iter()
        .find(|h| h.kind == HandleKind::Rotate)
        .unwrap();

        pointer_down(&mut state, handle.position, Modifiers::default());
        assert_eq!(state.interaction.mode(), InteractionMode::Rotating { id });
        pointer_up(&mut state, Point::new(250.0, 250.0));

        let rotation = state.document.get_shape(id).unwrap().rotation();
        assert!((rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        assert_eq!(state.history.len(), 3);
    }

    #[test]
    fn test_meta_drag_pans_without_commit() {
        let mut state = EngineState::new();
        press(&mut state, "Meta");
        drag(&mut state, (10.0, 10.0), (40.0, 60.0));
        assert_eq!(state.viewport.offset(), Vec2::new(30.0, 50.0));
        assert_eq!(state.history.len(), 1);
        assert!(state.document.is_empty());
    }

    #[test]
    fn test_wheel_needs_zoom_command() {
        let mut state = EngineState::new();
        assert!(!wheel(&mut state, Point::new(10.0, 10.0), 1.0));
        press(&mut state, "Meta");
        assert!(wheel(&mut state, Point::new(10.0, 10.0), 1.0));
        release(&mut state, "Meta");
        assert!(!wheel(&mut state, Point::new(10.0, 10.0), 1.0));
    }

    #[test]
    fn test_delete_key_and_click() {
        let mut state = EngineState::new();
        drag(&mut state, (0.0, 0.0), (50.0, 50.0));
        drag(&mut state, (100.0, 0.0), (150.0, 50.0));
        assert_eq!(state.document.len(), 2);

        // The key removes the selected (last drawn) shape at once.
        press(&mut state, "Backspace");
        assert_eq!(state.document.len(), 1);
        // Clicking another shape while held removes it too.
        down(&mut state, 25.0, 25.0);
        pointer_up(&mut state, Point::new(25.0, 25.0));
        assert!(state.document.is_empty());
        release(&mut state, "Backspace");
        assert_eq!(state.history.len(), 5);
    }

    #[test]
    fn test_front_key_click_raises_shape() {
        let mut state = EngineState::new();
        drag(&mut state, (0.0, 0.0), (100.0, 100.0));
        drag(&mut state, (50.0, 50.0), (150.0, 150.0));
        let first = state.document.shapes()[0].id();

        press(&mut state, "f");
        down(&mut state, 20.0, 20.0);
        pointer_up(&mut state, Point::new(20.0, 20.0));
        release(&mut state, "f");

        let hit = state.document.hit_test(Point::new(75.0, 75.0)).map(Shape::id);
        assert_eq!(hit, Some(first));
    }

    #[test]
    fn test_unrelated_key_cancels_drag() {
        let mut state = EngineState::new();
        drag(&mut state, (10.0, 10.0), (110.0, 110.0));
        let id = state.document.shapes()[0].id();

        press(&mut state, "Shift");
        down(&mut state, 50.0, 50.0);
        pointer_move(&mut state, Point::new(90.0, 50.0));
        // Auto-repeat of the held key does not interrupt.
        press(&mut state, "Shift");
        assert!(matches!(state.interaction.mode(), InteractionMode::MovingShape { .. }));

        press(&mut state, "a");
        assert!(state.interaction.mode().is_idle());
        assert_eq!(
            state.document.get_shape(id).map(Shape::bounds),
            Some(Rect::new(10.0, 10.0, 110.0, 110.0))
        );
        // The rest of the drag is ignored.
        pointer_move(&mut state, Point::new(120.0, 50.0));
        pointer_up(&mut state, Point::new(120.0, 50.0));
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_escape_cancels_drawing() {
        let mut state = EngineState::new();
        down(&mut state, 10.0, 10.0);
        pointer_move(&mut state, Point::new(60.0, 60.0));
        press(&mut state, "Escape");
        assert!(state.interaction.mode().is_idle());
        pointer_up(&mut state, Point::new(60.0, 60.0));
        assert!(state.document.is_empty());
    }

    #[test]
    fn test_key_up_ends_move_with_commit() {
        let mut state = EngineState::new();
        drag(&mut state, (10.0, 10.0), (110.0, 110.0));
        let id = state.document.shapes()[0].id();

        press(&mut state, "Shift");
        down(&mut state, 50.0, 50.0);
        pointer_move(&mut state, Point::new(70.0, 50.0));
        release(&mut state, "Shift");
        assert!(state.interaction.mode().is_idle());
        assert_eq!(state.history.len(), 3);

        pointer_move(&mut state, Point::new(100.0, 50.0));
        pointer_up(&mut state, Point::new(100.0, 50.0));
        assert_eq!(
            state.document.get_shape(id).map(Shape::bounds),
            Some(Rect::new(30.0, 10.0, 130.0, 110.0))
        );
    }

    #[test]
    fn test_key_up_mid_draw_keeps_shape() {
        let mut state = EngineState::new();
        press(&mut state, "a");
        down(&mut state, 10.0, 10.0);
        pointer_move(&mut state, Point::new(100.0, 100.0));
        release(&mut state, "a");
        assert!(state.interaction.mode().is_idle());

        pointer_up(&mut state, Point::new(100.0, 100.0));
        assert_eq!(state.document.len(), 1);
        assert_eq!(state.document.shapes()[0].bounds(), Rect::new(10.0, 10.0, 100.0, 100.0));
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_pointer_modifiers_do_not_outlive_gesture() {
        let mut state = EngineState::new();
        pointer_down(&mut state, Point::new(10.0, 10.0), Modifiers::meta());
        assert!(wheel(&mut state, Point::new(100.0, 100.0), 1.0));
        pointer_up(&mut state, Point::new(40.0, 40.0));
        assert_eq!(state.interaction.modifiers(), Modifiers::default());

        let scale = state.viewport.scale();
        assert!(!wheel(&mut state, Point::new(100.0, 100.0), 1.0));
        assert_eq!(state.viewport.scale(), scale);
    }

    #[test]
    fn test_non_finite_pointer_keeps_shape() {
        let mut state = EngineState::new();
        drag(&mut state, (0.0, 0.0), (50.0, 50.0));
        let id = state.document.shapes()[0].id();

        press(&mut state, "Shift");
        down(&mut state, 25.0, 25.0);
        pointer_move(&mut state, Point::new(35.0, 25.0));
        pointer_move(&mut state, Point::new(f64::NAN, 25.0));
        pointer_up(&mut state, Point::new(f64::NAN, 25.0));
        release(&mut state, "Shift");

        let bounds = state.document.get_shape(id).map(Shape::bounds).unwrap();
        assert_eq!(bounds, Rect::new(10.0, 0.0, 60.0, 50.0));
        assert!(bounds.is_finite());
        assert!(state.interaction.mode().is_idle());

        pointer_down(&mut state, Point::new(f64::INFINITY, 0.0), Modifiers::default());
        assert!(state.interaction.mode().is_idle());
        assert!(!wheel(&mut state, Point::new(f64::NAN, 0.0), 1.0));
    }

    #[test]
    fn test_undo_redo_keys() {
        let mut state = EngineState::new();
        drag(&mut state, (10.0, 10.0), (110.0, 110.0));

        key_down(&mut state, Key::Char('z'), Modifiers::meta());
        assert!(state.document.is_empty());
        key_up(&mut state, &Key::Char('z'));

        let meta_shift = Modifiers { meta: true, shift: true, ..Modifiers::NONE };
        key_down(&mut state, Key::Char('z'), meta_shift);
        assert_eq!(state.document.len(), 1);
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut state = EngineState::new();
        for event in [
            InputEvent::PointerDown { position: Point::new(0.0, 0.0), modifiers: Modifiers::default() },
            InputEvent::PointerMove { position: Point::new(20.0, 20.0) },
            InputEvent::PointerUp { position: Point::new(40.0, 30.0) },
        ] {
            handle_event(&mut state, event);
        }
        assert_eq!(
            state.document.shapes()[0].bounds(),
            Rect::new(0.0, 0.0, 40.0, 30.0)
        );
    }
}
