//! Robot-style scripting for relative drags
//!
//! This module provides a robot-style testing API that allows tests to:
//! - Press on a fake surface and start a drag
//! - Move one or several pointers in client coordinates
//! - Release or cancel, and inspect what the callbacks received
//!
//! # Example
//!
//! ```
//! use reldrag_testing::DragRobot;
//!
//! let mut robot = DragRobot::new(100.0, 20.0);
//! robot.press_at(50.0, 10.0, 64);
//! robot.move_to(100.0, 10.0);
//! robot.release();
//!
//! assert_eq!(robot.recorder().values(), vec![128.0]);
//! assert_eq!(robot.recorder().end_count(), 1);
//! ```

use crate::fake_host::{FakeDragHost, FakeDragSurface};
use reldrag_foundation::{
    DragConfig, DragStopHandle, IntoStartValue, PointerEvent, PointerEventKind, PointerId,
    RelativeDrag,
};
use reldrag_graphics::Point;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Pointer id used when a test does not pick one.
pub const DEFAULT_POINTER: PointerId = 1;

/// Collects what a drag reported through `on_change` and `on_end`.
#[derive(Clone, Default)]
pub struct DragRecorder {
    values: Rc<RefCell<Vec<f64>>>,
    ends: Rc<Cell<usize>>,
}

impl DragRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change(&self) -> impl Fn(f64) + 'static {
        let values = Rc::clone(&self.values);
        move |value| values.borrow_mut().push(value)
    }

    pub fn on_end(&self) -> impl FnOnce() + 'static {
        let ends = Rc::clone(&self.ends);
        move || ends.set(ends.get() + 1)
    }

    pub fn values(&self) -> Vec<f64> {
        self.values.borrow().clone()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.values.borrow().last().copied()
    }

    pub fn end_count(&self) -> usize {
        self.ends.get()
    }
}

/// Drives a [`RelativeDrag`] over a [`FakeDragSurface`].
pub struct DragRobot {
    host: FakeDragHost,
    surface: FakeDragSurface,
    drag: RelativeDrag<FakeDragHost>,
    recorder: DragRecorder,
    pointer: Option<PointerId>,
    cursor: Point,
}

impl DragRobot {
    /// Robot over a surface of the given size at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_surface(FakeDragSurface::sized(width, height), DragConfig::default())
    }

    pub fn with_surface(surface: FakeDragSurface, config: DragConfig) -> Self {
        let host = FakeDragHost::new();
        let drag = RelativeDrag::with_config(host.clone(), config);
        Self {
            host,
            surface,
            drag,
            recorder: DragRecorder::new(),
            pointer: Some(DEFAULT_POINTER),
            cursor: Point::ZERO,
        }
    }

    pub fn host(&self) -> &FakeDragHost {
        &self.host
    }

    pub fn surface(&self) -> &FakeDragSurface {
        &self.surface
    }

    pub fn controller(&self) -> &RelativeDrag<FakeDragHost> {
        &self.drag
    }

    pub fn recorder(&self) -> &DragRecorder {
        &self.recorder
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging().get()
    }

    /// Pointer id used for subsequent presses and moves; `None` simulates a
    /// mouse event source without ids.
    pub fn use_pointer(&mut self, pointer: Option<PointerId>) {
        self.pointer = pointer;
    }

    fn event(&self, kind: PointerEventKind, x: f64, y: f64) -> PointerEvent {
        let event = PointerEvent::new(kind, Point::new(x, y));
        match self.pointer {
            Some(id) => event.with_id(id),
            None => event,
        }
    }

    /// Press at `(x, y)` and start a drag from `start_value`.
    pub fn press_at(&mut self, x: f64, y: f64, start_value: impl IntoStartValue) -> DragStopHandle {
        self.cursor = Point::new(x, y);
        let down = self.event(PointerEventKind::Down, x, y);
        self.drag.start(
            Some(&down),
            start_value,
            Some(self.surface.clone()),
            self.recorder.on_change(),
            self.recorder.on_end(),
        )
    }

    /// Move the robot's pointer. Returns the number of listeners that ran.
    pub fn move_to(&mut self, x: f64, y: f64) -> usize {
        self.cursor = Point::new(x, y);
        let event = self.event(PointerEventKind::Move, x, y);
        self.host.dispatch(&event)
    }

    /// Move a different pointer without touching the robot's cursor.
    pub fn move_pointer(&mut self, pointer: PointerId, x: f64, y: f64) -> usize {
        let event = PointerEvent::new(PointerEventKind::Move, Point::new(x, y)).with_id(pointer);
        self.host.dispatch(&event)
    }

    /// Move from the current cursor to `(x, y)` in `steps` equal increments.
    pub fn drag_to(&mut self, x: f64, y: f64, steps: usize) {
        let from = self.cursor;
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            self.move_to(from.x + (x - from.x) * t, from.y + (y - from.y) * t);
        }
    }

    pub fn release(&mut self) -> usize {
        let event = self.event(PointerEventKind::Up, self.cursor.x, self.cursor.y);
        self.host.dispatch(&event)
    }

    /// Release reported by another pointer.
    pub fn release_pointer(&mut self, pointer: PointerId) -> usize {
        let event = PointerEvent::new(PointerEventKind::Up, self.cursor).with_id(pointer);
        self.host.dispatch(&event)
    }

    pub fn cancel(&mut self) -> usize {
        let event = self.event(PointerEventKind::Cancel, self.cursor.x, self.cursor.y);
        self.host.dispatch(&event)
    }
}
