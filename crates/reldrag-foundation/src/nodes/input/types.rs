use reldrag_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

/// Identifier of a single pointer (mouse, finger or stylus), as reported by
/// the DOM `pointerId`.
pub type PointerId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// DOM event type name for this kind.
    pub fn event_type(self) -> &'static str {
        match self {
            PointerEventKind::Down => "pointerdown",
            PointerEventKind::Move => "pointermove",
            PointerEventKind::Up => "pointerup",
            PointerEventKind::Cancel => "pointercancel",
        }
    }
}

/// Pointer event in client (viewport) coordinates.
///
/// `id` is `None` for sources that do not identify pointers, such as plain
/// mouse events; sessions started from such events accept every pointer.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: Option<PointerId>,
    pub kind: PointerEventKind,
    pub position: Point,
    default_prevented: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: None,
            kind,
            position,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Ask the host to suppress its default action for this event.
    ///
    /// Platform adapters forward the flag to the native event once the
    /// handler returns.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prevent_default_is_shared_across_clones() {
        let event = PointerEvent::new(PointerEventKind::Down, Point::new(1.0, 2.0)).with_id(3);
        let copy = event.clone();
        copy.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn kinds_map_to_dom_event_types() {
        assert_eq!(PointerEventKind::Down.event_type(), "pointerdown");
        assert_eq!(PointerEventKind::Cancel.event_type(), "pointercancel");
    }
}
