//! Host seam for relative drags.
//!
//! A host provides two things: a global event target that delivers pointer
//! events regardless of where the pointer is ([`DragHost`]), and the element
//! whose geometry defines the gesture ([`DragSurface`]).

use super::types::{PointerEvent, PointerEventKind, PointerId};
use reldrag_graphics::Rect;
use std::rc::Rc;

/// Callback invoked for every pointer event of the kind it was registered for.
pub type PointerListener = Rc<dyn Fn(&PointerEvent)>;

/// Handle returned by [`DragHost::add_pointer_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global pointer event target, the equivalent of `window`.
///
/// Hosts must tolerate listeners being added or removed while a listener is
/// running.
pub trait DragHost {
    type Surface: DragSurface;

    fn add_pointer_listener(&self, kind: PointerEventKind, listener: PointerListener) -> ListenerId;

    /// Removing an unknown or already removed listener is a no-op.
    fn remove_pointer_listener(&self, id: ListenerId);
}

/// The element a drag is bound to.
///
/// Pointer capture is best-effort: both capture calls report success as a
/// `bool` and callers carry on regardless of the answer.
pub trait DragSurface {
    /// Bounding box in client coordinates.
    fn bounds(&self) -> Rect;

    fn try_set_pointer_capture(&self, pointer: PointerId) -> bool;

    fn try_release_pointer_capture(&self, pointer: PointerId) -> bool;
}

impl<S: DragSurface + ?Sized> DragSurface for Rc<S> {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn try_set_pointer_capture(&self, pointer: PointerId) -> bool {
        (**self).try_set_pointer_capture(pointer)
    }

    fn try_release_pointer_capture(&self, pointer: PointerId) -> bool {
        (**self).try_release_pointer_capture(pointer)
    }
}
