use reldrag_foundation::{DragSurface, PointerId};
use reldrag_graphics::Rect;
use web_sys::Element;

/// DOM element a drag is bound to.
#[derive(Clone, Debug)]
pub struct WebDragSurface {
    element: Element,
}

impl WebDragSurface {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl From<Element> for WebDragSurface {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

impl DragSurface for WebDragSurface {
    fn bounds(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect::new(
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height(),
        )
    }

    fn try_set_pointer_capture(&self, pointer: PointerId) -> bool {
        self.element.set_pointer_capture(pointer).is_ok()
    }

    fn try_release_pointer_capture(&self, pointer: PointerId) -> bool {
        self.element.release_pointer_capture(pointer).is_ok()
    }
}
