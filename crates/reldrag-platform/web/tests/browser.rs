#![cfg(target_arch = "wasm32")]

use reldrag_foundation::{
    DragHost, DragSurface, PointerEvent as DragEvent, PointerEventKind, PointerListener,
};
use reldrag_platform_web::{pointer_event, use_relative_drag, WebDragHost, WebDragSurface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Element, HtmlElement, PointerEvent, PointerEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn fader(width: u32, height: u32) -> Element {
    let document = window().and_then(|w| w.document()).expect("document");
    let element = document.create_element("div").expect("create div");
    let html = element.dyn_ref::<HtmlElement>().expect("html element");
    let style = html.style();
    style.set_property("position", "fixed").expect("position");
    style.set_property("left", "0px").expect("left");
    style.set_property("top", "0px").expect("top");
    style.set_property("width", &format!("{width}px")).expect("width");
    style.set_property("height", &format!("{height}px")).expect("height");
    document
        .body()
        .expect("body")
        .append_child(&element)
        .expect("append");
    element
}

fn pointer(kind: &str, x: i32, y: i32, id: i32) -> PointerEvent {
    let init = PointerEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_pointer_id(id);
    init.set_cancelable(true);
    PointerEvent::new_with_event_init_dict(kind, &init).expect("pointer event")
}

/// Give `event` a fractional `clientX`, as a high-resolution pointer would.
fn set_client_x(event: &PointerEvent, x: f64) {
    let descriptor = js_sys::Object::new();
    js_sys::Reflect::set(&descriptor, &"value".into(), &x.into()).expect("descriptor");
    js_sys::Object::define_property(event.unchecked_ref(), &"clientX".into(), &descriptor);
}

fn dispatch(event: &PointerEvent) {
    window()
        .expect("window")
        .dispatch_event(event)
        .expect("dispatch");
}

#[wasm_bindgen_test]
fn surface_reports_layout_bounds() {
    let element = fader(100, 20);
    let bounds = WebDragSurface::new(element.clone()).bounds();
    assert_eq!((bounds.width, bounds.height), (100.0, 20.0));
    element.remove();
}

#[wasm_bindgen_test]
fn drag_over_window_reports_values_and_ends() {
    let element = fader(100, 20);
    let drag = use_relative_drag().expect("window");
    let values = Rc::new(RefCell::new(Vec::new()));
    let ended = Rc::new(Cell::new(0));

    let down = pointer("pointerdown", 50, 10, 1);
    let (sink, end_sink) = (Rc::clone(&values), Rc::clone(&ended));
    let handle = drag.start(
        Some(&down),
        64,
        Some(&element),
        move |value| sink.borrow_mut().push(value),
        move || end_sink.set(end_sink.get() + 1),
    );

    assert!(down.default_prevented());
    assert!(drag.is_dragging().get());
    assert!(handle.is_active());

    dispatch(&pointer("pointermove", 75, 10, 2));
    dispatch(&pointer("pointermove", 100, 10, 1));
    dispatch(&pointer("pointerup", 100, 10, 1));
    dispatch(&pointer("pointermove", 0, 10, 1));

    assert_eq!(*values.borrow(), vec![128.0]);
    assert_eq!(ended.get(), 1);
    assert!(!drag.is_dragging().get());
    assert_eq!(drag.controller().host().listener_count(), 0);
    element.remove();
}

#[wasm_bindgen_test]
fn fractional_client_coordinates_are_not_truncated() {
    let element = fader(10, 4);
    let drag = use_relative_drag().expect("window");
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);

    let down = pointer("pointerdown", 5, 2, 1);
    set_client_x(&down, 5.0);
    drag.start(
        Some(&down),
        0,
        Some(&element),
        move |value| sink.borrow_mut().push(value),
        || {},
    );

    let moved = pointer("pointermove", 5, 2, 1);
    set_client_x(&moved, 5.6);
    assert_eq!(pointer_event(PointerEventKind::Move, &moved).position.x, 5.6);
    dispatch(&moved);

    assert_eq!(*values.borrow(), vec![8.0]);
    assert!(drag.stop());
    element.remove();
}

#[wasm_bindgen_test]
fn stop_handle_skips_on_end() {
    let element = fader(20, 100);
    let drag = use_relative_drag().expect("window");
    let ended = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ended);

    let handle = drag.start(
        Some(&pointer("pointerdown", 10, 80, 1)),
        0,
        Some(&element),
        |_| {},
        move || flag.set(true),
    );
    assert!(handle.stop());
    dispatch(&pointer("pointercancel", 10, 80, 1));

    assert!(!ended.get());
    assert!(!drag.is_dragging().get());
    element.remove();
}

#[wasm_bindgen_test]
fn missing_element_is_a_no_op() {
    let drag = use_relative_drag().expect("window");
    let down = pointer("pointerdown", 0, 0, 1);
    let handle = drag.start(Some(&down), 0, None, |_| {}, || {});

    assert!(handle.is_inert());
    assert!(!down.default_prevented());
    assert!(!drag.is_dragging().get());
}

#[wasm_bindgen_test]
fn dropping_host_removes_window_listeners() {
    let host = WebDragHost::for_window().expect("window");
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let listener: PointerListener = Rc::new(move |_: &DragEvent| counter.set(counter.get() + 1));
    host.add_pointer_listener(PointerEventKind::Move, listener);

    dispatch(&pointer("pointermove", 1, 1, 1));
    drop(host);
    dispatch(&pointer("pointermove", 2, 1, 1));

    assert_eq!(hits.get(), 1);
}
