//! Relative drag controller.
//!
//! [`RelativeDrag`] owns at most one active drag at a time. Starting a drag
//! registers move/up/cancel listeners on the host, tries to capture the
//! pointer on the surface and flips [`RelativeDrag::is_dragging`]. Every
//! accepted move reports `start_value + delta` to `on_change`; up or cancel
//! tears everything down and then calls `on_end`. Stopping through a
//! [`DragStopHandle`] performs the same teardown without `on_end`.
//!
//! Nothing here reports errors. Missing inputs turn `start` into a no-op and
//! capture failures are logged and ignored.

use super::drag::DragSession;
use super::start_value::IntoStartValue;
use crate::config::DragConfig;
use crate::nodes::input::host::{DragHost, DragSurface, ListenerId, PointerListener};
use crate::nodes::input::types::{PointerEvent, PointerEventKind};
use reldrag_core::{MutableState, Owned, State};
use smallvec::SmallVec;
use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};
use web_time::Instant;

struct ActiveDrag<S> {
    generation: u64,
    session: DragSession,
    surface: S,
    listeners: SmallVec<[ListenerId; 3]>,
    on_change: Rc<dyn Fn(f64)>,
    on_end: Option<Box<dyn FnOnce()>>,
    started_at: Instant,
}

struct RelativeDragInner<H: DragHost> {
    host: H,
    config: DragConfig,
    is_dragging: MutableState<bool>,
    active: Owned<Option<ActiveDrag<H::Surface>>>,
    next_generation: Cell<u64>,
}

impl<H: DragHost> RelativeDragInner<H> {
    fn take_active_if(&self, generation: u64) -> Option<ActiveDrag<H::Surface>> {
        self.active.update(|slot| {
            if slot.as_ref().map(|active| active.generation) == Some(generation) {
                slot.take()
            } else {
                None
            }
        })
    }

    fn is_generation_active(&self, generation: u64) -> bool {
        self.active
            .with(|slot| slot.as_ref().map(|active| active.generation) == Some(generation))
    }

    /// Removes listeners and releases capture. Returns the session's
    /// `on_end`, which the caller decides whether to run.
    fn teardown(&self, mut active: ActiveDrag<H::Surface>) -> Option<Box<dyn FnOnce()>> {
        for id in active.listeners.drain(..) {
            self.host.remove_pointer_listener(id);
        }
        if let Some(pointer) = active.session.pointer_id() {
            let released = active.surface.try_release_pointer_capture(pointer);
            if !released {
                log::debug!("relative drag: releasing capture of pointer {pointer} failed; ignoring");
            }
        }
        log::debug!(
            "relative drag {} ended after {} ms",
            active.generation,
            active.started_at.elapsed().as_millis()
        );
        active.on_end.take()
    }

    /// Ends the session identified by `generation`. Returns `on_end` when the
    /// session was still active.
    fn end(&self, generation: u64) -> Option<Option<Box<dyn FnOnce()>>> {
        let active = self.take_active_if(generation)?;
        self.is_dragging.set(false);
        Some(self.teardown(active))
    }

    fn handle_move(&self, generation: u64, event: &PointerEvent) {
        let update = self.active.with(|slot| {
            let active = slot.as_ref().filter(|active| active.generation == generation)?;
            if !active.session.accepts(event) {
                return None;
            }
            Some((
                active.session.value_for(event.position),
                Rc::clone(&active.on_change),
            ))
        });
        if let Some((value, on_change)) = update {
            log::trace!("relative drag {generation}: value {value}");
            on_change(value);
        }
    }

    fn handle_release(&self, generation: u64) {
        if let Some(Some(on_end)) = self.end(generation) {
            on_end();
        }
    }
}

impl<H: DragHost> Drop for RelativeDragInner<H> {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            // Listeners hold weak references only; unregister them so the
            // host does not keep dead callbacks around.
            drop(self.teardown(active));
        }
    }
}

/// Type-erased access to a controller for stop handles.
trait SessionControl {
    fn stop_generation(&self, generation: u64) -> bool;
    fn is_generation_active(&self, generation: u64) -> bool;
}

impl<H: DragHost> SessionControl for RelativeDragInner<H> {
    fn stop_generation(&self, generation: u64) -> bool {
        self.end(generation).is_some()
    }

    fn is_generation_active(&self, generation: u64) -> bool {
        RelativeDragInner::is_generation_active(self, generation)
    }
}

/// Handle returned by [`RelativeDrag::start`].
///
/// A handle only ever stops the session it was created for; once that
/// session has ended, or a newer one has replaced it, `stop` does nothing.
#[derive(Clone)]
pub struct DragStopHandle {
    target: Option<(Weak<dyn SessionControl>, u64)>,
}

impl DragStopHandle {
    /// A handle that controls nothing.
    pub fn inert() -> Self {
        Self { target: None }
    }

    pub fn is_inert(&self) -> bool {
        self.target.is_none()
    }

    /// Ends the session without calling `on_end`. Returns whether a live
    /// session was stopped.
    pub fn stop(&self) -> bool {
        match &self.target {
            Some((control, generation)) => control
                .upgrade()
                .map(|control| control.stop_generation(*generation))
                .unwrap_or(false),
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        match &self.target {
            Some((control, generation)) => control
                .upgrade()
                .map(|control| control.is_generation_active(*generation))
                .unwrap_or(false),
            None => false,
        }
    }
}

impl fmt::Debug for DragStopHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragStopHandle")
            .field("generation", &self.target.as_ref().map(|(_, generation)| *generation))
            .finish()
    }
}

/// Converts pointer travel over a surface into value changes.
pub struct RelativeDrag<H: DragHost> {
    inner: Rc<RelativeDragInner<H>>,
}

impl<H: DragHost> Clone for RelativeDrag<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H> RelativeDrag<H>
where
    H: DragHost + 'static,
    H::Surface: 'static,
{
    pub fn new(host: H) -> Self {
        Self::with_config(host, DragConfig::default())
    }

    pub fn with_config(host: H, config: DragConfig) -> Self {
        Self {
            inner: Rc::new(RelativeDragInner {
                host,
                config,
                is_dragging: MutableState::new(false),
                active: Owned::new(None),
                next_generation: Cell::new(0),
            }),
        }
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    pub fn config(&self) -> DragConfig {
        self.inner.config
    }

    /// Observable flag, true exactly while a session is active.
    pub fn is_dragging(&self) -> State<bool> {
        self.inner.is_dragging.as_state()
    }

    /// Snapshot of the active session, if any.
    pub fn session(&self) -> Option<DragSession> {
        self.inner
            .active
            .with(|slot| slot.as_ref().map(|active| active.session))
    }

    /// Begin a drag from `event` over `surface`.
    ///
    /// With no event or no surface this is a no-op returning an inert
    /// handle. A session that is already active is torn down first, without
    /// its `on_end`.
    pub fn start<V, C, E>(
        &self,
        event: Option<&PointerEvent>,
        start_value: V,
        surface: Option<H::Surface>,
        on_change: C,
        on_end: E,
    ) -> DragStopHandle
    where
        V: IntoStartValue,
        C: Fn(f64) + 'static,
        E: FnOnce() + 'static,
    {
        let (Some(event), Some(surface)) = (event, surface) else {
            log::trace!("relative drag: start ignored, missing event or surface");
            return DragStopHandle::inert();
        };

        if let Some(previous) = self.inner.active.take() {
            log::debug!(
                "relative drag {}: replaced by a new session before it ended",
                previous.generation
            );
            drop(self.inner.teardown(previous));
        }

        event.prevent_default();

        let session = DragSession::begin(
            event,
            surface.bounds(),
            start_value.into_start_value(),
            &self.inner.config,
        );
        let generation = self.inner.next_generation.get();
        self.inner.next_generation.set(generation + 1);

        let listeners = self.register_listeners(generation);

        if let Some(pointer) = session.pointer_id() {
            if !surface.try_set_pointer_capture(pointer) {
                log::debug!("relative drag {generation}: pointer capture for {pointer} unavailable");
            }
        }

        log::debug!(
            "relative drag {generation}: started on {:?} axis, extent {}, start value {}",
            session.axis(),
            session.axis_extent(),
            session.start_value()
        );

        self.inner.active.replace(Some(ActiveDrag {
            generation,
            session,
            surface,
            listeners,
            on_change: Rc::new(on_change),
            on_end: Some(Box::new(on_end)),
            started_at: Instant::now(),
        }));
        self.inner.is_dragging.set(true);

        let control: Weak<RelativeDragInner<H>> = Rc::downgrade(&self.inner);
        let control: Weak<dyn SessionControl> = control;
        DragStopHandle {
            target: Some((control, generation)),
        }
    }

    /// Ends whatever session is active, without calling `on_end`.
    pub fn stop(&self) -> bool {
        let generation = self
            .inner
            .active
            .with(|slot| slot.as_ref().map(|active| active.generation));
        match generation {
            Some(generation) => self.inner.end(generation).is_some(),
            None => false,
        }
    }

    fn register_listeners(&self, generation: u64) -> SmallVec<[ListenerId; 3]> {
        let mut listeners = SmallVec::new();

        let weak = Rc::downgrade(&self.inner);
        let on_move: PointerListener = Rc::new(move |event: &PointerEvent| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_move(generation, event);
            }
        });
        listeners.push(
            self.inner
                .host
                .add_pointer_listener(PointerEventKind::Move, on_move),
        );

        for kind in [PointerEventKind::Up, PointerEventKind::Cancel] {
            let weak = Rc::downgrade(&self.inner);
            let on_release: PointerListener = Rc::new(move |_: &PointerEvent| {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_release(generation);
                }
            });
            listeners.push(self.inner.host.add_pointer_listener(kind, on_release));
        }

        listeners
    }
}
