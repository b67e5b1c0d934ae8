//! Pointer listener bookkeeping.
//!
//! [`PointerListenerRegistry`] is the in-memory listener table used by hosts
//! that dispatch events themselves. Dispatch snapshots the listener list
//! first, so listeners may add or remove registrations (including their own)
//! while an event is being delivered.

use super::host::{ListenerId, PointerListener};
use super::types::{PointerEvent, PointerEventKind};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
pub struct PointerListenerRegistry {
    listeners: RefCell<Vec<(ListenerId, PointerEventKind, PointerListener)>>,
    next_id: Cell<u64>,
}

impl PointerListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, kind: PointerEventKind, listener: PointerListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, kind, listener));
        id
    }

    pub fn remove(&self, id: ListenerId) -> Option<PointerListener> {
        let mut listeners = self.listeners.borrow_mut();
        let index = listeners.iter().position(|(existing, _, _)| *existing == id)?;
        Some(listeners.remove(index).2)
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(existing, _, _)| *existing == id)
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    pub fn count_for(&self, kind: PointerEventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, registered, _)| *registered == kind)
            .count()
    }

    /// Deliver `event` to every listener registered for its kind.
    ///
    /// A listener removed by an earlier listener during the same dispatch is
    /// skipped. Returns the number of listeners invoked.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let snapshot: SmallVec<[(ListenerId, PointerListener); 4]> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind)
            .map(|(id, _, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.contains(id) {
                continue;
            }
            listener(event);
            delivered += 1;
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reldrag_graphics::Point;

    #[test]
    fn dispatch_targets_matching_kind_only() {
        let registry = PointerListenerRegistry::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        registry.add(
            PointerEventKind::Move,
            Rc::new(move |_: &PointerEvent| counter.set(counter.get() + 1)),
        );
        registry.add(PointerEventKind::Up, Rc::new(|_: &PointerEvent| panic!("up listener ran")));

        let delivered = registry.dispatch(&PointerEvent::new(PointerEventKind::Move, Point::ZERO));

        assert_eq!(delivered, 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listener_removed_mid_dispatch_is_skipped() {
        let registry = Rc::new(PointerListenerRegistry::new());
        let second_ran = Rc::new(Cell::new(false));

        let victim: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let reg = Rc::clone(&registry);
        let target = Rc::clone(&victim);
        registry.add(
            PointerEventKind::Up,
            Rc::new(move |_: &PointerEvent| {
                if let Some(id) = target.get() {
                    reg.remove(id);
                }
            }),
        );
        let flag = Rc::clone(&second_ran);
        let id = registry.add(PointerEventKind::Up, Rc::new(move |_: &PointerEvent| flag.set(true)));
        victim.set(Some(id));

        registry.dispatch(&PointerEvent::new(PointerEventKind::Up, Point::ZERO));

        assert!(!second_ran.get());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn removing_twice_is_harmless() {
        let registry = PointerListenerRegistry::new();
        let id = registry.add(PointerEventKind::Cancel, Rc::new(|_: &PointerEvent| {}));
        assert!(registry.remove(id).is_some());
        assert!(registry.remove(id).is_none());
        assert!(registry.is_empty());
    }
}
