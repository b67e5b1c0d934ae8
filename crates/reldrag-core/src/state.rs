//! Observable single-threaded state.
//!
//! [`MutableState`] holds a value and notifies observers synchronously from
//! inside [`MutableState::set`] whenever the value actually changes. [`State`]
//! is the read-only view handed out to callers that should observe but not
//! write.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer<T> = Rc<dyn Fn(&T)>;

struct StateInner<T> {
    value: RefCell<T>,
    observers: RefCell<SmallVec<[(ObserverId, Observer<T>); 2]>>,
    next_observer: Cell<u64>,
}

impl<T> StateInner<T> {
    fn remove_observer(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }
}

/// Readable and writable observable value.
pub struct MutableState<T> {
    inner: Rc<StateInner<T>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StateInner {
                value: RefCell::new(value),
                observers: RefCell::new(SmallVec::new()),
                next_observer: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Store `value` and notify observers if it differs from the current one.
    ///
    /// Returns whether the value changed. Observers run after the internal
    /// borrow is released, so they may read or write this state again.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        let observers: SmallVec<[Observer<T>; 2]> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(&value);
        }
        true
    }

    /// Register `observer`; it stays registered until the returned
    /// subscription is dropped or [`StateSubscription::forget`] is called.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> StateSubscription {
        let id = ObserverId(self.inner.next_observer.get());
        self.inner.next_observer.set(id.0 + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));

        let weak: Weak<StateInner<T>> = Rc::downgrade(&self.inner);
        StateSubscription {
            id,
            unsubscribe: Some(Box::new(move |id: ObserverId| {
                if let Some(inner) = weak.upgrade() {
                    inner.remove_observer(id);
                }
            })),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Read-only view sharing this state.
    pub fn as_state(&self) -> State<T> {
        State {
            inner: self.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}

/// Read-only view over a [`MutableState`].
pub struct State<T> {
    inner: MutableState<T>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> State<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> StateSubscription {
        self.inner.subscribe(observer)
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

/// Drop guard for an observer registered with [`MutableState::subscribe`].
#[must_use = "dropping the subscription unregisters the observer"]
pub struct StateSubscription {
    id: ObserverId,
    unsubscribe: Option<Box<dyn FnOnce(ObserverId)>>,
}

impl StateSubscription {
    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Keep the observer registered for the lifetime of the state.
    pub fn forget(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for StateSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_only_on_change() {
        let state = MutableState::new(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = state.subscribe(move |value| sink.borrow_mut().push(*value));

        assert!(state.set(true));
        assert!(!state.set(true));
        assert!(state.set(false));

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn dropping_subscription_unregisters_observer() {
        let state = MutableState::new(0);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = state.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(state.observer_count(), 1);

        state.set(1);
        drop(sub);
        state.set(2);

        assert_eq!(hits.get(), 1);
        assert_eq!(state.observer_count(), 0);
    }

    #[test]
    fn forgotten_subscription_stays_registered() {
        let state = MutableState::new(0);
        state.subscribe(|_| {}).forget();
        assert_eq!(state.observer_count(), 1);
    }

    #[test]
    fn observer_can_read_state_during_notification() {
        let state = MutableState::new(1);
        let reader = state.as_state();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let _sub = state.subscribe(move |_| sink.set(reader.get()));

        state.set(7);

        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn read_only_view_tracks_writes() {
        let state = MutableState::new(false);
        let view = state.as_state();
        state.set(true);
        assert!(view.get());
    }
}
