use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded owner for values shared between a controller and the
/// event handlers it installs.
///
/// This type stores `T` inside an `Rc<RefCell<...>>`, allowing cheap cloning of the
/// handle while every clone observes the same value.
pub struct Owned<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for Owned<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Owned<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Run `f` with an immutable reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let borrow = self.inner.borrow();
        f(&*borrow)
    }

    /// Run `f` with a mutable reference to the stored value.
    ///
    /// The borrow is held for the duration of `f`; do not call back into
    /// code that reads the same handle.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut borrow = self.inner.borrow_mut();
        f(&mut *borrow)
    }

    /// Replace the stored value, returning the previous one.
    pub fn replace(&self, new_value: T) -> T {
        self.inner.replace(new_value)
    }
}

impl<T> Owned<Option<T>> {
    /// Take the stored value, leaving `None` behind.
    pub fn take(&self) -> Option<T> {
        self.inner.borrow_mut().take()
    }
}
