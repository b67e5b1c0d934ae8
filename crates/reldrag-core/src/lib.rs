//! Core runtime primitives for relative drag gestures.
//!
//! Everything here is single-threaded: values live behind `Rc` and are
//! mutated from the UI event loop only.

pub mod owned;
pub mod state;

pub use owned::Owned;
pub use state::{MutableState, ObserverId, State, StateSubscription};
