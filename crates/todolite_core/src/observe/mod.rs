//! Change-notification fan-out to display listeners.
//!
//! # Responsibility
//! - Define the listener capability consumed by display collaborators.
//! - Keep an ordered, duplicate-free set of registered listeners.
//!
//! # Invariants
//! - Listeners are notified in registration order.
//! - Registration is idempotent; removal of an unknown listener is a no-op.
//! - Listeners receive the list by shared reference only, so they cannot
//!   mutate the list or the registry from inside their callback.

use crate::list::activity_list::ActivityList;
use std::rc::Rc;

/// Capability implemented by display collaborators.
///
/// `on_change` runs after every successful mutation, once per mutation, with
/// the post-mutation list.
pub trait ListObserver {
    fn on_change(&self, list: &ActivityList);
}

/// Ordered registry of listener handles.
///
/// The registry holds non-owning-in-spirit `Rc` handles: dropping the
/// registry never invalidates a listener the caller still holds. Identity is
/// pointer identity, so registering the same handle twice is a no-op.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Rc<dyn ListObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener. Returns `false` when it was already present.
    pub fn add(&mut self, observer: Rc<dyn ListObserver>) -> bool {
        if self
            .observers
            .iter()
            .any(|registered| same_handle(registered, &observer))
        {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Deregisters one listener. Returns `false` when it was not registered.
    pub fn remove(&mut self, observer: &Rc<dyn ListObserver>) -> bool {
        let before = self.observers.len();
        self.observers
            .retain(|registered| !same_handle(registered, observer));
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Invokes every registered listener, in registration order.
    pub fn notify_all(&self, list: &ActivityList) {
        for observer in &self.observers {
            observer.on_change(list);
        }
    }
}

// Identity is the data address only. `Rc::ptr_eq` on trait objects also
// compares vtable pointers, which may differ across codegen units for the
// same concrete listener.
fn same_handle(a: &Rc<dyn ListObserver>, b: &Rc<dyn ListObserver>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
