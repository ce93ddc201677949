//! Synchronous observer-list signals.
//!
//! The engine reacts to two host-side events: "settings changed" and
//! "speller status changed". Both are modeled as a [`Signal`] the host
//! owns and emits; interested parties register a closure with
//! [`Signal::subscribe`] and hold on to the returned [`Subscription`],
//! which unsubscribes when dropped.
//!
//! Everything is synchronous and single-threaded: [`Signal::emit`] calls
//! every observer before returning, on the calling thread. Observers may
//! subscribe or unsubscribe reentrantly; a subscription made during an
//! emit fires from the next emit on.

use std::{
  cell::RefCell,
  fmt,
  rc::{
    Rc,
    Weak,
  },
};

use slotmap::{
  SlotMap,
  new_key_type,
};

new_key_type! {
  struct ObserverKey;
}

type ObserverMap = SlotMap<ObserverKey, Rc<dyn Fn()>>;

#[derive(Default)]
pub struct Signal {
  observers: Rc<RefCell<ObserverMap>>,
}

impl Signal {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn subscribe(&self, observer: impl Fn() + 'static) -> Subscription {
    let key = self.observers.borrow_mut().insert(Rc::new(observer));
    Subscription {
      observers: Rc::downgrade(&self.observers),
      key,
    }
  }

  pub fn emit(&self) {
    // Snapshot first so observers can (un)subscribe while we run them.
    let observers: Vec<Rc<dyn Fn()>> = self.observers.borrow().values().cloned().collect();
    for observer in observers {
      observer();
    }
  }

  pub fn observer_count(&self) -> usize {
    self.observers.borrow().len()
  }
}

impl fmt::Debug for Signal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Signal")
      .field("observers", &self.observer_count())
      .finish()
  }
}

/// Keeps one observer registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes its observer"]
pub struct Subscription {
  observers: Weak<RefCell<ObserverMap>>,
  key:       ObserverKey,
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(observers) = self.observers.upgrade() {
      observers.borrow_mut().remove(self.key);
    }
  }
}

impl fmt::Debug for Subscription {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Subscription").finish_non_exhaustive()
  }
}
