//! The external checking capability.
//!
//! Dictionaries, affix handling and suggestion ranking all live behind
//! [`Speller`]; the engine only ever asks "are these words correct".

use std::{
  cell::RefCell,
  rc::Rc,
};

use squiggle_event::Signal;

/// A word in the canonical form the speller expects: case-folded per
/// configuration, boundary apostrophes stripped. `ends_with_dot` records
/// that the source token was followed by a period, so the speller can
/// treat `etc.`-style abbreviations as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellerWord {
  pub text:          String,
  pub ends_with_dot: bool,
}

pub trait Speller {
  /// Whether the capability can answer right now (dictionary loaded, ...).
  fn is_working(&self) -> bool;

  /// `true` means correctly spelled.
  fn check_word(&self, word: &SpellerWord) -> bool;

  /// Batch check, aligned 1:1 with the input. An empty result means the
  /// capability dropped out mid-batch; callers treat every word as
  /// correct.
  fn check_words(&self, words: &[SpellerWord]) -> Vec<bool>;
}

/// Holds the active [`Speller`] and announces status changes.
///
/// The host replaces or pokes the speller (dictionary finished loading,
/// language switched); every change emits `status_changed`, which the
/// engine answers with a full visible re-check.
pub struct SpellerContainer {
  active:         RefCell<Rc<dyn Speller>>,
  status_changed: Signal,
}

impl SpellerContainer {
  pub fn new(speller: Rc<dyn Speller>) -> Self {
    Self {
      active:         RefCell::new(speller),
      status_changed: Signal::new(),
    }
  }

  pub fn active(&self) -> Rc<dyn Speller> {
    self.active.borrow().clone()
  }

  pub fn set_active(&self, speller: Rc<dyn Speller>) {
    *self.active.borrow_mut() = speller;
    self.status_changed.emit();
  }

  /// For status changes that do not swap the speller itself.
  pub fn notify_status_changed(&self) {
    self.status_changed.emit();
  }

  pub fn status_changed(&self) -> &Signal {
    &self.status_changed
  }
}
