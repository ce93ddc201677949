//! Incremental spell checking against a host editor's buffer.
//!
//! The engine decides which word-like tokens in the visible or
//! cursor-adjacent text are misspelled and keeps the editor's underline
//! decorations in sync as the user types, scrolls and navigates, without
//! re-scanning whole documents. The host supplies buffer access, geometry
//! and decoration primitives through [`editor::EditorView`] and the
//! dictionary through [`speller::Speller`]; see [`checker::SpellChecker`]
//! for the operations.

pub mod checker;
pub mod editor;
pub mod settings;
pub mod speller;

mod filter;
mod highlight;
mod navigate;
mod pass;
mod scanner;

pub use checker::{
  PointerOrigin,
  SpellChecker,
};
