//! Borrowed context for a single engine operation.
//!
//! Every public operation borrows the editor, the settings snapshot and
//! the active speller for its whole duration; the buffer must not change
//! underneath it (the host serializes edits against engine calls).

use squiggle_core::mapped::MappedText;

use crate::{
  editor::EditorView,
  scanner::{
    self,
    CheckedWord,
  },
  settings::Settings,
  speller::Speller,
};

pub(crate) struct Pass<'a> {
  pub editor:   &'a mut dyn EditorView,
  pub settings: &'a Settings,
  pub speller:  &'a dyn Speller,
}

impl Pass<'_> {
  /// Decode the raw range `[from, to)` of the buffer.
  pub fn mapped_range(&self, from: usize, to: usize) -> MappedText {
    let bytes = self.editor.text_range(from, to);
    MappedText::decode(&bytes, self.editor.encoding(), from)
  }

  pub fn whole_document(&self) -> MappedText {
    let bytes = self.editor.document_text();
    MappedText::decode(&bytes, self.editor.encoding(), 0)
  }

  pub fn check_text(&self, text: &MappedText) -> Vec<CheckedWord> {
    scanner::check_text(text, &*self.editor, self.settings, self.speller)
  }
}
