//! The engine façade.
//!
//! [`SpellChecker`] owns shared handles to its three collaborators (the
//! editor view, the settings store, the speller container), registers for
//! the two change signals at construction, and exposes the public
//! operations. Dropping the checker drops its subscriptions, so no
//! callback outlives it.
//!
//! Everything runs synchronously on the caller's thread; the host must
//! not mutate the buffer while an operation is in flight.

use std::{
  cell::RefCell,
  rc::Rc,
};

use log::{
  debug,
  trace,
};
use squiggle_event::Subscription;

use crate::{
  editor::{
    EditorView,
    MISSPELLING_INDICATOR,
  },
  filter,
  highlight,
  navigate,
  pass::Pass,
  scanner,
  settings::SettingsStore,
  speller::SpellerContainer,
};

/// Where the word-under-cursor lookup takes its position from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOrigin {
  Caret,
  Mouse,
}

pub struct SpellChecker {
  editor:         Rc<RefCell<dyn EditorView>>,
  settings:       Rc<SettingsStore>,
  spellers:       Rc<SpellerContainer>,
  _subscriptions: Vec<Subscription>,
}

impl SpellChecker {
  /// Wire up a checker. Subscribes to settings and speller-status changes
  /// and runs the initial style refresh + visible check before returning.
  pub fn new(
    editor: Rc<RefCell<dyn EditorView>>,
    settings: Rc<SettingsStore>,
    spellers: Rc<SpellerContainer>,
  ) -> Rc<RefCell<Self>> {
    let checker = Rc::new(RefCell::new(Self {
      editor,
      settings: settings.clone(),
      spellers: spellers.clone(),
      _subscriptions: Vec::new(),
    }));

    let weak = Rc::downgrade(&checker);
    let on_settings = settings.changed().subscribe(move || {
      if let Some(checker) = weak.upgrade() {
        trace!("settings changed");
        checker.borrow_mut().on_settings_changed();
      }
    });
    let weak = Rc::downgrade(&checker);
    let on_status = spellers.status_changed().subscribe(move || {
      if let Some(checker) = weak.upgrade() {
        trace!("speller status changed");
        checker.borrow_mut().refresh_visible_highlighting();
      }
    });
    {
      let mut checker_mut = checker.borrow_mut();
      checker_mut._subscriptions = vec![on_settings, on_status];
      checker_mut.on_settings_changed();
    }

    checker
  }

  fn with_pass<T>(&mut self, f: impl FnOnce(&mut Pass) -> T) -> T {
    let mut editor = self.editor.borrow_mut();
    let settings = self.settings.get();
    let speller = self.spellers.active();
    let mut pass = Pass {
      editor:   &mut *editor,
      settings: &*settings,
      speller:  &*speller,
    };
    f(&mut pass)
  }

  /// Re-check what is on screen. With the speller unavailable or the
  /// document opted out, this only clears; either way the decoration
  /// state afterwards matches the current buffer, so calling it twice
  /// changes nothing.
  pub fn refresh_visible_highlighting(&mut self) {
    self.with_pass(|pass| {
      if !pass.speller.is_working() || !pass.editor.spellcheck_enabled() {
        debug!("speller unavailable or document opted out; clearing underlines");
        highlight::clear_all_underlines(pass.editor);
        return;
      }
      highlight::underline_visible_misspellings(pass);
    });
  }

  /// Select and report the next mistake after the cursor, wrapping once.
  pub fn find_next_mistake(&mut self) -> Option<(usize, usize)> {
    self.with_pass(|pass| {
      let span = navigate::find_next_mistake(pass)?;
      pass.editor.set_selection(span.0, span.1);
      Some(span)
    })
  }

  /// Select and report the previous mistake before the cursor, wrapping
  /// once.
  pub fn find_previous_mistake(&mut self) -> Option<(usize, usize)> {
    self.with_pass(|pass| {
      let span = navigate::find_prev_mistake(pass)?;
      pass.editor.set_selection(span.0, span.1);
      Some(span)
    })
  }

  /// The misspelled word at the caret or mouse position, if any. `None`
  /// means the word there is correct, or there is nothing to check (empty
  /// document, pointer off text, a selection that is not exactly the
  /// word).
  pub fn misspelled_word_under_cursor(&mut self, origin: PointerOrigin) -> Option<(usize, usize)> {
    self.with_pass(|pass| {
      let doc_length = pass.editor.document_length();
      if doc_length == 0 {
        return None;
      }

      let (init_pos, selection) = match origin {
        PointerOrigin::Mouse => (pass.editor.mouse_position()?, None),
        PointerOrigin::Caret => {
          let start = pass.editor.selection_start();
          let end = pass.editor.selection_end();
          (start.min(end), Some((start.min(end), start.max(end))))
        },
      };
      let init_pos = init_pos.min(doc_length);

      let start = navigate::prev_token_begin_in_document(pass, init_pos);
      let end = navigate::next_token_end_in_document(pass, start + 1);
      let text = pass.mapped_range(start, end);
      if text.is_empty() {
        return None;
      }

      let tokenizer = pass.settings.tokenizer_for(text.chars());
      let token = tokenizer.word_at(text.from_original_index(init_pos).min(text.len() - 1))?;
      let token = filter::strip_boundary_apostrophes(pass.settings, text.chars(), token);
      if token.is_empty() {
        return None;
      }
      let raw_start = text.to_original_index(token.start);
      let raw_end = text.to_original_index(token.end);

      // An existing selection suppresses the lookup unless it covers
      // exactly this word.
      if let Some((sel_start, sel_end)) = selection {
        if sel_start != sel_end && (sel_start != raw_start || sel_end != raw_end) {
          return None;
        }
      }

      if scanner::check_word(&text, token, raw_start, pass.editor, pass.settings, pass.speller) {
        None
      } else {
        Some((raw_start, raw_end))
      }
    })
  }

  /// Every misspelled word in the document, case-insensitively sorted and
  /// deduplicated, original casing preserved.
  pub fn list_all_misspellings(&mut self) -> Vec<String> {
    self.with_pass(|pass| {
      let text = pass.whole_document();
      if text.is_empty() {
        return Vec::new();
      }
      pass.editor.force_style_update(text.raw_start(), text.raw_end());
      let words = pass.check_text(&text);

      let mut misspelled: Vec<String> = words
        .iter()
        .filter(|word| !word.is_correct)
        .map(|word| text.slice_string(word.token.range()))
        .collect();
      misspelled.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
      misspelled.dedup_by(|a, b| a.to_lowercase() == b.to_lowercase());
      misspelled
    })
  }

  /// Bookmark every line containing a misspelling.
  pub fn mark_all_misspelled_lines(&mut self) {
    self.with_pass(|pass| {
      let text = pass.whole_document();
      if text.is_empty() {
        return;
      }
      pass.editor.force_style_update(text.raw_start(), text.raw_end());
      let words = pass.check_text(&text);
      for word in words.iter().filter(|word| !word.is_correct) {
        let line = pass.editor.line_from_position(word.raw_start);
        pass.editor.add_bookmark(line);
      }
    });
  }

  /// Delete every misspelled word, as one undo step. Later spans shift
  /// left by whatever was already removed.
  pub fn erase_all_misspellings(&mut self) {
    self.with_pass(|pass| {
      let text = pass.whole_document();
      let words = pass.check_text(&text);

      pass.editor.begin_undo_group();
      let mut removed = 0;
      for word in words.iter().filter(|word| !word.is_correct) {
        let len = word.raw_end - word.raw_start;
        pass.editor.delete_range(word.raw_start - removed, len);
        removed += len;
      }
      pass.editor.end_undo_group();
      debug!("erased {removed} raw units of misspelled text");
    });
  }

  pub fn clear_all_underlines(&mut self) {
    self.with_pass(|pass| highlight::clear_all_underlines(pass.editor));
  }

  fn refresh_underline_style(&mut self) {
    self.with_pass(|pass| {
      pass
        .editor
        .set_indicator_style(MISSPELLING_INDICATOR, pass.settings.underline_style);
      pass
        .editor
        .set_indicator_color(MISSPELLING_INDICATOR, pass.settings.underline_color);
    });
  }

  /// Settings changes can alter tokenization and eligibility anywhere, so
  /// everything painted is stale: restyle, wipe, re-check the viewport.
  fn on_settings_changed(&mut self) {
    self.refresh_underline_style();
    self.clear_all_underlines();
    self.refresh_visible_highlighting();
  }
}
