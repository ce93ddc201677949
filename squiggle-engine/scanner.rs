//! One scanning pass over a decoded window.
//!
//! Tokenize once, filter, then ask the speller about every eligible word
//! in a single batched call. Per-word speller calls from a scan loop are
//! the main thing this module exists to avoid.

use squiggle_core::{
  mapped::MappedText,
  tokenizer::Token,
};

use crate::{
  editor::EditorView,
  filter,
  settings::Settings,
  speller::Speller,
};

/// Per-token result of a pass: the (possibly apostrophe-narrowed) token,
/// its raw span, and the verdict. Ineligible tokens are correct by
/// construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CheckedWord {
  pub token:      Token,
  pub raw_start:  usize,
  pub raw_end:    usize,
  pub is_correct: bool,
}

/// Scan `text`, left to right. Exactly one `check_words` batch per call;
/// an empty batch answer (capability dropped out mid-batch) leaves every
/// word correct.
pub(crate) fn check_text(
  text: &MappedText,
  editor: &dyn EditorView,
  settings: &Settings,
  speller: &dyn Speller,
) -> Vec<CheckedWord> {
  if text.is_empty() {
    return Vec::new();
  }

  let chars = text.chars();
  let tokenizer = settings.tokenizer_for(chars);
  let speller_working = speller.is_working();

  let mut words = Vec::new();
  let mut batch = Vec::new();
  let mut batch_targets = Vec::new();
  for token in tokenizer.tokens() {
    let token = filter::strip_boundary_apostrophes(settings, chars, token);
    if token.is_empty() {
      continue;
    }
    let raw_start = text.to_original_index(token.start);
    let raw_end = text.to_original_index(token.end);
    words.push(CheckedWord {
      token,
      raw_start,
      raw_end,
      is_correct: true,
    });

    let excluded = editor.is_spellcheck_excluded(raw_start);
    if speller_working && filter::is_eligible(settings, chars, token, excluded) {
      batch.push(filter::to_speller_word(settings, chars, token));
      batch_targets.push(words.len() - 1);
    }
  }

  if !batch.is_empty() {
    let results = speller.check_words(&batch);
    for (&target, is_correct) in batch_targets.iter().zip(results) {
      words[target].is_correct = is_correct;
    }
  }

  words
}

/// Single-word variant for the word-under-cursor path. `true` means
/// correct (including "not worth checking").
pub(crate) fn check_word(
  text: &MappedText,
  token: Token,
  raw_start: usize,
  editor: &dyn EditorView,
  settings: &Settings,
  speller: &dyn Speller,
) -> bool {
  let chars = text.chars();
  let excluded = editor.is_spellcheck_excluded(raw_start);
  if !speller.is_working() || !filter::is_eligible(settings, chars, token, excluded) {
    return true;
  }
  speller.check_word(&filter::to_speller_word(settings, chars, token))
}
