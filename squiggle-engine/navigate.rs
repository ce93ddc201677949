//! Cursor-relative mistake navigation.
//!
//! Nothing here looks at the whole document up front. Finding the token
//! boundary next to the cursor uses a doubling probe: decode a small
//! window next to the position, double it on every miss, stop at the
//! first boundary found. That keeps a navigation step at
//! O(log distance-to-boundary) decode calls instead of O(document).
//! From the probed boundary the search walks fixed-size chunks, trimmed
//! to token boundaries so a word split across two chunks is never
//! misjudged, and wraps around the document once before giving up.

use log::debug;

use crate::{
  pass::Pass,
  scanner::CheckedWord,
};

/// Nominal decoded-characters per scan chunk.
pub(crate) const SCAN_CHUNK: usize = 4096;

/// Initial probe window; doubles on every miss.
const PROBE_SHIFT: usize = 15;

/// Raw offset of the start of the token containing `start`, or of the
/// nearest token before it; 0 when there is none.
pub(crate) fn prev_token_begin_in_document(pass: &mut Pass, start: usize) -> usize {
  let mut shift = PROBE_SHIFT;
  let mut start = start;
  let mut prev_start = (start + 1).min(pass.editor.document_length());
  while start > 0 {
    start = start.saturating_sub(shift);
    let text = pass.mapped_range(start, prev_start);
    if !text.is_empty() {
      let tokenizer = pass.settings.tokenizer_for(text.chars());
      let index = tokenizer.prev_token_begin(text.len() - 1);
      // A start strictly inside the window is trustworthy; one at the
      // window edge might continue further left, so grow and retry.
      if index > 0 {
        return text.to_original_index(index);
      }
    }
    prev_start = start;
    shift *= 2;
  }
  start
}

/// Raw offset of the end of the token containing `end`, or of the nearest
/// token after it; the document length when there is none.
pub(crate) fn next_token_end_in_document(pass: &mut Pass, end: usize) -> usize {
  let length = pass.editor.document_length();
  if end >= length {
    return length;
  }
  let mut shift = PROBE_SHIFT;
  let mut end = end;
  let mut prev_end = end;
  loop {
    end = (end + shift).min(length);
    let text = pass.mapped_range(prev_end, end);
    if !text.is_empty() {
      let tokenizer = pass.settings.tokenizer_for(text.chars());
      let index = tokenizer.next_token_end(0);
      if index < text.len() {
        return text.to_original_index(index);
      }
    }
    if end == length {
      return end;
    }
    prev_end = end;
    shift *= 2;
  }
}

fn first_misspelling_after(words: &[CheckedWord], position: usize) -> Option<(usize, usize)> {
  words
    .iter()
    .find(|word| !word.is_correct && word.raw_end > position)
    .map(|word| (word.raw_start, word.raw_end))
}

fn last_misspelling_before(words: &[CheckedWord], position: usize) -> Option<(usize, usize)> {
  words
    .iter()
    .rev()
    .find(|word| !word.is_correct && word.raw_end < position)
    .map(|word| (word.raw_start, word.raw_end))
}

/// First misspelled word ending strictly after the cursor, wrapping to the
/// document start once.
pub(crate) fn find_next_mistake(pass: &mut Pass) -> Option<(usize, usize)> {
  let doc_length = pass.editor.document_length();
  if doc_length == 0 {
    return None;
  }
  let mut current_position = pass.editor.cursor_position().min(doc_length);
  let mut iterator_pos = prev_token_begin_in_document(pass, current_position);
  let mut full_check = false;

  loop {
    let from = iterator_pos;
    let to = (iterator_pos + SCAN_CHUNK).min(doc_length);
    if from < to {
      let mut text = pass.mapped_range(from, to);
      let mut index = text.len();
      if to != doc_length {
        // Cut the tail back to a token boundary so a word split across
        // the chunk edge is not judged from its prefix. A chunk that is
        // one unbroken token is scanned as-is.
        let tokenizer = pass.settings.tokenizer_for(text.chars());
        let trimmed = tokenizer.prev_token_begin(index - 1);
        if trimmed > 0 {
          index = trimmed;
        }
      }
      text.truncate(index);

      let words = pass.check_text(&text);
      if let Some(span) = first_misspelling_after(&words, current_position) {
        debug!("next mistake at {}..{}", span.0, span.1);
        return Some(span);
      }
      iterator_pos += text.raw_end() - from;
    }

    if to == doc_length {
      if full_check {
        break;
      }
      current_position = 0;
      iterator_pos = 0;
      full_check = true;
    }
  }
  debug!("no next mistake");
  None
}

/// Last misspelled word ending strictly before the cursor, wrapping to the
/// document end once.
pub(crate) fn find_prev_mistake(pass: &mut Pass) -> Option<(usize, usize)> {
  let doc_length = pass.editor.document_length();
  if doc_length == 0 {
    return None;
  }
  let mut current_position = pass.editor.cursor_position().min(doc_length);
  let mut iterator_pos = next_token_end_in_document(pass, current_position);
  let mut full_check = false;

  loop {
    let from = iterator_pos.saturating_sub(SCAN_CHUNK);
    let to = iterator_pos;
    if from < to {
      let text = pass.mapped_range(from, to);
      let words = pass.check_text(&text);
      if let Some(span) = last_misspelling_before(&words, current_position) {
        debug!("previous mistake at {}..{}", span.0, span.1);
        return Some(span);
      }

      if from > 0 {
        // Advance so the next window ends at the end of this window's
        // first (possibly head-split) token, bringing that token fully
        // into view. With no boundary inside the window at all, fall
        // back to the window start.
        let tokenizer = pass.settings.tokenizer_for(text.chars());
        let offset = tokenizer.next_token_end(0);
        iterator_pos = if offset < text.len() {
          text.to_original_index(offset)
        } else {
          from
        };
        continue;
      }
    }

    // Reached the document start without a hit.
    if full_check {
      break;
    }
    current_position = doc_length + 1;
    iterator_pos = doc_length;
    full_check = true;
  }
  debug!("no previous mistake");
  None
}
