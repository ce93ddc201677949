//! Viewport-clipped underlining.
//!
//! Only text that is actually on screen gets scanned: the visible line
//! range bounds the walk vertically, the horizontal scroll and the view
//! rectangle clip each line, and every clip point snaps outward to a
//! token boundary so a truncated word is never judged from its visible
//! half. Decorations converge by a linear sweep per chunk: clear the gap
//! before each misspelled span, fill the span, clear the tail.

use log::debug;
use smallvec::SmallVec;
use squiggle_core::mapped::MappedText;

use crate::{
  editor::{
    EditorView,
    MISSPELLING_INDICATOR,
    Point,
  },
  navigate::{
    SCAN_CHUNK,
    next_token_end_in_document,
    prev_token_begin_in_document,
  },
  pass::Pass,
};

pub(crate) fn clear_all_underlines(editor: &mut dyn EditorView) {
  let length = editor.document_length();
  if length > 0 {
    editor.set_current_indicator(MISSPELLING_INDICATOR);
    editor.indicator_clear(0, length);
  }
}

/// Re-underline every visible chunk of the document.
pub(crate) fn underline_visible_misspellings(pass: &mut Pass) {
  let top_visible = pass.editor.first_visible_line();
  let top_line = pass.editor.document_line_from_visible(top_visible);
  let lines_on_screen = pass.editor.lines_on_screen();
  let bottom_line = pass
    .editor
    .document_line_from_visible(top_visible + lines_on_screen.saturating_sub(1));
  let rect = pass.editor.editor_rect();
  let length = pass.editor.document_length();
  let first_visible_column = pass.editor.first_visible_column();

  debug!("underlining visible lines {top_line}..={bottom_line}");

  for line in top_line..=bottom_line {
    if !pass.editor.is_line_visible(line) {
      continue;
    }
    let Some(line_start) = pass.editor.line_start(line) else {
      break; // past the last line
    };
    if line_start >= length {
      continue; // phantom trailing lines of a short document
    }
    let line_end = pass.editor.line_end(line);

    // A line that renders nowhere (collapsed fold, zero extent) reports
    // the same point for both ends; skip it.
    let line_start_point = pass.editor.point_from_position(line_start);
    let line_end_point = pass.editor.point_from_position(line_end);
    if line_start_point == line_end_point {
      continue;
    }

    // Skip what is scrolled off to the left.
    let mut start = line_start + first_visible_column;
    if start > line_end {
      continue;
    }

    let mut end = start + SCAN_CHUNK;
    while start < line_end {
      let start_point = pass.editor.point_from_position(start);
      if start_point.y < rect.top {
        if let Some(pos) = pass.editor.position_from_point(Point { x: 0, y: 0 }) {
          start = prev_token_begin_in_document(pass, pos);
        }
      } else if start_point.x < rect.left {
        if let Some(pos) = pass.editor.position_from_point(Point {
          x: 0,
          y: start_point.y,
        }) {
          start = prev_token_begin_in_document(pass, pos);
        }
      } else if first_visible_column > 0 {
        start = prev_token_begin_in_document(pass, start);
      }

      if end > line_end {
        end = line_end;
      }

      let end_point = pass.editor.point_from_position(end);
      if end_point.y > rect.height() {
        if let Some(pos) = pass.editor.position_from_point(Point {
          x: rect.width(),
          y: rect.height(),
        }) {
          end = next_token_end_in_document(pass, pos);
        }
      } else if end_point.x > rect.right {
        if let Some(pos) = pass.editor.position_from_point(Point {
          x: rect.width(),
          y: end_point.y,
        }) {
          end = next_token_end_in_document(pass, pos);
        }
      }

      // The whole chunk scrolled out of view.
      if start > end {
        break;
      }

      let text = pass.mapped_range(start, end);
      underline_misspellings_in(pass, &text, start);

      start = end + 1;
      end = start + SCAN_CHUNK;
    }
  }
}

/// Converge the painted underlines over `text`'s raw span toward the scan
/// result. Spans arrive sorted and non-overlapping (left-to-right token
/// order), so one sweep with a rolling `prev` covers every gap.
pub(crate) fn underline_misspellings_in(pass: &mut Pass, text: &MappedText, sweep_start: usize) {
  let words = pass.check_text(text);
  let spans: SmallVec<[(usize, usize); 16]> = words
    .iter()
    .filter(|word| !word.is_correct)
    .map(|word| (word.raw_start, word.raw_end))
    .collect();

  pass.editor.set_current_indicator(MISSPELLING_INDICATOR);
  let mut prev = sweep_start;
  for &(span_start, span_end) in &spans {
    pass.editor.indicator_clear(prev, span_start);
    pass.editor.indicator_fill(span_start, span_end);
    prev = span_end;
  }
  pass.editor.indicator_clear(prev, text.raw_end());
}
