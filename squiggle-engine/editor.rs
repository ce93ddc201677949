//! The host editor surface consumed by the engine.
//!
//! The engine never owns text or decorations; it reads the buffer and
//! issues decoration/selection calls through [`EditorView`]. All offsets
//! crossing this boundary are raw offsets in the buffer's native indexing
//! (bytes for UTF-8 documents). Geometry is view-relative: points grow
//! right/down from the view origin, and [`EditorView::editor_rect`]
//! describes the visible rectangle in the same space.
//!
//! Callers are expected to pass clamped offsets; implementations are not
//! required to re-validate against a live document length.

pub use squiggle_core::mapped::TextEncoding;

use crate::settings::{
  Color,
  UnderlineStyle,
};

/// Indicator slot the engine claims for misspelling underlines.
pub const MISSPELLING_INDICATOR: u32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
  pub left:   i32,
  pub top:    i32,
  pub right:  i32,
  pub bottom: i32,
}

impl Rect {
  pub fn width(&self) -> i32 {
    self.right - self.left
  }

  pub fn height(&self) -> i32 {
    self.bottom - self.top
  }
}

pub trait EditorView {
  // Document access.
  fn encoding(&self) -> TextEncoding;
  fn document_length(&self) -> usize;
  fn text_range(&self, from: usize, to: usize) -> Vec<u8>;
  fn document_text(&self) -> Vec<u8>;

  // Lines and geometry.
  fn line_from_position(&self, pos: usize) -> usize;
  /// Raw offset where `line` starts; `None` past the last line.
  fn line_start(&self, line: usize) -> Option<usize>;
  /// Raw offset of the end of `line`'s content, excluding the line ending.
  fn line_end(&self, line: usize) -> usize;
  fn first_visible_line(&self) -> usize;
  fn lines_on_screen(&self) -> usize;
  /// Translate a visible-line index to a document line (they diverge when
  /// folding or wrapping is active).
  fn document_line_from_visible(&self, visible_line: usize) -> usize;
  fn is_line_visible(&self, line: usize) -> bool;
  /// Horizontal scroll, in columns.
  fn first_visible_column(&self) -> usize;
  fn editor_rect(&self) -> Rect;
  fn point_from_position(&self, pos: usize) -> Point;
  fn position_from_point(&self, point: Point) -> Option<usize>;
  /// Raw offset under the mouse pointer, if it is over text.
  fn mouse_position(&self) -> Option<usize>;

  // Selection.
  fn cursor_position(&self) -> usize;
  fn selection_start(&self) -> usize;
  fn selection_end(&self) -> usize;
  fn set_selection(&mut self, from: usize, to: usize);

  // Styling.
  /// Whether the host excludes `pos` from spell checking (string/comment
  /// styling, embedded code, ...).
  fn is_spellcheck_excluded(&self, pos: usize) -> bool;
  /// Whether this document should be spell checked at all.
  fn spellcheck_enabled(&self) -> bool {
    true
  }
  /// Ask the host to bring lexical styling up to date for a range, so
  /// exclusion answers are fresh before a whole-document scan.
  fn force_style_update(&mut self, from: usize, to: usize) {
    let _ = (from, to);
  }

  // Decorations.
  fn set_current_indicator(&mut self, indicator: u32);
  fn indicator_fill(&mut self, from: usize, to: usize);
  fn indicator_clear(&mut self, from: usize, to: usize);
  fn set_indicator_style(&mut self, indicator: u32, style: UnderlineStyle);
  fn set_indicator_color(&mut self, indicator: u32, color: Color);

  // Edits and marks.
  fn delete_range(&mut self, start: usize, len: usize);
  fn begin_undo_group(&mut self);
  fn end_undo_group(&mut self);
  fn add_bookmark(&mut self, line: usize);
}
