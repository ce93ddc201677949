//! Shared test doubles: a rope-backed mock editor and a set-backed fake
//! speller. Raw offsets are byte offsets into the rope, so multi-byte
//! documents exercise the real mapping paths. Geometry is a fixed cell
//! grid.

use std::{
  cell::{
    Cell,
    RefCell,
  },
  collections::HashSet,
  rc::Rc,
};

use ropey::Rope;
use squiggle_engine::{
  SpellChecker,
  editor::{
    EditorView,
    MISSPELLING_INDICATOR,
    Point,
    Rect,
    TextEncoding,
  },
  settings::{
    Color,
    Settings,
    SettingsStore,
    UnderlineStyle,
  },
  speller::{
    Speller,
    SpellerContainer,
    SpellerWord,
  },
};

pub const CHAR_W: i32 = 10;
pub const LINE_H: i32 = 16;

pub struct MockEditor {
  pub text:              Rope,
  pub selection:         (usize, usize),
  pub mouse:             Option<usize>,
  pub top_visible_line:  usize,
  pub screen_lines:      usize,
  pub scroll_columns:    usize,
  pub view_rect:         Rect,
  pub hidden_lines:      HashSet<usize>,
  pub excluded_ranges:   Vec<(usize, usize)>,
  pub enabled:           bool,
  pub current_indicator: u32,
  pub underlines:        Vec<bool>,
  pub style:             Option<UnderlineStyle>,
  pub color:             Option<Color>,
  pub bookmarks:         Vec<usize>,
  pub undo_depth:        i32,
  pub undo_groups:       usize,
  pub style_updates:     Vec<(usize, usize)>,
}

impl MockEditor {
  pub fn new(text: &str) -> Self {
    let text = Rope::from(text);
    let len = text.len_bytes();
    Self {
      text,
      selection: (0, 0),
      mouse: None,
      top_visible_line: 0,
      screen_lines: 100,
      scroll_columns: 0,
      view_rect: Rect {
        left:   0,
        top:    0,
        right:  2000,
        bottom: 1600,
      },
      hidden_lines: HashSet::new(),
      excluded_ranges: Vec::new(),
      enabled: true,
      current_indicator: 0,
      underlines: vec![false; len],
      style: None,
      color: None,
      bookmarks: Vec::new(),
      undo_depth: 0,
      undo_groups: 0,
      style_updates: Vec::new(),
    }
  }

  pub fn text_string(&self) -> String {
    self.text.to_string()
  }

  /// Painted underline spans, as sorted raw ranges.
  pub fn underlined_spans(&self) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut run_start = None;
    for (i, &on) in self.underlines.iter().enumerate() {
      match (on, run_start) {
        (true, None) => run_start = Some(i),
        (false, Some(start)) => {
          spans.push((start, i));
          run_start = None;
        },
        _ => {},
      }
    }
    if let Some(start) = run_start {
      spans.push((start, self.underlines.len()));
    }
    spans
  }
}

impl EditorView for MockEditor {
  fn encoding(&self) -> TextEncoding {
    TextEncoding::Utf8
  }

  fn document_length(&self) -> usize {
    self.text.len_bytes()
  }

  fn text_range(&self, from: usize, to: usize) -> Vec<u8> {
    let len = self.text.len_bytes();
    let from = from.min(len);
    let to = to.min(len).max(from);
    self.text.byte_slice(from..to).bytes().collect()
  }

  fn document_text(&self) -> Vec<u8> {
    self.text.bytes().collect()
  }

  fn line_from_position(&self, pos: usize) -> usize {
    self.text.byte_to_line(pos.min(self.text.len_bytes()))
  }

  fn line_start(&self, line: usize) -> Option<usize> {
    (line < self.text.len_lines()).then(|| self.text.line_to_byte(line))
  }

  fn line_end(&self, line: usize) -> usize {
    if line >= self.text.len_lines() {
      return self.text.len_bytes();
    }
    let start = self.text.line_to_byte(line);
    let mut len = self.text.line(line).len_bytes();
    while len > 0 && matches!(self.text.byte(start + len - 1), b'\n' | b'\r') {
      len -= 1;
    }
    start + len
  }

  fn first_visible_line(&self) -> usize {
    self.top_visible_line
  }

  fn lines_on_screen(&self) -> usize {
    self.screen_lines
  }

  fn document_line_from_visible(&self, visible_line: usize) -> usize {
    visible_line
  }

  fn is_line_visible(&self, line: usize) -> bool {
    !self.hidden_lines.contains(&line)
  }

  fn first_visible_column(&self) -> usize {
    self.scroll_columns
  }

  fn editor_rect(&self) -> Rect {
    self.view_rect
  }

  fn point_from_position(&self, pos: usize) -> Point {
    let pos = pos.min(self.text.len_bytes());
    let line = self.text.byte_to_line(pos);
    let col = pos - self.text.line_to_byte(line);
    Point {
      x: (col as i32 - self.scroll_columns as i32) * CHAR_W,
      y: (line as i32 - self.top_visible_line as i32) * LINE_H,
    }
  }

  fn position_from_point(&self, point: Point) -> Option<usize> {
    let line = self.top_visible_line + (point.y.max(0) / LINE_H) as usize;
    let line = line.min(self.text.len_lines().saturating_sub(1));
    let col = self.scroll_columns + (point.x.max(0) / CHAR_W) as usize;
    Some((self.text.line_to_byte(line) + col).min(self.line_end(line)))
  }

  fn mouse_position(&self) -> Option<usize> {
    self.mouse
  }

  fn cursor_position(&self) -> usize {
    self.selection.1
  }

  fn selection_start(&self) -> usize {
    self.selection.0
  }

  fn selection_end(&self) -> usize {
    self.selection.1
  }

  fn set_selection(&mut self, from: usize, to: usize) {
    self.selection = (from, to);
  }

  fn is_spellcheck_excluded(&self, pos: usize) -> bool {
    self
      .excluded_ranges
      .iter()
      .any(|&(start, end)| (start..end).contains(&pos))
  }

  fn spellcheck_enabled(&self) -> bool {
    self.enabled
  }

  fn force_style_update(&mut self, from: usize, to: usize) {
    self.style_updates.push((from, to));
  }

  fn set_current_indicator(&mut self, indicator: u32) {
    self.current_indicator = indicator;
  }

  fn indicator_fill(&mut self, from: usize, to: usize) {
    if self.current_indicator != MISSPELLING_INDICATOR {
      return;
    }
    for i in from..to.min(self.underlines.len()) {
      self.underlines[i] = true;
    }
  }

  fn indicator_clear(&mut self, from: usize, to: usize) {
    if self.current_indicator != MISSPELLING_INDICATOR {
      return;
    }
    for i in from..to.min(self.underlines.len()) {
      self.underlines[i] = false;
    }
  }

  fn set_indicator_style(&mut self, _indicator: u32, style: UnderlineStyle) {
    self.style = Some(style);
  }

  fn set_indicator_color(&mut self, _indicator: u32, color: Color) {
    self.color = Some(color);
  }

  fn delete_range(&mut self, start: usize, len: usize) {
    let char_start = self.text.byte_to_char(start);
    let char_end = self.text.byte_to_char(start + len);
    self.text.remove(char_start..char_end);
    self.underlines = vec![false; self.text.len_bytes()];
  }

  fn begin_undo_group(&mut self) {
    self.undo_depth += 1;
    self.undo_groups += 1;
  }

  fn end_undo_group(&mut self) {
    self.undo_depth -= 1;
  }

  fn add_bookmark(&mut self, line: usize) {
    self.bookmarks.push(line);
  }
}

pub struct FakeSpeller {
  bad:             HashSet<String>,
  working:         Cell<bool>,
  pub batch_calls: Cell<usize>,
  pub word_calls:  Cell<usize>,
}

impl FakeSpeller {
  pub fn new(bad: &[&str]) -> Rc<Self> {
    Rc::new(Self {
      bad:         bad.iter().map(|w| w.to_lowercase()).collect(),
      working:     Cell::new(true),
      batch_calls: Cell::new(0),
      word_calls:  Cell::new(0),
    })
  }

  pub fn set_working(&self, working: bool) {
    self.working.set(working);
  }

  fn ok(&self, word: &SpellerWord) -> bool {
    !self.bad.contains(&word.text.to_lowercase())
  }
}

impl Speller for FakeSpeller {
  fn is_working(&self) -> bool {
    self.working.get()
  }

  fn check_word(&self, word: &SpellerWord) -> bool {
    self.word_calls.set(self.word_calls.get() + 1);
    self.ok(word)
  }

  fn check_words(&self, words: &[SpellerWord]) -> Vec<bool> {
    self.batch_calls.set(self.batch_calls.get() + 1);
    words.iter().map(|word| self.ok(word)).collect()
  }
}

pub struct Fixture {
  pub editor:   Rc<RefCell<MockEditor>>,
  pub speller:  Rc<FakeSpeller>,
  pub settings: Rc<SettingsStore>,
  pub spellers: Rc<SpellerContainer>,
  pub checker:  Rc<RefCell<SpellChecker>>,
}

pub fn fixture(text: &str, bad: &[&str]) -> Fixture {
  let editor = Rc::new(RefCell::new(MockEditor::new(text)));
  let speller = FakeSpeller::new(bad);
  let settings = Rc::new(SettingsStore::new(Settings::default()));
  let spellers = Rc::new(SpellerContainer::new(speller.clone()));
  let checker = SpellChecker::new(editor.clone(), settings.clone(), spellers.clone());
  Fixture {
    editor,
    speller,
    settings,
    spellers,
    checker,
  }
}
