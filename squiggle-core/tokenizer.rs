//! Word-boundary scanning over decoded text.
//!
//! A [`Tokenizer`] borrows a decoded character slice (see
//! [`crate::mapped::MappedText`]) and finds token boundaries in it. Two
//! modes exist:
//!
//! - [`TokenizerMode::Words`]: a token is a maximal run of alphanumeric
//!   characters plus a configurable set of token-internal punctuation
//!   (apostrophes and hyphens by default), so `don't` and `well-known`
//!   are single tokens.
//! - [`TokenizerMode::Whitespace`]: a token is a maximal run of
//!   non-whitespace characters, left exactly as written.
//!
//! Boundary rule: a character at a token boundary belongs to the token it
//! terminates, never to the following one. Empty tokens are never
//! produced.

use crate::chars::{
  CharCategory,
  categorize_char,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(rename_all = "lowercase")
)]
pub enum TokenizerMode {
  #[default]
  Words,
  Whitespace,
}

/// A token view into a decoded character slice: `[start, end)` in decoded
/// indices. Only meaningful together with the slice that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
  pub start: usize,
  pub end:   usize,
}

impl Token {
  pub fn len(&self) -> usize {
    self.end - self.start
  }

  pub fn is_empty(&self) -> bool {
    self.end == self.start
  }

  pub fn range(&self) -> std::ops::Range<usize> {
    self.start..self.end
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
  chars:    &'a [char],
  mode:     TokenizerMode,
  /// Punctuation that does not split a token in [`TokenizerMode::Words`].
  internal: &'a str,
}

impl<'a> Tokenizer<'a> {
  pub fn new(chars: &'a [char], mode: TokenizerMode, internal: &'a str) -> Self {
    Self {
      chars,
      mode,
      internal,
    }
  }

  pub fn is_word_char(&self, ch: char) -> bool {
    match self.mode {
      TokenizerMode::Words => {
        categorize_char(ch) == CharCategory::Word || self.internal.contains(ch)
      },
      TokenizerMode::Whitespace => categorize_char(ch) != CharCategory::Whitespace,
    }
  }

  /// Start of the token containing `index`, or of the nearest token before
  /// it. Walks backward over non-word characters first, then over the word
  /// run. Returns 0 when no token starts before `index`.
  pub fn prev_token_begin(&self, index: usize) -> usize {
    if self.chars.is_empty() {
      return 0;
    }
    let mut i = index.min(self.chars.len() - 1);
    while i > 0 && !self.is_word_char(self.chars[i]) {
      i -= 1;
    }
    if !self.is_word_char(self.chars[i]) {
      return i;
    }
    while i > 0 && self.is_word_char(self.chars[i - 1]) {
      i -= 1;
    }
    i
  }

  /// Exclusive end of the token containing `index`, or of the nearest
  /// token after it. Returns `len` when no token ends after `index`.
  pub fn next_token_end(&self, index: usize) -> usize {
    let len = self.chars.len();
    let mut i = index.min(len);
    while i < len && !self.is_word_char(self.chars[i]) {
      i += 1;
    }
    while i < len && self.is_word_char(self.chars[i]) {
      i += 1;
    }
    i
  }

  /// The token at or nearest to `index`: its start comes from
  /// [`prev_token_begin`](Self::prev_token_begin), its end from
  /// [`next_token_end`](Self::next_token_end). `None` when the slice holds
  /// no word characters at all.
  pub fn word_at(&self, index: usize) -> Option<Token> {
    let begin = self.prev_token_begin(index);
    let end = self.next_token_end(begin);
    // When `index` precedes the first token, `begin` lands on a separator;
    // snap forward so the span never includes non-word characters.
    let start = (begin..end).find(|&i| self.is_word_char(self.chars[i]))?;
    Some(Token { start, end })
  }

  /// All tokens, left to right. Lazy; never yields empty or overlapping
  /// tokens.
  pub fn tokens(&self) -> Tokens<'a> {
    Tokens {
      tokenizer: *self,
      pos:       0,
    }
  }
}

pub struct Tokens<'a> {
  tokenizer: Tokenizer<'a>,
  pos:       usize,
}

impl Iterator for Tokens<'_> {
  type Item = Token;

  fn next(&mut self) -> Option<Token> {
    let chars = self.tokenizer.chars;
    let mut start = self.pos;
    while start < chars.len() && !self.tokenizer.is_word_char(chars[start]) {
      start += 1;
    }
    if start == chars.len() {
      self.pos = start;
      return None;
    }
    let mut end = start + 1;
    while end < chars.len() && self.tokenizer.is_word_char(chars[end]) {
      end += 1;
    }
    self.pos = end;
    Some(Token { start, end })
  }
}
