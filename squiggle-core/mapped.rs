//! Decoded text windows with raw-offset mapping.
//!
//! The host buffer addresses text in its own raw units (bytes for UTF-8
//! documents, one unit per byte for single-byte codepages). Everything
//! above this module works on decoded characters instead, so every decoded
//! window carries a table translating character indices back to raw
//! offsets.
//!
//! A [`MappedText`] is a snapshot: it is built from a byte range of the
//! buffer and stays valid only until the buffer changes. Callers re-extract
//! after every edit rather than patching an existing window.

use std::ops::Range;

/// How the host buffer's raw bytes map to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
  Utf8,
  /// A single-byte codepage: exactly one character per byte.
  SingleByte(&'static encoding_rs::Encoding),
}

/// A decoded slice of the buffer plus its raw-offset mapping.
///
/// The mapping has one entry per decoded character and a final entry equal
/// to the raw offset one past the window, so `to_original_index(len())` is
/// the window's exclusive raw end. Entries are strictly increasing.
#[derive(Debug, Clone)]
pub struct MappedText {
  chars:   Vec<char>,
  mapping: Vec<usize>,
}

impl MappedText {
  /// Decode `bytes`, taken from the buffer at raw offset `raw_start`.
  ///
  /// Invalid UTF-8 sequences decode to one U+FFFD per invalid run; the run
  /// keeps its raw width so offsets around it stay exact.
  pub fn decode(bytes: &[u8], encoding: TextEncoding, raw_start: usize) -> Self {
    let mut chars = Vec::with_capacity(bytes.len());
    let mut mapping = Vec::with_capacity(bytes.len() + 1);

    match encoding {
      TextEncoding::Utf8 => {
        let mut offset = raw_start;
        for chunk in bytes.utf8_chunks() {
          for ch in chunk.valid().chars() {
            chars.push(ch);
            mapping.push(offset);
            offset += ch.len_utf8();
          }
          if !chunk.invalid().is_empty() {
            chars.push(char::REPLACEMENT_CHARACTER);
            mapping.push(offset);
            offset += chunk.invalid().len();
          }
        }
        mapping.push(offset);
      },
      TextEncoding::SingleByte(encoding) => {
        let (decoded, _) = encoding.decode_without_bom_handling(bytes);
        for (i, ch) in decoded.chars().enumerate() {
          chars.push(ch);
          mapping.push(raw_start + i);
        }
        mapping.push(raw_start + bytes.len());
      },
    }

    Self { chars, mapping }
  }

  pub fn len(&self) -> usize {
    self.chars.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chars.is_empty()
  }

  pub fn chars(&self) -> &[char] {
    &self.chars
  }

  /// Raw offset of the first decoded character (window start when empty).
  pub fn raw_start(&self) -> usize {
    self.mapping[0]
  }

  /// Exclusive raw end of the window.
  pub fn raw_end(&self) -> usize {
    self.mapping[self.chars.len()]
  }

  /// Raw offset of the character at `index`; `index == len()` gives the
  /// exclusive raw end. Out-of-range indices clamp.
  pub fn to_original_index(&self, index: usize) -> usize {
    self.mapping[index.min(self.chars.len())]
  }

  /// Nearest decoded index whose raw offset is `<= raw`, clamped into
  /// `0..=len()`. Inverse of [`to_original_index`](Self::to_original_index)
  /// at character boundaries; raw offsets inside a multi-byte character
  /// resolve to that character.
  pub fn from_original_index(&self, raw: usize) -> usize {
    self
      .mapping
      .partition_point(|&offset| offset <= raw)
      .saturating_sub(1)
  }

  /// Drop everything from decoded index `len` on; the raw end becomes the
  /// raw offset of the first dropped character.
  pub fn truncate(&mut self, len: usize) {
    if len < self.chars.len() {
      self.chars.truncate(len);
      self.mapping.truncate(len + 1);
    }
  }

  pub fn slice_string(&self, range: Range<usize>) -> String {
    self.chars[range].iter().collect()
  }
}
