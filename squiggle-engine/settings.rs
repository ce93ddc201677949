//! Engine configuration and its change notification.
//!
//! [`Settings`] is plain data with serde derives; hosts typically
//! deserialize it from their TOML configuration
//! ([`Settings::from_toml_str`]) and mutate it through a
//! [`SettingsStore`], which emits a change signal the engine reacts to
//! with a style refresh and a full visible re-check.

use std::cell::{
  Ref,
  RefCell,
};

use serde::{
  Deserialize,
  Serialize,
};
use squiggle_core::tokenizer::Tokenizer;
pub use squiggle_core::tokenizer::TokenizerMode;
use squiggle_event::Signal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderlineStyle {
  #[default]
  Squiggle,
  Dots,
  Plain,
  Box,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub tokenizer:            TokenizerMode,
  /// Punctuation that does not split a token (words mode).
  pub token_internal_chars: String,
  /// Skip tokens containing a digit. Purely numeric tokens are always
  /// skipped.
  pub ignore_with_digits:   bool,
  /// Skip ALL-CAPS tokens (acronyms).
  pub ignore_all_caps:      bool,
  /// Skip tokens with an uppercase letter past the first (camelCase,
  /// mixedCase).
  pub ignore_mixed_case:    bool,
  /// Skip URL-, path- and e-mail-shaped tokens.
  pub ignore_urls:          bool,
  pub ignore_one_letter:    bool,
  /// Strip leading/trailing apostrophes before checking.
  pub strip_apostrophes:    bool,
  /// Lower-case words before handing them to the speller.
  pub fold_case:            bool,
  pub underline_style:      UnderlineStyle,
  pub underline_color:      Color,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      tokenizer:            TokenizerMode::Words,
      token_internal_chars: "'’-".to_owned(),
      ignore_with_digits:   true,
      ignore_all_caps:      true,
      ignore_mixed_case:    true,
      ignore_urls:          true,
      ignore_one_letter:    false,
      strip_apostrophes:    true,
      fold_case:            false,
      underline_style:      UnderlineStyle::default(),
      underline_color:      Color { r: 255, g: 0, b: 0 },
    }
  }
}

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("invalid settings: {0}")]
  Parse(#[from] toml::de::Error),
}

impl Settings {
  pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
    Ok(toml::from_str(s)?)
  }

  pub fn tokenizer_for<'a>(&'a self, chars: &'a [char]) -> Tokenizer<'a> {
    Tokenizer::new(chars, self.tokenizer, &self.token_internal_chars)
  }
}

/// Shared, observable settings.
pub struct SettingsStore {
  data:    RefCell<Settings>,
  changed: Signal,
}

impl SettingsStore {
  pub fn new(settings: Settings) -> Self {
    Self {
      data:    RefCell::new(settings),
      changed: Signal::new(),
    }
  }

  pub fn get(&self) -> Ref<'_, Settings> {
    self.data.borrow()
  }

  pub fn update(&self, f: impl FnOnce(&mut Settings)) {
    f(&mut self.data.borrow_mut());
    self.changed.emit();
  }

  pub fn changed(&self) -> &Signal {
    &self.changed
  }
}
