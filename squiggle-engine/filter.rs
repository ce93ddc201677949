//! Token eligibility and normalization.
//!
//! A token that fails any predicate here is simply never handed to the
//! speller, which makes it correct by construction: no underline, no
//! navigation stop.

use squiggle_core::tokenizer::Token;

use crate::{
  settings::Settings,
  speller::SpellerWord,
};

fn is_apostrophe(ch: char) -> bool {
  matches!(ch, '\'' | '’')
}

/// Narrow a token past any leading/trailing apostrophes, so `'tis` checks
/// as `tis` and quoted words drop their quotes. The narrowed span is also
/// what gets underlined and selected.
pub(crate) fn strip_boundary_apostrophes(settings: &Settings, chars: &[char], token: Token) -> Token {
  if !settings.strip_apostrophes {
    return token;
  }
  let mut token = token;
  while token.start < token.end && is_apostrophe(chars[token.start]) {
    token.start += 1;
  }
  while token.end > token.start && is_apostrophe(chars[token.end - 1]) {
    token.end -= 1;
  }
  token
}

fn looks_like_url(word: &[char]) -> bool {
  let text: String = word.iter().collect();
  text.contains("://")
    || text.starts_with("www.")
    || text.contains('/')
    || text.contains('\\')
    || (text.contains('@') && text.contains('.'))
}

/// Whether a token should be checked at all. `excluded` is the host's
/// verdict on the token's position (styled as code, markup, ...).
pub(crate) fn is_eligible(settings: &Settings, chars: &[char], token: Token, excluded: bool) -> bool {
  if token.is_empty() || excluded {
    return false;
  }
  let word = &chars[token.range()];

  // A word has to contain a letter; bare numbers and punctuation runs are
  // never spelling mistakes.
  if !word.iter().any(|c| c.is_alphabetic()) {
    return false;
  }
  if settings.ignore_one_letter && word.len() == 1 {
    return false;
  }
  if settings.ignore_with_digits && word.iter().any(|c| c.is_numeric()) {
    return false;
  }

  let mut letters = word.iter().filter(|c| c.is_alphabetic());
  let first_is_upper = letters.next().is_some_and(|c| c.is_uppercase());
  let mut rest_upper = false;
  let mut rest_lower = false;
  for c in letters {
    if c.is_uppercase() {
      rest_upper = true;
    } else if c.is_lowercase() {
      rest_lower = true;
    }
  }
  let all_caps = first_is_upper && !rest_lower;
  if all_caps {
    if settings.ignore_all_caps && word.len() > 1 {
      return false;
    }
  } else if rest_upper && settings.ignore_mixed_case {
    return false;
  }

  if settings.ignore_urls && looks_like_url(word) {
    return false;
  }

  true
}

/// Build the canonical form handed to the speller. The sentence-final
/// attribute is derived from the character following the token.
pub(crate) fn to_speller_word(settings: &Settings, chars: &[char], token: Token) -> SpellerWord {
  let mut text: String = chars[token.range()].iter().collect();
  if settings.fold_case {
    text = text.to_lowercase();
  }
  SpellerWord {
    text,
    ends_with_dot: chars.get(token.end) == Some(&'.'),
  }
}
