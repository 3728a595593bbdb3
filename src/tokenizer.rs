// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text to terms.
//!
//! Whitespace splits words. Each word is case-folded and stripped of every
//! non-word character, so `"Shoot,"`, `"shoot"` and `"SHOOT!"` are one term and
//! `"can't"` becomes `"cant"`. Words left empty after stripping are dropped.
//!
//! There is deliberately no stemming and no stopword list: `"shooter"` is not
//! `"shoot"`, and `"the"` is a term like any other. Common words lose weight
//! through document frequency instead (see [`crate::scoring`]).

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Split `text` into normalized terms, in order of appearance.
///
/// Pure and deterministic. Empty or punctuation-only input yields no terms.
pub fn tokenize(text: &str) -> Vec<String> {
    compose(text)
        .split_whitespace()
        .filter_map(normalize_token)
        .collect()
}

/// Normalize a single whitespace-free word.
///
/// Lowercases, keeps alphanumerics and `_`, and returns `None` if nothing
/// survives. The whole word is lowercased before filtering: 'İ' lowercases
/// to a letter plus a combining mark, and a word-final 'Σ' only becomes 'ς'
/// when lowercased in context.
pub fn normalize_token(word: &str) -> Option<String> {
    let term: String = word.to_lowercase().chars().filter(|c| is_word_char(*c)).collect();

    if term.is_empty() {
        None
    } else {
        Some(term)
    }
}

/// Same character class as a regex `\w`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// NFC-compose so a precomposed "é" and "e" + combining acute are one term.
///
/// Without composition the combining mark is not a word character and would
/// be stripped, turning "café" into two different terms depending on how
/// the input was encoded.
#[cfg(feature = "unicode-normalization")]
fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Lightweight path: assumes input is already composed.
#[cfg(not(feature = "unicode-normalization"))]
fn compose(text: &str) -> String {
    text.to_string()
}
