//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a document from an id and raw text.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, text: &str) -> Document {
    Document::new(id, text)
}

/// Create documents with ids `doc0`, `doc1`, ... from raw texts.
pub fn make_docs(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| make_doc(&format!("doc{}", i), text))
        .collect()
}

/// Repeat `word` `count` times, space separated.
pub fn repeat_word(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}
