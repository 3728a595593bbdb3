// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! # Inverse document frequency
//!
//! ```text
//! idf(N, df) = 0                                   if df = 0
//!            = log2(1 + (N - df + 1) / (df + 0.5))  otherwise
//! ```
//!
//! Properties the ranker relies on:
//!
//! | Property | Why it holds |
//! |----------|--------------|
//! | Non-increasing in `df` | numerator falls, denominator rises |
//! | Finite at `df = N` | `log2(1 + 1 / (N + 0.5))`, small but positive |
//! | Zero-safe at `df = 0` | short-circuits before dividing |
//! | Positive for `1 <= df <= N` | argument of `log2` is always `> 1` |
//!
//! A `df` larger than `N` can only come from inconsistent caller data; it is
//! clamped to `N` so the result stays positive and finite.
//!
//! # Document score
//!
//! ```text
//! score(d, q) = sum over distinct t in q of tf(t, d) * idf(N, df(t))
//! ```
//!
//! No length normalization: a short document repeating a term three times
//! beats a long one containing it once.

use std::collections::{HashMap, HashSet};

use crate::tokenizer::tokenize;
use crate::types::Document;

/// Weight of a term given how many of `total_documents` contain it.
pub fn inverse_document_frequency(total_documents: usize, doc_freq: usize) -> f64 {
    if doc_freq == 0 || total_documents == 0 {
        return 0.0;
    }
    let n = total_documents as f64;
    let df = doc_freq.min(total_documents) as f64;
    (1.0 + (n - df + 1.0) / (df + 0.5)).log2()
}

/// Contribution of one query term to one document.
#[inline]
pub fn term_contribution(term_frequency: usize, idf: f64) -> f64 {
    term_frequency as f64 * idf
}

/// Occurrence count of each term in a token sequence.
pub fn term_frequencies(terms: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(terms.len());
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Distinct terms in first-occurrence order.
pub fn distinct_terms(terms: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(terms.len());
    terms
        .iter()
        .map(String::as_str)
        .filter(|t| seen.insert(*t))
        .collect()
}

/// Score a document against already-normalized query terms.
///
/// Duplicate query terms count once. Returns `0.0` exactly when the
/// document shares no query term with the corpus vocabulary.
pub fn score(
    document: &Document,
    query_terms: &[String],
    total_documents: usize,
    document_frequency: &HashMap<String, usize>,
) -> f64 {
    let doc_terms = tokenize(&document.text);
    let query = distinct_terms(query_terms);
    score_terms(&doc_terms, &query, total_documents, document_frequency)
}

/// Score from pre-tokenized document terms and distinct query terms.
///
/// This is what [`crate::rank`] calls so each document is tokenized once per
/// call rather than once for statistics and again for scoring.
pub fn score_terms(
    doc_terms: &[String],
    distinct_query: &[&str],
    total_documents: usize,
    document_frequency: &HashMap<String, usize>,
) -> f64 {
    if doc_terms.is_empty() || distinct_query.is_empty() {
        return 0.0;
    }

    let tf = term_frequencies(doc_terms);

    distinct_query
        .iter()
        .filter_map(|term| {
            let count = *tf.get(term)?;
            let df = document_frequency.get(*term).copied().unwrap_or(0);
            Some(term_contribution(
                count,
                inverse_document_frequency(total_documents, df),
            ))
        })
        .sum()
}
