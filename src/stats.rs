// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-call corpus statistics.
//!
//! Document frequency is counted over exactly the documents handed to one
//! ranking call. Nothing is cached: a different document set is a different
//! corpus.

use std::collections::{HashMap, HashSet};

use crate::tokenizer::tokenize;
use crate::types::Document;

/// Corpus-wide numbers the scorer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Number of documents in the call.
    pub total_documents: usize,
    /// Term -> number of documents containing it at least once.
    ///
    /// Terms that occur nowhere are absent (implicit DF of zero).
    pub document_frequency: HashMap<String, usize>,
}

impl CorpusStats {
    /// Tokenize every document once and count document frequencies.
    pub fn from_documents(documents: &[Document]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(&d.text)).collect();
        Self::from_tokenized(&tokenized)
    }

    /// Same as [`CorpusStats::from_documents`] for already tokenized texts.
    pub fn from_tokenized(tokenized: &[Vec<String>]) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for terms in tokenized {
            let distinct: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        Self {
            total_documents: tokenized.len(),
            document_frequency,
        }
    }

    /// Document frequency of `term`, zero if no document contains it.
    pub fn df(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }
}

/// Count, for each term, how many of `documents` contain it.
pub fn document_frequency(documents: &[Document]) -> HashMap<String, usize> {
    CorpusStats::from_documents(documents).document_frequency
}
