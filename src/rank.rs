// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline: tokenize, count, score, filter, sort.
//!
//! Every call is independent. Document frequencies and scores live on the
//! call's stack and are dropped on return, so concurrent calls need no
//! coordination.

use tracing::{debug, trace};

use crate::scoring::ranking::sort_ranked;
use crate::scoring::{distinct_terms, score_terms};
use crate::stats::CorpusStats;
use crate::tokenizer::tokenize;
use crate::types::{Document, RankedDocument};

/// Rank `documents` by relevance to `query` and return their ids.
///
/// Zero-score documents are excluded. Equal scores keep input order. The
/// input slice is never reordered.
///
/// # Example
///
/// ```
/// use docrank::{rank, Document};
///
/// let docs = vec![
///     Document::new("doc1", "I can't shoot straight unless I've had a pint!"),
///     Document::new("doc2", "Don't shoot shoot shoot that thing at me."),
///     Document::new("doc3", "I'm your shooter."),
/// ];
/// assert_eq!(rank(&docs, "shoot at me, nerd"), vec!["doc2", "doc1"]);
/// ```
pub fn rank(documents: &[Document], query: &str) -> Vec<String> {
    rank_scored(documents, query)
        .into_iter()
        .map(|r| r.id)
        .collect()
}

/// Same pipeline as [`rank`], keeping each survivor's score.
pub fn rank_scored(documents: &[Document], query: &str) -> Vec<RankedDocument> {
    let query_terms = tokenize(query);
    if query_terms.is_empty() || documents.is_empty() {
        debug!(
            documents = documents.len(),
            query_terms = query_terms.len(),
            "nothing to rank"
        );
        return Vec::new();
    }
    let query = distinct_terms(&query_terms);

    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(&d.text)).collect();
    let stats = CorpusStats::from_tokenized(&tokenized);

    let scored: Vec<RankedDocument> = documents
        .iter()
        .zip(&tokenized)
        .map(|(doc, terms)| {
            let score = score_terms(
                terms,
                &query,
                stats.total_documents,
                &stats.document_frequency,
            );
            trace!(id = %doc.id, score, "scored document");
            RankedDocument {
                id: doc.id.clone(),
                score,
            }
        })
        .collect();

    let ranked = sort_ranked(scored);
    debug!(
        documents = documents.len(),
        query_terms = query.len(),
        vocabulary = stats.document_frequency.len(),
        matched = ranked.len(),
        "ranked documents"
    );
    ranked
}
