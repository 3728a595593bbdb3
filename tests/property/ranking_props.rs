//! Ranking invariants.

use crate::common::assert_result_well_formed;
use docrank::{rank, rank_scored, tokenize, Document};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small vocabulary so random documents and queries actually overlap.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "trash", "island", "ocean", "the", "is", "a", "shoot", "me", "at", "plastic", "gyre",
    ])
    .prop_map(str::to_string)
}

/// Words with optional case changes and attached punctuation.
fn noisy_word_strategy() -> impl Strategy<Value = String> {
    (word_strategy(), any::<bool>(), prop::sample::select(vec!["", ",", ".", "!", "?"]))
        .prop_map(|(word, upper, punct)| {
            let word = if upper { word.to_uppercase() } else { word };
            format!("{}{}", word, punct)
        })
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(noisy_word_strategy(), 0..12).prop_map(|w| w.join(" "))
}

/// Documents with unique ids `doc0..docN`.
fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(text_strategy(), 0..8).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document::new(format!("doc{}", i), text))
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(noisy_word_strategy(), 0..4).prop_map(|w| w.join(" "))
}

fn position(result: &[String], id: &str) -> Option<usize> {
    result.iter().position(|r| r == id)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: an empty document set always ranks to nothing.
    #[test]
    fn prop_empty_documents_empty_result(query in query_strategy()) {
        prop_assert!(rank(&[], &query).is_empty());
    }

    /// Property: a query with no terms ranks to nothing.
    #[test]
    fn prop_termless_query_empty_result(
        docs in corpus_strategy(),
        query in prop::sample::select(vec!["", "   ", "?!", ", . ;", "\n\t"]),
    ) {
        prop_assert!(tokenize(query).is_empty());
        prop_assert!(rank(&docs, query).is_empty());
    }

    /// Property: no duplicates and no invented ids.
    #[test]
    fn prop_result_ids_unique_and_known(docs in corpus_strategy(), query in query_strategy()) {
        let result = rank(&docs, &query);
        assert_result_well_formed(&result, &docs);
    }

    /// Property: a document is in the result iff it shares a term with the query.
    #[test]
    fn prop_irrelevant_documents_excluded(docs in corpus_strategy(), query in query_strategy()) {
        let result = rank(&docs, &query);
        let query_terms: HashSet<String> = tokenize(&query).into_iter().collect();

        for doc in &docs {
            let shares = tokenize(&doc.text).iter().any(|t| query_terms.contains(t));
            prop_assert_eq!(
                position(&result, &doc.id).is_some(),
                shares,
                "doc {} text {:?} query {:?}",
                &doc.id, &doc.text, &query
            );
        }
    }

    /// Property: output is sorted by score, ties in input order.
    #[test]
    fn prop_sorted_and_stable(docs in corpus_strategy(), query in query_strategy()) {
        let ranked = rank_scored(&docs, &query);
        let input_pos = |id: &str| docs.iter().position(|d| d.id == id).unwrap();

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(input_pos(&pair[0].id) < input_pos(&pair[1].id));
            }
        }
    }

    /// Property: ranking is deterministic.
    #[test]
    fn prop_deterministic(docs in corpus_strategy(), query in query_strategy()) {
        prop_assert_eq!(rank(&docs, &query), rank(&docs, &query));
    }

    /// Property: adding one more occurrence of a query term to a document
    /// never lowers its score, and never lets an unchanged document that was
    /// behind it overtake it.
    #[test]
    fn prop_monotone_in_term_frequency(
        docs in corpus_strategy(),
        query in query_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let terms = tokenize(&query);
        prop_assume!(!docs.is_empty() && !terms.is_empty());

        let target = pick.index(docs.len());
        let term = &terms[pick.index(terms.len())];
        // Only boost a term the document already has, so document frequencies
        // (and every other document's score) stay the same.
        prop_assume!(tokenize(&docs[target].text).contains(term));

        let before = rank_scored(&docs, &query);
        let mut boosted = docs.clone();
        boosted[target].text.push(' ');
        boosted[target].text.push_str(term);
        let after = rank_scored(&boosted, &query);

        let id = &docs[target].id;
        let score_of = |ranked: &[docrank::RankedDocument]| {
            ranked.iter().find(|r| &r.id == id).map(|r| r.score).unwrap_or(0.0)
        };
        prop_assert!(score_of(&after) >= score_of(&before));

        let ids_before: Vec<String> = before.iter().map(|r| r.id.clone()).collect();
        let ids_after: Vec<String> = after.iter().map(|r| r.id.clone()).collect();
        let pos_before = position(&ids_before, id).unwrap();
        let pos_after = position(&ids_after, id).unwrap();
        prop_assert!(pos_after <= pos_before);
    }
}
