// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Arbitrary texts and queries, checked against the output contract: ids are
//! unique and known, scores are finite and positive, order is score
//! descending with input order on ties, and two runs agree exactly.

#![no_main]

use arbitrary::Arbitrary;
use docrank::{rank_scored, Document};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Arbitrary, Debug)]
struct Input {
    texts: Vec<String>,
    query: String,
}

fuzz_target!(|input: Input| {
    // Cap corpus size; the ranker targets small sets.
    let docs: Vec<Document> = input
        .texts
        .into_iter()
        .take(32)
        .enumerate()
        .map(|(i, text)| Document::new(format!("doc{}", i), text))
        .collect();

    let first = rank_scored(&docs, &input.query);
    let second = rank_scored(&docs, &input.query);

    // INVARIANT 1: deterministic
    assert_eq!(first, second, "Same input ranked differently");

    // INVARIANT 2: unique, known ids
    let mut seen = HashSet::new();
    for r in &first {
        assert!(seen.insert(r.id.as_str()), "Duplicate id {}", r.id);
        assert!(docs.iter().any(|d| d.id == r.id), "Unknown id {}", r.id);
    }

    // INVARIANT 3: finite, positive scores
    for r in &first {
        assert!(r.score.is_finite() && r.score > 0.0, "Bad score {}", r.score);
    }

    // INVARIANT 4: descending, stable on ties
    let pos = |id: &str| docs.iter().position(|d| d.id == id).unwrap_or(usize::MAX);
    for pair in first.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Scores not descending");
        if pair[0].score == pair[1].score {
            assert!(pos(&pair[0].id) < pos(&pair[1].id), "Tie reordered");
        }
    }
});
