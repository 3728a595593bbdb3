// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: score descending, input order on ties.
//!
//! Tie handling comes from sort stability, not from a secondary key. The
//! comparator only looks at the score, and [`sort_ranked`] uses `sort_by`
//! (stable), so two documents with equal scores keep the order the caller
//! supplied them in.

use crate::types::RankedDocument;
use std::cmp::Ordering;

/// Compare two ranked documents: higher score sorts first.
///
/// Uses `total_cmp` so the ordering is total even for NaN, which the scorer
/// never produces but a hand-built `RankedDocument` could.
pub fn compare_ranked(a: &RankedDocument, b: &RankedDocument) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Drop zero-score documents, then stable-sort the rest by score descending.
pub fn sort_ranked(mut ranked: Vec<RankedDocument>) -> Vec<RankedDocument> {
    ranked.retain(|r| r.score > 0.0);
    ranked.sort_by(compare_ranked);
    ranked
}
