// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types: what goes into a ranking call and what comes out.
//!
//! Nothing here outlives a call. Documents are borrowed for the duration of
//! [`crate::rank`], and the ranked output is built fresh every time.

use serde::{Deserialize, Serialize};

/// A caller-supplied document.
///
/// `id` is opaque to the ranker and must be unique within one call.
/// `text` is raw, unnormalized content.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A document that survived ranking, with the score it was ranked by.
///
/// Scores are always strictly positive here: zero-score documents are
/// filtered out before this type is built.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RankedDocument {
    pub id: String,
    pub score: f64,
}

/// JSON payload accepted by the CLI and [`crate::corpus::load_payload`].
///
/// ```json
/// { "documents": [ { "id": "doc1", "text": "..." } ] }
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct Payload {
    #[serde(default)]
    pub documents: Vec<Document>,
}
