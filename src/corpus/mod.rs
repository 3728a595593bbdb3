// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting documents in front of the ranker.
//!
//! The ranker consumes already-materialized `{id, text}` pairs and trusts
//! them. This module is the boundary that produces those pairs from disk or
//! JSON and checks the one contract the ranker relies on: every id is
//! non-empty and unique within the set.

pub mod loader;

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::Document;

pub use loader::*;

/// Reject empty or duplicate ids.
///
/// Reports the first offending document in input order.
pub fn validate_documents(documents: &[Document]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
    for (index, doc) in documents.iter().enumerate() {
        if doc.id.is_empty() {
            return Err(Error::EmptyId { index });
        }
        if !seen.insert(doc.id.as_str()) {
            return Err(Error::DuplicateId(doc.id.clone()));
        }
    }
    Ok(())
}
