// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents get their numbers and their order.
//!
//! A document's score is the sum over distinct query terms of
//! `tf * idf`. Rare terms weigh more than common ones, a term nobody contains
//! weighs nothing, and there is no length normalization. Ordering is by score
//! descending with input order breaking ties.

mod core;
pub mod ranking;

pub use self::core::*;
