// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tokenizer.
//!
//! Any byte soup must tokenize without panicking, and every term must be
//! non-empty and made only of word characters.

#![no_main]

use docrank::tokenize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for term in tokenize(&text) {
        assert!(!term.is_empty(), "Empty term from {:?}", text);
        assert!(
            term.chars().all(|c| c.is_alphanumeric() || c == '_'),
            "Non-word character in term {:?}",
            term
        );
    }
});
