// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for content index loading.
//!
//! Arbitrary bytes must either load into a valid index or produce an
//! `IndexError`. Never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::{evaluate, validate_items, ContentIndex};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(index) = ContentIndex::from_json(json) {
        // INVARIANT: anything that loads passes validation again
        assert!(validate_items(index.items()).is_ok());

        // INVARIANT: a loaded index can be searched
        let outcome = evaluate(&index, "ab");
        assert_eq!(outcome.grouped_results.total(), outcome.results.len());
    }
});
