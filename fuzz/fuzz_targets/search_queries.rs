// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary queries against a fixed index.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::testing::campus_index;
use sitesearch::{
    evaluate, is_searchable, normalize_query, ContentIndex, ItemType, MAX_SUGGESTIONS,
};
use std::sync::OnceLock;

static INDEX: OnceLock<ContentIndex> = OnceLock::new();

fuzz_target!(|query: &str| {
    if query.len() > 256 {
        return;
    }
    let index = INDEX.get_or_init(campus_index);
    let outcome = evaluate(index, query);
    let searchable = is_searchable(&normalize_query(query));

    // INVARIANT 1: groups partition the results by type
    assert_eq!(outcome.grouped_results.total(), outcome.results.len());
    for (kind, bucket) in outcome.grouped_results.iter() {
        assert!(bucket.iter().all(|r| r.kind == kind));
    }

    // INVARIANT 2: has_results mirrors results
    assert_eq!(outcome.has_results, !outcome.results.is_empty());

    // INVARIANT 3: suggestions only for unmatched searchable queries
    assert!(outcome.suggestions.len() <= MAX_SUGGESTIONS);
    if !outcome.suggestions.is_empty() {
        assert!(searchable && outcome.results.is_empty());
        assert!(outcome
            .suggestions
            .iter()
            .all(|s| matches!(s.kind, ItemType::Page | ItemType::Course)));
    }

    // INVARIANT 4: short queries produce nothing
    if !searchable {
        assert!(outcome.results.is_empty() && outcome.suggestions.is_empty());
    }

    // INVARIANT 5: deterministic
    assert_eq!(evaluate(index, query), outcome);
});
