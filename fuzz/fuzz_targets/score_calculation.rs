// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, non-negative, bounded by the weight table and
//! deterministic. Ranking must follow them.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::scoring::RULES;
use sitesearch::{normalize_query, rank, score, ContentIndex, ItemType, SearchableItem};

#[derive(Debug, Arbitrary)]
struct FuzzItem {
    kind: u8,
    title: String,
    description: String,
    category: Option<String>,
    breadcrumb: Option<String>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    items: Vec<FuzzItem>,
    query: String,
}

fuzz_target!(|input: Input| {
    let query = normalize_query(&input.query);
    if query.chars().count() < 2 {
        return;
    }

    let items: Vec<SearchableItem> = input
        .items
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, f)| SearchableItem {
            id: i.to_string(),
            kind: ItemType::ALL[f.kind as usize % ItemType::ALL.len()],
            title: f.title,
            description: f.description,
            category: f.category,
            breadcrumb: f.breadcrumb,
            url: format!("/{}", i),
            date: None,
        })
        .collect();
    let index = ContentIndex::new_unchecked(items);
    let max_score: f64 = RULES.iter().map(|r| r.weight).sum();

    for item in index.iter() {
        let s = score(item, &query);

        // INVARIANT 1: finite, non-negative, bounded
        assert!(s.is_finite() && s >= 0.0 && s <= max_score, "bad score {}", s);

        // INVARIANT 2: deterministic
        assert_eq!(s, score(item, &query));
    }

    // INVARIANT 3: ranked by score descending, ties by index position
    let ranked = rank(&index, &query);
    assert!(ranked.iter().all(|r| score(r, &query) > 0.0));
    for pair in ranked.windows(2) {
        let (sa, sb) = (score(&pair[0], &query), score(&pair[1], &query));
        assert!(sa >= sb);
        if sa == sb {
            let pa: usize = pair[0].id.parse().unwrap();
            let pb: usize = pair[1].id.parse().unwrap();
            assert!(pa < pb);
        }
    }
});
