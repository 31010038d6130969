// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored items get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Index position** - ascending, so equal scores keep content order
//!
//! The second key is written out in the comparator rather than inherited from
//! a stable sort. The comparator is a total order over distinct positions, so
//! any sort routine produces the same output.

use super::core::{score_fields, FoldedFields};
use crate::types::{ContentIndex, SearchResult, SearchableItem};
use std::cmp::Ordering;

/// An item paired with its relevance. Lives only for the duration of a ranking.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoredItem<'a> {
    pub position: usize,
    pub score: f64,
    pub item: &'a SearchableItem,
}

/// Compare two scored items for ranking (`Less` = ranks first).
pub(crate) fn compare_scored(a: &ScoredItem<'_>, b: &ScoredItem<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Score every item, drop non-matches and order the rest.
pub(crate) fn score_index<'a>(index: &'a ContentIndex, query: &str) -> Vec<ScoredItem<'a>> {
    let mut scored: Vec<ScoredItem<'a>> = index
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let score = score_fields(&FoldedFields::of(item), query);
            (score > 0.0).then_some(ScoredItem {
                position,
                score,
                item,
            })
        })
        .collect();

    scored.sort_unstable_by(compare_scored);
    scored
}

/// Ranked results for a normalized, searchable query. Scores are stripped.
pub fn rank(index: &ContentIndex, query: &str) -> Vec<SearchResult> {
    score_index(index, query)
        .into_iter()
        .map(|scored| scored.item.clone())
        .collect()
}
