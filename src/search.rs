// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The synchronous search pipeline: settled query in, display-ready outcome out.
//!
//! ```text
//! settled query ─▶ normalize ─▶ len < 2? ──yes──▶ empty outcome
//!                                  │ no
//!                                  ▼
//!                            score + rank ─▶ group
//!                                  │
//!                          ranked empty? ──yes──▶ suggest
//! ```
//!
//! Pure: the same index and query always produce an identical outcome. The
//! debounced session in [`crate::session`] only decides *when* to call
//! [`evaluate`].

use crate::group::{group, GroupedResults};
use crate::scoring::ranking::rank;
use crate::suggest::suggest;
use crate::types::{ContentIndex, SearchResult};
use crate::utils::{is_searchable, normalize_query};
use serde::{Deserialize, Serialize};

/// Everything the search modal needs to render one state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub grouped_results: GroupedResults,
    pub is_searching: bool,
    pub has_results: bool,
    /// Fallback entries, only when nothing matched a long-enough query.
    pub suggestions: Vec<SearchResult>,
    /// The settled query this outcome was computed for, as typed.
    pub query: String,
}

impl SearchOutcome {
    /// The "type to search" state for `query`.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Run the whole pipeline for one settled query.
pub fn evaluate(index: &ContentIndex, settled_query: &str) -> SearchOutcome {
    let query = normalize_query(settled_query);
    if !is_searchable(&query) {
        return SearchOutcome::empty(settled_query);
    }

    let results = rank(index, &query);
    let grouped_results = group(&results);
    let suggestions = if results.is_empty() {
        suggest(index)
    } else {
        Vec::new()
    };

    tracing::debug!(
        query = %query,
        results = results.len(),
        suggestions = suggestions.len(),
        "evaluated query"
    );

    SearchOutcome {
        has_results: !results.is_empty(),
        results,
        grouped_results,
        is_searching: false,
        suggestions,
        query: settled_query.to_string(),
    }
}
