// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search relevance.
//!
//! A score is the sum of independent weighted predicates over four fields.
//! Each predicate is a row in [`RULES`], evaluated in order, and contributes its
//! weight when it holds. No predicate looks at another's outcome except the
//! prefix rule, which explicitly excludes exact matches.
//!
//! # Weight table
//!
//! | Rule               | Condition                          | Weight |
//! |--------------------|------------------------------------|--------|
//! | `title_contains`   | title contains query               | 3.0    |
//! | `title_exact`      | title equals query                 | 5.0    |
//! | `title_prefix`     | title starts with query, not exact | 2.0    |
//! | `description`      | description contains query         | 1.0    |
//! | `category`         | category contains query            | 1.0    |
//! | `breadcrumb`       | breadcrumb contains query          | 0.5    |
//!
//! An exact title match therefore scores at least 8, a prefix match at least
//! 5, and any non-title match at most 2.5. Title matches always outrank items
//! that only match elsewhere.
//!
//! # Preconditions
//!
//! The query is already trimmed and case-folded (see [`crate::utils::normalize_query`])
//! and at least two characters long. The pipeline never calls the scorer
//! otherwise; an empty query would match every field.

use crate::types::SearchableItem;
use crate::utils::fold;

// =============================================================================
// WEIGHTS
// =============================================================================

/// Title contains the query anywhere.
pub const TITLE_CONTAINS_WEIGHT: f64 = 3.0;

/// Title equals the query (on top of `TITLE_CONTAINS_WEIGHT`).
pub const TITLE_EXACT_WEIGHT: f64 = 5.0;

/// Title starts with the query but is not an exact match.
pub const TITLE_PREFIX_WEIGHT: f64 = 2.0;

/// Description contains the query.
pub const DESCRIPTION_WEIGHT: f64 = 1.0;

/// Category contains the query.
pub const CATEGORY_WEIGHT: f64 = 1.0;

/// Breadcrumb contains the query.
pub const BREADCRUMB_WEIGHT: f64 = 0.5;

// =============================================================================
// FIELDS & RULES
// =============================================================================

/// An item's matchable fields, case-folded once per evaluation.
///
/// Absent optional fields fold to `""`, which contains no non-empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedFields {
    pub title: String,
    pub description: String,
    pub category: String,
    pub breadcrumb: String,
}

impl FoldedFields {
    pub fn of(item: &SearchableItem) -> Self {
        Self {
            title: fold(&item.title),
            description: fold(&item.description),
            category: fold(item.category_text()),
            breadcrumb: fold(item.breadcrumb_text()),
        }
    }
}

/// One row of the weight table.
#[derive(Debug, Clone, Copy)]
pub struct WeightedRule {
    pub name: &'static str,
    pub weight: f64,
    pub applies: fn(&FoldedFields, &str) -> bool,
}

/// The weight table, in evaluation order.
pub const RULES: [WeightedRule; 6] = [
    WeightedRule {
        name: "title_contains",
        weight: TITLE_CONTAINS_WEIGHT,
        applies: |f, q| f.title.contains(q),
    },
    WeightedRule {
        name: "title_exact",
        weight: TITLE_EXACT_WEIGHT,
        applies: |f, q| f.title == q,
    },
    WeightedRule {
        name: "title_prefix",
        weight: TITLE_PREFIX_WEIGHT,
        applies: |f, q| f.title != q && f.title.starts_with(q),
    },
    WeightedRule {
        name: "description",
        weight: DESCRIPTION_WEIGHT,
        applies: |f, q| f.description.contains(q),
    },
    WeightedRule {
        name: "category",
        weight: CATEGORY_WEIGHT,
        applies: |f, q| f.category.contains(q),
    },
    WeightedRule {
        name: "breadcrumb",
        weight: BREADCRUMB_WEIGHT,
        applies: |f, q| f.breadcrumb.contains(q),
    },
];

// =============================================================================
// SCORING
// =============================================================================

/// Relevance of `item` for a normalized `query`. Zero means no field matched.
pub fn score(item: &SearchableItem, query: &str) -> f64 {
    score_fields(&FoldedFields::of(item), query)
}

/// Sum the weights of every rule that holds for these fields.
pub fn score_fields(fields: &FoldedFields, query: &str) -> f64 {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(fields, query))
        .fold(0.0, |total, rule| total + rule.weight)
}

/// Names of the rules that fired, in table order. Used by `sitesearch search --explain`.
pub fn matched_rules(item: &SearchableItem, query: &str) -> Vec<&'static str> {
    let fields = FoldedFields::of(item);
    RULES
        .iter()
        .filter(|rule| (rule.applies)(&fields, query))
        .map(|rule| rule.name)
        .collect()
}
