//! Scoring properties.
//!
//! - Scores are finite and non-negative
//! - Exact title matches dominate secondary-field-only matches
//! - Scoring ignores case

use crate::common::{arb_index, arb_query, make_item, make_item_full};
use proptest::prelude::*;
use sitesearch::{normalize_query, score, ItemType};

/// Oracle: the weight table written out as plain conditionals.
fn oracle_score(title: &str, secondary: [&str; 3], query: &str) -> f64 {
    let title = title.to_lowercase();
    let mut total = 0.0;
    if title.contains(query) {
        total += 3.0;
    }
    if title == query {
        total += 5.0;
    } else if title.starts_with(query) {
        total += 2.0;
    }
    for (field, weight) in secondary.iter().zip([1.0, 1.0, 0.5]) {
        if field.to_lowercase().contains(query) {
            total += weight;
        }
    }
    total
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_score_finite_and_non_negative(index in arb_index(), query in arb_query()) {
        let query = normalize_query(&query);
        prop_assume!(query.chars().count() >= 2);
        for item in index.iter() {
            let s = score(item, &query);
            prop_assert!(s.is_finite());
            prop_assert!(s >= 0.0);
        }
    }

    #[test]
    fn prop_score_matches_oracle(index in arb_index(), query in arb_query()) {
        let query = normalize_query(&query);
        prop_assume!(query.chars().count() >= 2);
        for item in index.iter() {
            let expected = oracle_score(
                &item.title,
                [&item.description, item.category_text(), item.breadcrumb_text()],
                &query,
            );
            prop_assert_eq!(score(item, &query), expected, "item {}", item.id);
        }
    }

    #[test]
    fn prop_exact_title_dominates_secondary(
        title in "[а-я]{2,8}",
        description in "[а-я ]{0,20}",
        category in "[а-я ]{0,10}",
        breadcrumb in "[а-я /]{0,20}",
    ) {
        let exact = make_item("exact", ItemType::Page, &title);
        let secondary = make_item_full(
            "secondary",
            ItemType::News,
            "xx",
            &format!("{} {}", description, title),
            Some(&format!("{}{}", title, category)),
            Some(&format!("{} / {}", breadcrumb, title)),
        );
        prop_assert!(score(&exact, &title) >= score(&secondary, &title));
    }

    #[test]
    fn prop_scoring_ignores_case(title in "[a-zа-я]{2,10}", cut in 2usize..=10) {
        let query: String = title.chars().take(cut).collect();
        prop_assume!(query.chars().count() >= 2);
        let lower = make_item("lower", ItemType::Page, &title);
        let upper = make_item("upper", ItemType::Page, &title.to_uppercase());
        prop_assert_eq!(score(&lower, &query), score(&upper, &query));
    }
}
