//! Pipeline invariants over random indexes and queries.

use crate::common::{arb_index, arb_query, position_of};
use proptest::prelude::*;
use sitesearch::{
    evaluate, is_searchable, normalize_query, score, ItemType, MAX_SUGGESTIONS,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Short queries never search, never suggest.
    #[test]
    fn prop_short_query_is_empty(index in arb_index(), query in "\\s{0,3}[a-zа-я]?\\s{0,3}") {
        let outcome = evaluate(&index, &query);
        prop_assert!(outcome.results.is_empty());
        prop_assert!(outcome.suggestions.is_empty());
        prop_assert!(!outcome.is_searching);
        prop_assert!(!outcome.has_results);
        prop_assert_eq!(outcome.grouped_results.iter().count(), 5);
        prop_assert!(outcome.grouped_results.iter().all(|(_, bucket)| bucket.is_empty()));
    }

    /// Groups partition results exactly, each under its own type.
    #[test]
    fn prop_grouping_complete(index in arb_index(), query in arb_query()) {
        let outcome = evaluate(&index, &query);
        prop_assert_eq!(outcome.grouped_results.total(), outcome.results.len());
        for (kind, bucket) in outcome.grouped_results.iter() {
            prop_assert!(bucket.iter().all(|r| r.kind == kind));
            let in_results = outcome.results.iter().filter(|r| r.kind == kind).count();
            prop_assert_eq!(bucket.len(), in_results);
        }
    }

    /// Ranked by score descending, ties by index position ascending.
    #[test]
    fn prop_ranking_order(index in arb_index(), query in arb_query()) {
        let outcome = evaluate(&index, &query);
        let normalized = normalize_query(&query);
        for pair in outcome.results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (sa, sb) = (score(a, &normalized), score(b, &normalized));
            prop_assert!(sa >= sb, "{} ({}) ranked before {} ({})", a.id, sa, b.id, sb);
            if sa == sb {
                prop_assert!(position_of(&index, &a.id) < position_of(&index, &b.id));
            }
        }
    }

    /// Every matching item is returned, nothing else is.
    #[test]
    fn prop_results_are_exactly_the_matches(index in arb_index(), query in arb_query()) {
        let normalized = normalize_query(&query);
        prop_assume!(is_searchable(&normalized));
        let outcome = evaluate(&index, &query);
        let expected = index.iter().filter(|item| score(item, &normalized) > 0.0).count();
        prop_assert_eq!(outcome.results.len(), expected);
    }

    /// Suggestions: bounded, page/course only, only when nothing matched.
    #[test]
    fn prop_suggestion_bounds(index in arb_index(), query in arb_query()) {
        let outcome = evaluate(&index, &query);
        prop_assert!(outcome.suggestions.len() <= MAX_SUGGESTIONS);
        prop_assert!(outcome
            .suggestions
            .iter()
            .all(|s| matches!(s.kind, ItemType::Page | ItemType::Course)));
        if !outcome.suggestions.is_empty() {
            prop_assert!(outcome.results.is_empty());
            prop_assert!(is_searchable(&normalize_query(&query)));
        }
    }

    /// Same query, same index, same outcome.
    #[test]
    fn prop_evaluation_idempotent(index in arb_index(), query in arb_query()) {
        prop_assert_eq!(evaluate(&index, &query), evaluate(&index, &query));
    }
}
