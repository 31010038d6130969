//! Grouping is total and loses nothing.

use crate::common::{campus_index, ids};
use sitesearch::{evaluate, group, ItemType};

#[test]
fn test_all_keys_present_in_json() {
    let outcome = evaluate(&campus_index(), "право");
    let value = serde_json::to_value(&outcome).unwrap();
    let grouped = value["groupedResults"].as_object().unwrap();

    assert_eq!(grouped.len(), 5);
    for kind in ItemType::ALL {
        assert!(grouped.contains_key(kind.as_str()), "missing key {}", kind);
    }
}

#[test]
fn test_groups_partition_results() {
    let outcome = evaluate(&campus_index(), "ні");
    assert!(outcome.has_results);
    assert_eq!(outcome.grouped_results.total(), outcome.results.len());

    for (kind, bucket) in outcome.grouped_results.iter() {
        assert!(bucket.iter().all(|r| r.kind == kind));
    }
}

#[test]
fn test_bucket_order_follows_rank() {
    let outcome = evaluate(&campus_index(), "ні");
    for (kind, bucket) in outcome.grouped_results.iter() {
        let expected: Vec<&str> = outcome
            .results
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids(bucket), expected);
    }
}

#[test]
fn test_group_of_nothing() {
    let grouped = group(&[]);
    assert_eq!(grouped.total(), 0);
    assert!(ItemType::ALL.iter().all(|&k| grouped.get(k).is_empty()));
}
