// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Partition ranked results into the five fixed type buckets.
//!
//! `GroupedResults` has one field per [`ItemType`], so a missing key is not
//! representable. Grouping is a single pass that appends each result to its
//! bucket, which keeps rank order inside every bucket.
//!
//! **Invariant**: the buckets together hold exactly the ranked list. Every
//! result lands in the one bucket matching its type; nothing is dropped or
//! duplicated.

use crate::types::{ItemType, SearchResult};
use serde::{Deserialize, Serialize};

/// Ranked results keyed by type. Serializes as an object with all five keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedResults {
    pub page: Vec<SearchResult>,
    pub news: Vec<SearchResult>,
    pub document: Vec<SearchResult>,
    pub course: Vec<SearchResult>,
    pub event: Vec<SearchResult>,
}

impl GroupedResults {
    /// The bucket for one type.
    pub fn get(&self, kind: ItemType) -> &[SearchResult] {
        match kind {
            ItemType::Page => &self.page,
            ItemType::News => &self.news,
            ItemType::Document => &self.document,
            ItemType::Course => &self.course,
            ItemType::Event => &self.event,
        }
    }

    fn bucket_mut(&mut self, kind: ItemType) -> &mut Vec<SearchResult> {
        match kind {
            ItemType::Page => &mut self.page,
            ItemType::News => &mut self.news,
            ItemType::Document => &mut self.document,
            ItemType::Course => &mut self.course,
            ItemType::Event => &mut self.event,
        }
    }

    /// All buckets in fixed type order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (ItemType, &[SearchResult])> + '_ {
        ItemType::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Total number of grouped results.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, bucket)| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Group a ranked list by item type, preserving rank order within each group.
pub fn group(ranked: &[SearchResult]) -> GroupedResults {
    let mut grouped = GroupedResults::default();
    for result in ranked {
        grouped.bucket_mut(result.kind).push(result.clone());
    }
    grouped
}
