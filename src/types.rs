// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search core.
//!
//! Items come from an external content-gathering step and are frozen once they
//! land in a [`ContentIndex`]. Nothing in this crate mutates them; the pipeline
//! only reads, scores and clones.
//!
//! | Type             | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | `ItemType`       | The five fixed buckets results are grouped into |
//! | `SearchableItem` | One page/news/document/course/event entry       |
//! | `SearchResult`   | What callers get back (no score attached)       |
//! | `ContentIndex`   | The ordered, read-only item collection          |
//!
//! # Invariants
//!
//! - **ContentIndex order is meaningful**: it is the ranking tie-break and the
//!   suggestion order. Loading preserves the order of the source document.
//! - **Required fields are non-empty**: `id`, `title` and `url`. Checked by the
//!   loader in [`crate::index`], not by the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ITEM TYPE
// =============================================================================

/// Content kind. Closed set: grouping is total over exactly these five.
///
/// Declaration order is the fixed display order of the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Page,
    News,
    Document,
    Course,
    Event,
}

impl ItemType {
    /// All types in group order.
    pub const ALL: [ItemType; 5] = [
        ItemType::Page,
        ItemType::News,
        ItemType::Document,
        ItemType::Course,
        ItemType::Event,
    ];

    /// The JSON key for this type (`"page"`, `"news"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Page => "page",
            ItemType::News => "news",
            ItemType::Document => "document",
            ItemType::Course => "course",
            ItemType::Event => "event",
        }
    }

    /// Position of this type in [`ItemType::ALL`].
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ITEMS
// =============================================================================

/// A single searchable entry.
///
/// Optional fields that are absent behave exactly like empty strings during
/// matching; see [`SearchableItem::category_text`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl SearchableItem {
    /// Category, or `""` when absent.
    #[inline]
    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Breadcrumb, or `""` when absent.
    #[inline]
    pub fn breadcrumb_text(&self) -> &str {
        self.breadcrumb.as_deref().unwrap_or("")
    }
}

/// A result handed back to the caller.
///
/// Same shape as the indexed item: the relevance score is internal to ranking
/// and never leaves the crate.
pub type SearchResult = SearchableItem;

// =============================================================================
// CONTENT INDEX
// =============================================================================

/// The ordered, immutable collection of items eligible to be searched.
///
/// There is no `&mut` access once constructed. Sessions share one index through
/// an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentIndex {
    items: Vec<SearchableItem>,
}

impl ContentIndex {
    /// Wrap items without validation.
    ///
    /// Use [`ContentIndex::from_items`] or the JSON loaders when the items come
    /// from outside the process.
    pub fn new_unchecked(items: Vec<SearchableItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&SearchableItem> {
        self.items.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchableItem> {
        self.items.iter()
    }

    /// Number of items of each type, in [`ItemType::ALL`] order.
    pub fn type_counts(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for item in &self.items {
            counts[item.kind.slot()] += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a ContentIndex {
    type Item = &'a SearchableItem;
    type IntoIter = std::slice::Iter<'a, SearchableItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
