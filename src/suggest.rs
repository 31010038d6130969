//! Fallback suggestions for queries that match nothing.
//!
//! No scoring here: the first few pages and courses in index order. Cheap and
//! reproducible, so the same index always suggests the same entries.

use crate::types::{ContentIndex, ItemType, SearchResult};

/// Most suggestions ever returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Types eligible as suggestions.
pub const SUGGESTION_TYPES: [ItemType; 2] = [ItemType::Page, ItemType::Course];

/// First [`MAX_SUGGESTIONS`] pages and courses, in index order.
pub fn suggest(index: &ContentIndex) -> Vec<SearchResult> {
    index
        .iter()
        .filter(|item| SUGGESTION_TYPES.contains(&item.kind))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
