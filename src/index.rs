// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content index loading and validation.
//!
//! The index is built somewhere else (a static-site generator, a CMS export)
//! and handed over as JSON. This is the one place in the crate where things
//! can fail, so every check about item well-formedness lives here and the
//! search pipeline can assume clean input.
//!
//! Accepted shapes:
//!
//! ```text
//! [ { "id": "...", "type": "page", ... }, ... ]
//! { "items": [ { ... }, ... ] }
//! ```
//!
//! # Invariants enforced on load
//!
//! 1. **REQUIRED_FIELDS**: `id`, `title` and `url` are non-empty (after trimming)
//! 2. **UNIQUE_IDS**: no two items share an `id`
//! 3. **ORDER_PRESERVED**: items keep their source order
//!
//! Item types are checked by serde: an unknown `type` is a parse error.

use crate::types::{ContentIndex, SearchableItem};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Why an index could not be loaded.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read index: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid index JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("item {position} has an empty `{field}` field")]
    EmptyField {
        position: usize,
        field: &'static str,
    },
    #[error("duplicate item id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

#[derive(Deserialize)]
struct WrappedIndex {
    items: Vec<SearchableItem>,
}

/// Pick the shape from the first non-whitespace byte and parse it directly,
/// so serde_json reports the offending field with its line and column.
fn parse_items(json: &str) -> Result<Vec<SearchableItem>, serde_json::Error> {
    match json.trim_start().as_bytes().first() {
        Some(b'{') => serde_json::from_str::<WrappedIndex>(json).map(|wrapped| wrapped.items),
        _ => serde_json::from_str(json),
    }
}

impl ContentIndex {
    /// Validate and wrap items, keeping their order.
    pub fn from_items(items: Vec<SearchableItem>) -> Result<Self, IndexError> {
        validate_items(&items)?;
        tracing::debug!(items = items.len(), "content index validated");
        Ok(Self::new_unchecked(items))
    }

    /// Parse an index from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        Self::from_items(parse_items(json)?)
    }

    /// Parse an index from any reader (stdin, a file handle, ...).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, IndexError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_json(&raw)
    }

    /// Load an index file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let index = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), items = index.len(), "loaded content index");
        Ok(index)
    }
}

/// Check the load-time invariants, reporting the first violation found.
pub fn validate_items(items: &[SearchableItem]) -> Result<(), IndexError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());

    for (position, item) in items.iter().enumerate() {
        for (field, value) in [("id", &item.id), ("title", &item.title), ("url", &item.url)] {
            if value.trim().is_empty() {
                return Err(IndexError::EmptyField { position, field });
            }
        }

        if !seen.insert(item.id.as_str()) {
            let first = items
                .iter()
                .position(|other| other.id == item.id)
                .unwrap_or(position);
            return Err(IndexError::DuplicateId {
                id: item.id.clone(),
                first,
                second: position,
            });
        }
    }

    Ok(())
}
