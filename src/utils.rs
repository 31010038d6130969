//! Utility functions for query and field text.

/// Minimum settled query length (in characters) that triggers a search.
pub const MIN_QUERY_CHARS: usize = 2;

/// Prepare a raw query for matching: trim, then case-fold.
///
/// Only whitespace at the ends is touched. Inner whitespace is part of the
/// substring being searched for, so "курс біб" stays two words apart.
///
/// - "  Бібліот " → "бібліот"
/// - "NEWS" → "news"
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-fold field text the same way queries are folded.
#[inline]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Is this (already normalized) query long enough to run the scorer?
///
/// Counts characters, not bytes: "бі" is two characters but four bytes.
#[inline]
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}
