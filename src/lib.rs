//! Debounced site search: substring scoring, ranking, grouping and suggestions.
//!
//! This crate is the search core behind a website's global search modal. A
//! static content index (pages, news, documents, courses, events) is searched
//! with case-insensitive substring matching while the user types.
//!
//! # Architecture
//!
//! ```text
//! keystrokes ─▶ ┌──────────────┐ settled ┌───────────┐ ranked ┌──────────┐
//!               │  debounce/   │────────▶│ scoring/  │───────▶│ group.rs │
//!               │ (Debounce-   │  query  │ (score,   │        │          │
//!               │  Controller) │         │  rank)    │        └────┬─────┘
//!               └──────────────┘         └─────┬─────┘             │
//!                                              │ empty?            ▼
//!                                        ┌─────▼──────┐     ┌────────────┐
//!                                        │ suggest.rs │────▶│ search.rs  │
//!                                        └────────────┘     │ (Outcome)  │
//!                                                           └────────────┘
//! ```
//!
//! | Module      | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `types`     | `SearchableItem`, `ItemType`, `ContentIndex`      |
//! | `index`     | JSON loading and load-time validation             |
//! | `scoring`   | Weighted predicate table, ranking comparator      |
//! | `group`     | Total grouping over the five item types           |
//! | `suggest`   | Fallback pages and courses                        |
//! | `search`    | The pure pipeline, `evaluate`                     |
//! | `debounce`  | Timer handle and debounce controller (`session`)  |
//! | `session`   | Debounced session over a shared index (`session`) |
//!
//! # Usage
//!
//! ```
//! use sitesearch::{evaluate, ContentIndex};
//!
//! let index = ContentIndex::from_json(r#"[
//!     {"id": "a1", "type": "page", "title": "Бібліотека", "url": "/library"},
//!     {"id": "a3", "type": "page", "title": "Контакти", "url": "/contacts"}
//! ]"#).unwrap();
//!
//! let outcome = evaluate(&index, "бібліот");
//! assert_eq!(outcome.results.len(), 1);
//! assert_eq!(outcome.grouped_results.page[0].id, "a1");
//! ```

pub mod config;
#[cfg(feature = "session")]
pub mod debounce;
mod group;
mod index;
pub mod scoring;
mod search;
#[cfg(feature = "session")]
mod session;
mod suggest;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{ConfigError, SearchConfig};
#[cfg(feature = "session")]
pub use debounce::{DebounceController, DebounceState, TimerHandle, DEFAULT_DEBOUNCE};
pub use group::{group, GroupedResults};
pub use index::{validate_items, IndexError};
pub use scoring::ranking::rank;
pub use scoring::score;
pub use search::{evaluate, SearchOutcome};
#[cfg(feature = "session")]
pub use session::{SearchSession, SessionPhase};
pub use suggest::{suggest, MAX_SUGGESTIONS, SUGGESTION_TYPES};
pub use types::{ContentIndex, ItemType, SearchResult, SearchableItem};
pub use utils::{is_searchable, normalize_query, MIN_QUERY_CHARS};

#[cfg(feature = "wasm")]
pub use wasm::SiteSearch;
