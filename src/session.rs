// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A live search session: raw keystrokes in, outcomes out.
//!
//! Wires a [`DebounceController`] to the pure pipeline in [`crate::search`].
//! The index is shared read-only through an `Arc`; the session never writes to
//! it. Evaluation is cached per settled query, so reading the outcome many
//! times between keystrokes costs one evaluation.
//!
//! # Phases
//!
//! ```text
//!          keystroke            delay elapsed
//!  Idle ───────────▶ Debouncing ─────────────▶ Results | NoResults
//!   ▲                  ▲   │                        │
//!   │                  └───┘ keystroke              │ keystroke
//!   └── settled query shorter than 2 ◀──────────────┘ (back to Debouncing)
//! ```

use crate::config::SearchConfig;
use crate::debounce::{DebounceController, DebounceState};
use crate::search::{evaluate, SearchOutcome};
use crate::types::ContentIndex;
use crate::utils::{is_searchable, normalize_query};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Where the session is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing long enough to search has settled.
    Idle,
    /// A newer query is waiting out the debounce delay.
    Debouncing,
    /// The settled query matched at least one item.
    Results,
    /// The settled query matched nothing; suggestions are shown instead.
    NoResults,
}

/// Debounced search over a shared content index.
#[derive(Debug)]
pub struct SearchSession {
    index: Arc<ContentIndex>,
    debounce: DebounceController,
    cache: Mutex<Option<Arc<SearchOutcome>>>,
}

impl SearchSession {
    pub fn new(index: Arc<ContentIndex>, config: &SearchConfig) -> Self {
        Self::with_delay(index, config.debounce())
    }

    pub fn with_delay(index: Arc<ContentIndex>, delay: Duration) -> Self {
        Self {
            index,
            debounce: DebounceController::new(delay),
            cache: Mutex::new(None),
        }
    }

    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    /// Feed the current contents of the search box.
    pub fn input(&mut self, raw: impl Into<String>) {
        self.debounce.observe(raw);
    }

    /// Stop listening. Cancels any pending settle.
    pub fn close(&mut self) {
        self.debounce.cancel();
    }

    /// Receive every debounce state change.
    pub fn subscribe(&self) -> watch::Receiver<DebounceState> {
        self.debounce.subscribe()
    }

    /// The outcome for the current settled query, with the live `is_searching` flag.
    pub fn outcome(&self) -> SearchOutcome {
        let state = self.debounce.state();
        let mut outcome = (*self.evaluated(state.settled_query())).clone();
        outcome.is_searching = state.is_searching();
        outcome
    }

    pub fn phase(&self) -> SessionPhase {
        let state = self.debounce.state();
        if state.is_searching() {
            return SessionPhase::Debouncing;
        }
        if !is_searchable(&normalize_query(state.settled_query())) {
            return SessionPhase::Idle;
        }
        if self.evaluated(state.settled_query()).has_results {
            SessionPhase::Results
        } else {
            SessionPhase::NoResults
        }
    }

    /// Wait until no query is pending, then return the outcome.
    pub async fn settled(&self) -> SearchOutcome {
        let mut rx = self.debounce.subscribe();
        // The sender lives as long as `self`, so this only errors on teardown.
        let _ = rx.wait_for(|state| !state.is_searching()).await;
        self.outcome()
    }

    fn evaluated(&self, settled_query: &str) -> Arc<SearchOutcome> {
        let mut cache = self.cache.lock();
        if let Some(cached) = cache.as_ref() {
            if cached.query == settled_query {
                return Arc::clone(cached);
            }
        }
        let outcome = Arc::new(evaluate(&self.index, settled_query));
        *cache = Some(Arc::clone(&outcome));
        outcome
    }
}
