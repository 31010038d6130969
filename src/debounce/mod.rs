// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debouncing: only search once the user stops typing.
//!
//! Every new raw query cancels the pending timer and schedules a fresh one.
//! When a timer survives its full delay, the query it carries becomes the
//! settled query and `is_searching` drops back to false in the same update.
//!
//! ```text
//!  observe("б")   observe("бі")   observe("біб")         300ms quiet
//!  ──●──────────────●───────────────●────────────────────────▶ settle "біб"
//!    └ timer ✗      └ timer ✗       └ timer ✓
//! ```
//!
//! State is published through a `tokio::sync::watch` channel. Two things keep
//! stale timers out:
//!
//! 1. The previous [`TimerHandle`] is aborted on every `observe` and on teardown.
//! 2. Each timer carries the generation it was scheduled under and only settles
//!    if the generation is still current. On a multi-threaded runtime a timer
//!    can wake at the same instant a newer `observe` runs; the check happens
//!    inside the channel's write lock, so the older value always loses.

mod timer;

pub use timer::TimerHandle;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Default quiet period before a query settles.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Snapshot of the debouncer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebounceState {
    settled_query: String,
    latest_query: String,
    is_searching: bool,
    settle_count: u64,
    generation: u64,
}

impl DebounceState {
    /// The last query that survived the quiet period.
    pub fn settled_query(&self) -> &str {
        &self.settled_query
    }

    /// The most recently observed raw query, settled or not.
    pub fn latest_query(&self) -> &str {
        &self.latest_query
    }

    /// True while a newer query is waiting out its delay.
    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    /// How many times a query has settled since the controller was created.
    pub fn settle_count(&self) -> u64 {
        self.settle_count
    }
}

/// Delays a fast-changing query until input quiesces.
///
/// Must be driven from within a Tokio runtime. Dropping the controller tears
/// it down: the pending timer is cancelled and nothing settles afterwards.
#[derive(Debug)]
pub struct DebounceController {
    delay: Duration,
    state: Arc<watch::Sender<DebounceState>>,
    timer: Option<TimerHandle>,
}

impl DebounceController {
    pub fn new(delay: Duration) -> Self {
        let (state, _) = watch::channel(DebounceState::default());
        Self {
            delay,
            state: Arc::new(state),
            timer: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed the current raw query.
    ///
    /// A value equal to the latest observed one is ignored; anything else
    /// cancels the pending timer, raises `is_searching` and restarts the delay.
    pub fn observe(&mut self, query: impl Into<String>) {
        let query = query.into();

        let mut generation = None;
        self.state.send_if_modified(|state| {
            if state.latest_query == query {
                return false;
            }
            state.generation += 1;
            state.latest_query.clone_from(&query);
            state.is_searching = true;
            generation = Some(state.generation);
            true
        });

        let Some(generation) = generation else {
            return;
        };

        if let Some(mut previous) = self.timer.take() {
            previous.cancel();
            tracing::trace!("cancelled pending settle");
        }

        tracing::debug!(query = %query, generation, delay_ms = self.delay.as_millis() as u64, "scheduled settle");
        let state = Arc::clone(&self.state);
        self.timer = Some(TimerHandle::schedule(self.delay, move || {
            settle(&state, generation, query);
        }));
    }

    /// Current state.
    pub fn state(&self) -> DebounceState {
        self.state.borrow().clone()
    }

    /// Receive every state change.
    pub fn subscribe(&self) -> watch::Receiver<DebounceState> {
        self.state.subscribe()
    }

    /// Tear down: cancel the pending timer and discard its query.
    ///
    /// The settled query is kept and `is_searching` is cleared. A later
    /// `observe` starts a new cycle as usual.
    pub fn cancel(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.state.send_if_modified(|state| {
            let was_pending = state.is_searching;
            if was_pending {
                tracing::debug!(discarded = %state.latest_query, "debounce torn down with pending query");
            }
            state.generation += 1;
            state.is_searching = false;
            state.latest_query.clone_from(&state.settled_query);
            was_pending
        });
    }
}

impl Drop for DebounceController {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Timer callback: settle `query` unless a newer observe superseded it.
fn settle(state: &watch::Sender<DebounceState>, generation: u64, query: String) {
    state.send_if_modified(|current| {
        if current.generation != generation {
            tracing::warn!(query = %query, generation, current = current.generation, "rejected stale settle");
            return false;
        }
        current.settled_query = query;
        current.is_searching = false;
        current.settle_count += 1;
        tracing::debug!(query = %current.settled_query, "query settled");
        true
    });
}
