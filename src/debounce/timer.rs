// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A cancellable scheduled callback.
//!
//! The callback runs on a spawned Tokio task after `delay`. Whoever holds the
//! [`TimerHandle`] owns the pending callback: `cancel()` or dropping the handle
//! aborts the task, and an aborted task never reaches the callback.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to one scheduled callback.
#[derive(Debug)]
pub struct TimerHandle {
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Run `callback` once `delay` has elapsed.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self { task: Some(task) }
    }

    /// Abort the pending callback. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// True once the callback ran or the timer was cancelled.
    pub fn is_done(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
