//! Search configuration.
//!
//! Small on purpose: the only knob the pipeline exposes is the debounce delay.
//! Values come from (later wins): defaults, an optional JSON file, the
//! `SITESEARCH_DEBOUNCE_MS` environment variable, CLI flags.
//!
//! ```json
//! { "debounceMs": 250 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the debounce delay.
pub const DEBOUNCE_ENV: &str = "SITESEARCH_DEBOUNCE_MS";

/// Default debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Quiet period before a query settles.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Apply `SITESEARCH_DEBOUNCE_MS` if set. Unparseable values are logged and ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_debounce_override(std::env::var(DEBOUNCE_ENV).ok().as_deref())
    }

    fn with_debounce_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.debounce_ms = ms,
                Err(err) => {
                    tracing::warn!(value = raw, error = %err, "ignoring invalid {}", DEBOUNCE_ENV);
                }
            }
        }
        self
    }
}
