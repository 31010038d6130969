//! Search config files.

use sitesearch::{ConfigError, SearchConfig};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, r#"{"debounceMs": 150}"#).unwrap();

    let config = SearchConfig::load(&path).unwrap();
    assert_eq!(config.debounce(), Duration::from_millis(150));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, r#"{"debounceMs": "soon"}"#).unwrap();

    assert!(matches!(SearchConfig::load(&path), Err(ConfigError::Json(_))));
}
