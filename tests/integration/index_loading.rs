//! Content index files: the boundary with the external index builder.

use crate::common::ids;
use sitesearch::{evaluate, ContentIndex, IndexError, ItemType};
use std::fs;
use tempfile::TempDir;

const INDEX_JSON: &str = r#"[
    {"id": "a1", "type": "page", "title": "Бібліотека", "description": "", "url": "/library"},
    {"id": "a2", "type": "course", "title": "Курс бібліотечної справи",
     "description": "Бібліотека та архіви", "url": "/courses/library",
     "category": "Курси", "breadcrumb": "Навчання / Курси"},
    {"id": "a3", "type": "page", "title": "Контакти", "description": "", "url": "/contacts"},
    {"id": "n1", "type": "news", "title": "Нові надходження до бібліотеки",
     "url": "/news/1", "date": "2024-10-01"}
]"#;

fn write_index(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write index");
    path
}

#[test]
fn test_load_and_search_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, "index.json", INDEX_JSON);

    let index = ContentIndex::load(&path).unwrap();
    assert_eq!(index.len(), 4);
    assert_eq!(index.type_counts(), [2, 1, 0, 1, 0]);

    let outcome = evaluate(&index, "бібліот");
    assert_eq!(ids(&outcome.results), vec!["a1", "a2", "n1"]);
    assert_eq!(ids(&outcome.grouped_results.news), vec!["n1"]);
    assert_eq!(outcome.results[2].date.as_deref(), Some("2024-10-01"));
}

#[test]
fn test_load_preserves_order() {
    let index = ContentIndex::from_json(INDEX_JSON).unwrap();
    let order: Vec<&str> = index.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(order, vec!["a1", "a2", "a3", "n1"]);
}

#[test]
fn test_load_from_reader() {
    let index = ContentIndex::from_reader(INDEX_JSON.as_bytes()).unwrap();
    assert_eq!(index.items()[1].kind, ItemType::Course);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ContentIndex::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, IndexError::Io(_)));
}

#[test]
fn test_unknown_type_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_index(
        &dir,
        "bad.json",
        r#"[{"id": "x", "type": "gallery", "title": "Фото", "url": "/photos"}]"#,
    );
    let err = ContentIndex::load(&path).unwrap_err();
    assert!(matches!(err, IndexError::Json(_)), "got {:?}", err);
}

#[test]
fn test_unknown_type_error_names_value_and_position() {
    let dir = TempDir::new().unwrap();
    let path = write_index(
        &dir,
        "typo.json",
        r#"[
    {"id": "a1", "type": "page", "title": "Бібліотека", "url": "/library"},
    {"id": "x", "type": "gallery", "title": "Фото", "url": "/photos"}
]"#,
    );
    let err = ContentIndex::load(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown variant `gallery`"), "got {}", message);
    assert!(message.contains("line 3"), "got {}", message);
    match err {
        IndexError::Json(json) => assert_eq!(json.line(), 3),
        other => panic!("Expected Json error, got {:?}", other),
    }
}

#[test]
fn test_wrapped_index_error_names_field() {
    let err = ContentIndex::from_json(
        r#"{"items": [{"id": "a1", "type": "page", "title": 7, "url": "/a"}]}"#,
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("invalid type"), "got {}", message);
    assert!(message.contains("column"), "got {}", message);
}

#[test]
fn test_empty_url_rejected() {
    let err = ContentIndex::from_json(
        r#"[{"id": "x", "type": "page", "title": "Фото", "url": ""}]"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "item 0 has an empty `url` field");
}

#[test]
fn test_index_round_trips_through_serialize() {
    let index = ContentIndex::from_json(INDEX_JSON).unwrap();
    let json = serde_json::to_string(&index).unwrap();
    assert_eq!(ContentIndex::from_json(&json).unwrap(), index);
}
