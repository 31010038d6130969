//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{ContentIndex, ItemType, SearchableItem};

/// Create a test item with only the required fields set.
pub fn make_item(id: &str, kind: ItemType, title: &str) -> SearchableItem {
    SearchableItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: String::new(),
        category: None,
        breadcrumb: None,
        url: format!("/{}/{}", kind, id),
        date: None,
    }
}

/// Create a test item with every matchable field.
pub fn make_item_full(
    id: &str,
    kind: ItemType,
    title: &str,
    description: &str,
    category: Option<&str>,
    breadcrumb: Option<&str>,
) -> SearchableItem {
    SearchableItem {
        description: description.to_string(),
        category: category.map(str::to_string),
        breadcrumb: breadcrumb.map(str::to_string),
        ..make_item(id, kind, title)
    }
}

/// The three-item library index used throughout the docs and tests.
///
/// Query `"бібліот"` ranks `a1` (5) ahead of `a2` (4) and excludes `a3`.
pub fn library_index() -> ContentIndex {
    ContentIndex::new_unchecked(vec![
        make_item("a1", ItemType::Page, "Бібліотека"),
        make_item_full(
            "a2",
            ItemType::Course,
            "Курс бібліотечної справи",
            "Бібліотека та архіви",
            None,
            None,
        ),
        make_item("a3", ItemType::Page, "Контакти"),
    ])
}

/// A small mixed index covering all five types.
pub fn campus_index() -> ContentIndex {
    ContentIndex::new_unchecked(vec![
        make_item_full(
            "p-about",
            ItemType::Page,
            "Про університет",
            "Історія та місія",
            Some("Університет"),
            Some("Головна / Про нас"),
        ),
        make_item_full(
            "n-open-day",
            ItemType::News,
            "День відкритих дверей",
            "Запрошуємо абітурієнтів до університету",
            Some("Вступ"),
            None,
        ),
        make_item_full(
            "d-rules",
            ItemType::Document,
            "Правила прийому",
            "Правила прийому на навчання",
            Some("Вступ"),
            Some("Документи / Вступ"),
        ),
        make_item_full(
            "c-law",
            ItemType::Course,
            "Право",
            "Бакалаврська програма",
            Some("Факультети"),
            None,
        ),
        make_item_full(
            "e-fair",
            ItemType::Event,
            "Ярмарок вакансій",
            "Зустріч студентів з роботодавцями",
            None,
            Some("Події"),
        ),
        make_item("p-contacts", ItemType::Page, "Контакти"),
        make_item("c-it", ItemType::Course, "Інформаційні технології"),
        make_item("p-library", ItemType::Page, "Бібліотека"),
        make_item("c-history", ItemType::Course, "Історія"),
        make_item("p-schedule", ItemType::Page, "Розклад занять"),
    ])
}
