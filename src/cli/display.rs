// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sitesearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `SITESEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and turns styling off when stdout is not a TTY.

use sitesearch::scoring::matched_rules;
use sitesearch::{normalize_query, score, ContentIndex, ItemType, SearchOutcome, SearchResult};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SITESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191); // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66); // #383a42
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("├"),
        label_part,
        border(&format!("{}┤", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

fn type_color(kind: ItemType) -> fn() -> String {
    match kind {
        ItemType::Page => BLUE,
        ItemType::News => YELLOW,
        ItemType::Document => WHITE,
        ItemType::Course => GREEN,
        ItemType::Event => MAGENTA,
    }
}

fn result_rows(result: &SearchResult, explain_query: Option<&str>) {
    let title = truncate(&result.title, BOX_WIDTH - 4);
    row(&format!(" {} {}", themed(type_color(result.kind), &[], "●"), themed(WHITE, &[BOLD], &title)));

    let mut detail = result.url.clone();
    if let Some(date) = &result.date {
        detail = format!("{}  {}", detail, date);
    }
    row(&format!("   {}", themed(GRAY, &[], &truncate(&detail, BOX_WIDTH - 4))));

    if let Some(query) = explain_query {
        let rules = matched_rules(result, query).join(" + ");
        let line = format!("   score {:.1} = {}", score(result, query), rules);
        row(&themed(GRAY, &[DIM], &truncate(&line, BOX_WIDTH - 4)));
    }
}

/// Print one outcome: grouped results, or suggestions when nothing matched.
pub fn print_outcome(outcome: &SearchOutcome, explain: bool) {
    let normalized = normalize_query(&outcome.query);
    let explain_query = explain.then_some(normalized.as_str());

    section_top(&format!("SEARCH \"{}\"", truncate(&outcome.query, 40)));

    if outcome.has_results {
        row(&format!(" {} result(s)", outcome.results.len()));
        for (kind, bucket) in outcome.grouped_results.iter() {
            if bucket.is_empty() {
                continue;
            }
            section_mid(&format!("{} ({})", kind.as_str().to_uppercase(), bucket.len()));
            for result in bucket {
                result_rows(result, explain_query);
            }
        }
    } else if !outcome.suggestions.is_empty() {
        row(&themed(YELLOW, &[], " No results. Maybe you are looking for:"));
        section_mid("SUGGESTIONS");
        for suggestion in &outcome.suggestions {
            result_rows(suggestion, None);
        }
    } else {
        row(&themed(GRAY, &[], " Type at least two characters to search"));
    }

    section_bot();
}

/// Print per-type counts and the fallback suggestions of an index.
pub fn print_index_summary(index: &ContentIndex, suggestions: &[SearchResult]) {
    section_top("CONTENT INDEX");
    row(&format!(" {} item(s)", index.len()));
    for (kind, count) in ItemType::ALL.iter().zip(index.type_counts()) {
        let label = format!("{:<10}", kind.as_str());
        row(&format!("   {} {}", themed(type_color(*kind), &[], &label), count));
    }
    section_mid("SUGGESTIONS");
    if suggestions.is_empty() {
        row(&themed(GRAY, &[], " (no pages or courses)"));
    }
    for suggestion in suggestions {
        result_rows(suggestion, None);
    }
    section_bot();
}
