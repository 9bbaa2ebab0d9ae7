//! The site's keyword catalog.
//!
//! A fixed table of the phrases the site targets, grouped by how they are
//! used: primary head terms, long-tail queries, and semantically related
//! vocabulary. The table is static and never mutated.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How a keyword is used in the content strategy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KeywordCategory {
    /// Head terms every core page should rank for
    Primary,
    /// Specific multi-word queries, usually one per article
    LongTail,
    /// Related vocabulary that signals topical coverage
    Semantic,
}

/// A catalog phrase and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    /// Phrase as it should appear in copy (never empty)
    pub phrase: &'static str,
    /// Category
    pub category: KeywordCategory,
}

const fn entry(phrase: &'static str, category: KeywordCategory) -> KeywordEntry {
    KeywordEntry { phrase, category }
}

static KEYWORDS: &[KeywordEntry] = &[
    entry("usb not recognized", KeywordCategory::Primary),
    entry("usb device not recognized", KeywordCategory::Primary),
    entry("usb troubleshooting", KeywordCategory::Primary),
    entry("usb driver", KeywordCategory::Primary),
    entry("usb device not recognized windows 11", KeywordCategory::LongTail),
    entry("usb not recognized after windows update", KeywordCategory::LongTail),
    entry("how to fix usb device not recognized", KeywordCategory::LongTail),
    entry("usb port not working", KeywordCategory::LongTail),
    entry("external hard drive not recognized", KeywordCategory::LongTail),
    entry("usb device descriptor request failed", KeywordCategory::LongTail),
    entry("device manager", KeywordCategory::Semantic),
    entry("usb controller", KeywordCategory::Semantic),
    entry("usb root hub", KeywordCategory::Semantic),
    entry("power management", KeywordCategory::Semantic),
    entry("driver update", KeywordCategory::Semantic),
    entry("usb recognition", KeywordCategory::Semantic),
];

/// The full catalog, in declaration order (primary terms first).
pub fn catalog() -> &'static [KeywordEntry] {
    KEYWORDS
}

/// Catalog entries in one category, in catalog order.
pub fn by_category(category: KeywordCategory) -> Vec<KeywordEntry> {
    KEYWORDS
        .iter()
        .filter(|e| e.category == category)
        .copied()
        .collect()
}
