//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract the parts of a page an SEO audit
//! looks at:
//! - Page title
//! - Meta description
//! - Canonical link
//! - Visible body text

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::utils::{parse_selector_with_fallback, sanitize_text};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const BODY_SELECTOR_STR: &str = "body";

/// Elements whose text is never shown to readers.
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TITLE_SELECTOR_STR, "title extraction"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(META_DESCRIPTION_SELECTOR_STR, "meta description extraction")
});

static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(CANONICAL_SELECTOR_STR, "canonical extraction"));

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(BODY_SELECTOR_STR, "body text extraction"));

/// Extracts the page title from an HTML document.
///
/// Returns the text of the first `<title>` element with whitespace collapsed,
/// or `None` if there is no title or it is blank.
pub fn extract_title(document: &Html) -> Option<String> {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| sanitize_text(&element.text().collect::<String>()))?;
    log::debug!("Extracted title: '{}' ({} chars)", title, title.chars().count());
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Extracts the meta description from an HTML document.
///
/// Returns `None` if the tag is missing or its `content` is blank.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(sanitize_text)
        .filter(|content| !content.is_empty())
}

/// Extracts the canonical URL (`<link rel="canonical" href="...">`).
pub fn extract_canonical(document: &Html) -> Option<String> {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// Extracts the text a reader would see in `<body>`.
///
/// Text inside `script`, `style`, `noscript` and `template` is skipped. Text
/// nodes are joined with single spaces, so adjacent inline elements never fuse
/// two words together.
pub fn extract_body_text(document: &Html) -> String {
    let body = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut words: Vec<&str> = Vec::new();
    for node in body.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|element| HIDDEN_TEXT_TAGS.contains(&element.value().name()));
        if !hidden {
            words.extend(text.split_whitespace());
        }
    }
    sanitize_text(&words.join(" "))
}
