//! Structured data extraction.
//!
//! Reads JSON-LD blocks (`<script type="application/ld+json">`) back out of a
//! rendered page, so an audit can confirm the generated schema made it into
//! the HTML.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_with_fallback;

const JSON_LD_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;

static JSON_LD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(JSON_LD_SELECTOR_STR, "JSON-LD extraction"));

/// Parses every JSON-LD script in the document.
///
/// A script holding an array contributes each element. Scripts that are not
/// valid JSON are skipped with a debug log.
pub fn extract_json_ld(document: &Html) -> Vec<serde_json::Value> {
    let mut blocks = Vec::new();
    for script in document.select(&JSON_LD_SELECTOR) {
        let raw = script.text().collect::<String>();
        match serde_json::from_str::<serde_json::Value>(raw.trim()) {
            Ok(serde_json::Value::Array(items)) => blocks.extend(items),
            Ok(value) => blocks.push(value),
            Err(e) => log::debug!("Skipping invalid JSON-LD block: {}", e),
        }
    }
    blocks
}

/// Collects `@type` values from JSON-LD blocks, in document order.
///
/// `@type` may be a string or an array of strings.
pub fn schema_types(blocks: &[serde_json::Value]) -> Vec<String> {
    let mut types = Vec::new();
    for block in blocks {
        match block.get("@type") {
            Some(serde_json::Value::String(t)) => types.push(t.clone()),
            Some(serde_json::Value::Array(items)) => {
                types.extend(items.iter().filter_map(|t| t.as_str()).map(String::from))
            }
            _ => {}
        }
    }
    types
}
