//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that never matches anything.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector, falling back to one that matches nothing.
///
/// Selectors in this crate are string constants, so a parse failure is a
/// programming error. Logging it and matching nothing keeps an audit running
/// (the page just looks like it lacks that element) instead of aborting.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - What the selector is for, used in the error log
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' for {}: {}. Matching nothing instead.",
            selector_str,
            context,
            e
        );
        Selector::parse(MATCH_NOTHING)
            .unwrap_or_else(|_| unreachable!("'{}' is a valid selector", MATCH_NOTHING))
    })
}
