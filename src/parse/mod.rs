//! HTML parsing and data extraction.
//!
//! This module pulls the SEO-relevant parts out of a rendered page:
//! - Title, meta description and canonical link
//! - Visible body text (for keyword density)
//! - JSON-LD structured data and its schema.org types
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod html;
mod structured;

use scraper::Html;
use serde::Serialize;

// Re-export public API
pub use html::{extract_body_text, extract_canonical, extract_meta_description, extract_title};
pub use structured::{extract_json_ld, schema_types};

/// The SEO-relevant content of one HTML page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageText {
    /// `<title>` text, if present and non-blank
    pub title: Option<String>,
    /// Meta description content, if present and non-blank
    pub description: Option<String>,
    /// Canonical URL, if declared
    pub canonical: Option<String>,
    /// Visible body text, whitespace collapsed
    pub body_text: String,
    /// schema.org `@type`s found in JSON-LD blocks
    pub schema_types: Vec<String>,
}

/// Parses `html` and extracts everything an audit needs.
pub fn extract_page_text(html: &str) -> PageText {
    let document = Html::parse_document(html);
    let json_ld = extract_json_ld(&document);
    PageText {
        title: extract_title(&document),
        description: extract_meta_description(&document),
        canonical: extract_canonical(&document),
        body_text: extract_body_text(&document),
        schema_types: schema_types(&json_ld),
    }
}
