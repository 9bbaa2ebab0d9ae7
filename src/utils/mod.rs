//! Utility functions shared across modules.
//!
//! This module provides:
//! - Text sanitization and HTML escaping
//! - CSS selector parsing utilities

mod sanitize;
mod selector;

pub use sanitize::{escape_html, sanitize_text};
pub use selector::parse_selector_with_fallback;
