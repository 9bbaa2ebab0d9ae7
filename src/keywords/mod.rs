//! Keyword density analysis.
//!
//! This module provides:
//! - Word-window density measurement (`density`, `analyze_all`)
//! - The optimal density policy (`is_optimal`, `classify`)
//! - Rule-based keyword variations
//! - The static keyword catalog
//!
//! Everything here is a pure function over its inputs.

mod catalog;
mod density;
mod variations;

// Re-export public API
pub use catalog::{by_category, catalog, KeywordCategory, KeywordEntry};
pub(crate) use density::tokenize;
pub use density::{
    analyze_all, classify, count_matches, density, is_optimal, DensityRating, DensityResult,
};
pub use variations::generate_variations;
