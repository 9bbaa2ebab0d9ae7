//! seo_kit library: text utilities for search-optimized page content
//!
//! This library keeps page titles and meta descriptions inside the length bands
//! search engines display, measures keyword density in page text, and builds the
//! metadata a page emits in its `<head>` (canonical URL, hreflang alternates and
//! JSON-LD).
//!
//! # Example
//!
//! ```
//! use seo_kit::{density, fit, is_optimal, ConstraintBand};
//!
//! let band = ConstraintBand::new(10, 20).unwrap();
//! let title = fit("USB Fix", band, "Guide").unwrap();
//! assert_eq!(title, "USB Fix Guide");
//!
//! let d = density("usb driver update for usb driver issues", "usb driver");
//! assert!(!is_optimal(d));
//! ```
//!
//! The text operations are pure, synchronous functions of their inputs. Site-specific
//! settings are passed in through [`SiteConfig`].

#![warn(missing_docs)]

pub mod audit;
pub mod config;
pub mod constraint;
mod error_handling;
pub mod initialization;
pub mod input;
pub mod keywords;
pub mod meta;
pub mod parse;
mod utils;

// Re-export public API
pub use audit::{audit_html, audit_text, AuditReport};
pub use config::{LogFormat, LogLevel, SiteConfig};
pub use constraint::{
    fit, fit_description, fit_title, fit_with_outcome, ConstraintBand, FitOutcome,
    DESCRIPTION_BAND, TITLE_BAND,
};
pub use error_handling::{AuditStats, InitializationError, SeoError, WarningType};
pub use keywords::{
    analyze_all, catalog, density, generate_variations, is_optimal, DensityRating, DensityResult,
    KeywordCategory, KeywordEntry,
};
pub use utils::{escape_html, sanitize_text};
