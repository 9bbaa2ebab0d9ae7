//! Error type definitions.
//!
//! This module defines the error and warning types used throughout the library.

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Errors returned by the SEO utilities.
///
/// Every operation is total over its valid domain: it either returns a value or
/// one of these errors, synchronously. Nothing is retried or recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeoError {
    /// A caller passed a malformed argument (e.g. a band with `min > max`).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A language code that is well-formed but not served by the site, or not
    /// well-formed at all.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A page type name that doesn't map to any known page.
    #[error("Unknown page type: {0}")]
    UnknownPageType(String),

    /// The site base URL or a page path couldn't be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Findings raised while auditing a page.
///
/// None of these prevent an audit from completing; they flag content that a
/// search engine would likely penalize or rewrite.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIterMacro, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WarningType {
    /// `<title>` tag is missing or empty
    MissingTitle,
    /// Meta description tag is missing (optional but recommended for SEO)
    MissingMetaDescription,
    /// Title length falls outside the title band
    TitleOutOfBand,
    /// Description length falls outside the description band
    DescriptionOutOfBand,
    /// No `<link rel="canonical">`
    MissingCanonical,
    /// No JSON-LD structured data
    MissingStructuredData,
    /// A catalog keyword appears less often than the optimal range
    KeywordUnderOptimized,
    /// A catalog keyword appears more often than the optimal range (keyword stuffing)
    KeywordOverOptimized,
    /// Page body has no words at all
    EmptyBody,
}
