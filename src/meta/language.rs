//! Languages the site is published in.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::LANGUAGE_TAG_PATTERN;
use crate::error_handling::SeoError;

/// Compiles a static regex pattern, panicking with the pattern on failure.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static LANGUAGE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LANGUAGE_TAG_PATTERN, "LANGUAGE_TAG_RE"));

/// A published language. `Display` gives the ISO 639-1 code used in URLs
/// and hreflang attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English (served without a path prefix by default)
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
    /// Portuguese
    Pt,
}

impl Language {
    /// Parses a language tag such as `en`, `es` or `pt-BR`.
    ///
    /// The tag must be well-formed (`xx` or `xx-YY`); the region is ignored
    /// when picking the language.
    ///
    /// # Errors
    ///
    /// `SeoError::UnsupportedLanguage` if the tag is malformed or the site
    /// isn't published in that language.
    pub fn from_code(code: &str) -> Result<Self, SeoError> {
        if !LANGUAGE_TAG_RE.is_match(code) {
            return Err(SeoError::UnsupportedLanguage(code.to_string()));
        }
        let primary = code.split('-').next().unwrap_or(code);
        Language::iter()
            .find(|lang| lang.code() == primary)
            .ok_or_else(|| SeoError::UnsupportedLanguage(code.to_string()))
    }

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
        }
    }

    /// Locale for Open Graph style tags and JSON-LD `inLanguage`.
    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Es => "es-ES",
            Language::Fr => "fr-FR",
            Language::De => "de-DE",
            Language::Pt => "pt-BR",
        }
    }

    /// Label for "Home" in breadcrumbs.
    pub fn home_label(self) -> &'static str {
        match self {
            Language::En => "Home",
            Language::Es => "Inicio",
            Language::Fr => "Accueil",
            Language::De => "Startseite",
            Language::Pt => "Início",
        }
    }
}
