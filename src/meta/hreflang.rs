//! Canonical and hreflang URL mapping.
//!
//! The default language is served at the root (`/faq`); every other language
//! lives under its code (`/es/faq`). Each page lists one alternate per
//! language plus an `x-default` pointing at the default-language URL.

use serde::Serialize;
use strum::IntoEnumIterator;
use url::Url;

use super::Language;
use crate::config::HREFLANG_X_DEFAULT;
use crate::error_handling::SeoError;

/// One `<link rel="alternate" hreflang="..." href="...">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    /// Language code or `x-default`
    pub hreflang: String,
    /// Absolute URL of that variant
    pub href: String,
}

/// Absolute URL of `path` in `language`.
///
/// `path` may be given with or without a leading slash. `/` maps to the
/// language's home page (`https://site/` or `https://site/es/`).
///
/// # Errors
///
/// `SeoError::InvalidUrl` if `base_url` isn't an absolute URL.
pub fn localized_url(
    base_url: &str,
    path: &str,
    language: Language,
    default_language: Language,
) -> Result<String, SeoError> {
    let base = Url::parse(base_url)?;
    let trimmed = path.trim().trim_start_matches('/');
    let localized = if language == default_language {
        format!("/{trimmed}")
    } else if trimmed.is_empty() {
        format!("/{}/", language.code())
    } else {
        format!("/{}/{trimmed}", language.code())
    };
    Ok(base.join(&localized)?.to_string())
}

/// Alternates for `path` in every published language, followed by `x-default`.
pub fn hreflang_links(
    base_url: &str,
    path: &str,
    default_language: Language,
) -> Result<Vec<HreflangLink>, SeoError> {
    let mut links = Language::iter()
        .map(|lang| {
            Ok(HreflangLink {
                hreflang: lang.code().to_string(),
                href: localized_url(base_url, path, lang, default_language)?,
            })
        })
        .collect::<Result<Vec<_>, SeoError>>()?;
    links.push(HreflangLink {
        hreflang: HREFLANG_X_DEFAULT.to_string(),
        href: localized_url(base_url, path, default_language, default_language)?,
    });
    Ok(links)
}
