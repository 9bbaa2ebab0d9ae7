//! Page metadata generation.
//!
//! Turns a page request (page type, language, optional overrides) into the
//! values a page puts in its `<head>`:
//! - A title fitted to the title band, padded with the brand
//! - A description fitted to the description band, padded with the tagline
//! - The canonical URL and hreflang alternates
//! - JSON-LD structured data
//!
//! Site-specific settings come from an injected [`SiteConfig`]; nothing here
//! reads global state.

mod hreflang;
mod language;
mod page;
mod render;
mod structured;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::constraint::{fit_with_outcome, DESCRIPTION_BAND, TITLE_BAND};
use crate::error_handling::SeoError;
use crate::utils::sanitize_text;

// Re-export public API
pub use hreflang::{hreflang_links, localized_url, HreflangLink};
pub use language::Language;
pub use page::{PageCopy, PageType};
pub use render::render_head;
pub use structured::{page_json_ld, JsonLdContext};

/// What a page asks the generator for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetaRequest {
    /// Page type
    pub page_type: PageType,
    /// Page language
    pub language: Language,
    /// Path in the default language; `None` uses the page type's default
    pub path: Option<String>,
    /// Custom title, fitted like the default one
    pub title_override: Option<String>,
    /// Custom description, fitted like the default one
    pub description_override: Option<String>,
}

impl PageMetaRequest {
    /// Request for a page's default copy at its default path.
    pub fn new(page_type: PageType, language: Language) -> Self {
        Self {
            page_type,
            language,
            path: None,
            title_override: None,
            description_override: None,
        }
    }

    /// Serve the page at `path` instead of the default.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Use a custom title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title_override = Some(title.into());
        self
    }

    /// Use a custom description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_override = Some(description.into());
        self
    }
}

/// Everything a page emits in its `<head>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    /// Fitted title
    pub title: String,
    /// Fitted meta description
    pub description: String,
    /// Canonical URL of this language variant
    pub canonical_url: String,
    /// Page language
    pub language: Language,
    /// hreflang alternates, `x-default` last
    pub alternates: Vec<HreflangLink>,
    /// JSON-LD blocks
    pub json_ld: Vec<serde_json::Value>,
}

/// Sanitized override, or `None` if it is missing or blank.
fn clean_override(value: Option<&str>) -> Option<String> {
    value.map(sanitize_text).filter(|v| !v.is_empty())
}

/// Generates the metadata for one page.
///
/// Titles and descriptions (custom or default) always come back inside
/// their bands.
///
/// # Errors
///
/// `SeoError::InvalidUrl` if `site.base_url` isn't an absolute URL.
///
/// # Examples
///
/// ```
/// use seo_kit::meta::{generate, Language, PageMetaRequest, PageType};
/// use seo_kit::SiteConfig;
///
/// let request = PageMetaRequest::new(PageType::Faq, Language::Es);
/// let meta = generate(&request, &SiteConfig::default()).unwrap();
/// assert_eq!(meta.canonical_url, "https://www.usbdevicefix.com/es/faq");
/// ```
pub fn generate(request: &PageMetaRequest, site: &SiteConfig) -> Result<PageMetadata, SeoError> {
    let defaults = request.page_type.default_copy(request.language);

    let raw_title = clean_override(request.title_override.as_deref())
        .unwrap_or_else(|| defaults.title.to_string());
    let raw_description = clean_override(request.description_override.as_deref())
        .unwrap_or_else(|| defaults.description.to_string());

    // Padding joins with single spaces, so stray whitespace in the suffix
    // would leave doubled spaces in the head tags
    let brand = sanitize_text(&site.brand);
    let tagline = sanitize_text(&site.tagline);
    let (title, title_outcome) = fit_with_outcome(&raw_title, TITLE_BAND, &brand)?;
    let (description, description_outcome) =
        fit_with_outcome(&raw_description, DESCRIPTION_BAND, &tagline)?;
    log::debug!(
        "{} ({}): title {}, description {}",
        request.page_type,
        request.language,
        title_outcome,
        description_outcome
    );

    let path = request
        .path
        .as_deref()
        .unwrap_or_else(|| request.page_type.default_path());
    let canonical_url = localized_url(&site.base_url, path, request.language, site.default_language)?;
    let home_url = localized_url(&site.base_url, "/", request.language, site.default_language)?;
    let alternates = hreflang_links(&site.base_url, path, site.default_language)?;

    let json_ld = page_json_ld(&JsonLdContext {
        page_type: request.page_type,
        language: request.language,
        title: &title,
        description: &description,
        url: &canonical_url,
        home_url: &home_url,
        site,
    });

    Ok(PageMetadata {
        title,
        description,
        canonical_url,
        language: request.language,
        alternates,
        json_ld,
    })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
