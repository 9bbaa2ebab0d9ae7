//! Page audits.
//!
//! Runs the keyword catalog over a page's text and checks its title and meta
//! description against their bands. This is the development-time diagnostic
//! that surfaces `analyze_all` results next to the page they came from.

use serde::Serialize;

use crate::constraint::{ConstraintBand, DESCRIPTION_BAND, TITLE_BAND};
use crate::error_handling::{AuditStats, WarningType};
use crate::keywords::{analyze_all, classify, tokenize, DensityRating, KeywordCategory, KeywordEntry};
use crate::parse::{extract_page_text, PageText};

/// Density of one catalog keyword in the audited text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordReport {
    /// Catalog phrase
    pub keyword: String,
    /// Catalog category
    pub category: KeywordCategory,
    /// Exact word-window matches
    pub count: usize,
    /// Density in percent
    pub density: f64,
    /// Rating against the optimal range
    pub rating: DensityRating,
}

/// Length of a text field compared to its band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthCheck {
    /// The text as found on the page
    pub text: String,
    /// Length in characters
    pub length: usize,
    /// Band it should fall in
    pub band: ConstraintBand,
    /// Whether `band.min <= length <= band.max`
    pub within_band: bool,
}

impl LengthCheck {
    fn new(text: &str, band: ConstraintBand) -> Self {
        Self {
            text: text.to_string(),
            length: text.chars().count(),
            band,
            within_band: band.contains(text),
        }
    }
}

/// A raised warning and how many times it was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WarningCount {
    /// Warning type
    pub warning: WarningType,
    /// Times raised
    pub count: usize,
}

/// Result of auditing one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    /// Words in the audited body text
    pub word_count: usize,
    /// Title check (HTML audits with a title only)
    pub title: Option<LengthCheck>,
    /// Description check (HTML audits with a description only)
    pub description: Option<LengthCheck>,
    /// Canonical URL, if the page declares one
    pub canonical: Option<String>,
    /// schema.org types found in the page's JSON-LD
    pub schema_types: Vec<String>,
    /// One report per catalog keyword, in catalog order
    pub keywords: Vec<KeywordReport>,
    /// Raised warnings, in declaration order
    pub warnings: Vec<WarningCount>,
}

impl AuditReport {
    /// Keywords whose density is in the optimal range.
    pub fn optimal_keywords(&self) -> impl Iterator<Item = &KeywordReport> {
        self.keywords
            .iter()
            .filter(|k| k.rating == DensityRating::Optimal)
    }

    /// Total number of warnings raised.
    pub fn warning_total(&self) -> usize {
        self.warnings.iter().map(|w| w.count).sum()
    }
}

/// Audits plain text against `entries`.
///
/// Every keyword rated `Over` raises `KeywordOverOptimized`. Only primary
/// keywords rated `Under` raise `KeywordUnderOptimized`; long-tail and
/// semantic phrases are expected to be rare. An empty text raises `EmptyBody`
/// and no keyword warnings.
pub fn audit_text(text: &str, entries: &[KeywordEntry]) -> AuditReport {
    let mut stats = AuditStats::new();
    let (word_count, keywords) = keyword_reports(text, entries, &mut stats);
    build_report(word_count, keywords, &stats, None)
}

/// Audits an HTML page: the keyword checks of [`audit_text`] over the visible
/// body text, plus title, description, canonical and structured data checks.
pub fn audit_html(html: &str, entries: &[KeywordEntry]) -> AuditReport {
    let page = extract_page_text(html);
    let mut stats = AuditStats::new();
    let (word_count, keywords) = keyword_reports(&page.body_text, entries, &mut stats);

    if page.title.is_none() {
        stats.increment_warning(WarningType::MissingTitle);
    }
    if page.description.is_none() {
        stats.increment_warning(WarningType::MissingMetaDescription);
    }
    if page.canonical.is_none() {
        stats.increment_warning(WarningType::MissingCanonical);
    }
    if page.schema_types.is_empty() {
        stats.increment_warning(WarningType::MissingStructuredData);
    }

    let title = page.title.as_deref().map(|t| LengthCheck::new(t, TITLE_BAND));
    if title.as_ref().is_some_and(|c| !c.within_band) {
        stats.increment_warning(WarningType::TitleOutOfBand);
    }
    let description = page
        .description
        .as_deref()
        .map(|d| LengthCheck::new(d, DESCRIPTION_BAND));
    if description.as_ref().is_some_and(|c| !c.within_band) {
        stats.increment_warning(WarningType::DescriptionOutOfBand);
    }

    let mut report = build_report(word_count, keywords, &stats, Some(page));
    report.title = title;
    report.description = description;
    report
}

fn keyword_reports(
    text: &str,
    entries: &[KeywordEntry],
    stats: &mut AuditStats,
) -> (usize, Vec<KeywordReport>) {
    let word_count = tokenize(text).len();
    let phrases: Vec<&str> = entries.iter().map(|e| e.phrase).collect();
    let results = analyze_all(text, phrases.as_slice());

    if word_count == 0 {
        stats.increment_warning(WarningType::EmptyBody);
    }

    let reports = entries
        .iter()
        .zip(results)
        .map(|(entry, result)| {
            let rating = classify(result.density);
            if word_count > 0 {
                match rating {
                    DensityRating::Over => stats.increment_warning(WarningType::KeywordOverOptimized),
                    DensityRating::Under if entry.category == KeywordCategory::Primary => {
                        stats.increment_warning(WarningType::KeywordUnderOptimized)
                    }
                    _ => {}
                }
            }
            KeywordReport {
                keyword: result.keyword,
                category: entry.category,
                count: result.count,
                density: result.density,
                rating,
            }
        })
        .collect();
    (word_count, reports)
}

fn build_report(
    word_count: usize,
    keywords: Vec<KeywordReport>,
    stats: &AuditStats,
    page: Option<PageText>,
) -> AuditReport {
    let (canonical, schema_types) = match page {
        Some(page) => (page.canonical, page.schema_types),
        None => (None, Vec::new()),
    };
    log::debug!(
        "Audited {} words: {} keywords, {} warnings",
        word_count,
        keywords.len(),
        stats.total_warnings()
    );
    AuditReport {
        word_count,
        title: None,
        description: None,
        canonical,
        schema_types,
        keywords,
        warnings: stats
            .raised()
            .into_iter()
            .map(|(warning, count)| WarningCount { warning, count })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::catalog;

    fn entries() -> Vec<KeywordEntry> {
        vec![
            KeywordEntry {
                phrase: "usb driver",
                category: KeywordCategory::Primary,
            },
            KeywordEntry {
                phrase: "device manager",
                category: KeywordCategory::Semantic,
            },
        ]
    }

    fn warning_count(report: &AuditReport, warning: WarningType) -> usize {
        report
            .warnings
            .iter()
            .find(|w| w.warning == warning)
            .map(|w| w.count)
            .unwrap_or(0)
    }

    #[test]
    fn test_audit_text_rates_keywords() {
        // 50 words, "usb driver" twice (4%), "device manager" never
        let mut words = vec!["filler"; 46];
        words.extend(["usb", "driver", "usb", "driver"]);
        let text = words.join(" ");

        let report = audit_text(&text, &entries());
        assert_eq!(report.word_count, 50);
        assert_eq!(report.keywords.len(), 2);
        assert_eq!(report.keywords[0].count, 2);
        assert_eq!(report.keywords[0].rating, DensityRating::Optimal);
        assert_eq!(report.keywords[1].rating, DensityRating::Under);
        assert_eq!(report.optimal_keywords().count(), 1);
        // Semantic keywords below range are not flagged
        assert_eq!(report.warning_total(), 0);
        assert!(report.title.is_none());
    }

    #[test]
    fn test_audit_text_flags_stuffing_and_missing_primary() {
        let report = audit_text("device manager device manager open", &entries());
        assert_eq!(warning_count(&report, WarningType::KeywordOverOptimized), 1);
        assert_eq!(warning_count(&report, WarningType::KeywordUnderOptimized), 1);
    }

    #[test]
    fn test_audit_text_empty_body() {
        let report = audit_text("   ", &entries());
        assert_eq!(report.word_count, 0);
        assert_eq!(warning_count(&report, WarningType::EmptyBody), 1);
        assert_eq!(report.warning_total(), 1);
        assert!(report.keywords.iter().all(|k| k.density == 0.0));
    }

    #[test]
    fn test_audit_text_uses_full_catalog() {
        let report = audit_text("usb not recognized", catalog());
        assert_eq!(report.keywords.len(), catalog().len());
        assert_eq!(report.keywords[0].keyword, catalog()[0].phrase);
    }

    #[test]
    fn test_audit_html_checks_head() {
        let html = r#"<html><head><title>USB</title></head>
            <body><p>Update the usb driver in device manager now.</p></body></html>"#;
        let report = audit_html(html, &entries());

        let title = report.title.as_ref().expect("title check");
        assert_eq!(title.length, 3);
        assert!(!title.within_band);
        assert!(report.description.is_none());
        assert_eq!(warning_count(&report, WarningType::TitleOutOfBand), 1);
        assert_eq!(warning_count(&report, WarningType::MissingMetaDescription), 1);
        assert_eq!(warning_count(&report, WarningType::MissingCanonical), 1);
        assert_eq!(warning_count(&report, WarningType::MissingStructuredData), 1);
        assert_eq!(warning_count(&report, WarningType::MissingTitle), 0);
        // 8 words, one match each: 12.5%
        assert_eq!(report.word_count, 8);
        assert_eq!(report.keywords[0].rating, DensityRating::Over);
    }

    #[test]
    fn test_audit_html_clean_head() {
        let html = r#"<html><head>
            <title>USB Device Not Recognized? Step-by-Step Fixes</title>
            <meta name="description" content="Fix USB devices that Windows, Mac or Linux won't recognize. Driver reinstalls, port checks, hub resets and power settings explained step by step.">
            <link rel="canonical" href="https://www.usbdevicefix.com/">
            <script type="application/ld+json">{"@type": "WebSite"}</script>
        </head><body><p>Welcome.</p></body></html>"#;
        let report = audit_html(html, &[]);
        assert!(report.title.as_ref().unwrap().within_band);
        assert!(report.description.as_ref().unwrap().within_band);
        assert_eq!(report.canonical.as_deref(), Some("https://www.usbdevicefix.com/"));
        assert_eq!(report.schema_types, vec!["WebSite"]);
        assert_eq!(report.warning_total(), 0);
    }

    #[test]
    fn test_audit_report_serializes_warnings_in_snake_case() {
        let report = audit_text("", &entries());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["warnings"][0]["warning"], "empty_body");
        assert_eq!(json["keywords"][0]["category"], "primary");
        assert_eq!(json["keywords"][0]["rating"], "under");
    }
}
