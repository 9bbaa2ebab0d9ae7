//! End-to-end tests for page metadata: generate, render, then audit the
//! rendered head as a crawler would see it.

use seo_kit::meta::{generate, render_head, Language, PageMetaRequest, PageType};
use seo_kit::{audit_html, SeoError, SiteConfig, WarningType, DESCRIPTION_BAND, TITLE_BAND};
use strum::IntoEnumIterator;

fn wrap(head: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}

#[test]
fn test_rendered_head_passes_audit_for_every_page() {
    let site = SiteConfig::default();
    for page in PageType::iter() {
        for lang in Language::iter() {
            let meta = generate(&PageMetaRequest::new(page, lang), &site).unwrap();
            let html = wrap(&render_head(&meta), "<p>Replug the device.</p>");
            let report = audit_html(&html, &[]);

            let title = report.title.as_ref().expect("rendered title");
            assert_eq!(title.text, meta.title, "{page}/{lang}");
            assert!(title.within_band, "{page}/{lang}");
            assert!(report.description.as_ref().unwrap().within_band, "{page}/{lang}");
            assert_eq!(report.canonical.as_deref(), Some(meta.canonical_url.as_str()));
            assert_eq!(report.schema_types[0], page.schema_type());
            assert_eq!(report.warning_total(), 0, "{page}/{lang}: {:?}", report.warnings);
        }
    }
}

#[test]
fn test_custom_copy_is_fitted() {
    let site = SiteConfig::default();
    let request = PageMetaRequest::new(PageType::BlogPost, Language::En)
        .with_path("/blog/usb-3-port-slow")
        .with_title("USB 3 Slow")
        .with_description("Why USB 3 ports run at USB 2 speed.");
    let meta = generate(&request, &site).unwrap();

    assert!(TITLE_BAND.contains(&meta.title));
    assert!(meta.title.starts_with("USB 3 Slow USB Device Fix"));
    assert!(DESCRIPTION_BAND.contains(&meta.description));
    assert!(meta.description.starts_with("Why USB 3 ports run at USB 2 speed."));
    assert_eq!(
        meta.canonical_url,
        "https://www.usbdevicefix.com/blog/usb-3-port-slow"
    );
}

#[test]
fn test_site_config_is_injected() {
    let site = SiteConfig {
        base_url: "https://staging.example.com".to_string(),
        brand: "Staging".to_string(),
        ..SiteConfig::default()
    };
    let meta = generate(&PageMetaRequest::new(PageType::Contact, Language::Pt), &site).unwrap();
    assert_eq!(meta.canonical_url, "https://staging.example.com/pt/contact");
    assert!(meta.title.contains("Staging"));
    assert!(meta
        .alternates
        .iter()
        .all(|a| a.href.starts_with("https://staging.example.com/")));
    let x_default = meta.alternates.iter().find(|a| a.hreflang == "x-default").unwrap();
    assert_eq!(x_default.href, "https://staging.example.com/contact");
}

#[test]
fn test_language_codes() {
    assert_eq!(Language::from_code("pt-BR").unwrap(), Language::Pt);
    assert_eq!(
        Language::from_code("it"),
        Err(SeoError::UnsupportedLanguage("it".to_string()))
    );
    assert!(Language::from_code("english").is_err());
}

#[test]
fn test_page_without_head_raises_every_head_warning() {
    let report = audit_html(&wrap("", "<p>usb driver</p>"), &[]);
    let raised: Vec<WarningType> = report.warnings.iter().map(|w| w.warning).collect();
    assert_eq!(
        raised,
        vec![
            WarningType::MissingTitle,
            WarningType::MissingMetaDescription,
            WarningType::MissingCanonical,
            WarningType::MissingStructuredData,
        ]
    );
}
