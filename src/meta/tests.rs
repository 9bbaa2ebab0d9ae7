// Meta module tests.

use super::*;
use strum::IntoEnumIterator;

fn site() -> SiteConfig {
    SiteConfig::default()
}

#[test]
fn test_generated_copy_is_always_in_band() {
    let site = site();
    for page in PageType::iter() {
        for lang in Language::iter() {
            let meta = generate(&PageMetaRequest::new(page, lang), &site).unwrap();
            assert!(
                TITLE_BAND.contains(&meta.title),
                "{page}/{lang} title {:?} out of band",
                meta.title
            );
            assert!(
                DESCRIPTION_BAND.contains(&meta.description),
                "{page}/{lang} description {:?} out of band",
                meta.description
            );
        }
    }
}

#[test]
fn test_short_title_is_padded_with_brand() {
    let meta = generate(&PageMetaRequest::new(PageType::Contact, Language::En), &site()).unwrap();
    // "Contact Us" is 10 chars; the brand is appended until it reaches 30
    assert_eq!(meta.title, "Contact Us USB Device Fix USB Device Fix");
}

#[test]
fn test_long_override_is_truncated() {
    let request = PageMetaRequest::new(PageType::BlogPost, Language::En).with_title(
        "Why Your USB Device Is Not Recognized After the Latest Windows 11 Cumulative Update",
    );
    let meta = generate(&request, &site()).unwrap();
    assert_eq!(meta.title.chars().count(), TITLE_BAND.max);
    assert!(meta.title.ends_with("..."));
    assert!(meta.title.starts_with("Why Your USB Device"));
}

#[test]
fn test_blank_override_falls_back_to_default() {
    let request = PageMetaRequest::new(PageType::Guide, Language::En)
        .with_title("  \n ")
        .with_description("");
    let meta = generate(&request, &site()).unwrap();
    let defaults = generate(&PageMetaRequest::new(PageType::Guide, Language::En), &site()).unwrap();
    assert_eq!(meta.title, defaults.title);
    assert_eq!(meta.description, defaults.description);
}

#[test]
fn test_override_is_sanitized() {
    let request = PageMetaRequest::new(PageType::Guide, Language::En)
        .with_title("Reset\tthe USB\n root hub \x07 in Device Manager");
    let meta = generate(&request, &site()).unwrap();
    assert_eq!(meta.title, "Reset the USB root hub in Device Manager");
}

#[test]
fn test_brand_and_tagline_whitespace_is_collapsed() {
    let site = SiteConfig {
        brand: " Brand ".to_string(),
        tagline: "  Tag\tline  ".to_string(),
        ..SiteConfig::default()
    };
    let request = PageMetaRequest::new(PageType::Guide, Language::En)
        .with_title("A & <b>")
        .with_description("Short.");
    let meta = generate(&request, &site).unwrap();
    assert_eq!(meta.title, "A & <b> Brand Brand Brand Brand");
    assert!(!meta.description.contains("  "), "{:?}", meta.description);
    assert!(meta.description.starts_with("Short. Tag line Tag line"));
    assert!(DESCRIPTION_BAND.contains(&meta.description));
}

#[test]
fn test_canonical_and_alternates() {
    let request = PageMetaRequest::new(PageType::Faq, Language::De);
    let meta = generate(&request, &site()).unwrap();
    assert_eq!(meta.canonical_url, "https://www.usbdevicefix.com/de/faq");
    assert_eq!(meta.language, Language::De);
    assert_eq!(meta.alternates.len(), Language::iter().count() + 1);
    assert_eq!(meta.alternates.last().unwrap().hreflang, "x-default");
    assert!(meta
        .alternates
        .iter()
        .any(|a| a.hreflang == "de" && a.href == meta.canonical_url));
}

#[test]
fn test_custom_path() {
    let request = PageMetaRequest::new(PageType::BlogPost, Language::En)
        .with_path("/blog/usb-hub-not-working");
    let meta = generate(&request, &site()).unwrap();
    assert_eq!(
        meta.canonical_url,
        "https://www.usbdevicefix.com/blog/usb-hub-not-working"
    );
    assert_eq!(meta.json_ld[0]["mainEntityOfPage"], meta.canonical_url.as_str());
}

#[test]
fn test_json_ld_uses_fitted_values() {
    let meta = generate(&PageMetaRequest::new(PageType::Guide, Language::En), &site()).unwrap();
    assert_eq!(meta.json_ld[0]["headline"], meta.title.as_str());
    assert_eq!(meta.json_ld[0]["description"], meta.description.as_str());
    assert_eq!(meta.json_ld[1]["@type"], "BreadcrumbList");
}

#[test]
fn test_invalid_base_url() {
    let site = SiteConfig {
        base_url: "not a url".to_string(),
        ..SiteConfig::default()
    };
    let result = generate(&PageMetaRequest::new(PageType::Home, Language::En), &site);
    assert!(matches!(result, Err(SeoError::InvalidUrl(_))));
}

#[test]
fn test_render_head_contains_every_tag() {
    let meta = generate(&PageMetaRequest::new(PageType::Faq, Language::En), &site()).unwrap();
    let head = render_head(&meta);
    assert!(head.starts_with("<title>"));
    assert!(head.contains(r#"<meta name="description" content=""#));
    assert!(head.contains(r#"<link rel="canonical" href="https://www.usbdevicefix.com/faq">"#));
    assert!(head.contains(r#"hreflang="x-default""#));
    assert_eq!(head.matches(r#"rel="alternate""#).count(), meta.alternates.len());
    assert_eq!(
        head.matches(r#"<script type="application/ld+json">"#).count(),
        meta.json_ld.len()
    );
}

#[test]
fn test_render_head_escapes_markup() {
    let request = PageMetaRequest::new(PageType::Guide, Language::En)
        .with_title(r#"Fix "USB" <ports> & hubs fast today"#);
    let meta = generate(&request, &site()).unwrap();
    let head = render_head(&meta);
    assert!(head.contains("<title>Fix &quot;USB&quot; &lt;ports&gt; &amp; hubs fast today</title>"));
    assert!(!head.contains("<ports>"));
}

#[test]
fn test_metadata_serializes_to_json() {
    let meta = generate(&PageMetaRequest::new(PageType::Home, Language::Fr), &site()).unwrap();
    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["language"], "fr");
    assert_eq!(json["canonical_url"], "https://www.usbdevicefix.com/fr/");
    assert!(json["alternates"].is_array());
}
