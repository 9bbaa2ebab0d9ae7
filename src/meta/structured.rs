//! JSON-LD structured data builders.
//!
//! Every page gets a block describing itself (`WebSite`, `Article`,
//! `FAQPage`, ...). Every page except home also gets a `BreadcrumbList`.

use serde_json::{json, Value};

use super::{Language, PageType};
use crate::config::{SiteConfig, SCHEMA_ORG_CONTEXT};

/// Questions published on the FAQ page, emitted as `FAQPage.mainEntity`.
const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "Why does Windows say USB device not recognized?",
        "Usually a driver failed to load, the port is not supplying enough power, or the device descriptor request failed. Replug the device into a different port first.",
    ),
    (
        "How do I reinstall the USB driver?",
        "Open Device Manager, expand Universal Serial Bus controllers, uninstall the device with the warning icon, then unplug and replug it so Windows reinstalls the driver.",
    ),
    (
        "Can power management cause USB problems?",
        "Yes. USB selective suspend and root hub power saving can switch ports off. Disable them in Power Options and in the USB Root Hub properties.",
    ),
];

/// Inputs shared by the JSON-LD builders for one page.
#[derive(Debug, Clone, Copy)]
pub struct JsonLdContext<'a> {
    /// Page being described
    pub page_type: PageType,
    /// Page language
    pub language: Language,
    /// Fitted title
    pub title: &'a str,
    /// Fitted description
    pub description: &'a str,
    /// Canonical URL of the page
    pub url: &'a str,
    /// Canonical URL of the home page in the same language
    pub home_url: &'a str,
    /// Site settings
    pub site: &'a SiteConfig,
}

/// All JSON-LD blocks for a page, page block first.
pub fn page_json_ld(ctx: &JsonLdContext<'_>) -> Vec<Value> {
    let mut blocks = vec![page_block(ctx)];
    if ctx.page_type != PageType::Home {
        blocks.push(breadcrumb_block(ctx));
    }
    blocks
}

fn organization(site: &SiteConfig) -> Value {
    json!({
        "@type": "Organization",
        "name": site.organization,
        "url": site.base_url,
    })
}

fn page_block(ctx: &JsonLdContext<'_>) -> Value {
    let schema_type = ctx.page_type.schema_type();
    let locale = ctx.language.locale();
    match ctx.page_type {
        PageType::Home => json!({
            "@context": SCHEMA_ORG_CONTEXT,
            "@type": schema_type,
            "name": ctx.site.brand,
            "url": ctx.url,
            "description": ctx.description,
            "inLanguage": locale,
            "publisher": organization(ctx.site),
        }),
        PageType::Guide | PageType::BlogPost => json!({
            "@context": SCHEMA_ORG_CONTEXT,
            "@type": schema_type,
            "headline": ctx.title,
            "description": ctx.description,
            "inLanguage": locale,
            "mainEntityOfPage": ctx.url,
            "author": organization(ctx.site),
            "publisher": organization(ctx.site),
        }),
        PageType::Faq => {
            let questions: Vec<Value> = FAQ_ENTRIES
                .iter()
                .map(|(question, answer)| {
                    json!({
                        "@type": "Question",
                        "name": question,
                        "acceptedAnswer": {"@type": "Answer", "text": answer},
                    })
                })
                .collect();
            json!({
                "@context": SCHEMA_ORG_CONTEXT,
                "@type": schema_type,
                "name": ctx.title,
                "url": ctx.url,
                "inLanguage": locale,
                "mainEntity": questions,
            })
        }
        _ => json!({
            "@context": SCHEMA_ORG_CONTEXT,
            "@type": schema_type,
            "name": ctx.title,
            "description": ctx.description,
            "url": ctx.url,
            "inLanguage": locale,
        }),
    }
}

fn breadcrumb_block(ctx: &JsonLdContext<'_>) -> Value {
    json!({
        "@context": SCHEMA_ORG_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": ctx.language.home_label(),
                "item": ctx.home_url,
            },
            {
                "@type": "ListItem",
                "position": 2,
                "name": ctx.page_type.label(),
                "item": ctx.url,
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(page_type: PageType, site: &'a SiteConfig) -> JsonLdContext<'a> {
        JsonLdContext {
            page_type,
            language: Language::En,
            title: "A Title",
            description: "A description",
            url: "https://www.usbdevicefix.com/x",
            home_url: "https://www.usbdevicefix.com/",
            site,
        }
    }

    #[test]
    fn test_home_has_only_website_block() {
        let site = SiteConfig::default();
        let blocks = page_json_ld(&ctx(PageType::Home, &site));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["@type"], "WebSite");
        assert_eq!(blocks[0]["name"], site.brand.as_str());
        assert_eq!(blocks[0]["inLanguage"], "en-US");
        assert_eq!(blocks[0]["@context"], "https://schema.org");
    }

    #[test]
    fn test_blog_post_is_article_with_breadcrumbs() {
        let site = SiteConfig::default();
        let blocks = page_json_ld(&ctx(PageType::BlogPost, &site));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["@type"], "Article");
        assert_eq!(blocks[0]["headline"], "A Title");
        assert_eq!(blocks[0]["author"]["@type"], "Organization");
        assert_eq!(blocks[1]["@type"], "BreadcrumbList");
        assert_eq!(blocks[1]["itemListElement"][0]["item"], "https://www.usbdevicefix.com/");
        assert_eq!(blocks[1]["itemListElement"][1]["name"], "Blog");
    }

    #[test]
    fn test_faq_lists_every_question() {
        let site = SiteConfig::default();
        let blocks = page_json_ld(&ctx(PageType::Faq, &site));
        assert_eq!(blocks[0]["@type"], "FAQPage");
        let questions = blocks[0]["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), FAQ_ENTRIES.len());
        assert_eq!(questions[0]["@type"], "Question");
        assert_eq!(questions[0]["acceptedAnswer"]["@type"], "Answer");
    }

    #[test]
    fn test_other_pages_use_their_schema_type() {
        let site = SiteConfig::default();
        let blocks = page_json_ld(&ctx(PageType::Contact, &site));
        assert_eq!(blocks[0]["@type"], "ContactPage");
        assert_eq!(blocks[0]["name"], "A Title");
    }
}
