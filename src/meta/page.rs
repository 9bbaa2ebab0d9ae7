//! Page types and their default copy.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::Language;
use crate::error_handling::SeoError;

/// Kinds of page the site renders.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PageType {
    /// Landing page
    Home,
    /// Step-by-step troubleshooting guide
    Guide,
    /// Blog index
    Blog,
    /// Single blog article
    BlogPost,
    /// Frequently asked questions
    Faq,
    /// About the site
    About,
    /// Contact form
    Contact,
    /// Privacy policy
    Privacy,
}

/// Default title and description for one page in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCopy {
    /// Title before fitting
    pub title: &'static str,
    /// Description before fitting
    pub description: &'static str,
}

const fn copy(title: &'static str, description: &'static str) -> PageCopy {
    PageCopy { title, description }
}

impl PageType {
    /// Parses a page type name (`home`, `blog_post`, ...).
    ///
    /// Hyphens are accepted in place of underscores, so `blog-post` works
    /// on the command line.
    ///
    /// # Errors
    ///
    /// `SeoError::UnknownPageType` if the name matches no page type.
    pub fn from_name(name: &str) -> Result<Self, SeoError> {
        name.trim()
            .replace('-', "_")
            .parse()
            .map_err(|_| SeoError::UnknownPageType(name.to_string()))
    }

    /// Path the page is served at in the default language.
    pub fn default_path(self) -> &'static str {
        match self {
            PageType::Home => "/",
            PageType::Guide => "/guide",
            PageType::Blog => "/blog",
            PageType::BlogPost => "/blog/usb-device-not-recognized",
            PageType::Faq => "/faq",
            PageType::About => "/about",
            PageType::Contact => "/contact",
            PageType::Privacy => "/privacy",
        }
    }

    /// Short name used in breadcrumbs.
    pub fn label(self) -> &'static str {
        match self {
            PageType::Home => "Home",
            PageType::Guide => "Guide",
            PageType::Blog | PageType::BlogPost => "Blog",
            PageType::Faq => "FAQ",
            PageType::About => "About",
            PageType::Contact => "Contact",
            PageType::Privacy => "Privacy Policy",
        }
    }

    /// schema.org type describing the page itself.
    pub fn schema_type(self) -> &'static str {
        match self {
            PageType::Home => "WebSite",
            PageType::Guide | PageType::BlogPost => "Article",
            PageType::Blog => "Blog",
            PageType::Faq => "FAQPage",
            PageType::About => "AboutPage",
            PageType::Contact => "ContactPage",
            PageType::Privacy => "WebPage",
        }
    }

    /// Default copy in `language`.
    ///
    /// Only the home page is translated; other pages fall back to English.
    pub fn default_copy(self, language: Language) -> PageCopy {
        match (self, language) {
            (PageType::Home, Language::Es) => copy(
                "Dispositivo USB no reconocido: soluciones paso a paso",
                "Aprende a reparar dispositivos USB que Windows, Mac o Linux no reconocen: controladores, puertos, concentradores y configuración de energía explicados paso a paso.",
            ),
            (PageType::Home, Language::Fr) => copy(
                "Périphérique USB non reconnu : solutions pas à pas",
                "Réparez les périphériques USB non reconnus sous Windows, Mac ou Linux : pilotes, ports, concentrateurs et gestion de l'alimentation expliqués étape par étape.",
            ),
            (PageType::Home, Language::De) => copy(
                "USB-Gerät nicht erkannt: Lösungen Schritt für Schritt",
                "So beheben Sie nicht erkannte USB-Geräte unter Windows, Mac und Linux: Treiber, Anschlüsse, Hubs und Energieverwaltung Schritt für Schritt erklärt.",
            ),
            (PageType::Home, Language::Pt) => copy(
                "Dispositivo USB não reconhecido: soluções passo a passo",
                "Saiba como corrigir dispositivos USB que o Windows, Mac ou Linux não reconhecem: drivers, portas, hubs e gerenciamento de energia explicados passo a passo.",
            ),
            (PageType::Home, _) => copy(
                "USB Device Not Recognized? Step-by-Step Fixes",
                "Fix USB devices that Windows, Mac or Linux won't recognize. Driver reinstalls, port checks, hub resets and power settings explained step by step.",
            ),
            (PageType::Guide, _) => copy(
                "Complete USB Troubleshooting Guide",
                "A complete USB troubleshooting guide: check cables and ports, reinstall the USB driver, reset the USB root hub and turn off power management.",
            ),
            (PageType::Blog, _) => copy(
                "USB Troubleshooting Blog",
                "Articles on USB driver problems, device descriptor errors, external drives that disappear and ports that stop working after updates.",
            ),
            (PageType::BlogPost, _) => copy(
                "How to Fix USB Device Not Recognized in Windows 11",
                "Windows 11 says USB device not recognized? Work through these fixes in order: replug, change port, update the driver, and disable USB selective suspend.",
            ),
            (PageType::Faq, _) => copy(
                "USB Problems: Frequently Asked Questions",
                "Answers to common questions about USB devices that are not recognized, keep disconnecting, charge but don't transfer data, or fail after a driver update.",
            ),
            (PageType::About, _) => copy(
                "About USB Device Fix",
                "Who writes these USB troubleshooting guides, how each fix is tested on real hardware, and how we keep the instructions current.",
            ),
            (PageType::Contact, _) => copy(
                "Contact Us",
                "Still stuck with a USB device that won't connect? Send us your device model and operating system and we'll point you to the right fix.",
            ),
            (PageType::Privacy, _) => copy(
                "Privacy Policy",
                "How USB Device Fix handles analytics, cookies and the information you send through the contact and feedback forms.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_page_has_copy_in_every_language() {
        for page in PageType::iter() {
            for lang in Language::iter() {
                let c = page.default_copy(lang);
                assert!(!c.title.is_empty(), "{page} {lang} has no title");
                assert!(!c.description.is_empty(), "{page} {lang} has no description");
            }
        }
    }

    #[test]
    fn test_untranslated_pages_fall_back_to_english() {
        assert_eq!(
            PageType::Faq.default_copy(Language::De),
            PageType::Faq.default_copy(Language::En)
        );
        assert_ne!(
            PageType::Home.default_copy(Language::De),
            PageType::Home.default_copy(Language::En)
        );
    }

    #[test]
    fn test_default_paths_are_absolute() {
        for page in PageType::iter() {
            assert!(page.default_path().starts_with('/'));
        }
    }

    #[test]
    fn test_page_type_parses_from_snake_case() {
        assert_eq!("blog_post".parse::<PageType>().unwrap(), PageType::BlogPost);
        assert_eq!(PageType::Faq.to_string(), "faq");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PageType::from_name(" guide ").unwrap(), PageType::Guide);
        assert_eq!(PageType::from_name("blog-post").unwrap(), PageType::BlogPost);
        assert_eq!(
            PageType::from_name("landing"),
            Err(SeoError::UnknownPageType("landing".to_string()))
        );
    }
}
