//! HTML `<head>` rendering for generated metadata.

use super::PageMetadata;
use crate::utils::escape_html;

/// Renders metadata as head tags, one per line.
///
/// Emits, in order: `<title>`, meta description, canonical link, hreflang
/// alternates, and one `application/ld+json` script per JSON-LD block.
/// Text and attribute values are HTML-escaped; `<` inside JSON-LD is written
/// as `\u003c` so a string can never close the script element.
pub fn render_head(meta: &PageMetadata) -> String {
    let mut lines = Vec::with_capacity(3 + meta.alternates.len() + meta.json_ld.len());
    lines.push(format!("<title>{}</title>", escape_html(&meta.title)));
    lines.push(format!(
        r#"<meta name="description" content="{}">"#,
        escape_html(&meta.description)
    ));
    lines.push(format!(
        r#"<link rel="canonical" href="{}">"#,
        escape_html(&meta.canonical_url)
    ));
    for alt in &meta.alternates {
        lines.push(format!(
            r#"<link rel="alternate" hreflang="{}" href="{}">"#,
            escape_html(&alt.hreflang),
            escape_html(&alt.href)
        ));
    }
    for block in &meta.json_ld {
        lines.push(format!(
            r#"<script type="application/ld+json">{}</script>"#,
            block.to_string().replace('<', "\\u003c")
        ));
    }
    lines.join("\n")
}
