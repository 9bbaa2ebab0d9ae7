//! Text cleanup for user-supplied copy and HTML output.
//!
//! Custom titles and descriptions arrive from CMS fields and CLI flags, so they
//! may carry stray control characters or line breaks. Everything emitted into
//! HTML attributes goes through [`escape_html`].

/// Removes control characters and collapses whitespace runs to single spaces.
///
/// Newlines and tabs count as whitespace, so multi-line input becomes one line.
/// Leading and trailing whitespace is trimmed.
///
/// # Arguments
///
/// * `text` - The text to sanitize
pub fn sanitize_text(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes the five HTML-significant characters.
///
/// Safe for both element text and double- or single-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
