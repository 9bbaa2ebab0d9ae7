//! Rule-based keyword variations.

use std::collections::BTreeSet;

/// Substring rewrites: each pattern maps to the replacements produced when it
/// occurs. Only the first occurrence is replaced.
const REWRITES: &[(&str, &[&str])] = &[
    ("recognition", &["recognize", "recognizing"]),
    ("not recognized", &["not detected", "not working"]),
];

/// Expands `base_keyword` into related phrasings.
///
/// Each rule is applied to the original keyword on its own and the results are
/// unioned; rules are never chained.
///
/// 1. A plural (`+ "s"`) unless the keyword already ends in `s`.
/// 2. `"recognition"` replaced by `"recognize"` and by `"recognizing"`.
/// 3. `"not recognized"` replaced by `"not detected"` and by `"not working"`.
///
/// The original keyword is not included unless a rule happens to reproduce it.
///
/// # Examples
///
/// ```
/// use seo_kit::generate_variations;
///
/// let variations = generate_variations("USB device not recognized");
/// assert!(variations.contains("USB device not detected"));
/// assert!(variations.contains("USB device not working"));
/// ```
pub fn generate_variations(base_keyword: &str) -> BTreeSet<String> {
    let mut variations = BTreeSet::new();

    if !base_keyword.ends_with('s') {
        variations.insert(format!("{base_keyword}s"));
    }

    for (pattern, replacements) in REWRITES {
        if base_keyword.contains(pattern) {
            for replacement in *replacements {
                variations.insert(base_keyword.replacen(pattern, replacement, 1));
            }
        }
    }

    log::debug!(
        "Generated {} variations for '{}'",
        variations.len(),
        base_keyword
    );
    variations
}
