//! Keyword density measurement.
//!
//! Density is the share of words in a text that start an exact, case-insensitive
//! occurrence of a phrase. Matching is done over whitespace-separated words, so a
//! phrase never matches inside a longer word ("usb" does not match "usbc").

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::{OPTIMAL_DENSITY_MAX, OPTIMAL_DENSITY_MIN};

/// Occurrences and density of one phrase in one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityResult {
    /// The phrase as the caller supplied it
    pub keyword: String,
    /// Number of exact word-window matches
    pub count: usize,
    /// `count / total_words * 100`, or 0 for an empty text
    pub density: f64,
}

/// Where a density sits relative to the optimal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DensityRating {
    /// Below the optimal range
    Under,
    /// Inside the optimal range
    Optimal,
    /// Above the optimal range (keyword stuffing)
    Over,
}

/// Splits on whitespace and lowercases each word.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Counts windows of `words` equal to the tokenized `phrase`.
fn count_in(words: &[String], phrase: &[String]) -> usize {
    if phrase.is_empty() || words.len() < phrase.len() {
        return 0;
    }
    words
        .windows(phrase.len())
        .filter(|window| *window == phrase)
        .count()
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64) * 100.0
}

fn measure(words: &[String], phrase: &str) -> DensityResult {
    let count = count_in(words, &tokenize(phrase));
    DensityResult {
        keyword: phrase.to_string(),
        count,
        density: percentage(count, words.len()),
    }
}

/// Number of exact, case-insensitive occurrences of `phrase` in `text`.
pub fn count_matches(text: &str, phrase: &str) -> usize {
    count_in(&tokenize(text), &tokenize(phrase))
}

/// Density of `phrase` in `text`, in percent.
///
/// Returns 0 for an empty text or an empty phrase.
///
/// # Examples
///
/// ```
/// use seo_kit::density;
///
/// let d = density("USB is not recognized. USB fails.", "USB");
/// assert!((d - 33.333).abs() < 0.01);
/// assert_eq!(density("USBC cable only", "USB"), 0.0);
/// ```
pub fn density(text: &str, phrase: &str) -> f64 {
    let words = tokenize(text);
    let count = count_in(&words, &tokenize(phrase));
    percentage(count, words.len())
}

/// One [`DensityResult`] per phrase, in the order given.
///
/// Duplicate phrases are kept and measured independently.
pub fn analyze_all<S: AsRef<str>>(text: &str, phrases: &[S]) -> Vec<DensityResult> {
    let words = tokenize(text);
    log::debug!(
        "Analyzing {} phrases over {} words",
        phrases.len(),
        words.len()
    );
    phrases
        .iter()
        .map(|phrase| measure(&words, phrase.as_ref()))
        .collect()
}

/// Whether `density` is within the optimal range (1% to 4%, both inclusive).
pub fn is_optimal(density: f64) -> bool {
    (OPTIMAL_DENSITY_MIN..=OPTIMAL_DENSITY_MAX).contains(&density)
}

/// Rates `density` against the optimal range.
pub fn classify(density: f64) -> DensityRating {
    if is_optimal(density) {
        DensityRating::Optimal
    } else if density > OPTIMAL_DENSITY_MAX {
        DensityRating::Over
    } else {
        DensityRating::Under
    }
}
