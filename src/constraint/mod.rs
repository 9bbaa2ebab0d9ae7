//! Length fitting for SEO text fields.
//!
//! Titles and meta descriptions have a length window that search engines
//! display without rewriting. This module pads short copy with a brand or
//! keyword suffix and truncates long copy with an ellipsis so it lands inside
//! a [`ConstraintBand`].
//!
//! All lengths are counted in `char`s, so multi-byte text is never split
//! mid-character.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, ELLIPSIS, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::error_handling::SeoError;

/// Band for `<title>` text.
pub const TITLE_BAND: ConstraintBand = ConstraintBand {
    min: TITLE_MIN_LENGTH,
    max: TITLE_MAX_LENGTH,
};

/// Band for `<meta name="description">` content.
pub const DESCRIPTION_BAND: ConstraintBand = ConstraintBand {
    min: DESCRIPTION_MIN_LENGTH,
    max: DESCRIPTION_MAX_LENGTH,
};

/// Inclusive `[min, max]` character-length target.
///
/// Fields are public so bands can be written as literals; [`fit`] validates
/// them anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintBand {
    /// Minimum length in characters
    pub min: usize,
    /// Maximum length in characters
    pub max: usize,
}

impl ConstraintBand {
    /// Creates a band, rejecting `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, SeoError> {
        let band = ConstraintBand { min, max };
        band.validate()?;
        Ok(band)
    }

    /// Creates a band from signed bounds, as they arrive from CLI flags or
    /// untyped config. Negative bounds are rejected.
    pub fn from_signed(min: i64, max: i64) -> Result<Self, SeoError> {
        let min = usize::try_from(min).map_err(|_| {
            SeoError::InvalidArgument(format!("band min must be non-negative, got {min}"))
        })?;
        let max = usize::try_from(max).map_err(|_| {
            SeoError::InvalidArgument(format!("band max must be non-negative, got {max}"))
        })?;
        Self::new(min, max)
    }

    /// Checks `min <= max`.
    pub fn validate(&self) -> Result<(), SeoError> {
        if self.min > self.max {
            return Err(SeoError::InvalidArgument(format!(
                "band min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Whether `text` already fits.
    pub fn contains(&self, text: &str) -> bool {
        let len = text.chars().count();
        self.min <= len && len <= self.max
    }
}

/// What [`fit_with_outcome`] did to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FitOutcome {
    /// Already inside the band
    Unchanged,
    /// Suffix appended to reach the minimum
    Padded,
    /// Cut down to the maximum
    Truncated,
}

/// Fits `text` into `band`.
///
/// - Longer than `band.max`: the first `band.max - 3` characters plus `"..."`.
///   When `band.max < 3` the text is cut to `band.max` with no ellipsis.
/// - Shorter than `band.min`: `" " + padding_suffix` is appended until the
///   minimum is reached; if that overshoots `band.max`, the overflow rule applies.
/// - Otherwise returned unchanged.
///
/// The result always satisfies `band.min <= len <= band.max`, and fitting an
/// already fitted string is a no-op.
///
/// # Errors
///
/// `SeoError::InvalidArgument` if `band.min > band.max`.
///
/// # Examples
///
/// ```
/// use seo_kit::{fit, ConstraintBand};
///
/// let band = ConstraintBand::new(0, 10).unwrap();
/// assert_eq!(fit(&"a".repeat(100), band, "x").unwrap(), "aaaaaaa...");
/// ```
pub fn fit(text: &str, band: ConstraintBand, padding_suffix: &str) -> Result<String, SeoError> {
    fit_with_outcome(text, band, padding_suffix).map(|(fitted, _)| fitted)
}

/// Like [`fit`], but also reports whether the text was padded or truncated.
pub fn fit_with_outcome(
    text: &str,
    band: ConstraintBand,
    padding_suffix: &str,
) -> Result<(String, FitOutcome), SeoError> {
    band.validate()?;

    let len = text.chars().count();
    if len > band.max {
        log::debug!("Truncating {} chars to band max {}", len, band.max);
        return Ok((truncate_with_ellipsis(text, band.max), FitOutcome::Truncated));
    }
    if len >= band.min {
        return Ok((text.to_string(), FitOutcome::Unchanged));
    }

    let mut padded = String::with_capacity(text.len() + padding_suffix.len() + 1);
    padded.push_str(text);
    let mut padded_len = len;
    // Each round adds at least the separator, so this always terminates.
    while padded_len < band.min {
        padded.push(' ');
        padded.push_str(padding_suffix);
        padded_len += 1 + padding_suffix.chars().count();
    }
    log::debug!(
        "Padded {} chars to {} (band {}..={})",
        len,
        padded_len,
        band.min,
        band.max
    );

    if padded_len > band.max {
        Ok((truncate_with_ellipsis(&padded, band.max), FitOutcome::Padded))
    } else {
        Ok((padded, FitOutcome::Padded))
    }
}

/// [`fit`] with [`TITLE_BAND`].
pub fn fit_title(text: &str, brand: &str) -> Result<String, SeoError> {
    fit(text, TITLE_BAND, brand)
}

/// [`fit`] with [`DESCRIPTION_BAND`].
pub fn fit_description(text: &str, tagline: &str) -> Result<String, SeoError> {
    fit(text, DESCRIPTION_BAND, tagline)
}

/// Cuts `text` to exactly `max` characters, ending in `"..."` when there is
/// room for one. Callers guarantee `text` is longer than `max`.
fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let ellipsis_len = ELLIPSIS.chars().count();
    if max < ellipsis_len {
        return text.chars().take(max).collect();
    }
    let mut head: String = text.chars().take(max - ellipsis_len).collect();
    head.push_str(ELLIPSIS);
    head
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
