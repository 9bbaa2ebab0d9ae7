//! Configuration constants.
//!
//! This module defines the fixed SEO policy values used throughout the library:
//! length bands for generated text, the optimal keyword density range, and the
//! site defaults used when no `SiteConfig` overrides are supplied.

// Length bands (in characters, not bytes)
/// Minimum title length. Shorter titles waste SERP space.
pub const TITLE_MIN_LENGTH: usize = 30;
/// Maximum title length before search engines start truncating in results.
pub const TITLE_MAX_LENGTH: usize = 60;
/// Minimum meta description length.
pub const DESCRIPTION_MIN_LENGTH: usize = 120;
/// Maximum meta description length before snippets get cut off.
pub const DESCRIPTION_MAX_LENGTH: usize = 160;

/// Marker appended to text that was cut to fit its band.
pub const ELLIPSIS: &str = "...";

// Keyword density policy
/// Lower bound (inclusive) of the optimal keyword density, in percent.
pub const OPTIMAL_DENSITY_MIN: f64 = 1.0;
/// Upper bound (inclusive) of the optimal keyword density, in percent.
/// Anything above this reads as keyword stuffing.
pub const OPTIMAL_DENSITY_MAX: f64 = 4.0;

// Site defaults
/// Canonical origin of the site. Override with `SEO_KIT_BASE_URL` or `--base-url`.
pub const DEFAULT_BASE_URL: &str = "https://www.usbdevicefix.com";
/// Brand name, used as the padding suffix for short titles.
pub const DEFAULT_BRAND: &str = "USB Device Fix";
/// Site tagline, used as the padding suffix for short descriptions.
pub const DEFAULT_TAGLINE: &str =
    "Step-by-step fixes for USB devices that are not recognized on Windows, Mac and Linux.";
/// Publisher name used in JSON-LD `publisher`/`author` blocks.
pub const DEFAULT_ORGANIZATION: &str = "USB Device Fix";

/// Language code emitted for the `x-default` hreflang alternate.
pub const HREFLANG_X_DEFAULT: &str = "x-default";

/// Pattern a language tag must match before it's looked up (`en`, `pt-BR`, ...).
pub const LANGUAGE_TAG_PATTERN: &str = r"^[a-z]{2}(-[A-Z]{2})?$";

/// schema.org context for JSON-LD blocks.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// Environment variable that overrides the site base URL.
pub const BASE_URL_ENV_VAR: &str = "SEO_KIT_BASE_URL";
