//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_BRAND, DEFAULT_ORGANIZATION, DEFAULT_TAGLINE,
};
use crate::constraint::{ConstraintBand, DESCRIPTION_BAND, TITLE_BAND};
use crate::error_handling::SeoError;
use crate::keywords::KeywordCategory;
use crate::meta::{Language, PageType};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Site-wide settings injected into the metadata generators.
///
/// Page generators never read globals; everything site-specific comes through here.
///
/// # Examples
///
/// ```
/// use seo_kit::SiteConfig;
///
/// let site = SiteConfig {
///     base_url: "https://staging.example.com".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(site.brand, "USB Device Fix");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Canonical origin, e.g. `https://www.usbdevicefix.com`
    pub base_url: String,
    /// Brand name, used to pad short titles
    pub brand: String,
    /// Tagline, used to pad short descriptions
    pub tagline: String,
    /// Publisher name for JSON-LD
    pub organization: String,
    /// Language served without a path prefix and used for `x-default`
    pub default_language: Language,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            brand: DEFAULT_BRAND.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            default_language: Language::En,
        }
    }
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "seo_kit",
    version,
    about = "Fit SEO titles and descriptions, analyze keyword density, and generate page metadata"
)]
pub struct Cli {
    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pad or truncate text to fit a title or description band
    Fit(FitCommand),
    /// Compute keyword density for the given phrases
    Density(DensityCommand),
    /// Print rule-based variations of a keyword
    Variations {
        /// Base keyword phrase
        keyword: String,
    },
    /// Audit a page against the keyword catalog
    Audit(AuditCommand),
    /// Render head tags (title, description, hreflang, JSON-LD) for a page
    Meta(MetaCommand),
    /// List the keyword catalog
    Keywords {
        /// Only list keywords in this category
        #[arg(long, value_enum)]
        category: Option<KeywordCategory>,
    },
}

/// Which predefined band `fit` starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FitKind {
    /// Page title band
    Title,
    /// Meta description band
    Description,
}

impl FitKind {
    /// Predefined band for this kind.
    pub fn band(self) -> ConstraintBand {
        match self {
            FitKind::Title => TITLE_BAND,
            FitKind::Description => DESCRIPTION_BAND,
        }
    }

    /// Default padding suffix for this kind.
    pub fn default_suffix(self) -> &'static str {
        match self {
            FitKind::Title => DEFAULT_BRAND,
            FitKind::Description => DEFAULT_TAGLINE,
        }
    }
}

/// Options for `seo_kit fit`.
#[derive(Debug, Args)]
pub struct FitCommand {
    /// Text to fit
    pub text: String,

    /// Predefined band to start from
    #[arg(long, value_enum, default_value_t = FitKind::Title)]
    pub kind: FitKind,

    /// Override the band minimum (characters)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Override the band maximum (characters)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Phrase appended when the text is too short
    #[arg(long)]
    pub suffix: Option<String>,
}

impl FitCommand {
    /// Resolves the band from `--kind` plus any `--min`/`--max` overrides.
    ///
    /// # Errors
    ///
    /// Returns `SeoError::InvalidArgument` if a bound is negative or `min > max`.
    pub fn band(&self) -> Result<ConstraintBand, SeoError> {
        let base = self.kind.band();
        let min = self.min.unwrap_or(base.min as i64);
        let max = self.max.unwrap_or(base.max as i64);
        ConstraintBand::from_signed(min, max)
    }

    /// Padding suffix: `--suffix` if given, otherwise the kind's default.
    pub fn suffix(&self) -> &str {
        self.suffix
            .as_deref()
            .unwrap_or_else(|| self.kind.default_suffix())
    }
}

/// Options for `seo_kit density`.
#[derive(Debug, Args)]
pub struct DensityCommand {
    /// File to read (`-` for stdin)
    pub input: PathBuf,

    /// Keyword phrase to measure (repeatable)
    #[arg(long = "keyword", short = 'k', required = true)]
    pub keywords: Vec<String>,

    /// Treat input as HTML and analyze only its visible text
    #[arg(long)]
    pub html: bool,

    /// Output JSON lines instead of tab-separated text
    #[arg(long)]
    pub json: bool,
}

/// Options for `seo_kit audit`.
#[derive(Debug, Args)]
pub struct AuditCommand {
    /// File to read (`-` for stdin)
    pub input: PathBuf,

    /// Treat input as HTML (also checks title and meta description)
    #[arg(long)]
    pub html: bool,

    /// Output a JSON document instead of text
    #[arg(long)]
    pub json: bool,
}

/// Options for `seo_kit meta`.
#[derive(Debug, Args)]
pub struct MetaCommand {
    /// Page type to generate metadata for
    #[arg(long, value_parser = PageType::from_name)]
    pub page: PageType,

    /// Language code (e.g. `en`, `es`)
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Page path, defaults to the page type's usual path
    #[arg(long)]
    pub path: Option<String>,

    /// Custom title (still fitted to the title band)
    #[arg(long)]
    pub title: Option<String>,

    /// Custom description (still fitted to the description band)
    #[arg(long)]
    pub description: Option<String>,

    /// Site base URL
    #[arg(long, env = BASE_URL_ENV_VAR, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Print the metadata as JSON instead of HTML tags
    #[arg(long)]
    pub json: bool,
}
