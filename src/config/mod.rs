//! Application configuration and constants.
//!
//! This module provides:
//! - SEO policy constants (length bands, density range, site defaults)
//! - Site configuration injected into the metadata generators
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    AuditCommand, Cli, Command, DensityCommand, FitCommand, FitKind, LogFormat, LogLevel,
    MetaCommand, SiteConfig,
};
