//! Error handling and audit statistics.
//!
//! This module provides:
//! - Error type definitions (`SeoError`, `InitializationError`)
//! - Audit warning types and per-audit counters
//!
//! Findings are categorized into:
//! - **Errors**: Caller contract violations that abort the operation
//! - **Warnings**: Content problems that an audit reports but tolerates

mod stats;
mod types;

// Re-export public API
pub use stats::AuditStats;
pub use types::{InitializationError, SeoError, WarningType};
