//! Audit warning tracking.
//!
//! Counts the warnings raised while auditing a single page. Unlike a long-lived
//! metrics registry, a tracker is created per audit and dropped with its report.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::types::WarningType;

/// Per-audit warning counters.
///
/// Every [`WarningType`] is initialized to zero on creation, so lookups never miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStats {
    warnings: BTreeMap<WarningType, usize>,
}

impl AuditStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let warnings = WarningType::iter().map(|w| (w, 0)).collect();
        AuditStats { warnings }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&mut self, warning: WarningType) {
        *self.warnings.entry(warning).or_insert(0) += 1;
        log::debug!("Audit warning: {}", warning);
    }

    /// Get the count for a specific warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(&warning).copied().unwrap_or(0)
    }

    /// Sum of all warning counters.
    pub fn total_warnings(&self) -> usize {
        self.warnings.values().sum()
    }

    /// Warnings with a non-zero count, in declaration order.
    pub fn raised(&self) -> Vec<(WarningType, usize)> {
        self.warnings
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(w, count)| (*w, *count))
            .collect()
    }
}

impl Default for AuditStats {
    fn default() -> Self {
        Self::new()
    }
}
