//! Aggregate counts across the reports of one run.

use crate::error_handling::ProcessingStats;
use crate::lookup::{ResolverReport, ResolverVerdict};

/// Totals over every resolver report of a diagnostics run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsSummary {
    pub reports: usize,
    pub consistent: usize,
    pub inconsistent: usize,
    pub no_cache_detected: usize,
    pub successful_lookups: usize,
    pub failed_lookups: usize,
    pub stats: ProcessingStats,
}

impl DiagnosticsSummary {
    pub fn record(&mut self, report: &ResolverReport) {
        self.reports += 1;
        match report.verdict {
            ResolverVerdict::NoCacheDetected => self.no_cache_detected += 1,
            ResolverVerdict::Consistent => self.consistent += 1,
            ResolverVerdict::Inconsistent { .. } => self.inconsistent += 1,
        }
        self.successful_lookups += report.success_count();
        self.failed_lookups += report.failure_count();
        self.stats.merge(&report.stats);
    }

    /// True when at least one report ran and every report found a consistent cache.
    pub fn all_consistent(&self) -> bool {
        self.consistent > 0 && self.inconsistent == 0 && self.no_cache_detected == 0
    }
}
