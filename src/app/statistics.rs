//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};
use crate::report::DiagnosticsSummary;

/// Prints a one-line summary of the run.
pub fn print_summary(summary: &DiagnosticsSummary) {
    info!(
        "Ran {} resolver report{} ({} consistent, {} inconsistent, {} without cache): {} successful and {} failed lookups",
        summary.reports,
        if summary.reports == 1 { "" } else { "s" },
        summary.consistent,
        summary.inconsistent,
        summary.no_cache_detected,
        summary.successful_lookups,
        summary.failed_lookups
    );
    print_error_statistics(&summary.stats);
}

/// Prints failure counts per category to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Failure Counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}
